#![forbid(unsafe_code)]

//! Combobox interaction state machine.
//!
//! A [`Combobox`] owns the open/closed state, the live input text and the
//! committed option. The filtered view and the highlight cursor are derived:
//! recomputed on every edit and on open, discarded on close.
//!
//! # Transitions
//!
//! | Event | When | Effect |
//! |-------|------|--------|
//! | focus in, click on input | closed | open |
//! | insertion (char, paste) | any | refilter, type-ahead, open |
//! | deletion (Backspace, Delete) | any | refilter, clear highlight and value, open |
//! | Down / Up | any | open if needed, move highlight with wraparound |
//! | Home / End | open | highlight first / last |
//! | Enter | open, highlight set | commit highlighted, close |
//! | click on option | open | commit clicked, close |
//! | Escape, Tab, click outside, focus out | open | close, keep text and value |
//!
//! Every edit clears the committed value first. An insertion then highlights
//! a candidate and commits it provisionally: the prefix match if there is
//! one (its missing tail is appended to the text and left selected), else the
//! first visible option.
//!
//! Event handling is total. Unrecognised or inapplicable events return
//! `None` and leave the state untouched.

use combo_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use unicode_segmentation::UnicodeSegmentation;

use crate::autocomplete::match_prefix;
use crate::boundary::{InteractionBoundary, Target};
use crate::catalog::{Catalog, ComboOption};
use crate::config::ComboboxConfig;
use crate::cursor::{self, Cursor};
use crate::filter::{FilteredView, filter};
use crate::input::{InputChange, InputLine};

/// Outcome of a handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxAction {
    /// The list opened.
    Opened,
    /// The list closed without a commit.
    Dismissed,
    /// An option was committed and the list closed.
    Committed {
        /// Catalog position of the committed option.
        index: usize,
        /// The option's value, now in the hidden field.
        value: String,
    },
    /// The input text changed and the list was refiltered.
    Edited,
    /// The highlight moved.
    Highlighted,
}

/// An accessible combobox: text input, filterable option list, hidden field.
#[derive(Debug, Clone)]
pub struct Combobox {
    config: ComboboxConfig,
    catalog: Catalog,
    input: InputLine,
    open: bool,
    /// Catalog position of the committed option.
    committed: Option<usize>,
    view: FilteredView,
    cursor: Cursor,
}

impl Combobox {
    /// Create a combobox over `catalog`.
    ///
    /// A configured `value` commits the first option carrying it; an unknown
    /// value is ignored.
    pub fn new(config: ComboboxConfig, catalog: Catalog) -> Self {
        let mut combobox = Self {
            config,
            catalog,
            input: InputLine::new(),
            open: false,
            committed: None,
            view: FilteredView::default(),
            cursor: Cursor::NONE,
        };
        if let Some(value) = combobox.config.value.clone() {
            match combobox.catalog.position_of_value(&value) {
                Some(index) => combobox.lock_in(index),
                None => {
                    crate::warn!(
                        id = combobox.config.id.as_str(),
                        value = value.as_str(),
                        "prefilled combobox value not in catalog; ignored"
                    );
                }
            }
        }
        if combobox.config.open_by_default {
            combobox.open_list();
        }
        combobox
    }

    /// Build from JSON descriptions, degrading instead of failing.
    ///
    /// A malformed configuration or catalog is logged and replaced by a
    /// default, so the widget still renders with an unselectable list.
    #[cfg(feature = "serde")]
    pub fn from_json_lenient(config: &str, catalog: &str) -> Self {
        let config = ComboboxConfig::from_json(config).unwrap_or_else(|err| {
            crate::warn!(error = %err, "combobox configuration rejected; using defaults");
            ComboboxConfig::default()
        });
        let catalog = Catalog::from_json(catalog).unwrap_or_else(|err| {
            crate::warn!(
                id = config.id.as_str(),
                error = %err,
                "combobox catalog rejected; list is empty"
            );
            Catalog::default()
        });
        Self::new(config, catalog)
    }

    // --- Accessors ---

    /// Configuration.
    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    /// Option catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// The editable input line (caret and selection).
    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Hidden field value: the committed option's value, or empty.
    pub fn value(&self) -> &str {
        self.committed_option().map_or("", ComboOption::value)
    }

    /// Catalog position of the committed option.
    pub fn committed(&self) -> Option<usize> {
        self.committed
    }

    /// The committed option.
    pub fn committed_option(&self) -> Option<&ComboOption> {
        self.committed.and_then(|i| self.catalog.get(i))
    }

    /// Visible options. Empty while closed.
    pub fn filtered(&self) -> &FilteredView {
        &self.view
    }

    /// Highlight position within [`filtered`](Self::filtered).
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Catalog position of the highlighted option.
    pub fn highlighted(&self) -> Option<usize> {
        self.cursor.position().and_then(|pos| self.view.get(pos))
    }

    /// The highlighted option.
    pub fn highlighted_option(&self) -> Option<&ComboOption> {
        self.highlighted().and_then(|i| self.catalog.get(i))
    }

    // --- Programmatic control ---

    /// Open the list. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open_list();
        true
    }

    /// Close the list without committing. Returns `false` if it was already
    /// closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.close_list();
        true
    }

    /// Commit the option at catalog position `index` as if it had been
    /// clicked. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<ComboboxAction> {
        self.catalog.get(index)?;
        Some(self.commit(index))
    }

    // --- Event handling ---

    /// Apply one input event.
    ///
    /// `boundary` answers what a click landed on and whether focus left the
    /// widget.
    pub fn handle_event(
        &mut self,
        event: &Event,
        boundary: &impl InteractionBoundary,
    ) -> Option<ComboboxAction> {
        let _span = crate::debug_span!(
            "combobox_event",
            id = self.config.id.as_str(),
            open = self.open
        )
        .entered();

        match event {
            Event::Key(key) if key.is_actionable() => self.handle_key(key),
            Event::Paste(paste) => match self.input.insert_str(&paste.text) {
                InputChange::Inserted => Some(self.after_edit(true)),
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            }) => self.handle_click(boundary.hit_test(*x, *y)),
            Event::Focus(true) => self.open().then_some(ComboboxAction::Opened),
            Event::Focus(false) if self.open && !boundary.focus_within() => self.dismiss(),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<ComboboxAction> {
        match key.code {
            KeyCode::Escape | KeyCode::Tab | KeyCode::BackTab => self.dismiss(),
            KeyCode::Enter => {
                if !self.open {
                    return None;
                }
                let index = self.highlighted()?;
                Some(self.commit(index))
            }
            KeyCode::Down => {
                self.open();
                self.cursor = cursor::next(&self.view, self.cursor);
                Some(ComboboxAction::Highlighted)
            }
            KeyCode::Up => {
                self.open();
                self.cursor = cursor::previous(&self.view, self.cursor);
                Some(ComboboxAction::Highlighted)
            }
            KeyCode::Home if self.open => {
                self.cursor = cursor::first(&self.view);
                Some(ComboboxAction::Highlighted)
            }
            KeyCode::End if self.open => {
                self.cursor = cursor::last(&self.view);
                Some(ComboboxAction::Highlighted)
            }
            _ => match self.input.handle_key(key) {
                InputChange::Inserted => Some(self.after_edit(true)),
                InputChange::Deleted => Some(self.after_edit(false)),
                InputChange::Moved | InputChange::Unchanged => None,
            },
        }
    }

    fn handle_click(&mut self, target: Target) -> Option<ComboboxAction> {
        match target {
            Target::Input => self.open().then_some(ComboboxAction::Opened),
            Target::Option(pos) if self.open => {
                let index = self.view.get(pos)?;
                Some(self.commit(index))
            }
            Target::Option(_) | Target::List => None,
            Target::Outside => self.dismiss(),
        }
    }

    // --- Transitions ---

    /// Refilter after the text changed. `insertion` enables type-ahead.
    fn after_edit(&mut self, insertion: bool) -> ComboboxAction {
        self.committed = None;
        self.open = true;
        self.view = filter(&self.catalog, self.input.value());
        self.cursor = Cursor::NONE;
        crate::trace!(
            text = self.input.value(),
            visible = self.view.len(),
            "combobox refiltered"
        );

        if insertion && !self.input.value().is_empty() {
            self.type_ahead();
        }
        ComboboxAction::Edited
    }

    fn type_ahead(&mut self) {
        let prefix = match_prefix(&self.catalog, self.input.value())
            .filter(|found| self.view.position_of(found.index).is_some());
        let candidate = match prefix {
            Some(found) => {
                if self.input.caret_at_end() && !found.missing_suffix().is_empty() {
                    let key = found.option.match_key();
                    let typed = key[..found.matched_len].graphemes(true).count();
                    self.input.complete_with(key, typed);
                }
                Some(found.index)
            }
            None => self.view.get(0),
        };
        // Only a visible option may be highlighted and committed.
        let Some((index, pos)) =
            candidate.and_then(|index| self.view.position_of(index).map(|pos| (index, pos)))
        else {
            return;
        };
        self.cursor = Cursor::at(pos);
        self.committed = Some(index);
        crate::debug!(
            index,
            text = self.input.value(),
            "combobox type-ahead highlighted option"
        );
    }

    fn commit(&mut self, index: usize) -> ComboboxAction {
        self.lock_in(index);
        self.close_list();
        let value = self.value().to_owned();
        crate::debug!(index, value = value.as_str(), "combobox committed option");
        ComboboxAction::Committed { index, value }
    }

    /// Commit without touching the open state.
    fn lock_in(&mut self, index: usize) {
        if let Some(option) = self.catalog.get(index) {
            self.input.set_value(option.label());
            self.committed = Some(index);
        }
    }

    fn dismiss(&mut self) -> Option<ComboboxAction> {
        self.close().then_some(ComboboxAction::Dismissed)
    }

    fn open_list(&mut self) {
        self.view = filter(&self.catalog, self.input.value());
        self.cursor = self
            .committed
            .and_then(|index| self.view.position_of(index))
            .into();
        self.open = true;
        crate::debug!(visible = self.view.len(), "combobox opened");
    }

    fn close_list(&mut self) {
        self.open = false;
        self.view = FilteredView::default();
        self.cursor = Cursor::NONE;
        crate::debug!("combobox closed");
    }

    /// Replace text and committed option, then close. Used when restoring
    /// persisted state.
    pub(crate) fn reset_to(&mut self, text: &str, committed: Option<usize>) {
        self.input.set_value(text);
        self.committed = committed;
        self.close_list();
    }
}
