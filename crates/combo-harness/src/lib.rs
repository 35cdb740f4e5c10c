#![forbid(unsafe_code)]

//! Host-page simulator for end-to-end combobox tests.
//!
//! A [`Page`] hosts one [`Combobox`] the way a browser page would: it owns
//! focus, lays the widget out on a grid, turns user gestures (click, type,
//! tab) into input events, and answers the widget's hit-test and focus
//! queries through [`InteractionBoundary`](combo_widgets::InteractionBoundary).
//! Queries read the rendered [`ComboboxView`], never the widget internals, so
//! tests assert on what a user would see.
//!
//! # Quick Start
//!
//! ```
//! use combo_harness::{Page, fixtures};
//!
//! let mut page = Page::new(fixtures::states());
//! page.click_input();
//! page.send_keys("Flo");
//! assert_eq!(page.options(), ["Florida"]);
//! ```

pub mod fixtures;

use combo_core::event::{Event, KeyCode, PasteEvent};
use combo_core::geometry::Rect;
use combo_widgets::{Combobox, ComboboxAction, ComboboxView, RectBoundary};

// Re-export types useful for harness users.
pub use combo_core::event;
pub use combo_widgets as widgets;

/// Where the input sits on the page.
pub const INPUT_AREA: Rect = Rect::new(4, 2, 32, 1);

/// A point on the page that belongs to no widget.
pub const BODY_POINT: (u16, u16) = (70, 20);

/// Which page element holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The combobox input.
    Input,
    /// The page body (nothing focusable).
    Body,
}

/// Page hosting one combobox.
#[derive(Debug)]
pub struct Page {
    combobox: Combobox,
    focus: Focus,
    actions: Vec<ComboboxAction>,
}

impl Page {
    /// Load a page with `combobox`. Nothing is focused.
    pub fn new(combobox: Combobox) -> Self {
        Self {
            combobox,
            focus: Focus::Body,
            actions: Vec::new(),
        }
    }

    /// The hosted widget.
    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }

    /// Element holding focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Actions reported by the widget so far, oldest first.
    pub fn actions(&self) -> &[ComboboxAction] {
        &self.actions
    }

    /// Current layout of the widget. The list has one row per rendered
    /// option.
    pub fn layout(&self) -> RectBoundary {
        let rows = if self.combobox.is_open() {
            self.combobox.filtered().len()
        } else {
            0
        };
        RectBoundary::new(INPUT_AREA, rows).with_focus(self.focus == Focus::Input)
    }

    fn dispatch(&mut self, event: Event) {
        let boundary = self.layout();
        if let Some(action) = self.combobox.handle_event(&event, &boundary) {
            self.actions.push(action);
        }
    }

    fn move_focus(&mut self, to: Focus) {
        if self.focus == to {
            return;
        }
        self.focus = to;
        self.dispatch(Event::Focus(to == Focus::Input));
    }

    // --- Gestures ---

    /// Click the input.
    pub fn click_input(&mut self) {
        self.move_focus(Focus::Input);
        self.dispatch(Event::click(INPUT_AREA.x + 1, INPUT_AREA.y));
    }

    /// Click the rendered option whose text is `label`. Returns `false` if no
    /// such option is on screen.
    pub fn click_option(&mut self, label: &str) -> bool {
        let view = self.view();
        let Some(pos) = view.listbox.options.iter().position(|o| o.label == label) else {
            return false;
        };
        let Some(area) = self.layout().option_area(pos) else {
            return false;
        };
        self.dispatch(Event::click(area.x + 1, area.y));
        true
    }

    /// Click the page body.
    pub fn click_body(&mut self) {
        self.dispatch(Event::click(BODY_POINT.0, BODY_POINT.1));
        self.move_focus(Focus::Body);
    }

    /// Type `text` into the focused element, one key per char.
    pub fn send_keys(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Press one key. Keys only reach the widget when the input has focus;
    /// Tab also moves focus to the body.
    pub fn press(&mut self, code: KeyCode) {
        if self.focus == Focus::Input {
            self.dispatch(Event::key(code));
        }
        if matches!(code, KeyCode::Tab | KeyCode::BackTab) {
            self.move_focus(Focus::Body);
        }
    }

    /// Press Tab.
    pub fn tab(&mut self) {
        self.press(KeyCode::Tab);
    }

    /// Paste `text` into the focused input.
    pub fn paste(&mut self, text: &str) {
        if self.focus == Focus::Input {
            self.dispatch(Event::Paste(PasteEvent::bracketed(text)));
        }
    }

    // --- Queries ---

    /// Rendered description of the widget.
    pub fn view(&self) -> ComboboxView {
        self.combobox.view()
    }

    /// Rendered HTML.
    pub fn html(&self) -> String {
        self.view().to_html()
    }

    /// `aria-expanded` of the input.
    pub fn expanded(&self) -> bool {
        self.view().input.expanded
    }

    /// Text of every rendered option, in order.
    pub fn options(&self) -> Vec<String> {
        self.view()
            .listbox
            .options
            .into_iter()
            .map(|o| o.label)
            .collect()
    }

    /// Whether an option with text `label` is rendered.
    pub fn has_option(&self, label: &str) -> bool {
        self.view().option_by_text(label).is_some()
    }

    /// Markup of the rendered option with text `label`.
    pub fn option_markup(&self, label: &str) -> Option<String> {
        self.view()
            .option_by_text(label)
            .map(|o| o.content.as_str().to_owned())
    }

    /// Text of the option carrying the selected marker.
    pub fn selected_option(&self) -> Option<String> {
        self.view().selected_option().map(|o| o.label.clone())
    }

    /// Value of the visible input.
    pub fn input_value(&self) -> String {
        self.view().input.text
    }

    /// Value of the hidden field.
    pub fn hidden_value(&self) -> String {
        self.view().hidden.value
    }

    /// Id of the list container.
    pub fn listbox_id(&self) -> String {
        self.view().listbox.id
    }

    /// Form data the page would submit: hidden field name to value.
    pub fn submit(&self) -> serde_json::Value {
        let hidden = self.view().hidden;
        let mut form = serde_json::Map::new();
        form.insert(hidden.name, serde_json::Value::String(hidden.value));
        serde_json::Value::Object(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_need_focus() {
        let mut page = Page::new(fixtures::states());
        page.send_keys("Flo");
        assert_eq!(page.input_value(), "");
        assert!(!page.expanded());
    }

    #[test]
    fn click_input_focuses_and_opens() {
        let mut page = Page::new(fixtures::states());
        page.click_input();
        assert_eq!(page.focus(), Focus::Input);
        assert!(page.expanded());
        assert_eq!(page.actions(), &[ComboboxAction::Opened]);
    }

    #[test]
    fn layout_tracks_open_list() {
        let mut page = Page::new(fixtures::states());
        assert_eq!(page.layout().option_area(0), None);
        page.click_input();
        assert_eq!(page.layout().option_area(3), Some(Rect::new(4, 6, 32, 1)));
    }

    #[test]
    fn click_missing_option() {
        let mut page = Page::new(fixtures::states());
        assert!(!page.click_option("Alabama"));
        page.click_input();
        assert!(!page.click_option("Texas"));
    }

    #[test]
    fn submit_reports_hidden_field() {
        let mut page = Page::new(fixtures::states());
        page.click_input();
        page.click_option("Michigan");
        assert_eq!(page.submit(), serde_json::json!({ "state-field": "MI" }));
    }
}
