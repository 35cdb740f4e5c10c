#![forbid(unsafe_code)]

//! Outside-interaction detection.
//!
//! The combobox never inspects host state directly. The host implements
//! [`InteractionBoundary`] to say what a pointer landed on and whether focus
//! is still inside the widget; the state machine only consumes the answers.

use combo_core::geometry::Rect;

/// What a pointer position hit, from the combobox's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The text input.
    Input,
    /// A rendered option, by position in the filtered view.
    Option(usize),
    /// Inside the list container but not on an option.
    List,
    /// Anywhere else.
    Outside,
}

impl Target {
    /// Whether the target belongs to the widget.
    pub const fn is_inside(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Host capability answering hit tests and focus ownership.
pub trait InteractionBoundary {
    /// Classify a pointer position.
    fn hit_test(&self, x: u16, y: u16) -> Target;

    /// Whether focus currently rests on the input or the list.
    fn focus_within(&self) -> bool;
}

impl<B: InteractionBoundary + ?Sized> InteractionBoundary for &B {
    fn hit_test(&self, x: u16, y: u16) -> Target {
        (**self).hit_test(x, y)
    }

    fn focus_within(&self) -> bool {
        (**self).focus_within()
    }
}

/// Geometry-backed boundary: an input rectangle with the list directly
/// below it, one row per visible option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectBoundary {
    input: Rect,
    list: Rect,
    rows: usize,
    focused: bool,
}

impl RectBoundary {
    /// Lay out `rows` options under `input`. Pass zero rows while closed.
    pub fn new(input: Rect, rows: usize) -> Self {
        let height = u16::try_from(rows).unwrap_or(u16::MAX);
        Self {
            input,
            list: input.below(height),
            rows,
            focused: false,
        }
    }

    /// Use an explicit list area (builder). Rows past `rows` are empty list
    /// space.
    #[must_use]
    pub fn with_list(mut self, list: Rect) -> Self {
        self.list = list;
        self
    }

    /// Set whether focus is inside the widget (builder).
    #[must_use]
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Update focus ownership.
    pub fn set_focus_within(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Input rectangle.
    pub fn input(&self) -> Rect {
        self.input
    }

    /// List rectangle.
    pub fn list(&self) -> Rect {
        self.list
    }

    /// Rectangle of the option at view position `pos`.
    pub fn option_area(&self, pos: usize) -> Option<Rect> {
        if pos >= self.rows {
            return None;
        }
        self.list.row(pos)
    }

    /// Smallest rectangle covering the input and the list.
    pub fn area(&self) -> Rect {
        if self.list.is_empty() {
            self.input
        } else {
            self.input.union(&self.list)
        }
    }
}

impl InteractionBoundary for RectBoundary {
    fn hit_test(&self, x: u16, y: u16) -> Target {
        if self.input.contains(x, y) {
            return Target::Input;
        }
        match self.list.row_at(x, y) {
            Some(row) if row < self.rows => Target::Option(row),
            Some(_) => Target::List,
            None => Target::Outside,
        }
    }

    fn focus_within(&self) -> bool {
        self.focused
    }
}
