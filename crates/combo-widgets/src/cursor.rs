#![forbid(unsafe_code)]

//! Highlight cursor over a [`FilteredView`].
//!
//! All movement is pure: each operation takes the current view and cursor and
//! returns the new cursor. Movement wraps at both ends. An empty view always
//! yields [`Cursor::NONE`].

use crate::filter::FilteredView;

/// Position of the highlighted (not committed) option within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor(Option<usize>);

impl Cursor {
    /// Nothing highlighted.
    pub const NONE: Cursor = Cursor(None);

    /// Highlight view position `pos`.
    pub const fn at(pos: usize) -> Self {
        Self(Some(pos))
    }

    /// The highlighted view position.
    pub const fn position(self) -> Option<usize> {
        self.0
    }

    /// Whether nothing is highlighted.
    pub const fn is_none(self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<usize>> for Cursor {
    fn from(pos: Option<usize>) -> Self {
        Self(pos)
    }
}

/// Move down one entry, wrapping from the last entry (or from nothing) to the
/// first.
pub fn next(view: &FilteredView, cursor: Cursor) -> Cursor {
    let len = view.len();
    if len == 0 {
        return Cursor::NONE;
    }
    match cursor.0 {
        Some(pos) if pos + 1 < len => Cursor::at(pos + 1),
        _ => Cursor::at(0),
    }
}

/// Move up one entry, wrapping from the first entry (or from nothing) to the
/// last.
pub fn previous(view: &FilteredView, cursor: Cursor) -> Cursor {
    let len = view.len();
    if len == 0 {
        return Cursor::NONE;
    }
    match cursor.0 {
        Some(pos) if pos > 0 && pos < len => Cursor::at(pos - 1),
        _ => Cursor::at(len - 1),
    }
}

/// Jump to the first entry.
pub fn first(view: &FilteredView) -> Cursor {
    if view.is_empty() {
        Cursor::NONE
    } else {
        Cursor::at(0)
    }
}

/// Jump to the last entry.
pub fn last(view: &FilteredView) -> Cursor {
    match view.len() {
        0 => Cursor::NONE,
        len => Cursor::at(len - 1),
    }
}

/// Drop a cursor that no longer points inside `view`.
pub fn validate(view: &FilteredView, cursor: Cursor) -> Cursor {
    match cursor.0 {
        Some(pos) if pos < view.len() => cursor,
        _ => Cursor::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ComboOption};
    use crate::filter::filter;

    fn view_of(n: usize) -> FilteredView {
        let catalog: Catalog = (0..n)
            .map(|i| ComboOption::new(i.to_string(), format!("Option {i}")))
            .collect();
        filter(&catalog, "")
    }

    #[test]
    fn next_from_none_selects_first() {
        assert_eq!(next(&view_of(4), Cursor::NONE), Cursor::at(0));
    }

    #[test]
    fn next_wraps_at_end() {
        let view = view_of(4);
        assert_eq!(next(&view, Cursor::at(2)), Cursor::at(3));
        assert_eq!(next(&view, Cursor::at(3)), Cursor::at(0));
    }

    #[test]
    fn previous_from_none_selects_last() {
        assert_eq!(previous(&view_of(4), Cursor::NONE), Cursor::at(3));
    }

    #[test]
    fn previous_wraps_at_start() {
        let view = view_of(4);
        assert_eq!(previous(&view, Cursor::at(1)), Cursor::at(0));
        assert_eq!(previous(&view, Cursor::at(0)), Cursor::at(3));
    }

    #[test]
    fn stale_cursor_is_treated_as_none() {
        let view = view_of(2);
        assert_eq!(next(&view, Cursor::at(7)), Cursor::at(0));
        assert_eq!(previous(&view, Cursor::at(7)), Cursor::at(1));
        assert_eq!(validate(&view, Cursor::at(7)), Cursor::NONE);
        assert_eq!(validate(&view, Cursor::at(1)), Cursor::at(1));
    }

    #[test]
    fn home_end() {
        let view = view_of(4);
        assert_eq!(first(&view), Cursor::at(0));
        assert_eq!(last(&view), Cursor::at(3));
    }

    #[test]
    fn single_entry_cycles_to_itself() {
        let view = view_of(1);
        assert_eq!(next(&view, Cursor::at(0)), Cursor::at(0));
        assert_eq!(previous(&view, Cursor::at(0)), Cursor::at(0));
    }

    #[test]
    fn empty_view_yields_none_everywhere() {
        let view = view_of(0);
        assert!(next(&view, Cursor::at(0)).is_none());
        assert!(previous(&view, Cursor::NONE).is_none());
        assert!(first(&view).is_none());
        assert!(last(&view).is_none());
    }
}
