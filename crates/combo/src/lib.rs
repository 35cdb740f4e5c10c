#![forbid(unsafe_code)]

//! Accessible combobox: public facade crate.
//!
//! Re-exports the event model and the widget so hosts depend on one crate,
//! and offers a prelude for the common path:
//!
//! ```
//! use combo::prelude::*;
//!
//! let catalog: Catalog = [
//!     ComboOption::new("AL", "Alabama"),
//!     ComboOption::new("FL", "Florida"),
//! ]
//! .into_iter()
//! .collect();
//! let mut combobox = Combobox::new(ComboboxConfig::new("state-field"), catalog);
//! let boundary = RectBoundary::new(Rect::new(0, 0, 20, 1), 0);
//!
//! combobox.handle_event(&Event::key(KeyCode::Char('F')), &boundary);
//! assert_eq!(combobox.text(), "Florida");
//! assert_eq!(combobox.value(), "FL");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use combo_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use combo_core::geometry::Rect;

// --- Widget re-exports -----------------------------------------------------

pub use combo_widgets::{
    Catalog, ComboOption, Combobox, ComboboxAction, ComboboxConfig, ComboboxPersistState,
    ComboboxView, ConfigError, Cursor, FilteredView, InteractionBoundary, Markup, RawOption,
    RectBoundary, Role, StateKey, Stateful, Target, filter, match_prefix,
};

/// Standard result type for setup APIs.
pub type Result<T> = std::result::Result<T, ConfigError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Catalog, ComboOption, Combobox, ComboboxAction, ComboboxConfig, Event,
        InteractionBoundary, KeyCode, Rect, RectBoundary, Result, Stateful, Target,
    };

    pub use crate::{core, widgets};
}

pub use combo_core as core;
pub use combo_widgets as widgets;
