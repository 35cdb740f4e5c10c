#![forbid(unsafe_code)]

//! Accessible combobox widget.
//!
//! A text input paired with a filterable, keyboard-navigable option list and
//! a hidden form field holding the committed option's value.
//!
//! Leaf-first: [`catalog`] holds the options, [`filter`] and [`autocomplete`]
//! match text against them, [`cursor`] moves the highlight, and
//! [`combobox`] drives all of it from input events. [`view`] is the render
//! step.

pub mod autocomplete;
pub mod boundary;
pub mod catalog;
pub mod combobox;
pub mod config;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod input;
pub mod stateful;
pub mod view;

pub use autocomplete::{PrefixMatch, match_prefix};
pub use boundary::{InteractionBoundary, RectBoundary, Target};
pub use catalog::{Catalog, ComboOption, Markup, RawOption};
pub use combobox::{Combobox, ComboboxAction};
pub use config::ComboboxConfig;
pub use cursor::Cursor;
pub use error::ConfigError;
pub use filter::{FilteredView, filter};
pub use input::{InputChange, InputLine};
pub use stateful::{ComboboxPersistState, StateKey, Stateful};
pub use view::{ComboboxView, HiddenFieldView, InputView, ListboxView, OptionView, Role};

// Logging macros resolve to tracing or to no-ops depending on the feature.
pub(crate) use combo_core::{debug, debug_span, trace, warn};
