#![forbid(unsafe_code)]

//! Pages used by the end-to-end scenarios.
//!
//! All of them offer the same four states under the field id `state-field`.

use combo_widgets::{Catalog, Combobox, ComboboxConfig, RawOption};

/// Field id shared by every fixture.
pub const FIELD_ID: &str = "state-field";

const STATES: [(&str, &str); 4] = [
    ("Alabama", "AL"),
    ("Florida", "FL"),
    ("Michigan", "MI"),
    ("Missouri", "MO"),
];

/// Plain-text options.
pub fn state_catalog() -> Catalog {
    Catalog::load(
        STATES
            .iter()
            .map(|&(label, value)| RawOption::new(label, value)),
    )
}

/// Options whose content is wrapped in a paragraph.
pub fn html_state_catalog() -> Catalog {
    Catalog::load(
        STATES
            .iter()
            .map(|&(label, value)| RawOption::new(format!("<p>{label}</p>"), value)),
    )
}

/// Closed by default, plain options.
pub fn states() -> Combobox {
    Combobox::new(ComboboxConfig::new(FIELD_ID), state_catalog())
}

/// Closed by default, markup options.
pub fn html_states() -> Combobox {
    Combobox::new(ComboboxConfig::new(FIELD_ID), html_state_catalog())
}

/// Open on load.
pub fn open_states() -> Combobox {
    Combobox::new(
        ComboboxConfig::new(FIELD_ID).with_open_by_default(true),
        state_catalog(),
    )
}

/// Prefilled with `value`.
pub fn prefilled_states(value: &str) -> Combobox {
    Combobox::new(
        ComboboxConfig::new(FIELD_ID).with_value(value),
        html_state_catalog(),
    )
}
