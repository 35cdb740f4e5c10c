#![forbid(unsafe_code)]

//! Per-widget configuration.

#[cfg(feature = "serde")]
use crate::error::ConfigError;

/// Configuration for one combobox.
///
/// `id` names the hidden field and derives the ids of the input
/// (`"<id>-combobox"`) and the list (`"<id>-listbox"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboboxConfig {
    /// Hidden field id.
    pub id: String,
    /// Hidden field form name. Defaults to `id`.
    pub name: Option<String>,
    /// Start with the list open.
    pub open_by_default: bool,
    /// Value committed at initialization.
    pub value: Option<String>,
    /// Input placeholder text.
    pub placeholder: Option<String>,
}

impl ComboboxConfig {
    /// Create a configuration for the field `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the hidden field form name (builder).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Start open (builder).
    #[must_use]
    pub fn with_open_by_default(mut self, open: bool) -> Self {
        self.open_by_default = open;
        self
    }

    /// Prefill the committed value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Parse and validate a JSON configuration object.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.id.trim().is_empty() {
            return Err(ConfigError::MissingField("id"));
        }
        Ok(config)
    }

    /// Id of the text input.
    pub fn input_id(&self) -> String {
        format!("{}-combobox", self.id)
    }

    /// Id of the list container.
    pub fn listbox_id(&self) -> String {
        format!("{}-listbox", self.id)
    }

    /// Id of the rendered option at view position `pos`.
    pub fn option_id(&self, pos: usize) -> String {
        format!("{}-option-{pos}", self.id)
    }

    /// Form name of the hidden field.
    pub fn field_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_ids() {
        let config = ComboboxConfig::new("state-field");
        assert_eq!(config.input_id(), "state-field-combobox");
        assert_eq!(config.listbox_id(), "state-field-listbox");
        assert_eq!(config.option_id(2), "state-field-option-2");
        assert_eq!(config.field_name(), "state-field");
    }

    #[test]
    fn builders() {
        let config = ComboboxConfig::new("state")
            .with_name("user[state]")
            .with_open_by_default(true)
            .with_value("MI")
            .with_placeholder("Pick a state");
        assert_eq!(config.field_name(), "user[state]");
        assert!(config.open_by_default);
        assert_eq!(config.value.as_deref(), Some("MI"));
        assert_eq!(config.placeholder.as_deref(), Some("Pick a state"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_defaults() {
        let config = ComboboxConfig::from_json(r#"{"id": "state-field"}"#).expect("valid");
        assert_eq!(config, ComboboxConfig::new("state-field"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_all_keys() {
        let json = r#"{
            "id": "state-field",
            "name": "state",
            "open_by_default": true,
            "value": "FL",
            "placeholder": "State"
        }"#;
        let config = ComboboxConfig::from_json(json).expect("valid");
        assert!(config.open_by_default);
        assert_eq!(config.value.as_deref(), Some("FL"));
        assert_eq!(config.field_name(), "state");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_requires_id() {
        let err = ComboboxConfig::from_json(r#"{"open_by_default": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("id")));
        let err = ComboboxConfig::from_json(r#"{"id": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("id")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_rejects_wrong_types() {
        let err = ComboboxConfig::from_json(r#"{"id": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
