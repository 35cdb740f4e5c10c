#![forbid(unsafe_code)]

//! Option catalog.
//!
//! The ordered, read-only list of candidate options a combobox offers. Each
//! option carries an opaque display payload ([`Markup`]), a plain-text match
//! key used for filtering and type-ahead, and the value written to the hidden
//! form field on commit.
//!
//! Identity is catalog position: two options may share a match key or a value
//! and are still distinct.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use crate::error::ConfigError;

/// Opaque renderable option content.
///
/// The widget never interprets markup; it is passed through to the render
/// step untouched. The only inspection performed is [`Markup::plain_text`],
/// used to derive a default match key when none is supplied.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Markup(String);

impl Markup {
    /// Wrap a markup fragment.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    /// Markup that is plain text, with HTML metacharacters escaped.
    pub fn text(text: &str) -> Self {
        Self(html_escape::encode_text(text).into_owned())
    }

    /// The raw fragment.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Textual content: tags removed, entities decoded, runs of whitespace
    /// collapsed to one space, ends trimmed.
    pub fn plain_text(&self) -> String {
        let mut stripped = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(open) = rest.find('<') {
            stripped.push_str(&rest[..open]);
            // An unterminated tag swallows the remainder.
            rest = rest[open..]
                .find('>')
                .map_or("", |close| &rest[open + close + 1..]);
        }
        stripped.push_str(rest);

        let decoded = html_escape::decode_html_entities(&stripped);
        decoded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Debug for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Markup").field(&self.0).finish()
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One entry of a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOption {
    match_key: String,
    /// Lowercased match key, computed once at load.
    folded_key: String,
    label: String,
    content: Markup,
    value: String,
}

impl ComboOption {
    /// Create a plain-text option: `label` is displayed and matched against.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self::from_parts(Markup::text(&label), Some(label), value.into())
    }

    /// Create an option whose display is arbitrary markup. The match key is
    /// the markup's textual content.
    pub fn with_markup(value: impl Into<String>, content: impl Into<Markup>) -> Self {
        Self::from_parts(content.into(), None, value.into())
    }

    /// Override the match key (builder).
    #[must_use]
    pub fn match_as(mut self, key: impl Into<String>) -> Self {
        self.match_key = key.into();
        self.folded_key = self.match_key.to_lowercase();
        self
    }

    fn from_parts(content: Markup, match_key: Option<String>, value: String) -> Self {
        let label = content.plain_text();
        let match_key = match_key.unwrap_or_else(|| label.clone());
        let folded_key = match_key.to_lowercase();
        Self {
            match_key,
            folded_key,
            label,
            content,
            value,
        }
    }

    /// Plain-text key used for filtering and type-ahead.
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    /// Lowercased match key.
    pub fn folded_key(&self) -> &str {
        &self.folded_key
    }

    /// Textual content of the display markup; written to the input on commit.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display payload.
    pub fn content(&self) -> &Markup {
        &self.content
    }

    /// Value stored in the hidden field when this option is committed.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An option as supplied by the rendering collaborator, before loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawOption {
    /// Display markup.
    pub content: Markup,
    /// Explicit match key; defaults to the textual content of `content`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub match_key: Option<String>,
    /// Value for the hidden field.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
}

impl RawOption {
    /// Create a raw option from display markup and a value.
    pub fn new(content: impl Into<Markup>, value: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            match_key: None,
            value: Some(value.into()),
        }
    }

    /// Set an explicit match key (builder).
    #[must_use]
    pub fn with_match_key(mut self, key: impl Into<String>) -> Self {
        self.match_key = Some(key.into());
        self
    }
}

/// Ordered, immutable list of options.
///
/// Cloning is cheap; clones share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Arc<[ComboOption]>,
}

impl Catalog {
    /// Build a catalog from collaborator-supplied options.
    ///
    /// Options without a value are kept and commit an empty value.
    /// Duplicates are not removed.
    pub fn load(raw: impl IntoIterator<Item = RawOption>) -> Self {
        let options: Vec<ComboOption> = raw
            .into_iter()
            .map(|raw| {
                let value = raw.value.unwrap_or_else(|| {
                    crate::warn!(
                        content = raw.content.as_str(),
                        "combobox option has no value; commits empty"
                    );
                    String::new()
                });
                ComboOption::from_parts(raw.content, raw.match_key, value)
            })
            .collect();
        Self::from(options)
    }

    /// Parse a JSON array of raw options.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: Vec<RawOption> = serde_json::from_str(json)?;
        Ok(Self::load(raw))
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at catalog position `index`.
    pub fn get(&self, index: usize) -> Option<&ComboOption> {
        self.options.get(index)
    }

    /// Iterate options in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComboOption> {
        self.options.iter()
    }

    /// Position of the first option carrying `value`.
    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}

impl From<Vec<ComboOption>> for Catalog {
    fn from(options: Vec<ComboOption>) -> Self {
        Self {
            options: options.into(),
        }
    }
}

impl FromIterator<ComboOption> for Catalog {
    fn from_iter<I: IntoIterator<Item = ComboOption>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComboOption;
    type IntoIter = std::slice::Iter<'a, ComboOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
