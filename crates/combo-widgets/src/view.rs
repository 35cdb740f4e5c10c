#![forbid(unsafe_code)]

//! Render step.
//!
//! [`Combobox::view`] turns the state machine into an immutable description
//! of what the host shows: the input, the list and its options, and the
//! hidden field, each with its accessibility role and attributes. Hosts read
//! the description; they never read state back out of their own UI.
//!
//! [`ComboboxView::to_html`] serialises the description as markup. Option
//! content is emitted untouched.

use std::fmt::Write as _;

use crate::catalog::Markup;
use crate::combobox::Combobox;

/// Accessibility role of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The text input.
    Combobox,
    /// The option list.
    Listbox,
    /// One option.
    Option,
}

impl Role {
    /// ARIA role name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Combobox => "combobox",
            Self::Listbox => "listbox",
            Self::Option => "option",
        }
    }
}

/// The text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub expanded: bool,
    /// Id of the list this input controls.
    pub controls: String,
    /// Id of the highlighted option, if any.
    pub active_descendant: Option<String>,
    pub placeholder: Option<String>,
}

/// One rendered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub role: Role,
    /// Catalog position.
    pub catalog_index: usize,
    /// Highlighted.
    pub selected: bool,
    pub content: Markup,
    pub label: String,
    pub value: String,
}

/// The option list. Has no options while closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxView {
    pub id: String,
    pub role: Role,
    pub hidden: bool,
    pub options: Vec<OptionView>,
}

/// The hidden form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFieldView {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Everything a host needs to draw one combobox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxView {
    pub input: InputView,
    pub listbox: ListboxView,
    pub hidden: HiddenFieldView,
}

impl Combobox {
    /// Describe the current state for rendering.
    pub fn view(&self) -> ComboboxView {
        let config = self.config();
        let highlighted = self.cursor().position();
        let options: Vec<OptionView> = self
            .filtered()
            .options(self.catalog())
            .enumerate()
            .map(|(pos, (catalog_index, option))| OptionView {
                id: config.option_id(pos),
                role: Role::Option,
                catalog_index,
                selected: highlighted == Some(pos),
                content: option.content().clone(),
                label: option.label().to_owned(),
                value: option.value().to_owned(),
            })
            .collect();
        let active_descendant = options.iter().find(|o| o.selected).map(|o| o.id.clone());

        ComboboxView {
            input: InputView {
                id: config.input_id(),
                role: Role::Combobox,
                text: self.text().to_owned(),
                expanded: self.is_open(),
                controls: config.listbox_id(),
                active_descendant,
                placeholder: config.placeholder.clone(),
            },
            listbox: ListboxView {
                id: config.listbox_id(),
                role: Role::Listbox,
                hidden: !self.is_open(),
                options,
            },
            hidden: HiddenFieldView {
                id: config.id.clone(),
                name: config.field_name().to_owned(),
                value: self.value().to_owned(),
            },
        }
    }
}

impl ComboboxView {
    /// The highlighted option.
    pub fn selected_option(&self) -> Option<&OptionView> {
        self.listbox.options.iter().find(|o| o.selected)
    }

    /// First rendered option whose text is `label`.
    pub fn option_by_text(&self, label: &str) -> Option<&OptionView> {
        self.listbox.options.iter().find(|o| o.label == label)
    }

    /// Rendered option labels in order.
    pub fn option_labels(&self) -> Vec<&str> {
        self.listbox
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Serialise as HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let input = &self.input;

        html.push_str("<input type=\"text\"");
        push_attr(&mut html, "id", &input.id);
        push_attr(&mut html, "role", input.role.as_str());
        push_attr(&mut html, "aria-autocomplete", "both");
        push_attr(&mut html, "aria-expanded", bool_str(input.expanded));
        push_attr(&mut html, "aria-controls", &input.controls);
        if let Some(active) = &input.active_descendant {
            push_attr(&mut html, "aria-activedescendant", active);
        }
        if let Some(placeholder) = &input.placeholder {
            push_attr(&mut html, "placeholder", placeholder);
        }
        push_attr(&mut html, "value", &input.text);
        html.push_str(">\n");

        let listbox = &self.listbox;
        html.push_str("<ul");
        push_attr(&mut html, "id", &listbox.id);
        push_attr(&mut html, "role", listbox.role.as_str());
        if listbox.hidden {
            html.push_str(" hidden");
        }
        html.push('>');
        for option in &listbox.options {
            html.push_str("\n  <li");
            push_attr(&mut html, "id", &option.id);
            push_attr(&mut html, "role", option.role.as_str());
            if option.selected {
                push_attr(&mut html, "class", "selected");
            }
            push_attr(&mut html, "aria-selected", bool_str(option.selected));
            push_attr(&mut html, "data-value", &option.value);
            html.push('>');
            html.push_str(option.content.as_str());
            html.push_str("</li>");
        }
        if !listbox.options.is_empty() {
            html.push('\n');
        }
        html.push_str("</ul>\n");

        let hidden = &self.hidden;
        html.push_str("<input type=\"hidden\"");
        push_attr(&mut html, "id", &hidden.id);
        push_attr(&mut html, "name", &hidden.name);
        push_attr(&mut html, "value", &hidden.value);
        html.push('>');
        html
    }
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    let _ = write!(
        html,
        " {name}=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
    );
}
