#![forbid(unsafe_code)]

//! End-to-end combobox scenarios driven through the page simulator.
//!
//! Each test loads a fixture page, performs user gestures, and asserts on
//! the rendered view: roles, `aria-expanded`, rendered options, the selected
//! marker, and the two field values.
//!
//! Run: `cargo test -p combo-harness --test combobox_system`

use combo_core::event::KeyCode;
use combo_harness::{Page, fixtures};

fn page() -> Page {
    Page::new(fixtures::states())
}

fn html_page() -> Page {
    Page::new(fixtures::html_states())
}

// ---------------------------------------------------------------------------
// Rendering and open state
// ---------------------------------------------------------------------------

#[test]
fn combobox_is_rendered() {
    let page = page();
    assert_eq!(page.view().input.role.as_str(), "combobox");
    assert!(page.html().contains("role=\"combobox\""));
}

#[test]
fn closed_by_default() {
    let page = page();
    assert!(!page.expanded());
    assert!(page.options().is_empty());
    assert!(!page.html().contains("<li"));
}

#[test]
fn can_be_opened() {
    let mut page = page();
    page.click_input();
    assert!(page.expanded());
    assert_eq!(page.listbox_id(), "state-field-listbox");
    assert_eq!(page.view().listbox.role.as_str(), "listbox");
    assert!(page.has_option("Alabama"));
    assert!(page.view().listbox.options.iter().all(|o| o.role.as_str() == "option"));
}

#[test]
fn open_by_default_when_configured() {
    let page = Page::new(fixtures::open_states());
    assert!(page.expanded());
    assert_eq!(page.listbox_id(), "state-field-listbox");
    assert!(page.has_option("Alabama"));
}

#[test]
fn closes_on_outside_click() {
    let mut page = page();
    page.click_input();
    assert!(page.expanded());
    page.click_body();
    assert!(!page.expanded());
    assert!(page.options().is_empty());
}

#[test]
fn closes_on_focus_leaving() {
    let mut page = page();
    page.click_input();
    assert!(page.expanded());
    page.tab();
    assert!(!page.expanded());
    assert!(page.options().is_empty());
}

#[test]
fn options_can_contain_html() {
    let mut page = html_page();
    page.click_input();
    assert_eq!(page.listbox_id(), "state-field-listbox");
    assert_eq!(page.option_markup("Alabama").as_deref(), Some("<p>Alabama</p>"));
    assert!(page.html().contains("><p>Alabama</p></li>"));
}

// ---------------------------------------------------------------------------
// Filtering and type-ahead
// ---------------------------------------------------------------------------

#[test]
fn options_are_filterable() {
    let mut page = page();
    page.click_input();
    page.send_keys("Flo");
    assert!(page.has_option("Florida"));
    assert!(!page.has_option("Alabama"));
}

#[test]
fn autocompletion() {
    let mut page = html_page();
    page.click_input();

    page.send_keys("Flor");
    assert_eq!(page.input_value(), "Florida");
    assert_eq!(page.hidden_value(), "FL");
    assert_eq!(page.selected_option().as_deref(), Some("Florida"));

    page.press(KeyCode::Backspace);
    assert_eq!(page.input_value(), "Flor");
    assert_eq!(page.hidden_value(), "");
    assert_eq!(page.selected_option(), None);
}

#[test]
fn autocomplete_needs_prefix_but_first_option_is_selected() {
    let mut page = html_page();
    page.click_input();

    page.send_keys("lor");
    assert_eq!(page.input_value(), "lor");
    assert_eq!(page.hidden_value(), "FL");
    assert_eq!(page.selected_option().as_deref(), Some("Florida"));
}

#[test]
fn enter_locks_in_selection_and_editing_resets_it() {
    let mut page = html_page();
    page.click_input();

    page.send_keys("lor");
    page.press(KeyCode::Enter);
    assert!(!page.expanded());
    assert_eq!(page.input_value(), "Florida");
    assert_eq!(page.hidden_value(), "FL");
    assert_eq!(page.selected_option(), None);

    page.press(KeyCode::Backspace);
    assert!(page.expanded());
    assert_eq!(page.input_value(), "Florid");
    assert_eq!(page.hidden_value(), "");
    assert_eq!(page.selected_option(), None);
}

#[test]
fn paste_autocompletes() {
    let mut page = page();
    page.click_input();
    page.paste("Mich");
    assert_eq!(page.input_value(), "Michigan");
    assert_eq!(page.hidden_value(), "MI");
}

// ---------------------------------------------------------------------------
// Navigation and selection
// ---------------------------------------------------------------------------

#[test]
fn navigating_with_arrow_keys() {
    let mut page = html_page();
    page.click_input();

    let steps = [
        (KeyCode::Down, "Alabama"),
        (KeyCode::Down, "Florida"),
        (KeyCode::Down, "Michigan"),
        (KeyCode::Up, "Florida"),
        (KeyCode::Up, "Alabama"),
        // wrap around
        (KeyCode::Up, "Missouri"),
        (KeyCode::Down, "Alabama"),
        (KeyCode::End, "Missouri"),
        (KeyCode::Home, "Alabama"),
    ];
    for (key, expected) in steps {
        page.press(key);
        assert_eq!(
            page.selected_option().as_deref(),
            Some(expected),
            "after {key:?}"
        );
    }
    assert_eq!(page.hidden_value(), "");
}

#[test]
fn arrow_down_from_closed_cycles_all_options() {
    let mut page = page();
    page.click_input();
    page.press(KeyCode::Escape);
    assert!(!page.expanded());

    let mut seen = Vec::new();
    for _ in 0..5 {
        page.press(KeyCode::Down);
        seen.extend(page.selected_option());
    }
    assert_eq!(seen, ["Alabama", "Florida", "Michigan", "Missouri", "Alabama"]);
}

#[test]
fn enter_without_highlight_does_nothing() {
    let mut page = page();
    page.click_input();
    page.press(KeyCode::Enter);
    assert!(page.expanded());
    assert_eq!(page.hidden_value(), "");
}

#[test]
fn select_option_by_clicking() {
    let mut page = html_page();
    page.click_input();
    assert_eq!(page.input_value(), "");
    assert_eq!(page.hidden_value(), "");

    assert!(page.click_option("Florida"));
    assert!(!page.expanded());
    assert_eq!(page.input_value(), "Florida");
    assert_eq!(page.hidden_value(), "FL");
}

#[test]
fn outside_click_keeps_text_and_value() {
    let mut page = page();
    page.click_input();
    page.send_keys("Ala");
    page.click_body();
    assert!(!page.expanded());
    assert_eq!(page.input_value(), "Alabama");
    assert_eq!(page.hidden_value(), "AL");
}

#[test]
fn prefilled_value() {
    let mut page = Page::new(fixtures::prefilled_states("MI"));
    assert!(!page.expanded());
    assert_eq!(page.input_value(), "Michigan");
    assert_eq!(page.hidden_value(), "MI");

    page.click_input();
    assert_eq!(page.selected_option().as_deref(), Some("Michigan"));
    assert!(
        page.html()
            .contains("aria-activedescendant=\"state-field-option-0\"")
    );
}

#[test]
fn submitted_form_carries_hidden_value() {
    let mut page = page();
    page.click_input();
    page.send_keys("Ala");
    page.press(KeyCode::Enter);
    assert_eq!(
        page.submit(),
        serde_json::json!({ "state-field": "AL" })
    );
}
