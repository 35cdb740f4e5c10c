#![forbid(unsafe_code)]

//! Terminal combobox demo.
//!
//! Hosts one combobox in a raw-mode terminal: crossterm events are mapped to
//! widget events, clicks are hit-tested against the drawn layout, and the
//! widget's view is redrawn after every event. On exit the persisted state
//! is printed as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run -p combo-harness
//! ```
//!
//! # Controls
//!
//! - Type to filter; a prefix match autocompletes
//! - Up/Down, Home/End: move the highlight
//! - Enter or click: commit the highlighted option
//! - Escape, Tab or a click elsewhere: close the list
//! - Ctrl+C / Ctrl+Q: quit
//!
//! # Environment
//!
//! - `COMBO_DEMO_CONFIG`: JSON configuration object (defaults to the
//!   `state-field` fixture configuration)
//! - `COMBO_DEMO_CATALOG`: path to a JSON option array (defaults to the
//!   fixture states)
//! - `COMBO_DEMO_LOG_FILE`: write logs to this file
//! - `COMBO_DEMO_LOG`: log filter directives (default `debug`)

use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use combo_core::event::{Event, KeyCode};
use combo_core::geometry::Rect;
use combo_harness::fixtures;
use combo_widgets::{Combobox, ComboboxView, RectBoundary, Stateful};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, event as cte, execute, queue, terminal};
use tracing_subscriber::EnvFilter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INPUT_AREA: Rect = Rect::new(9, 2, 40, 1);
const LABEL: &str = "State:";

/// Restores the terminal on drop, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cte::EnableMouseCapture,
            cte::EnableBracketedPaste,
            cte::EnableFocusChange
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cte::DisableFocusChange,
            cte::DisableBracketedPaste,
            cte::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn init_logging() {
    let Ok(path) = std::env::var("COMBO_DEMO_LOG_FILE") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("combo-harness: cannot open log file {path}: {err}");
            return;
        }
    };
    let filter = EnvFilter::try_from_env("COMBO_DEMO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

fn load_combobox() -> Combobox {
    let config = std::env::var("COMBO_DEMO_CONFIG").ok();
    let catalog = std::env::var("COMBO_DEMO_CATALOG")
        .ok()
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::warn!(path = path.as_str(), error = %err, "cannot read catalog file");
                None
            }
        });
    match (config, catalog) {
        (None, None) => fixtures::states(),
        (config, catalog) => {
            let config = config
                .unwrap_or_else(|| format!("{{\"id\": \"{}\"}}", fixtures::FIELD_ID));
            let catalog = catalog.unwrap_or_else(|| "[]".to_owned());
            Combobox::from_json_lenient(&config, &catalog)
        }
    }
}

fn layout(combobox: &Combobox) -> RectBoundary {
    let rows = if combobox.is_open() {
        combobox.filtered().len()
    } else {
        0
    };
    RectBoundary::new(INPUT_AREA, rows)
}

/// Clip `text` to `width` display columns.
fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

fn draw(out: &mut impl Write, combobox: &Combobox, view: &ComboboxView) -> io::Result<()> {
    let width = usize::from(INPUT_AREA.width);
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print("combobox demo  (Ctrl+C to quit)"),
        cursor::MoveTo(0, INPUT_AREA.y),
        Print(LABEL),
        cursor::MoveTo(INPUT_AREA.x, INPUT_AREA.y),
        SetAttribute(Attribute::Underlined)
    )?;
    let text = clip(&view.input.text, width);
    let shown = if text.is_empty() {
        view.input.placeholder.as_deref().map(|p| clip(p, width)).unwrap_or_default()
    } else {
        text
    };
    let pad = width.saturating_sub(shown.width());
    queue!(
        out,
        Print(&shown),
        Print(" ".repeat(pad)),
        SetAttribute(Attribute::Reset),
        Print(if view.input.expanded { " ▴" } else { " ▾" })
    )?;

    let boundary = layout(combobox);
    for (pos, option) in view.listbox.options.iter().enumerate() {
        let Some(row) = boundary.option_area(pos) else {
            break;
        };
        let marker = if option.selected { "> " } else { "  " };
        let line = clip(&format!("{marker}{}", option.label), width);
        queue!(out, cursor::MoveTo(row.x, row.y))?;
        if option.selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(&line),
            Print(" ".repeat(width.saturating_sub(line.width()))),
            SetAttribute(Attribute::Reset)
        )?;
    }

    let status_y = boundary.area().bottom().saturating_add(1);
    queue!(
        out,
        cursor::MoveTo(0, status_y),
        Print(format!("{} = {:?}", view.hidden.name, view.hidden.value))
    )?;

    let caret = combobox.input().before_caret().width().min(width);
    let caret_x = INPUT_AREA
        .x
        .saturating_add(u16::try_from(caret).unwrap_or(u16::MAX));
    queue!(out, cursor::MoveTo(caret_x, INPUT_AREA.y), cursor::Show)?;
    out.flush()
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) if key.ctrl() => {
            matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        }
        _ => false,
    }
}

fn run(combobox: &mut Combobox) -> io::Result<()> {
    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    draw(&mut out, combobox, &combobox.view())?;

    loop {
        let Some(event) = Event::from_crossterm(cte::read()?) else {
            continue;
        };
        if is_quit(&event) {
            break;
        }
        let boundary = layout(combobox);
        if let Some(action) = combobox.handle_event(&event, &boundary) {
            tracing::info!(?action, "combobox action");
        }
        draw(&mut out, combobox, &combobox.view())?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    init_logging();
    let mut combobox = load_combobox();
    run(&mut combobox)?;

    let state = combobox.save_state();
    match serde_json::to_string(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("combo-harness: cannot encode state: {err}"),
    }
    Ok(())
}
