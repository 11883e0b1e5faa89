//! Terminal UI demo using crossterm and ratatui.
//!
//! A small bus command console: pick "I2C Command" from the menu, then compose
//! the command with the on-screen keyboard using only the arrow keys and Enter.
//! Esc goes back; Backspace acts as a held Back button and erases.
//! Run with: cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dpad_input::{
    Callbacks, InputEvent, InputKey, InputKind, InputWidget, KeyCursor, KeySymbol, Mode,
    VisibleWindow,
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::cell::RefCell;
use std::io;
use std::ptr;

/// One spare byte past the widget's capacity so the command is always terminated.
const COMMAND_SLOTS: usize = 129;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    None,
    I2c,
}

/// What ended a visit to the command screen.
enum Exit {
    Back,
    Submitted(String),
    Quit,
}

struct App {
    command: [u8; COMMAND_SLOTS],
    operation: Operation,
    history: Vec<String>,
}

impl App {
    fn new() -> Self {
        let mut app = Self {
            command: [0; COMMAND_SLOTS],
            operation: Operation::None,
            history: Vec::new(),
        };
        app.reset_command();
        app
    }

    /// Seeds the buffer with the usual command prefix.
    fn reset_command(&mut self) {
        self.command = [0; COMMAND_SLOTS];
        self.command[..3].copy_from_slice(b"[0x");
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<InputEvent> {
    let kind = match event.kind {
        KeyEventKind::Press => InputKind::Short,
        KeyEventKind::Repeat => InputKind::Repeat,
        KeyEventKind::Release => return None,
    };
    let key = match event.code {
        CKeyCode::Up => InputKey::Up,
        CKeyCode::Down => InputKey::Down,
        CKeyCode::Left => InputKey::Left,
        CKeyCode::Right => InputKey::Right,
        CKeyCode::Enter => InputKey::Ok,
        CKeyCode::Esc => InputKey::Back,
        // A terminal has no long press; Backspace stands in for holding Back.
        CKeyCode::Backspace => {
            let kind = if kind == InputKind::Repeat {
                InputKind::Repeat
            } else {
                InputKind::Long
            };
            return Some(InputEvent::new(InputKey::Back, kind));
        }
        _ => return None,
    };
    Some(InputEvent::new(key, kind))
}

fn is_quit(key: &CKeyEvent) -> bool {
    key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn field_line(widget: &InputWidget<'_>, window: &VisibleWindow, width: usize) -> Line<'static> {
    let text = widget.text().unwrap_or_default();
    let focused = widget.mode() == Some(Mode::Field);
    let base = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(
        if window.scroll_left { "<" } else { " " },
        base,
    )];
    for cell in 0..width {
        let index = window.start + cell;
        let ch = if window.chars.contains(&index) {
            char::from(text[index])
        } else {
            ' '
        };
        let style = if cell == window.cursor_cell {
            base.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            base
        };
        spans.push(Span::styled(ch.to_string(), style));
    }
    spans.push(Span::styled(
        if window.scroll_right { ">" } else { " " },
        base,
    ));
    Line::from(spans)
}

/// Terminal line and column for a layout position: two units per column,
/// fourteen per line.
fn key_cell((x, y): (u16, u16)) -> (usize, usize) {
    (usize::from(y / 14), usize::from(x / 2))
}

fn keyboard_lines(widget: &InputWidget<'_>) -> Vec<Line<'static>> {
    let layout = widget.layout();
    let selected = widget.selected_key();
    let hint = widget.resume_key();

    let mut placed = Vec::new();
    for (row, keys) in layout.rows().enumerate() {
        for (column, key) in keys.iter().enumerate() {
            let Some(position) = layout.screen_position(KeyCursor { row, column }) else {
                continue;
            };
            let label = match key.symbol {
                KeySymbol::Enter | KeySymbol::Backspace => format!("[{}]", key.symbol.label()),
                _ => format!(" {} ", key.symbol.label()),
            };
            let style = if selected.is_some_and(|k| ptr::eq(k, key)) {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else if hint.is_some_and(|k| ptr::eq(k, key)) {
                Style::default().add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            let (line, cell) = key_cell(position);
            placed.push((line, cell, label, style));
        }
    }
    placed.sort_by_key(|&(line, cell, ..)| (line, cell));

    let last_line = placed.last().map_or(0, |&(line, ..)| line);
    let mut keys = placed.into_iter().peekable();
    (0..=last_line)
        .map(|line| {
            let mut spans = Vec::new();
            let mut used = 0;
            while let Some((_, cell, label, style)) = keys.next_if(|&(l, ..)| l == line) {
                if cell > used {
                    spans.push(Span::raw(" ".repeat(cell - used)));
                    used = cell;
                }
                used += label.len();
                spans.push(Span::styled(label, style));
            }
            Line::from(spans)
        })
        .collect()
}

fn command_ui(f: &mut Frame, widget: &InputWidget<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(7), Constraint::Length(3)].as_ref())
        .split(f.size());

    let width = widget.config().window_width;
    if let Some(window) = widget.visible_window() {
        let field = Paragraph::new(field_line(widget, &window, width))
            .block(Block::default().borders(Borders::ALL).title("I2C Command"));
        f.render_widget(field, chunks[0]);
    }

    let keyboard = Paragraph::new(keyboard_lines(widget))
        .block(Block::default().borders(Borders::ALL).title("Keyboard"));
    f.render_widget(keyboard, chunks[1]);

    let status = match widget.snapshot() {
        Some(snap) => format!(
            "-- {} -- {}/{}  (arrows move, Enter activates, Esc back, Backspace erases)",
            snap.mode.as_str(),
            snap.char_count,
            snap.capacity - 1
        ),
        None => String::new(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn menu_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(f.size());

    let menu = Paragraph::new(Line::from(Span::styled(
        "> I2C Command",
        Style::default().add_modifier(Modifier::REVERSED),
    )))
    .block(Block::default().borders(Borders::ALL).title("Flipper Pirate"));
    f.render_widget(menu, chunks[0]);

    let items = app
        .history
        .iter()
        .rev()
        .map(|cmd| ListItem::new(cmd.as_str()))
        .collect::<Vec<_>>();
    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Submitted (Enter opens, Esc quits)"),
    );
    f.render_widget(history, chunks[1]);
}

/// Runs one editing session over the command buffer.
fn run_command<B: Backend>(terminal: &mut Terminal<B>, command: &mut [u8]) -> io::Result<Exit> {
    let submitted = RefCell::new(None);
    let handler = Callbacks::new().on_submit(|text| {
        *submitted.borrow_mut() = Some(String::from_utf8_lossy(text).into_owned());
    });

    let mut widget = InputWidget::new();
    // Hide the last slot from the widget so the command stays terminated.
    let capacity = command.len() - 1;
    widget
        .bind_terminated(&mut command[..capacity], handler)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    loop {
        terminal.draw(|f| command_ui(f, &widget))?;

        if let Event::Key(key) = event::read()? {
            if is_quit(&key) {
                return Ok(Exit::Quit);
            }
            let Some(input) = convert_crossterm_event(key) else {
                continue;
            };
            let consumed = widget.handle_input(input);
            if !consumed && input.key == InputKey::Back {
                return Ok(Exit::Back);
            }
            if let Some(text) = submitted.borrow_mut().take() {
                return Ok(Exit::Submitted(text));
            }
        }
    }
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| menu_ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if is_quit(&key) || key.code == CKeyCode::Esc {
                break;
            }
            if key.kind != KeyEventKind::Press || key.code != CKeyCode::Enter {
                continue;
            }

            // Keep the previous command unless the operation changes.
            if app.operation != Operation::I2c {
                app.reset_command();
                app.operation = Operation::I2c;
            }
            match run_command(&mut terminal, &mut app.command)? {
                Exit::Back => {}
                Exit::Submitted(text) => app.history.push(text),
                Exit::Quit => break,
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
