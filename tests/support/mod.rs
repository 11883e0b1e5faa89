#![allow(dead_code)]

pub mod recorder;

use std::io;
use std::sync::{Arc, Mutex};

use dpad_input::{COMMAND_LAYOUT, InputEvent, InputKey, InputWidget, KeyCursor, KeySymbol, Mode};

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with every `tracing` event captured as plain text.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn short(key: InputKey) -> InputEvent {
    InputEvent::short(key)
}

pub fn press(widget: &mut InputWidget<'_>, keys: &[InputKey]) {
    for &key in keys {
        assert!(widget.handle_input(short(key)), "{key:?} not consumed");
    }
}

pub fn key_cursor(widget: &InputWidget<'_>) -> KeyCursor {
    widget
        .mode()
        .and_then(|m| m.key_cursor())
        .expect("keyboard not focused")
}

/// Position of `symbol` in the command layout.
pub fn find(symbol: KeySymbol) -> KeyCursor {
    for (row, keys) in COMMAND_LAYOUT.rows().enumerate() {
        if let Some(column) = keys.iter().position(|k| k.symbol == symbol) {
            return KeyCursor { row, column };
        }
    }
    panic!("{symbol:?} not in layout");
}

/// Moves the keyboard selection to `target` with directional presses only.
pub fn select(widget: &mut InputWidget<'_>, target: KeyCursor) {
    if widget.mode() == Some(Mode::Field) {
        press(widget, &[InputKey::Down]);
    }
    loop {
        let at = key_cursor(widget);
        if at.row < target.row {
            press(widget, &[InputKey::Down]);
        } else if at.row > target.row {
            press(widget, &[InputKey::Up]);
        } else {
            break;
        }
    }
    while key_cursor(widget).column != target.column {
        press(widget, &[InputKey::Right]);
    }
}

/// Selects `symbol` on the keyboard and activates it.
pub fn activate(widget: &mut InputWidget<'_>, symbol: KeySymbol) {
    select(widget, find(symbol));
    press(widget, &[InputKey::Ok]);
}

/// Types `text` through the virtual keyboard.
pub fn type_text(widget: &mut InputWidget<'_>, text: &str) {
    for byte in text.bytes() {
        let symbol = match byte {
            b' ' => KeySymbol::Space,
            other => KeySymbol::Char(other),
        };
        activate(widget, symbol);
    }
}
