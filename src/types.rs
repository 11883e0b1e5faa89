/// A position on the virtual keyboard grid.
///
/// `column` is only meaningful against the row's own length; the widget keeps
/// it within `[0, row_len(row))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCursor {
    /// Zero-based keyboard row.
    pub row: usize,
    /// Zero-based key index within the row.
    pub column: usize,
}

impl KeyCursor {
    /// The first key of the first row.
    pub const ORIGIN: KeyCursor = KeyCursor { row: 0, column: 0 };
}

/// Where directional input is currently routed.
///
/// The widget is modal: the same four buttons move the text cursor while the
/// field is focused, and move the key selection while the keyboard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Left/right move the text cursor.
    Field,
    /// Directional input moves across the key grid.
    Keyboard(KeyCursor),
}

impl Mode {
    pub fn is_field(&self) -> bool {
        matches!(self, Mode::Field)
    }

    /// The selected key, if the keyboard has focus.
    pub fn key_cursor(&self) -> Option<KeyCursor> {
        match self {
            Mode::Field => None,
            Mode::Keyboard(cursor) => Some(*cursor),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Field => "FIELD",
            Mode::Keyboard(_) => "KEYBOARD",
        }
    }
}
