use crate::error::ContractViolation;
use crate::types::KeyCursor;

/// What a key does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySymbol {
    /// A printable ASCII character inserted as-is. `_` inserts a space.
    Char(u8),
    /// Submits the current text.
    Enter,
    /// Deletes the character before the cursor.
    Backspace,
    /// Inserts a space. Drawn as `_`.
    Space,
}

impl KeySymbol {
    /// The byte activating this key inserts, if any.
    pub fn inserted_byte(&self) -> Option<u8> {
        match *self {
            KeySymbol::Char(b'_') | KeySymbol::Space => Some(b' '),
            KeySymbol::Char(byte) => Some(byte),
            KeySymbol::Enter | KeySymbol::Backspace => None,
        }
    }

    /// A short text label, for hosts that draw keys as text.
    pub fn label(&self) -> String {
        match *self {
            KeySymbol::Char(byte) => char::from(byte).to_string(),
            KeySymbol::Enter => "SEND".to_string(),
            KeySymbol::Backspace => "<-".to_string(),
            KeySymbol::Space => "_".to_string(),
        }
    }
}

/// A key and where it is drawn, relative to the keyboard origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub symbol: KeySymbol,
    pub x: u8,
    pub y: u8,
}

impl Key {
    pub const fn new(symbol: KeySymbol, x: u8, y: u8) -> Self {
        Self { symbol, x, y }
    }

    const fn glyph(byte: u8, x: u8, y: u8) -> Self {
        Self::new(KeySymbol::Char(byte), x, y)
    }
}

/// An immutable grid of keys.
///
/// Rows may have different lengths; every lookup is checked against the
/// length of the row it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout {
    rows: &'static [&'static [Key]],
    origin: (u8, u8),
}

impl KeyLayout {
    pub const fn new(rows: &'static [&'static [Key]], origin: (u8, u8)) -> Self {
        Self { rows, origin }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of keys in `row`, or 0 past the last row.
    pub fn row_len(&self, row: usize) -> usize {
        self.row(row).map_or(0, <[Key]>::len)
    }

    pub fn row(&self, row: usize) -> Option<&'static [Key]> {
        self.rows.get(row).copied()
    }

    pub fn key(&self, at: KeyCursor) -> Option<&'static Key> {
        self.row(at.row)?.get(at.column)
    }

    pub fn rows(&self) -> impl Iterator<Item = &'static [Key]> + '_ {
        self.rows.iter().copied()
    }

    /// Screen offset added to every key position.
    pub fn origin(&self) -> (u8, u8) {
        self.origin
    }

    /// Where the key at `at` is drawn, with the origin applied.
    pub fn screen_position(&self, at: KeyCursor) -> Option<(u16, u16)> {
        let key = self.key(at)?;
        Some((
            u16::from(self.origin.0) + u16::from(key.x),
            u16::from(self.origin.1) + u16::from(key.y),
        ))
    }

    /// Index of the last row.
    pub(crate) fn last_row(&self) -> usize {
        self.row_count().saturating_sub(1)
    }

    /// `column` pulled back inside `row`.
    pub(crate) fn clamp_column(&self, row: usize, column: usize) -> usize {
        column.min(self.row_len(row).saturating_sub(1))
    }

    /// Rejects grids the widget cannot navigate.
    pub(crate) fn validate(&self) -> Result<(), ContractViolation> {
        if self.rows.is_empty() {
            return Err(ContractViolation::EmptyLayout);
        }
        match self.rows.iter().position(|r| r.is_empty()) {
            Some(row) => Err(ContractViolation::EmptyRow { row }),
            None => Ok(()),
        }
    }
}

const ROW_SYMBOLS: &[Key] = &[
    Key::glyph(b'[', 0, 12),
    Key::glyph(b']', 11, 12),
    Key::glyph(b'r', 22, 12),
    Key::glyph(b'x', 33, 12),
    Key::glyph(b'b', 44, 12),
    Key::glyph(b',', 55, 12),
    Key::glyph(b'&', 66, 12),
    Key::new(KeySymbol::Space, 77, 12),
    Key::new(KeySymbol::Backspace, 103, 4),
];

const ROW_LOW_DIGITS: &[Key] = &[
    Key::glyph(b'0', 0, 26),
    Key::glyph(b'1', 11, 26),
    Key::glyph(b'2', 22, 26),
    Key::glyph(b'3', 33, 26),
    Key::glyph(b'4', 44, 26),
    Key::glyph(b'5', 55, 26),
    Key::glyph(b'6', 66, 26),
    Key::glyph(b'7', 77, 26),
];

const ROW_HIGH_DIGITS: &[Key] = &[
    Key::glyph(b'8', 0, 40),
    Key::glyph(b'9', 11, 40),
    Key::glyph(b'A', 22, 40),
    Key::glyph(b'B', 33, 40),
    Key::glyph(b'C', 44, 40),
    Key::glyph(b'D', 55, 40),
    Key::glyph(b'E', 66, 40),
    Key::glyph(b'F', 77, 40),
    Key::new(KeySymbol::Enter, 95, 31),
];

/// Bus command keyboard: brackets, read/hex/bit markers, hex digits, send.
pub static COMMAND_LAYOUT: KeyLayout =
    KeyLayout::new(&[ROW_SYMBOLS, ROW_LOW_DIGITS, ROW_HIGH_DIGITS], (7, 17));
