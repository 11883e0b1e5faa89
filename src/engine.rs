use std::borrow::Cow;

use tracing::{debug, trace};

use crate::buffer::TextBuffer;
use crate::error::ContractViolation;
use crate::key::{InputEvent, InputKey, Triggers};
use crate::layout::{COMMAND_LAYOUT, Key, KeyLayout, KeySymbol};
use crate::traits::EntryHandler;
use crate::types::{KeyCursor, Mode};
use crate::viewport::{Viewport, VisibleWindow};

/// Character cells in the text field.
pub const DEFAULT_WINDOW_WIDTH: usize = 16;
/// Cells kept between the cursor and the right edge before scrolling.
pub const DEFAULT_SCROLL_MARGIN: usize = 2;

/// Tunables of an [`InputWidget`], validated by [`WidgetBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    pub layout: &'static KeyLayout,
    pub window_width: usize,
    pub scroll_margin: usize,
    /// Press kinds that move the selection or activate a key.
    pub navigation_triggers: Triggers,
    /// Press kinds of the Back button that erase a character.
    pub erase_triggers: Triggers,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            layout: &COMMAND_LAYOUT,
            window_width: DEFAULT_WINDOW_WIDTH,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            navigation_triggers: Triggers::SHORT | Triggers::REPEAT,
            erase_triggers: Triggers::LONG | Triggers::REPEAT,
        }
    }
}

impl WidgetConfig {
    fn validate(&self) -> Result<(), ContractViolation> {
        self.layout.validate()?;
        if self.window_width <= self.scroll_margin {
            return Err(ContractViolation::WindowTooNarrow {
                width: self.window_width,
                margin: self.scroll_margin,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct WidgetBuilder {
    config: WidgetConfig,
}

impl WidgetBuilder {
    pub fn layout(mut self, layout: &'static KeyLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn window_width(mut self, width: usize) -> Self {
        self.config.window_width = width;
        self
    }

    pub fn scroll_margin(mut self, margin: usize) -> Self {
        self.config.scroll_margin = margin;
        self
    }

    pub fn navigation_triggers(mut self, triggers: Triggers) -> Self {
        self.config.navigation_triggers = triggers;
        self
    }

    pub fn erase_triggers(mut self, triggers: Triggers) -> Self {
        self.config.erase_triggers = triggers;
        self
    }

    pub fn build<'a>(self) -> Result<InputWidget<'a>, ContractViolation> {
        self.config.validate()?;
        Ok(InputWidget {
            config: self.config,
            session: None,
        })
    }
}

/// State of one editing session, readable between events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot {
    /// Current content length.
    pub char_count: usize,
    /// Slots in the bound buffer; content stays below this.
    pub capacity: usize,
    /// Cursor position, in `[0, char_count]`.
    pub selected_char: usize,
    /// Leftmost buffer index scrolled into view.
    pub first_visible_char: usize,
    pub mode: Mode,
    /// Column the keyboard returns to when entered from the field.
    pub resume_column: usize,
}

struct Session<'a> {
    buffer: TextBuffer<'a>,
    viewport: Viewport,
    mode: Mode,
    resume_column: usize,
    handler: Box<dyn EntryHandler + 'a>,
}

impl Session<'_> {
    fn focus(&mut self, mode: Mode) {
        if mode != self.mode {
            trace!(from = ?self.mode, to = ?mode, "focus moved");
            self.mode = mode;
        }
    }

    fn move_up(&mut self, layout: &KeyLayout) {
        let next = match self.mode {
            Mode::Field => Mode::Field,
            Mode::Keyboard(at) if at.row == 0 => {
                self.resume_column = at.column;
                Mode::Field
            }
            Mode::Keyboard(at) => {
                let row = at.row - 1;
                Mode::Keyboard(KeyCursor {
                    row,
                    column: layout.clamp_column(row, at.column),
                })
            }
        };
        self.focus(next);
    }

    fn move_down(&mut self, layout: &KeyLayout) {
        let next = match self.mode {
            Mode::Field => Mode::Keyboard(KeyCursor {
                row: 0,
                column: layout.clamp_column(0, self.resume_column),
            }),
            Mode::Keyboard(at) => {
                let row = (at.row + 1).min(layout.last_row());
                Mode::Keyboard(KeyCursor {
                    row,
                    column: layout.clamp_column(row, at.column),
                })
            }
        };
        self.focus(next);
    }

    fn move_left(&mut self, config: &WidgetConfig) {
        match self.mode {
            Mode::Field => {
                self.viewport.retreat();
            }
            Mode::Keyboard(at) => {
                let len = config.layout.row_len(at.row);
                let column = if at.column == 0 { len - 1 } else { at.column - 1 };
                self.mode = Mode::Keyboard(KeyCursor { column, ..at });
            }
        }
    }

    fn move_right(&mut self, config: &WidgetConfig) {
        match self.mode {
            Mode::Field => {
                self.viewport.advance(
                    self.buffer.len(),
                    config.window_width,
                    config.scroll_margin,
                );
            }
            Mode::Keyboard(at) => {
                let len = config.layout.row_len(at.row);
                let column = (at.column + 1) % len;
                self.mode = Mode::Keyboard(KeyCursor { column, ..at });
            }
        }
    }

    fn activate(&mut self, config: &WidgetConfig) {
        let Mode::Keyboard(at) = self.mode else {
            // Ok on the field behaves like Down.
            self.move_down(config.layout);
            return;
        };
        let Some(key) = config.layout.key(at) else {
            debug!(row = at.row, column = at.column, "no key under selection");
            return;
        };
        match key.symbol {
            KeySymbol::Enter => self.submit(),
            KeySymbol::Backspace => {
                self.backspace(config);
            }
            symbol => {
                if let Some(byte) = symbol.inserted_byte() {
                    self.insert(byte, config);
                }
            }
        }
    }

    fn submit(&mut self) {
        debug!(len = self.buffer.len(), "submit");
        self.handler.submit(self.buffer.as_bytes());
    }

    fn insert(&mut self, byte: u8, config: &WidgetConfig) -> bool {
        if !self.buffer.insert(self.viewport.cursor(), byte) {
            debug!(
                len = self.buffer.len(),
                capacity = self.buffer.capacity(),
                "insert rejected, buffer full"
            );
            return false;
        }
        self.viewport.advance(
            self.buffer.len(),
            config.window_width,
            config.scroll_margin,
        );
        self.handler.changed(self.buffer.as_bytes());
        true
    }

    fn backspace(&mut self, config: &WidgetConfig) -> bool {
        let cursor = self.viewport.cursor();
        if cursor == 0 || !self.buffer.remove(cursor - 1) {
            trace!("backspace at start of text ignored");
            return false;
        }
        self.viewport.retreat();
        self.viewport.clamp(self.buffer.len(), config.window_width);
        self.handler.changed(self.buffer.as_bytes());
        true
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.viewport = Viewport::default();
        self.mode = Mode::Field;
        self.resume_column = 0;
    }
}

/// The on-screen keyboard text entry widget.
///
/// A widget is bound to one caller-owned buffer at a time. While bound it
/// consumes [`InputEvent`]s one by one, edits the buffer in place and reports
/// edits and submissions through the session's [`EntryHandler`].
///
/// ```
/// use dpad_input::{InputEvent, InputKey, InputWidget};
///
/// let mut command = *b"[0x\0\0\0\0\0\0";
/// let mut widget = InputWidget::new();
/// widget.bind_terminated(&mut command, ()).unwrap();
///
/// // Down to the keyboard, right twice to 'r', activate.
/// for key in [InputKey::Down, InputKey::Right, InputKey::Right, InputKey::Ok] {
///     assert!(widget.handle_input(InputEvent::short(key)));
/// }
/// assert_eq!(widget.text(), Some(&b"[0xr"[..]));
/// ```
pub struct InputWidget<'a> {
    config: WidgetConfig,
    session: Option<Session<'a>>,
}

impl Default for InputWidget<'_> {
    fn default() -> Self {
        Self {
            config: WidgetConfig::default(),
            session: None,
        }
    }
}

impl std::fmt::Debug for InputWidget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputWidget")
            .field("config", &self.config)
            .field("session", &self.snapshot())
            .finish()
    }
}

impl<'a> InputWidget<'a> {
    /// A widget over [`COMMAND_LAYOUT`] with the default window.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WidgetBuilder {
        WidgetBuilder::default()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn layout(&self) -> &'static KeyLayout {
        self.config.layout
    }

    /// Starts a session over `bytes`, whose first `len` bytes are the content.
    ///
    /// Replaces any current session. On error the current session is kept.
    pub fn bind<H: EntryHandler + 'a>(
        &mut self,
        bytes: &'a mut [u8],
        len: usize,
        handler: H,
    ) -> Result<(), ContractViolation> {
        let buffer = TextBuffer::new(bytes, len)?;
        self.bind_buffer(buffer, handler);
        Ok(())
    }

    /// Like [`bind`](Self::bind), with the content ending at the first `0` byte.
    pub fn bind_terminated<H: EntryHandler + 'a>(
        &mut self,
        bytes: &'a mut [u8],
        handler: H,
    ) -> Result<(), ContractViolation> {
        let buffer = TextBuffer::from_terminated(bytes)?;
        self.bind_buffer(buffer, handler);
        Ok(())
    }

    /// Starts a session over an already validated buffer.
    ///
    /// The cursor starts after the existing content with the field focused.
    pub fn bind_buffer<H: EntryHandler + 'a>(&mut self, buffer: TextBuffer<'a>, handler: H) {
        let len = buffer.len();
        debug!(len, capacity = buffer.capacity(), "session bound");
        self.session = Some(Session {
            viewport: Viewport::at_end(len, self.config.window_width),
            buffer,
            mode: Mode::Field,
            resume_column: 0,
            handler: Box::new(handler),
        });
    }

    /// Ends the session, releasing the buffer and the handler.
    ///
    /// Returns whether a session was bound.
    pub fn unbind(&mut self) -> bool {
        let was_bound = self.session.take().is_some();
        if was_bound {
            debug!("session unbound");
        }
        was_bound
    }

    pub fn is_bound(&self) -> bool {
        self.session.is_some()
    }

    /// Empties the bound buffer and returns to the field, keeping the binding.
    ///
    /// No notification is sent.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            debug!("session reset");
            session.reset();
        }
    }

    /// Processes one input event. Returns whether it was consumed.
    ///
    /// Nothing is consumed while unbound. Directional keys and Ok are consumed
    /// for the configured navigation triggers; Back is consumed (as a
    /// backspace) for the erase triggers only, so a short Back falls through to
    /// the host.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let config = self.config;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let navigates = config.navigation_triggers.fires_on(event.kind);
        match event.key {
            InputKey::Back if config.erase_triggers.fires_on(event.kind) => {
                session.backspace(&config);
            }
            InputKey::Back => return false,
            _ if !navigates => return false,
            InputKey::Up => session.move_up(config.layout),
            InputKey::Down => session.move_down(config.layout),
            InputKey::Left => session.move_left(&config),
            InputKey::Right => session.move_right(&config),
            InputKey::Ok => session.activate(&config),
        }
        true
    }

    /// Inserts `byte` at the cursor. Returns `false` when unbound or full.
    pub fn insert_char(&mut self, byte: u8) -> bool {
        let config = self.config;
        self.session
            .as_mut()
            .is_some_and(|session| session.insert(byte, &config))
    }

    /// Deletes the character before the cursor. Returns whether one was deleted.
    pub fn backspace(&mut self) -> bool {
        let config = self.config;
        self.session
            .as_mut()
            .is_some_and(|session| session.backspace(&config))
    }

    /// Sends the current text to the session's submit handler.
    pub fn submit(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.submit();
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> Option<WidgetSnapshot> {
        self.session.as_ref().map(|s| WidgetSnapshot {
            char_count: s.buffer.len(),
            capacity: s.buffer.capacity(),
            selected_char: s.viewport.cursor(),
            first_visible_char: s.viewport.first_visible(),
            mode: s.mode,
            resume_column: s.resume_column,
        })
    }

    pub fn mode(&self) -> Option<Mode> {
        self.session.as_ref().map(|s| s.mode)
    }

    /// The current content.
    pub fn text(&self) -> Option<&[u8]> {
        self.session.as_ref().map(|s| s.buffer.as_bytes())
    }

    pub fn text_lossy(&self) -> Option<Cow<'_, str>> {
        self.session.as_ref().map(|s| s.buffer.as_text())
    }

    /// What the text field should draw.
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        self.session
            .as_ref()
            .map(|s| s.viewport.window(s.buffer.len(), self.config.window_width))
    }

    /// The key under the keyboard selection.
    pub fn selected_key(&self) -> Option<&'static Key> {
        let at = self.session.as_ref()?.mode.key_cursor()?;
        self.config.layout.key(at)
    }

    /// The row-0 key Down would select while the field is focused.
    pub fn resume_key(&self) -> Option<&'static Key> {
        let session = self.session.as_ref()?;
        if !session.mode.is_field() {
            return None;
        }
        let column = self.config.layout.clamp_column(0, session.resume_column);
        self.config.layout.key(KeyCursor { row: 0, column })
    }
}
