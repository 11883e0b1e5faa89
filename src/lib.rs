pub mod buffer;
pub mod engine;
pub mod error;
pub mod key;
pub mod layout;
pub mod traits;
pub mod types;
pub mod viewport;

pub use crate::buffer::TextBuffer;
pub use crate::engine::{InputWidget, WidgetBuilder, WidgetConfig, WidgetSnapshot};
pub use crate::error::ContractViolation;
pub use crate::key::{InputEvent, InputKey, InputKind, Triggers};
pub use crate::layout::{COMMAND_LAYOUT, Key, KeyLayout, KeySymbol};
pub use crate::traits::{Callbacks, EntryHandler};
pub use crate::types::{KeyCursor, Mode};
pub use crate::viewport::{Viewport, VisibleWindow};
