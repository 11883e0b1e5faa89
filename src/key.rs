/// The physical buttons the widget understands.
///
/// Hosts map their platform events (a d-pad, arrow keys, a remote) onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// The "activate" button.
    Ok,
    /// The cancel-class button. Only its long/repeat forms are used, as backspace.
    Back,
}

/// How a button was pressed.
///
/// A typical host emits `Press`, then `Short` or `Long`, then any number of
/// `Repeat`s while held, then `Release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Press,
    Release,
    Short,
    Long,
    Repeat,
}

bitflags::bitflags! {
    /// A set of [`InputKind`]s an action reacts to.
    ///
    /// These can be combined, e.g. `Triggers::SHORT | Triggers::REPEAT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Triggers: u8 {
        const PRESS   = 0b0_0001;
        const RELEASE = 0b0_0010;
        const SHORT   = 0b0_0100;
        const LONG    = 0b0_1000;
        const REPEAT  = 0b1_0000;
    }
}

impl Triggers {
    /// Whether an event of `kind` fires an action guarded by this set.
    pub fn fires_on(self, kind: InputKind) -> bool {
        self.intersects(Triggers::from(kind))
    }
}

impl From<InputKind> for Triggers {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Press => Triggers::PRESS,
            InputKind::Release => Triggers::RELEASE,
            InputKind::Short => Triggers::SHORT,
            InputKind::Long => Triggers::LONG,
            InputKind::Repeat => Triggers::REPEAT,
        }
    }
}

/// A single discrete input delivered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The button involved.
    pub key: InputKey,
    /// The press qualifier.
    pub kind: InputKind,
}

impl InputEvent {
    pub fn new(key: InputKey, kind: InputKind) -> Self {
        Self { key, kind }
    }

    /// A short press of `key`, the most common event.
    pub fn short(key: InputKey) -> Self {
        Self::new(key, InputKind::Short)
    }

    pub fn long(key: InputKey) -> Self {
        Self::new(key, InputKind::Long)
    }

    pub fn repeat(key: InputKey) -> Self {
        Self::new(key, InputKind::Repeat)
    }
}
