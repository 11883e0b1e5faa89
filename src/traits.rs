/// Receives the widget's notifications for one session.
///
/// Both methods get the current content, since the buffer itself stays
/// borrowed by the widget until the session ends. The defaults do nothing.
pub trait EntryHandler {
    /// Called after every successful insertion or deletion.
    fn changed(&mut self, _text: &[u8]) {}

    /// Called each time the Enter key is activated. The text is not modified.
    fn submit(&mut self, _text: &[u8]) {}
}

/// No notifications.
impl EntryHandler for () {}

type Callback<'a> = Box<dyn FnMut(&[u8]) + 'a>;

/// An [`EntryHandler`] built from optional closures.
///
/// ```
/// use dpad_input::Callbacks;
///
/// let mut submitted = Vec::new();
/// let handler = Callbacks::new().on_submit(|text| submitted.push(text.to_vec()));
/// # drop(handler);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    on_submit: Option<Callback<'a>>,
    on_changed: Option<Callback<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_submit(mut self, f: impl FnMut(&[u8]) + 'a) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn on_changed(mut self, f: impl FnMut(&[u8]) + 'a) -> Self {
        self.on_changed = Some(Box::new(f));
        self
    }
}

impl EntryHandler for Callbacks<'_> {
    fn changed(&mut self, text: &[u8]) {
        if let Some(f) = self.on_changed.as_mut() {
            f(text);
        }
    }

    fn submit(&mut self, text: &[u8]) {
        if let Some(f) = self.on_submit.as_mut() {
            f(text);
        }
    }
}

impl std::fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_submit", &self.on_submit.is_some())
            .field("on_changed", &self.on_changed.is_some())
            .finish()
    }
}
