use std::cell::RefCell;
use std::rc::Rc;

use dpad_input::EntryHandler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Changed(Vec<u8>),
    Submitted(Vec<u8>),
}

/// Handler that logs every notification; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }

    pub fn changes(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notice::Changed(_)))
            .count()
    }

    pub fn submissions(&self) -> Vec<Vec<u8>> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Submitted(text) => Some(text.clone()),
                Notice::Changed(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl EntryHandler for Recorder {
    fn changed(&mut self, text: &[u8]) {
        self.log.borrow_mut().push(Notice::Changed(text.to_vec()));
    }

    fn submit(&mut self, text: &[u8]) {
        self.log.borrow_mut().push(Notice::Submitted(text.to_vec()));
    }
}
