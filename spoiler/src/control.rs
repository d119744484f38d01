use std::cell::RefCell;
use std::rc::Rc;

/// Output handle exposing the rendered toggle control.
///
/// The caller keeps one clone and hands another to the spoiler. The spoiler
/// writes the control's element id on every render that shows the toggle
/// and clears it when the toggle is hidden; the caller can only read it,
/// e.g. to move focus to the control.
#[derive(Debug, Clone, Default)]
pub struct ControlRef(Rc<RefCell<Option<String>>>);

impl ControlRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id of the currently rendered control.
    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub(crate) fn attach(&self, id: &str) {
        let mut slot = self.0.borrow_mut();
        if slot.as_deref() != Some(id) {
            *slot = Some(id.to_string());
        }
    }

    pub(crate) fn detach(&self) {
        self.0.borrow_mut().take();
    }
}
