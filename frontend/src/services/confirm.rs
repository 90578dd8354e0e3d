use std::rc::Rc;

/// Prompt shown before following a destructive link
pub const DELETE_PROMPT: &str = "Tem certeza que deseja apagar?";

/// Selector of destructive links inside rendered lists
pub const DELETE_SELECTOR: &str = ".btn-delete";

/// Synchronous yes/no question to the user
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

/// Shared handle to a `Confirm`, passed to components as a prop.
/// Defaults to the browser dialog.
#[derive(Clone)]
pub struct Confirmer(Rc<dyn Confirm>);

impl Confirmer {
    pub fn new(confirm: impl Confirm + 'static) -> Self {
        Self(Rc::new(confirm))
    }
}

impl Default for Confirmer {
    fn default() -> Self {
        Self::new(BrowserConfirm)
    }
}

impl PartialEq for Confirmer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Confirm for Confirmer {
    fn confirm(&self, message: &str) -> bool {
        self.0.confirm(message)
    }
}

/// Ask before a delete link navigates. `false` means the navigation must be
/// cancelled.
pub fn allow_delete(confirm: &impl Confirm) -> bool {
    confirm.confirm(DELETE_PROMPT)
}
