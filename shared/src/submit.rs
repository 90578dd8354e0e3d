use crate::currency::unmask;
use std::cell::Cell;
use std::rc::Rc;

/// Per-form "is submitting" flag.
///
/// Checked and set synchronously at entry, before any timer or network work,
/// so a blur-triggered auto-save and an explicit submit cannot both go out.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard(Rc<Cell<bool>>);

impl SubmitGuard {
    /// Claim the form. Returns `false` if a submission is already underway.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_submitting(&self) -> bool {
        self.0.get()
    }

    /// Hand the form back after a submission that never left the page
    pub fn release(&self) {
        self.0.set(false);
    }
}

impl PartialEq for SubmitGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A masked currency input as found in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedField<'a> {
    pub name: Option<&'a str>,
    pub value: &'a str,
}

/// Plain decimal value to transmit under a field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanValue {
    pub name: String,
    pub value: String,
}

/// Machine-parseable value for one masked field. Fields without a value or
/// without a name are left alone.
pub fn clean_field(field: MaskedField<'_>) -> Option<CleanValue> {
    let name = field.name.filter(|name| !name.is_empty())?;
    if field.value.trim().is_empty() {
        return None;
    }
    Some(CleanValue {
        name: name.to_string(),
        value: unmask(field.value),
    })
}
