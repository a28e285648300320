//! The no-silent-overwrite rule for generated outputs.
//!
//! An output that version control reports as changed may hold a hand edit
//! that was never folded back into the template. Overwriting it would lose
//! that edit, so generation stops instead. If the file on disk already equals
//! what would be written (e.g. only its mode changed), there is nothing to lose.

/// Outcome of checking one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Abort,
}

impl GuardDecision {
    pub fn is_abort(self) -> bool {
        self == Self::Abort
    }
}

/// Decide whether an output may be overwritten.
///
/// `on_disk` is `None` when the file does not exist.
pub fn evaluate(desired: &str, on_disk: Option<&str>, changed: bool) -> GuardDecision {
    if !changed {
        return GuardDecision::Proceed;
    }
    match on_disk {
        None => GuardDecision::Proceed,
        Some(current) if current == desired => GuardDecision::Proceed,
        Some(_) => GuardDecision::Abort,
    }
}
