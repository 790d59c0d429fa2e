//! Outcome of a per-repository mutation

/// Status enum representing the result of a mutating git operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Pull from the remote succeeded
    Pulled,
    /// Pull failed (network, auth, no upstream, conflict...)
    PullError,
    /// Branch was checked out
    CheckedOut,
    /// Checkout failed
    CheckoutError,
}

impl Status {
    /// Returns the text representation of this status
    pub fn text(&self) -> &str {
        match self {
            Status::Pulled => "pulled",
            Status::PullError => "failed",
            Status::CheckedOut => "checked out",
            Status::CheckoutError => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Status::PullError | Status::CheckoutError)
    }
}
