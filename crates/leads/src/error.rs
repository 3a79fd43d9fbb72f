use thiserror::Error;

/// Field-level validation failure, renderable inline next to the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl FormError {
    /// The offending field, for inline rendering.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::Invalid { field, .. } => field,
        }
    }
}

/// Transport failure talking to an upstream endpoint.
///
/// Callers collapse these to "failed"; nothing downstream distinguishes
/// more finely than succeeded vs. failed, and failures must never
/// propagate as unhandled errors.
#[derive(Debug, Error)]
pub enum LeadsError {
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
