//! Rejection reasons returned by the checker.

use thiserror::Error;

/// Why a candidate password was rejected.
///
/// Every rejection maps to exactly one variant. The set is closed and the
/// identifiers returned by [`Reason::as_str`] are stable, so callers can use
/// them for logging or telemetry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    #[error("empty password")]
    Empty,
    #[error("check failed")]
    Failed,
    #[error("is the same as the old one")]
    Same,
    #[error("is based on the old one")]
    Similar,
    #[error("too short")]
    Short,
    #[error("too long")]
    Long,
    #[error("not enough different characters or classes for this length")]
    SimpleShort,
    #[error("not enough different characters or classes")]
    Simple,
    #[error("based on personal login information")]
    Personal,
    #[error("based on a dictionary word and not a passphrase")]
    Word,
    #[error("based on a common sequence of characters and not a passphrase")]
    Seq,
}

impl Reason {
    /// All reasons, in declaration order.
    pub const ALL: [Reason; 11] = [
        Reason::Empty,
        Reason::Failed,
        Reason::Same,
        Reason::Similar,
        Reason::Short,
        Reason::Long,
        Reason::SimpleShort,
        Reason::Simple,
        Reason::Personal,
        Reason::Word,
        Reason::Seq,
    ];

    /// Stable identifier of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Empty => "Empty",
            Reason::Failed => "Failed",
            Reason::Same => "Same",
            Reason::Similar => "Similar",
            Reason::Short => "Short",
            Reason::Long => "Long",
            Reason::SimpleShort => "SimpleShort",
            Reason::Simple => "Simple",
            Reason::Personal => "Personal",
            Reason::Word => "Word",
            Reason::Seq => "Seq",
        }
    }

    /// Human-readable description of the reason.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
