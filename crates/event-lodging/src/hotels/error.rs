use super::domain::{LodgingId, TicketStatus};
use super::repository::RepositoryError;

/// Outcome classes visible to callers. Internal causes never change the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
    NotFound,
    PaymentRequired,
    Infrastructure,
}

/// Record whose absence stopped the request. Kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecord {
    Enrollment,
    Ticket,
    EmptyCatalog,
    Lodging(LodgingId),
}

/// First entitlement condition the ticket failed, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementGap {
    TicketNotPaid(TicketStatus),
    RemoteTicket,
    HotelNotIncluded,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LodgingAccessError {
    #[error("resource not found")]
    NotFound(MissingRecord),
    #[error("payment required to proceed")]
    PaymentRequired(EntitlementGap),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl LodgingAccessError {
    pub fn kind(&self) -> AccessErrorKind {
        match self {
            LodgingAccessError::NotFound(_) => AccessErrorKind::NotFound,
            LodgingAccessError::PaymentRequired(_) => AccessErrorKind::PaymentRequired,
            LodgingAccessError::Repository(_) => AccessErrorKind::Infrastructure,
        }
    }
}
