//! Hotel lookup for event attendees.
//!
//! Every request walks the same gate before any hotel data is returned: the user must be
//! enrolled, hold a ticket, the catalog must contain at least one hotel, and the ticket must be
//! paid, in person, and include lodging. Each lookup is an async collaborator so storage can be
//! swapped without touching the gate.

pub mod domain;
pub mod eligibility;
pub mod error;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    Enrollment, EnrollmentId, Lodging, LodgingId, Ticket, TicketId, TicketJoinError,
    TicketStatus, TicketType, TicketTypeId, TicketWithType, UserId,
};
pub use eligibility::{check_entitlement, EligibilityResolver};
pub use error::{AccessErrorKind, EntitlementGap, LodgingAccessError, MissingRecord};
pub use memory::{InMemoryLodgingStore, SeedData, SeedError, SessionSeed};
pub use repository::{
    EnrollmentRepository, LodgingRepository, RepositoryError, TicketRepository,
};
pub use router::{lodging_router, LodgingState};
pub use service::LodgingService;
pub use session::{AuthError, AuthenticatedUser, SessionStore};
