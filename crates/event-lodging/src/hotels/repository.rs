use async_trait::async_trait;

use super::domain::{Enrollment, EnrollmentId, Lodging, LodgingId, TicketWithType, UserId};

/// Enrollment lookup used as the first gate.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, RepositoryError>;
}

/// Ticket lookup. Implementations return the ticket joined with its ticket type.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<TicketWithType>, RepositoryError>;
}

/// Hotel catalog lookups.
#[async_trait]
pub trait LodgingRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Lodging>, RepositoryError>;
    async fn find_by_id(&self, id: LodgingId) -> Result<Option<Lodging>, RepositoryError>;
}

/// Infrastructure failure raised by a collaborator. Never reclassified by the gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
