use std::sync::Arc;

use tracing::warn;

use super::domain::{Lodging, LodgingId, TicketWithType, UserId};
use super::eligibility::{check_entitlement, EligibilityResolver};
use super::error::{LodgingAccessError, MissingRecord};
use super::repository::{EnrollmentRepository, LodgingRepository, TicketRepository};

/// Service composing the eligibility gate with the hotel catalog.
///
/// Holds no per-request state, so one instance is shared across concurrent requests.
#[derive(Clone)]
pub struct LodgingService {
    resolver: Arc<EligibilityResolver>,
    lodgings: Arc<dyn LodgingRepository>,
}

impl LodgingService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        tickets: Arc<dyn TicketRepository>,
        lodgings: Arc<dyn LodgingRepository>,
    ) -> Self {
        let resolver = EligibilityResolver::new(enrollments, tickets, lodgings.clone());
        Self {
            resolver: Arc::new(resolver),
            lodgings,
        }
    }

    /// Build a service whose three lookups are served by one store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: EnrollmentRepository + TicketRepository + LodgingRepository + 'static,
    {
        let enrollments: Arc<dyn EnrollmentRepository> = store.clone();
        let tickets: Arc<dyn TicketRepository> = store.clone();
        let lodgings: Arc<dyn LodgingRepository> = store;
        Self::new(enrollments, tickets, lodgings)
    }

    /// List every hotel for an entitled user, in store order.
    pub async fn all_lodgings(&self, user_id: UserId) -> Result<Vec<Lodging>, LodgingAccessError> {
        self.authorize(user_id).await?;
        let lodgings = self.lodgings.find_all().await?;
        Ok(lodgings)
    }

    /// Fetch one hotel for an entitled user.
    pub async fn lodging_by_id(
        &self,
        user_id: UserId,
        lodging_id: LodgingId,
    ) -> Result<Lodging, LodgingAccessError> {
        self.authorize(user_id).await?;
        self.lodgings
            .find_by_id(lodging_id)
            .await?
            .ok_or(LodgingAccessError::NotFound(MissingRecord::Lodging(
                lodging_id,
            )))
    }

    async fn authorize(&self, user_id: UserId) -> Result<TicketWithType, LodgingAccessError> {
        let outcome = match self.resolver.resolve_access(user_id).await {
            Ok(ticket) => check_entitlement(&ticket).map(|()| ticket),
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            match err {
                LodgingAccessError::NotFound(cause) => {
                    warn!(%user_id, ?cause, "hotel access denied: missing record");
                }
                LodgingAccessError::PaymentRequired(gap) => {
                    warn!(%user_id, ?gap, "hotel access denied: ticket not entitled");
                }
                LodgingAccessError::Repository(source) => {
                    warn!(%user_id, error = %source, "hotel access aborted");
                }
            }
        }

        outcome
    }
}
