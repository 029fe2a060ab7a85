use std::sync::Arc;

use tracing::debug;

use super::domain::{TicketWithType, UserId};
use super::error::{EntitlementGap, LodgingAccessError, MissingRecord};
use super::repository::{EnrollmentRepository, LodgingRepository, TicketRepository};

/// Runs the existence checks that precede any entitlement decision.
///
/// Lookups are awaited one at a time: enrollment, then the ticket for that enrollment, then the
/// catalog. The catalog check is global rather than per user, so an empty catalog reports
/// `NotFound` even for a user whose ticket would also fail entitlement.
pub struct EligibilityResolver {
    enrollments: Arc<dyn EnrollmentRepository>,
    tickets: Arc<dyn TicketRepository>,
    lodgings: Arc<dyn LodgingRepository>,
}

impl EligibilityResolver {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        tickets: Arc<dyn TicketRepository>,
        lodgings: Arc<dyn LodgingRepository>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            lodgings,
        }
    }

    pub async fn resolve_access(
        &self,
        user_id: UserId,
    ) -> Result<TicketWithType, LodgingAccessError> {
        let enrollment = self
            .enrollments
            .find_by_user(user_id)
            .await?
            .ok_or(LodgingAccessError::NotFound(MissingRecord::Enrollment))?;
        debug!(%user_id, enrollment_id = enrollment.id.0, "enrollment located");

        let ticket = self
            .tickets
            .find_by_enrollment(enrollment.id)
            .await?
            .ok_or(LodgingAccessError::NotFound(MissingRecord::Ticket))?;
        debug!(
            %user_id,
            ticket_id = ticket.ticket().id.0,
            status = ticket.ticket().status.label(),
            "ticket located"
        );

        let catalog = self.lodgings.find_all().await?;
        if catalog.is_empty() {
            return Err(LodgingAccessError::NotFound(MissingRecord::EmptyCatalog));
        }
        debug!(%user_id, hotels = catalog.len(), "catalog populated");

        Ok(ticket)
    }
}

/// Ticket must be paid, for an in-person pass, and include a hotel.
pub fn check_entitlement(ticket: &TicketWithType) -> Result<(), LodgingAccessError> {
    match entitlement_gap(ticket) {
        Some(gap) => Err(LodgingAccessError::PaymentRequired(gap)),
        None => Ok(()),
    }
}

fn entitlement_gap(ticket: &TicketWithType) -> Option<EntitlementGap> {
    let status = ticket.ticket().status;
    if !status.is_paid() {
        return Some(EntitlementGap::TicketNotPaid(status));
    }

    let ticket_type = ticket.ticket_type();
    if ticket_type.is_remote {
        return Some(EntitlementGap::RemoteTicket);
    }
    if !ticket_type.includes_hotel {
        return Some(EntitlementGap::HotelNotIncluded);
    }

    None
}
