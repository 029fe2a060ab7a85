use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a requester, as resolved from an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnrollmentId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketTypeId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LodgingId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LodgingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event enrollment owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

/// Lifecycle of a ticket. Anything other than `Paid` is treated as unpaid, including
/// statuses this service does not know by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
    #[serde(other)]
    Unrecognized,
}

impl TicketStatus {
    pub fn is_paid(self) -> bool {
        matches!(self, TicketStatus::Paid)
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
            TicketStatus::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

/// Pass attributes that decide whether a ticket unlocks lodging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: u32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// A ticket loaded together with the ticket type it references.
///
/// Entitlement is only ever evaluated against this pairing, so a ticket whose type was not
/// loaded cannot reach the entitlement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithType {
    ticket: Ticket,
    ticket_type: TicketType,
}

impl TicketWithType {
    pub fn join(ticket: Ticket, ticket_type: TicketType) -> Result<Self, TicketJoinError> {
        if ticket.ticket_type_id != ticket_type.id {
            return Err(TicketJoinError {
                ticket: ticket.id,
                expected: ticket.ticket_type_id,
                found: ticket_type.id,
            });
        }

        Ok(Self {
            ticket,
            ticket_type,
        })
    }

    /// Pairs a ticket with a type that was looked up by `ticket.ticket_type_id`.
    pub(crate) fn from_resolved(ticket: Ticket, ticket_type: TicketType) -> Self {
        debug_assert_eq!(ticket.ticket_type_id, ticket_type.id);
        Self {
            ticket,
            ticket_type,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn ticket_type(&self) -> &TicketType {
        &self.ticket_type
    }

    pub fn into_parts(self) -> (Ticket, TicketType) {
        (self.ticket, self.ticket_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ticket {ticket:?} references type {expected:?} but was joined with {found:?}")]
pub struct TicketJoinError {
    pub ticket: TicketId,
    pub expected: TicketTypeId,
    pub found: TicketTypeId,
}

/// Hotel record. Attributes are passed through to callers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lodging {
    pub id: LodgingId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
