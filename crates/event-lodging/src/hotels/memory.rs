use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{
    Enrollment, EnrollmentId, Lodging, LodgingId, Ticket, TicketId, TicketType, TicketTypeId,
    TicketWithType, UserId,
};
use super::repository::{
    EnrollmentRepository, LodgingRepository, RepositoryError, TicketRepository,
};
use super::session::SessionStore;

/// Serialized records used to populate an [`InMemoryLodgingStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub sessions: Vec<SessionSeed>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub lodgings: Vec<Lodging>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSeed {
    pub token: String,
    pub user_id: UserId,
}

impl SeedData {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SeedError> {
        serde_json::from_reader(reader).map_err(SeedError::from)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("unable to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("session token for user {0:?} is listed more than once")]
    DuplicateSession(UserId),
    #[error("user {0:?} has more than one enrollment")]
    DuplicateEnrollment(UserId),
    #[error("enrollment id {0:?} is used more than once")]
    DuplicateEnrollmentId(EnrollmentId),
    #[error("ticket type {0:?} is listed more than once")]
    DuplicateTicketType(TicketTypeId),
    #[error("enrollment {0:?} has more than one ticket")]
    DuplicateTicket(EnrollmentId),
    #[error("hotel {0:?} is listed more than once")]
    DuplicateLodging(LodgingId),
    #[error("ticket {ticket:?} references unknown enrollment {enrollment:?}")]
    DanglingEnrollment {
        ticket: TicketId,
        enrollment: EnrollmentId,
    },
    #[error("ticket {ticket:?} references unknown ticket type {ticket_type:?}")]
    DanglingTicketType {
        ticket: TicketId,
        ticket_type: TicketTypeId,
    },
}

/// Read-only store serving every hotel lookup from seeded records.
///
/// Records are fixed at construction, so concurrent readers need no locking. Tickets are
/// joined with their ticket type up front and dangling references are rejected while seeding.
#[derive(Debug, Default)]
pub struct InMemoryLodgingStore {
    sessions: HashMap<String, UserId>,
    enrollments: HashMap<UserId, Enrollment>,
    tickets: HashMap<EnrollmentId, TicketWithType>,
    lodgings: Vec<Lodging>,
}

impl InMemoryLodgingStore {
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let SeedData {
            sessions,
            enrollments,
            ticket_types,
            tickets,
            lodgings,
        } = seed;

        let mut sessions_by_token = HashMap::with_capacity(sessions.len());
        for session in sessions {
            let user_id = session.user_id;
            if sessions_by_token.insert(session.token, user_id).is_some() {
                return Err(SeedError::DuplicateSession(user_id));
            }
        }

        let mut enrollment_ids = HashSet::with_capacity(enrollments.len());
        let mut enrollments_by_user = HashMap::with_capacity(enrollments.len());
        for enrollment in enrollments {
            if !enrollment_ids.insert(enrollment.id) {
                return Err(SeedError::DuplicateEnrollmentId(enrollment.id));
            }
            let user_id = enrollment.user_id;
            if enrollments_by_user.insert(user_id, enrollment).is_some() {
                return Err(SeedError::DuplicateEnrollment(user_id));
            }
        }

        let mut ticket_types_by_id = HashMap::with_capacity(ticket_types.len());
        for ticket_type in ticket_types {
            let id = ticket_type.id;
            if ticket_types_by_id.insert(id, ticket_type).is_some() {
                return Err(SeedError::DuplicateTicketType(id));
            }
        }

        let mut tickets_by_enrollment = HashMap::with_capacity(tickets.len());
        for ticket in tickets {
            if !enrollment_ids.contains(&ticket.enrollment_id) {
                return Err(SeedError::DanglingEnrollment {
                    ticket: ticket.id,
                    enrollment: ticket.enrollment_id,
                });
            }

            let Some(ticket_type) = ticket_types_by_id.get(&ticket.ticket_type_id).cloned() else {
                return Err(SeedError::DanglingTicketType {
                    ticket: ticket.id,
                    ticket_type: ticket.ticket_type_id,
                });
            };

            let enrollment_id = ticket.enrollment_id;
            let joined = TicketWithType::from_resolved(ticket, ticket_type);
            if tickets_by_enrollment.insert(enrollment_id, joined).is_some() {
                return Err(SeedError::DuplicateTicket(enrollment_id));
            }
        }

        let mut seen = HashSet::with_capacity(lodgings.len());
        for lodging in &lodgings {
            if !seen.insert(lodging.id) {
                return Err(SeedError::DuplicateLodging(lodging.id));
            }
        }

        Ok(Self {
            sessions: sessions_by_token,
            enrollments: enrollments_by_user,
            tickets: tickets_by_enrollment,
            lodgings,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        Self::from_seed(SeedData::from_path(path)?)
    }

    pub fn lodging_count(&self) -> usize {
        self.lodgings.len()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryLodgingStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, RepositoryError> {
        Ok(self.enrollments.get(&user_id).cloned())
    }
}

#[async_trait]
impl TicketRepository for InMemoryLodgingStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<TicketWithType>, RepositoryError> {
        Ok(self.tickets.get(&enrollment_id).cloned())
    }
}

#[async_trait]
impl LodgingRepository for InMemoryLodgingStore {
    async fn find_all(&self) -> Result<Vec<Lodging>, RepositoryError> {
        Ok(self.lodgings.clone())
    }

    async fn find_by_id(&self, id: LodgingId) -> Result<Option<Lodging>, RepositoryError> {
        Ok(self.lodgings.iter().find(|lodging| lodging.id == id).cloned())
    }
}

#[async_trait]
impl SessionStore for InMemoryLodgingStore {
    async fn find_user(&self, token: &str) -> Result<Option<UserId>, RepositoryError> {
        Ok(self.sessions.get(token).copied())
    }
}
