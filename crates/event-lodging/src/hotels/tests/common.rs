use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::hotels::domain::{
    Enrollment, EnrollmentId, Lodging, LodgingId, Ticket, TicketId, TicketStatus, TicketType,
    TicketTypeId, TicketWithType, UserId,
};
use crate::hotels::memory::{InMemoryLodgingStore, SeedData, SessionSeed};
use crate::hotels::repository::{
    EnrollmentRepository, LodgingRepository, RepositoryError, TicketRepository,
};
use crate::hotels::router::LodgingState;
use crate::hotels::service::LodgingService;

pub(super) const USER: UserId = UserId(7);
pub(super) const TOKEN: &str = "session-token-7";

pub(super) fn enrollment() -> Enrollment {
    Enrollment {
        id: EnrollmentId(70),
        user_id: USER,
    }
}

pub(super) fn ticket_type(is_remote: bool, includes_hotel: bool) -> TicketType {
    TicketType {
        id: TicketTypeId(3),
        name: "Full pass".to_string(),
        price: 600,
        is_remote,
        includes_hotel,
    }
}

pub(super) fn ticket(status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId(700),
        enrollment_id: EnrollmentId(70),
        ticket_type_id: TicketTypeId(3),
        status,
    }
}

pub(super) fn joined_ticket(
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> TicketWithType {
    TicketWithType::join(ticket(status), ticket_type(is_remote, includes_hotel))
        .expect("ticket references its type")
}

pub(super) fn sunset_inn() -> Lodging {
    let stamp = Utc
        .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Lodging {
        id: LodgingId(1),
        name: "Sunset Inn".to_string(),
        image: "http://x/y.png".to_string(),
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Seed with a session, enrollment, ticket, and one hotel for [`USER`].
pub(super) fn entitled_seed() -> SeedData {
    SeedData {
        sessions: vec![SessionSeed {
            token: TOKEN.to_string(),
            user_id: USER,
        }],
        enrollments: vec![enrollment()],
        ticket_types: vec![ticket_type(false, true)],
        tickets: vec![ticket(TicketStatus::Paid)],
        lodgings: vec![sunset_inn()],
    }
}

pub(super) fn store(seed: SeedData) -> Arc<InMemoryLodgingStore> {
    Arc::new(InMemoryLodgingStore::from_seed(seed).expect("seed is consistent"))
}

pub(super) fn service(seed: SeedData) -> LodgingService {
    LodgingService::from_store(store(seed))
}

pub(super) fn lodging_state(seed: SeedData) -> LodgingState {
    let store = store(seed);
    LodgingState {
        service: LodgingService::from_store(store.clone()),
        sessions: store,
    }
}

/// Counts lookups so tests can assert which stages ran.
#[derive(Default)]
pub(super) struct CountingStore {
    pub(super) inner: InMemoryLodgingStore,
    pub(super) enrollment_calls: AtomicUsize,
    pub(super) ticket_calls: AtomicUsize,
    pub(super) catalog_calls: AtomicUsize,
    pub(super) by_id_calls: AtomicUsize,
}

impl CountingStore {
    pub(super) fn new(seed: SeedData) -> Self {
        Self {
            inner: InMemoryLodgingStore::from_seed(seed).expect("seed is consistent"),
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> (usize, usize, usize, usize) {
        (
            self.enrollment_calls.load(Ordering::SeqCst),
            self.ticket_calls.load(Ordering::SeqCst),
            self.catalog_calls.load(Ordering::SeqCst),
            self.by_id_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl EnrollmentRepository for CountingStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, RepositoryError> {
        self.enrollment_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_user(user_id).await
    }
}

#[async_trait]
impl TicketRepository for CountingStore {
    async fn find_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<TicketWithType>, RepositoryError> {
        self.ticket_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_enrollment(enrollment_id).await
    }
}

#[async_trait]
impl LodgingRepository for CountingStore {
    async fn find_all(&self) -> Result<Vec<Lodging>, RepositoryError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: LodgingId) -> Result<Option<Lodging>, RepositoryError> {
        self.by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }
}

/// Every lookup fails as if the database were offline.
pub(super) struct UnavailableRepository;

#[async_trait]
impl EnrollmentRepository for UnavailableRepository {
    async fn find_by_user(&self, _user_id: UserId) -> Result<Option<Enrollment>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[async_trait]
impl TicketRepository for UnavailableRepository {
    async fn find_by_enrollment(
        &self,
        _enrollment_id: EnrollmentId,
    ) -> Result<Option<TicketWithType>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[async_trait]
impl LodgingRepository for UnavailableRepository {
    async fn find_all(&self) -> Result<Vec<Lodging>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn find_by_id(&self, _id: LodgingId) -> Result<Option<Lodging>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
