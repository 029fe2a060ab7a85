use super::common::*;
use std::sync::Arc;

use crate::hotels::domain::{LodgingId, TicketStatus, UserId};
use crate::hotels::error::{AccessErrorKind, EntitlementGap, LodgingAccessError, MissingRecord};
use crate::hotels::service::LodgingService;

#[tokio::test]
async fn entitled_user_lists_hotels() {
    let service = service(entitled_seed());

    let lodgings = service.all_lodgings(USER).await.expect("entitled");

    assert_eq!(lodgings, vec![sunset_inn()]);
}

#[tokio::test]
async fn entitled_user_fetches_hotel_by_id() {
    let service = service(entitled_seed());

    let lodging = service
        .lodging_by_id(USER, LodgingId(1))
        .await
        .expect("hotel exists");

    assert_eq!(lodging.name, "Sunset Inn");
    assert_eq!(lodging.image, "http://x/y.png");
}

#[tokio::test]
async fn unknown_hotel_id_is_not_found_after_entitlement() {
    let store = Arc::new(CountingStore::new(entitled_seed()));
    let service = LodgingService::from_store(store.clone());

    let err = service
        .lodging_by_id(USER, LodgingId(999))
        .await
        .expect_err("no such hotel");

    assert_eq!(
        err,
        LodgingAccessError::NotFound(MissingRecord::Lodging(LodgingId(999)))
    );
    assert_eq!(store.calls(), (1, 1, 1, 1));
    assert!(service.all_lodgings(USER).await.is_ok());
}

#[tokio::test]
async fn denied_entitlement_skips_the_fetch() {
    let mut seed = entitled_seed();
    seed.ticket_types = vec![ticket_type(true, true)];
    let store = Arc::new(CountingStore::new(seed));
    let service = LodgingService::from_store(store.clone());

    let err = service
        .lodging_by_id(USER, LodgingId(1))
        .await
        .expect_err("remote pass");

    assert_eq!(
        err,
        LodgingAccessError::PaymentRequired(EntitlementGap::RemoteTicket)
    );
    assert_eq!(store.calls(), (1, 1, 1, 0));
}

#[tokio::test]
async fn list_fetches_catalog_again_after_gate() {
    let store = Arc::new(CountingStore::new(entitled_seed()));
    let service = LodgingService::from_store(store.clone());

    service.all_lodgings(USER).await.expect("entitled");

    assert_eq!(store.calls(), (1, 1, 2, 0));
}

#[tokio::test]
async fn both_operations_agree_on_missing_preconditions() {
    let mut no_ticket = entitled_seed();
    no_ticket.tickets.clear();
    let mut no_hotels = entitled_seed();
    no_hotels.lodgings.clear();

    let cases = [
        (entitled_seed(), UserId(99), MissingRecord::Enrollment),
        (no_ticket, USER, MissingRecord::Ticket),
        (no_hotels, USER, MissingRecord::EmptyCatalog),
    ];

    for (seed, user, cause) in cases {
        let service = service(seed);
        let expected = LodgingAccessError::NotFound(cause);
        assert_eq!(service.all_lodgings(user).await, Err(expected.clone()));
        assert_eq!(
            service.lodging_by_id(user, LodgingId(1)).await,
            Err(expected)
        );
    }
}

#[tokio::test]
async fn unpaid_ticket_requires_payment_on_both_operations() {
    let mut seed = entitled_seed();
    seed.tickets = vec![ticket(TicketStatus::Reserved)];
    let service = service(seed);

    let list = service.all_lodgings(USER).await.expect_err("unpaid");
    let detail = service
        .lodging_by_id(USER, LodgingId(1))
        .await
        .expect_err("unpaid");

    assert_eq!(list.kind(), AccessErrorKind::PaymentRequired);
    assert_eq!(detail, list);
    assert_eq!(list.to_string(), "payment required to proceed");
}

#[tokio::test]
async fn repeated_calls_yield_identical_outcomes() {
    let service = service(entitled_seed());

    let first = service.all_lodgings(USER).await;
    let second = service.all_lodgings(USER).await;
    assert_eq!(first, second);

    let missing_first = service.lodging_by_id(USER, LodgingId(5)).await;
    let missing_second = service.lodging_by_id(USER, LodgingId(5)).await;
    assert_eq!(missing_first, missing_second);
}

#[tokio::test]
async fn concurrent_requests_share_one_service() {
    let service = service(entitled_seed());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.all_lodgings(USER).await })
        })
        .collect();

    for handle in handles {
        let lodgings = handle.await.expect("task joins").expect("entitled");
        assert_eq!(lodgings.len(), 1);
    }
}

#[tokio::test]
async fn not_found_message_hides_the_cause() {
    let service = service(entitled_seed());
    let err = service
        .all_lodgings(UserId(12))
        .await
        .expect_err("not enrolled");
    assert_eq!(err.to_string(), "resource not found");
}
