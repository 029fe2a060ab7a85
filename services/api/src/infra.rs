use event_lodging::error::AppError;
use event_lodging::hotels::{InMemoryLodgingStore, LodgingService, LodgingState};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the seeded store, or an empty one when no seed file is configured.
pub(crate) fn load_store(seed_path: Option<&Path>) -> Result<Arc<InMemoryLodgingStore>, AppError> {
    let store = match seed_path {
        Some(path) => {
            let store = InMemoryLodgingStore::from_path(path)?;
            info!(path = %path.display(), hotels = store.lodging_count(), "seed loaded");
            store
        }
        None => {
            warn!("no seed file configured; every hotel request will report not found");
            InMemoryLodgingStore::default()
        }
    };

    Ok(Arc::new(store))
}

pub(crate) fn lodging_state(store: Arc<InMemoryLodgingStore>) -> LodgingState {
    LodgingState {
        service: LodgingService::from_store(store.clone()),
        sessions: store,
    }
}
