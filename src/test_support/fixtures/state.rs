// Application state over in-memory adapters, with handles kept for seeding
// and inspection.

use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use crate::shared::infrastructure::blob_store::in_memory::InMemoryBlobStore;
use crate::shell::state::AppState;
use crate::test_support::fixtures::clock::FixedClock;
use std::sync::Arc;

pub const TEST_PAGE_SIZE: u64 = 5;
pub const TEST_BLOB_BASE_URL: &str = "https://bucket.example.com";

pub struct TestApp {
    pub state: AppState,
    pub activity_store: Arc<InMemoryActivityStore>,
    pub blob_store: Arc<InMemoryBlobStore>,
    pub registration_store: Arc<InMemoryRegistrationStore>,
    pub clock: Arc<FixedClock>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(
        InMemoryActivityStore::new(),
        InMemoryBlobStore::new(TEST_BLOB_BASE_URL),
        InMemoryRegistrationStore::new(),
    )
}

/// The clock sits two weeks before the fixture activities take place.
pub fn make_test_app_with(
    activity_store: InMemoryActivityStore,
    blob_store: InMemoryBlobStore,
    registration_store: InMemoryRegistrationStore,
) -> TestApp {
    let activity_store = Arc::new(activity_store);
    let blob_store = Arc::new(blob_store);
    let registration_store = Arc::new(registration_store);
    let clock = Arc::new(FixedClock::at("2023-08-01 09:00:00"));
    let state = AppState::new(
        activity_store.clone(),
        blob_store.clone(),
        registration_store.clone(),
        clock.clone(),
        TEST_PAGE_SIZE,
    );
    TestApp {
        state,
        activity_store,
        blob_store,
        registration_store,
        clock,
    }
}
