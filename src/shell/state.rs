use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::use_cases::manage_activities::handler::ActivityLifecycleHandler;
use crate::modules::attachments::use_cases::manage_attachment::handler::AttachmentManager;
use crate::modules::registrations::adapters::outbound::registration_store_in_memory::InMemoryRegistrationStore;
use crate::modules::registrations::use_cases::manage_registrations::handler::RegistrationHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::blob_store::in_memory::InMemoryBlobStore;
use std::sync::Arc;

pub type ActivityLifecycle = ActivityLifecycleHandler<InMemoryActivityStore, InMemoryBlobStore>;
pub type Registrations = RegistrationHandler<InMemoryRegistrationStore, InMemoryActivityStore>;

#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ActivityLifecycle>,
    pub attachments: Arc<AttachmentManager<InMemoryBlobStore>>,
    pub registrations: Arc<Registrations>,
    pub page_size: u64,
}

impl AppState {
    pub fn new(
        activity_store: Arc<InMemoryActivityStore>,
        blob_store: Arc<InMemoryBlobStore>,
        registration_store: Arc<InMemoryRegistrationStore>,
        clock: Arc<dyn Clock>,
        page_size: u64,
    ) -> Self {
        let attachments = Arc::new(AttachmentManager::new(blob_store, clock.clone()));
        let activities = Arc::new(ActivityLifecycleHandler::new(
            activity_store.clone(),
            attachments.clone(),
            clock,
        ));
        let registrations = Arc::new(RegistrationHandler::new(
            registration_store,
            activity_store,
        ));
        Self {
            activities,
            attachments,
            registrations,
            page_size,
        }
    }
}
