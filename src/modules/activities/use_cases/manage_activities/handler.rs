use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::archival::ActivityPredicate;
use crate::modules::activities::core::filter::ActivityFilter;
use crate::modules::activities::core::patch::ActivityPatch;
use crate::modules::activities::use_cases::manage_activities::command::{
    AttendActivity, CreateActivity, UpdateActivity,
};
use crate::modules::activities::use_cases::manage_activities::decide::{
    decide_attend, decide_create, decide_update,
};
use crate::modules::attachments::core::upload::{AttachmentSlot, FileUpload};
use crate::modules::attachments::use_cases::manage_attachment::handler::AttachmentManager;
use crate::shared::core::caller::Caller;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::blob_store::BlobStore;
use serde::Serialize;
use std::sync::Arc;

impl From<ActivityStoreError> for ApplicationError {
    fn from(error: ActivityStoreError) -> Self {
        match error {
            ActivityStoreError::Validation(message) => ApplicationError::BadRequest(message),
            ActivityStoreError::Backend(message) => ApplicationError::Internal(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityOutcome {
    pub activity: Activity,
    pub message: String,
}

impl ActivityOutcome {
    fn new(activity: Activity, message: &str) -> Self {
        Self {
            activity,
            message: message.to_string(),
        }
    }
}

fn not_found(id: &RecordId) -> ApplicationError {
    ApplicationError::NotFound(format!("Activity with ID {id} not found."))
}

/// Orchestrates reads and writes on activities.
///
/// Authorization is decided by the caller with
/// `core::authorization::can_mutate` before any mutating method is invoked.
/// Listing runs the archival sweep first, so reads are not side-effect free.
pub struct ActivityLifecycleHandler<TActivityStore, TBlobStore>
where
    TActivityStore: ActivityStore + Send + Sync + 'static,
    TBlobStore: BlobStore + Send + Sync + 'static,
{
    activities: Arc<TActivityStore>,
    attachments: Arc<AttachmentManager<TBlobStore>>,
    clock: Arc<dyn Clock>,
}

impl<TActivityStore, TBlobStore> ActivityLifecycleHandler<TActivityStore, TBlobStore>
where
    TActivityStore: ActivityStore + Send + Sync + 'static,
    TBlobStore: BlobStore + Send + Sync + 'static,
{
    pub fn new(
        activities: Arc<TActivityStore>,
        attachments: Arc<AttachmentManager<TBlobStore>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            activities,
            attachments,
            clock,
        }
    }

    /// Archives every activity whose end has passed. Returns how many changed.
    pub async fn sweep_archival(&self) -> Result<u64, ApplicationError> {
        let now = self.clock.now();
        let archived = self
            .activities
            .update_many(
                &ActivityPredicate::DueForArchival { now },
                &ActivityPatch::archived(true),
            )
            .await?;
        tracing::debug!(archived, %now, "archival sweep finished");
        Ok(archived)
    }

    pub async fn list(
        &self,
        filter: &ActivityFilter,
        caller: Option<&Caller>,
    ) -> Result<Vec<Activity>, ApplicationError> {
        self.sweep_archival().await?;
        let mut query = filter.to_query();
        if !caller.is_some_and(Caller::is_admin) {
            query.is_hidden = false;
        }
        Ok(self.activities.find(&query).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Activity, ApplicationError> {
        let id = RecordId::parse(id)?;
        self.load(&id).await
    }

    /// Activities created by `user_id` that are still active.
    pub async fn list_by_user(
        &self,
        user_id: &str,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, ApplicationError> {
        let mut query = filter.to_query();
        query.created_by_user = Some(user_id.to_string());
        query.is_archived = false;
        query.is_hidden = false;
        Ok(self.activities.find(&query).await?)
    }

    pub async fn create(
        &self,
        command: CreateActivity,
        creator: &Caller,
    ) -> Result<ActivityOutcome, ApplicationError> {
        let new_activity = decide_create(command, creator)?;
        let activity = self.activities.insert(new_activity).await?;
        tracing::info!(activity_id = %activity.id, created_by = %activity.created_by_user, "activity created");
        Ok(ActivityOutcome::new(activity, "Activity created successfully."))
    }

    /// Inline attendance counter. Does not prevent duplicate attendance.
    pub async fn attend(
        &self,
        id: &str,
        command: AttendActivity,
    ) -> Result<Activity, ApplicationError> {
        let id = RecordId::parse(id)?;
        let attendee = decide_attend(command)?;
        self.activities
            .record_attendance(&id, attendee)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    pub async fn update(
        &self,
        id: &str,
        command: UpdateActivity,
        caller: &Caller,
    ) -> Result<ActivityOutcome, ApplicationError> {
        let id = RecordId::parse(id)?;
        let patch = decide_update(command)?;
        let activity = self.patch(&id, &patch).await?;
        tracing::info!(activity_id = %id, caller = %caller.id, "activity updated");
        Ok(ActivityOutcome::new(activity, "Activity updated successfully."))
    }

    /// Hides the activity and returns it as it was before.
    pub async fn soft_delete(&self, id: &str) -> Result<ActivityOutcome, ApplicationError> {
        let id = RecordId::parse(id)?;
        let before = self.load(&id).await?;
        self.patch(&id, &ActivityPatch::hide()).await?;
        tracing::info!(activity_id = %id, "activity hidden");
        Ok(ActivityOutcome::new(before, "Activity deleted successfully."))
    }

    pub async fn toggle_archive(&self, id: &str) -> Result<ActivityOutcome, ApplicationError> {
        let id = RecordId::parse(id)?;
        let current = self.load(&id).await?;
        let activity = self
            .patch(&id, &ActivityPatch::archived(!current.is_archived))
            .await?;
        let message = if activity.is_archived {
            "Activity archived successfully."
        } else {
            "Activity unarchived successfully."
        };
        tracing::info!(activity_id = %id, is_archived = activity.is_archived, "archive toggled");
        Ok(ActivityOutcome::new(activity, message))
    }

    pub async fn set_cover_image(
        &self,
        id: &str,
        file: FileUpload,
    ) -> Result<ActivityOutcome, ApplicationError> {
        self.set_attachment(id, AttachmentSlot::CoverImage, file).await
    }

    pub async fn clear_cover_image(&self, id: &str) -> Result<ActivityOutcome, ApplicationError> {
        self.clear_attachment(id, AttachmentSlot::CoverImage).await
    }

    pub async fn set_document(
        &self,
        id: &str,
        file: FileUpload,
    ) -> Result<ActivityOutcome, ApplicationError> {
        self.set_attachment(id, AttachmentSlot::Document, file).await
    }

    pub async fn clear_document(&self, id: &str) -> Result<ActivityOutcome, ApplicationError> {
        self.clear_attachment(id, AttachmentSlot::Document).await
    }

    async fn set_attachment(
        &self,
        id: &str,
        slot: AttachmentSlot,
        file: FileUpload,
    ) -> Result<ActivityOutcome, ApplicationError> {
        let id = RecordId::parse(id)?;
        let activity = self.load(&id).await?;
        let url = self
            .attachments
            .replace(slot, slot_url(&activity, slot), file)
            .await?;
        let activity = self.patch(&id, &slot_patch(slot, Some(url))).await?;
        tracing::info!(activity_id = %id, ?slot, "attachment set");
        Ok(ActivityOutcome::new(
            activity,
            &format!("{} uploaded successfully", slot.label()),
        ))
    }

    async fn clear_attachment(
        &self,
        id: &str,
        slot: AttachmentSlot,
    ) -> Result<ActivityOutcome, ApplicationError> {
        let id = RecordId::parse(id)?;
        let activity = self.load(&id).await?;
        self.attachments
            .remove(slot, slot_url(&activity, slot))
            .await?;
        let activity = self.patch(&id, &slot_patch(slot, None)).await?;
        tracing::info!(activity_id = %id, ?slot, "attachment cleared");
        Ok(ActivityOutcome::new(
            activity,
            &format!("{} deleted successfully", slot.label()),
        ))
    }

    async fn load(&self, id: &RecordId) -> Result<Activity, ApplicationError> {
        self.activities
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn patch(
        &self,
        id: &RecordId,
        patch: &ActivityPatch,
    ) -> Result<Activity, ApplicationError> {
        self.activities
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn slot_url(activity: &Activity, slot: AttachmentSlot) -> Option<&str> {
    match slot {
        AttachmentSlot::CoverImage => activity.cover_photo.as_deref(),
        AttachmentSlot::Document => activity.document.as_deref(),
    }
}

fn slot_patch(slot: AttachmentSlot, url: Option<String>) -> ActivityPatch {
    match slot {
        AttachmentSlot::CoverImage => ActivityPatch::cover_photo(url),
        AttachmentSlot::Document => ActivityPatch::document(url),
    }
}

#[cfg(test)]
mod activity_lifecycle_handler_tests {
    use super::*;
    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::shared::core::caller::Role;
    use crate::shared::infrastructure::blob_store::in_memory::InMemoryBlobStore;
    use crate::test_support::fixtures::clock::FixedClock;
    use crate::test_support::fixtures::commands::create_activity::CreateActivityBuilder;
    use crate::test_support::fixtures::uploads::{pdf_upload, png_upload};
    use chrono::Duration;
    use rstest::{fixture, rstest};

    type Handler = ActivityLifecycleHandler<InMemoryActivityStore, InMemoryBlobStore>;

    struct Context {
        handler: Handler,
        activities: Arc<InMemoryActivityStore>,
        blobs: Arc<InMemoryBlobStore>,
        clock: Arc<FixedClock>,
    }

    fn make_context(activities: InMemoryActivityStore, blobs: InMemoryBlobStore) -> Context {
        let activities = Arc::new(activities);
        let blobs = Arc::new(blobs);
        let clock = Arc::new(FixedClock::at("2023-08-15 12:00:00"));
        let attachments = Arc::new(AttachmentManager::new(blobs.clone(), clock.clone()));
        let handler = ActivityLifecycleHandler::new(activities.clone(), attachments, clock.clone());
        Context {
            handler,
            activities,
            blobs,
            clock,
        }
    }

    #[fixture]
    fn before_each() -> Context {
        make_context(
            InMemoryActivityStore::new(),
            InMemoryBlobStore::new("https://bucket.example.com"),
        )
    }

    #[fixture]
    fn creator() -> Caller {
        Caller::new("creator-0001", Role::Creator)
    }

    fn upcoming() -> CreateActivity {
        CreateActivityBuilder::new()
            .event_date(chrono::NaiveDate::from_ymd_opt(2023, 9, 1).unwrap())
            .build()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_with_the_callers_identity(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let command = CreateActivityBuilder::new()
            .created_by_user("forged-owner")
            .build();

        let outcome = ctx.handler.create(command, &creator).await.expect("create failed");

        assert_eq!(outcome.activity.created_by_user, "creator-0001");
        assert_eq!(outcome.message, "Activity created successfully.");
        assert_eq!(outcome.activity.event_start_time.as_str(), "10:00 AM");
        assert_eq!(outcome.activity.event_end_time.as_str(), "1:00 PM");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_validation_messages_on_create(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let command = CreateActivityBuilder::new().event_start_time("25:00").build();
        let result = ctx.handler.create(command, &creator).await;
        assert!(matches!(result, Err(ApplicationError::BadRequest(m)) if m.contains("time format")));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_distinguish_malformed_ids_from_missing_records(before_each: Context) {
        let ctx = before_each;
        assert_eq!(
            ctx.handler.get_by_id("abc").await,
            Err(ApplicationError::BadRequest("Please enter correct id!".into()))
        );
        assert!(matches!(
            ctx.handler.get_by_id(&RecordId::new().to_string()).await,
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_filter_listings_by_tag(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let tech = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        let music = CreateActivityBuilder::new()
            .event_date(chrono::NaiveDate::from_ymd_opt(2023, 9, 2).unwrap())
            .tags(vec!["Music".into()])
            .build();
        ctx.handler.create(music, &creator).await.unwrap();

        let filter = ActivityFilter::default().with_tag_param(Some("tech"));
        let listed = ctx.handler.list(&filter, None).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, tech.id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_archive_past_activities_when_listing(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let today = ctx.clock.now().date();
        let yesterday = CreateActivityBuilder::new()
            .event_date(today - Duration::days(1))
            .build();
        let ended_today = CreateActivityBuilder::new()
            .event_date(today)
            .event_end_time("11:00 AM")
            .build();
        let running_today = CreateActivityBuilder::new()
            .event_date(today)
            .event_end_time("1:00 PM")
            .build();
        let yesterday = ctx.handler.create(yesterday, &creator).await.unwrap().activity;
        let ended_today = ctx.handler.create(ended_today, &creator).await.unwrap().activity;
        let running_today = ctx.handler.create(running_today, &creator).await.unwrap().activity;

        let listed = ctx.handler.list(&ActivityFilter::default(), None).await.unwrap();

        assert_eq!(listed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![running_today.id]);
        for id in [yesterday.id, ended_today.id] {
            let activity = ctx.activities.find_by_id(&id).await.unwrap().unwrap();
            assert!(activity.is_archived);
            assert!(!activity.is_hidden);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_sweep_idempotently(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let past = CreateActivityBuilder::new()
            .event_date(ctx.clock.now().date() - Duration::days(3))
            .build();
        ctx.handler.create(past, &creator).await.unwrap();
        ctx.handler.create(upcoming(), &creator).await.unwrap();

        assert_eq!(ctx.handler.sweep_archival().await.unwrap(), 1);
        let archived_once = ctx
            .handler
            .list(
                &ActivityFilter {
                    archived: true,
                    ..ActivityFilter::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(ctx.handler.sweep_archival().await.unwrap(), 0);
        let archived_twice = ctx
            .handler
            .list(
                &ActivityFilter {
                    archived: true,
                    ..ActivityFilter::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(archived_once, archived_twice);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_record_after_soft_delete(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let created = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        let id = created.id.to_string();

        let outcome = ctx.handler.soft_delete(&id).await.expect("delete failed");
        assert!(!outcome.activity.is_hidden);
        assert_eq!(outcome.message, "Activity deleted successfully.");

        let stored = ctx.handler.get_by_id(&id).await.expect("record must remain");
        assert!(stored.is_hidden);
        assert!(ctx.handler.list(&ActivityFilter::default(), None).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_only_list_hidden_activities_for_admins(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let created = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        ctx.handler.soft_delete(&created.id.to_string()).await.unwrap();
        let hidden = ActivityFilter {
            hidden: true,
            ..ActivityFilter::default()
        };

        let for_creator = ctx.handler.list(&hidden, Some(&creator)).await.unwrap();
        let admin = Caller::new("admin-0001", Role::Admin);
        let for_admin = ctx.handler.list(&hidden, Some(&admin)).await.unwrap();

        assert!(for_creator.is_empty());
        assert_eq!(for_admin.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_toggle_archive_both_ways(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let id = ctx.handler.create(upcoming(), &creator).await.unwrap().activity.id.to_string();

        let archived = ctx.handler.toggle_archive(&id).await.unwrap();
        assert!(archived.activity.is_archived);
        let restored = ctx.handler.toggle_archive(&id).await.unwrap();
        assert!(!restored.activity.is_archived);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_mutations_on_missing_records(before_each: Context) {
        let ctx = before_each;
        let id = RecordId::new().to_string();
        assert!(matches!(ctx.handler.soft_delete(&id).await, Err(ApplicationError::NotFound(_))));
        assert!(matches!(ctx.handler.toggle_archive(&id).await, Err(ApplicationError::NotFound(_))));
        assert!(matches!(
            ctx.handler.attend(&id, AttendActivity::default()).await,
            Err(ApplicationError::NotFound(_))
        ));
        assert!(matches!(
            ctx.handler
                .update(&id, UpdateActivity::default(), &Caller::new("a", Role::Admin))
                .await,
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_updates(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let created = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        let command = UpdateActivity {
            location: Some("Room 42".into()),
            ..UpdateActivity::default()
        };

        let outcome = ctx
            .handler
            .update(&created.id.to_string(), command, &creator)
            .await
            .unwrap();

        assert_eq!(outcome.activity.location, "Room 42");
        assert_eq!(outcome.activity.title, created.title);
        assert_eq!(outcome.message, "Activity updated successfully.");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_count_inline_attendance(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let id = ctx.handler.create(upcoming(), &creator).await.unwrap().activity.id.to_string();
        let named: AttendActivity =
            serde_json::from_str(r#"{"attendee":{"first_name":"Ana","last_name":"Alpha"}}"#).unwrap();

        ctx.handler.attend(&id, named.clone()).await.unwrap();
        let activity = ctx.handler.attend(&id, named).await.unwrap();

        assert_eq!(activity.attendance_count, 2);
        assert_eq!(activity.attendees.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_cover_image(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let id = ctx.handler.create(upcoming(), &creator).await.unwrap().activity.id.to_string();

        let first = ctx.handler.set_cover_image(&id, png_upload("first.png")).await.unwrap();
        ctx.clock.advance_minutes(1);
        let second = ctx.handler.set_cover_image(&id, png_upload("second.png")).await.unwrap();

        let first_url = first.activity.cover_photo.unwrap();
        let second_url = second.activity.cover_photo.unwrap();
        let keys = ctx.blobs.list("cover-images/").await.unwrap();
        assert_eq!(keys.len(), 1);
        assert!(second_url.ends_with(&keys[0]));
        assert!(!first_url.ends_with(&keys[0]));
        assert_eq!(second.message, "Cover image uploaded successfully");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_cover_images_named_with_url_delimiters(
        before_each: Context,
        creator: Caller,
    ) {
        let ctx = before_each;
        let id = ctx.handler.create(upcoming(), &creator).await.unwrap().activity.id.to_string();

        ctx.handler.set_cover_image(&id, png_upload("poster#1.png")).await.unwrap();
        ctx.clock.advance_minutes(1);
        let second = ctx
            .handler
            .set_cover_image(&id, png_upload("poster?v=2.png"))
            .await
            .unwrap();

        let keys = ctx.blobs.list("cover-images/").await.unwrap();
        assert_eq!(keys.len(), 1);
        assert!(second.activity.cover_photo.unwrap().ends_with(&keys[0]));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_record_unchanged_when_the_upload_fails(creator: Caller) {
        let mut blobs = InMemoryBlobStore::new("https://bucket.example.com");
        blobs.toggle_offline();
        let ctx = make_context(InMemoryActivityStore::new(), blobs);
        let created = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        let id = created.id.to_string();

        let result = ctx.handler.set_document(&id, pdf_upload("agenda.pdf")).await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
        assert_eq!(ctx.handler.get_by_id(&id).await.unwrap().document, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_old_url_when_the_old_blob_cannot_be_deleted(creator: Caller) {
        let mut blobs = InMemoryBlobStore::new("https://bucket.example.com");
        blobs
            .put("documents/1-old.pdf", vec![1], "application/pdf")
            .await
            .unwrap();
        blobs.toggle_failing_deletes();
        let ctx = make_context(InMemoryActivityStore::new(), blobs);
        let command = CreateActivityBuilder::new()
            .event_date(chrono::NaiveDate::from_ymd_opt(2023, 9, 1).unwrap())
            .document("https://bucket.example.com/documents/1-old.pdf")
            .build();
        let id = ctx.handler.create(command, &creator).await.unwrap().activity.id.to_string();

        let result = ctx.handler.set_document(&id, pdf_upload("new.pdf")).await;

        assert!(matches!(result, Err(ApplicationError::BadRequest(_))));
        assert_eq!(
            ctx.handler.get_by_id(&id).await.unwrap().document.as_deref(),
            Some("https://bucket.example.com/documents/1-old.pdf")
        );
        assert_eq!(ctx.blobs.list("documents/").await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_a_document(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let id = ctx.handler.create(upcoming(), &creator).await.unwrap().activity.id.to_string();
        ctx.handler.set_document(&id, pdf_upload("agenda.pdf")).await.unwrap();

        let outcome = ctx.handler.clear_document(&id).await.unwrap();

        assert_eq!(outcome.activity.document, None);
        assert!(ctx.blobs.list("documents/").await.unwrap().is_empty());
        assert_eq!(outcome.message, "Document deleted successfully");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_only_active_activities_by_creator(before_each: Context, creator: Caller) {
        let ctx = before_each;
        let mine = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        let archived = ctx.handler.create(upcoming(), &creator).await.unwrap().activity;
        ctx.handler.toggle_archive(&archived.id.to_string()).await.unwrap();
        let other = Caller::new("creator-0002", Role::Creator);
        ctx.handler.create(upcoming(), &other).await.unwrap();

        let filter = ActivityFilter {
            archived: true,
            hidden: true,
            ..ActivityFilter::default()
        };
        let listed = ctx.handler.list_by_user("creator-0001", &filter).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);
    }
}
