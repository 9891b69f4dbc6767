use crate::modules::activities::core::activity::ActivityState;
use crate::modules::activities::core::filter::ActivityFilter;
use crate::modules::activities::use_cases::manage_activities::command::UpdateActivity;
use crate::shared::core::caller::{Caller, Role};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::blob_store::BlobStore;
use crate::test_support::fixtures::commands::create_activity::CreateActivityBuilder;
use crate::test_support::fixtures::state::make_test_app;
use crate::test_support::fixtures::uploads::png_upload;
use chrono::{Duration, NaiveDate};

#[tokio::test]
async fn creates_finds_and_archives_an_activity_over_its_lifetime() {
    let test_app = make_test_app();
    let activities = &test_app.state.activities;
    let creator = Caller::new("creator-0001", Role::Creator);
    let command = CreateActivityBuilder::new()
        .created_by_user("u-other")
        .event_date(NaiveDate::from_ymd_opt(2023, 8, 15).unwrap())
        .event_start_time("10:00 AM")
        .event_end_time("1:00 PM")
        .build();

    let created = activities.create(command, &creator).await.unwrap().activity;
    assert_eq!(created.created_by_user, "creator-0001");

    let by_tag = ActivityFilter::default().with_tag_param(Some("tech"));
    let listed = activities.list(&by_tag, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    let renamed = activities
        .update(
            &created.id.to_string(),
            UpdateActivity {
                title: Some("Tech Conference 2023".into()),
                ..UpdateActivity::default()
            },
            &creator,
        )
        .await
        .unwrap();
    assert_eq!(renamed.activity.title, "Tech Conference 2023");

    // The day of the event, half an hour before it ends.
    test_app
        .clock
        .set(created.event_date.and_hms_opt(12, 30, 0).unwrap());
    assert_eq!(activities.sweep_archival().await.unwrap(), 0);
    assert_eq!(activities.list(&by_tag, None).await.unwrap().len(), 1);

    test_app.clock.advance_minutes(30);
    assert!(activities.list(&by_tag, None).await.unwrap().is_empty());
    let archived = activities.get_by_id(&created.id.to_string()).await.unwrap();
    assert_eq!(archived.state(), ActivityState::Archived);

    // Unarchiving by hand sticks until the next sweep finds it due again.
    activities.toggle_archive(&created.id.to_string()).await.unwrap();
    assert_eq!(activities.sweep_archival().await.unwrap(), 1);
}

#[tokio::test]
async fn keeps_hidden_activities_and_their_attachment_out_of_listings() {
    let test_app = make_test_app();
    let activities = &test_app.state.activities;
    let creator = Caller::new("creator-0001", Role::Creator);
    let admin = Caller::new("admin-0001", Role::Admin);
    let id = activities
        .create(CreateActivityBuilder::new().build(), &creator)
        .await
        .unwrap()
        .activity
        .id
        .to_string();
    activities.set_cover_image(&id, png_upload("poster.png")).await.unwrap();

    let deleted = activities.soft_delete(&id).await.unwrap();
    assert_eq!(deleted.activity.state(), ActivityState::Active);

    let visible = activities.list(&ActivityFilter::default(), None).await.unwrap();
    let hidden = ActivityFilter {
        hidden: true,
        ..ActivityFilter::default()
    };
    let for_admin = activities.list(&hidden, Some(&admin)).await.unwrap();
    assert!(visible.is_empty());
    assert_eq!(for_admin.len(), 1);
    assert_eq!(for_admin[0].state(), ActivityState::Hidden);
    assert!(for_admin[0].cover_photo.is_some());
    assert_eq!(test_app.blob_store.list("cover-images/").await.unwrap().len(), 1);

    // Hidden rows still archive once their date has passed.
    test_app
        .clock
        .set(test_app.clock.now() + Duration::days(30));
    let for_admin = activities
        .list(
            &ActivityFilter {
                hidden: true,
                archived: true,
                ..ActivityFilter::default()
            },
            Some(&admin),
        )
        .await
        .unwrap();
    assert_eq!(for_admin.len(), 1);
}
