use crate::modules::registrations::use_cases::manage_registrations::command::UnregisterFromEvent;
use crate::shared::core::caller::{Caller, Role};
use crate::test_support::fixtures::commands::create_activity::CreateActivityBuilder;
use crate::test_support::fixtures::commands::register_for_event::RegisterForEventBuilder;
use crate::test_support::fixtures::state::make_test_app;
use chrono::NaiveDate;

#[tokio::test]
async fn registers_users_and_joins_their_events() {
    let test_app = make_test_app();
    let creator = Caller::new("creator-0001", Role::Creator);
    let activities = &test_app.state.activities;
    let registrations = &test_app.state.registrations;

    let mut event_ids = Vec::new();
    for (day, title) in [(20, "Hack night"), (18, "Book club")] {
        let command = CreateActivityBuilder::new()
            .title(title)
            .event_date(NaiveDate::from_ymd_opt(2023, 8, day).unwrap())
            .build();
        let activity = activities.create(command, &creator).await.unwrap().activity;
        event_ids.push(activity.id.to_string());
    }

    for event_id in &event_ids {
        registrations
            .attend(RegisterForEventBuilder::new().event_id(event_id).build())
            .await
            .unwrap();
    }
    registrations
        .attend(
            RegisterForEventBuilder::new()
                .user_id("user-fixed-0002")
                .event_id(&event_ids[0])
                .anonymous()
                .build(),
        )
        .await
        .unwrap();

    let signed_up = registrations
        .events_for_user("user-fixed-0001")
        .await
        .unwrap();
    let titles: Vec<_> = signed_up.iter().map(|e| e.event_title.as_str()).collect();
    assert_eq!(titles, vec!["Hack night", "Book club"]);

    let stats = registrations.stats_for_event(&event_ids[0]).await.unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.anonymous_count, 1);
    assert_eq!(stats.attendee_names, vec!["Ana Alpha"]);

    registrations
        .unattend(UnregisterFromEvent {
            user_id: "user-fixed-0001".into(),
            event_id: event_ids[0].clone(),
        })
        .await
        .unwrap();
    let signed_up = registrations
        .events_for_user("user-fixed-0001")
        .await
        .unwrap();
    assert_eq!(signed_up.len(), 1);
    assert_eq!(signed_up[0].event_title, "Book club");

    // Registrations are independent of the inline attendance counter.
    let activity = activities.get_by_id(&event_ids[0]).await.unwrap();
    assert_eq!(activity.attendance_count, 0);
}
