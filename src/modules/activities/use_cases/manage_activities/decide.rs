// Pure decision functions for the activity lifecycle.
//
// Purpose
// - Validate commands and turn them into what the store accepts.
//
// Responsibilities
// - Stamp ownership from the creator, never from the payload.
// - Reject updates that try to change ownership.
// - Never perform input or output.

use crate::modules::activities::core::activity::{Attendee, NewActivity};
use crate::modules::activities::core::clock_time::ClockTime;
use crate::modules::activities::core::patch::ActivityPatch;
use crate::modules::activities::use_cases::manage_activities::command::{
    AttendActivity, CreateActivity, UpdateActivity,
};
use crate::shared::core::caller::Caller;
use crate::shared::core::errors::ApplicationError;
use validator::Validate;

fn parse_time(raw: &str) -> Result<ClockTime, ApplicationError> {
    ClockTime::parse(raw).map_err(|e| ApplicationError::BadRequest(e.to_string()))
}

fn non_empty(url: String) -> Option<String> {
    (!url.is_empty()).then_some(url)
}

pub fn decide_create(
    command: CreateActivity,
    creator: &Caller,
) -> Result<NewActivity, ApplicationError> {
    command.validate()?;
    Ok(NewActivity {
        created_by_user: creator.id.clone(),
        event_start_time: parse_time(&command.event_start_time)?,
        event_end_time: parse_time(&command.event_end_time)?,
        title: command.title,
        description: command.description,
        category: command.category,
        event_date: command.event_date,
        location: command.location,
        host: command.host,
        website: command.website,
        meeting_url: command.meeting_url,
        registration_info: command.registration_info,
        capacity: command.capacity,
        cost: command.cost,
        tags: command.tags.unwrap_or_default(),
        schedule: command.schedule,
        speakers: command.speakers,
        prerequisites: command.prerequisites,
        cancellation_policy: command.cancellation_policy,
        contact_email: command.contact_email,
        social_media: command.social_media,
        privacy: command.privacy,
        accessibility: command.accessibility,
        note: command.note,
        cover_photo: command.cover_photo,
        document: command.document,
    })
}

pub fn decide_update(command: UpdateActivity) -> Result<ActivityPatch, ApplicationError> {
    if command
        .created_by_user
        .as_ref()
        .is_some_and(|value| !value.is_null())
    {
        return Err(ApplicationError::BadRequest(
            "You cannot pass user id.".into(),
        ));
    }
    command.validate()?;
    Ok(ActivityPatch {
        event_start_time: command
            .event_start_time
            .as_deref()
            .map(parse_time)
            .transpose()?,
        event_end_time: command
            .event_end_time
            .as_deref()
            .map(parse_time)
            .transpose()?,
        title: command.title,
        description: command.description,
        category: command.category,
        event_date: command.event_date,
        location: command.location,
        host: command.host,
        website: command.website,
        meeting_url: command.meeting_url,
        registration_info: command.registration_info,
        capacity: command.capacity,
        cost: command.cost,
        tags: command.tags,
        schedule: command.schedule,
        speakers: command.speakers,
        prerequisites: command.prerequisites,
        cancellation_policy: command.cancellation_policy,
        contact_email: command.contact_email,
        social_media: command.social_media,
        privacy: command.privacy,
        accessibility: command.accessibility,
        note: command.note,
        cover_photo: command.cover_photo.map(non_empty),
        document: command.document.map(non_empty),
        ..ActivityPatch::default()
    })
}

pub fn decide_attend(command: AttendActivity) -> Result<Option<Attendee>, ApplicationError> {
    command.validate()?;
    Ok(command.attendee.map(|a| Attendee {
        first_name: a.first_name,
        last_name: a.last_name,
    }))
}
