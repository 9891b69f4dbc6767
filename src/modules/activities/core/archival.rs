// Time driven archival rule.
//
// An activity is due once its date is in the past, or it is today and its end
// time has been reached. Activities already archived never match, which makes
// the sweep idempotent.

use crate::modules::activities::core::activity::Activity;
use chrono::NaiveDateTime;

/// Predicates a store can evaluate in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityPredicate {
    DueForArchival { now: NaiveDateTime },
}

impl ActivityPredicate {
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            ActivityPredicate::DueForArchival { now } => is_due_for_archival(activity, *now),
        }
    }
}

pub fn is_due_for_archival(activity: &Activity, now: NaiveDateTime) -> bool {
    if activity.is_archived {
        return false;
    }
    let today = now.date();
    activity.event_date < today
        || (activity.event_date == today && activity.event_end_time.time() <= now.time())
}
