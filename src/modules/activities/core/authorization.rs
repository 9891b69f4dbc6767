// Ownership rules evaluated by the inbound layer before a mutation.

use crate::modules::activities::core::activity::Activity;
use crate::shared::core::caller::{Caller, Role};

pub fn can_create(caller: &Caller) -> bool {
    matches!(caller.role, Role::Admin | Role::Creator)
}

/// Admins may change anything, creators only what they created.
pub fn can_mutate(caller: &Caller, activity: &Activity) -> bool {
    match caller.role {
        Role::Admin => true,
        Role::Creator => activity.created_by_user == caller.id,
        Role::User => false,
    }
}
