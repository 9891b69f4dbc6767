// Listing filters.
//
// ActivityFilter is what callers ask for (page number, tag tokens, flags).
// ActivityQuery is what stores execute (skip/limit, ownership scope). Results
// are always ordered by event date, then id.

use crate::modules::activities::core::activity::Activity;

pub const DEFAULT_PAGE_SIZE: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFilter {
    pub tags: Vec<String>,
    pub archived: bool,
    pub hidden: bool,
    pub page: u64,
    pub page_size: u64,
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            archived: false,
            hidden: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ActivityFilter {
    /// Splits a raw `tag` parameter on commas, dropping blank tokens.
    pub fn with_tag_param(mut self, raw: Option<&str>) -> Self {
        self.tags = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Page numbers below one are read as the first page.
    pub fn to_query(&self) -> ActivityQuery {
        let page = self.page.max(1);
        let page_size = self.page_size.max(1);
        ActivityQuery {
            tags: self.tags.clone(),
            is_archived: self.archived,
            is_hidden: self.hidden,
            created_by_user: None,
            skip: page_size.saturating_mul(page - 1),
            limit: page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    pub tags: Vec<String>,
    pub is_archived: bool,
    pub is_hidden: bool,
    pub created_by_user: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl ActivityQuery {
    pub fn matches(&self, activity: &Activity) -> bool {
        activity.is_archived == self.is_archived
            && activity.is_hidden == self.is_hidden
            && self
                .created_by_user
                .as_ref()
                .is_none_or(|owner| owner == &activity.created_by_user)
            && matches_tags(&activity.tags, &self.tags)
    }
}

/// Every token must occur, ignoring case, inside at least one tag.
pub fn matches_tags(tags: &[String], tokens: &[String]) -> bool {
    let tags: Vec<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
    tokens.iter().all(|token| {
        let token = token.to_lowercase();
        tags.iter().any(|tag| tag.contains(&token))
    })
}
