//! Query parsing and pagination for the admin user list.

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRow;

pub const PAGE_SIZE: i64 = 20;

/// Raw `?page=&search=&filter=` parameters. Parsed leniently: these come
/// straight from the admin page URL.
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub page: Option<String>,
    pub search: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilter {
    All,
    Banned,
    Admin,
}

impl UserFilter {
    /// Anything other than `banned` / `admin` means unfiltered.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("banned") => UserFilter::Banned,
            Some("admin") => UserFilter::Admin,
            _ => UserFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserFilter::All => "all",
            UserFilter::Banned => "banned",
            UserFilter::Admin => "admin",
        }
    }

    #[cfg(test)]
    pub fn matches(&self, profile: &ProfileRow) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::Banned => profile.is_banned,
            UserFilter::Admin => profile.is_admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListParams {
    /// 1-based.
    pub page: i64,
    pub search: Option<String>,
    pub filter: UserFilter,
}

impl From<UserListQuery> for UserListParams {
    fn from(query: UserListQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1);
        let search = query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            page,
            search,
            filter: UserFilter::parse(query.filter.as_deref()),
        }
    }
}

impl UserListParams {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    /// Case-insensitive substring match on email or full name.
    /// Mirrors the `ILIKE` clause of the Postgres store.
    #[cfg(test)]
    pub fn matches_search(&self, profile: &ProfileRow) -> bool {
        let Some(search) = &self.search else {
            return true;
        };
        let needle = search.to_lowercase();
        profile.email.to_lowercase().contains(&needle)
            || profile
                .full_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
    }

    #[cfg(test)]
    pub fn matches(&self, profile: &ProfileRow) -> bool {
        self.filter.matches(profile) && self.matches_search(profile)
    }

    /// `%term%` pattern for ILIKE with wildcard characters escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| {
            let escaped = s
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    pub users: Vec<ProfileRow>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl UserPage {
    pub fn new(users: Vec<ProfileRow>, total: i64, page: i64) -> Self {
        Self {
            users,
            total,
            page,
            page_size: PAGE_SIZE,
            total_pages: (total + PAGE_SIZE - 1) / PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(email: &str, name: Option<&str>) -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: name.map(str::to_string),
            is_admin: false,
            is_banned: false,
            ban_reason: None,
            banned_at: None,
            created_at: Utc::now(),
        }
    }

    fn params(page: Option<&str>, search: Option<&str>, filter: Option<&str>) -> UserListParams {
        UserListQuery {
            page: page.map(str::to_string),
            search: search.map(str::to_string),
            filter: filter.map(str::to_string),
        }
        .into()
    }

    #[test]
    fn test_page_parsing_is_lenient() {
        assert_eq!(params(None, None, None).page, 1);
        assert_eq!(params(Some("3"), None, None).page, 3);
        assert_eq!(params(Some("0"), None, None).page, 1);
        assert_eq!(params(Some("-4"), None, None).page, 1);
        assert_eq!(params(Some("abc"), None, None).page, 1);
    }

    #[test]
    fn test_offset_uses_page_size_20() {
        assert_eq!(params(Some("1"), None, None).offset(), 0);
        assert_eq!(params(Some("3"), None, None).offset(), 40);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(UserFilter::parse(Some("banned")), UserFilter::Banned);
        assert_eq!(UserFilter::parse(Some("ADMIN")), UserFilter::Admin);
        assert_eq!(UserFilter::parse(Some("everyone")), UserFilter::All);
        assert_eq!(UserFilter::parse(None), UserFilter::All);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        assert_eq!(params(None, Some("   "), None).search, None);
    }

    #[test]
    fn test_search_matches_email_or_name() {
        let p = profile("grace@navy.mil", Some("Grace Hopper"));
        assert!(params(None, Some("NAVY"), None).matches(&p));
        assert!(params(None, Some("hopper"), None).matches(&p));
        assert!(!params(None, Some("lovelace"), None).matches(&p));
        assert!(!params(None, Some("x"), None).matches(&profile("a@b.c", None)));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(
            params(None, Some("50%_off"), None).like_pattern().unwrap(),
            "%50\\%\\_off%"
        );
        assert!(params(None, None, None).like_pattern().is_none());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(UserPage::new(vec![], 0, 1).total_pages, 0);
        assert_eq!(UserPage::new(vec![], 20, 1).total_pages, 1);
        assert_eq!(UserPage::new(vec![], 21, 1).total_pages, 2);
    }
}
