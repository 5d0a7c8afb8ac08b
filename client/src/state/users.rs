//! Filters, sort keys, and export rows for the user admin list.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::collection::{ListEntity, ListFilters, RemoteCollection, StatusFilter};
use crate::net::types::{Role, User};
use crate::util::query::pair;

/// Minimum trimmed length before autocomplete is requested.
pub const AUTOCOMPLETE_MIN_CHARS: usize = 2;

pub fn should_autocomplete(query: &str) -> bool {
    query.trim().chars().count() >= AUTOCOMPLETE_MIN_CHARS
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSort {
    /// The backend's own default; never serialized.
    #[default]
    UsernameAsc,
    UsernameDesc,
    RoleAsc,
    RoleDesc,
    StatusDesc,
    StatusAsc,
}

impl UserSort {
    pub const ALL: [Self; 6] =
        [Self::UsernameAsc, Self::UsernameDesc, Self::RoleAsc, Self::RoleDesc, Self::StatusDesc, Self::StatusAsc];

    pub fn key(self) -> &'static str {
        match self {
            Self::UsernameAsc => "username_asc",
            Self::UsernameDesc => "username_desc",
            Self::RoleAsc => "role_asc",
            Self::RoleDesc => "role_desc",
            Self::StatusDesc => "status_desc",
            Self::StatusAsc => "status_asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UsernameAsc => "Name (A-Z)",
            Self::UsernameDesc => "Name (Z-A)",
            Self::RoleAsc => "Permission (A-Z)",
            Self::RoleDesc => "Permission (Z-A)",
            Self::StatusDesc => "Status (Active > Inactive)",
            Self::StatusAsc => "Status (Inactive > Active)",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.key() == key).unwrap_or_default()
    }

    /// `(sort_by, order)` query values.
    pub fn params(self) -> (&'static str, &'static str) {
        match self {
            Self::UsernameAsc => ("username", "asc"),
            Self::UsernameDesc => ("username", "desc"),
            Self::RoleAsc => ("role", "asc"),
            Self::RoleDesc => ("role", "desc"),
            Self::StatusDesc => ("is_active", "desc"),
            Self::StatusAsc => ("is_active", "asc"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub search: String,
    pub roles: Vec<Role>,
    /// Project names.
    pub projects: Vec<String>,
    pub status: StatusFilter,
    pub sort: UserSort,
}

impl UserFilters {
    pub fn toggle_role(&mut self, role: Role) {
        if let Some(pos) = self.roles.iter().position(|r| *r == role) {
            self.roles.remove(pos);
        } else {
            self.roles.push(role);
        }
    }

    pub fn toggle_project(&mut self, name: &str) {
        if let Some(pos) = self.projects.iter().position(|p| p == name) {
            self.projects.remove(pos);
        } else {
            self.projects.push(name.to_owned());
        }
    }
}

impl ListFilters for UserFilters {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(pair("search", search));
        }
        if let Some(status) = self.status.query_value() {
            query.push(pair("status", status));
        }
        query.extend(self.roles.iter().map(|r| pair("roles", r.as_str())));
        query.extend(self.projects.iter().map(|p| pair("projects", p.as_str())));
        if self.sort != UserSort::default() {
            let (by, order) = self.sort.params();
            query.push(pair("sort_by", by));
            query.push(pair("order", order));
        }
        query
    }
}

impl ListEntity for User {
    fn csv_headers() -> &'static [&'static str] {
        &["Username", "Email", "Permission", "Status", "Projects"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.email.clone().unwrap_or_default(),
            self.role.as_str().to_owned(),
            self.status_label().to_owned(),
            self.project_names("; ").unwrap_or_else(|| "No projects".to_owned()),
        ]
    }
}

pub type UserCollection = RemoteCollection<User, UserFilters>;
