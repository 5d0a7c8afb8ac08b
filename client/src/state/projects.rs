//! Filters and export rows for the project admin list.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::collection::{ListEntity, ListFilters, RemoteCollection, StatusFilter};
use crate::net::types::Project;
use crate::util::query::pair;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectSort {
    #[default]
    NameAsc,
    NameDesc,
}

impl ProjectSort {
    pub const ALL: [Self; 2] = [Self::NameAsc, Self::NameDesc];

    pub fn key(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.key() == key).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    pub search: String,
    pub status: StatusFilter,
    pub sort: ProjectSort,
}

impl ListFilters for ProjectFilters {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(pair("search", search));
        }
        if let Some(status) = self.status.query_value() {
            query.push(pair("status", status));
        }
        if self.sort == ProjectSort::NameDesc {
            query.push(pair("sort_by", "project_name"));
            query.push(pair("order", "desc"));
        }
        query
    }
}

impl ListEntity for Project {
    fn csv_headers() -> &'static [&'static str] {
        &["Project", "Status", "Users", "Enabled interfaces"]
    }

    fn csv_row(&self) -> Vec<String> {
        let interfaces = self
            .enabled_interfaces()
            .into_iter()
            .map(|(_, label)| label)
            .collect::<Vec<_>>()
            .join("; ");
        vec![
            self.project_name.clone(),
            if self.is_active { "Active" } else { "Inactive" }.to_owned(),
            self.member_names().unwrap_or_else(|| "No users".to_owned()),
            interfaces,
        ]
    }
}

pub type ProjectCollection = RemoteCollection<Project, ProjectFilters>;
