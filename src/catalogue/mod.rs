//! The documented API surface, as a validated table of descriptors.
//!
//! Entries are grouped by business area:
//!
//! - [`staff`]: employees, credentials, authorities, the principal
//! - [`customers`]: companies, addresses, contact persons
//! - [`calendar`]: billable times, federal states, holidays

pub mod calendar;
pub mod customers;
pub mod staff;

use crate::model::ApiDescriptor;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// An endpointPath doubles as a file stem, so no separators or dots.
static RE_ENDPOINT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("descriptor for page '{page}' has no endpointPath")]
    MissingEndpointPath { page: String },

    #[error("endpointPath '{0}' is not a safe file name (allowed: letters, digits, '_', '-')")]
    UnsafeEndpointPath(String),

    #[error("endpointPath '{0}' is used by more than one descriptor")]
    DuplicateEndpointPath(String),

    #[error("descriptor '{0}' has an empty structure and does not delegate to another resource")]
    EmptyStructure(String),

    #[error("descriptor '{path}' delegates to '{target}', which is not a documented resource")]
    UnknownDelegate { path: String, target: String },

    #[error("no descriptor with endpointPath '{0}' in the catalogue")]
    UnknownEntry(String),
}

/// Ordered, validated set of descriptors. Immutable once built.
#[derive(Debug)]
pub struct Catalogue {
    entries: Vec<ApiDescriptor>,
}

impl Catalogue {
    /// Build and validate the built-in catalogue.
    pub fn build() -> Result<Self, CatalogueError> {
        Self::new(vec![
            staff::address_book(),
            customers::addresses(),
            staff::authorities(),
            calendar::billable_times(),
            customers::contact_persons(),
            customers::companies(),
            staff::credentials(),
            staff::employees(),
            calendar::federal_states(),
            calendar::holidays(),
            staff::principal(),
        ])
    }

    /// Validate `entries` and wrap them. Fails on the first malformed descriptor.
    pub fn new(entries: Vec<ApiDescriptor>) -> Result<Self, CatalogueError> {
        validate(&entries)?;
        tracing::debug!(entries = entries.len(), "catalogue validated");
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApiDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, endpoint_path: &str) -> Option<&ApiDescriptor> {
        self.entries.iter().find(|d| d.endpoint_path == endpoint_path)
    }

    /// Subset named by `endpoint_paths`, in catalogue order.
    pub fn select(&self, endpoint_paths: &[String]) -> Result<Vec<&ApiDescriptor>, CatalogueError> {
        if let Some(unknown) = endpoint_paths.iter().find(|p| self.get(p).is_none()) {
            return Err(CatalogueError::UnknownEntry(unknown.clone()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|d| endpoint_paths.iter().any(|p| p == d.endpoint_path))
            .collect())
    }
}

fn validate(entries: &[ApiDescriptor]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for d in entries {
        if d.endpoint_path.is_empty() {
            return Err(CatalogueError::MissingEndpointPath {
                page: d.page.to_string(),
            });
        }
        if !RE_ENDPOINT_PATH.is_match(d.endpoint_path) {
            return Err(CatalogueError::UnsafeEndpointPath(d.endpoint_path.to_string()));
        }
        if !seen.insert(d.endpoint_path) {
            return Err(CatalogueError::DuplicateEndpointPath(d.endpoint_path.to_string()));
        }
    }

    for d in entries {
        match d.delegates_to {
            Some(target) => {
                // A delegate must be a real entity, not another pseudo-entity.
                let resolves = entries
                    .iter()
                    .any(|e| e.endpoint_path == target && e.delegates_to.is_none());
                if !resolves {
                    return Err(CatalogueError::UnknownDelegate {
                        path: d.endpoint_path.to_string(),
                        target: target.to_string(),
                    });
                }
            }
            None if d.structure.is_empty() => {
                return Err(CatalogueError::EmptyStructure(d.endpoint_path.to_string()));
            }
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, Field};

    fn entity(path: &'static str) -> ApiDescriptor {
        ApiDescriptor::new(path, "api/test").field(Field::new("id", "Long"))
    }

    #[test]
    fn builtin_catalogue_is_valid() {
        let catalogue = Catalogue::build().unwrap();
        assert_eq!(catalogue.len(), 11);
    }

    #[test]
    fn builtin_endpoint_paths_are_distinct() {
        let catalogue = Catalogue::build().unwrap();
        let paths: HashSet<_> = catalogue.iter().map(|d| d.endpoint_path).collect();
        assert_eq!(paths.len(), catalogue.len());
    }

    #[test]
    fn builtin_structure_empty_only_for_principal() {
        let catalogue = Catalogue::build().unwrap();
        let empty: Vec<_> = catalogue
            .iter()
            .filter(|d| d.structure.is_empty())
            .map(|d| d.endpoint_path)
            .collect();
        assert_eq!(empty, vec!["principal"]);
        assert_eq!(catalogue.get("principal").unwrap().delegates_to, Some("employees"));
    }

    #[test]
    fn builtin_order_is_stable() {
        let catalogue = Catalogue::build().unwrap();
        let paths: Vec<_> = catalogue.iter().map(|d| d.endpoint_path).collect();
        assert_eq!(
            paths,
            vec![
                "address_book",
                "addresses",
                "authorities",
                "billableTimes",
                "contactPersons",
                "companies",
                "credentials",
                "employees",
                "federalStates",
                "holidays",
                "principal",
            ]
        );
    }

    #[test]
    fn builtin_search_parameters_keep_order() {
        let catalogue = Catalogue::build().unwrap();
        let billable = catalogue.get("billableTimes").unwrap();
        let search = billable
            .endpoints
            .iter()
            .find(|e| e.path == "/search/findByProjectAndDateBetweenOrderByDateAsc")
            .unwrap();
        let names: Vec<_> = search.parameters.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["project", "start", "end"]);
    }

    #[test]
    fn rejects_duplicate_endpoint_path() {
        let err = Catalogue::new(vec![entity("holidays"), entity("holidays")]).unwrap_err();
        assert_eq!(err, CatalogueError::DuplicateEndpointPath("holidays".into()));
    }

    #[test]
    fn rejects_missing_endpoint_path() {
        let err = Catalogue::new(vec![entity("")]).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::MissingEndpointPath {
                page: "api/test".into()
            }
        );
    }

    #[test]
    fn rejects_path_separators() {
        for bad in ["../etc", "a/b", "a\\b", "a.b"] {
            let err = Catalogue::new(vec![entity(bad)]).unwrap_err();
            assert_eq!(err, CatalogueError::UnsafeEndpointPath(bad.into()));
        }
    }

    #[test]
    fn rejects_empty_structure() {
        let bare = ApiDescriptor::new("projects", "api/projects")
            .endpoint(Endpoint::get("/", "Get all projects.", "A list."));
        let err = Catalogue::new(vec![bare]).unwrap_err();
        assert_eq!(err, CatalogueError::EmptyStructure("projects".into()));
    }

    #[test]
    fn delegating_entry_may_have_empty_structure() {
        let me = ApiDescriptor::new("me", "api/me").delegates_to("employees");
        assert!(Catalogue::new(vec![entity("employees"), me]).is_ok());
    }

    #[test]
    fn rejects_unknown_delegate() {
        let me = ApiDescriptor::new("me", "api/me").delegates_to("people");
        let err = Catalogue::new(vec![entity("employees"), me]).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::UnknownDelegate {
                path: "me".into(),
                target: "people".into()
            }
        );
    }

    #[test]
    fn rejects_delegate_chain() {
        let a = ApiDescriptor::new("a", "api/a").delegates_to("b");
        let b = ApiDescriptor::new("b", "api/b").delegates_to("employees");
        assert!(Catalogue::new(vec![entity("employees"), a, b]).is_err());
    }

    #[test]
    fn select_keeps_catalogue_order() {
        let catalogue =
            Catalogue::new(vec![entity("a"), entity("b"), entity("c")]).unwrap();
        let picked = catalogue.select(&["c".into(), "a".into()]).unwrap();
        let paths: Vec<_> = picked.iter().map(|d| d.endpoint_path).collect();
        assert_eq!(paths, vec!["a", "c"]);
    }

    #[test]
    fn select_rejects_unknown_name() {
        let catalogue = Catalogue::new(vec![entity("a")]).unwrap();
        let err = catalogue.select(&["projects".into()]).unwrap_err();
        assert_eq!(err, CatalogueError::UnknownEntry("projects".into()));
    }
}
