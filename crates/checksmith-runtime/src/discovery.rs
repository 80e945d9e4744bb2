//! Recursive check discovery.
//!
//! Any file at any depth under the checks root whose name follows the
//! `{group}-{service}-{test}.{ext}` protocol is a check; directory
//! structure is purely organizational and never affects identity.

use crate::{Error, Result};
use checksmith_types::{CATEGORIES, CheckDescriptor};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// One category bucket of the execution plan. Fixed categories appear
/// even when empty so coverage gaps stay visible.
#[derive(Debug, Clone)]
pub struct CategoryChecks {
    pub name: String,
    pub checks: Vec<CheckDescriptor>,
}

/// Ordered execution plan for one run: fixed categories first (in their
/// canonical order), then any unknown group tokens sorted by name.
#[derive(Debug, Clone)]
pub struct CheckPlan {
    pub categories: Vec<CategoryChecks>,
}

impl CheckPlan {
    pub fn total_checks(&self) -> usize {
        self.categories.iter().map(|c| c.checks.len()).sum()
    }
}

pub fn discover(root: &Path) -> Result<CheckPlan> {
    if !root.is_dir() {
        return Err(Error::ChecksRootMissing(root.to_path_buf()));
    }

    let mut buckets: BTreeMap<String, Vec<CheckDescriptor>> = BTreeMap::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        // Files that don't follow the naming protocol are not checks
        let Ok(descriptor) = CheckDescriptor::from_path(entry.path()) else {
            continue;
        };
        buckets.entry(descriptor.group.clone()).or_default().push(descriptor);
    }

    // File-name order, with the full path as a tiebreak so identically
    // named checks in different subdirectories sort the same everywhere
    for checks in buckets.values_mut() {
        checks.sort_by(|a, b| {
            a.file_name().cmp(&b.file_name()).then_with(|| a.path.cmp(&b.path))
        });
    }

    let mut categories: Vec<CategoryChecks> = CATEGORIES
        .into_iter()
        .map(|name| CategoryChecks {
            name: name.to_string(),
            checks: buckets.remove(name).unwrap_or_default(),
        })
        .collect();

    // Unknown group tokens are never dropped; they trail the fixed list
    for (name, checks) in buckets {
        categories.push(CategoryChecks { name, checks });
    }

    Ok(CheckPlan { categories })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = discover(Path::new("/does/not/exist")).unwrap_err();
        assert!(matches!(err, Error::ChecksRootMissing(_)));
    }

    #[test]
    fn test_empty_categories_are_reported() {
        let dir = TempDir::new().unwrap();
        let plan = discover(dir.path()).unwrap();
        assert_eq!(plan.categories.len(), CATEGORIES.len());
        assert_eq!(plan.total_checks(), 0);
    }

    #[test]
    fn test_depth_is_cosmetic_and_order_fixed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "nested/deep/security-redis-auth.sh");
        touch(dir.path(), "storage-postgres-wal.sh");
        touch(dir.path(), "security-vault-seal.ps1");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "README.md");

        let plan = discover(dir.path()).unwrap();
        assert_eq!(plan.total_checks(), 3);

        let security = &plan.categories[0];
        assert_eq!(security.name, "security");
        let names: Vec<String> = security.checks.iter().map(|d| d.file_name()).collect();
        assert_eq!(names, vec!["security-redis-auth.sh", "security-vault-seal.ps1"]);

        let storage = &plan.categories[1];
        assert_eq!(storage.name, "storage");
        assert_eq!(storage.checks.len(), 1);
    }

    #[test]
    fn test_unknown_groups_trail_fixed_categories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zeta-svc-check.sh");
        touch(dir.path(), "alpha-svc-check.sh");

        let plan = discover(dir.path()).unwrap();
        assert_eq!(plan.categories.len(), CATEGORIES.len() + 2);
        assert_eq!(plan.categories[CATEGORIES.len()].name, "alpha");
        assert_eq!(plan.categories[CATEGORIES.len() + 1].name, "zeta");
    }

    #[test]
    fn test_same_file_name_orders_by_path() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/security-redis-auth.sh");
        touch(dir.path(), "a/security-redis-auth.sh");

        let plan = discover(dir.path()).unwrap();
        let security = &plan.categories[0];
        assert_eq!(security.checks.len(), 2);
        assert!(security.checks[0].path.ends_with("a/security-redis-auth.sh"));
        assert!(security.checks[1].path.ends_with("b/security-redis-auth.sh"));
    }

    #[test]
    fn test_discovery_is_deterministic() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/security-redis-auth.sh");
        touch(dir.path(), "b/security-redis-tls.sh");
        touch(dir.path(), "monitoring-grafana-alerts.cmd");

        let first = discover(dir.path()).unwrap();
        let second = discover(dir.path()).unwrap();

        let flatten = |plan: &CheckPlan| -> Vec<CheckDescriptor> {
            plan.categories.iter().flat_map(|c| c.checks.clone()).collect()
        };
        assert_eq!(flatten(&first), flatten(&second));
    }
}
