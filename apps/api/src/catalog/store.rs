use std::sync::{Arc, RwLock};

use tracing::info;

use crate::catalog::{Catalog, CatalogError};
use crate::models::catalog::{Course, Industry};

/// Holds the currently published catalog snapshot.
///
/// Readers clone the `Arc` and never hold the lock while computing. Writers build a
/// modified copy, validate it, then replace the snapshot in one step, so a request
/// always sees one complete catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        // A poisoned lock still holds a fully published snapshot.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    pub fn add_industry(&self, industry: Industry) -> Result<Arc<Catalog>, CatalogError> {
        let name = industry.name.clone();
        let published = self.publish(|catalog| catalog.industries.push(industry))?;
        info!(industry = %name, "Industry added to catalog");
        Ok(published)
    }

    pub fn add_course(&self, course: Course) -> Result<Arc<Catalog>, CatalogError> {
        let code = course.code.clone();
        let published = self.publish(|catalog| catalog.courses.push(course))?;
        info!(course = %code, "Course added to catalog");
        Ok(published)
    }

    fn publish<F>(&self, edit: F) -> Result<Arc<Catalog>, CatalogError>
    where
        F: FnOnce(&mut Catalog),
    {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let mut next = Catalog::clone(&**guard);
        edit(&mut next);
        next.validate()?;

        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::builtin_catalog;

    #[test]
    fn test_add_industry_publishes_new_snapshot() {
        let store = CatalogStore::new(builtin_catalog());
        let before = store.snapshot();

        store
            .add_industry(Industry::new("Cloud Engineer", &["AWS", "Terraform"]))
            .unwrap();

        let after = store.snapshot();
        assert_eq!(before.industries.len(), 5);
        assert_eq!(after.industries.len(), 6);
        assert_eq!(after.industries[5].name, "Cloud Engineer");
    }

    #[test]
    fn test_rejected_edit_leaves_snapshot_untouched() {
        let store = CatalogStore::new(builtin_catalog());
        let err = store
            .add_course(Course::new("CS101", "Duplicate", &["Algorithms"]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(_)));
        assert_eq!(store.snapshot().courses.len(), 8);
    }

    #[test]
    fn test_clones_share_the_published_catalog() {
        let store = CatalogStore::new(builtin_catalog());
        let handle = store.clone();
        handle
            .add_course(Course::new("CS401", "Cloud Computing", &["AWS"]))
            .unwrap();
        assert!(store.snapshot().courses.iter().any(|c| c.code == "CS401"));
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let store = CatalogStore::new(builtin_catalog());
        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..20 {
                    store
                        .add_course(Course::new(&format!("X{i}"), "Extra", &["Rust"]))
                        .unwrap();
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let snapshot = store.snapshot();
                        assert!(snapshot.validate().is_ok());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.snapshot().courses.len(), 28);
    }
}
