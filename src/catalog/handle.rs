use std::sync::{Arc, RwLock};

use crate::catalog::loader::Catalog;

/// Shared handle for atomic catalog reload.
///
/// `current` hands out an `Arc` clone, so in-flight assessments keep
/// scoring against the catalog they started with while `swap` installs a
/// replacement for requests that start afterwards. A catalog is never
/// observed half-updated.
#[derive(Debug)]
pub struct CatalogHandle {
    inner: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog for requests starting now.
    pub fn current(&self) -> Arc<Catalog> {
        self.inner.read().expect("catalog lock poisoned").clone()
    }

    /// Atomically replace the catalog, returning the previous one.
    pub fn swap(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self.inner.write().expect("catalog lock poisoned");
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}
