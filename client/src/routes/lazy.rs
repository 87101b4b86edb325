//! Cache-once storage for lazily loaded views.
//!
//! DESIGN
//! ======
//! One `OnceLock` slot per route. A view is loaded the first time its route
//! is activated and then shared for the rest of the session. A failed load
//! stores nothing, so the next activation tries again. If two loads for the
//! same route overlap, the first one to finish is kept and both callers get
//! it.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};

use super::table::RouteName;

pub struct LazyViews<V> {
    slots: [OnceLock<Arc<V>>; RouteName::COUNT],
}

impl<V> LazyViews<V> {
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| OnceLock::new()) }
    }

    /// Cached view for `name`, if it has been loaded.
    pub fn get(&self, name: RouteName) -> Option<Arc<V>> {
        self.slots[name.index()].get().cloned()
    }

    pub fn is_loaded(&self, name: RouteName) -> bool {
        self.slots[name.index()].get().is_some()
    }

    /// Names whose views are cached, in table order.
    pub fn loaded(&self) -> Vec<RouteName> {
        RouteName::ALL
            .into_iter()
            .filter(|name| self.is_loaded(*name))
            .collect()
    }

    /// Return the cached view, or run `load` once and cache its result.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error; the slot stays empty in that case.
    pub async fn get_or_load<F, Fut, E>(&self, name: RouteName, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(RouteName) -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = &self.slots[name.index()];
        if let Some(view) = slot.get() {
            return Ok(Arc::clone(view));
        }
        let loaded = load(name).await?;
        Ok(Arc::clone(slot.get_or_init(|| Arc::new(loaded))))
    }
}

impl<V> Default for LazyViews<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LazyViews<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyViews").field("loaded", &self.loaded()).finish()
    }
}
