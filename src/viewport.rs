use thiserror::Error;

use crate::config::ObserverConfig;
use crate::tracker::Visibility;

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

pub type BatchHandler = Box<dyn FnMut(Vec<Visibility>)>;

/// The three things the page needs from its host: find a region by id, watch
/// regions against a band of the viewport, and scroll one into place.
pub trait Viewport {
    /// Live observation. Dropping it stops all further batches.
    type Observation;

    fn has_region(&self, id: &str) -> bool;

    /// Starts watching every id that resolves to a region. Ids that do not
    /// resolve are skipped; `Ok(None)` means none resolved and nothing is
    /// being watched.
    fn observe(
        &self,
        ids: &[&str],
        config: &ObserverConfig,
        on_batch: BatchHandler,
    ) -> Result<Option<Self::Observation>, ViewportError>;

    /// Smoothly scrolls the region's top edge to the top of the viewport.
    /// Returns false, without scrolling, when the id does not resolve.
    fn scroll_to_region(&self, id: &str) -> bool;
}

#[cfg(test)]
pub mod fake {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Inner {
        regions: RefCell<Vec<String>>,
        observed: RefCell<Vec<String>>,
        handler: RefCell<Option<BatchHandler>>,
        scrolls: RefCell<Vec<String>>,
        live_observations: Cell<usize>,
        last_config: RefCell<Option<ObserverConfig>>,
    }

    /// Headless host. Clones share state so a test can keep a handle after
    /// giving one to the controller.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        inner: Rc<Inner>,
    }

    pub struct FakeObservation {
        inner: Rc<Inner>,
    }

    impl Drop for FakeObservation {
        fn drop(&mut self) {
            self.inner.handler.borrow_mut().take();
            self.inner.observed.borrow_mut().clear();
            self.inner.live_observations.set(self.inner.live_observations.get() - 1);
        }
    }

    impl FakeViewport {
        pub fn with_regions(ids: &[&str]) -> Self {
            let fake = Self::default();
            fake.inner
                .regions
                .borrow_mut()
                .extend(ids.iter().map(|id| id.to_string()));
            fake
        }

        /// Delivers a batch the way the platform would, if anything is
        /// observing.
        pub fn emit(&self, batch: Vec<Visibility>) {
            let handler = self.inner.handler.borrow_mut().take();
            if let Some(mut handler) = handler {
                handler(batch);
                let mut slot = self.inner.handler.borrow_mut();
                if slot.is_none() && self.inner.live_observations.get() > 0 {
                    *slot = Some(handler);
                }
            }
        }

        pub fn observed(&self) -> Vec<String> {
            self.inner.observed.borrow().clone()
        }

        pub fn scrolls(&self) -> Vec<String> {
            self.inner.scrolls.borrow().clone()
        }

        pub fn live_observations(&self) -> usize {
            self.inner.live_observations.get()
        }

        pub fn last_config(&self) -> Option<ObserverConfig> {
            self.inner.last_config.borrow().clone()
        }
    }

    impl Viewport for FakeViewport {
        type Observation = FakeObservation;

        fn has_region(&self, id: &str) -> bool {
            self.inner.regions.borrow().iter().any(|r| r == id)
        }

        fn observe(
            &self,
            ids: &[&str],
            config: &ObserverConfig,
            on_batch: BatchHandler,
        ) -> Result<Option<FakeObservation>, ViewportError> {
            let found: Vec<String> = ids
                .iter()
                .filter(|id| self.has_region(id))
                .map(|id| id.to_string())
                .collect();
            if found.is_empty() {
                return Ok(None);
            }
            *self.inner.observed.borrow_mut() = found;
            *self.inner.handler.borrow_mut() = Some(on_batch);
            *self.inner.last_config.borrow_mut() = Some(config.clone());
            self.inner.live_observations.set(self.inner.live_observations.get() + 1);
            Ok(Some(FakeObservation {
                inner: Rc::clone(&self.inner),
            }))
        }

        fn scroll_to_region(&self, id: &str) -> bool {
            if !self.has_region(id) {
                return false;
            }
            self.inner.scrolls.borrow_mut().push(id.to_string());
            true
        }
    }
}
