use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::{ObserverConfig, Section};
use crate::navigator;
use crate::tracker::{ActiveSection, Visibility};
use crate::viewport::Viewport;

/// What the view renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSnapshot {
    pub active: &'static str,
    pub menu_open: bool,
}

impl PageSnapshot {
    pub fn initial(sections: &[Section]) -> Self {
        Self {
            active: ActiveSection::new(sections).current(),
            menu_open: false,
        }
    }
}

struct PageState {
    active: ActiveSection,
    menu_open: bool,
    attached: bool,
}

impl PageState {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            active: self.active.current(),
            menu_open: self.menu_open,
        }
    }
}

type Listener = Rc<dyn Fn(PageSnapshot)>;

/// Owns the page's mutable state and its one viewport observation.
///
/// `listener` is told about every change. Observer callbacks only hold a weak
/// reference to the state, so once the controller is dropped late batches
/// have nothing to write to.
pub struct PageController<V: Viewport> {
    viewport: V,
    sections: Rc<[Section]>,
    config: ObserverConfig,
    state: Rc<RefCell<PageState>>,
    listener: Listener,
    observation: Option<V::Observation>,
}

impl<V: Viewport> PageController<V> {
    pub fn new<F>(viewport: V, sections: Rc<[Section]>, config: ObserverConfig, listener: F) -> Self
    where
        F: Fn(PageSnapshot) + 'static,
    {
        let state = PageState {
            active: ActiveSection::new(&sections),
            menu_open: false,
            attached: false,
        };
        Self {
            viewport,
            sections,
            config,
            state: Rc::new(RefCell::new(state)),
            listener: Rc::new(listener),
            observation: None,
        }
    }

    /// Starts tracking. Calling it again while attached does nothing.
    pub fn attach(&mut self) {
        if self.state.borrow().attached {
            return;
        }
        self.state.borrow_mut().attached = true;

        let ids: Vec<&str> = self.sections.iter().map(|s| s.id).collect();
        let state = Rc::downgrade(&self.state);
        let listener = Rc::clone(&self.listener);
        let on_batch = Box::new(move |batch: Vec<Visibility>| {
            let Some(state) = state.upgrade() else {
                return;
            };
            let snapshot = {
                let mut state = state.borrow_mut();
                if !state.attached || !state.active.apply(&batch) {
                    return;
                }
                state.snapshot()
            };
            debug!("active section is now #{}", snapshot.active);
            listener(snapshot);
        });

        match self.viewport.observe(&ids, &self.config, on_batch) {
            Ok(Some(observation)) => {
                info!("tracking {} page sections", ids.len());
                self.observation = Some(observation);
            }
            Ok(None) => debug!("no page sections rendered, tracker idle"),
            Err(err) => warn!("section tracking unavailable: {}", err),
        }
    }

    /// Releases the observation. Safe to call repeatedly.
    pub fn detach(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            state.attached = false;
            state.active.clear();
        }
        if self.observation.take().is_some() {
            info!("stopped tracking page sections");
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.borrow().snapshot()
    }

    /// Scrolls to `id` and closes the mobile menu. Unknown ids change nothing.
    pub fn navigate(&self, id: &str) -> bool {
        if !navigator::scroll_to_section(&self.viewport, id) {
            return false;
        }
        self.set_menu_open(false);
        true
    }

    pub fn toggle_menu(&self) {
        let open = !self.state.borrow().menu_open;
        self.set_menu_open(open);
    }

    fn set_menu_open(&self, open: bool) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if state.menu_open == open {
                return;
            }
            state.menu_open = open;
            state.snapshot()
        };
        (self.listener)(snapshot);
    }
}

impl<V: Viewport> Drop for PageController<V> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{nav_sections, VisibilityBand};
    use crate::viewport::fake::FakeViewport;

    fn recording() -> (Rc<RefCell<Vec<PageSnapshot>>>, impl Fn(PageSnapshot) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |snapshot| sink.borrow_mut().push(snapshot))
    }

    fn controller(viewport: &FakeViewport) -> (PageController<FakeViewport>, Rc<RefCell<Vec<PageSnapshot>>>) {
        let (seen, listener) = recording();
        let controller = PageController::new(viewport.clone(), nav_sections(), ObserverConfig::default(), listener);
        (controller, seen)
    }

    #[test]
    fn test_attach_observes_rendered_sections_only() {
        let viewport = FakeViewport::with_regions(&["home", "why", "contact"]);
        let (mut page, _) = controller(&viewport);
        page.attach();
        assert_eq!(viewport.live_observations(), 1);
        assert_eq!(viewport.observed(), vec!["home", "why", "contact"]);
        assert_eq!(viewport.last_config(), Some(ObserverConfig::default()));

        page.attach();
        assert_eq!(viewport.live_observations(), 1);
    }

    #[test]
    fn test_attach_without_regions_stays_idle() {
        let viewport = FakeViewport::default();
        let (mut page, seen) = controller(&viewport);
        page.attach();
        assert_eq!(viewport.live_observations(), 0);
        viewport.emit(vec![Visibility::visible("why", 0.5)]);
        assert_eq!(page.snapshot().active, "home");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_batches_update_active_section() {
        let viewport = FakeViewport::with_regions(&["home", "why", "solution"]);
        let (mut page, seen) = controller(&viewport);
        page.attach();

        viewport.emit(vec![Visibility::visible("home", 0.65)]);
        assert!(seen.borrow().is_empty());

        viewport.emit(vec![
            Visibility::hidden("home"),
            Visibility::visible("why", 0.6),
            Visibility::visible("solution", 0.3),
        ]);
        assert_eq!(page.snapshot().active, "why");
        assert_eq!(seen.borrow().last().map(|s| s.active), Some("why"));

        viewport.emit(vec![Visibility::hidden("why"), Visibility::hidden("solution")]);
        assert_eq!(page.snapshot().active, "why");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let viewport = FakeViewport::with_regions(&["home", "pricing"]);
        let (page, seen) = controller(&viewport);
        page.toggle_menu();
        assert!(page.snapshot().menu_open);

        assert!(page.navigate("pricing"));
        assert_eq!(viewport.scrolls(), vec!["pricing".to_string()]);
        assert!(!page.snapshot().menu_open);
        // navigation leaves the active id to the tracker
        assert_eq!(page.snapshot().active, "home");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let viewport = FakeViewport::with_regions(&["home"]);
        let (page, seen) = controller(&viewport);
        page.toggle_menu();
        let before = page.snapshot();

        assert!(!page.navigate("pricing"));
        assert!(viewport.scrolls().is_empty());
        assert_eq!(page.snapshot(), before);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_menu_toggle_notifies_each_change() {
        let viewport = FakeViewport::with_regions(&["home"]);
        let (page, seen) = controller(&viewport);
        assert!(page.navigate("home"));
        assert!(seen.borrow().is_empty());
        page.toggle_menu();
        page.toggle_menu();
        assert_eq!(seen.borrow().len(), 2);
        assert!(!page.snapshot().menu_open);
    }

    #[test]
    fn test_detach_releases_observer() {
        let viewport = FakeViewport::with_regions(&["home", "why"]);
        let (mut page, seen) = controller(&viewport);
        page.attach();
        page.detach();
        assert_eq!(viewport.live_observations(), 0);

        viewport.emit(vec![Visibility::visible("why", 0.5)]);
        assert!(seen.borrow().is_empty());
        assert_eq!(page.snapshot().active, "home");
    }

    #[test]
    fn test_drop_releases_observer() {
        let viewport = FakeViewport::with_regions(&["home", "why"]);
        let (mut page, seen) = controller(&viewport);
        page.attach();
        drop(page);
        assert_eq!(viewport.live_observations(), 0);
        viewport.emit(vec![Visibility::visible("why", 0.5)]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_remount_does_not_leak_observers() {
        let viewport = FakeViewport::with_regions(&["home", "why"]);
        for _ in 0..3 {
            let (mut page, _) = controller(&viewport);
            page.attach();
            assert_eq!(viewport.live_observations(), 1);
        }
        assert_eq!(viewport.live_observations(), 0);
    }

    #[test]
    fn test_custom_band_reaches_viewport() {
        let viewport = FakeViewport::with_regions(&["home"]);
        let config = ObserverConfig::new(VisibilityBand::new(10.0, 50.0)).with_thresholds(&[0.5]);
        let mut page = PageController::new(viewport.clone(), nav_sections(), config.clone(), |_| {});
        page.attach();
        assert_eq!(viewport.last_config(), Some(config));
    }
}
