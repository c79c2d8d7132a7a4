use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config::ObserverConfig;
use crate::tracker::Visibility;
use crate::viewport::{BatchHandler, Viewport, ViewportError};

const SCROLL_BEHAVIOR: &str = "scroll-behavior";

pub struct BrowserViewport {
    document: Document,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, ViewportError> {
        let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
        let document = window.document().ok_or(ViewportError::NoDocument)?;
        Ok(Self { document })
    }

    /// Makes plain `#fragment` jumps animate for as long as the guard lives.
    pub fn enable_smooth_scrolling(&self) -> Option<ScrollBehaviorGuard> {
        let root = self
            .document
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        ScrollBehaviorGuard::install(root.style())
    }

    fn region(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// An attached IntersectionObserver. Disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn to_visibility(value: JsValue) -> Option<Visibility> {
    let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
    Some(Visibility {
        id: entry.target().id(),
        ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
    })
}

impl Viewport for BrowserViewport {
    type Observation = ObserverHandle;

    fn has_region(&self, id: &str) -> bool {
        self.region(id).is_some()
    }

    fn observe(
        &self,
        ids: &[&str],
        config: &ObserverConfig,
        mut on_batch: BatchHandler,
    ) -> Result<Option<ObserverHandle>, ViewportError> {
        let elements: Vec<Element> = ids
            .iter()
            .filter_map(|id| {
                let element = self.region(id);
                if element.is_none() {
                    debug!("section #{} not in document, not observing it", id);
                }
                element
            })
            .collect();
        if elements.is_empty() {
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let batch: Vec<Visibility> = entries.iter().filter_map(to_visibility).collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin());
        let thresholds: Array = config
            .thresholds()
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();
        options.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| ViewportError::Observer(format!("{:?}", err)))?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Some(ObserverHandle {
            observer,
            _callback: callback,
        }))
    }

    fn scroll_to_region(&self, id: &str) -> bool {
        let Some(element) = self.region(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Holds `scroll-behavior: smooth` on the root element and puts the previous
/// value back on drop.
pub struct ScrollBehaviorGuard {
    style: CssStyleDeclaration,
    previous: String,
}

impl ScrollBehaviorGuard {
    fn install(style: CssStyleDeclaration) -> Option<Self> {
        let previous = style.get_property_value(SCROLL_BEHAVIOR).unwrap_or_default();
        if let Err(err) = style.set_property(SCROLL_BEHAVIOR, "smooth") {
            warn!("could not enable smooth scrolling: {:?}", err);
            return None;
        }
        Some(Self { style, previous })
    }
}

/// Value to write back when restoring, `None` meaning remove the property.
fn restored_value(previous: &str) -> Option<&str> {
    let trimmed = previous.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl Drop for ScrollBehaviorGuard {
    fn drop(&mut self) {
        let result = match restored_value(&self.previous) {
            Some(value) => self.style.set_property(SCROLL_BEHAVIOR, value),
            None => self.style.remove_property(SCROLL_BEHAVIOR).map(|_| ()),
        };
        if let Err(err) = result {
            warn!("could not restore scroll behavior: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_value() {
        assert_eq!(restored_value(""), None);
        assert_eq!(restored_value("  "), None);
        assert_eq!(restored_value("auto"), Some("auto"));
    }
}
