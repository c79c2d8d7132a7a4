use std::rc::Rc;

pub const PRODUCT_NAME: &str = "Preside";

pub const CALENDLY_URL: &str = "https://www.calendly.com/joshschlisserman";

pub const CONTACT_EMAIL: &str = "josh@usepreside.com";

/// Fallback active id when the page is built with no sections at all.
pub const DEFAULT_SECTION: &str = "home";

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// A named vertical region of the page. The id doubles as the DOM id of the
/// `<section>` element and as the `#fragment` of its nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV: [Section; 5] = [
    Section { id: "home", label: "Home" },
    Section { id: "why", label: "Why" },
    Section { id: "solution", label: "Solution" },
    Section { id: "pricing", label: "Pricing" },
    Section { id: "contact", label: "Contact" },
];

pub fn nav_sections() -> Rc<[Section]> {
    Rc::from(NAV.as_slice())
}

/// Portion of the viewport, in percent of its height, cut off the top and
/// the bottom before intersections are measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityBand {
    top_percent: f64,
    bottom_percent: f64,
}

impl VisibilityBand {
    /// Insets are clamped to 0..=100 and the bottom inset is shrunk so the
    /// band never has negative height.
    pub fn new(top_percent: f64, bottom_percent: f64) -> Self {
        let top = clamp_percent(top_percent);
        let bottom = clamp_percent(bottom_percent).min(100.0 - top);
        Self {
            top_percent: top,
            bottom_percent: bottom,
        }
    }

    pub fn top_percent(&self) -> f64 {
        self.top_percent
    }

    pub fn bottom_percent(&self) -> f64 {
        self.bottom_percent
    }

    /// CSS margin string in the form the IntersectionObserver `rootMargin`
    /// option expects.
    pub fn root_margin(&self) -> String {
        format!("-{}% 0px -{}% 0px", self.top_percent, self.bottom_percent)
    }
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self::new(15.0, 70.0)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    pub band: VisibilityBand,
    thresholds: Vec<f64>,
}

impl ObserverConfig {
    pub fn new(band: VisibilityBand) -> Self {
        Self {
            band,
            thresholds: vec![0.2, 0.35, 0.5, 0.65],
        }
    }

    /// Replaces the ratio thresholds. Values are clamped to 0..=1, sorted and
    /// deduplicated; an empty set becomes `[0.0]` (notify on any change).
    pub fn with_thresholds(mut self, thresholds: &[f64]) -> Self {
        let mut cleaned: Vec<f64> = thresholds
            .iter()
            .filter(|t| !t.is_nan())
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        cleaned.sort_by(|a, b| a.total_cmp(b));
        cleaned.dedup();
        if cleaned.is_empty() {
            cleaned.push(0.0);
        }
        self.thresholds = cleaned;
        self
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn root_margin(&self) -> String {
        self.band.root_margin()
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::new(VisibilityBand::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_observer_config() {
        let config = ObserverConfig::default();
        assert_eq!(config.root_margin(), "-15% 0px -70% 0px");
        assert_eq!(config.thresholds(), &[0.2, 0.35, 0.5, 0.65]);
    }

    #[test]
    fn test_band_is_clamped() {
        let band = VisibilityBand::new(-5.0, 250.0);
        assert_eq!(band.top_percent(), 0.0);
        assert_eq!(band.bottom_percent(), 100.0);

        let band = VisibilityBand::new(60.0, 70.0);
        assert_eq!(band.bottom_percent(), 40.0);
        assert_eq!(band.root_margin(), "-60% 0px -40% 0px");
    }

    #[test]
    fn test_thresholds_are_sanitised() {
        let config = ObserverConfig::default().with_thresholds(&[0.5, 1.4, f64::NAN, 0.5, -1.0]);
        assert_eq!(config.thresholds(), &[0.0, 0.5, 1.0]);

        let config = ObserverConfig::default().with_thresholds(&[]);
        assert_eq!(config.thresholds(), &[0.0]);
    }

    #[test]
    fn test_nav_order() {
        let ids: Vec<&str> = nav_sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["home", "why", "solution", "pricing", "contact"]);
        assert_eq!(contact_mailto(), "mailto:josh@usepreside.com");
    }
}
