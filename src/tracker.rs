use crate::config::{Section, DEFAULT_SECTION};

/// One intersection report for a page region, as delivered in an observer
/// batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[cfg(test)]
impl Visibility {
    pub fn visible(id: impl Into<String>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            ratio,
            is_intersecting: true,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

/// Picks the intersecting candidate with the greatest ratio. Equal ratios keep
/// the first candidate; a NaN ratio counts as zero.
pub fn most_visible<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for (id, ratio) in candidates {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio };
        match best {
            Some((_, best_ratio)) if best_ratio >= ratio => {}
            _ => best = Some((id, ratio)),
        }
    }
    best.map(|(id, _)| id)
}

/// Which section the nav bar should treat as current.
///
/// Keeps the latest reported visibility of every known section, so a batch
/// that only mentions one region is still judged against the others that are
/// in the band.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    ids: Vec<&'static str>,
    latest: Vec<Option<f64>>,
    current: &'static str,
}

impl ActiveSection {
    pub fn new(sections: &[Section]) -> Self {
        let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
        let current = ids.first().copied().unwrap_or(DEFAULT_SECTION);
        Self {
            latest: vec![None; ids.len()],
            ids,
            current,
        }
    }

    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Folds a batch of reports in and re-selects. Returns true when the
    /// active id changed. Reports for unknown ids are dropped, and when no
    /// section is in the band the current id stays.
    pub fn apply(&mut self, batch: &[Visibility]) -> bool {
        for report in batch {
            let Some(index) = self.ids.iter().position(|id| *id == report.id) else {
                log::debug!("ignoring visibility for unknown section #{}", report.id);
                continue;
            };
            self.latest[index] = report.is_intersecting.then_some(report.ratio);
        }

        let candidates = self
            .ids
            .iter()
            .zip(&self.latest)
            .filter_map(|(id, ratio)| ratio.map(|r| (*id, r)));

        match most_visible(candidates) {
            Some(id) if id != self.current => {
                self.current = id;
                true
            }
            _ => false,
        }
    }

    /// Drops every recorded report. The current id is kept.
    pub fn clear(&mut self) {
        self.latest.iter_mut().for_each(|slot| *slot = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV;

    #[test]
    fn test_most_visible_prefers_highest_ratio() {
        let picked = most_visible([("why", 0.3), ("solution", 0.6)]);
        assert_eq!(picked, Some("solution"));
    }

    #[test]
    fn test_most_visible_ties_and_empty() {
        assert_eq!(most_visible([("home", 0.5), ("why", 0.5)]), Some("home"));
        assert_eq!(most_visible([("home", f64::NAN), ("why", 0.1)]), Some("why"));
        assert_eq!(most_visible(std::iter::empty()), None);
    }

    #[test]
    fn test_starts_on_first_section() {
        let active = ActiveSection::new(&NAV);
        assert_eq!(active.current(), "home");

        let empty = ActiveSection::new(&[]);
        assert_eq!(empty.current(), DEFAULT_SECTION);
    }

    #[test]
    fn test_only_home_visible() {
        let mut active = ActiveSection::new(&NAV[1..]);
        assert!(!active.apply(&[Visibility::visible("home", 0.5)]));

        let mut active = ActiveSection::new(&NAV);
        active.apply(&[Visibility::visible("why", 0.4)]);
        assert!(active.apply(&[Visibility::hidden("why"), Visibility::visible("home", 0.35)]));
        assert_eq!(active.current(), "home");
    }

    #[test]
    fn test_higher_ratio_wins() {
        let mut active = ActiveSection::new(&NAV);
        let changed = active.apply(&[
            Visibility::visible("why", 0.3),
            Visibility::visible("pricing", 0.6),
        ]);
        assert!(changed);
        assert_eq!(active.current(), "pricing");
    }

    #[test]
    fn test_no_qualifying_section_keeps_current() {
        let mut active = ActiveSection::new(&NAV);
        active.apply(&[Visibility::visible("solution", 0.5)]);
        assert_eq!(active.current(), "solution");

        let changed = active.apply(&[Visibility::hidden("solution"), Visibility::hidden("home")]);
        assert!(!changed);
        assert_eq!(active.current(), "solution");
    }

    #[test]
    fn test_partial_batch_is_judged_against_earlier_reports() {
        let mut active = ActiveSection::new(&NAV);
        active.apply(&[
            Visibility::visible("why", 0.65),
            Visibility::visible("solution", 0.2),
        ]);
        assert_eq!(active.current(), "why");

        // Only `solution` changed; `why` is still the larger share of the band.
        assert!(!active.apply(&[Visibility::visible("solution", 0.35)]));
        assert_eq!(active.current(), "why");

        assert!(active.apply(&[Visibility::hidden("why")]));
        assert_eq!(active.current(), "solution");
    }

    #[test]
    fn test_unknown_ids_never_become_active() {
        let mut active = ActiveSection::new(&NAV);
        assert!(!active.apply(&[Visibility::visible("main", 1.0)]));
        assert!(NAV.iter().any(|s| s.id == active.current()));
    }

    #[test]
    fn test_active_is_always_a_listed_section() {
        let batches = [
            vec![Visibility::visible("pricing", 0.5), Visibility::visible("faq", 0.9)],
            vec![Visibility::visible("home", 0.2)],
            vec![Visibility::hidden("pricing"), Visibility::visible("contact", 0.35)],
            vec![Visibility::visible("why", 0.65), Visibility::visible("solution", 0.65)],
            vec![],
        ];
        for start in 0..NAV.len() {
            for end in start + 1..=NAV.len() {
                let sections = &NAV[start..end];
                let mut active = ActiveSection::new(sections);
                for batch in &batches {
                    active.apply(batch);
                    assert!(sections.iter().any(|s| s.id == active.current()));
                }
            }
        }
    }

    #[test]
    fn test_clear_forgets_reports_not_current() {
        let mut active = ActiveSection::new(&NAV);
        active.apply(&[Visibility::visible("contact", 0.5)]);
        active.clear();
        assert_eq!(active.current(), "contact");
        assert!(active.apply(&[Visibility::visible("why", 0.2)]));
        assert_eq!(active.current(), "why");
    }
}
