//! Copy for the landing page, kept apart from the markup that lays it out.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PainIcon {
    KnowledgeGap,
    ReworkLoops,
    LegalRisk,
    JurisdictionDrift,
    Training,
    ScatteredSources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainPoint {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: PainIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const HERO_BADGE: &str = "AI Search Warrant Co-Pilot";
pub const HERO_SUBTITLE: &str = "Draft DA-template-ready Search Warrants directly from Microsoft Word";

pub const BACKERS: [Logo; 4] = [
    Logo { src: "/logos/caffeinated-capital.png", alt: "Caffeinated Capital" },
    Logo { src: "/logos/basecase.jpg", alt: "Basecase" },
    Logo { src: "/logos/third-logo.svg", alt: "Backer logo" },
    Logo { src: "/logos/banter.png", alt: "Banter" },
];

pub const HERO_HIGHLIGHTS: [&str; 3] = [
    "DA-template mapping",
    "Integrate all your systems",
    "Microsoft Word add-in",
];

pub const CAPTURED_FACTS: [&str; 2] = [
    "Observed device behavior consistent with distribution activity.",
    "Identified location(s), date/time windows, and source of information.",
];

pub const SCRUTINY_CHECKS: [&str; 4] = [
    "Nexus clarity",
    "Staleness risk",
    "Scope limits",
    "Inference labeling",
];

pub const DRAFT_OUTPUT: &str = "DA-template-ready narrative blocks with facts separated from inference and a clear nexus to the items to be seized.";

pub const WHY_LEAD: &str = "As is, drafting search warrants stalls investigations.";

pub const PAIN_POINTS: [PainPoint; 6] = [
    PainPoint {
        title: "Head knowledge stays head knowledge",
        body: "What’s in the detective’s head doesn’t always make it into the warrant.",
        icon: PainIcon::KnowledgeGap,
    },
    PainPoint {
        title: "Rework loops burn days",
        body: "Back-and-forth between investigators, supervisors, and the DA.",
        icon: PainIcon::ReworkLoops,
    },
    PainPoint {
        title: "Late-stage legal misses",
        body: "Nexus / staleness / scope issues get caught too late.",
        icon: PainIcon::LegalRisk,
    },
    PainPoint {
        title: "Jurisdiction drift",
        body: "Templates vary by county, judge, and DA preference.",
        icon: PainIcon::JurisdictionDrift,
    },
    PainPoint {
        title: "Training isn’t consistent",
        body: "New investigators learn by osmosis and one-off feedback.",
        icon: PainIcon::Training,
    },
    PainPoint {
        title: "Facts from multiple sources",
        body: "You have to jump between systems to pull the right data accurately.",
        icon: PainIcon::ScatteredSources,
    },
];

pub const SOLUTION_LEAD: &str = "Preside is a Microsoft Word add-in that helps investigators capture facts quickly, structure them into DA-approved formats, and surface common legal weak-points before the draft hits a supervisor or judge.";

pub const STEPS: [Step; 3] = [
    Step {
        title: "Add Preside on Microsoft Word",
        detail: "Preside is a plug-in on Microsoft Word that integrates with any systems permitted access.",
    },
    Step {
        title: "Capture facts (voice/text/systems)",
        detail: "Rapid intake of observations, sources, and timelines from user input and all systems.",
    },
    Step {
        title: "Preside maps to DA template",
        detail: "Your template structure drives the output format.",
    },
];

pub const PRICING_LEAD: &str = "Start with a pilot that’s simple to evaluate and easy to stop.";
pub const PILOT_TITLE: &str = "30-day no cost pilot (limited time)";
pub const PILOT_BODY: &str = "Validate workflow fit with your template, your process, and your review standards.";

pub const PILOT_FEATURES: [&str; 4] = [
    "Unlimited drafts during pilot",
    "Works with your DA template",
    "Stick with tools you already use",
    "Integrates with any system of record",
];

pub const CONTACT_BLURB: &str = "If you’re evaluating Preside for warrant drafting, we’ll walk you through how we help save you time on investigations.";
