use yew::prelude::*;

use crate::content::PainIcon;

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <svg class="brand-mark" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d="M6.2 14.1c2.4-5.4 7.2-8.8 12.5-9.2" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
            <path d="M7.9 19.2c4.3.7 9.1-1 12.4-4.4" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
            <path d="M4.2 9.8c.3 1.7 1.1 3.4 2.2 4.8" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" />
            <circle cx="6.1" cy="18.2" r="1.2" fill="currentColor" />
        </svg>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon() -> Html {
    html! {
        <svg class="check-icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d="M20 6L9 17l-5-5" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuIconProps {
    pub open: bool,
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &MenuIconProps) -> Html {
    let d = if props.open {
        "M6 6l12 12M18 6 6 18"
    } else {
        "M4 7h16M4 12h16M4 17h16"
    };
    html! {
        <svg class="menu-icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path d={d} stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct PainIconProps {
    pub kind: PainIcon,
}

fn title_of(kind: PainIcon) -> &'static str {
    match kind {
        PainIcon::KnowledgeGap => "Knowledge gap",
        PainIcon::ReworkLoops => "Rework loops",
        PainIcon::LegalRisk => "Legal risk",
        PainIcon::JurisdictionDrift => "Jurisdiction variation",
        PainIcon::Training => "Training",
        PainIcon::ScatteredSources => "Guardrails",
    }
}

#[function_component(PainPointIcon)]
pub fn pain_point_icon(props: &PainIconProps) -> Html {
    let shapes = match props.kind {
        PainIcon::KnowledgeGap => html! {
            <>
                <path d="M8 21h8" />
                <path d="M12 17v4" />
                <path d="M7 9a5 5 0 1 1 10 0c0 2-1 3-2 4-1 1-1 2-1 3h-4c0-1 0-2-1-3-1-1-2-2-2-4Z" />
            </>
        },
        PainIcon::ReworkLoops => html! {
            <>
                <path d="M7 7h10v10" />
                <path d="M17 7 7 17" />
                <path d="M6 12a6 6 0 0 0 6 6" />
            </>
        },
        PainIcon::LegalRisk => html! {
            <>
                <path d="M12 2v3" />
                <path d="M12 19v3" />
                <path d="M4.2 4.2l2.1 2.1" />
                <path d="M17.7 17.7l2.1 2.1" />
                <path d="M2 12h3" />
                <path d="M19 12h3" />
                <path d="M4.2 19.8l2.1-2.1" />
                <path d="M17.7 6.3l2.1-2.1" />
                <path d="M9.5 9.5 12 12l2.5 2.5" />
                <circle cx="12" cy="12" r="5.5" />
            </>
        },
        PainIcon::JurisdictionDrift => html! {
            <>
                <path d="M12 3 2 9l10 6 10-6-10-6Z" />
                <path d="M2 15l10 6 10-6" />
            </>
        },
        PainIcon::Training => html! {
            <>
                <path d="M4 19a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2" />
                <path d="M6 17V7a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v10" />
                <path d="M9 9h6" />
                <path d="M9 12h6" />
            </>
        },
        PainIcon::ScatteredSources => html! {
            <>
                <path d="M7 7h10" />
                <path d="M7 12h10" />
                <path d="M7 17h10" />
                <path d="M4 6v12" />
                <path d="M20 6v12" />
            </>
        },
    };

    html! {
        <svg
            class="pain-icon"
            viewBox="0 0 24 24"
            fill="none"
            aria-hidden="true"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <title>{title_of(props.kind)}</title>
            {shapes}
        </svg>
    }
}
