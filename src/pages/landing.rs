use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::browser::BrowserViewport;
use crate::components::icons::{CheckIcon, PainPointIcon};
use crate::components::nav::{jump_to, Nav};
use crate::config::{self, ObserverConfig, Section, CALENDLY_URL, CONTACT_EMAIL, PRODUCT_NAME};
use crate::content;
use crate::controller::{PageController, PageSnapshot};

type SharedController = Rc<RefCell<Option<PageController<BrowserViewport>>>>;

pub struct PageHandle {
    pub snapshot: PageSnapshot,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

/// Builds the page controller on mount (and again whenever `sections`
/// changes), tearing the previous one down first.
#[hook]
pub fn use_page_controller(sections: Rc<[Section]>) -> PageHandle {
    let initial = PageSnapshot::initial(&sections);
    let snapshot = use_state(move || initial);
    let controller: SharedController = use_mut_ref(|| None);

    {
        let controller = controller.clone();
        let setter = snapshot.setter();
        use_effect_with_deps(
            move |sections: &Rc<[Section]>| {
                let mut smooth_scrolling = None;
                match BrowserViewport::new() {
                    Ok(viewport) => {
                        smooth_scrolling = viewport.enable_smooth_scrolling();
                        let listener = {
                            let setter = setter.clone();
                            move |next: PageSnapshot| setter.set(next)
                        };
                        let mut page = PageController::new(
                            viewport,
                            Rc::clone(sections),
                            ObserverConfig::default(),
                            listener,
                        );
                        page.attach();
                        setter.set(page.snapshot());
                        *controller.borrow_mut() = Some(page);
                    }
                    Err(err) => warn!("landing page running without viewport: {}", err),
                }

                move || {
                    let page = controller.borrow_mut().take();
                    drop(page);
                    drop(smooth_scrolling);
                }
            },
            sections,
        );
    }

    let on_navigate = {
        let controller = controller.clone();
        Callback::from(move |id: &'static str| {
            if let Some(page) = controller.borrow().as_ref() {
                page.navigate(id);
            }
        })
    };

    let on_toggle_menu = Callback::from(move |_: ()| {
        if let Some(page) = controller.borrow().as_ref() {
            page.toggle_menu();
        }
    });

    PageHandle {
        snapshot: *snapshot,
        on_navigate,
        on_toggle_menu,
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let sections = use_memo(|_| config::nav_sections(), ());
    let sections: Rc<[Section]> = (*sections).clone();
    let page = use_page_controller(Rc::clone(&sections));

    use_effect_with_deps(
        |_| {
            info!("Landing page mounted");
            || info!("Landing page unmounted")
        },
        (),
    );

    let on_navigate = page.on_navigate.clone();

    html! {
        <div class="landing-page">
            <a href="#main" class="skip-link">{"Skip to content"}</a>

            <div class="ambient" aria-hidden="true">
                <div class="ambient-glow ambient-top"></div>
                <div class="ambient-glow ambient-left"></div>
                <div class="ambient-glow ambient-right"></div>
                <div class="ambient-dots"></div>
            </div>

            <Nav
                sections={Rc::clone(&sections)}
                active={page.snapshot.active}
                menu_open={page.snapshot.menu_open}
                on_navigate={page.on_navigate.clone()}
                on_toggle_menu={page.on_toggle_menu.clone()}
            />

            <main id="main">
                <section id="home" class="page-section">
                    <div class="section-inner hero-grid">
                        <div class="hero-copy">
                            <div class="badge"><span class="badge-dot"></span>{content::HERO_BADGE}</div>
                            <h1>{PRODUCT_NAME}</h1>
                            <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>

                            <div class="hero-cta-group">
                                <a href={CALENDLY_URL} target="_blank" rel="noreferrer" class="cta-button cta-large">
                                    {"Schedule Demo"}
                                </a>
                                <a href="#why" onclick={jump_to(&on_navigate, "why")} class="text-link">
                                    <span>{"See why it works"}</span>
                                    <span aria-hidden="true" class="arrow">{"→"}</span>
                                </a>
                            </div>

                            <div class="glass-card backers">
                                <p class="eyebrow">{"Backed by:"}</p>
                                <div class="backer-grid">
                                    { for content::BACKERS.iter().map(|logo| html! {
                                        <div key={logo.src} class="backer-logo">
                                            <img src={logo.src} alt={logo.alt} loading="lazy" />
                                        </div>
                                    }) }
                                </div>
                            </div>

                            <div class="highlight-grid">
                                { for content::HERO_HIGHLIGHTS.iter().map(|text| html! {
                                    <div key={*text} class="glass-card highlight">
                                        <span class="check-chip"><CheckIcon /></span>
                                        <p>{*text}</p>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="glass-card draft-preview">
                            <div class="preview-header">
                                <p class="eyebrow">{"Draft Preview"}</p>
                                <span class="pill pill-green">{"Guardrails on"}</span>
                            </div>

                            <div class="preview-block">
                                <p class="preview-title">{"Facts (captured)"}</p>
                                <ul class="fact-list">
                                    { for content::CAPTURED_FACTS.iter().map(|fact| html! {
                                        <li key={*fact}><span class="bullet"></span>{*fact}</li>
                                    }) }
                                </ul>
                            </div>

                            <div class="preview-block">
                                <p class="preview-title">{"Judicial scrutiny checks"}</p>
                                <div class="check-grid">
                                    { for content::SCRUTINY_CHECKS.iter().map(|check| html! {
                                        <div key={*check} class="check-chip-text">{*check}</div>
                                    }) }
                                </div>
                            </div>

                            <div class="preview-block">
                                <p class="preview-title">{"Output"}</p>
                                <p>{content::DRAFT_OUTPUT}</p>
                            </div>

                            <div class="preview-footer">
                                <p>{"No external images. No invented facts."}</p>
                                <a href={CALENDLY_URL} target="_blank" rel="noreferrer" class="ghost-button">
                                    {"Book time →"}
                                </a>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="why" class="page-section">
                    <div class="section-inner">
                        <h2>{"Why"}</h2>
                        <p class="section-lead">{content::WHY_LEAD}</p>
                        <div class="pain-grid">
                            { for content::PAIN_POINTS.iter().map(|point| html! {
                                <div key={point.title} class="glass-card pain-card">
                                    <span class="pain-icon-wrap"><PainPointIcon kind={point.icon} /></span>
                                    <div>
                                        <p class="card-title">{point.title}</p>
                                        <p class="card-body">{point.body}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="solution" class="page-section">
                    <div class="section-inner centered">
                        <h2>{"Solution"}</h2>
                        <p class="section-lead">{content::SOLUTION_LEAD}</p>
                        <div class="glass-card steps-card">
                            <p class="eyebrow">{"How it works"}</p>
                            <ol class="steps">
                                { for content::STEPS.iter().enumerate().map(|(idx, step)| html! {
                                    <li key={step.title}>
                                        <span class="step-number">{idx + 1}</span>
                                        <div>
                                            <p class="card-title">{step.title}</p>
                                            <p class="card-body">{step.detail}</p>
                                        </div>
                                    </li>
                                }) }
                            </ol>
                        </div>
                    </div>
                </section>

                <section id="pricing" class="page-section">
                    <div class="section-inner">
                        <h2>{"Pricing"}</h2>
                        <p class="section-lead">{content::PRICING_LEAD}</p>
                        <div class="glass-card pilot-card">
                            <div class="pilot-header">
                                <div>
                                    <span class="pill pill-amber">{"Limited time"}</span>
                                    <h3>{content::PILOT_TITLE}</h3>
                                    <p class="card-body">{content::PILOT_BODY}</p>
                                </div>
                                <a href={CALENDLY_URL} target="_blank" rel="noreferrer" class="cta-button cta-large">
                                    {"Schedule Demo"}
                                </a>
                            </div>
                            <div class="pilot-features">
                                { for content::PILOT_FEATURES.iter().map(|feature| html! {
                                    <div key={*feature} class="pilot-feature">
                                        <CheckIcon />
                                        <span>{*feature}</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="contact" class="page-section last">
                    <div class="section-inner">
                        <h2>{"Contact Us"}</h2>
                        <div class="glass-card contact-card">
                            <p>{content::CONTACT_BLURB}</p>
                            <div class="contact-actions">
                                <a href={CALENDLY_URL} target="_blank" rel="noreferrer" class="cta-button cta-large">
                                    {"Schedule Demo"}
                                </a>
                                <div class="email-box">
                                    {"Email: "}
                                    <a class="email-link" href={config::contact_mailto()}>{CONTACT_EMAIL}</a>
                                </div>
                            </div>
                        </div>
                        <footer class="page-footer">{format!("© {}", PRODUCT_NAME)}</footer>
                    </div>
                </section>
            </main>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #09090b;
                        color: #f4f4f5;
                        font-family: Inter, system-ui, sans-serif;
                        position: relative;
                    }

                    .skip-link {
                        position: absolute;
                        left: -9999px;
                    }

                    .skip-link:focus {
                        left: 1rem;
                        top: 1rem;
                        z-index: 100;
                        background: #fff;
                        color: #18181b;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                    }

                    .ambient {
                        pointer-events: none;
                        position: fixed;
                        inset: 0;
                    }

                    .ambient-glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }

                    .ambient-top {
                        top: -160px;
                        left: 50%;
                        width: 860px;
                        height: 520px;
                        transform: translateX(-50%);
                        background: linear-gradient(to right, rgba(99, 102, 241, 0.25), rgba(34, 211, 238, 0.15), rgba(232, 121, 249, 0.2));
                    }

                    .ambient-left {
                        bottom: -220px;
                        left: -180px;
                        width: 520px;
                        height: 520px;
                        background: linear-gradient(to top right, rgba(34, 211, 238, 0.15), rgba(52, 211, 153, 0.1));
                    }

                    .ambient-right {
                        right: -220px;
                        top: 38%;
                        width: 520px;
                        height: 520px;
                        background: linear-gradient(to top right, rgba(232, 121, 249, 0.1), rgba(99, 102, 241, 0.15));
                    }

                    .ambient-dots {
                        position: absolute;
                        inset: 0;
                        opacity: 0.18;
                        background-image: radial-gradient(circle at 1px 1px, rgba(255, 255, 255, 0.06) 1px, transparent 1px);
                        background-size: 22px 22px;
                    }

                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(9, 9, 11, 0.55);
                        backdrop-filter: blur(24px);
                    }

                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 0.75rem 1rem;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #f4f4f5;
                        text-decoration: none;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .nav-logo-mark {
                        display: grid;
                        place-items: center;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: #a5f3fc;
                    }

                    .brand-mark, .pain-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .check-icon {
                        width: 1rem;
                        height: 1rem;
                        color: #a5f3fc;
                        flex-shrink: 0;
                    }

                    .menu-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .nav-links {
                        display: flex;
                        gap: 0.25rem;
                    }

                    .nav-link {
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: background 0.2s ease, color 0.2s ease;
                    }

                    .nav-link-active {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1);
                    }

                    .nav-link-idle {
                        color: #d4d4d8;
                    }

                    .nav-link-idle:hover {
                        background: rgba(255, 255, 255, 0.05);
                        color: #f4f4f5;
                    }

                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .nav-contact, .ghost-button {
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        color: #d4d4d8;
                        text-decoration: none;
                        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1);
                    }

                    .cta-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.75rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #09090b;
                        text-decoration: none;
                        background: linear-gradient(to right, rgba(34, 211, 238, 0.9), rgba(129, 140, 248, 0.9));
                        box-shadow: 0 14px 40px -18px rgba(34, 211, 238, 0.75);
                    }

                    .cta-button:hover {
                        filter: brightness(1.1);
                    }

                    .cta-large {
                        padding: 0.75rem 1.25rem;
                    }

                    .burger-menu {
                        display: none;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: #f4f4f5;
                        cursor: pointer;
                    }

                    .mobile-menu {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(9, 9, 11, 0.7);
                    }

                    .mobile-links {
                        display: grid;
                        gap: 0.25rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0.75rem 1rem;
                    }

                    main {
                        position: relative;
                    }

                    .page-section {
                        scroll-margin-top: 6rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .page-section.last {
                        border-bottom: none;
                    }

                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }

                    .section-inner.centered {
                        text-align: center;
                    }

                    h1 {
                        margin-top: 1.5rem;
                        font-size: 3.75rem;
                        line-height: 1.02;
                        font-weight: 600;
                        color: #fff;
                    }

                    h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #fff;
                    }

                    .hero-grid {
                        display: grid;
                        grid-template-columns: 7fr 5fr;
                        gap: 2.5rem;
                        align-items: start;
                    }

                    .hero-subtitle, .section-lead {
                        max-width: 42rem;
                        font-size: 1.125rem;
                        line-height: 2rem;
                        color: #d4d4d8;
                    }

                    .centered .section-lead {
                        margin: 1rem auto 0;
                    }

                    .badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: #d4d4d8;
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .badge-dot, .bullet {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 9999px;
                        background: rgba(103, 232, 249, 0.8);
                        flex-shrink: 0;
                    }

                    .hero-cta-group, .contact-actions {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .text-link {
                        display: inline-flex;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #e4e4e7;
                        text-decoration: none;
                    }

                    .arrow {
                        color: #a1a1aa;
                    }

                    .glass-card {
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(24px);
                    }

                    .backers {
                        margin-top: 2.5rem;
                    }

                    .eyebrow {
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.025em;
                        color: #d4d4d8;
                    }

                    .backer-grid {
                        margin-top: 0.75rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 0.75rem;
                    }

                    .backer-logo {
                        display: grid;
                        place-items: center;
                        height: 3rem;
                        border-radius: 0.75rem;
                        padding: 0 0.75rem;
                        background: rgba(255, 255, 255, 0.9);
                    }

                    .backer-logo img {
                        height: 1.75rem;
                        width: auto;
                        object-fit: contain;
                    }

                    .highlight-grid, .pilot-features {
                        margin-top: 2rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                    }

                    .pilot-features {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .highlight {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .check-chip {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(to bottom right, rgba(34, 211, 238, 0.2), rgba(129, 140, 248, 0.2));
                    }

                    .preview-header, .preview-footer, .pilot-header {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 0.75rem;
                    }

                    .preview-footer {
                        margin-top: 1.5rem;
                        padding-top: 1.25rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.75rem;
                        color: #a1a1aa;
                    }

                    .pill {
                        border-radius: 9999px;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.6875rem;
                        font-weight: 600;
                    }

                    .pill-green {
                        background: rgba(52, 211, 153, 0.1);
                        color: #a7f3d0;
                    }

                    .pill-amber {
                        background: rgba(251, 191, 36, 0.1);
                        color: #fde68a;
                    }

                    .preview-block {
                        margin-top: 1rem;
                        border-radius: 1rem;
                        padding: 1rem;
                        background: rgba(9, 9, 11, 0.5);
                        font-size: 0.875rem;
                        color: #d4d4d8;
                    }

                    .preview-title {
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #e4e4e7;
                    }

                    .fact-list {
                        list-style: none;
                        padding: 0;
                    }

                    .fact-list li {
                        display: flex;
                        gap: 0.5rem;
                        align-items: baseline;
                        margin-top: 0.5rem;
                    }

                    .check-grid {
                        margin-top: 0.5rem;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.5rem;
                    }

                    .check-chip-text {
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .pain-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }

                    .pain-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                    }

                    .pain-icon-wrap {
                        display: grid;
                        place-items: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        flex-shrink: 0;
                        border-radius: 1rem;
                        color: #a5f3fc;
                        background: linear-gradient(to bottom right, rgba(34, 211, 238, 0.15), rgba(129, 140, 248, 0.15));
                    }

                    .card-title {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #fff;
                    }

                    .card-body {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        line-height: 1.5rem;
                        color: #d4d4d8;
                    }

                    .steps-card {
                        max-width: 48rem;
                        margin: 2rem auto 0;
                    }

                    .steps {
                        list-style: none;
                        padding: 0;
                        text-align: left;
                    }

                    .steps li {
                        display: grid;
                        grid-template-columns: 2.25rem 1fr;
                        gap: 0.75rem;
                        margin-top: 0.75rem;
                    }

                    .step-number {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .pilot-card {
                        margin-top: 2.5rem;
                        padding: 2rem;
                    }

                    .pilot-feature {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                        border-radius: 1rem;
                        padding: 0.75rem 1rem;
                        font-size: 0.875rem;
                        color: #d4d4d8;
                        background: rgba(9, 9, 11, 0.45);
                    }

                    .contact-card {
                        margin-top: 2rem;
                        padding: 2rem;
                        font-size: 0.875rem;
                        line-height: 1.75rem;
                        color: #d4d4d8;
                    }

                    .email-box {
                        border-radius: 1rem;
                        padding: 0.75rem 1rem;
                        background: rgba(9, 9, 11, 0.45);
                    }

                    .email-link {
                        font-weight: 600;
                        color: #fff;
                        text-underline-offset: 4px;
                    }

                    .page-footer {
                        margin-top: 2.5rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }

                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }

                        .pain-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: inline-flex;
                        }

                        h1 {
                            font-size: 3rem;
                        }

                        .pain-grid, .highlight-grid, .pilot-features, .backer-grid {
                            grid-template-columns: 1fr 1fr;
                        }

                        .hero-cta-group, .contact-actions, .pilot-header {
                            flex-direction: column;
                            align-items: stretch;
                        }
                    }

                    @media (max-width: 640px) {
                        .nav-contact {
                            display: none;
                        }

                        .pain-grid, .highlight-grid, .pilot-features {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
