use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{BrandMark, MenuIcon};
use crate::config::{Section, PRODUCT_NAME};
use crate::navigator::anchor_href;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sections: Rc<[Section]>,
    pub active: &'static str,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

pub fn link_classes(is_active: bool) -> Classes {
    classes!(
        "nav-link",
        if is_active { "nav-link-active" } else { "nav-link-idle" }
    )
}

/// Click handler for an in-page anchor: keeps the `href` for no-JS and
/// middle-click, but scrolls through the navigator on a plain click.
pub fn jump_to(on_navigate: &Callback<&'static str>, id: &'static str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(id);
    })
}

fn section_links(props: &NavProps, key_prefix: &'static str) -> Html {
    props
        .sections
        .iter()
        .map(|section| {
            let is_active = props.active == section.id;
            html! {
                <a
                    key={format!("{}{}", key_prefix, section.id)}
                    href={anchor_href(section.id)}
                    onclick={jump_to(&props.on_navigate, section.id)}
                    aria-current={is_active.then_some("page")}
                    class={link_classes(is_active)}
                >
                    {section.label}
                </a>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let menu_label = if props.menu_open { "Close menu" } else { "Open menu" };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a
                    href={anchor_href("home")}
                    onclick={jump_to(&props.on_navigate, "home")}
                    class="nav-logo"
                    aria-label={format!("{} home", PRODUCT_NAME)}
                >
                    <span class="nav-logo-mark"><BrandMark /></span>
                    <span class="nav-logo-text">{PRODUCT_NAME}</span>
                </a>

                <nav class="nav-links" aria-label="Primary">
                    {section_links(props, "")}
                </nav>

                <div class="nav-actions">
                    <a
                        href={anchor_href("contact")}
                        onclick={jump_to(&props.on_navigate, "contact")}
                        class="nav-contact"
                    >
                        {"Contact"}
                    </a>
                    <a
                        href={anchor_href("contact")}
                        onclick={jump_to(&props.on_navigate, "contact")}
                        class="cta-button"
                    >
                        {"Schedule Demo"}
                    </a>
                    <button
                        type="button"
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label={menu_label}
                        aria-expanded={props.menu_open.to_string()}
                    >
                        <MenuIcon open={props.menu_open} />
                    </button>
                </div>
            </div>

            {
                if props.menu_open {
                    html! {
                        <div class="mobile-menu">
                            <nav class="mobile-links" aria-label="Mobile primary">
                                {section_links(props, "m-")}
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
