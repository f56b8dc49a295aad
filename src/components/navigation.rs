use yew::prelude::*;

use crate::view_state::derive::nav_is_scrolled;
use crate::view_state::use_scroll_position;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const PRIMARY_LINKS: &[NavLink] = &[
    NavLink { href: "#hero", label: "Accueil" },
    NavLink { href: "#histoire", label: "Le piège" },
    NavLink { href: "#temoignages", label: "Témoignages" },
    NavLink { href: "#soutenir", label: "Soutenir" },
];

/// Shown under the "Plus" dropdown on desktop, inline on mobile.
pub const SECONDARY_LINKS: &[NavLink] = &[
    NavLink { href: "#agir", label: "Agir" },
    NavLink { href: "#faq", label: "FAQ" },
    NavLink { href: "#contact", label: "Contact" },
];

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scroll = use_scroll_position();
    let menu_open = use_state(|| false);
    let dropdown_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let close_all = {
        let menu_open = menu_open.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            dropdown_open.set(false);
        })
    };

    let link = |item: &NavLink, class: &'static str| {
        html! {
            <a href={item.href} class={class} onclick={close_all.clone()}>
                {item.label}
            </a>
        }
    };

    html! {
        <nav
            class={classes!("top-nav", nav_is_scrolled(scroll).then(|| "scrolled"))}
            aria-label="Navigation principale"
        >
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 13, 15, 0.85);
                        box-shadow: 0 6px 24px rgba(0, 0, 0, 0.6);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-logo span { color: #B4202A; }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-transform: uppercase;
                        letter-spacing: 0.18em;
                        font-size: 0.85rem;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: #fff; }
                    .nav-dropdown { position: relative; }
                    .nav-dropdown-menu {
                        position: absolute;
                        top: 2.25rem;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        background: rgba(17, 17, 19, 0.95);
                        border: 1px solid #1F1F1F;
                        border-radius: 10px;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 6px;
                        color: #fff;
                        padding: 0.4rem 0.6rem;
                    }
                    .mobile-menu { display: none; }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: inline-flex; }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 0.5rem;
                            padding: 0 1.5rem 1.5rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={close_all.clone()}>
                    {"LemaClinic"}<span>{"Truth"}</span>
                </a>

                <div class="nav-links">
                    { for PRIMARY_LINKS.iter().map(|item| link(item, "nav-link")) }
                    <div class="nav-dropdown">
                        <button
                            type="button"
                            class="nav-link"
                            aria-expanded={(*dropdown_open).to_string()}
                            onclick={toggle_dropdown}
                        >
                            {"Plus ▾"}
                        </button>
                        if *dropdown_open {
                            <div class="nav-dropdown-menu">
                                { for SECONDARY_LINKS.iter().map(|item| link(item, "nav-link")) }
                            </div>
                        }
                    </div>
                </div>

                <button
                    type="button"
                    class="burger-menu"
                    aria-expanded={(*menu_open).to_string()}
                    aria-label={if *menu_open { "Fermer le menu" } else { "Ouvrir le menu" }}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for PRIMARY_LINKS.iter().chain(SECONDARY_LINKS.iter()).map(|item| link(item, "nav-link")) }
            </div>
        </nav>
    }
}
