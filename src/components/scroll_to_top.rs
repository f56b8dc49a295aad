use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::view_state::derive::show_scroll_to_top;
use crate::view_state::{use_prefers_reduced_motion, use_scroll_position};

fn scroll_to_top(smooth: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let scroll = use_scroll_position();
    let reduced_motion = use_prefers_reduced_motion();

    if !show_scroll_to_top(scroll) {
        return html! {};
    }

    let onclick = Callback::from(move |_: MouseEvent| scroll_to_top(!reduced_motion));

    html! {
        <>
            <style>
                {r#"
                    .scroll-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: #B4202A;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 6px 18px rgba(0, 0, 0, 0.5);
                    }
                "#}
            </style>
            <button
                type="button"
                class="scroll-to-top"
                aria-label="Retour en haut de page"
                {onclick}
            >
                {"↑"}
            </button>
        </>
    }
}
