use yew::prelude::*;

use crate::view_state::derive::HeroMotion;
use crate::view_state::{use_prefers_reduced_motion, use_scroll_position};

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll = use_scroll_position();
    let reduced_motion = use_prefers_reduced_motion();
    let motion = HeroMotion::derive(scroll, reduced_motion);

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #0D0D0F;
                        color: #fff;
                        text-align: center;
                    }
                    .hero-layer {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, #0D0D0F 0%, #1B0E10 40%, #0D0D0F 100%);
                        will-change: transform;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                        padding: 0 1.5rem;
                    }
                    .hero-alert {
                        display: inline-flex;
                        gap: 1rem;
                        padding: 0.6rem 1.5rem;
                        border: 1px solid #1F1F1F;
                        border-radius: 999px;
                        background: rgba(17, 17, 19, 0.9);
                        font-size: 0.8rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        margin-bottom: 2rem;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        font-weight: 600;
                        line-height: 0.95;
                        margin-bottom: 1.25rem;
                        will-change: transform, opacity;
                    }
                    .hero-title .accent { color: #8F1A23; display: block; }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #E5E7EB;
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta {
                        padding: 0.75rem 2rem;
                        border-radius: 6px;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                        background: #B4202A;
                    }
                    .hero-cta.outline {
                        background: transparent;
                        border: 1px solid #B4202A;
                    }
                "#}
            </style>
            <div class="hero-layer" style={motion.layer_style()}></div>
            <div class="hero-content">
                <div class="hero-alert">
                    <span>{"Alerte"}</span>
                    <span>{"Révélations sur les pratiques de la clinique LEMA DENTAL à Istanbul"}</span>
                </div>
                <h1 class="hero-title" style={motion.title_style()}>
                    {"LemaClinic"}
                    <span class="accent">{"Truth"}</span>
                </h1>
                <p class="hero-subtitle" style={motion.layer_style()}>
                    {"La vérité éclaire toujours"}
                </p>
                <div class="hero-cta-group">
                    <a href="#histoire" class="hero-cta">{"Comprendre le piège"}</a>
                    <a href="#soutenir" class="hero-cta outline">{"Soutenir le projet"}</a>
                </div>
            </div>
        </section>
    }
}
