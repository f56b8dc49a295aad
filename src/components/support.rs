use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::form_parts::{submit_label, ConsentCheckbox, StatusLine, FORM_STYLE};
use crate::config::FormEndpoints;
use crate::forms::newsletter::NewsletterFields;
use crate::forms::use_submission;
use crate::view_state::use_prefers_reduced_motion;

struct Pillar {
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Partager",
        text: "Faites connaître ces pratiques autour de vous et sur les réseaux.",
    },
    Pillar {
        title: "Témoigner",
        text: "Chaque témoignage renforce le dossier collectif.",
    },
    Pillar {
        title: "Suivre",
        text: "Rejoignez la vigie citoyenne pour être informé des avancées.",
    },
];

/// Support call to action with the newsletter signup.
#[function_component(SupportSection)]
pub fn support_section() -> Html {
    let form = use_submission::<NewsletterFields>(FormEndpoints::from_build_env().newsletter);
    let reduced_motion = use_prefers_reduced_motion();

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.edit(|fields| fields.email = input.value());
        })
    };
    let on_consent = {
        let form = form.clone();
        Callback::from(move |checked: bool| form.set_consent(checked))
    };

    let current = form.current();
    let submitting = current.is_submitting();

    html! {
        <section id="soutenir" class="support">
            <style>
                {FORM_STYLE}
                {r#"
                    .support {
                        padding: 6rem 1.5rem;
                        background: #111113;
                        color: #F1F1F1;
                        text-align: center;
                    }
                    .support h2 { font-size: 2.5rem; }
                    .support-pillars {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        max-width: 60rem;
                        margin: 2.5rem auto 3.5rem;
                    }
                    .support-pillar {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .support-pillar h3 { color: #E53935; }
                    .support .form-card { text-align: left; }
                "#}
            </style>
            <h2>{"Soutenir le projet"}</h2>
            <div class="support-pillars">
                { for PILLARS.iter().map(|pillar| html! {
                    <div class="support-pillar">
                        <h3>{pillar.title}</h3>
                        <p>{pillar.text}</p>
                    </div>
                }) }
            </div>
            <form
                class={classes!("form-card", reduced_motion.then(|| "still"))}
                onsubmit={form.on_submit()}
            >
                <h3>{"Rejoindre la vigie citoyenne"}</h3>
                <input
                    type="email"
                    placeholder="Votre email"
                    value={current.fields().email.clone()}
                    oninput={on_email}
                    required=true
                />
                <ConsentCheckbox
                    id="newsletter-consent"
                    checked={current.consent()}
                    label="J'accepte de recevoir les informations du collectif et peux me désinscrire à tout moment."
                    onchange={on_consent}
                />
                <button type="submit" class="form-submit" disabled={submitting}>
                    {submit_label(submitting, "S'inscrire", "Inscription...")}
                </button>
                <StatusLine
                    state={current.state()}
                    text={current.status().map(|s| AttrValue::from(s.to_string()))}
                />
            </form>
        </section>
    }
}
