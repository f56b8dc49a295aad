use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::form_parts::{submit_label, ConsentCheckbox, StatusLine, FORM_STYLE};
use crate::config::FormEndpoints;
use crate::forms::use_submission;
use crate::forms::whistleblow::WhistleblowFields;
use crate::view_state::use_prefers_reduced_motion;

#[function_component(WhistleblowSection)]
pub fn whistleblow_section() -> Html {
    let form = use_submission::<WhistleblowFields>(FormEndpoints::from_build_env().whistleblow);
    let reduced_motion = use_prefers_reduced_motion();

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.edit(|fields| fields.message = input.value());
        })
    };
    let on_consent = {
        let form = form.clone();
        Callback::from(move |checked: bool| form.set_consent(checked))
    };

    let current = form.current();
    let submitting = current.is_submitting();

    html! {
        <section id="agir" class="whistleblow">
            <style>
                {FORM_STYLE}
                {r#"
                    .whistleblow {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(180deg, #111113 0%, #1B0E10 100%);
                        color: #F1F1F1;
                    }
                    .whistleblow h2 { text-align: center; font-size: 2.5rem; }
                    .whistleblow-guarantees {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        margin: 1.5rem 0 2.5rem;
                        padding: 0;
                        list-style: none;
                        color: rgba(241, 241, 241, 0.6);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <h2>{"Témoigner anonymement"}</h2>
            <ul class="whistleblow-guarantees">
                <li>{"Aucune donnée d'identification collectée"}</li>
                <li>{"Transmission chiffrée"}</li>
                <li>{"Lecture par le collectif uniquement"}</li>
            </ul>
            <form
                class={classes!("form-card", reduced_motion.then(|| "still"))}
                onsubmit={form.on_submit()}
            >
                <textarea
                    placeholder="Décrivez ce que vous avez vécu ou constaté..."
                    value={current.fields().message.clone()}
                    oninput={on_message}
                    required=true
                />
                <ConsentCheckbox
                    id="whistleblow-consent"
                    checked={current.consent()}
                    label="J'accepte que mon témoignage soit traité de manière anonyme par le collectif."
                    onchange={on_consent}
                />
                <button type="submit" class="form-submit" disabled={submitting}>
                    {submit_label(submitting, "Envoyer anonymement", "Envoi sécurisé...")}
                </button>
                <StatusLine
                    state={current.state()}
                    text={current.status().map(|s| AttrValue::from(s.to_string()))}
                />
            </form>
        </section>
    }
}
