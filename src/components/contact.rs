use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form_parts::{submit_label, ConsentCheckbox, StatusLine, FORM_STYLE};
use crate::config::{FormEndpoints, MANUAL_CONTACT_EMAIL};
use crate::forms::contact::ContactFields;
use crate::forms::use_submission;
use crate::view_state::use_prefers_reduced_motion;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_submission::<ContactFields>(FormEndpoints::from_build_env().contact);
    let reduced_motion = use_prefers_reduced_motion();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.edit(|fields| fields.name = input.value());
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.edit(|fields| fields.email = input.value());
        })
    };
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
        <section id="contact" class="contact">
            <style>
                {FORM_STYLE}
                {r#"
                    .contact {
                        padding: 6rem 1.5rem;
                        background: #0D0D0F;
                        color: #F1F1F1;
                    }
                    .contact h2 { text-align: center; font-size: 2.5rem; }
                    .contact-intro {
                        text-align: center;
                        color: rgba(241, 241, 241, 0.6);
                        margin-bottom: 2.5rem;
                    }
                    .contact-intro a { color: #E53935; }
                "#}
            </style>
            <h2>{"Nous contacter"}</h2>
            <p class="contact-intro">
                {"Une question, une information, une demande presse ? Écrivez-nous ou directement à "}
                <a href={format!("mailto:{}", MANUAL_CONTACT_EMAIL)}>{MANUAL_CONTACT_EMAIL}</a>
            </p>
            <form
                class={classes!("form-card", reduced_motion.then(|| "still"))}
                onsubmit={form.on_submit()}
            >
                <input
                    type="text"
                    placeholder="Votre nom"
                    value={current.fields().name.clone()}
                    oninput={on_name}
                    required=true
                />
                <input
                    type="email"
                    placeholder="Votre email"
                    value={current.fields().email.clone()}
                    oninput={on_email}
                    required=true
                />
                <textarea
                    placeholder="Votre message"
                    value={current.fields().message.clone()}
                    oninput={on_message}
                    required=true
                />
                <ConsentCheckbox
                    id="contact-consent"
                    checked={current.consent()}
                    label="J'accepte que mes données soient utilisées pour traiter ma demande, conformément au RGPD."
                    onchange={on_consent}
                />
                <button type="submit" class="form-submit" disabled={submitting}>
                    {submit_label(submitting, "Envoyer le message", "Envoi en cours...")}
                </button>
                <StatusLine
                    state={current.state()}
                    text={current.status().map(|s| AttrValue::from(s.to_string()))}
                />
            </form>
        </section>
    }
}
