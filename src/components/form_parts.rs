use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::SubmissionState;

#[derive(Properties, PartialEq)]
pub struct ConsentCheckboxProps {
    pub id: AttrValue,
    pub checked: bool,
    pub label: AttrValue,
    pub onchange: Callback<bool>,
}

#[function_component(ConsentCheckbox)]
pub fn consent_checkbox(props: &ConsentCheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit(input.checked());
        })
    };

    html! {
        <label class="form-consent" for={props.id.clone()}>
            <input
                id={props.id.clone()}
                type="checkbox"
                checked={props.checked}
                {onchange}
            />
            <span>{props.label.clone()}</span>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub state: SubmissionState,
    pub text: Option<AttrValue>,
}

/// Inline status under a form, announced politely to screen readers.
#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let Some(text) = props.text.clone() else {
        return html! {};
    };
    let class = match props.state {
        SubmissionState::Succeeded => "form-status success",
        SubmissionState::Failed => "form-status error",
        _ => "form-status",
    };

    html! {
        <p class={class} role="status" aria-live="polite">{text}</p>
    }
}

/// Label for a submit button, switching while a request is in flight.
pub fn submit_label(submitting: bool, idle: &'static str, busy: &'static str) -> &'static str {
    if submitting {
        busy
    } else {
        idle
    }
}

pub const FORM_STYLE: &str = r#"
    .form-card {
        max-width: 40rem;
        margin: 0 auto;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.03);
        display: flex;
        flex-direction: column;
        gap: 1rem;
        opacity: 0;
        transform: translateY(24px);
        animation: form-reveal 0.6s ease forwards;
    }
    .form-card.still {
        opacity: 1;
        transform: none;
        animation: none;
    }
    @keyframes form-reveal {
        to { opacity: 1; transform: translateY(0); }
    }
    .form-card input[type="text"],
    .form-card input[type="email"],
    .form-card textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(0, 0, 0, 0.3);
        color: #F1F1F1;
        font: inherit;
    }
    .form-card textarea { min-height: 10rem; resize: vertical; }
    .form-consent {
        display: flex;
        gap: 0.75rem;
        align-items: flex-start;
        font-size: 0.9rem;
        color: rgba(241, 241, 241, 0.7);
    }
    .form-submit {
        padding: 0.85rem 2rem;
        border: none;
        border-radius: 6px;
        background: #B4202A;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
    }
    .form-submit:disabled { opacity: 0.6; cursor: wait; }
    .form-status { font-size: 0.9rem; color: rgba(241, 241, 241, 0.7); }
    .form-status.success { color: #4CAF50; }
    .form-status.error { color: #E53935; }
"#;
