use yew::prelude::*;

use crate::view_state::use_prefers_reduced_motion;

pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        question: "Comment puis-je témoigner de manière anonyme ?",
        answer: "Utilisez notre formulaire de témoignage sécurisé ci-dessus. Nous utilisons un chiffrement de bout en bout et ne collectons jamais d'adresses IP ou d'informations identifiantes. Votre anonymat est notre priorité absolue.",
    },
    Question {
        question: "Quel type de documentation acceptez-vous ?",
        answer: "Nous acceptons les dossiers médicaux, les factures, la correspondance, les photos et toute autre documentation pertinente. Tous les témoignages sont examinés attentivement et stockés en toute sécurité.",
    },
    Question {
        question: "Y a-t-il un soutien juridique disponible pour les victimes ?",
        answer: "Nous pouvons vous mettre en contact avec des professionnels du droit spécialisés dans les cas de faute médicale. Contactez-nous via le formulaire sécurisé pour plus d'informations.",
    },
];

/// At most one answer is open. Clicking the open question closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);
    let reduced_motion = use_prefers_reduced_motion();

    html! {
        <section id="faq" class="faq">
            <style>
                {r#"
                    .faq {
                        padding: 5rem 1.5rem;
                        background: #161618;
                        color: #F1F1F1;
                    }
                    .faq-header { text-align: center; margin-bottom: 3rem; }
                    .faq-header p { color: rgba(241, 241, 241, 0.6); font-size: 1.2rem; }
                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .faq-item {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(255, 255, 255, 0.03);
                        padding: 0 1.5rem;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        color: inherit;
                        font: inherit;
                        font-size: 1.1rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-question:hover { color: #E53935; }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        color: rgba(241, 241, 241, 0.6);
                        line-height: 1.6;
                        transition: max-height 0.3s ease;
                    }
                    .faq-item.open .faq-answer { max-height: 20rem; padding-bottom: 1.25rem; }
                    .faq-inner.still .faq-answer { transition: none; }
                "#}
            </style>
            <div class={classes!("faq-inner", reduced_motion.then(|| "still"))}>
                <div class="faq-header">
                    <h2>{"Questions Fréquentes"}</h2>
                    <p>{"Tout ce que vous devez savoir sur le projet"}</p>
                </div>
                <div class="faq-list">
                    { for QUESTIONS.iter().enumerate().map(|(index, item)| {
                        let is_open = *open == Some(index);
                        let toggle = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(toggle_open(*open, index)))
                        };
                        html! {
                            <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                                <button
                                    type="button"
                                    class="faq-question"
                                    aria-expanded={is_open.to_string()}
                                    onclick={toggle}
                                >
                                    {item.question}
                                    <span>{if is_open { "−" } else { "+" }}</span>
                                </button>
                                <div class="faq-answer">{item.answer}</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
