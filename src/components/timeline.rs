use yew::prelude::*;

use crate::view_state::derive::TimelineMotion;
use crate::view_state::{use_prefers_reduced_motion, use_scroll_position, use_visible_sections};

pub struct Source {
    pub label: &'static str,
    pub info: &'static str,
}

pub struct TimelineStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub sources: &'static [Source],
}

pub const STEPS: &[TimelineStep] = &[
    TimelineStep {
        number: 1,
        title: "L'appât commercial",
        description: "Des devis attractifs et un discours rassurant. Sous couvert de soins \"haut de gamme\", tout est pensé pour instaurer la confiance et provoquer le départ vers Istanbul.",
        details: &[
            "Publicités agressives sur Instagram et Facebook",
            "Prix annoncés 60 à 70 % moins chers, avec hôtel et transferts offerts",
            "Communication ultra-réactive et rassurante via WhatsApp",
            "Partenariats avec des influenceurs pour promouvoir la clinique",
        ],
        sources: &[
            Source { label: "Témoignage patient #12", info: "Devis initial de 3500 € pour 20 facettes et couronnes" },
            Source { label: "Conversation WhatsApp", info: "Échanges avant le départ" },
        ],
    },
    TimelineStep {
        number: 2,
        title: "Le piège",
        description: "Une fois sur place, le patient dépend entièrement de la clinique. Les consentements sont signés dans la précipitation, sous pression psychologique et logistique.",
        details: &[
            "Examen initial expédié en moins de dix minutes",
            "Plan de traitement modifié sur place au profit de soins plus coûteux",
            "Multiplication des actes non prévus : meulage, dévitalisations, couronnes",
            "Facture finale 2 à 3 fois supérieure au devis",
        ],
        sources: &[
            Source { label: "Factures comparées", info: "Documents avant et après traitement" },
            Source { label: "Export de conversations WhatsApp", info: "" },
        ],
    },
    TimelineStep {
        number: 3,
        title: "L'impasse",
        description: "Entre les mains du chirurgien, des pratiques expéditives où le profit prime sur la santé. Le patient ne contrôle plus rien.",
        details: &[
            "Complications post-opératoires graves : douleurs chroniques, pulpite",
            "Aucun suivi médical après le retour en Europe",
            "Clinique injoignable ou réponses évasives",
            "Coûts de réparation en Europe dépassant les économies initiales",
        ],
        sources: &[
            Source { label: "Rapports et examens médicaux", info: "Dentistes français, 2025" },
            Source { label: "Échanges emails", info: "Tentatives de contact restées sans réponse" },
        ],
    },
    TimelineStep {
        number: 4,
        title: "La vérité éclate",
        description: "Faire émerger la vérité par la justice. Parce que le silence protège les fautes.",
        details: &[
            "Création de groupes d'entraide entre victimes",
            "Publication de preuves : factures, photos, rapports médicaux",
            "Plaintes déposées auprès des autorités compétentes",
            "Demande d'enquête officielle sur les pratiques de la clinique",
        ],
        sources: &[
            Source { label: "Groupe Facebook", info: "Nombreux témoignages recensés" },
            Source { label: "Plainte en cours de dépôt", info: "" },
        ],
    },
];

#[derive(Properties, PartialEq)]
struct StepDialogProps {
    index: usize,
    on_close: Callback<MouseEvent>,
}

#[function_component(StepDialog)]
fn step_dialog(props: &StepDialogProps) -> Html {
    let Some(step) = STEPS.get(props.index) else {
        return html! {};
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="timeline-dialog-backdrop" onclick={props.on_close.clone()}>
            <div class="timeline-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button type="button" class="timeline-dialog-close" aria-label="Fermer" onclick={props.on_close.clone()}>
                    {"✕"}
                </button>
                <span class="timeline-badge">{format!("Étape {}", step.number)}</span>
                <h3>{step.title}</h3>
                <p>{step.description}</p>
                <h4>{"Détails de l'étape"}</h4>
                <ul>
                    { for step.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                </ul>
                <h4>{"Sources et preuves"}</h4>
                { for step.sources.iter().map(|source| html! {
                    <div class="timeline-source">
                        <strong>{source.label}</strong>
                        if !source.info.is_empty() {
                            <p>{source.info}</p>
                        }
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let scroll = use_scroll_position();
    let reduced_motion = use_prefers_reduced_motion();
    let anchors = use_memo(
        |_| STEPS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );
    let visible = use_visible_sections((*anchors).clone(), reduced_motion);
    let motion = TimelineMotion::derive(scroll, &visible, reduced_motion);
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <section id="histoire" class="timeline">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        overflow: hidden;
                        padding: 8rem 1.5rem;
                        background: #111113;
                        color: #F1F1F1;
                    }
                    .timeline-bg, .timeline-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        will-change: transform;
                    }
                    .timeline-bg {
                        background: linear-gradient(90deg, rgba(180, 32, 42, 0.05), transparent, rgba(180, 32, 42, 0.05));
                    }
                    .timeline-glow {
                        background: radial-gradient(circle at 15% 20%, rgba(180, 32, 42, 0.12), transparent 40%);
                    }
                    .timeline-inner {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .timeline h2 {
                        text-align: center;
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        font-weight: 900;
                        margin-bottom: 3rem;
                    }
                    .timeline-segments {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 4rem;
                    }
                    .timeline-segment {
                        flex: 1;
                        height: 4px;
                        border-radius: 2px;
                        background: rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }
                    .timeline-segment-fill {
                        height: 100%;
                        background: #B4202A;
                        transition: width 0.5s ease;
                    }
                    .timeline-track {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .timeline-rail {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        width: 3px;
                        background: linear-gradient(#B4202A, transparent);
                        transform: translateX(-50%);
                        transition: height 1s ease;
                    }
                    .timeline-step {
                        width: 46%;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(255, 255, 255, 0.03);
                        cursor: pointer;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .timeline-step.right { align-self: flex-end; }
                    .timeline-step.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .timeline-step.still { transition: none; }
                    .timeline-badge {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        background: #B4202A;
                        font-weight: 700;
                        font-size: 0.85rem;
                    }
                    .timeline-dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 70;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .timeline-dialog {
                        position: relative;
                        max-width: 48rem;
                        max-height: 80vh;
                        overflow-y: auto;
                        padding: 2.5rem;
                        border-radius: 1rem;
                        background: #161618;
                    }
                    .timeline-dialog-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .timeline-source {
                        padding: 1rem;
                        margin-top: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    @media (max-width: 1024px) {
                        .timeline-step { width: 100%; }
                        .timeline-rail { display: none; }
                    }
                "#}
            </style>
            <div class="timeline-bg" style={format!("transform: translateY({:.1}px);", motion.background_offset)}></div>
            <div class="timeline-glow" style={format!("transform: translateY({:.1}px);", motion.glow_offset)}></div>

            <div class="timeline-inner">
                <h2>{"Une mécanique bien étudiée"}</h2>

                <div class="timeline-segments" aria-hidden="true">
                    { for motion.segments.iter().map(|fill| html! {
                        <div class="timeline-segment">
                            <div class="timeline-segment-fill" style={format!("width: {:.1}%;", fill)}></div>
                        </div>
                    }) }
                </div>

                <div class="timeline-track">
                    <div class="timeline-rail" style={format!("height: {:.1}%;", motion.progress)}></div>
                    { for STEPS.iter().zip(anchors.iter()).enumerate().map(|(index, (step, anchor))| {
                        let open = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(index)))
                        };
                        let delay = if reduced_motion { 0 } else { index * 100 };
                        html! {
                            <article
                                key={step.number}
                                ref={anchor.clone()}
                                class={classes!(
                                    "timeline-step",
                                    (index % 2 == 1).then(|| "right"),
                                    visible.contains(index).then(|| "visible"),
                                    reduced_motion.then(|| "still"),
                                )}
                                style={format!("transition-delay: {}ms;", delay)}
                                onclick={open}
                            >
                                <span class="timeline-badge">{format!("Étape {}", step.number)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </article>
                        }
                    }) }
                </div>
            </div>

            if let Some(index) = *selected {
                <StepDialog index={index} on_close={close} />
            }
        </section>
    }
}
