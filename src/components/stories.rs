use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    All,
    Complications,
    Negligence,
    Fraud,
    Billing,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Complications,
        Category::Negligence,
        Category::Fraud,
        Category::Billing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Tous",
            Category::Complications => "Complications",
            Category::Negligence => "Négligence",
            Category::Fraud => "Fraude",
            Category::Billing => "Facturation",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Story {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub category: Category,
}

pub const STORIES: &[Story] = &[
    Story {
        quote: "Après mon intervention, j'ai souffert de complications qui n'ont jamais été correctement prises en charge. Je me retrouve avec des dommages permanents.",
        author: "Patient anonyme",
        location: "France",
        category: Category::Complications,
    },
    Story {
        quote: "La clinique a menti sur mon diagnostic pour justifier des procédures inutiles qui m'ont laissé dans un état pire.",
        author: "Marie S.",
        location: "Suisse",
        category: Category::Fraud,
    },
    Story {
        quote: "Facturations abusives, frais cachés non mentionnés. Le montant final était le double du devis initial.",
        author: "Sophie M.",
        location: "Luxembourg",
        category: Category::Billing,
    },
];

/// Stories in `category`, in their original order. `All` keeps everything.
pub fn filter_stories(stories: &[Story], category: Category) -> Vec<&Story> {
    stories
        .iter()
        .filter(|story| category == Category::All || story.category == category)
        .collect()
}

pub fn count_label(count: usize, category: Category) -> String {
    let plural = if count > 1 { "s" } else { "" };
    let scope = match category {
        Category::All => "Toutes catégories",
        other => other.label(),
    };
    format!("{} témoignage{} • {}", count, plural, scope)
}

#[function_component(Stories)]
pub fn stories() -> Html {
    let active = use_state(|| Category::All);
    let shown = filter_stories(STORIES, *active);

    html! {
        <section id="temoignages" class="stories">
            <style>
                {r#"
                    .stories {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #242424 0%, #2A2A2A 50%, #242424 100%);
                        color: #F1F1F1;
                        text-align: center;
                    }
                    .stories-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin: 2rem 0 3rem;
                    }
                    .stories-filter {
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: rgba(241, 241, 241, 0.6);
                        cursor: pointer;
                    }
                    .stories-filter.active {
                        color: #E53935;
                        border-color: rgba(229, 57, 53, 0.4);
                        background: rgba(229, 57, 53, 0.2);
                    }
                    .stories-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: left;
                    }
                    .story-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .story-quote { font-style: italic; line-height: 1.6; }
                    .story-meta {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 1.5rem;
                        padding-top: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .story-count { margin-top: 3rem; color: rgba(241, 241, 241, 0.4); }
                "#}
            </style>
            <h2>{"Témoignages des victimes"}</h2>
            <p>{"Des histoires réelles de personnes affectées par les pratiques de la clinique"}</p>

            <div class="stories-filters">
                { for Category::ALL.iter().map(|category| {
                    let category = *category;
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(category))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("stories-filter", (*active == category).then(|| "active"))}
                            {onclick}
                        >
                            {category.label()}
                        </button>
                    }
                }) }
            </div>

            <div class="stories-grid">
                { for shown.iter().map(|story| html! {
                    <div class="story-card" key={story.author}>
                        <p class="story-quote">{story.quote}</p>
                        <div class="story-meta">
                            <div>
                                <strong>{story.author}</strong>
                                <div>{story.location}</div>
                            </div>
                            <span>{story.category.label()}</span>
                        </div>
                    </div>
                }) }
            </div>

            <p class="story-count">{count_label(shown.len(), *active)}</p>
        </section>
    }
}
