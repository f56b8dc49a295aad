use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #0D0D0F;
                        color: #F1F1F1;
                    }
                    .not-found h1 { font-size: 4rem; margin: 0; color: #B4202A; }
                    .not-found a { color: #F1F1F1; }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Cette page n'existe pas."}</p>
            <Link<Route> to={Route::Home}>{"Retour à l'accueil"}</Link<Route>>
        </div>
    }
}
