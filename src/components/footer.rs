use yew::prelude::*;

use crate::components::navigation::{PRIMARY_LINKS, SECONDARY_LINKS};
use crate::config::MANUAL_CONTACT_EMAIL;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 1.5rem;
                        background: #0A0A0B;
                        color: rgba(241, 241, 241, 0.6);
                        border-top: 1px solid #1F1F1F;
                        text-align: center;
                        font-size: 0.9rem;
                    }
                    .footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-links a, .footer-mail { color: rgba(241, 241, 241, 0.8); text-decoration: none; }
                    .footer-links a:hover { color: #fff; }
                    .footer-legal { margin-top: 1rem; font-size: 0.8rem; color: rgba(241, 241, 241, 0.4); }
                "#}
            </style>
            <div class="footer-links">
                { for PRIMARY_LINKS.iter().chain(SECONDARY_LINKS.iter()).map(|item| html! {
                    <a href={item.href}>{item.label}</a>
                }) }
            </div>
            <a class="footer-mail" href={format!("mailto:{}", MANUAL_CONTACT_EMAIL)}>{MANUAL_CONTACT_EMAIL}</a>
            <p class="footer-legal">
                {"LemaClinic Truth est une initiative citoyenne indépendante. Les témoignages publiés sont anonymisés."}
            </p>
        </footer>
    }
}
