use yew::prelude::*;

use crate::components::{
    contact::ContactSection, faq::Faq, footer::Footer, hero::Hero, navigation::Navigation,
    scroll_to_top::ScrollToTop, stories::Stories, support::SupportSection, timeline::Timeline,
    whistleblow::WhistleblowSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: #0D0D0F;
                        font-family: 'Inter', system-ui, sans-serif;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        html { scroll-behavior: auto; }
                    }
                "#}
            </style>
            <Navigation />
            <main>
                <Hero />
                <Timeline />
                <Stories />
                <SupportSection />
                <WhistleblowSection />
                <Faq />
                <ContactSection />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
