use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::navigation::SectionId;

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
    html! {
        <section id={SectionId::Philosophy.as_str()} class="philosophy">
            <div class="philosophy-glow"></div>
            <div class="container container--narrow centered">
                <Reveal>
                    <h2 class="philosophy-title serif">
                        {"Purity is "}<span class="philosophy-accent">{"Infinite"}</span>{"."}
                    </h2>
                    <p class="philosophy-text serif">
                        {"We define the standard of high-end hydration, blending artisan purification processes with professional business logistics."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(PurityPromise)]
pub fn purity_promise() -> Html {
    html! {
        <section class="purity">
            <div class="container container--narrow centered">
                <Reveal>
                    <span class="eyebrow eyebrow--light">{"Commitment"}</span>
                    <h2 class="section-title serif">{"The Signature Guarantee"}</h2>
                    <p class="purity-quote serif">
                        {"\"Every drop of Glosiya water undergoes strict purification and quality control to ensure unmatched clarity, safety and freshness. We are committed to delivering premium hydration with professional excellence.\""}
                    </p>
                    <div class="purity-sparkle">{"✦"}</div>
                </Reveal>
            </div>
        </section>
    }
}
