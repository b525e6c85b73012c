use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PILLAR_STAGGER_MS;
use crate::state::navigation::SectionId;
use crate::state::reveal::stagger_delay;

struct Pillar {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PILLARS: [Pillar; 2] = [
    Pillar {
        icon: "♡",
        title: "Our Mission",
        text: "To deliver safe, hygienic and premium quality drinking water with consistent purity and professional service, while building long-term partnerships across Bangladesh.",
    },
    Pillar {
        icon: "◉",
        title: "Our Vision",
        text: "To become one of the most trusted and premium drinking water brands in Bangladesh, recognized for purity, elegance and professional supply solutions.",
    },
];

#[function_component(MissionVision)]
pub fn mission_vision() -> Html {
    html! {
        <section id={SectionId::Mission.as_str()} class="mission">
            <div class="mission-glow"></div>
            <div class="container">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Our Foundation"}</span>
                        <h2 class="section-title section-title--xl serif">{"Mission & Vision"}</h2>
                    </div>
                </Reveal>

                <div class="grid grid--two">
                    {
                        PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                            <Reveal key={pillar.title} delay_ms={stagger_delay(index, PILLAR_STAGGER_MS)}>
                                <div class="glass-card">
                                    <div class="card-icon">{pillar.icon}</div>
                                    <h3 class="card-title serif">{pillar.title}</h3>
                                    <p class="card-text">{pillar.text}</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
