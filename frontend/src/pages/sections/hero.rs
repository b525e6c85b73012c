use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::PARTICLE_COUNT;
use crate::dom::scroller;
use crate::hooks::use_particles;
use crate::state::navigation::SectionId;

#[function_component(Hero)]
pub fn hero() -> Html {
    let bubbles = use_particles(PARTICLE_COUNT);

    let jump = |section: SectionId| Callback::from(move |_: MouseEvent| scroller::go_to(section));

    html! {
        <section class="hero">
            <div class="light-burst"></div>
            <div class="ripple-overlay"></div>
            {
                bubbles.iter().map(|bubble| html! {
                    <div key={bubble.id} class="bubble" style={bubble.style()}></div>
                }).collect::<Html>()
            }

            <div class="hero-content">
                <Reveal>
                    <h1 class="hero-title serif">{"Glosiya"}</h1>
                </Reveal>
                <Reveal delay_ms={200}>
                    <p class="hero-tagline">{"Pure Water. Pure Life."}</p>
                </Reveal>
                <Reveal delay_ms={400}>
                    <div class="hero-cta-group">
                        <button class="cta cta--solid" onclick={jump(SectionId::Partner)}>
                            {"Become a Partner"}
                        </button>
                        <button class="cta cta--ghost" onclick={jump(SectionId::Services)}>
                            {"Our Expertise"}
                        </button>
                    </div>
                </Reveal>
            </div>

            <button class="hero-chevron" onclick={jump(SectionId::Philosophy)} aria-label="Scroll down">
                {"⌄"}
            </button>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(180deg, #00aed9 0%, #0077b6 55%, #003366 100%);
                    }
                    .light-burst {
                        position: absolute;
                        top: -20%;
                        left: 50%;
                        width: 120vw;
                        height: 120vw;
                        transform: translateX(-50%);
                        background: radial-gradient(circle, rgba(255, 255, 255, 0.35) 0%, transparent 60%);
                        pointer-events: none;
                    }
                    .ripple-overlay {
                        position: absolute;
                        inset: 0;
                        background: repeating-radial-gradient(circle at 50% 120%, rgba(255, 255, 255, 0.04) 0 2px, transparent 2px 40px);
                        pointer-events: none;
                    }
                    .bubble {
                        position: absolute;
                        bottom: -40px;
                        border-radius: 50%;
                        background: radial-gradient(circle at 30% 30%, rgba(255, 255, 255, 0.8), rgba(255, 255, 255, 0.1));
                        animation: rise var(--duration) linear infinite;
                        pointer-events: none;
                    }
                    @keyframes rise {
                        0% { transform: translateY(0); opacity: 0; }
                        10% { opacity: 0.8; }
                        100% { transform: translateY(-110vh); opacity: 0; }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1.5rem;
                    }
                    .hero-title {
                        font-size: 6rem;
                        font-weight: 300;
                        letter-spacing: -0.04em;
                        line-height: 1;
                        color: #fff;
                        margin: 0 0 1rem;
                        user-select: none;
                        text-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .hero-tagline {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 1.125rem;
                        font-weight: 300;
                        font-style: italic;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        margin-bottom: 4rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .hero-chevron {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 2rem;
                        cursor: pointer;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, -25%); }
                        50% { transform: translate(-50%, 0); }
                    }
                    @media (min-width: 768px) {
                        .hero-title { font-size: 11rem; }
                        .hero-tagline { font-size: 1.5rem; }
                        .hero-cta-group { flex-direction: row; }
                    }
                "#}
            </style>
        </section>
    }
}
