use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::{BADGE_STAGGER_MS, REVEAL_STAGGER_MS};
use crate::dom::scroller;
use crate::hooks::use_modal;
use crate::state::modal::DialogKind;
use crate::state::navigation::SectionId;
use crate::state::reveal::stagger_delay;

/// Where a service card leads.
#[derive(Clone, Copy)]
enum CardAction {
    Dialog(DialogKind),
    Section(SectionId),
}

struct ServiceCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    action: CardAction,
}

const CARDS: [ServiceCard; 3] = [
    ServiceCard {
        icon: "💧",
        title: "Restaurant Supply",
        text: "Bespoke bottling solutions for premium fine dining establishments.",
        action: CardAction::Dialog(DialogKind::Restaurant),
    },
    ServiceCard {
        icon: "🏷",
        title: "Customized Event Bottles",
        text: "Personalized labeling for weddings, corporate events, and galas.",
        action: CardAction::Dialog(DialogKind::Event),
    },
    ServiceCard {
        icon: "🤝",
        title: "Corporate Bulk Orders",
        text: "Reliable, large-scale supply solutions for modern office spaces.",
        action: CardAction::Section(SectionId::Partner),
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let modal = use_modal();

    let on_card = |action: CardAction| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| match action {
            CardAction::Dialog(kind) => {
                if let Some(modal) = &modal {
                    modal.open(kind);
                }
            }
            CardAction::Section(section) => scroller::go_to(section),
        })
    };

    html! {
        <section id={SectionId::Services.as_str()} class="services">
            <div class="container">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Expertise"}</span>
                        <h2 class="section-title section-title--lg serif">{"Elevated Services"}</h2>
                    </div>
                </Reveal>

                <div class="grid grid--three">
                    {
                        CARDS.iter().enumerate().map(|(index, card)| html! {
                            <Reveal key={card.title} delay_ms={stagger_delay(index, REVEAL_STAGGER_MS)}>
                                <div class="service-card" onclick={on_card(card.action)}>
                                    <div class="card-icon">{card.icon}</div>
                                    <h4 class="card-title serif">{card.title}</h4>
                                    <p class="card-text card-text--muted">{card.text}</p>
                                    <div class="service-explore">{"Explore →"}</div>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(TrustStrip)]
pub fn trust_strip() -> Html {
    let trusts = [
        ("🛡", "Safe Production", "Hygienic facility standards."),
        ("📋", "Custom Labeling", "Bespoke branding support."),
        ("🚚", "Fast Delivery", "Reliable logistics network."),
        ("🌐", "Elite Partnership", "Trusted by the best venues."),
    ];

    html! {
        <section class="trust">
            <div class="container grid grid--four">
                {
                    trusts.iter().enumerate().map(|(index, (icon, title, text))| html! {
                        <Reveal key={*title} delay_ms={stagger_delay(index, BADGE_STAGGER_MS)}>
                            <div class="trust-item">
                                <div class="trust-icon">{*icon}</div>
                                <h5 class="trust-title">{*title}</h5>
                                <p class="trust-text">{*text}</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
