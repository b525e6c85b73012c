use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::{self, qr_image_url, whatsapp_link};
use crate::state::navigation::SectionId;

const QR_SIZE_PX: u32 = 220;

#[function_component(Contact)]
pub fn contact() -> Html {
    let chat = whatsapp_link(None);
    let mail = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <section id={SectionId::Contact.as_str()} class="contact">
            <div class="container contact-layout">
                <Reveal>
                    <div>
                        <span class="eyebrow">{"Direct Connect"}</span>
                        <h2 class="section-title section-title--lg serif">{"Always at"}<br />{"Your Service."}</h2>

                        <div class="contact-links">
                            <a href={chat.clone()} class="contact-link">
                                <div class="contact-icon">{"💬"}</div>
                                <div>
                                    <p class="contact-kind">{"WhatsApp Concierge"}</p>
                                    <p class="contact-value">{config::WHATSAPP_DISPLAY}</p>
                                </div>
                            </a>
                            <a href={mail} class="contact-link">
                                <div class="contact-icon">{"✉"}</div>
                                <div>
                                    <p class="contact-kind">{"Official Email"}</p>
                                    <p class="contact-value">{config::CONTACT_EMAIL}</p>
                                </div>
                            </a>
                        </div>
                    </div>
                </Reveal>

                <Reveal delay_ms={300}>
                    <div class="qr-card">
                        <a href={chat.clone()} target="_blank" rel="noopener noreferrer" class="qr-frame">
                            <img
                                src={qr_image_url(&chat, QR_SIZE_PX)}
                                width={QR_SIZE_PX.to_string()}
                                height={QR_SIZE_PX.to_string()}
                                alt="QR code linking to Glosiya on WhatsApp"
                                loading="lazy"
                            />
                        </a>
                        <p class="qr-caption">{"Scan for instant inquiry"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <h2 class="footer-mark serif">{config::BRAND.to_uppercase()}</h2>
                <div class="footer-rule"></div>
                <p class="footer-note">
                    {format!("© {} Glosiya Premium Beverages. ", year)}
                    <br class="mobile-only" />
                    {"Crafted for the Visionaries of Bangladesh."}
                </p>
            </div>
        </footer>
    }
}
