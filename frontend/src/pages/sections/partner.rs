use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::upload_slot::UploadSlot;
use crate::state::attachment::SlotLabels;
use crate::state::navigation::SectionId;

const VOLUMES: [&str; 3] = ["500 - 2,000 Units", "2,000 - 10,000 Units", "10,000+ Units"];

const PARTNER_LOGO: SlotLabels = SlotLabels {
    empty: "SUBMIT LOGO",
    staged_prefix: "",
};

const PARTNER_QR: SlotLabels = SlotLabels {
    empty: "SUBMIT QR",
    staged_prefix: "",
};

/// Partnership inquiry. The form has no backend; it collects nothing.
#[function_component(PartnerSection)]
pub fn partner_section() -> Html {
    html! {
        <section id={SectionId::Partner.as_str()} class="partner">
            <div class="container partner-layout">
                <Reveal>
                    <div class="partner-pitch">
                        <span class="eyebrow">{"Collaboration"}</span>
                        <h2 class="section-title section-title--lg serif">{"Join Our"}<br />{"Elite Circle"}</h2>
                        <p class="partner-lede">
                            {"Partner with Glosiya to provide the finest quality drinking water for your guests, branded specifically for your establishment."}
                        </p>
                        <ul class="partner-perks">
                            <li>{"✓ Bespoke Bottle Labeling"}</li>
                            <li>{"✓ Dedicated Account Manager"}</li>
                            <li>{"✓ Flexible Supply Logistics"}</li>
                        </ul>
                    </div>
                </Reveal>

                <Reveal delay_ms={300}>
                    <div class="glass-card">
                        <form class="form">
                            <div class="form-row">
                                <div class="field">
                                    <label class="field-label">{"👤 Owner Name"}</label>
                                    <input type="text" class="field-input" placeholder="FULL NAME" />
                                </div>
                                <div class="field">
                                    <label class="field-label">{"🍽 Event / Restaurant Name"}</label>
                                    <input type="text" class="field-input" placeholder="NAME OF EVENT OR RESTAURANT" />
                                </div>
                            </div>

                            <div class="field">
                                <label class="field-label">{"📍 Full Address"}</label>
                                <input type="text" class="field-input" placeholder="STREET, AREA, CITY" />
                            </div>

                            <div class="form-row">
                                <div class="field">
                                    <label class="field-label">{"📞 Contact"}</label>
                                    <input type="tel" class="field-input" placeholder="+880 1XXX-XXXXXX" />
                                </div>
                                <div class="field">
                                    <label class="field-label">{"📦 Monthly Volume"}</label>
                                    <select class="field-input field-select">
                                        <option>{"SELECT VOLUME"}</option>
                                        { for VOLUMES.iter().map(|volume| html! { <option>{*volume}</option> }) }
                                    </select>
                                </div>
                            </div>

                            <div class="field">
                                <label class="field-label">{"🏷 Custom Brand Name"}</label>
                                <input type="text" class="field-input" placeholder="BRAND NAME TO PRINT ON BOTTLE" />
                            </div>

                            <div class="form-row">
                                <UploadSlot label="ⓘ Logo" icon="⇪" labels={PARTNER_LOGO} />
                                <UploadSlot label="▦ QR Code (Optional)" icon="⇪" labels={PARTNER_QR} />
                            </div>

                            <button type="button" class="form-submit">{"Inquire for Partnership"}</button>
                        </form>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
