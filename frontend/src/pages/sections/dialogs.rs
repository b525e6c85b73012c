use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::upload_slot::UploadSlot;
use crate::dom::scroller;
use crate::hooks::{use_modal, ModalHandle};
use crate::state::attachment::SlotLabels;
use crate::state::modal::DialogKind;
use crate::state::navigation::SectionId;

const PARTNER_VENUES: [(&str, &str, &str); 4] = [
    ("Royal Blue Fine Dining", "Gulshan 2, Dhaka", "Premium Partner"),
    ("The Skyline Lounge", "Banani, Dhaka", "Elite Venue"),
    ("Emerald Waters Bistro", "Dhanmondi, Dhaka", "Signature Supply"),
    ("Oceanic Grand Buffet", "Uttara, Dhaka", "Bulk Partner"),
];

const EVENT_TYPES: [&str; 4] = [
    "Wedding Celebration",
    "Corporate Seminar",
    "Gala Dinner / Party",
    "Other Special Occasion",
];

const EVENT_LOGO: SlotLabels = SlotLabels {
    empty: "Upload Logo",
    staged_prefix: "File: ",
};

const EVENT_QR: SlotLabels = SlotLabels {
    empty: "Upload QR Scan",
    staged_prefix: "File: ",
};

/// Close handler that keeps its identity while the selection is unchanged.
#[hook]
fn use_close() -> Callback<()> {
    let modal = use_modal();
    use_callback(
        |_: (), modal: &Option<ModalHandle>| {
            if let Some(modal) = modal {
                modal.close();
            }
        },
        modal,
    )
}

#[function_component(RestaurantDialog)]
pub fn restaurant_dialog() -> Html {
    let close = use_close();

    let request_partnership = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| {
            close.emit(());
            scroller::go_to(SectionId::Partner);
        })
    };

    html! {
        <Modal title={DialogKind::Restaurant.title()} on_close={close}>
            <div class="grid grid--two grid--tight">
                {
                    PARTNER_VENUES.iter().map(|(name, location, tier)| html! {
                        <div key={*name} class="venue">
                            <div class="venue-icon">{"🍽"}</div>
                            <div>
                                <h4 class="venue-name serif">{*name}</h4>
                                <p class="venue-location">{*location}</p>
                                <span class="venue-tier">{*tier}</span>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="dialog-footer">
                <p class="dialog-note">{"Want to see your restaurant here? Join our elite distribution network."}</p>
                <button class="cta cta--solid" onclick={request_partnership}>{"Request Partnership"}</button>
            </div>
        </Modal>
    }
}

/// Event bottle order form. Inert: the button only dismisses the dialog.
#[function_component(EventDialog)]
pub fn event_dialog() -> Html {
    let close = use_close();

    let inquire = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <Modal title={DialogKind::Event.title()} on_close={close}>
            <form class="form">
                <div class="form-row">
                    <div class="field">
                        <label class="field-label">{"Full Name"}</label>
                        <input type="text" class="field-input" placeholder="YOUR NAME" />
                    </div>
                    <div class="field">
                        <label class="field-label">{"WhatsApp"}</label>
                        <input type="tel" class="field-input" placeholder="+880 1XXX-XXXXXX" />
                    </div>
                </div>

                <div class="form-row">
                    <div class="field">
                        <label class="field-label">{"Event Category"}</label>
                        <select class="field-input field-select">
                            <option>{"SELECT EVENT TYPE"}</option>
                            { for EVENT_TYPES.iter().map(|kind| html! { <option>{*kind}</option> }) }
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label">{"Quantity Required"}</label>
                        <input type="number" class="field-input" placeholder="ESTIMATED BOTTLES" />
                    </div>
                </div>

                <div class="field">
                    <label class="field-label">{"🏷 Custom Brand Name"}</label>
                    <input type="text" class="field-input" placeholder="NAME TO BE PRINTED ON BOTTLE" />
                </div>

                <div class="form-row">
                    <UploadSlot label="Branding (Logo / Photo)" icon="⇪" labels={EVENT_LOGO} tall=true />
                    <UploadSlot label="QR Code (Optional)" icon="▦" labels={EVENT_QR} tall=true />
                </div>

                <button type="button" class="form-submit" onclick={inquire}>
                    {"Inquire for Customization"}
                </button>
            </form>
        </Modal>
    }
}
