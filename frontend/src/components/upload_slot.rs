use yew::prelude::*;

use crate::hooks::use_attachment_slot;
use crate::state::attachment::SlotLabels;

#[derive(Properties, PartialEq)]
pub struct UploadSlotProps {
    pub label: AttrValue,
    pub icon: AttrValue,
    pub labels: SlotLabels,
    /// Taller drop area, used inside dialogs.
    #[prop_or_default]
    pub tall: bool,
}

/// File picker that only remembers the chosen file's name.
#[function_component(UploadSlot)]
pub fn upload_slot(props: &UploadSlotProps) -> Html {
    let (slot, onchange) = use_attachment_slot();

    html! {
        <div class="field">
            <label class="field-label">{props.label.clone()}</label>
            <div class={classes!("upload", props.tall.then(|| "upload--tall"), slot.is_staged().then(|| "upload--staged"))}>
                <input type="file" class="upload-input" {onchange} />
                <div class="upload-face">
                    <span class="upload-icon">{props.icon.clone()}</span>
                    <p class="upload-text">{slot.label(&props.labels)}</p>
                </div>
            </div>
        </div>
    }
}
