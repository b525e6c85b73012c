use std::rc::Rc;

use log::{debug, warn};
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::dom::{observer, scroll_bus};
use crate::state::attachment::AttachmentSlot;
use crate::state::modal::{DialogKind, ModalAction, ModalSelection};
use crate::state::particles::{generate_field, ParticleDescriptor};
use crate::state::reveal::RevealState;
use crate::state::scroll::ScrollChrome;

/// Watches `node` until it first enters the viewport, then stays `true`.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let reveal = use_reducer_eq(RevealState::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |(node, state): &(NodeRef, RevealState)| {
                // Re-runs on reveal, which releases the watch.
                let element = node.cast::<Element>();
                let watch = observer::watch_until_revealed(*state, element, |element| {
                    observer::watch_visibility(&element, REVEAL_THRESHOLD, move |hit| {
                        dispatcher.dispatch(hit)
                    })
                });
                move || drop(watch)
            },
            (node, *reveal),
        );
    }

    *reveal
}

/// Whether the page is scrolled past the nav threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let chrome = use_reducer_eq(|| {
        ScrollChrome::at_offset(scroll_bus::current_offset().unwrap_or(0.0))
    });

    {
        let dispatcher = chrome.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = scroll_bus::subscribe(move |offset| dispatcher.dispatch(offset))
                    .map_err(|e| warn!("scroll monitor unavailable: {}", e))
                    .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    chrome.scrolled()
}

/// Particle set drawn once for the lifetime of the calling component.
#[hook]
pub fn use_particles(count: usize) -> Rc<Vec<ParticleDescriptor>> {
    let field = use_state(|| Rc::new(generate_field(&mut rand::thread_rng(), count)));
    (*field).clone()
}

/// A staging slot plus the `onchange` handler for its file input.
#[hook]
pub fn use_attachment_slot() -> (AttachmentSlot, Callback<Event>) {
    let slot = use_state_eq(AttachmentSlot::default);

    let onchange = {
        let slot = slot.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*slot).clone();
            match input.files().and_then(|files| files.get(0)) {
                Some(file) => {
                    next.select(&file);
                    debug!("staged attachment {:?}", next.display_name());
                }
                None => next.clear(),
            }
            slot.set(next);
        })
    };

    ((*slot).clone(), onchange)
}

/// Shared handle on the page's dialog selection.
#[derive(Clone, PartialEq)]
pub struct ModalHandle(UseReducerHandle<ModalSelection>);

impl ModalHandle {
    pub fn selection(&self) -> ModalSelection {
        *self.0
    }

    pub fn open(&self, kind: DialogKind) {
        self.0.dispatch(ModalAction::Open(kind));
    }

    pub fn close(&self) {
        self.0.dispatch(ModalAction::Close);
    }
}

/// Creates the page-wide dialog selection. Call once, in the page shell.
#[hook]
pub fn use_modal_controller() -> ModalHandle {
    ModalHandle(use_reducer(ModalSelection::default))
}

/// The dialog selection provided by the page shell, if any.
#[hook]
pub fn use_modal() -> Option<ModalHandle> {
    use_context::<ModalHandle>()
}
