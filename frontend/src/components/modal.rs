use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom::scroller::lock_background;
use crate::error::DomError;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Dialog surface. Backdrop click, the close button and Escape all dismiss.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Latest close handler, so the mount effect below never needs re-running.
    let on_close = use_mut_ref(|| props.on_close.clone());
    *on_close.borrow_mut() = props.on_close.clone();

    {
        use_effect_with_deps(
            move |_| {
                lock_background(true);

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        let on_close = on_close.borrow().clone();
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    let listener = keydown.as_ref().unchecked_ref();
                    if let Err(e) = window.add_event_listener_with_callback("keydown", listener) {
                        warn!("escape key listener not attached: {}", DomError::from(e));
                    }
                }

                move || {
                    if let Some(window) = window {
                        let listener = keydown.as_ref().unchecked_ref();
                        if let Err(e) =
                            window.remove_event_listener_with_callback("keydown", listener)
                        {
                            warn!("escape key listener not removed: {}", DomError::from(e));
                        }
                    }
                    lock_background(false);
                }
            },
            (),
        );
    }

    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <div class="modal-backdrop" onclick={dismiss.clone()}></div>
            <div class="modal-panel">
                <button class="modal-close" onclick={dismiss} aria-label="Close">{"✕"}</button>
                <div class="modal-body">
                    <div class="modal-heading">
                        <span class="eyebrow">{"Glosiya Exclusive"}</span>
                        <h2 class="serif">{props.title.clone()}</h2>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 300;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2.5rem 1rem;
                        overflow-y: auto;
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 26, 51, 0.9);
                        backdrop-filter: blur(40px);
                    }
                    .modal-panel {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        margin: auto;
                        background: linear-gradient(135deg, #003366, #001a33);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 3rem;
                        box-shadow: 0 50px 100px rgba(0, 0, 0, 0.5);
                        overflow: hidden;
                        animation: modalIn 0.3s ease-out;
                    }
                    @keyframes modalIn {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .modal-close {
                        position: absolute;
                        top: 2rem;
                        right: 2rem;
                        z-index: 1;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.05);
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .modal-close:hover {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }
                    .modal-body {
                        padding: 2rem;
                    }
                    .modal-heading {
                        margin-bottom: 3rem;
                    }
                    .modal-heading h2 {
                        font-size: 2.5rem;
                        font-weight: 300;
                        font-style: italic;
                        color: #fff;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .modal-body { padding: 4rem; }
                        .modal-heading h2 { font-size: 3rem; }
                    }
                "#}
            </style>
        </div>
    }
}
