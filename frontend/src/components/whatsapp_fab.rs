use yew::prelude::*;

use crate::config::whatsapp_link;

#[function_component(WhatsappFab)]
pub fn whatsapp_fab() -> Html {
    html! {
        <a
            href={whatsapp_link(Some("Hello Glosiya, I'd like to know more."))}
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-fab"
            aria-label="Chat on WhatsApp"
        >
            <span class="whatsapp-fab-icon">{"💬"}</span>
            <span class="whatsapp-fab-ping"></span>
            <style>
                {r#"
                    .whatsapp-fab {
                        position: fixed;
                        bottom: 2.5rem;
                        right: 2.5rem;
                        z-index: 200;
                        width: 4.5rem;
                        height: 4.5rem;
                        border-radius: 50%;
                        background: #25D366;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.35);
                        transition: transform 0.2s;
                    }
                    .whatsapp-fab:hover { transform: scale(1.1); }
                    .whatsapp-fab:active { transform: scale(0.95); }
                    .whatsapp-fab-icon {
                        font-size: 1.8rem;
                        position: relative;
                        z-index: 1;
                    }
                    .whatsapp-fab-ping {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: #25D366;
                        opacity: 0.2;
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                "#}
            </style>
        </a>
    }
}
