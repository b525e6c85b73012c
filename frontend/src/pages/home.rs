use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::nav::Nav;
use crate::components::whatsapp_fab::WhatsappFab;
use crate::dom::scroller::DocumentScroller;
use crate::hooks::{use_modal_controller, ModalHandle};
use crate::pages::sections::{
    contact::{Contact, Footer},
    dialogs::{EventDialog, RestaurantDialog},
    hero::Hero,
    mission::MissionVision,
    partner::PartnerSection,
    philosophy::{Philosophy, PurityPromise},
    services::{Services, TrustStrip},
};
use crate::state::modal::DialogKind;
use crate::state::navigation;

/// Page shell. Owns the dialog selection and renders at most one dialog.
#[function_component(Home)]
pub fn home() -> Html {
    let modal = use_modal_controller();

    // Honour deep links such as /#partner once the sections exist.
    use_mount(|| {
        if let Ok(scroller) = DocumentScroller::current() {
            if let Some(section) = scroller.fragment_section() {
                navigation::go_to(&scroller, section);
            }
        }
    });

    let dialog = match modal.selection().active() {
        None => html! {},
        Some(DialogKind::Restaurant) => html! { <RestaurantDialog /> },
        Some(DialogKind::Event) => html! { <EventDialog /> },
    };

    html! {
        <ContextProvider<ModalHandle> context={modal}>
            <main class="glosiya">
                <Nav />
                <Hero />
                <Philosophy />
                <PurityPromise />
                <MissionVision />
                <Services />
                <TrustStrip />
                <PartnerSection />
                <Contact />
                <Footer />
                <WhatsappFab />
                { dialog }
            </main>
            <style>{PAGE_STYLES}</style>
        </ContextProvider<ModalHandle>>
    }
}

const PAGE_STYLES: &str = r#"
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: #003366;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    ::selection { background: #fff; color: #003366; }
    .serif { font-family: "Cormorant Garamond", Georgia, serif; }
    .glosiya { overflow-x: hidden; }

    .reveal {
        opacity: 0;
        transform: translateY(2.5rem);
        transition: opacity 1s ease-out, transform 1s ease-out;
    }
    .reveal--visible {
        opacity: 1;
        transform: translateY(0);
    }

    .container {
        position: relative;
        z-index: 10;
        max-width: 1400px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .container--narrow { max-width: 1200px; }
    .centered { text-align: center; }

    .eyebrow {
        display: block;
        margin-bottom: 1.5rem;
        color: rgba(255, 255, 255, 0.3);
        font-size: 10px;
        font-weight: 700;
        letter-spacing: 0.8em;
        text-transform: uppercase;
    }
    .eyebrow--light { color: rgba(255, 255, 255, 0.7); letter-spacing: 1em; margin-bottom: 3rem; }
    .section-heading { text-align: center; margin-bottom: 8rem; }
    .section-title {
        font-size: 3rem;
        font-weight: 300;
        font-style: italic;
        line-height: 1.15;
        margin: 0 0 3rem;
    }

    .grid { display: grid; gap: 3rem; }
    .grid--tight { gap: 2rem; }

    .glass-card {
        height: 100%;
        box-sizing: border-box;
        padding: 3rem;
        border-radius: 4rem;
        border: 1px solid rgba(255, 255, 255, 0.08);
        background: rgba(255, 255, 255, 0.04);
        backdrop-filter: blur(16px);
        transition: border-color 0.7s;
    }
    .glass-card:hover { border-color: rgba(255, 255, 255, 0.2); }
    .card-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        margin-bottom: 2.5rem;
        transition: all 0.3s;
    }
    .card-title { font-size: 2rem; font-weight: 300; font-style: italic; margin: 0 0 1.5rem; }
    .card-text { color: rgba(255, 255, 255, 0.7); font-size: 1.15rem; font-weight: 300; line-height: 1.7; }
    .card-text--muted { color: rgba(255, 255, 255, 0.4); font-size: 1rem; margin-bottom: 2.5rem; }

    .cta {
        padding: 1.25rem 3rem;
        border-radius: 9999px;
        font-size: 11px;
        font-weight: 700;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        cursor: pointer;
        transition: all 0.2s;
    }
    .cta:hover { transform: scale(1.05); }
    .cta:active { transform: scale(0.95); }
    .cta--solid { background: #fff; color: #003366; border: none; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
    .cta--ghost { background: transparent; color: #fff; border: 1px solid rgba(255, 255, 255, 0.3); backdrop-filter: blur(12px); }

    .philosophy {
        position: relative;
        overflow: hidden;
        padding: 12rem 0;
        background: #95d5e8;
    }
    .philosophy-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, rgba(255, 255, 255, 0.2), transparent);
        pointer-events: none;
    }
    .philosophy-title {
        color: #003366;
        font-size: 3.75rem;
        font-weight: 300;
        font-style: italic;
        line-height: 1;
        margin: 0 0 4rem;
    }
    .philosophy-accent { color: #fff; }
    .philosophy-text {
        max-width: 56rem;
        margin: 0 auto;
        color: rgba(0, 51, 102, 0.7);
        font-size: 1.5rem;
        font-weight: 200;
        font-style: italic;
        line-height: 1.6;
    }

    .purity { background: #00aed9; padding: 12rem 0; }
    .purity-quote {
        max-width: 64rem;
        margin: 0 auto;
        font-size: 1.5rem;
        font-weight: 300;
        font-style: italic;
        line-height: 1.6;
        text-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .purity-sparkle { margin-top: 5rem; font-size: 3rem; color: rgba(255, 255, 255, 0.4); animation: pulse 2s infinite; }
    @keyframes pulse { 50% { opacity: 0.5; } }

    .mission { position: relative; overflow: hidden; background: #003366; padding: 12rem 0; }
    .mission-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 800px;
        height: 800px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        filter: blur(180px);
        transform: translateY(-50%);
        pointer-events: none;
    }

    .services { background: #002a54; padding: 12rem 0; }
    .service-card {
        height: 100%;
        box-sizing: border-box;
        padding: 3rem;
        border-radius: 3.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.05);
        cursor: pointer;
        transition: all 0.7s;
    }
    .service-card:hover { background: rgba(255, 255, 255, 0.08); box-shadow: 0 40px 100px rgba(0, 0, 0, 0.3); }
    .service-card:hover .card-icon { background: #fff; color: #003366; }
    .service-explore {
        color: rgba(255, 255, 255, 0.6);
        font-size: 10px;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }

    .trust {
        padding: 8rem 0;
        background: #003366;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .grid--four { grid-template-columns: repeat(2, 1fr); }
    .trust-item { text-align: center; }
    .trust-icon {
        width: 3.5rem;
        height: 3.5rem;
        margin: 0 auto 1.5rem;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.4rem;
    }
    .trust-title { margin: 0 0 0.5rem; font-size: 10px; font-weight: 700; letter-spacing: 0.3em; text-transform: uppercase; color: rgba(255, 255, 255, 0.8); }
    .trust-text { margin: 0; font-size: 0.75rem; font-style: italic; font-weight: 300; color: rgba(255, 255, 255, 0.3); }

    .venue {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        padding: 1.5rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.05);
        transition: background 0.3s;
    }
    .venue:hover { background: rgba(255, 255, 255, 0.1); }
    .venue-icon {
        flex-shrink: 0;
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        background: #003366;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.6rem;
    }
    .venue-name { margin: 0; font-size: 1.125rem; font-weight: 300; font-style: italic; }
    .venue-location { margin: 0.25rem 0 0; font-size: 10px; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(255, 255, 255, 0.3); }
    .venue-tier {
        display: inline-block;
        margin-top: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        font-size: 8px;
        font-weight: 700;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.5);
    }
    .dialog-footer { margin-top: 3rem; text-align: center; }
    .dialog-note { margin-bottom: 2rem; font-size: 0.875rem; font-weight: 300; font-style: italic; color: rgba(255, 255, 255, 0.4); }

    .form { display: flex; flex-direction: column; gap: 2rem; }
    .form-row { display: grid; gap: 2rem; }
    .field { display: flex; flex-direction: column; gap: 0.5rem; }
    .field-label {
        margin-left: 1rem;
        font-size: 9px;
        font-weight: 700;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.3);
    }
    .field-input {
        width: 100%;
        box-sizing: border-box;
        padding: 1.25rem 2rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: #fff;
        font-size: 11px;
        letter-spacing: 0.1em;
        outline: none;
        transition: box-shadow 0.3s, border-color 0.3s;
    }
    .field-input::placeholder { color: rgba(255, 255, 255, 0.2); }
    .field-input:focus { border-color: rgba(255, 255, 255, 0.3); box-shadow: 0 0 25px rgba(0, 174, 217, 0.25); }
    .field-select { appearance: none; background: #001a33; color: rgba(255, 255, 255, 0.5); cursor: pointer; }
    .form-submit {
        width: 100%;
        padding: 1.5rem;
        border: none;
        border-radius: 2rem;
        background: #fff;
        color: #003366;
        font-size: 11px;
        font-weight: 700;
        letter-spacing: 0.5em;
        text-transform: uppercase;
        cursor: pointer;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transition: all 0.2s;
    }
    .form-submit:hover { background: rgba(255, 255, 255, 0.9); }
    .form-submit:active { transform: scale(0.95); }

    .upload { position: relative; }
    .upload--tall { height: 12rem; }
    .upload-input {
        position: absolute;
        inset: 0;
        z-index: 10;
        width: 100%;
        height: 100%;
        opacity: 0;
        cursor: pointer;
    }
    .upload-face {
        height: 100%;
        box-sizing: border-box;
        padding: 2rem 1.5rem;
        border: 1px dashed rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        text-align: center;
        transition: all 0.3s;
    }
    .upload--tall .upload-face { border-width: 2px; }
    .upload:hover .upload-face { border-color: rgba(255, 255, 255, 0.3); background: rgba(255, 255, 255, 0.07); }
    .upload--staged .upload-face { border-style: solid; border-color: rgba(255, 255, 255, 0.25); }
    .upload-icon { font-size: 1.2rem; color: rgba(255, 255, 255, 0.4); }
    .upload-text {
        margin: 0;
        font-size: 10px;
        font-weight: 300;
        font-style: italic;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.4);
        word-break: break-all;
    }

    .partner { background: #002a54; padding: 12rem 0; }
    .partner-layout { display: grid; gap: 6rem; align-items: start; }
    .partner-pitch { position: sticky; top: 8rem; }
    .partner-lede { max-width: 32rem; margin-bottom: 3rem; font-size: 1.5rem; font-weight: 300; line-height: 1.6; color: rgba(255, 255, 255, 0.5); }
    .partner-perks { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1.5rem; color: rgba(255, 255, 255, 0.6); }

    .contact { background: #003366; padding: 12rem 0; }
    .contact-layout { display: grid; gap: 8rem; align-items: center; }
    .contact-links { display: flex; flex-direction: column; gap: 3rem; }
    .contact-link { display: flex; align-items: center; gap: 2rem; color: #fff; text-decoration: none; }
    .contact-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.4rem;
        transition: background 0.3s;
    }
    .contact-link:hover .contact-icon { background: #fff; }
    .contact-kind { margin: 0; font-size: 10px; font-weight: 700; letter-spacing: 0.4em; text-transform: uppercase; color: rgba(255, 255, 255, 0.3); }
    .contact-value { margin: 0.25rem 0 0; font-size: 1.5rem; font-weight: 300; }
    .qr-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        width: fit-content;
        margin: 0 auto;
        padding: 3rem;
        border-radius: 4.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.05);
    }
    .qr-frame {
        display: block;
        padding: 1.25rem;
        border-radius: 1.5rem;
        background: #fff;
        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.3);
        transition: transform 0.7s;
    }
    .qr-frame:hover { transform: scale(1.05); }
    .qr-frame img { display: block; }
    .qr-caption { margin-top: 3rem; font-size: 9px; font-weight: 700; font-style: italic; letter-spacing: 0.5em; text-transform: uppercase; color: rgba(255, 255, 255, 0.3); }

    .footer {
        padding: 8rem 0;
        background: #002a54;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .footer-mark { margin: 0 0 3rem; font-size: 1.875rem; font-weight: 700; letter-spacing: 0.4em; color: rgba(255, 255, 255, 0.1); }
    .footer-rule { width: 4rem; height: 1px; margin: 0 auto 3rem; background: rgba(255, 255, 255, 0.05); }
    .footer-note { font-size: 10px; font-weight: 700; letter-spacing: 0.6em; text-transform: uppercase; color: rgba(255, 255, 255, 0.3); }

    @media (min-width: 768px) {
        .section-title { font-size: 4.5rem; }
        .section-title--lg { font-size: 6rem; }
        .section-title--xl { font-size: 8rem; }
        .philosophy { padding: 20rem 0; }
        .philosophy-title { font-size: 9rem; }
        .philosophy-text, .purity-quote { font-size: 1.875rem; }
        .purity, .mission, .services, .partner, .contact { padding: 18rem 0; }
        .glass-card { padding: 5rem; }
        .grid--two, .form-row { grid-template-columns: repeat(2, 1fr); }
        .grid--three { grid-template-columns: repeat(3, 1fr); }
        .mobile-only { display: none; }
    }
    @media (min-width: 1024px) {
        .grid--four { grid-template-columns: repeat(4, 1fr); gap: 5rem; }
        .partner-layout, .contact-layout { grid-template-columns: repeat(2, 1fr); }
    }
"#;
