use yew::prelude::*;

use crate::dom::scroller;
use crate::hooks::use_scrolled;
use crate::state::navigation::SectionId;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // Closes the mobile menu before jumping.
    let jump = |section: SectionId| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroller::go_to(section);
        })
    };

    let to_top = Callback::from(|_: MouseEvent| scroller::scroll_to_top());

    let links = |class: &'static str| -> Html {
        SectionId::ALL
            .iter()
            .map(|section| {
                html! {
                    <button key={section.as_str()} class={class} onclick={jump(*section)}>
                        {section.nav_label()}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo serif" onclick={to_top}>{"GLOSIYA"}</button>

                <div class="nav-links">
                    { links("nav-link") }
                    <button class="nav-connect" onclick={jump(SectionId::Partner)}>{"Connect"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                { links("mobile-link serif") }
                <button class="mobile-connect" onclick={jump(SectionId::Partner)}>{"Connect"}</button>
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 2rem 0;
                        background: transparent;
                        transition: all 0.5s;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(0, 51, 102, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                    }
                    .nav-content {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        cursor: pointer;
                    }
                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 10px;
                        font-weight: 600;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-connect, .mobile-connect {
                        border: none;
                        border-radius: 9999px;
                        background: #fff;
                        color: #003366;
                        font-weight: 700;
                        text-transform: uppercase;
                        cursor: pointer;
                    }
                    .nav-connect {
                        padding: 0.75rem 2rem;
                        font-size: 10px;
                        letter-spacing: 0.2em;
                        transition: transform 0.2s;
                    }
                    .nav-connect:hover {
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        position: relative;
                        z-index: 101;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        background: #003366;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        transform: translateX(100%);
                        transition: transform 0.5s;
                    }
                    .mobile-menu-open {
                        transform: translateX(0);
                    }
                    .mobile-link {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 300;
                        font-style: italic;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                    }
                    .mobile-connect {
                        padding: 1rem 3rem;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                    }
                    @media (min-width: 1024px) {
                        .nav-links { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                "#}
            </style>
        </nav>
    }
}
