use log::warn;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::DomError;
use crate::state::navigation::{self, ScrollHost, SectionId};

/// The live document as a navigation target.
pub struct DocumentScroller {
    window: Window,
    document: Document,
}

impl DocumentScroller {
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Section named by the URL fragment, if it is one of ours.
    pub fn fragment_section(&self) -> Option<SectionId> {
        let hash = self.window.location().hash().ok()?;
        SectionId::from_fragment(&hash)
    }

    /// Stops the page behind an open dialog from scrolling.
    pub fn lock_background(&self, locked: bool) -> Result<(), DomError> {
        let body = self.document.body().ok_or(DomError::NoDocument)?;
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }
}

impl ScrollHost for DocumentScroller {
    type Target = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Entry point for every "jump to section" control on the page.
pub fn go_to(section: impl AsRef<str>) {
    match DocumentScroller::current() {
        Ok(scroller) => {
            navigation::go_to(&scroller, section);
        }
        Err(e) => warn!("navigation unavailable: {}", e),
    }
}

pub fn scroll_to_top() {
    match DocumentScroller::current() {
        Ok(scroller) => scroller.scroll_to_top(),
        Err(e) => warn!("navigation unavailable: {}", e),
    }
}

pub fn lock_background(locked: bool) {
    let result = DocumentScroller::current().and_then(|scroller| scroller.lock_background(locked));
    if let Err(e) = result {
        warn!("unable to toggle background scroll: {}", e);
    }
}
