use std::fmt;
use std::str::FromStr;

use log::debug;

/// Stable anchors shared with the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Philosophy,
    Mission,
    Services,
    Partner,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Philosophy,
        SectionId::Mission,
        SectionId::Services,
        SectionId::Partner,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Philosophy => "philosophy",
            SectionId::Mission => "mission",
            SectionId::Services => "services",
            SectionId::Partner => "partner",
            SectionId::Contact => "contact",
        }
    }

    /// Label used by the nav bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::Philosophy => "About",
            SectionId::Mission => "Mission",
            SectionId::Services => "Services",
            SectionId::Partner => "Partner",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolves a URL fragment such as `#partner`.
    pub fn from_fragment(fragment: &str) -> Option<SectionId> {
        fragment.trim_start_matches('#').parse().ok()
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or(())
    }
}

/// Whatever can find a section by id and scroll to it.
pub trait ScrollHost {
    type Target;

    fn find_section(&self, id: &str) -> Option<Self::Target>;

    /// Smooth-scrolls so the target's top edge meets the viewport top.
    fn scroll_into_view(&self, target: &Self::Target);

    fn scroll_to_top(&self);
}

/// Jumps to a section. Unknown ids are ignored. Returns whether a scroll
/// was requested.
pub fn go_to<H: ScrollHost + ?Sized>(host: &H, section: impl AsRef<str>) -> bool {
    let id = section.as_ref();
    match host.find_section(id) {
        Some(target) => {
            host.scroll_into_view(&target);
            true
        }
        None => {
            debug!("no section with id {:?}, ignoring", id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::reveal::RevealState;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory page: section id -> top offset.
    #[derive(Default)]
    struct FakePage {
        sections: HashMap<&'static str, f64>,
        scrolled_to: RefCell<Vec<f64>>,
    }

    impl ScrollHost for FakePage {
        type Target = f64;

        fn find_section(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn scroll_into_view(&self, top: &f64) {
            self.scrolled_to.borrow_mut().push(*top);
        }

        fn scroll_to_top(&self) {
            self.scrolled_to.borrow_mut().push(0.0);
        }
    }

    fn page() -> FakePage {
        let mut page = FakePage::default();
        page.sections.insert("philosophy", 900.0);
        page.sections.insert("mission", 2400.0);
        page
    }

    #[test]
    fn known_section_scrolls_to_its_top() {
        let page = page();
        assert!(go_to(&page, SectionId::Mission));
        assert_eq!(*page.scrolled_to.borrow(), vec![2400.0]);
    }

    #[test]
    fn missing_section_is_silent() {
        let page = page();
        assert!(!go_to(&page, SectionId::Contact));
        assert!(!go_to(&page, "nowhere"));
        assert!(page.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn reveal_then_navigate() {
        let page = page();
        let mut mission = RevealState::default();
        assert!(mission.observe(true));

        assert!(go_to(&page, "mission"));
        assert!(mission.visible());
        assert!(go_to(&page, "mission"));
        assert_eq!(*page.scrolled_to.borrow(), vec![2400.0, 2400.0]);
    }

    #[test]
    fn navigate_before_reveal() {
        let page = page();
        let mission = RevealState::default();
        assert!(go_to(&page, SectionId::Mission));
        assert!(!mission.visible());
    }

    #[test]
    fn fragments_resolve_known_sections() {
        assert_eq!(SectionId::from_fragment("#partner"), Some(SectionId::Partner));
        assert_eq!(SectionId::from_fragment("contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_fragment(""), None);
        assert_eq!(SectionId::from_fragment("#pricing"), None);
    }

    #[test]
    fn ids_match_page_anchors() {
        let ids: Vec<_> = SectionId::ALL.iter().map(SectionId::as_str).collect();
        assert_eq!(ids, ["philosophy", "mission", "services", "partner", "contact"]);
    }
}
