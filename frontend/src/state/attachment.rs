/// Anything the user can pick in a file input. Only the name is ever read.
pub trait FileHandle {
    fn display_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn display_name(&self) -> String {
        self.name()
    }
}

/// Placeholder text for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLabels {
    pub empty: &'static str,
    pub staged_prefix: &'static str,
}

/// Holds the display name of a locally chosen file. The file's contents
/// are never read and nothing is uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSlot {
    display_name: Option<String>,
}

impl AttachmentSlot {
    pub fn select<F: FileHandle + ?Sized>(&mut self, file: &F) {
        self.display_name = Some(file.display_name());
    }

    pub fn clear(&mut self) {
        self.display_name = None;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn is_staged(&self) -> bool {
        self.display_name.is_some()
    }

    pub fn label(&self, labels: &SlotLabels) -> String {
        match &self.display_name {
            Some(name) => format!("{}{}", labels.staged_prefix, name),
            None => labels.empty.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Picked(&'static str);

    impl FileHandle for Picked {
        fn display_name(&self) -> String {
            self.0.to_string()
        }
    }

    const EVENT_LOGO: SlotLabels = SlotLabels {
        empty: "Upload Logo",
        staged_prefix: "File: ",
    };

    #[test]
    fn empty_slot_shows_placeholder() {
        let slot = AttachmentSlot::default();
        assert_eq!(slot.display_name(), None);
        assert_eq!(slot.label(&EVENT_LOGO), "Upload Logo");
    }

    #[test]
    fn second_selection_overwrites_first() {
        let mut slot = AttachmentSlot::default();
        slot.select(&Picked("logo.png"));
        slot.select(&Picked("logo-final.svg"));
        assert_eq!(slot.display_name(), Some("logo-final.svg"));
        assert_eq!(slot.label(&EVENT_LOGO), "File: logo-final.svg");
    }

    #[test]
    fn clear_returns_to_placeholder() {
        let mut slot = AttachmentSlot::default();
        slot.select(&Picked("qr.jpg"));
        assert!(slot.is_staged());
        slot.clear();
        slot.clear();
        assert!(!slot.is_staged());
        assert_eq!(slot.label(&EVENT_LOGO), "Upload Logo");
    }

    #[test]
    fn bare_prefix_shows_only_the_name() {
        let labels = SlotLabels {
            empty: "SUBMIT QR",
            staged_prefix: "",
        };
        let mut slot = AttachmentSlot::default();
        slot.select(&Picked("menu-qr.png"));
        assert_eq!(slot.label(&labels), "menu-qr.png");
    }
}
