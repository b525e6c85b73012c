use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use yew::Reducible;

/// The page's dialog catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    /// Showcase of partner restaurants.
    Restaurant,
    /// Order form for custom-labelled event bottles.
    Event,
}

impl DialogKind {
    pub const ALL: [DialogKind; 2] = [DialogKind::Restaurant, DialogKind::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Restaurant => "restaurant",
            DialogKind::Event => "event",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Restaurant => "Our Esteemed Partners",
            DialogKind::Event => "Bespoke Event Branding",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialog(pub String);

impl FromStr for DialogKind {
    type Err = UnknownDialog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DialogKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownDialog(s.to_string()))
    }
}

/// Which dialog, if any, is on screen. At most one by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSelection {
    #[default]
    None,
    Open(DialogKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Open(DialogKind),
    Close,
}

impl ModalSelection {
    pub fn apply(self, action: ModalAction) -> ModalSelection {
        match action {
            ModalAction::Open(kind) => ModalSelection::Open(kind),
            ModalAction::Close => ModalSelection::None,
        }
    }

    pub fn active(&self) -> Option<DialogKind> {
        match self {
            ModalSelection::None => None,
            ModalSelection::Open(kind) => Some(*kind),
        }
    }
}

impl Reducible for ModalSelection {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: ModalAction) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            return self;
        }
        debug!("modal {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[ModalAction]) -> Vec<ModalSelection> {
        let mut state = Rc::new(ModalSelection::default());
        let mut seen = Vec::new();
        for action in actions {
            state = state.reduce(*action);
            seen.push(*state);
        }
        seen
    }

    #[test]
    fn starts_closed() {
        assert_eq!(ModalSelection::default(), ModalSelection::None);
        assert_eq!(ModalSelection::default().active(), None);
        assert_eq!(
            ModalSelection::Open(DialogKind::Event).active(),
            Some(DialogKind::Event)
        );
    }

    #[test]
    fn last_open_wins() {
        let seen = run(&[
            ModalAction::Open(DialogKind::Event),
            ModalAction::Open(DialogKind::Restaurant),
            ModalAction::Open(DialogKind::Event),
        ]);
        assert_eq!(seen.last(), Some(&ModalSelection::Open(DialogKind::Event)));
    }

    #[test]
    fn event_then_restaurant_then_close() {
        let event: DialogKind = "event".parse().unwrap();
        let restaurant: DialogKind = "restaurant".parse().unwrap();
        let seen = run(&[
            ModalAction::Open(event),
            ModalAction::Open(restaurant),
            ModalAction::Close,
        ]);
        assert_eq!(
            seen,
            vec![
                ModalSelection::Open(DialogKind::Event),
                ModalSelection::Open(DialogKind::Restaurant),
                ModalSelection::None,
            ]
        );
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let closed = Rc::new(ModalSelection::None);
        let after = closed.clone().reduce(ModalAction::Close);
        assert_eq!(*after, ModalSelection::None);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn reopening_same_dialog_keeps_state() {
        let open = Rc::new(ModalSelection::Open(DialogKind::Restaurant));
        let again = open.clone().reduce(ModalAction::Open(DialogKind::Restaurant));
        assert!(Rc::ptr_eq(&open, &again));
    }

    #[test]
    fn dialog_ids_round_trip() {
        for kind in DialogKind::ALL {
            assert_eq!(kind.as_str().parse::<DialogKind>(), Ok(kind));
        }
        assert_eq!(
            "corporate".parse::<DialogKind>(),
            Err(UnknownDialog("corporate".into()))
        );
    }
}
