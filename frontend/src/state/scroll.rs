use std::rc::Rc;

use yew::Reducible;

use crate::config::SCROLL_THRESHOLD_PX;

/// Nav bar styling derived from the live scroll offset. No hysteresis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    scrolled: bool,
}

impl ScrollChrome {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > SCROLL_THRESHOLD_PX,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Reducible for ScrollChrome {
    type Action = f64;

    fn reduce(self: Rc<Self>, offset: f64) -> Rc<Self> {
        let next = Self::at_offset(offset);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_live_offset() {
        let top = Rc::new(ScrollChrome::at_offset(0.0));
        assert!(!top.scrolled());
        let down = top.reduce(51.0);
        assert!(down.scrolled());
        let back = down.reduce(0.0);
        assert!(!back.scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        assert!(!ScrollChrome::at_offset(50.0).scrolled());
        assert!(ScrollChrome::at_offset(50.5).scrolled());
    }

    #[test]
    fn unchanged_side_keeps_state() {
        let down = Rc::new(ScrollChrome::at_offset(400.0));
        let further = down.clone().reduce(900.0);
        assert!(Rc::ptr_eq(&down, &further));
    }
}
