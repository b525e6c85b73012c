use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;
use crate::state::reveal::RevealState;

/// Live intersection watch on one element. Dropping it disconnects the
/// observer and frees the callback.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports `is_intersecting` for `element` every time its visible ratio
/// crosses `threshold`.
pub fn watch_visibility(
    element: &Element,
    threshold: f64,
    mut on_report: impl FnMut(bool) + 'static,
) -> Result<VisibilityWatch, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_report(entry.is_intersecting());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

/// Starts a watch for an element that has not revealed yet. A revealed or
/// unmounted element gets no watch, and a failed start degrades to none.
pub fn watch_until_revealed<E, W>(
    state: RevealState,
    element: Option<E>,
    start: impl FnOnce(E) -> Result<W, DomError>,
) -> Option<W> {
    if state.visible() {
        return None;
    }
    let Some(element) = element else {
        debug!("reveal target not mounted");
        return None;
    };
    start(element)
        .map_err(|e| warn!("reveal watch failed: {}", e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a live observer; counts how many were released.
    struct CountedWatch(Rc<Cell<u32>>);

    impl Drop for CountedWatch {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn start_counted(
        started: &Rc<Cell<u32>>,
        released: &Rc<Cell<u32>>,
    ) -> impl FnOnce(()) -> Result<CountedWatch, DomError> {
        let started = started.clone();
        let released = released.clone();
        move |()| {
            started.set(started.get() + 1);
            Ok(CountedWatch(released))
        }
    }

    #[test]
    fn watch_is_released_once_revealed() {
        let started = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut state = RevealState::default();

        // Mount: hidden element gets a watch.
        let watch = watch_until_revealed(state, Some(()), start_counted(&started, &released));
        assert!(watch.is_some());
        assert_eq!(started.get(), 1);

        // Reveal changes the effect deps; the old watch is torn down...
        assert!(state.observe(true));
        drop(watch);
        assert_eq!(released.get(), 1);

        // ...and nothing new is started for a visible element.
        let watch = watch_until_revealed(state, Some(()), start_counted(&started, &released));
        assert!(watch.is_none());
        assert_eq!(started.get(), 1);
    }

    #[test]
    fn unmount_before_reveal_releases_watch() {
        let started = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let watch = watch_until_revealed(
            RevealState::default(),
            Some(()),
            start_counted(&started, &released),
        );
        drop(watch);
        assert_eq!((started.get(), released.get()), (1, 1));
    }

    #[test]
    fn missing_element_is_never_watched() {
        let started = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let watch = watch_until_revealed(
            RevealState::default(),
            None,
            start_counted(&started, &released),
        );
        assert!(watch.is_none());
        assert_eq!(started.get(), 0);
    }

    #[test]
    fn failed_start_degrades_to_hidden() {
        let watch: Option<CountedWatch> =
            watch_until_revealed(RevealState::default(), Some(()), |()| {
                Err(DomError::Js("IntersectionObserver unavailable".into()))
            });
        assert!(watch.is_none());
    }
}
