//! One window `scroll` listener shared by every subscriber on the page.
//!
//! The listener is attached when the first subscriber arrives and detached
//! when the last [`ScrollSubscription`] is dropped, whatever the drop order.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::DomError;

type Handler = Rc<dyn Fn(f64)>;

/// Where the bus hooks its single listener.
pub trait ListenerHost {
    type Listener;

    fn attach(&self) -> Result<Self::Listener, DomError>;

    fn detach(&self, listener: Self::Listener);
}

/// The browser window's `scroll` event.
pub struct WindowScroll;

impl ListenerHost for WindowScroll {
    type Listener = Closure<dyn FnMut()>;

    fn attach(&self) -> Result<Self::Listener, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let listener = Closure::wrap(Box::new(publish) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;
        Ok(listener)
    }

    fn detach(&self, listener: Self::Listener) {
        let Some(window) = web_sys::window() else {
            warn!("scroll listener not removed: {}", DomError::NoWindow);
            return;
        };
        if let Err(e) =
            window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("scroll listener not removed: {}", DomError::from(e));
        }
    }
}

struct Subscribers {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Subscribers {
    fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    fn insert(&mut self, handler: Handler) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    fn remove(&mut self, id: u64) {
        self.handlers.retain(|(existing, _)| *existing != id);
    }

    fn snapshot(&self) -> Vec<Handler> {
        self.handlers.iter().map(|(_, handler)| handler.clone()).collect()
    }

    fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

pub struct Bus<H: ListenerHost> {
    host: H,
    subscribers: Subscribers,
    listener: Option<H::Listener>,
}

impl<H: ListenerHost> Bus<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            subscribers: Subscribers::new(),
            listener: None,
        }
    }

    fn subscribe(&mut self, handler: Handler) -> Result<u64, DomError> {
        if self.listener.is_none() {
            self.listener = Some(self.host.attach()?);
        }
        Ok(self.subscribers.insert(handler))
    }

    fn unsubscribe(&mut self, id: u64) {
        self.subscribers.remove(id);
        if self.subscribers.is_empty() {
            if let Some(listener) = self.listener.take() {
                self.host.detach(listener);
            }
        }
    }

    fn snapshot(&self) -> Vec<Handler> {
        self.subscribers.snapshot()
    }
}

/// Keeps a handler registered on the bus until dropped.
#[must_use = "the handler is unsubscribed as soon as this is dropped"]
pub struct ScrollSubscription<H: ListenerHost = WindowScroll> {
    bus: Rc<RefCell<Bus<H>>>,
    id: u64,
}

impl<H: ListenerHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.bus.borrow_mut().unsubscribe(self.id);
    }
}

fn subscribe_to<H: ListenerHost>(
    bus: &Rc<RefCell<Bus<H>>>,
    handler: impl Fn(f64) + 'static,
) -> Result<ScrollSubscription<H>, DomError> {
    let id = bus.borrow_mut().subscribe(Rc::new(handler))?;
    Ok(ScrollSubscription {
        bus: bus.clone(),
        id,
    })
}

thread_local! {
    static BUS: Rc<RefCell<Bus<WindowScroll>>> = Rc::new(RefCell::new(Bus::new(WindowScroll)));
}

pub fn current_offset() -> Result<f64, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    Ok(window.scroll_y()?)
}

/// Calls `handler` with the vertical scroll offset on every scroll event.
pub fn subscribe(handler: impl Fn(f64) + 'static) -> Result<ScrollSubscription, DomError> {
    BUS.with(|bus| subscribe_to(bus, handler))
}

fn publish() {
    let offset = match current_offset() {
        Ok(offset) => offset,
        Err(e) => {
            warn!("unable to read scroll offset: {}", e);
            return;
        }
    };
    // Handlers run outside the borrow so they may subscribe or unsubscribe.
    let handlers = BUS.with(|bus| bus.borrow().snapshot());
    for handler in handlers {
        handler(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts attach/detach calls; optionally refuses to attach.
    #[derive(Default)]
    struct CountingHost {
        attached: Rc<Cell<u32>>,
        detached: Rc<Cell<u32>>,
        refuse: Rc<Cell<bool>>,
    }

    impl ListenerHost for CountingHost {
        type Listener = u32;

        fn attach(&self) -> Result<u32, DomError> {
            if self.refuse.get() {
                return Err(DomError::NoWindow);
            }
            self.attached.set(self.attached.get() + 1);
            Ok(self.attached.get())
        }

        fn detach(&self, listener: u32) {
            assert_eq!(listener, self.attached.get());
            self.detached.set(self.detached.get() + 1);
        }
    }

    struct Counters {
        attached: Rc<Cell<u32>>,
        detached: Rc<Cell<u32>>,
        refuse: Rc<Cell<bool>>,
    }

    fn bus() -> (Rc<RefCell<Bus<CountingHost>>>, Counters) {
        let host = CountingHost::default();
        let counters = Counters {
            attached: host.attached.clone(),
            detached: host.detached.clone(),
            refuse: host.refuse.clone(),
        };
        (Rc::new(RefCell::new(Bus::new(host))), counters)
    }

    fn publish_to(bus: &Rc<RefCell<Bus<CountingHost>>>, offset: f64) {
        let handlers = bus.borrow().snapshot();
        for handler in handlers {
            handler(offset);
        }
    }

    #[test]
    fn one_listener_for_many_subscribers() {
        let (bus, counters) = bus();
        let first = subscribe_to(&bus, |_| {}).unwrap();
        let second = subscribe_to(&bus, |_| {}).unwrap();
        assert_eq!(counters.attached.get(), 1);

        drop(first);
        assert_eq!(counters.detached.get(), 0);
        drop(second);
        assert_eq!(counters.attached.get(), 1);
        assert_eq!(counters.detached.get(), 1);
    }

    #[test]
    fn drop_order_does_not_matter() {
        let (bus, counters) = bus();
        let first = subscribe_to(&bus, |_| {}).unwrap();
        let second = subscribe_to(&bus, |_| {}).unwrap();
        let third = subscribe_to(&bus, |_| {}).unwrap();

        drop(second);
        drop(third);
        assert_eq!(counters.detached.get(), 0);
        drop(first);
        assert_eq!(counters.detached.get(), 1);
    }

    #[test]
    fn listener_comes_back_after_going_idle() {
        let (bus, counters) = bus();
        drop(subscribe_to(&bus, |_| {}).unwrap());
        let again = subscribe_to(&bus, |_| {}).unwrap();
        assert_eq!(counters.attached.get(), 2);
        assert_eq!(counters.detached.get(), 1);
        drop(again);
        assert_eq!(counters.detached.get(), 2);
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let (bus, _counters) = bus();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let first = subscribe_to(&bus, move |_| counter.set(counter.get() + 1)).unwrap();
        let counter = hits.clone();
        let second = subscribe_to(&bus, move |_| counter.set(counter.get() + 10)).unwrap();

        publish_to(&bus, 60.0);
        assert_eq!(hits.get(), 11);

        drop(first);
        publish_to(&bus, 60.0);
        assert_eq!(hits.get(), 21);
        drop(second);
    }

    #[test]
    fn failed_attach_registers_nothing() {
        let (bus, counters) = bus();
        counters.refuse.set(true);
        assert!(subscribe_to(&bus, |_| {}).is_err());
        assert!(bus.borrow().snapshot().is_empty());

        counters.refuse.set(false);
        let subscription = subscribe_to(&bus, |_| {}).unwrap();
        assert_eq!(counters.attached.get(), 1);
        drop(subscription);
        assert_eq!(counters.detached.get(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut subscribers = Subscribers::new();
        let first = subscribers.insert(Rc::new(|_: f64| {}));
        subscribers.remove(first);
        let second = subscribers.insert(Rc::new(|_: f64| {}));
        assert_ne!(first, second);
    }
}
