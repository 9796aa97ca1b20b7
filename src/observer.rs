//! An ordered, synchronous publish/subscribe bus.
//!
//! Delivery runs on the publisher's call path, in subscription order,
//! handing every subscriber the same payload reference. Subscribing and
//! publishing both borrow the bus mutably, so overlapping them is a
//! compile error rather than a documented hazard. Failures are not
//! contained: a panicking subscriber aborts the remaining deliveries.

use std::collections::HashMap;

use log::trace;

type Subscriber<P> = Box<dyn FnMut(&P)>;

pub struct EventBus<P> {
    subscribers: HashMap<String, Vec<Subscriber<P>>>,
}

impl<P> EventBus<P> {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Appends a subscriber to the event's delivery list. Subscription
    /// order is delivery order, and nothing is ever silently dropped.
    pub fn subscribe(&mut self, event: impl Into<String>, callback: impl FnMut(&P) + 'static) {
        self.subscribers
            .entry(event.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Invokes every current subscriber for `event`, in order, with the
    /// same payload. An event nobody listens to is a no-op.
    pub fn publish(&mut self, event: &str, payload: &P) {
        if let Some(list) = self.subscribers.get_mut(event) {
            trace!("bus: {event} -> {} subscriber(s)", list.len());
            for callback in list.iter_mut() {
                callback(payload);
            }
        }
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }
}
