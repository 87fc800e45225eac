//! Text-input event dispatch.
//!
//! The host window feeds one [`TextInputEvent`] per character event into a
//! [`TextInputBus`]; widgets subscribe on construction and hold the
//! returned [`TextInputSubscription`]. Dropping the subscription removes
//! the callback, so a destroyed widget can never be invoked again. The
//! deregistration is tied to the guard's lifetime rather than to an
//! explicit teardown call.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::keyboard::Key;

/// One character-input event as reported by the host window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextInputEvent {
    /// The character produced by the keystroke.
    pub character: char,
    /// The key that originated the event.
    pub key: Key,
}

type Handler = Arc<dyn Fn(&TextInputEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Cloneable dispatcher for text-input events.
///
/// Clones share one subscriber registry. Dispatch order is subscription
/// order.
#[derive(Clone, Default)]
pub struct TextInputBus {
    inner: Arc<RwLock<BusInner>>,
}

impl TextInputBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` and returns the guard that keeps it alive.
    pub fn subscribe(
        &self,
        handler: impl Fn(&TextInputEvent) + Send + Sync + 'static,
    ) -> TextInputSubscription {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Arc::new(handler)));
        TextInputSubscription {
            bus: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `event` to every live subscriber.
    pub fn dispatch(&self, event: TextInputEvent) {
        // Handlers are invoked outside the lock so a handler may subscribe
        // or unsubscribe without deadlocking.
        let handlers: Vec<Handler> = self
            .inner
            .read()
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(&event);
        }
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().handlers.len()
    }
}

/// RAII registration guard returned by [`TextInputBus::subscribe`].
///
/// Dropping the guard removes the handler from the bus.
pub struct TextInputSubscription {
    bus: Weak<RwLock<BusInner>>,
    id: u64,
}

impl Drop for TextInputSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.write().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn event(character: char) -> TextInputEvent {
        TextInputEvent {
            character,
            key: Key::Other(0),
        }
    }

    #[test]
    fn dispatch_reaches_every_subscriber() {
        let bus = TextInputBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let _a = bus.subscribe({
            let seen = Arc::clone(&seen);
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        let _b = bus.subscribe({
            let seen = Arc::clone(&seen);
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        bus.dispatch(event('x'));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_the_subscription_deregisters() {
        let bus = TextInputBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let subscription = bus.subscribe({
            let seen = Arc::clone(&seen);
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(bus.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(bus.subscriber_count(), 0);

        bus.dispatch(event('x'));
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn subscription_outliving_the_bus_is_harmless() {
        let bus = TextInputBus::new();
        let subscription = bus.subscribe(|_| {});
        drop(bus);
        drop(subscription);
    }
}
