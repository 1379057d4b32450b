use std::any::{Any, TypeId};
use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Publish/subscribe bus for grid notifications
///
/// Handlers run synchronously on the publishing thread. A handler must not
/// publish on the same bus.
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// A year was committed by a click or an activation key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearUpdated {
    pub year: i32,
}

/// The host should bring `year` into view, and focus it when `move_focus` is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequested {
    pub year: i32,
    pub move_focus: bool,
}

macro_rules! impl_event {
    ($($t:ty),*) => {
        $(
            impl Event for $t {
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    }
}

impl_event!(YearUpdated, FocusRequested);

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }

    /// Number of handlers registered for `E`
    pub fn handler_count<E: Event>(&self) -> usize {
        self.handlers
            .lock()
            .get(&TypeId::of::<E>())
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

/// Create a handler that only sees events of type `E`
pub fn typed_handler<E, F>(mut f: F) -> Box<dyn EventHandler>
where
    E: Event,
    F: FnMut(&E) + Send + Sync + 'static,
{
    handler_from_fn(move |event| {
        if let Some(event) = event.as_any().downcast_ref::<E>() {
            f(event);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_typed_subscribers_only() {
        let bus = EventBus::new();
        let years = Arc::new(Mutex::new(Vec::new()));

        let sink = years.clone();
        bus.subscribe::<YearUpdated>(typed_handler::<YearUpdated, _>(move |e| sink.lock().push(e.year)));

        bus.publish(YearUpdated { year: 2018 });
        bus.publish(FocusRequested { year: 2019, move_focus: true });

        assert_eq!(*years.lock(), vec![2018]);
        assert_eq!(bus.handler_count::<YearUpdated>(), 1);
        assert_eq!(bus.handler_count::<FocusRequested>(), 0);
    }
}
