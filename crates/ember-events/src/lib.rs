//! A small synchronous event bus: listeners subscribe to named events in
//! priority order and may cancel them mid-flight.

use std::collections::HashMap;

/// Listener priority: Lowest runs first, Monitor last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    Monitor,
}

/// A fired event. Listeners see it in priority order until one cancels it.
#[derive(Debug)]
pub struct Event {
    name: String,
    detail: String,
    cancelled: bool,
}

impl Event {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            cancelled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

type Callback = Box<dyn Fn(&mut Event) + Send + Sync>;

struct RegisteredListener {
    id: u64,
    priority: Priority,
    callback: Callback,
}

/// Maps event names to priority-sorted listener lists.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<RegisteredListener>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its id for later unsubscription.
    pub fn subscribe(
        &mut self,
        event: &str,
        priority: Priority,
        callback: impl Fn(&mut Event) + Send + Sync + 'static,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let list = self.listeners.entry(event.to_string()).or_default();
        list.push(RegisteredListener {
            id,
            priority,
            callback: Box::new(callback),
        });
        list.sort_by_key(|l| l.priority);
        id
    }

    /// Removes a listener; returns false if it was not registered.
    pub fn unsubscribe(&mut self, event: &str, id: u64) -> bool {
        let Some(list) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = list.len();
        list.retain(|l| l.id != id);
        before != list.len()
    }

    /// Runs the event through its listeners. Returns false when a listener
    /// cancelled it (later listeners do not run).
    pub fn fire(&self, event: &mut Event) -> bool {
        let Some(list) = self.listeners.get(event.name()) else {
            return true;
        };
        tracing::trace!("firing event {} to {} listeners", event.name(), list.len());
        for listener in list {
            (listener.callback)(event);
            if event.is_cancelled() {
                return false;
            }
        }
        true
    }

    pub fn event_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(|v| v.len()).sum()
    }
}
