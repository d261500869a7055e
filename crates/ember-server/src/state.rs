//! State shared by every connection task.

use crate::Control;
use ember_events::{Event, EventBus};
use ember_types::EntityIdAllocator;
use ember_world::World;
use std::sync::Mutex as StdMutex;
use tokio::sync::{mpsc, Mutex};

pub struct ServerState {
    /// All chunk and roster mutations are serialised behind this lock.
    pub world: Mutex<World>,
    pub entity_ids: EntityIdAllocator,
    pub control: mpsc::UnboundedSender<Control>,
    pub events: StdMutex<EventBus>,
}

impl ServerState {
    pub fn new(world: World, control: mpsc::UnboundedSender<Control>) -> Self {
        Self {
            world: Mutex::new(world),
            entity_ids: EntityIdAllocator::new(),
            control,
            events: StdMutex::new(EventBus::new()),
        }
    }

    /// Fires an event through the bus; returns false when cancelled.
    pub fn fire_event(&self, name: &str, detail: &str) -> bool {
        let mut event = Event::new(name, detail);
        self.events
            .lock()
            .expect("event bus lock poisoned")
            .fire(&mut event)
    }
}
