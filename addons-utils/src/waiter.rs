//! One-shot gateway event subscriptions with deadlines.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;
use twilight_model::gateway::event::{Event, EventType};

type EventFilter = Box<dyn Fn(&Event) -> bool + Send + Sync>;

struct PendingWait {
    id: u64,
    filter: EventFilter,
    resolve: oneshot::Sender<Event>,
}

/// Removes the registration on drop so a cancelled wait cannot leak an entry.
struct WaitGuard<'a> {
    waiter: &'a EventWaiter,
    event_type: EventType,
    id: u64,
}

impl Drop for WaitGuard<'_> {
    fn drop(&mut self) {
        self.waiter.remove(self.event_type, self.id);
    }
}

/// One-shot subscription registry over inbound gateway events.
///
/// Callers register a filter for a single event type and suspend until the
/// first matching event arrives or a deadline passes. Exactly one of the two
/// outcomes resolves each registration. Independent sessions share one
/// waiter; isolation comes from their filters.
pub struct EventWaiter {
    pending: Mutex<HashMap<EventType, Vec<PendingWait>>>,
    next_id: AtomicU64,
}

impl EventWaiter {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Suspend until the first `event_type` event accepted by `filter`.
    ///
    /// Resolves `Some(event)` on a match, or `None` once `timeout` elapses
    /// without one. A match cancels the pending deadline; a deadline removes
    /// the registration so a later event can no longer match it. Dropping
    /// the returned future releases the registration.
    pub async fn wait_for(
        &self,
        event_type: EventType,
        filter: impl Fn(&Event) -> bool + Send + Sync + 'static,
        timeout: Duration,
    ) -> Option<Event> {
        let (resolve, resolved) = oneshot::channel();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.pending
            .lock()
            .unwrap()
            .entry(event_type)
            .or_default()
            .push(PendingWait {
                id,
                filter: Box::new(filter),
                resolve,
            });

        let _guard = WaitGuard {
            waiter: self,
            event_type,
            id,
        };

        match tokio::time::timeout(timeout, resolved).await {
            Ok(Ok(event)) => Some(event),
            _ => None,
        }
    }

    /// Offer an inbound event to pending registrations.
    ///
    /// The first registration (in registration order) whose filter accepts
    /// the event consumes it; a consumed event is not re-offered to later
    /// registrations. Returns whether any registration resolved.
    pub fn process(&self, event: &Event) -> bool {
        let mut pending = self.pending.lock().unwrap();
        let Some(waits) = pending.get_mut(&event.kind()) else {
            return false;
        };

        let mut delivered = false;
        while let Some(index) = waits.iter().position(|wait| (wait.filter)(event)) {
            let wait = waits.remove(index);
            // A send only fails when the waiting side already timed out; the
            // event then stays available for the next candidate.
            if wait.resolve.send(event.clone()).is_ok() {
                delivered = true;
                break;
            }
        }

        if waits.is_empty() {
            pending.remove(&event.kind());
        }
        delivered
    }

    /// Number of registrations currently awaiting an event.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().values().map(Vec::len).sum()
    }

    fn remove(&self, event_type: EventType, id: u64) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(waits) = pending.get_mut(&event_type) {
            waits.retain(|wait| wait.id != id);
            if waits.is_empty() {
                pending.remove(&event_type);
            }
        }
    }
}

impl Default for EventWaiter {
    fn default() -> Self {
        Self::new()
    }
}
