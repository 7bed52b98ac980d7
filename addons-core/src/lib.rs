use std::sync::Arc;

use twilight_http::Client;

use addons_utils::waiter::EventWaiter;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
/// The waiter is the process-wide registry every interactive menu session
/// registers with.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub waiter: Arc<EventWaiter>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, waiter: Arc<EventWaiter>) -> Self {
        Self { http, waiter }
    }
}
