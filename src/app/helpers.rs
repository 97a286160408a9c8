//! Contains helper functions to reduce boilerplate code in other `app` modules.

use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::proxy::EventProxy;
use super::state::SessionState;
use super::view_model::generate_ui_state;

/// A helper function that locks the `SessionState`, performs a mutation,
/// and then automatically sends a `StateUpdate` event to the UI.
///
/// Every mutating command runs through this, which is what gives observers
/// the guarantee that they are notified synchronously before the command
/// returns.
pub fn with_state_and_notify<F, P: EventProxy>(
    state: &Arc<Mutex<SessionState>>,
    proxy: &P,
    update_fn: F,
) where
    F: FnOnce(&mut SessionState),
{
    let mut state_guard = state
        .lock()
        .expect("Mutex was poisoned. This should not happen.");

    update_fn(&mut state_guard);

    let ui_state = generate_ui_state(&state_guard);
    proxy.send_event(UserEvent::StateUpdate(Box::new(ui_state)));
}
