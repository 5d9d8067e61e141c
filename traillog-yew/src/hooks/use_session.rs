use std::rc::Rc;
use traillog_core::{Activity, SessionCommand, SessionEvent, SessionPhase};
use yew::prelude::*;

/// Session state accessible via hook
#[derive(Clone)]
pub struct SessionContext {
    /// Snapshot of the activity log, newest last
    pub activities: Vec<Activity>,

    /// Current phase of the session state machine
    pub phase: SessionPhase,

    /// Event produced by the most recent command, if any
    pub last_event: Option<SessionEvent>,

    /// Send a command to the session controller
    pub send_command: Rc<dyn Fn(SessionCommand)>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.activities == other.activities
            && self.phase == other.phase
            && self.last_event == other.last_event
    }
}

/// Hook to access session state
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
