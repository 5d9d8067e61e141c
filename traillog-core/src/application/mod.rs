mod commands;
mod controller;
mod events;

pub use commands::{ActivityDraft, SessionCommand};
pub use controller::{SessionController, SessionPhase};
pub use events::SessionEvent;
