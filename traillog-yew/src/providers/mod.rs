mod session_provider;

pub use session_provider::{SessionProvider, SessionProviderProps};
