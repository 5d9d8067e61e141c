mod session_screen;

pub use session_screen::SessionScreen;
