//! Yew frontend for traillog.
//!
//! Renders the activity form and list, adapts browser geolocation and
//! `localStorage` to the core contracts, and bridges the map contract onto
//! callbacks so the embedding page can attach any interactive map widget.

pub mod app;
pub mod components;
pub mod hooks;
pub mod infrastructure;
pub mod pages;
pub mod providers;

pub use app::{init_logging, App, AppProps};
pub use hooks::{use_session, SessionContext};
pub use infrastructure::{request_position, CallbackMap, LocalStorageStore, MapDirective};
pub use providers::SessionProvider;
