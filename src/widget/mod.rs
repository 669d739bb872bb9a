//! Widget core - the floating bot's behaviour, free of any UI framework
//!
//! The Dioxus component in `crate::bot` owns a [`WidgetController`] and
//! feeds it pointer, scroll, resize and timer events. Storage, time and
//! randomness are injected so everything here runs under plain `cargo test`.

pub mod clock;
pub mod config;
pub mod controller;
pub mod drag;
pub mod messages;
pub mod scroll;
pub mod solver;
pub mod store;
pub mod timer;

pub use clock::Clock;
pub use config::WidgetConfig;
pub use controller::WidgetController;
pub use store::{PlacementStore, StoreError};
pub use timer::Timer;
