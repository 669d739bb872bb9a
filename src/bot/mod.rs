//! Dioxus front for the widget core
//!
//! [`BrowserBot`] is the controller wired to localStorage, `Date.now()` and
//! a getrandom-seeded RNG. The app shell provides it through context so the
//! footer's restore button and the bot itself share one owner.

mod browser;
mod component;

use rand::rngs::SmallRng;

use crate::primitives::viewport_size;
use crate::widget::store;
use crate::widget::{WidgetConfig, WidgetController};

pub use browser::{BrowserClock, LocalStore};
pub use component::FloatingBot;

pub type BrowserBot = WidgetController<LocalStore, SmallRng, BrowserClock>;

/// localStorage key holding optional `WidgetConfig` overrides as JSON
pub const CONFIG_KEY: &str = "magicpost-bot-config";

/// Build the controller, applying any tuning overrides found under
/// [`CONFIG_KEY`]. Missing fields keep their defaults.
pub fn open_browser_bot() -> BrowserBot {
    let local = LocalStore::open();
    let config = store::load::<WidgetConfig, _>(&local, CONFIG_KEY).unwrap_or_default();
    WidgetController::new(
        local,
        viewport_size(),
        browser::fresh_rng(),
        BrowserClock,
        config,
    )
}
