//! Browser-backed implementations of the widget's injected dependencies

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::warn;

use crate::widget::{Clock, PlacementStore, StoreError};

/// `window.localStorage`, or nothing when storage is blocked
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; bot placement will not persist");
        }
        Self { storage }
    }
}

impl PlacementStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}

/// `Date.now()`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

pub fn fresh_rng() -> SmallRng {
    let mut seed = <SmallRng as SeedableRng>::Seed::default();
    match getrandom::fill(seed.as_mut()) {
        Ok(()) => SmallRng::from_seed(seed),
        Err(err) => {
            warn!(%err, "getrandom failed; seeding from clock");
            SmallRng::seed_from_u64(js_sys::Date::now().to_bits())
        }
    }
}

/// Current vertical page scroll in pixels
pub fn scroll_offset() -> f32 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}
