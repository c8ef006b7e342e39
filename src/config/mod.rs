use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const GAP_KEY: &str = "gap";

/// Options for [`watch`](crate::watcher::watch) and the Leptos hook.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct InfiniteScrollingConfig {
    /// If the distance between the bottom of the scroll container and the vertical
    /// scroll position is less than or equal to this value, the callback fires.
    ///
    /// Negative values behave like `0`.
    pub gap: f64,
}

impl InfiniteScrollingConfig {
    pub fn new(gap: f64) -> Self {
        Self { gap }
    }

    /// The gap actually used by the bottom check. NaN clamps to 0 as well.
    pub fn effective_gap(&self) -> f64 {
        self.gap.max(0.0)
    }

    /// `None` means "no config given", which is `{ gap: 0 }`.
    pub fn resolve(config: Option<Self>) -> Self {
        config.unwrap_or_default()
    }

    /// Read a config off a plain JS object such as `{ gap: 120 }`.
    ///
    /// Anything that isn't an object, or a `gap` that isn't a number, yields the default.
    pub fn from_js(value: &JsValue) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        match js_sys::Reflect::get(value, &JsValue::from_str(GAP_KEY)) {
            Ok(gap) => gap.as_f64().map(Self::new).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

impl From<f64> for InfiniteScrollingConfig {
    fn from(gap: f64) -> Self {
        Self::new(gap)
    }
}
