use super::ScrollContainer;
use crate::error::{WatchError, WatchErrorKind, WatchResult};
use crate::metrics::ScrollMetrics;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, HtmlElement};

pub const SCROLL_EVENT: &str = "scroll";

// `Element::scroll_top` is integral in web-sys; the DOM value can be fractional.
fn fractional_scroll_top(element: &HtmlElement) -> f64 {
    js_sys::Reflect::get(element, &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| element.scroll_top() as f64)
}

impl ScrollContainer for HtmlElement {
    type Event = web_sys::Event;
    type Listener = Closure<dyn Fn(web_sys::Event)>;

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.client_height() as f64,
            self.scroll_height() as f64,
            fractional_scroll_top(self),
        )
    }

    fn add_scroll_listener(
        &self,
        handler: Box<dyn Fn(web_sys::Event)>,
    ) -> WatchResult<Self::Listener> {
        let closure = Closure::wrap(handler);

        let options = AddEventListenerOptions::new();
        options.set_capture(false);
        options.set_passive(true);

        self.add_event_listener_with_callback_and_add_event_listener_options(
            SCROLL_EVENT,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| WatchError::from_js(WatchErrorKind::Subscribe, &e))?;

        Ok(closure)
    }

    fn remove_scroll_listener(&self, listener: Self::Listener) -> WatchResult<()> {
        self.remove_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
            .map_err(|e| WatchError::from_js(WatchErrorKind::Unsubscribe, &e))
    }
}
