use crate::config::InfiniteScrollingConfig;
use crate::watcher::ScrollBottomWatcher;
use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub struct UseInfiniteScrollingReturn {
    /// Whether a scroll listener is currently attached to the target.
    pub is_engaged: Signal<bool>,
}

/// Hook for "load more on scroll": calls `on_bottom_hit` whenever `target` is scrolled to its bottom.
///
/// Same as [`use_infinite_scrolling_with_options`] with `{ gap: 0 }`.
pub fn use_infinite_scrolling<E, F>(target: NodeRef<E>, on_bottom_hit: F) -> UseInfiniteScrollingReturn
where
    E: ElementType,
    E::Output: Clone + AsRef<HtmlElement> + JsCast + 'static,
    F: Fn(web_sys::Event) + 'static,
{
    use_infinite_scrolling_with_options(target, on_bottom_hit, InfiniteScrollingConfig::default())
}

/// Hook for "load more on scroll" with a configurable gap.
///
/// The listener is re-attached whenever `target` is (re)mounted or `options` changes,
/// and removed when the owning component is cleaned up. While `target` is not rendered
/// nothing is attached.
pub fn use_infinite_scrolling_with_options<E, F>(
    target: NodeRef<E>,
    on_bottom_hit: F,
    options: impl Into<Signal<InfiniteScrollingConfig>>,
) -> UseInfiniteScrollingReturn
where
    E: ElementType,
    E::Output: Clone + AsRef<HtmlElement> + JsCast + 'static,
    F: Fn(web_sys::Event) + 'static,
{
    let options = options.into();
    let is_engaged = RwSignal::new(false);
    let watcher = StoredValue::new_local(ScrollBottomWatcher::<HtmlElement>::new(on_bottom_hit, None));

    // Re-run setup when the element or the options change.
    Effect::new(move |_| {
        let config = options.get();
        let element = target
            .get()
            .map(|el| AsRef::<HtmlElement>::as_ref(&el).clone());

        let engaged = watcher
            .try_update_value(|watcher| {
                watcher.set_config(Some(config));
                watcher.engage(element)
            })
            .unwrap_or(false);
        is_engaged.set(engaged);
    });

    on_cleanup(move || {
        watcher.try_update_value(|watcher| watcher.disengage());
    });

    UseInfiniteScrollingReturn {
        is_engaged: is_engaged.into(),
    }
}
