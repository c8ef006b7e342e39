use crate::config::InfiniteScrollingConfig;
use crate::element::{ElementRef, ScrollContainer};
use std::rc::Rc;
use web_sys::HtmlElement;

#[cfg(test)]
pub(crate) mod testing;

type OnBottomHit<Ev> = Rc<dyn Fn(Ev)>;

/// Live binding between one element and one scroll handler.
///
/// Dropping it removes the listener, so every way out of an attachment
/// (explicit disengage, re-engage, owner dropped) releases it.
pub struct Subscription<E: ScrollContainer> {
    element: E,
    gap: f64,
    listener: Option<E::Listener>,
}

impl<E: ScrollContainer> Subscription<E> {
    fn attach(
        element: E,
        gap: f64,
        on_bottom_hit: OnBottomHit<E::Event>,
    ) -> Option<Self> {
        let observed = element.clone();
        let handler = move |event: E::Event| {
            if observed.scroll_metrics().is_at_bottom(gap) {
                log::trace!("scroll container reached bottom (gap = {gap})");
                on_bottom_hit(event);
            }
        };

        match element.add_scroll_listener(Box::new(handler)) {
            Ok(listener) => {
                log::debug!("attached scroll listener (gap = {gap})");
                Some(Self {
                    element,
                    gap,
                    listener: Some(listener),
                })
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Clamped gap this subscription checks against.
    pub fn gap(&self) -> f64 {
        self.gap
    }
}

impl<E: ScrollContainer> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            match self.element.remove_scroll_listener(listener) {
                Ok(()) => log::debug!("detached scroll listener"),
                Err(e) => log::warn!("{e}"),
            }
        }
    }
}

/// Calls a callback whenever a scroll container is scrolled to (or within `gap` of) its bottom.
///
/// The watcher does not notice on its own when the element reference changes:
/// the host calls [`rewatch`](Self::rewatch) whenever the element, the callback or
/// the config changes. Until then an empty reference stays unattached.
pub struct ScrollBottomWatcher<E: ScrollContainer = HtmlElement> {
    on_bottom_hit: OnBottomHit<E::Event>,
    config: InfiniteScrollingConfig,
    subscription: Option<Subscription<E>>,
}

impl<E: ScrollContainer> ScrollBottomWatcher<E> {
    /// An idle watcher. Nothing is attached until [`engage`](Self::engage) or [`rewatch`](Self::rewatch).
    pub fn new(
        on_bottom_hit: impl Fn(E::Event) + 'static,
        config: Option<InfiniteScrollingConfig>,
    ) -> Self {
        Self {
            on_bottom_hit: Rc::new(on_bottom_hit),
            config: InfiniteScrollingConfig::resolve(config),
            subscription: None,
        }
    }

    /// Drop any current subscription, then subscribe to `element` if there is one.
    ///
    /// Returns whether a subscription is live afterwards. `None` is not an error:
    /// the element simply isn't rendered yet.
    pub fn engage(&mut self, element: Option<E>) -> bool {
        self.disengage();

        let Some(element) = element else {
            log::trace!("scroll container not available, nothing to watch");
            return false;
        };

        self.subscription = Subscription::attach(
            element,
            self.config.effective_gap(),
            Rc::clone(&self.on_bottom_hit),
        );
        self.subscription.is_some()
    }

    /// Re-run setup against whatever `element_ref` holds right now.
    pub fn rewatch(&mut self, element_ref: &ElementRef<E>) -> bool {
        self.engage(element_ref.get())
    }

    /// Stage a new callback; applied on the next [`rewatch`](Self::rewatch).
    pub fn set_on_bottom_hit(&mut self, on_bottom_hit: impl Fn(E::Event) + 'static) {
        self.on_bottom_hit = Rc::new(on_bottom_hit);
    }

    /// Stage a new config; applied on the next [`rewatch`](Self::rewatch).
    pub fn set_config(&mut self, config: Option<InfiniteScrollingConfig>) {
        self.config = InfiniteScrollingConfig::resolve(config);
    }

    /// Stage new inputs and re-run setup in one step.
    pub fn reconfigure(
        &mut self,
        element_ref: &ElementRef<E>,
        config: Option<InfiniteScrollingConfig>,
    ) -> bool {
        self.set_config(config);
        self.rewatch(element_ref)
    }

    /// Remove the listener, if any. Safe to call repeatedly.
    pub fn disengage(&mut self) {
        self.subscription.take();
    }

    pub fn is_engaged(&self) -> bool {
        self.subscription.is_some()
    }

    /// The staged config. It can differ from what the live subscription uses
    /// until the next [`rewatch`](Self::rewatch); see [`active_gap`](Self::active_gap).
    pub fn config(&self) -> InfiniteScrollingConfig {
        self.config
    }

    /// Gap in effect for the live subscription, `None` when nothing is attached.
    pub fn active_gap(&self) -> Option<f64> {
        self.subscription.as_ref().map(Subscription::gap)
    }

    /// The element currently observed.
    pub fn element(&self) -> Option<&E> {
        self.subscription.as_ref().map(Subscription::element)
    }
}

/// Start watching `element_ref` for bottom hits.
///
/// An empty reference yields an idle watcher; call [`ScrollBottomWatcher::rewatch`]
/// once the element is there. Dropping the returned watcher detaches the listener.
pub fn watch<E: ScrollContainer>(
    element_ref: &ElementRef<E>,
    on_bottom_hit: impl Fn(E::Event) + 'static,
    config: Option<InfiniteScrollingConfig>,
) -> ScrollBottomWatcher<E> {
    let mut watcher = ScrollBottomWatcher::new(on_bottom_hit, config);
    watcher.rewatch(element_ref);
    watcher
}
