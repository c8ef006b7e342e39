pub(crate) mod html;

use crate::error::WatchResult;
use crate::metrics::ScrollMetrics;
use std::cell::RefCell;
use std::rc::Rc;

pub use html::SCROLL_EVENT;

/// An externally owned element with its own vertical scroll region.
///
/// Implementations are cheap handles (clones refer to the same element); the watcher
/// only reads measurements and adds/removes one listener, never mutates the element.
pub trait ScrollContainer: Clone + 'static {
    /// What the platform hands to scroll listeners.
    type Event: 'static;
    /// Token needed to remove a listener again.
    type Listener;

    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Register `handler` for scroll notifications, non-capturing and passive.
    fn add_scroll_listener(&self, handler: Box<dyn Fn(Self::Event)>)
        -> WatchResult<Self::Listener>;

    fn remove_scroll_listener(&self, listener: Self::Listener) -> WatchResult<()>;
}

/// A shared, possibly empty reference to an element owned by the host.
///
/// The host fills it once the element is rendered and clears it when the element
/// goes away. Clones share the same slot.
pub struct ElementRef<E>(Rc<RefCell<Option<E>>>);

impl<E> ElementRef<E> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    pub fn set(&self, element: E) {
        *self.0.borrow_mut() = Some(element);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().take();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl<E: Clone> ElementRef<E> {
    /// The element currently held, if any.
    pub fn get(&self) -> Option<E> {
        self.0.borrow().clone()
    }
}

impl<E> Clone for ElementRef<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> Default for ElementRef<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Option<E>> for ElementRef<E> {
    fn from(element: Option<E>) -> Self {
        Self(Rc::new(RefCell::new(element)))
    }
}
