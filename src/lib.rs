//! Fire a callback when a scroll container reaches (or comes within `gap` pixels of) its bottom.
//!
//! The core is [`ScrollBottomWatcher`]: it subscribes to an element's `scroll` events,
//! checks the bottom condition on each one, and unsubscribes when it is disengaged or
//! dropped. [`use_infinite_scrolling`] binds it to a Leptos `NodeRef` and component lifetime.
//!
//! ```ignore
//! let list_ref = NodeRef::<html::Div>::new();
//! use_infinite_scrolling_with_options(
//!     list_ref,
//!     move |_| load_more.dispatch(()),
//!     InfiniteScrollingConfig::new(200.0),
//! );
//! view! { <div class="overflow-y-auto" node_ref=list_ref>...</div> }
//! ```

pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod metrics;
pub mod watcher;

pub use components::hooks::{
    use_infinite_scrolling, use_infinite_scrolling_with_options, UseInfiniteScrollingReturn,
};
pub use config::InfiniteScrollingConfig;
pub use element::{ElementRef, ScrollContainer};
pub use error::{WatchError, WatchErrorKind, WatchResult};
pub use metrics::ScrollMetrics;
pub use watcher::{watch, ScrollBottomWatcher, Subscription};
