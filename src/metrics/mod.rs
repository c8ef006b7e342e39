/// Vertical measurements of a scroll container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Visible height (`clientHeight`).
    pub client_height: f64,
    /// Total content height (`scrollHeight`).
    pub scroll_height: f64,
    /// Current offset from the top (`scrollTop`), may be fractional.
    pub scroll_top: f64,
}

impl ScrollMetrics {
    pub fn new(client_height: f64, scroll_height: f64, scroll_top: f64) -> Self {
        Self {
            client_height,
            scroll_height,
            scroll_top,
        }
    }

    /// `scrollTop` as a JS truthiness check: 0 and NaN count as "not scrolled".
    pub fn has_scrolled(&self) -> bool {
        self.scroll_top != 0.0 && !self.scroll_top.is_nan()
    }

    /// Distance left to the bottom, with the offset rounded up.
    pub fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top.ceil() - self.client_height
    }

    /// Whether the container counts as scrolled to the bottom, allowing `gap` pixels of slack.
    ///
    /// `gap` is used as given; callers pass an already clamped value
    /// (see [`InfiniteScrollingConfig::effective_gap`](crate::config::InfiniteScrollingConfig::effective_gap)).
    ///
    /// An offset of exactly 0 never counts, even when the content fits the viewport,
    /// so a freshly mounted short list does not fire.
    pub fn is_at_bottom(&self, gap: f64) -> bool {
        self.has_scrolled()
            && self.client_height >= self.scroll_height - self.scroll_top.ceil() - gap
    }
}
