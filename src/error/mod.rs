use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchErrorKind {
    /// The platform refused to register the scroll listener.
    Subscribe,
    /// The platform refused to remove a previously registered listener.
    Unsubscribe,
}

/// Failure reported by a [`ScrollContainer`](crate::element::ScrollContainer) implementation.
///
/// The watcher never hands these to the caller: a failed subscribe leaves it
/// unengaged, a failed unsubscribe is logged and forgotten.
#[derive(Clone, Debug)]
pub struct WatchError {
    pub kind: WatchErrorKind,
    pub message: String,
}

impl std::fmt::Display for WatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for WatchError {}

impl WatchError {
    pub fn subscribe(ctx: impl std::fmt::Display) -> Self {
        Self {
            kind: WatchErrorKind::Subscribe,
            message: format!("failed to add scroll listener: {ctx}"),
        }
    }

    pub fn unsubscribe(ctx: impl std::fmt::Display) -> Self {
        Self {
            kind: WatchErrorKind::Unsubscribe,
            message: format!("failed to remove scroll listener: {ctx}"),
        }
    }

    pub(crate) fn from_js(kind: WatchErrorKind, value: &JsValue) -> Self {
        let ctx = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        match kind {
            WatchErrorKind::Subscribe => Self::subscribe(ctx),
            WatchErrorKind::Unsubscribe => Self::unsubscribe(ctx),
        }
    }
}

pub type WatchResult<T> = Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context() {
        let e = WatchError::subscribe("element detached");
        assert_eq!(e.kind, WatchErrorKind::Subscribe);
        assert_eq!(e.to_string(), "failed to add scroll listener: element detached");

        let e = WatchError::unsubscribe("gone");
        assert_eq!(e.kind, WatchErrorKind::Unsubscribe);
        assert!(e.to_string().ends_with("gone"));
    }
}
