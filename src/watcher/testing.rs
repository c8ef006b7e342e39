use crate::element::ScrollContainer;
use crate::error::{WatchError, WatchResult};
use crate::metrics::ScrollMetrics;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub(crate) struct FakeEvent {
    pub seq: usize,
}

#[derive(Default)]
struct FakeState {
    metrics: ScrollMetrics,
    listeners: Vec<(usize, Rc<dyn Fn(FakeEvent)>)>,
    next_id: usize,
    seq: usize,
    added: usize,
    removed: usize,
    refuse: bool,
}

/// In-memory scroll container that records listener bookkeeping.
#[derive(Clone, Default)]
pub(crate) struct FakeContainer(Rc<RefCell<FakeState>>);

impl FakeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refuse_listeners(&self) {
        self.0.borrow_mut().refuse = true;
    }

    pub fn added(&self) -> usize {
        self.0.borrow().added
    }

    pub fn removed(&self) -> usize {
        self.0.borrow().removed
    }

    pub fn live_listeners(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    /// Set the measurements and deliver one scroll notification to every listener.
    pub fn simulate_scroll(&self, to: f64, height: f64, content_height: f64) {
        let (event, listeners) = {
            let mut state = self.0.borrow_mut();
            state.metrics = ScrollMetrics::new(height, content_height, to);
            state.seq += 1;
            let listeners: Vec<_> = state.listeners.iter().map(|(_, l)| l.clone()).collect();
            (FakeEvent { seq: state.seq }, listeners)
        };

        for listener in listeners {
            listener(event.clone());
        }
    }
}

impl ScrollContainer for FakeContainer {
    type Event = FakeEvent;
    type Listener = usize;

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.0.borrow().metrics
    }

    fn add_scroll_listener(&self, handler: Box<dyn Fn(FakeEvent)>) -> WatchResult<usize> {
        let mut state = self.0.borrow_mut();
        if state.refuse {
            return Err(WatchError::subscribe("refused"));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.push((id, Rc::from(handler)));
        state.added += 1;
        Ok(id)
    }

    fn remove_scroll_listener(&self, listener: usize) -> WatchResult<()> {
        let mut state = self.0.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(id, _)| *id != listener);
        if state.listeners.len() == before {
            return Err(WatchError::unsubscribe(format!("unknown listener {listener}")));
        }
        state.removed += 1;
        Ok(())
    }
}
