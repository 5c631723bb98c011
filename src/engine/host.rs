//! Viewport host capability.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::foundation::core::Size;
use crate::scroll::tracker::TriggerBounds;

/// The environment a scroller session runs inside.
///
/// Hosts own the real viewport, whatever that is, and answer simple
/// measurement queries. The engine reads them fresh on every event
/// rather than caching, so a host is free to return different answers
/// as its world changes.
pub trait ViewportHost {
    /// Current viewport size in pixels.
    fn viewport(&self) -> Size;

    /// Vertical scroll offset from the document top, in pixels.
    fn scroll_y(&self) -> f64;

    /// Measured placement of the scroll trigger.
    ///
    /// Measured, not requested: while a settle transition plays out the
    /// height reported here may trail the extent the engine asked for.
    fn trigger_bounds(&self) -> TriggerBounds;

    /// The host's user agent string, empty when unknown.
    fn user_agent(&self) -> String;
}

/// Whether a user agent belongs to a touch handset.
///
/// Handset browsers fire resize events as their toolbars collapse
/// during scrolling; reacting to those would re-derive the layout
/// mid-story, so resizes from these agents are ignored.
pub fn is_touch_handset(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ua.contains("ipad") || ua.contains("iphone")
}

#[derive(Debug, Default)]
struct HostState {
    viewport: Cell<Size>,
    scroll_y: Cell<f64>,
    trigger: Cell<TriggerBounds>,
    user_agent: RefCell<String>,
}

/// In-memory host for tests and synthetic sessions.
///
/// Clones share state, so a session can own one handle while the caller
/// mutates another between events.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    state: Rc<HostState>,
}

impl StaticHost {
    /// Host with the given viewport and everything else zeroed.
    pub fn new(viewport: Size) -> Self {
        let host = Self::default();
        host.set_viewport(viewport);
        host
    }

    /// Replace the viewport measurement.
    pub fn set_viewport(&self, viewport: Size) {
        self.state.viewport.set(viewport);
    }

    /// Replace the scroll offset.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.state.scroll_y.set(scroll_y);
    }

    /// Replace the measured trigger placement.
    pub fn set_trigger_bounds(&self, bounds: TriggerBounds) {
        self.state.trigger.set(bounds);
    }

    /// Replace the user agent string.
    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        *self.state.user_agent.borrow_mut() = user_agent.into();
    }
}

impl ViewportHost for StaticHost {
    fn viewport(&self) -> Size {
        self.state.viewport.get()
    }

    fn scroll_y(&self) -> f64 {
        self.state.scroll_y.get()
    }

    fn trigger_bounds(&self) -> TriggerBounds {
        self.state.trigger.get()
    }

    fn user_agent(&self) -> String {
        self.state.user_agent.borrow().clone()
    }
}
