//! Listener bookkeeping for a live overlay: the four mouse listeners, the
//! click handoff out of the overlay, and teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::OverlayError;
use crate::geometry::Point;
use crate::hotspot::HotspotSet;
use crate::overlay::{HotspotOverlay, OverlayConfig, OverlayEvent};
use crate::render::RenderTarget;

/// Mouse events a bound overlay listens to, in attach order.
pub const POINTER_EVENTS: [&str; 4] = ["mousemove", "mouseenter", "mouseleave", "click"];

/// Map a DOM event name and canvas-relative position to overlay input.
pub fn pointer_event(name: &str, at: Point) -> Option<OverlayEvent> {
    match name {
        "mousemove" => Some(OverlayEvent::PointerMove(at)),
        "mouseenter" => Some(OverlayEvent::PointerEnter(at)),
        "mouseleave" => Some(OverlayEvent::PointerLeave),
        "click" => Some(OverlayEvent::Click),
        _ => None,
    }
}

/// Something listeners are registered on, e.g. a canvas element.
pub trait EventSource {
    type Handler;

    fn add_listener(&self, event: &'static str, handler: &Self::Handler) -> Result<(), String>;
    fn remove_listener(&self, event: &'static str, handler: &Self::Handler);
}

/// A [`HotspotOverlay`] shared by every listener handler.
///
/// Clicks come back out of [`dispatch`](Self::dispatch) instead of running
/// inside the overlay, so the caller's callback runs with no borrow held and
/// may dispose the binding it was called from.
pub struct SharedOverlay<T: RenderTarget> {
    overlay: Rc<RefCell<HotspotOverlay<T>>>,
    clicked: Rc<RefCell<Option<String>>>,
    live: Rc<Cell<bool>>,
}

impl<T: RenderTarget> Clone for SharedOverlay<T> {
    fn clone(&self) -> Self {
        Self {
            overlay: self.overlay.clone(),
            clicked: self.clicked.clone(),
            live: self.live.clone(),
        }
    }
}

impl<T: RenderTarget> SharedOverlay<T> {
    pub fn new(
        target: T,
        hotspots: HotspotSet,
        config: OverlayConfig,
    ) -> Result<Self, OverlayError> {
        let clicked: Rc<RefCell<Option<String>>> = Rc::default();
        let sink = clicked.clone();
        let overlay = HotspotOverlay::new(target, hotspots, config, move |key, _| {
            *sink.borrow_mut() = Some(key.to_string());
        })?;
        Ok(Self {
            overlay: Rc::new(RefCell::new(overlay)),
            clicked,
            live: Rc::new(Cell::new(true)),
        })
    }

    /// Feed one event. Returns the key of the clicked hotspot when the event
    /// was a click on one. Does nothing once the owning binding is disposed.
    pub fn dispatch(&self, event: OverlayEvent) -> Option<String> {
        if !self.live.get() {
            return None;
        }
        if let Ok(mut overlay) = self.overlay.try_borrow_mut() {
            overlay.handle(event);
        }
        self.clicked.borrow_mut().take()
    }

    /// Read the overlay, unless a handler is currently inside it.
    pub fn with<R>(&self, f: impl FnOnce(&HotspotOverlay<T>) -> R) -> Option<R> {
        self.overlay.try_borrow().ok().map(|overlay| f(&overlay))
    }

    pub fn hovered(&self) -> Option<String> {
        self.with(|o| o.hovered().map(str::to_string)).flatten()
    }

    pub fn repaint(&self) {
        if let Ok(mut overlay) = self.overlay.try_borrow_mut() {
            overlay.repaint();
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    fn close(&self) {
        self.live.set(false);
        if let Ok(mut overlay) = self.overlay.try_borrow_mut() {
            overlay.reset();
        }
    }
}

/// An overlay wired to an [`EventSource`].
///
/// `dispose()` detaches every listener and resets the overlay. The handlers
/// themselves live until the binding is dropped, so a handler that disposes
/// its own binding finishes safely. Dropping the binding disposes it.
pub struct OverlayBinding<T: RenderTarget, S: EventSource> {
    overlay: SharedOverlay<T>,
    source: S,
    listeners: Vec<(&'static str, S::Handler)>,
    attached: bool,
}

impl<T: RenderTarget, S: EventSource> OverlayBinding<T, S> {
    /// Register one handler per entry of [`POINTER_EVENTS`]. `make` builds the
    /// handler for an event name from its own clone of the overlay. If a
    /// registration fails, the ones already made are removed again.
    pub fn bind(
        overlay: SharedOverlay<T>,
        source: S,
        mut make: impl FnMut(&'static str, SharedOverlay<T>) -> S::Handler,
    ) -> Result<Self, String> {
        let mut binding = Self {
            overlay,
            source,
            listeners: Vec::with_capacity(POINTER_EVENTS.len()),
            attached: false,
        };
        for event in POINTER_EVENTS {
            let handler = make(event, binding.overlay.clone());
            binding.source.add_listener(event, &handler)?;
            binding.listeners.push((event, handler));
            binding.attached = true;
        }
        Ok(binding)
    }

    pub fn overlay(&self) -> &SharedOverlay<T> {
        &self.overlay
    }

    /// Events currently listened to.
    pub fn events(&self) -> Vec<&'static str> {
        if !self.attached {
            return Vec::new();
        }
        self.listeners.iter().map(|(event, _)| *event).collect()
    }

    pub fn is_disposed(&self) -> bool {
        !self.attached
    }

    /// Detach every listener, restore the cursor and repaint without the
    /// highlight. Idempotent.
    pub fn dispose(&mut self) {
        if !self.attached {
            return;
        }
        for (event, handler) in &self.listeners {
            self.source.remove_listener(event, handler);
        }
        self.attached = false;
        self.overlay.close();
    }
}

impl<T: RenderTarget, S: EventSource> Drop for OverlayBinding<T, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
