use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{FxError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(FxError::NoDocument)
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Fires `callback` at most once, on the first `event`.
    pub fn once<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        Self::new(target, event, move |_| {
            if let Some(callback) = callback.take() {
                callback();
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Owns every pending timeout scheduled by the controller.
#[derive(Default)]
pub struct TimerSet {
    pending: Rc<RefCell<Vec<Timeout>>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending
            .borrow_mut()
            .push(Timeout::new(millis, callback));
    }

    /// A non-owning handle for scheduling from inside callbacks.
    pub fn handle(&self) -> TimerHandle {
        TimerHandle(Rc::downgrade(&self.pending))
    }

    pub fn cancel_all(&self) {
        let pending: Vec<Timeout> = self.pending.borrow_mut().drain(..).collect();
        drop(pending);
    }
}

#[derive(Clone)]
pub struct TimerHandle(Weak<RefCell<Vec<Timeout>>>);

impl TimerHandle {
    /// No-op once the owning [`TimerSet`] is gone.
    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(pending) = self.0.upgrade() {
            pending.borrow_mut().push(Timeout::new(millis, callback));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyPhase {
    Loading,
    Interactive,
    Complete,
}

impl ReadyPhase {
    pub fn from_state(state: &str) -> Self {
        match state {
            "complete" => ReadyPhase::Complete,
            "interactive" => ReadyPhase::Interactive,
            _ => ReadyPhase::Loading,
        }
    }

    pub fn of(document: &Document) -> Self {
        Self::from_state(&document.ready_state())
    }

    pub fn dom_ready(self) -> bool {
        self >= ReadyPhase::Interactive
    }

    pub fn loaded(self) -> bool {
        self == ReadyPhase::Complete
    }
}

/// Runs `callback` on DOMContentLoaded, or right away if that already fired.
pub fn on_dom_ready<F>(document: &Document, callback: F) -> Result<Option<Listener>>
where
    F: FnOnce() + 'static,
{
    if ReadyPhase::of(document).dom_ready() {
        callback();
        return Ok(None);
    }
    Listener::once(document, "DOMContentLoaded", callback).map(Some)
}

/// Runs `callback` on window load, or right away if the page is already loaded.
pub fn on_load<F>(window: &Window, document: &Document, callback: F) -> Result<Option<Listener>>
where
    F: FnOnce() + 'static,
{
    if ReadyPhase::of(document).loaded() {
        callback();
        return Ok(None);
    }
    Listener::once(window, "load", callback).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_phase_orders_lifecycle() {
        assert!(!ReadyPhase::from_state("loading").dom_ready());
        assert!(ReadyPhase::from_state("interactive").dom_ready());
        assert!(!ReadyPhase::from_state("interactive").loaded());
        assert!(ReadyPhase::from_state("complete").dom_ready());
        assert!(ReadyPhase::from_state("complete").loaded());
    }

    #[test]
    fn unknown_state_counts_as_loading() {
        assert_eq!(ReadyPhase::from_state(""), ReadyPhase::Loading);
    }
}
