//! Browser Host
//!
//! `PageHost` backed by the live document via `web_sys`, with `gloo-timers`
//! for deferred work.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use super::{Dialogs, Dom, EventHandler, EventKind, EventOutcome, Navigator, Scheduler};
use crate::models::Route;

pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// `None` outside a browsing context (workers, node)
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Run `boot` once the document has been parsed
    pub fn when_ready<F>(self, boot: F)
    where
        F: FnOnce(BrowserPage) + 'static,
    {
        if self.document.ready_state() != "loading" {
            boot(self);
            return;
        }

        let document = self.document.clone();
        let callback = Closure::once_into_js(move || boot(self));
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            warn!("[PAGE] could not wait for DOMContentLoaded: {:?}", err);
        }
    }
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Dom for BrowserPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => collect_elements(list),
            Err(err) => {
                warn!("[PAGE] bad selector {}: {:?}", selector, err);
                Vec::new()
            }
        }
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).ok().flatten()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text_content(&self, element: &Element) -> Option<String> {
        element.text_content()
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn is_checked(&self, element: &Element) -> bool {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn input_value(&self, element: &Element) -> Option<String> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn focus(&self, element: &Element) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.focus();
        }
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn listen(&self, element: &Element, kind: EventKind, handler: EventHandler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if handler() == EventOutcome::PreventDefault {
                ev.prevent_default();
            }
        });
        if let Err(err) =
            element.add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
        {
            warn!("[PAGE] could not bind {} listener: {:?}", kind.as_str(), err);
        }
        // Listeners live as long as the page
        callback.forget();
    }
}

impl Dialogs for BrowserPage {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

impl Navigator for BrowserPage {
    fn navigate(&self, route: &Route) {
        if let Err(err) = self.window.location().set_href(&route.path()) {
            warn!("[PAGE] navigation to {} failed: {:?}", route, err);
        }
    }
}

impl Scheduler for BrowserPage {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }

    fn release(&self, handle: Timeout) {
        // Dropping would free the closure that is currently executing
        let _ = handle.forget();
    }
}
