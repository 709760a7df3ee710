//! Page Host Seams
//!
//! The controller never touches `web_sys` directly. It talks to the page through
//! these traits, implemented by `BrowserPage` in the browser and by an in-memory
//! page in tests.

mod browser;

pub use browser::BrowserPage;

/// DOM event a handler is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Submit,
    Click,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Submit => "submit",
            EventKind::Click => "click",
        }
    }
}

/// Whether the browser should go on with the event's default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Proceed,
    PreventDefault,
}

/// Handler bound with [`Dom::listen`]
pub type EventHandler = Box<dyn Fn() -> EventOutcome>;

/// Element access. Every lookup returns `Option`; absence is never a panic.
pub trait Dom {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First match in document order. Invalid selectors match nothing.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `scope` matching `selector`
    fn query_within(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// `element` itself or its nearest ancestor matching `selector`
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn text_content(&self, element: &Self::Element) -> Option<String>;

    fn set_text_content(&self, element: &Self::Element, text: &str);

    /// Checked state; `false` for anything that is not a checkable input
    fn is_checked(&self, element: &Self::Element) -> bool;

    /// Current value of a form field, `None` for non-fields
    fn input_value(&self, element: &Self::Element) -> Option<String>;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Detach `element` from the document
    fn remove(&self, element: &Self::Element);

    fn focus(&self, element: &Self::Element);

    /// Smooth scroll, aligning the element's top edge with the viewport
    fn scroll_into_view(&self, element: &Self::Element);

    fn listen(&self, element: &Self::Element, kind: EventKind, handler: EventHandler);
}

/// Blocking user dialogs
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Executes navigation commands
pub trait Navigator {
    fn navigate(&self, route: &crate::models::Route);
}

/// Deferred execution with revocable handles
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Revoke a task that has not run yet
    fn cancel(&self, handle: Self::Handle);

    /// Dispose of the handle of a task that is running or has run.
    /// Called from inside the task itself.
    fn release(&self, handle: Self::Handle) {
        drop(handle);
    }
}

/// Everything the controller needs from its environment
pub trait PageHost: Dom + Dialogs + Navigator + Scheduler + 'static {}

impl<T> PageHost for T where T: Dom + Dialogs + Navigator + Scheduler + 'static {}
