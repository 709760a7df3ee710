//! Page Behavior Controller
//!
//! Reacts to checkbox toggles, delete clicks, form submits and anchor clicks on
//! the server-rendered dashboard. Every deferred effect is a keyed, cancellable
//! task; every navigation is a `Route` handed to the host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::config::PageConfig;
use crate::error::{PageError, PageResult};
use crate::host::{Dialogs, Dom, EventKind, EventOutcome, Navigator, PageHost, Scheduler};
use crate::models::{DeleteOutcome, EntityKind, InitReport, Route, SubtaskId, TaskId, TimerKey};
use crate::validation::validate_title;


/// Transition applied to a row when its checkbox flips
const TOGGLE_TRANSITION: &str = "opacity 0.3s ease";

/// Offset a deleted row slides by while fading out
const DELETE_SLIDE: &str = "translateX(-20px)";

struct Inner<H: PageHost> {
    host: H,
    config: PageConfig,
    pending: RefCell<HashMap<TimerKey, H::Handle>>,
}

/// Cheap to clone; clones share the host and the pending-timer table.
pub struct PageController<H: PageHost> {
    inner: Rc<Inner<H>>,
}

impl<H: PageHost> Clone for PageController<H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<H: PageHost> PageController<H> {
    pub fn new(host: H, config: PageConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                config,
                pending: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn config(&self) -> &PageConfig {
        &self.inner.config
    }

    fn downgrade(&self) -> Weak<Inner<H>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner<H>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    // ========================
    // Startup
    // ========================

    /// Bind the page. Call once per page load.
    pub fn initialize(&self) -> InitReport {
        let report = InitReport {
            alerts: self.schedule_alert_dismissal(),
            completed: self.update_completed_count(),
            forms: self.bind_forms(),
            anchors: self.bind_anchors(),
        };
        info!("[PAGE] initialized: {}", report);
        report
    }

    fn schedule_alert_dismissal(&self) -> usize {
        let config = &self.inner.config;
        let alerts = self.inner.host.query_selector_all(&config.alert_selector);
        for (index, alert) in alerts.iter().cloned().enumerate() {
            self.schedule(TimerKey::AlertFade(index), config.alert_fade_delay_ms, move |page| {
                page.fade_alert(index, alert)
            });
        }
        alerts.len()
    }

    fn fade_alert(&self, index: usize, alert: H::Element) {
        let host = &self.inner.host;
        let duration = self.inner.config.alert_fade_duration_ms;
        host.set_style(&alert, "transition", &format!("opacity {}ms ease", duration));
        host.set_style(&alert, "opacity", "0");
        self.schedule(TimerKey::AlertRemove(index), duration, move |page| {
            page.inner.host.remove(&alert);
            debug!("[PAGE] alert {} dismissed", index);
        });
    }

    fn bind_forms(&self) -> usize {
        let host = &self.inner.host;
        let mut bound = 0;
        for form_id in &self.inner.config.form_ids {
            let Some(form) = host.element_by_id(form_id) else {
                continue;
            };
            let weak = self.downgrade();
            let target = form.clone();
            host.listen(
                &form,
                EventKind::Submit,
                Box::new(move || match Self::upgrade(&weak) {
                    Some(page) => page.handle_submit(&target),
                    None => EventOutcome::Proceed,
                }),
            );
            debug!("[PAGE] validating #{}", form_id);
            bound += 1;
        }
        bound
    }

    fn bind_anchors(&self) -> usize {
        let host = &self.inner.host;
        let anchors = host.query_selector_all(&self.inner.config.anchor_selector);
        for anchor in &anchors {
            let weak = self.downgrade();
            let target = anchor.clone();
            host.listen(
                anchor,
                EventKind::Click,
                Box::new(move || match Self::upgrade(&weak) {
                    Some(page) => page.handle_anchor_click(&target),
                    None => EventOutcome::Proceed,
                }),
            );
        }
        anchors.len()
    }

    // ========================
    // Toggle
    // ========================

    /// Mirror the checkbox onto its card, then navigate to the toggle route.
    /// Returns whether navigation was issued.
    pub fn toggle_task(&self, task_id: TaskId) -> bool {
        self.toggle(EntityKind::Task, task_id)
    }

    pub fn toggle_subtask(&self, subtask_id: SubtaskId) -> bool {
        self.toggle(EntityKind::Subtask, subtask_id)
    }

    fn toggle(&self, kind: EntityKind, id: u32) -> bool {
        match self.try_toggle(kind, id) {
            Ok(()) => true,
            Err(err) => {
                warn!("[PAGE] toggle {} {} skipped: {}", kind.label(), id, err);
                false
            }
        }
    }

    fn try_toggle(&self, kind: EntityKind, id: u32) -> PageResult<()> {
        let host = &self.inner.host;
        let config = &self.inner.config;
        let markup = config.markup(kind);

        let checkbox_id = markup.checkbox_id(id);
        let checkbox = host
            .element_by_id(&checkbox_id)
            .ok_or_else(|| PageError::missing("checkbox", format!("#{}", checkbox_id)))?;
        let card = host
            .closest(&checkbox, &markup.container)
            .ok_or_else(|| PageError::missing("container", markup.container.clone()))?;

        host.set_style(&card, "transition", TOGGLE_TRANSITION);
        if host.is_checked(&checkbox) {
            host.add_class(&card, &config.completed_class);
        } else {
            host.remove_class(&card, &config.completed_class);
        }

        self.navigate(kind.toggle_route(id));
        Ok(())
    }

    // ========================
    // Delete
    // ========================

    /// Confirm, animate the card out, then navigate to the delete route
    pub fn delete_task(&self, task_id: TaskId) -> DeleteOutcome {
        self.delete(EntityKind::Task, task_id)
    }

    pub fn delete_subtask(&self, subtask_id: SubtaskId) -> DeleteOutcome {
        self.delete(EntityKind::Subtask, subtask_id)
    }

    fn delete(&self, kind: EntityKind, id: u32) -> DeleteOutcome {
        match self.try_delete(kind, id) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("[PAGE] delete {} {} skipped: {}", kind.label(), id, err);
                DeleteOutcome::Missing
            }
        }
    }

    fn try_delete(&self, kind: EntityKind, id: u32) -> PageResult<DeleteOutcome> {
        let host = &self.inner.host;
        let config = &self.inner.config;
        let markup = config.markup(kind);

        let selector = markup.container_selector(id);
        let card = host
            .query_selector(&selector)
            .ok_or_else(|| PageError::missing("container", selector.clone()))?;
        let title_el = host
            .query_within(&card, &markup.title)
            .ok_or_else(|| PageError::missing("title", format!("{} {}", selector, markup.title)))?;
        let title = host.text_content(&title_el).unwrap_or_default();

        let question = format!("Are you sure you want to delete \"{}\"?", title.trim());
        if !host.confirm(&question) {
            debug!("[PAGE] delete {} {} declined", kind.label(), id);
            return Ok(DeleteOutcome::Cancelled);
        }

        host.set_style(&card, "transition", &format!("all {}ms ease", config.delete_delay_ms));
        host.set_style(&card, "opacity", "0");
        host.set_style(&card, "transform", DELETE_SLIDE);

        let route = kind.delete_route(id);
        self.schedule(TimerKey::Navigation, config.delete_delay_ms, move |page| page.navigate(route));
        Ok(DeleteOutcome::Scheduled)
    }

    // ========================
    // Completed count
    // ========================

    /// Recount checked checkboxes into the counter element.
    /// Returns the count shown, `None` when the counter is absent.
    pub fn update_completed_count(&self) -> Option<usize> {
        let host = &self.inner.host;
        let config = &self.inner.config;
        let target = host.element_by_id(&config.completed_count_id)?;
        let completed = host.query_selector_all(&config.checked_selector()).len();
        host.set_text_content(&target, &completed.to_string());
        Some(completed)
    }

    // ========================
    // Event handlers
    // ========================

    /// Validate the title field of `form`
    pub fn handle_submit(&self, form: &H::Element) -> EventOutcome {
        match self.check_form(form) {
            Ok(()) => EventOutcome::Proceed,
            Err(PageError::Validation(err)) => {
                debug!("[PAGE] submission blocked: {}", err);
                EventOutcome::PreventDefault
            }
            Err(err) => {
                warn!("[PAGE] not validating form: {}", err);
                EventOutcome::Proceed
            }
        }
    }

    fn check_form(&self, form: &H::Element) -> PageResult<()> {
        let host = &self.inner.host;
        let config = &self.inner.config;
        let selector = config.title_selector();
        let field = host
            .query_within(form, &selector)
            .ok_or_else(|| PageError::missing("title field", selector.clone()))?;
        let value = host.input_value(&field).unwrap_or_default();

        if let Err(err) = validate_title(&value, config.title_max_chars) {
            host.alert(&err.to_string());
            host.focus(&field);
            return Err(err.into());
        }
        Ok(())
    }

    /// Smooth-scroll to the anchor's target; the default jump is always suppressed
    pub fn handle_anchor_click(&self, anchor: &H::Element) -> EventOutcome {
        let host = &self.inner.host;
        let target = host
            .attribute(anchor, "href")
            .filter(|href| href.len() > 1)
            .and_then(|href| host.query_selector(&href));
        if let Some(target) = target {
            host.scroll_into_view(&target);
        }
        EventOutcome::PreventDefault
    }

    // ========================
    // Timers & navigation
    // ========================

    /// Run `task` after `delay_ms`, superseding whatever is pending under `key`
    fn schedule<F>(&self, key: TimerKey, delay_ms: u32, task: F)
    where
        F: FnOnce(&PageController<H>) + 'static,
    {
        let weak = self.downgrade();
        let handle = self.inner.host.schedule(
            delay_ms,
            Box::new(move || {
                let Some(page) = Self::upgrade(&weak) else {
                    return;
                };
                let finished = page.inner.pending.borrow_mut().remove(&key);
                if let Some(handle) = finished {
                    page.inner.host.release(handle);
                }
                task(&page);
            }),
        );
        debug!("[PAGE] scheduled {:?} in {}ms", key, delay_ms);

        let previous = self.inner.pending.borrow_mut().insert(key, handle);
        if let Some(previous) = previous {
            debug!("[PAGE] {:?} superseded", key);
            self.inner.host.cancel(previous);
        }
    }

    fn cancel(&self, key: TimerKey) -> bool {
        let handle = self.inner.pending.borrow_mut().remove(&key);
        match handle {
            Some(handle) => {
                self.inner.host.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Revoke every pending task
    pub fn cancel_pending(&self) -> usize {
        let handles: Vec<_> = self.inner.pending.borrow_mut().drain().map(|(_, h)| h).collect();
        let count = handles.len();
        for handle in handles {
            self.inner.host.cancel(handle);
        }
        count
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Navigation is terminal, so it wins over any deferred one
    fn navigate(&self, route: Route) {
        if self.cancel(TimerKey::Navigation) {
            debug!("[PAGE] pending navigation replaced by {}", route);
        }
        info!("[PAGE] navigating to {}", route);
        self.inner.host.navigate(&route);
    }
}
