//! Browser Entry Point
//!
//! Boots the controller on the live document and exports the handlers that the
//! server templates call from `onclick` attributes.

use std::cell::RefCell;

use log::{error, warn};
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::controller::PageController;
use crate::host::BrowserPage;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController<BrowserPage>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    match BrowserPage::new() {
        Some(page) => page.when_ready(boot),
        None => error!("[PAGE] no window/document, behavior not installed"),
    }
}

fn boot(page: BrowserPage) {
    let config = PageConfig::load(&page);
    let controller = PageController::new(page, config);
    controller.initialize();
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

fn controller(handler: &str) -> Option<PageController<BrowserPage>> {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone());
    if controller.is_none() {
        warn!("[PAGE] {} called before the page was ready", handler);
    }
    controller
}

#[wasm_bindgen(js_name = toggleTask)]
pub fn toggle_task(task_id: u32) {
    if let Some(page) = controller("toggleTask") {
        page.toggle_task(task_id);
    }
}

#[wasm_bindgen(js_name = deleteTask)]
pub fn delete_task(task_id: u32) {
    if let Some(page) = controller("deleteTask") {
        page.delete_task(task_id);
    }
}

#[wasm_bindgen(js_name = toggleSubtask)]
pub fn toggle_subtask(subtask_id: u32) {
    if let Some(page) = controller("toggleSubtask") {
        page.toggle_subtask(subtask_id);
    }
}

#[wasm_bindgen(js_name = deleteSubtask)]
pub fn delete_subtask(subtask_id: u32) {
    if let Some(page) = controller("deleteSubtask") {
        page.delete_subtask(subtask_id);
    }
}

#[wasm_bindgen(js_name = updateCompletedCount)]
pub fn update_completed_count() {
    if let Some(page) = controller("updateCompletedCount") {
        page.update_completed_count();
    }
}
