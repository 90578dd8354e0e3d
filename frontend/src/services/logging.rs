use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Console logger tagging every line with the component that emitted it.
pub struct Logger;

impl Logger {
    /// Debug lines are dropped unless the view config turns them on
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        if DEBUG_ENABLED.load(Ordering::Relaxed) {
            gloo::console::debug!(Self::line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
