//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// The two top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Lists,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current user id; `None` renders the guest empty states
    pub user_id: Option<i64>,
    /// Active tab - read
    pub tab: ReadSignal<Tab>,
    /// Active tab - write
    set_tab: WriteSignal<Tab>,
    /// Trigger to reload the active view from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active view from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        user_id: Option<i64>,
        tab: (ReadSignal<Tab>, WriteSignal<Tab>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            user_id,
            tab: tab.0,
            set_tab: tab.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the active view
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn switch_tab(&self, tab: Tab) {
        self.set_tab.set(tab);
        self.reload();
    }
}
