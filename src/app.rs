//! Hooked Mini App Frontend
//!
//! Root component: resolves the Telegram user, provides the store and the
//! modal controller, and routes between the two tabs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::modal::ModalController;
use crate::components::{DashboardView, ListsView, ModalHost, TabBar};
use crate::context::{AppContext, Tab};
use crate::store::AppState;
use crate::telegram;

#[component]
pub fn App() -> impl IntoView {
    // Host integration first: full height, then whoever opened us.
    telegram::expand();
    let user = telegram::init_user();
    let user_id = user.as_ref().map(|u| u.id);
    let greeting = match &user {
        Some(u) => match &u.first_name {
            Some(name) => format!("Hi, {name}"),
            None => format!("User {}", u.id),
        },
        None => "Guest mode (no user detected)".to_string(),
    };

    let (tab, set_tab) = signal(Tab::Dashboard);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(Store::new(AppState::default()));
    provide_context(ModalController::new());
    provide_context(AppContext::new(
        user_id,
        (tab, set_tab),
        (reload_trigger, set_reload_trigger),
    ));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="user-info">{greeting}</span>
            </header>

            <TabBar />

            <main class="main-content">
                {move || match tab.get() {
                    Tab::Dashboard => view! { <DashboardView /> }.into_any(),
                    Tab::Lists => view! { <ListsView /> }.into_any(),
                }}
            </main>

            <ModalHost />
        </div>
    }
}
