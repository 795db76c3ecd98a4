//! Tab Bar Component
//!
//! Switches between the dashboard and the lists view.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let tab_class = move |tab: Tab| {
        if ctx.tab.get() == tab {
            "tab-btn active"
        } else {
            "tab-btn"
        }
    };

    view! {
        <div class="tab-bar">
            <button
                class=move || tab_class(Tab::Dashboard)
                on:click=move |_| ctx.switch_tab(Tab::Dashboard)
            >
                "Tasks"
            </button>
            <button
                class=move || tab_class(Tab::Lists)
                on:click=move |_| ctx.switch_tab(Tab::Lists)
            >
                "Lists"
            </button>
        </div>
    }
}
