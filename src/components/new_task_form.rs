//! New Task Form Component
//!
//! Inline input at the top of the dashboard for creating standalone tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::use_modal;
use crate::context::AppContext;
use crate::telegram;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = use_modal();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_text.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(user_id) = ctx.user_id else { return };
        set_new_text.set(String::new());

        spawn_local(async move {
            match api::add_task(user_id, &content, None).await {
                Ok(_) => {
                    telegram::haptic_notification(telegram::HapticNotification::Success);
                    ctx.reload();
                }
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
