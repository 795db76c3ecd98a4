//! Task Row Component
//!
//! The one task template: used for standalone dashboard tasks and for tasks
//! nested inside a list card, so the two render identically.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::use_modal;
use crate::context::AppContext;
use crate::deadline;
use crate::models::TaskStatus;
use crate::telegram;

/// A single task row with checkbox, deadline badge, edit and delete.
#[component]
pub fn TaskRow(
    id: u32,
    content: String,
    status: TaskStatus,
    deadline: Option<String>,
    /// Compact variant for tasks nested inside a list card
    #[prop(optional)]
    small: bool,
    /// "Drag just ended" flag; while set, the synthetic click after a drag
    /// must not toggle the task
    #[prop(optional, into)]
    click_suppressed: Option<ReadSignal<bool>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = use_modal();

    let completed = status.is_completed();
    let edit_content = content.clone();
    let edit_date = deadline
        .as_deref()
        .and_then(deadline::parse_deadline)
        .map(|d| d.format("%Y-%m-%d").to_string());

    let on_toggle = move |_| {
        if click_suppressed.map(|s| s.get_untracked()).unwrap_or(false) {
            return;
        }
        let Some(user_id) = ctx.user_id else { return };
        telegram::haptic_selection();
        spawn_local(async move {
            if let Err(e) = api::set_task_completed(id, user_id, !completed).await {
                modal.confirm("Error", &e.to_string()).await;
            }
            ctx.reload();
        });
    };

    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(user_id) = ctx.user_id else { return };
        let current = edit_content.clone();
        let current_date = edit_date.clone();
        spawn_local(async move {
            let Some(draft) = modal
                .prompt_with_date("Edit Task", "Content:", &current, current_date.as_deref())
                .await
            else {
                return;
            };
            let new_content = draft.content.trim().to_string();
            if new_content.is_empty() {
                return;
            }
            let unchanged = new_content == current && draft.deadline == current_date;
            if unchanged {
                return;
            }
            match api::update_task(id, user_id, Some(&new_content), draft.deadline.as_deref())
                .await
            {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            if !modal.confirm("Delete Task", "Delete this task?").await {
                return;
            }
            telegram::haptic_notification(telegram::HapticNotification::Warning);
            match api::delete_task(id, user_id).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let row_class = {
        let mut c = String::from("task-item");
        if small {
            c.push_str(" small");
        }
        if completed {
            c.push_str(" completed");
        }
        c
    };
    let checkbox_class = if completed {
        "task-checkbox checked"
    } else {
        "task-checkbox"
    };

    let deadline_badge = deadline.as_deref().and_then(deadline::deadline_badge);

    view! {
        <div class=row_class>
            <div class=checkbox_class on:click=on_toggle></div>
            <div class="task-content">
                <div class="task-title">{content}</div>
                {deadline_badge.map(|(css, text)| view! {
                    <div class="task-deadline">
                        <span class=css>{text}</span>
                    </div>
                })}
            </div>
            <button class="icon-btn edit-btn" on:click=on_edit>"✏️"</button>
            <button class="icon-btn delete-btn" on:click=on_delete>"×"</button>
        </div>
    }
}
