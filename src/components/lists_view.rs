//! Lists View
//!
//! The second tab: every list visible to the user with its hydrated tasks,
//! owner/member actions, and the pending-invites banner on top.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::use_modal;
use crate::components::{InvitesBanner, TaskRow};
use crate::context::AppContext;
use crate::models::TaskList;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::telegram;

#[component]
pub fn ListsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = use_modal();

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(user_id) = ctx.user_id else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_lists(user_id).await {
                Ok(lists) => {
                    *store.lists().write() = lists;
                    set_load_error.set(None);
                }
                Err(e) => set_load_error.set(Some(e.to_string())),
            }
            match api::fetch_invites(user_id).await {
                Ok(invites) => *store.invites().write() = invites,
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
            set_loading.set(false);
        });
    });

    let add_list = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            let Some(name) = modal.prompt("New List", "List name:", "").await else {
                return;
            };
            let name = name.trim().to_string();
            if name.is_empty() {
                return;
            }
            match api::create_list(user_id, &name).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let empty_state = move || {
        if ctx.user_id.is_none() {
            Some(view! { <div class="empty-state">"Please open via Telegram Bot."</div> }.into_any())
        } else if let Some(err) = load_error.get() {
            Some(view! { <div class="empty-state">"API Error: " {err}</div> }.into_any())
        } else if loading.get() {
            Some(view! { <div class="empty-state">"Loading..."</div> }.into_any())
        } else if store.lists().read().is_empty() {
            Some(view! { <div class="empty-state">"No lists yet. Create one!"</div> }.into_any())
        } else {
            None
        }
    };

    view! {
        <div class="view lists-view">
            <InvitesBanner />

            <button class="add-list-btn" on:click=add_list>"+ New List"</button>

            <div class="lists-container">
                {empty_state}
                <For
                    each=move || store.lists().get()
                    key=|list| (list.id, list.name.clone(), list.task_count, list.color.clone())
                    children=move |list| view! { <ListRow list=list /> }
                />
            </div>
        </div>
    }
}

/// One list card with its tasks and the actions the viewer is allowed.
#[component]
fn ListRow(list: TaskList) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = use_modal();

    let id = list.id;
    let is_owner = ctx.user_id.is_some_and(|uid| list.is_owned_by(uid));
    let current_name = list.name.clone();
    let current_color = list.color.clone();

    let rename = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        let current = current_name.clone();
        spawn_local(async move {
            let Some(name) = modal.prompt("Rename List", "New name:", &current).await else {
                return;
            };
            let name = name.trim().to_string();
            if name.is_empty() || name == current {
                return;
            }
            match api::update_list(id, user_id, Some(&name), None).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let recolor = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        let current = current_color.clone().unwrap_or_default();
        spawn_local(async move {
            let Some(color) = modal
                .prompt("List Color", "Hex color like #ff8800:", &current)
                .await
            else {
                return;
            };
            let color = color.trim().to_string();
            if color.is_empty() || color == current {
                return;
            }
            match api::update_list(id, user_id, None, Some(&color)).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let share = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            let Some(username) = modal
                .prompt("Invite User", "Telegram @username, name, or id:", "")
                .await
            else {
                return;
            };
            let username = username.trim().to_string();
            if username.is_empty() {
                return;
            }
            match api::share_list(id, user_id, &username).await {
                Ok(ack) => {
                    if let Some(message) = ack.message {
                        modal.confirm("Invitation", &message).await;
                    }
                }
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let delete = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            if !modal
                .confirm(
                    "Delete List",
                    "Really delete this list and its tasks?",
                )
                .await
            {
                return;
            }
            telegram::haptic_notification(telegram::HapticNotification::Warning);
            match api::delete_list(id, user_id).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let leave = move |_| {
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            if !modal.confirm("Leave List", "Leave this shared list?").await {
                return;
            }
            match api::leave_list(id, user_id).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let actions = if is_owner {
        view! {
            <button class="icon-btn" on:click=rename>"✏️"</button>
            <button class="icon-btn" on:click=recolor>"🎨"</button>
            <button class="icon-btn" on:click=share>"🔗"</button>
            <button class="icon-btn danger" on:click=delete>"×"</button>
        }
        .into_any()
    } else {
        view! {
            <button class="icon-btn" on:click=leave>"🚪"</button>
        }
        .into_any()
    };

    let color_dot = list.color.clone().map(|c| {
        view! {
            <span class="list-color-dot" style=format!("background: {c};")></span>
        }
    });

    view! {
        <div class="list-item">
            <div class="list-header">
                <div>
                    {color_dot}
                    <strong>{list.name.clone()}</strong>
                    <small>" (" {list.task_count} ")"</small>
                </div>
                <div class="list-actions">{actions}</div>
            </div>
            <div class="list-tasks">
                <For
                    each={
                        let tasks = list.tasks.clone();
                        move || tasks.clone()
                    }
                    key=|task| (task.id, task.status, task.content.clone())
                    children=move |task| {
                        view! {
                            <TaskRow
                                id=task.id
                                content=task.content
                                status=task.status
                                deadline=task.deadline
                                small=true
                            />
                        }
                    }
                />
            </div>
            <QuickAdd list_id=id />
        </div>
    }
}

/// Per-list quick-add input.
#[component]
fn QuickAdd(list_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = use_modal();
    let (new_task, set_new_task) = signal(String::new());

    let add = move || {
        let content = new_task.get_untracked().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(user_id) = ctx.user_id else { return };
        set_new_task.set(String::new());
        spawn_local(async move {
            match api::add_task(user_id, &content, Some(list_id)).await {
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
        <div class="list-add-task">
            <input
                type="text"
                placeholder="Add to this list..."
                prop:value=move || new_task.get()
                on:input=move |ev| set_new_task.set(event_target_value(&ev))
                on:keypress=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add();
                    }
                }
            />
            <button on:click=move |_| add()>"+"</button>
        </div>
    }
}
