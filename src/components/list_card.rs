//! List Card Component
//!
//! A list shown on the mixed dashboard. Tapping the header expands it;
//! the first expand fetches the list's task collection and caches it, and
//! only this card's body re-renders (the rest of the dashboard is left
//! alone).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::use_modal;
use crate::components::TaskRow;
use crate::context::AppContext;
use crate::models::DashboardList;
use crate::store::{
    store_is_hydrated, store_set_hydrated, store_toggle_expanded, use_app_store,
    AppStateStoreFields,
};
use crate::telegram;

#[component]
pub fn ListCard(
    list: DashboardList,
    /// "Drag just ended" flag; while set, the synthetic click after a drag
    /// must not expand the list
    click_suppressed: ReadSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = use_modal();

    let id = list.id;
    let expanded = Memo::new(move |_| store.expanded().read().contains(&id));

    let on_header_click = move |_| {
        if click_suppressed.get_untracked() {
            return;
        }
        let now_expanded = store_toggle_expanded(&store, id);
        if now_expanded && !store_is_hydrated(&store, id) {
            spawn_local(async move {
                match api::fetch_list_detail(id).await {
                    Ok(detail) => store_set_hydrated(&store, id, detail.tasks),
                    Err(e) => {
                        modal.confirm("Error", &e.to_string()).await;
                    }
                }
            });
        }
    };

    let (new_task, set_new_task) = signal(String::new());
    let add_to_list = move || {
        let content = new_task.get_untracked().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(user_id) = ctx.user_id else { return };
        set_new_task.set(String::new());
        spawn_local(async move {
            match api::add_task(user_id, &content, Some(id)).await {
                Ok(_) => {
                    telegram::haptic_notification(telegram::HapticNotification::Success);
                    // Re-hydrate just this card.
                    if let Ok(detail) = api::fetch_list_detail(id).await {
                        store_set_hydrated(&store, id, detail.tasks);
                    }
                    ctx.reload();
                }
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    let color_dot = list.color.clone().map(|c| {
        view! {
            <span class="list-color-dot" style=format!("background: {c};")></span>
        }
    });

    view! {
        <div class="list-item">
            <div class="list-header" on:click=on_header_click>
                {color_dot}
                <strong>{list.title.clone()}</strong>
                <small>" (" {list.task_count} ")"</small>
                <span class="expand-indicator">
                    {move || if expanded.get() { "▼" } else { "▶" }}
                </span>
            </div>

            {move || expanded.get().then(|| view! {
                <div class="list-tasks">
                    <For
                        each=move || {
                            store.hydrated().read().get(&id).cloned().unwrap_or_default()
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
                                    click_suppressed=click_suppressed
                                />
                            }
                        }
                    />
                </div>
                <div class="list-add-task">
                    <input
                        type="text"
                        placeholder="Add to this list..."
                        prop:value=move || new_task.get()
                        on:input=move |ev| set_new_task.set(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_to_list();
                            }
                        }
                    />
                    <button on:click=move |_| add_to_list()>"+"</button>
                </div>
            })}
        </div>
    }
}
