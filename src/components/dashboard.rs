//! Dashboard View
//!
//! The mixed "all items" view: tasks and lists interleaved in one container,
//! reorderable by long-press drag. The drag layer reorders the store's
//! vector live; on commit the final order is read back from the store and
//! submitted, never re-parsed out of the DOM.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_touchdrag::{
    create_touchdrag, make_on_touch_cancel, make_on_touch_end, make_on_touch_move,
    make_on_touch_start,
};

use crate::api;
use crate::components::modal::use_modal;
use crate::components::{ListCard, NewTaskForm, TaskRow};
use crate::context::AppContext;
use crate::models::{DashboardItem, ItemKey, ItemKind};
use crate::store::{
    store_dashboard_order, store_reorder_dashboard, store_set_dashboard, use_app_store,
    AppStateStoreFields,
};
use crate::telegram::{self, HapticIntensity};

/// Map a hit-tested row element back to its stable item key.
fn resolve_row_key(el: &web_sys::Element) -> Option<ItemKey> {
    let kind = match el.get_attribute("data-item-type")?.as_str() {
        "task" => ItemKind::Task,
        "list" => ItemKind::List,
        _ => return None,
    };
    let id = el.get_attribute("data-item-id")?.parse().ok()?;
    Some(ItemKey { kind, id })
}

#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = use_modal();

    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);

    // Full refresh: atomic swap of the whole dashboard vector.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some(user_id) = ctx.user_id else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_dashboard_items(user_id).await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[DASH] Loaded {} items, trigger={}", items.len(), trigger)
                            .into(),
                    );
                    store_set_dashboard(&store, items);
                    set_load_error.set(None);
                }
                Err(e) => set_load_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let td = create_touchdrag::<ItemKey>();
    let dragging = td.dragging_key_read;
    let drag_just_ended = td.drag_just_ended_read;

    let on_move = make_on_touch_move(
        td.clone(),
        "[data-drag-row]",
        resolve_row_key,
        move |dragged, target| {
            // Live reorder of the in-memory order; unknown keys (rows from
            // another container) are refused by the store.
            if store_reorder_dashboard(&store, dragged, target) {
                telegram::haptic_impact(HapticIntensity::Light);
            }
        },
    );

    let on_end = make_on_touch_end(td.clone(), move || {
        let Some(user_id) = ctx.user_id else { return };
        let order = store_dashboard_order(&store);
        web_sys::console::log_1(&format!("[DASH] Committing {} items", order.len()).into());
        spawn_local(async move {
            match api::submit_reorder(user_id, &order).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                    // Fall back to the server's order.
                    ctx.reload();
                }
            }
        });
    });

    let on_cancel = make_on_touch_cancel(td.clone());
    let td_local = StoredValue::new_local(td);

    let empty_state = move || {
        if ctx.user_id.is_none() {
            Some(view! { <div class="empty-state">"Please open via Telegram Bot."</div> }.into_any())
        } else if let Some(err) = load_error.get() {
            Some(view! { <div class="empty-state">"API Error: " {err}</div> }.into_any())
        } else if loading.get() {
            Some(view! { <div class="empty-state">"Loading..."</div> }.into_any())
        } else if store.dashboard().read().is_empty() {
            Some(view! { <div class="empty-state">"Nothing pending. Nice work! 🪝"</div> }.into_any())
        } else {
            None
        }
    };

    view! {
        <div class="view dashboard-view">
            <NewTaskForm />

            <div
                class="dashboard-container"
                on:touchmove=on_move
                on:touchend=on_end
                on:touchcancel=on_cancel
            >
                {empty_state}
                <For
                    each=move || store.dashboard().get()
                    key=|item| item.key()
                    children=move |item| {
                        let key = item.key();
                        let on_start = make_on_touch_start(td_local.get_value(), key, move || {
                            telegram::haptic_impact(HapticIntensity::Medium)
                        });
                        let row_class = move || {
                            if dragging.get() == Some(key) {
                                "drag-row dragging"
                            } else {
                                "drag-row"
                            }
                        };
                        let kind_attr = match key.kind {
                            ItemKind::Task => "task",
                            ItemKind::List => "list",
                        };
                        let inner = match item {
                            DashboardItem::Task(t) => view! {
                                <TaskRow
                                    id=t.id
                                    content=t.title
                                    status=t.status
                                    deadline=t.deadline
                                    click_suppressed=drag_just_ended
                                />
                            }
                            .into_any(),
                            DashboardItem::List(l) => view! {
                                <ListCard list=l click_suppressed=drag_just_ended />
                            }
                            .into_any(),
                        };
                        view! {
                            <div
                                class=row_class
                                data-drag-row=""
                                data-item-type=kind_attr
                                data-item-id=key.id.to_string()
                                on:touchstart=on_start
                            >
                                {inner}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
