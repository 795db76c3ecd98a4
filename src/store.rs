//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dashboard
//! vector's order IS the display order; reorder commits are read from here,
//! never re-parsed out of the DOM.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use leptos_touchdrag::apply_reorder;
use reactive_stores::Store;

use crate::models::{DashboardItem, Invite, ItemKey, Task, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mixed tasks/lists in display order (the "all items" view)
    pub dashboard: Vec<DashboardItem>,
    /// All lists visible to the user, tasks hydrated
    pub lists: Vec<TaskList>,
    /// Pending shared-list invitations
    pub invites: Vec<Invite>,
    /// List ids currently shown expanded on the dashboard; session-local,
    /// never persisted
    pub expanded: HashSet<u32>,
    /// Hydrated task collections for expanded lists, keyed by list id
    pub hydrated: HashMap<u32, Vec<Task>>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole dashboard (the general refresh path's atomic swap).
pub fn store_set_dashboard(store: &AppStore, items: Vec<DashboardItem>) {
    *store.dashboard().write() = items;
}

/// Move the dragged item adjacent to the target in the live order. Returns
/// false when either key is missing (e.g. the finger wandered over a row
/// from another container).
pub fn store_reorder_dashboard(store: &AppStore, dragged: ItemKey, target: ItemKey) -> bool {
    reorder_by_keys(&mut store.dashboard().write(), dragged, target)
}

/// The full `(type, id)` order submitted on commit.
pub fn store_dashboard_order(store: &AppStore) -> Vec<ItemKey> {
    order_keys(&store.dashboard().read())
}

/// Toggle a list open/closed; returns true when it is now expanded.
pub fn store_toggle_expanded(store: &AppStore, list_id: u32) -> bool {
    let field = store.expanded();
    let mut expanded = field.write();
    if expanded.remove(&list_id) {
        false
    } else {
        expanded.insert(list_id);
        true
    }
}

pub fn store_is_hydrated(store: &AppStore, list_id: u32) -> bool {
    store.hydrated().read().contains_key(&list_id)
}

/// Cache a list's task collection after a detail fetch; only this list's
/// subtree re-renders.
pub fn store_set_hydrated(store: &AppStore, list_id: u32, tasks: Vec<Task>) {
    store.hydrated().write().insert(list_id, tasks);
}

// ========================
// Pure order manipulation
// ========================

fn index_of(items: &[DashboardItem], key: ItemKey) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// "Insert adjacent" reorder on the model vector: before the target when
/// dragging up, after it when dragging down.
pub fn reorder_by_keys(items: &mut Vec<DashboardItem>, dragged: ItemKey, target: ItemKey) -> bool {
    let (Some(from), Some(to)) = (index_of(items, dragged), index_of(items, target)) else {
        return false;
    };
    if from == to {
        return false;
    }
    apply_reorder(items, from, to);
    true
}

pub fn order_keys(items: &[DashboardItem]) -> Vec<ItemKey> {
    items.iter().map(DashboardItem::key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DashboardList, DashboardTask, ItemKind, TaskStatus};

    fn task(id: u32) -> DashboardItem {
        DashboardItem::Task(DashboardTask {
            id,
            title: format!("Task {id}"),
            status: TaskStatus::Pending,
            deadline: None,
            priority: None,
            recurrence: None,
            list_id: None,
            position: 0,
        })
    }

    fn list(id: u32) -> DashboardItem {
        DashboardItem::List(DashboardList {
            id,
            title: format!("List {id}"),
            color: None,
            task_count: 0,
            position: 0,
        })
    }

    fn key(kind: ItemKind, id: u32) -> ItemKey {
        ItemKey { kind, id }
    }

    #[test]
    fn reorder_moves_dragged_next_to_target() {
        // Tasks and lists mix at the same level.
        let mut items = vec![task(1), list(4), task(2)];
        assert!(reorder_by_keys(
            &mut items,
            key(ItemKind::Task, 2),
            key(ItemKind::Task, 1),
        ));
        assert_eq!(
            order_keys(&items),
            vec![
                key(ItemKind::Task, 2),
                key(ItemKind::Task, 1),
                key(ItemKind::List, 4),
            ]
        );
    }

    #[test]
    fn reorder_with_unknown_key_is_refused() {
        // A row from another container resolves to a key we do not hold.
        let mut items = vec![task(1), task(2)];
        assert!(!reorder_by_keys(
            &mut items,
            key(ItemKind::Task, 99),
            key(ItemKind::Task, 1),
        ));
        assert!(!reorder_by_keys(
            &mut items,
            key(ItemKind::Task, 1),
            key(ItemKind::List, 1),
        ));
        assert_eq!(
            order_keys(&items),
            vec![key(ItemKind::Task, 1), key(ItemKind::Task, 2)]
        );
    }

    #[test]
    fn commit_order_covers_every_sibling() {
        let mut items = vec![task(1), list(4), task(2), list(5)];
        reorder_by_keys(&mut items, key(ItemKind::List, 5), key(ItemKind::Task, 1));
        let order = order_keys(&items);
        assert_eq!(order.len(), 4);
        for k in [
            key(ItemKind::Task, 1),
            key(ItemKind::Task, 2),
            key(ItemKind::List, 4),
            key(ItemKind::List, 5),
        ] {
            assert!(order.contains(&k));
        }
        assert_eq!(order[0], key(ItemKind::List, 5));
    }
}
