//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};

/// Task completion status as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

/// Which side of the task/list split an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Task,
    List,
}

/// Stable item identity: survives re-renders and is the key the reorder
/// commit payload is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub id: u32,
}

/// One entry of the mixed dashboard (tasks and lists interleaved in display
/// order), tagged by the backend's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DashboardItem {
    Task(DashboardTask),
    List(DashboardList),
}

impl DashboardItem {
    pub fn key(&self) -> ItemKey {
        match self {
            DashboardItem::Task(t) => ItemKey {
                kind: ItemKind::Task,
                id: t.id,
            },
            DashboardItem::List(l) => ItemKey {
                kind: ItemKind::List,
                id: l.id,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTask {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub list_id: Option<u32>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardList {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub position: i32,
}

/// Task as served by the tasks/lists routers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub content: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub list_id: Option<u32>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub recurrence: Option<String>,
}

/// A to-do list with its hydrated tasks (hydration happens on bulk fetch or
/// on first expand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: u32,
    pub name: String,
    pub owner_id: i64,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}

/// Pending invitation to a shared list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    pub list_id: u32,
    pub list_name: String,
    pub owner_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_json_parses_into_tagged_union() {
        let json = r##"[
            {"type":"task","id":1,"title":"Buy milk","position":0,
             "created_at":"2026-08-20T10:00:00","status":"PENDING",
             "priority":"MEDIUM","deadline":"2026-08-27T09:00:00"},
            {"type":"list","id":4,"title":"Groceries","position":1,
             "created_at":null,"color":"#ff8800","task_count":3},
            {"type":"task","id":2,"title":"Done thing","position":2,
             "status":"COMPLETED","deadline":null}
        ]"##;
        let items: Vec<DashboardItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 3);

        match &items[0] {
            DashboardItem::Task(t) => {
                assert_eq!(t.id, 1);
                assert_eq!(t.status, TaskStatus::Pending);
                assert_eq!(t.deadline.as_deref(), Some("2026-08-27T09:00:00"));
            }
            other => panic!("expected task, got {other:?}"),
        }
        match &items[1] {
            DashboardItem::List(l) => {
                assert_eq!(l.task_count, 3);
                assert_eq!(l.color.as_deref(), Some("#ff8800"));
            }
            other => panic!("expected list, got {other:?}"),
        }
        assert!(matches!(
            &items[2],
            DashboardItem::Task(t) if t.status.is_completed()
        ));
    }

    #[test]
    fn item_key_serializes_as_reorder_entry() {
        let key = ItemKey {
            kind: ItemKind::List,
            id: 7,
        };
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"type":"list","id":7}"#);
    }

    #[test]
    fn keys_are_stable_per_kind() {
        let task = DashboardItem::Task(DashboardTask {
            id: 7,
            title: "t".into(),
            status: TaskStatus::Pending,
            deadline: None,
            priority: None,
            recurrence: None,
            list_id: None,
            position: 0,
        });
        let list = DashboardItem::List(DashboardList {
            id: 7,
            title: "l".into(),
            color: None,
            task_count: 0,
            position: 1,
        });
        // Same numeric id, different kinds: distinct identities.
        assert_ne!(task.key(), list.key());
    }

    #[test]
    fn hydrated_list_parses_with_tasks() {
        let json = r#"{"id":4,"name":"Groceries","owner_id":599142,
            "task_count":1,
            "tasks":[{"id":9,"content":"Eggs","status":"PENDING",
                      "list_id":4,"deadline":null}]}"#;
        let list: TaskList = serde_json::from_str(json).unwrap();
        assert!(list.is_owned_by(599142));
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].content, "Eggs");
    }
}
