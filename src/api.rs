//! API Gateway
//!
//! Thin fetch wrappers over the backend REST API. Every failure — transport
//! or application-level — collapses into one [`ApiError`] carrying a
//! human-readable message; callers do not distinguish further. No automatic
//! retries; reorder commits are fire-and-forget once sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{DashboardItem, Invite, ItemKey, Task, TaskList};

const API_URL: &str = "/api";

/// The single error kind the UI layer sees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ApiError(pub String);

fn js_error(value: JsValue) -> ApiError {
    ApiError(
        value
            .as_string()
            .unwrap_or_else(|| format!("request failed: {value:?}")),
    )
}

/// Generic ack body (`{"status": "...", "message": ...}`).
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

async fn send<T: DeserializeOwned>(
    method: &str,
    endpoint: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{API_URL}{endpoint}");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| ApiError("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    // Some endpoints answer with no JSON body; that is only a problem when
    // the caller actually expects one.
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    };

    if !response.ok() {
        let detail = js_sys::Reflect::get(&json, &JsValue::from_str("detail"))
            .ok()
            .and_then(|v| v.as_string());
        return Err(ApiError(
            detail.unwrap_or_else(|| format!("API Error {}", response.status())),
        ));
    }

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError(e.to_string()))
}

async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    send("GET", endpoint, None).await
}

async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError(e.to_string()))?;
    send("POST", endpoint, Some(json)).await
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
struct UserIdBody {
    user_id: i64,
}

#[derive(Serialize)]
pub struct ReorderBody<'a> {
    pub user_id: i64,
    pub items: &'a [ItemKey],
}

#[derive(Serialize)]
struct TaskCreateBody<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_id: Option<u32>,
}

#[derive(Serialize)]
struct TaskUpdateBody<'a> {
    user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<&'a str>,
}

#[derive(Serialize)]
struct ListCreateBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ListUpdateBody<'a> {
    user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[derive(Serialize)]
struct ShareBody<'a> {
    user_id: i64,
    username: &'a str,
}

#[derive(Serialize)]
struct InviteResponseBody {
    user_id: i64,
    accept: bool,
}

// ========================
// Dashboard
// ========================

/// Mixed tasks/lists in current display order.
pub async fn fetch_dashboard_items(user_id: i64) -> Result<Vec<DashboardItem>, ApiError> {
    get(&format!("/dashboard/all/{user_id}")).await
}

/// Submit the full final order after a committed drag.
pub async fn submit_reorder(user_id: i64, items: &[ItemKey]) -> Result<Ack, ApiError> {
    post("/dashboard/reorder", &ReorderBody { user_id, items }).await
}

// ========================
// Tasks
// ========================

pub async fn add_task(user_id: i64, content: &str, list_id: Option<u32>) -> Result<Task, ApiError> {
    post(
        &format!("/tasks/{user_id}/add"),
        &TaskCreateBody { content, list_id },
    )
    .await
}

pub async fn set_task_completed(
    task_id: u32,
    user_id: i64,
    completed: bool,
) -> Result<Ack, ApiError> {
    let action = if completed { "complete" } else { "uncomplete" };
    post(&format!("/tasks/{task_id}/{action}"), &UserIdBody { user_id }).await
}

pub async fn update_task(
    task_id: u32,
    user_id: i64,
    content: Option<&str>,
    deadline: Option<&str>,
) -> Result<Ack, ApiError> {
    post(
        &format!("/tasks/{task_id}/update"),
        &TaskUpdateBody {
            user_id,
            content,
            deadline,
        },
    )
    .await
}

pub async fn delete_task(task_id: u32, user_id: i64) -> Result<Ack, ApiError> {
    post(&format!("/tasks/{task_id}/delete"), &UserIdBody { user_id }).await
}

// ========================
// Lists
// ========================

/// All lists visible to the user, tasks hydrated.
pub async fn fetch_lists(user_id: i64) -> Result<Vec<TaskList>, ApiError> {
    get(&format!("/lists/{user_id}")).await
}

/// One list with its full task collection (dashboard expand path).
pub async fn fetch_list_detail(list_id: u32) -> Result<TaskList, ApiError> {
    get(&format!("/lists/detail/{list_id}")).await
}

pub async fn create_list(user_id: i64, name: &str) -> Result<TaskList, ApiError> {
    post(&format!("/lists/{user_id}/add"), &ListCreateBody { name }).await
}

pub async fn update_list(
    list_id: u32,
    user_id: i64,
    name: Option<&str>,
    color: Option<&str>,
) -> Result<Ack, ApiError> {
    post(
        &format!("/lists/{list_id}/update"),
        &ListUpdateBody {
            user_id,
            name,
            color,
        },
    )
    .await
}

pub async fn delete_list(list_id: u32, user_id: i64) -> Result<Ack, ApiError> {
    post(&format!("/lists/{list_id}/delete"), &UserIdBody { user_id }).await
}

pub async fn share_list(list_id: u32, user_id: i64, username: &str) -> Result<Ack, ApiError> {
    post(
        &format!("/lists/{list_id}/share"),
        &ShareBody { user_id, username },
    )
    .await
}

pub async fn leave_list(list_id: u32, user_id: i64) -> Result<Ack, ApiError> {
    post(&format!("/lists/{list_id}/leave"), &UserIdBody { user_id }).await
}

// ========================
// Invites
// ========================

pub async fn fetch_invites(user_id: i64) -> Result<Vec<Invite>, ApiError> {
    get(&format!("/invites/{user_id}")).await
}

pub async fn respond_invite(list_id: u32, user_id: i64, accept: bool) -> Result<Ack, ApiError> {
    post(
        &format!("/invites/{list_id}/respond"),
        &InviteResponseBody { user_id, accept },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemKind;

    #[test]
    fn reorder_body_serializes_full_order() {
        let items = vec![
            ItemKey {
                kind: ItemKind::List,
                id: 4,
            },
            ItemKey {
                kind: ItemKind::Task,
                id: 1,
            },
        ];
        let body = ReorderBody {
            user_id: 599142,
            items: &items,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"user_id":599142,"items":[{"type":"list","id":4},{"type":"task","id":1}]}"#
        );
    }

    #[test]
    fn optional_fields_are_omitted_not_null() {
        let body = TaskUpdateBody {
            user_id: 1,
            content: Some("renamed"),
            deadline: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"user_id":1,"content":"renamed"}"#
        );

        let body = TaskCreateBody {
            content: "solo task",
            list_id: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"content":"solo task"}"#
        );
    }
}
