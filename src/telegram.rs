//! Telegram WebApp Bindings
//!
//! Looks up `window.Telegram.WebApp` dynamically so the app also runs in a
//! plain browser (dev mode): every call here is fire-and-forget and quietly
//! does nothing when the host object is missing.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Haptic pulse strength, per the WebApp `HapticFeedback.impactOccurred`
/// styles this client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticIntensity {
    Light,
    Medium,
}

impl HapticIntensity {
    fn as_str(self) -> &'static str {
        match self {
            HapticIntensity::Light => "light",
            HapticIntensity::Medium => "medium",
        }
    }
}

/// `HapticFeedback.notificationOccurred` kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticNotification {
    Success,
    Warning,
}

impl HapticNotification {
    fn as_str(self) -> &'static str {
        match self {
            HapticNotification::Success => "success",
            HapticNotification::Warning => "warning",
        }
    }
}

/// The user Telegram passed in `initDataUnsafe`, or the dev-mode fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: Option<String>,
}

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(obj, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn webapp() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = get(window.as_ref(), "Telegram")?;
    get(&telegram, "WebApp")
}

fn call0(obj: &JsValue, name: &str) {
    if let Some(f) = get(obj, name) {
        if let Some(f) = f.dyn_ref::<Function>() {
            let _ = f.call0(obj);
        }
    }
}

fn call1(obj: &JsValue, name: &str, arg: &str) {
    if let Some(f) = get(obj, name) {
        if let Some(f) = f.dyn_ref::<Function>() {
            let _ = f.call1(obj, &JsValue::from_str(arg));
        }
    }
}

/// Ask the host to expand the Mini App to full height.
pub fn expand() {
    if let Some(app) = webapp() {
        call0(&app, "expand");
    }
}

pub fn haptic_impact(intensity: HapticIntensity) {
    if let Some(h) = webapp().and_then(|app| get(&app, "HapticFeedback")) {
        call1(&h, "impactOccurred", intensity.as_str());
    }
}

pub fn haptic_notification(kind: HapticNotification) {
    if let Some(h) = webapp().and_then(|app| get(&app, "HapticFeedback")) {
        call1(&h, "notificationOccurred", kind.as_str());
    }
}

pub fn haptic_selection() {
    if let Some(h) = webapp().and_then(|app| get(&app, "HapticFeedback")) {
        call0(&h, "selectionChanged");
    }
}

/// Resolve the current user: `initDataUnsafe.user` when opened through the
/// bot, else a `?user_id=` query parameter for development.
pub fn init_user() -> Option<TelegramUser> {
    if let Some(user) = webapp()
        .and_then(|app| get(&app, "initDataUnsafe"))
        .and_then(|init| get(&init, "user"))
    {
        if let Some(id) = get(&user, "id").and_then(|v| v.as_f64()) {
            return Some(TelegramUser {
                id: id as i64,
                first_name: get(&user, "first_name").and_then(|v| v.as_string()),
            });
        }
    }
    url_user_id().map(|id| TelegramUser {
        id,
        first_name: None,
    })
}

fn url_user_id() -> Option<i64> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("user_id")?.parse().ok()
}
