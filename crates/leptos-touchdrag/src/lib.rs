//! Leptos TouchDrag Utilities
//!
//! Long-press drag-to-reorder for Leptos using touch events.
//! A 400ms long-press arms the drag; small movement before that cancels it
//! (scroll/tap), and accepted reorders are debounced to one per 250ms.
//!
//! The gesture recognition itself lives in [`machine`] and is pure; this
//! module wires it to touch events, the long-press timer, and the
//! click-suppression window after a committed drag.

pub mod machine;

pub use machine::{apply_reorder, EndOutcome, Machine, MoveOutcome, State};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// TouchDrag state: the pure machine plus the platform pieces around it
/// (long-press timer handle, reactive flags for rendering).
///
/// At most one drag session exists per instance; a new touch-start tears
/// down the previous session's timer before arming its own.
#[derive(Clone)]
pub struct TouchDrag<K: Send + Sync + 'static> {
    machine: Rc<RefCell<Machine<K>>>,
    /// Pending long-press timer id, if armed.
    timer: Rc<Cell<Option<i32>>>,
    /// Item currently being dragged (drives the "dragging" visual flag).
    pub dragging_key_read: ReadSignal<Option<K>>,
    dragging_key_write: WriteSignal<Option<K>>,
    /// True for 100ms after a committed drag, so the browser's synthetic
    /// click does not also trigger the row's primary action.
    pub drag_just_ended_read: ReadSignal<bool>,
    drag_just_ended_write: WriteSignal<bool>,
}

pub fn create_touchdrag<K>() -> TouchDrag<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let (dragging_key_read, dragging_key_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    TouchDrag {
        machine: Rc::new(RefCell::new(Machine::new())),
        timer: Rc::new(Cell::new(None)),
        dragging_key_read,
        dragging_key_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

fn clear_timer<K: Send + Sync + 'static>(td: &TouchDrag<K>) {
    if let Some(id) = td.timer.take() {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(id);
        }
    }
}

/// End the drag session. With `suppress_click` the "drag just ended" flag
/// stays up for 100ms before clearing; without it the flag clears
/// immediately so the next click is not blocked.
pub fn end_drag<K: Send + Sync + 'static>(td: &TouchDrag<K>, suppress_click: bool) {
    clear_timer(td);
    td.dragging_key_write.set(None);
    if suppress_click {
        td.drag_just_ended_write.set(true);
        if let Some(win) = web_sys::window() {
            let clear = td.drag_just_ended_write;
            let cb = Closure::once(move || clear.set(false));
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                machine::CLICK_SUPPRESS_MS as i32,
            );
            cb.forget();
        }
    } else {
        td.drag_just_ended_write.set(false);
    }
}

/// Create a touchstart handler for a draggable row.
///
/// Records the anchor point and arms the 400ms long-press timer. When the
/// timer fires without cancelling movement, `on_drag_begin` runs (mark the
/// row, lock scrolling, haptic pulse).
pub fn make_on_touch_start<K, F>(
    td: TouchDrag<K>,
    key: K,
    on_drag_begin: F,
) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        // Touches starting on interactive controls are theirs, not ours.
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        let Some(touch) = ev.touches().item(0) else {
            // Malformed touch sequence: the gesture simply does not start.
            return;
        };

        // Tear down any stale session before arming a new one.
        clear_timer(&td);
        td.dragging_key_write.set(None);
        td.machine
            .borrow_mut()
            .touch_start(key, touch.client_x(), touch.client_y());

        let td2 = td.clone();
        let begin = on_drag_begin.clone();
        let cb = Closure::once(move || {
            td2.timer.set(None);
            if td2.machine.borrow_mut().long_press_fired() {
                td2.dragging_key_write.set(Some(key));
                begin();
            }
        });
        if let Some(win) = web_sys::window() {
            if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                machine::LONG_PRESS_MS as i32,
            ) {
                td.timer.set(Some(id));
            }
        }
        cb.forget();
    }
}

/// Create a touchmove handler for the item container.
///
/// While pending it watches for the movement that cancels the long-press;
/// while dragging it suppresses scrolling and hit-tests the pointer against
/// rows matching `row_selector` inside the same container. `resolve` maps a
/// hit row element to its item key; `on_swap(dragged, target)` performs the
/// in-memory reorder (and its haptic pulse) for each accepted, debounced
/// reorder.
pub fn make_on_touch_move<K, R, S>(
    td: TouchDrag<K>,
    row_selector: &'static str,
    resolve: R,
    on_swap: S,
) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    R: Fn(&web_sys::Element) -> Option<K> + Clone + 'static,
    S: Fn(K, K) + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.touches().item(0) else {
            return;
        };
        let x = touch.client_x();
        let y = touch.client_y();

        let outcome = td.machine.borrow_mut().touch_move(x, y);
        match outcome {
            MoveOutcome::Ignore => {}
            MoveOutcome::CancelLongPress => clear_timer(&td),
            MoveOutcome::HitTest => {
                // The finger owns this gesture now; no scrolling.
                ev.prevent_default();

                let Some(dragged) = td.machine.borrow().dragging_key() else {
                    return;
                };
                let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Some(el) = doc.element_from_point(x as f32, y as f32) else {
                    return;
                };
                let Ok(Some(row)) = el.closest(row_selector) else {
                    return;
                };
                let Some(target) = resolve(&row) else {
                    return;
                };
                let accepted = td.machine.borrow_mut().try_swap(target, js_sys::Date::now());
                if accepted {
                    on_swap(dragged, target);
                }
            }
        }
    }
}

/// Create a touchend handler for the item container.
///
/// A release within the tap slop lets the click through untouched; a real
/// drag runs `on_commit` (submit the final order) and suppresses the
/// synthetic click for 100ms.
pub fn make_on_touch_end<K, C>(
    td: TouchDrag<K>,
    on_commit: C,
) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    C: Fn() + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        let outcome = match ev.changed_touches().item(0) {
            Some(touch) => td
                .machine
                .borrow_mut()
                .touch_end(touch.client_x(), touch.client_y()),
            None => {
                td.machine.borrow_mut().cancel();
                EndOutcome::None
            }
        };
        match outcome {
            EndOutcome::None => end_drag(&td, false),
            EndOutcome::Tap { .. } => end_drag(&td, false),
            EndOutcome::Commit => {
                end_drag(&td, true);
                on_commit();
            }
        }
    }
}

/// Create a touchcancel handler: full teardown, click suppression cleared
/// immediately.
pub fn make_on_touch_cancel<K>(td: TouchDrag<K>) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::TouchEvent| {
        td.machine.borrow_mut().cancel();
        end_drag(&td, false);
    }
}
