//! Drag Gesture State Machine
//!
//! Pure long-press drag-reorder recognizer: no DOM, no timers, no signals.
//! The caller feeds it touch coordinates and wall-clock timestamps and acts
//! on the returned outcomes (arm/clear the long-press timer, reorder the
//! list, commit the final order).

/// Long-press duration before a touch becomes a drag.
pub const LONG_PRESS_MS: u32 = 400;

/// Movement on either axis beyond this cancels a pending long-press.
pub const MOVE_CANCEL_PX: i32 = 10;

/// Net displacement of at least this on either axis at touch-end is a
/// committed drag; anything less is a tap.
pub const TAP_SLOP_PX: i32 = 10;

/// Minimum interval between two accepted reorders while dragging.
pub const SWAP_DEBOUNCE_MS: f64 = 250.0;

/// How long the synthetic click after a committed drag stays suppressed.
pub const CLICK_SUPPRESS_MS: u32 = 100;

/// Gesture state. At most one session exists; `Idle` means no session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State<K> {
    Idle,
    /// Touch down, long-press timer armed, waiting it out.
    Pending { key: K, start_x: i32, start_y: i32 },
    /// Long-press fired; the item follows the finger.
    Dragging {
        key: K,
        start_x: i32,
        start_y: i32,
        /// Timestamp of the last accepted reorder, for debouncing.
        last_swap_ms: Option<f64>,
    },
}

/// What the caller must do after a touch-move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Nothing to do (idle, or pending within the slop zone).
    Ignore,
    /// Movement looked like a scroll/tap: session torn down, clear the timer.
    CancelLongPress,
    /// Dragging: suppress scrolling and hit-test the pointer position.
    HitTest,
}

/// What the caller must do after a touch-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// No session was active.
    None,
    /// Released before the long-press fired: clear the timer, let the
    /// click through.
    Tap { clear_timer: bool },
    /// A real drag ended: submit the final order, suppress the synthetic
    /// click for [`CLICK_SUPPRESS_MS`].
    Commit,
}

/// The recognizer itself. `K` is the stable item key (identity survives
/// re-renders).
#[derive(Clone, Copy, Debug)]
pub struct Machine<K> {
    state: State<K>,
}

impl<K: Copy + PartialEq> Machine<K> {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn state(&self) -> State<K> {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Key of the item currently being dragged, if any.
    pub fn dragging_key(&self) -> Option<K> {
        match self.state {
            State::Dragging { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Touch down on a draggable item. Any stale session is torn down first
    /// (the caller clears the stale timer); a fresh `Pending` session is
    /// created and the caller arms a [`LONG_PRESS_MS`] timer.
    pub fn touch_start(&mut self, key: K, x: i32, y: i32) {
        self.state = State::Pending {
            key,
            start_x: x,
            start_y: y,
        };
    }

    /// The long-press timer fired. Returns `true` if the session moved to
    /// `Dragging` (stale timers against a torn-down session return `false`).
    pub fn long_press_fired(&mut self) -> bool {
        match self.state {
            State::Pending {
                key,
                start_x,
                start_y,
            } => {
                self.state = State::Dragging {
                    key,
                    start_x,
                    start_y,
                    last_swap_ms: None,
                };
                true
            }
            _ => false,
        }
    }

    /// Finger moved to `(x, y)`.
    pub fn touch_move(&mut self, x: i32, y: i32) -> MoveOutcome {
        match self.state {
            State::Idle => MoveOutcome::Ignore,
            State::Pending {
                start_x, start_y, ..
            } => {
                if exceeds_slop(x - start_x, y - start_y, MOVE_CANCEL_PX) {
                    // Scroll or swipe, not a long-press.
                    self.state = State::Idle;
                    MoveOutcome::CancelLongPress
                } else {
                    MoveOutcome::Ignore
                }
            }
            State::Dragging { .. } => MoveOutcome::HitTest,
        }
    }

    /// While dragging, the pointer sits over `target`. Returns `true` when a
    /// reorder of the dragged item next to `target` is accepted; hovering
    /// the dragged item itself and anything inside the debounce window is
    /// refused.
    pub fn try_swap(&mut self, target: K, now_ms: f64) -> bool {
        match &mut self.state {
            State::Dragging {
                key, last_swap_ms, ..
            } => {
                if *key == target {
                    return false;
                }
                if let Some(last) = *last_swap_ms {
                    if now_ms - last < SWAP_DEBOUNCE_MS {
                        return false;
                    }
                }
                *last_swap_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Finger lifted at `(x, y)`. The session ends either way.
    pub fn touch_end(&mut self, x: i32, y: i32) -> EndOutcome {
        let outcome = match self.state {
            State::Idle => EndOutcome::None,
            State::Pending { .. } => EndOutcome::Tap { clear_timer: true },
            State::Dragging {
                start_x, start_y, ..
            } => {
                // Inclusive here; the Pending cancel threshold is strict.
                if reaches_slop(x - start_x, y - start_y, TAP_SLOP_PX) {
                    EndOutcome::Commit
                } else {
                    // Long-press without movement: treat as a tap so the
                    // click is not swallowed.
                    EndOutcome::Tap { clear_timer: false }
                }
            }
        };
        self.state = State::Idle;
        outcome
    }

    /// Touch cancelled by the platform. Tears everything down; the caller
    /// clears the timer and the click-suppression flag immediately.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

impl<K: Copy + PartialEq> Default for Machine<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Either axis exceeding `slop` counts, measured independently.
fn exceeds_slop(dx: i32, dy: i32, slop: i32) -> bool {
    dx.abs() > slop || dy.abs() > slop
}

/// Inclusive variant for the touch-end displacement check.
fn reaches_slop(dx: i32, dy: i32, slop: i32) -> bool {
    dx.abs() >= slop || dy.abs() >= slop
}

/// Move the item at `from` adjacent to the item at `to`: before it when
/// dragging upward, after it when dragging downward. Remove-then-insert at
/// the target index yields exactly that "insert adjacent" semantics.
pub fn apply_reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    type M = Machine<u32>;

    #[test]
    fn tap_before_long_press_commits_nothing() {
        let mut m = M::new();
        m.touch_start(1, 100, 100);
        // Small jitter within the slop zone.
        assert_eq!(m.touch_move(104, 98), MoveOutcome::Ignore);
        assert_eq!(m.touch_end(104, 98), EndOutcome::Tap { clear_timer: true });
        assert!(m.is_idle());
    }

    #[test]
    fn movement_past_threshold_cancels_long_press() {
        let mut m = M::new();
        m.touch_start(1, 100, 100);
        // 11px on the y axis alone is enough.
        assert_eq!(m.touch_move(100, 111), MoveOutcome::CancelLongPress);
        assert!(m.is_idle());
        // The stale timer firing afterwards must not start a drag.
        assert!(!m.long_press_fired());
    }

    #[test]
    fn exactly_threshold_does_not_cancel() {
        let mut m = M::new();
        m.touch_start(1, 100, 100);
        assert_eq!(m.touch_move(110, 90), MoveOutcome::Ignore);
        assert!(m.long_press_fired());
    }

    #[test]
    fn long_press_then_drag_commits_once() {
        let mut m = M::new();
        m.touch_start(1, 100, 100);
        assert!(m.long_press_fired());
        assert_eq!(m.dragging_key(), Some(1));
        assert_eq!(m.touch_move(100, 160), MoveOutcome::HitTest);
        assert_eq!(m.touch_end(100, 160), EndOutcome::Commit);
        assert!(m.is_idle());
        // Session is gone; a second end is a no-op.
        assert_eq!(m.touch_end(100, 160), EndOutcome::None);
    }

    #[test]
    fn stationary_long_press_release_is_a_tap() {
        let mut m = M::new();
        m.touch_start(7, 50, 50);
        assert!(m.long_press_fired());
        assert_eq!(m.touch_end(54, 53), EndOutcome::Tap { clear_timer: false });
    }

    #[test]
    fn exactly_slop_displacement_at_end_commits() {
        let mut m = M::new();
        m.touch_start(7, 50, 50);
        assert!(m.long_press_fired());
        // 10px on one axis is already a real drag, not a tap.
        assert_eq!(m.touch_end(50, 60), EndOutcome::Commit);

        // 9px stays a tap.
        m.touch_start(7, 50, 50);
        assert!(m.long_press_fired());
        assert_eq!(m.touch_end(50, 59), EndOutcome::Tap { clear_timer: false });
    }

    #[test]
    fn swap_refused_for_self_and_within_debounce_window() {
        let mut m = M::new();
        m.touch_start(1, 0, 0);
        assert!(m.long_press_fired());

        assert!(!m.try_swap(1, 1_000.0), "hovering the dragged item itself");
        assert!(m.try_swap(2, 1_000.0));
        assert!(!m.try_swap(3, 1_100.0), "inside the 250ms window");
        assert!(!m.try_swap(3, 1_249.0), "still inside");
        assert!(m.try_swap(3, 1_250.0), "window elapsed");
    }

    #[test]
    fn swap_refused_unless_dragging() {
        let mut m = M::new();
        assert!(!m.try_swap(2, 0.0));
        m.touch_start(1, 0, 0);
        assert!(!m.try_swap(2, 0.0), "pending is not dragging");
    }

    #[test]
    fn cancel_tears_down_from_any_state() {
        let mut m = M::new();
        m.touch_start(1, 0, 0);
        m.cancel();
        assert!(m.is_idle());

        m.touch_start(1, 0, 0);
        assert!(m.long_press_fired());
        m.cancel();
        assert!(m.is_idle());
        assert_eq!(m.touch_end(0, 0), EndOutcome::None);
    }

    #[test]
    fn new_touch_start_replaces_stale_session() {
        let mut m = M::new();
        m.touch_start(1, 0, 0);
        // Second finger down before the first resolved.
        m.touch_start(2, 30, 30);
        assert!(m.long_press_fired());
        assert_eq!(m.dragging_key(), Some(2));
    }

    #[test]
    fn reorder_drag_up_inserts_before_target() {
        // Drag B (index 1) over A (index 0) in [A, B, C] -> [B, A, C].
        let mut items = vec!["A", "B", "C"];
        apply_reorder(&mut items, 1, 0);
        assert_eq!(items, vec!["B", "A", "C"]);
    }

    #[test]
    fn reorder_drag_down_inserts_after_target() {
        let mut items = vec!["A", "B", "C", "D"];
        apply_reorder(&mut items, 0, 2);
        assert_eq!(items, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn reorder_out_of_bounds_is_a_no_op() {
        let mut items = vec!["A", "B"];
        apply_reorder(&mut items, 5, 0);
        apply_reorder(&mut items, 0, 5);
        apply_reorder(&mut items, 1, 1);
        assert_eq!(items, vec!["A", "B"]);
    }

    #[test]
    fn multi_step_drag_is_adjacent_insertion_not_swap() {
        // Dragging A downward one slot at a time walks it to the end.
        let mut items = vec!["A", "B", "C"];
        apply_reorder(&mut items, 0, 1);
        assert_eq!(items, vec!["B", "A", "C"]);
        apply_reorder(&mut items, 1, 2);
        assert_eq!(items, vec!["B", "C", "A"]);
    }
}
