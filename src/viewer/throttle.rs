//! Rate limiting at the input boundary.
//!
//! [`ActionThrottle`] coalesces `repeat` actions (resize, wheel) so that at
//! most one per kind is dispatched per interval. Absolute payloads such as a
//! resize keep the latest value; wheel deltas accumulate.
//! [`SearchDebouncer`] delays search input; a newer keystroke abandons the
//! pending one.
//!
//! Neither type is thread-safe; both live on the input-handling thread.

use std::time::{Duration, Instant};

use crate::viewer::action::{Action, ActionKind};

#[derive(Debug, Clone)]
pub struct ActionThrottle {
    interval: Duration,
    /// Last dispatch time per action kind.
    last: Vec<(&'static str, Instant)>,
    /// Coalesced suppressed action per kind, in arrival order.
    pending: Vec<Action>,
}

impl ActionThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Returns the action when it may be dispatched now.
    ///
    /// Non-repeating actions always pass through.
    pub fn push(&mut self, action: Action, now: Instant) -> Option<Action> {
        if !action.repeat {
            return Some(action);
        }
        let name = action.name();
        let action = match self.pending.iter().position(|pending| pending.name() == name) {
            Some(slot) => coalesce(self.pending.remove(slot), action),
            None => action,
        };
        if self.is_due(name, now) {
            self.mark(name, now);
            Some(action)
        } else {
            self.pending.push(action);
            None
        }
    }

    /// Pending actions whose interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Vec<Action> {
        let (due, waiting): (Vec<Action>, Vec<Action>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|action| self.is_due(action.name(), now));
        self.pending = waiting;
        for action in &due {
            self.mark(action.name(), now);
        }
        due
    }

    /// Every pending action, regardless of timing.
    pub fn flush(&mut self, now: Instant) -> Vec<Action> {
        let pending = std::mem::take(&mut self.pending);
        for action in &pending {
            self.mark(action.name(), now);
        }
        pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn is_due(&self, name: &str, now: Instant) -> bool {
        self.last
            .iter()
            .find(|(kind, _)| *kind == name)
            .map_or(true, |(_, at)| now.saturating_duration_since(*at) >= self.interval)
    }

    fn mark(&mut self, name: &'static str, now: Instant) {
        match self.last.iter_mut().find(|(kind, _)| *kind == name) {
            Some(entry) => entry.1 = now,
            None => self.last.push((name, now)),
        }
    }
}

/// Merge `incoming` into a suppressed action of the same kind.
fn coalesce(pending: Action, incoming: Action) -> Action {
    if let (
        ActionKind::BodyScrollWheel { delta_y: before },
        ActionKind::BodyScrollWheel { delta_y: after },
    ) = (&pending.kind, &incoming.kind)
    {
        let delta_y = before.saturating_add(*after);
        return Action {
            kind: ActionKind::BodyScrollWheel { delta_y },
            ..incoming
        };
    }
    incoming
}

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Queue `input`. Returns `true` when it superseded a pending keystroke.
    pub fn push(&mut self, input: impl Into<String>, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        if superseded {
            tracing::trace!("search input superseded");
        }
        self.pending = Some((input.into(), now + self.delay));
        superseded
    }

    /// The pending search once its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Action> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self
                .pending
                .take()
                .map(|(input, _)| crate::viewer::dispatch::search_change(input)),
            _ => None,
        }
    }

    /// The pending search, without waiting for its delay.
    pub fn flush(&mut self) -> Option<Action> {
        self.pending
            .take()
            .map(|(input, _)| crate::viewer::dispatch::search_change(input))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::dispatch::{body_mouse_leave, body_resize, body_scroll_wheel};

    #[test]
    fn repeat_actions_within_interval_are_coalesced() {
        let start = Instant::now();
        let mut throttle = ActionThrottle::new(Duration::from_millis(16));

        assert!(throttle.push(body_resize(Some(100), None), start).is_some());
        assert!(throttle
            .push(body_resize(Some(200), None), start + Duration::from_millis(5))
            .is_none());
        assert!(throttle
            .push(body_resize(Some(300), None), start + Duration::from_millis(10))
            .is_none());

        assert!(throttle.poll(start + Duration::from_millis(12)).is_empty());
        let due = throttle.poll(start + Duration::from_millis(20));
        assert_eq!(due.len(), 1);
        assert!(matches!(
            due[0].kind,
            ActionKind::BodyResize { width: 300, .. }
        ));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn wheel_deltas_accumulate_while_suppressed() {
        let start = Instant::now();
        let mut throttle = ActionThrottle::new(Duration::from_millis(16));
        let wheel = |delta| body_scroll_wheel(delta).expect("non-zero delta");

        assert!(throttle.push(wheel(1), start).is_some());
        assert!(throttle.push(wheel(3), start + Duration::from_millis(2)).is_none());
        assert!(throttle.push(wheel(-1), start + Duration::from_millis(4)).is_none());

        let merged = throttle
            .push(wheel(2), start + Duration::from_millis(20))
            .expect("interval elapsed");
        assert_eq!(merged.kind, ActionKind::BodyScrollWheel { delta_y: 4 });
        assert!(!throttle.has_pending());
    }

    #[test]
    fn wheel_accumulation_saturates() {
        let pending = body_scroll_wheel(i32::MAX).expect("non-zero delta");
        let incoming = body_scroll_wheel(5).expect("non-zero delta");
        assert_eq!(
            coalesce(pending, incoming).kind,
            ActionKind::BodyScrollWheel { delta_y: i32::MAX }
        );
    }

    #[test]
    fn non_repeat_actions_pass_through() {
        let now = Instant::now();
        let mut throttle = ActionThrottle::new(Duration::from_secs(60));
        assert!(throttle.push(body_mouse_leave(), now).is_some());
        assert!(throttle.push(body_mouse_leave(), now).is_some());
    }

    #[test]
    fn debouncer_abandons_superseded_input() {
        let start = Instant::now();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(100));
        assert!(!debouncer.push("4d", start));
        assert!(debouncer.push("4d5a", start + Duration::from_millis(50)));

        assert!(debouncer.poll(start + Duration::from_millis(120)).is_none());
        let action = debouncer
            .poll(start + Duration::from_millis(150))
            .expect("debounced search");
        assert_eq!(
            action.kind,
            ActionKind::SearchChange {
                input: "4d5a".into()
            }
        );
        assert!(!debouncer.is_pending());
    }
}
