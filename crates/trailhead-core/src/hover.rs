//! Mega-menu hover state machine
//!
//! Closing a hover-revealed panel the instant the pointer leaves its trigger
//! loses the race against the pointer travelling down into the panel: the
//! trigger's mouse-leave fires before the panel's mouse-enter registers. The
//! machine therefore passes through a `PendingClose` state armed with a
//! short grace timer, and re-entry cancels that timer outright.
//!
//! The machine itself is pure: callers feed it `HoverEvent`s and execute the
//! returned `HoverEffect` (arm or cancel a real timer). Timers are
//! identified by tokens owned by the state, so a timer that fires after
//! cancellation or after the state moved on is recognised as stale and
//! ignored.

/// Grace period before a mega-menu panel closes after mouse-leave.
pub const CLOSE_GRACE_MS: u64 = 150;

/// Opaque identity of an armed close timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// Current hover state of one header's navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverState {
    Closed,
    /// `item` is the id of the open top-level menu entry.
    Open { item: String },
    /// Still rendering `item`'s panel, but a close timer is armed.
    PendingClose { item: String, token: TimerToken },
}

impl Default for HoverState {
    fn default() -> Self {
        HoverState::Closed
    }
}

impl HoverState {
    /// The menu item whose panel is currently rendered, if any.
    ///
    /// `PendingClose` still renders the panel: the whole point of the grace
    /// period is that the panel must not unmount while the timer runs.
    pub fn rendered_item(&self) -> Option<&str> {
        match self {
            HoverState::Closed => None,
            HoverState::Open { item } | HoverState::PendingClose { item, .. } => Some(item),
        }
    }
}

/// Input events, produced by DOM listeners on the trigger links and panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered a top-level trigger. `has_panel` is false when the
    /// item has no mega-menu content (including the flag-set-but-empty
    /// write-side violation).
    HoverTrigger { item: String, has_panel: bool },
    /// Pointer left the trigger link.
    LeaveTrigger,
    /// Pointer entered the open panel.
    EnterPanel,
    /// Pointer left the open panel.
    LeavePanel,
    /// An armed close timer fired.
    TimerFired(TimerToken),
    /// Menu link clicked, click outside the header, or route change:
    /// close immediately, no grace period.
    Dismiss,
}

/// Side effect the embedding component must execute after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    None,
    /// Schedule a real timer for `CLOSE_GRACE_MS` that feeds back
    /// `TimerFired(token)`.
    ArmClose(TimerToken),
    /// Cancel the scheduled timer for `token`. Cancellation is mandatory,
    /// not optional: a merely-ignored timer is a leaked resource.
    CancelClose(TimerToken),
}

/// Hover state machine for one mounted header.
///
/// Created on header mount, dropped on unmount. The embedding component
/// must cancel any armed timer when it unmounts (`pending_token` reports
/// whether one exists).
#[derive(Debug, Default)]
pub struct HoverMachine {
    state: HoverState,
    next_token: u64,
}

impl HoverMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// The armed close-timer token, if any. Used by unmount cleanup.
    pub fn pending_token(&self) -> Option<TimerToken> {
        match &self.state {
            HoverState::PendingClose { token, .. } => Some(*token),
            _ => None,
        }
    }

    fn fresh_token(&mut self) -> TimerToken {
        self.next_token += 1;
        TimerToken(self.next_token)
    }

    /// Apply one event, returning the effect to execute.
    pub fn handle(&mut self, event: HoverEvent) -> HoverEffect {
        match event {
            HoverEvent::HoverTrigger { item, has_panel } => self.on_hover_trigger(item, has_panel),
            HoverEvent::EnterPanel => self.reaffirm(),
            HoverEvent::LeaveTrigger | HoverEvent::LeavePanel => self.on_leave(),
            HoverEvent::TimerFired(token) => self.on_timer(token),
            HoverEvent::Dismiss => self.dismiss(),
        }
    }

    fn on_hover_trigger(&mut self, item: String, has_panel: bool) -> HoverEffect {
        // Cancel any armed timer first; the pointer is back on the menu.
        let cancel = self.take_pending();

        if !has_panel {
            // A panel-less trigger never opens; if another item was open,
            // pointer intent has moved on, so close it now.
            self.state = HoverState::Closed;
            return cancel;
        }

        // Opening a second item replaces the first directly, never passing
        // through Closed (the panel swaps, it does not blink).
        self.state = HoverState::Open { item };
        cancel
    }

    fn reaffirm(&mut self) -> HoverEffect {
        match std::mem::take(&mut self.state) {
            HoverState::PendingClose { item, token } => {
                self.state = HoverState::Open { item };
                HoverEffect::CancelClose(token)
            }
            other => {
                self.state = other;
                HoverEffect::None
            }
        }
    }

    fn on_leave(&mut self) -> HoverEffect {
        match std::mem::take(&mut self.state) {
            HoverState::Open { item } => {
                let token = self.fresh_token();
                self.state = HoverState::PendingClose { item, token };
                HoverEffect::ArmClose(token)
            }
            // Already pending: keep the existing timer rather than resetting
            // the grace period on every boundary crossing.
            other => {
                self.state = other;
                HoverEffect::None
            }
        }
    }

    fn on_timer(&mut self, fired: TimerToken) -> HoverEffect {
        match &self.state {
            HoverState::PendingClose { token, .. } if *token == fired => {
                self.state = HoverState::Closed;
            }
            // Stale token: the state moved on (re-entry cancelled it, or a
            // different item opened). Nothing to do.
            _ => {}
        }
        HoverEffect::None
    }

    fn dismiss(&mut self) -> HoverEffect {
        let cancel = self.take_pending();
        self.state = HoverState::Closed;
        cancel
    }

    fn take_pending(&mut self) -> HoverEffect {
        match self.pending_token() {
            Some(token) => HoverEffect::CancelClose(token),
            None => HoverEffect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover(item: &str) -> HoverEvent {
        HoverEvent::HoverTrigger {
            item: item.to_string(),
            has_panel: true,
        }
    }

    fn hover_no_panel(item: &str) -> HoverEvent {
        HoverEvent::HoverTrigger {
            item: item.to_string(),
            has_panel: false,
        }
    }

    #[test]
    fn test_hover_opens_panel() {
        let mut m = HoverMachine::new();
        assert_eq!(m.handle(hover("gear")), HoverEffect::None);
        assert_eq!(m.state().rendered_item(), Some("gear"));
    }

    #[test]
    fn test_panel_less_trigger_never_opens() {
        let mut m = HoverMachine::new();
        assert_eq!(m.handle(hover_no_panel("about")), HoverEffect::None);
        assert_eq!(*m.state(), HoverState::Closed);
    }

    #[test]
    fn test_leave_arms_grace_timer() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));

        let effect = m.handle(HoverEvent::LeaveTrigger);
        let HoverEffect::ArmClose(token) = effect else {
            panic!("expected ArmClose, got {effect:?}");
        };

        // Panel is still rendered while the timer runs
        assert_eq!(m.state().rendered_item(), Some("gear"));
        assert_eq!(m.pending_token(), Some(token));
    }

    #[test]
    fn test_timer_fires_closes() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeaveTrigger) else {
            panic!("expected ArmClose");
        };

        m.handle(HoverEvent::TimerFired(token));
        assert_eq!(*m.state(), HoverState::Closed);
    }

    #[test]
    fn test_panel_entry_cancels_timer() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeaveTrigger) else {
            panic!("expected ArmClose");
        };

        // Re-entry must cancel (not just ignore) the armed timer
        assert_eq!(m.handle(HoverEvent::EnterPanel), HoverEffect::CancelClose(token));
        assert_eq!(*m.state(), HoverState::Open { item: "gear".into() });

        // The cancelled token firing anyway (a leak elsewhere) is a no-op
        m.handle(HoverEvent::TimerFired(token));
        assert_eq!(m.state().rendered_item(), Some("gear"));
    }

    #[test]
    fn test_grace_travel_sequence_never_flickers() {
        // Open(A) -> leave trigger -> enter panel -> leave panel -> timer
        // fires: ends Closed, and the panel stays mounted until the very end.
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));

        m.handle(HoverEvent::LeaveTrigger);
        assert_eq!(m.state().rendered_item(), Some("gear"));

        m.handle(HoverEvent::EnterPanel);
        assert_eq!(m.state().rendered_item(), Some("gear"));

        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeavePanel) else {
            panic!("expected ArmClose");
        };
        assert_eq!(m.state().rendered_item(), Some("gear"));

        m.handle(HoverEvent::TimerFired(token));
        assert_eq!(*m.state(), HoverState::Closed);
    }

    #[test]
    fn test_switching_items_skips_closed() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        m.handle(hover("trips"));
        assert_eq!(*m.state(), HoverState::Open { item: "trips".into() });
    }

    #[test]
    fn test_switching_items_while_pending_cancels_timer() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeaveTrigger) else {
            panic!("expected ArmClose");
        };

        assert_eq!(m.handle(hover("trips")), HoverEffect::CancelClose(token));
        assert_eq!(m.state().rendered_item(), Some("trips"));
    }

    #[test]
    fn test_dismiss_is_immediate_and_cancels() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeaveTrigger) else {
            panic!("expected ArmClose");
        };

        assert_eq!(m.handle(HoverEvent::Dismiss), HoverEffect::CancelClose(token));
        assert_eq!(*m.state(), HoverState::Closed);
    }

    #[test]
    fn test_dismiss_from_open() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        assert_eq!(m.handle(HoverEvent::Dismiss), HoverEffect::None);
        assert_eq!(*m.state(), HoverState::Closed);
    }

    #[test]
    fn test_repeated_leave_keeps_existing_timer() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        let HoverEffect::ArmClose(token) = m.handle(HoverEvent::LeaveTrigger) else {
            panic!("expected ArmClose");
        };

        // A second leave (trigger -> gap -> panel edge) must not re-arm
        assert_eq!(m.handle(HoverEvent::LeavePanel), HoverEffect::None);
        assert_eq!(m.pending_token(), Some(token));
    }

    #[test]
    fn test_hover_no_panel_closes_open_item() {
        let mut m = HoverMachine::new();
        m.handle(hover("gear"));
        m.handle(hover_no_panel("about"));
        assert_eq!(*m.state(), HoverState::Closed);
    }
}
