// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Show/hide delay state machine for a floating element's trigger.
//!
//! This module owns no timers and knows nothing about geometry. Feed it
//! show/hide requests (from hover, focus, or click handlers) together with the
//! current monotonic time, schedule a wake-up at [`TriggerState::deadline`], and
//! call [`TriggerState::tick`] when it fires. Returned [`TriggerEvent`]s tell you
//! when to mount and position or unmount the floating element.
//!
//! ## States
//!
//! `Idle → PendingShow → Visible → PendingHide → Idle`, where a pending show is
//! cancelled by a hide request and a pending hide is cancelled by a show request.
//! Starting one delay always clears the other.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_placement::trigger::{TriggerConfig, TriggerEvent, TriggerState};
//!
//! let ms = Duration::from_millis;
//! let mut t = TriggerState::new(TriggerConfig { show_delay: ms(200), hide_delay: ms(100) });
//!
//! assert_eq!(t.request_show(ms(0)), None);
//! assert_eq!(t.deadline(), Some(ms(200)));
//! assert_eq!(t.tick(ms(150)), None);
//! assert_eq!(t.tick(ms(200)), Some(TriggerEvent::Show));
//!
//! // Leave and come back before the hide delay expires: stays visible.
//! assert_eq!(t.request_hide(ms(300)), None);
//! assert_eq!(t.request_show(ms(350)), None);
//! assert_eq!(t.tick(ms(1000)), None);
//! assert!(t.is_visible());
//! ```

use core::time::Duration;

/// Default delay before showing.
pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(200);

/// Default delay before hiding.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(100);

/// Delays applied to show and hide requests. A zero delay acts immediately.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Time between a show request and the element appearing.
    pub show_delay: Duration,
    /// Time between a hide request and the element disappearing.
    pub hide_delay: Duration,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            show_delay: DEFAULT_SHOW_DELAY,
            hide_delay: DEFAULT_HIDE_DELAY,
        }
    }
}

/// Where the trigger is in its show/hide cycle.
///
/// Deadlines are absolute times on the caller's monotonic clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Hidden, nothing pending.
    #[default]
    Idle,
    /// Hidden, will show at `deadline` unless cancelled.
    PendingShow {
        /// When the show fires.
        deadline: Duration,
    },
    /// Shown, nothing pending.
    Visible,
    /// Shown, will hide at `deadline` unless cancelled.
    PendingHide {
        /// When the hide fires.
        deadline: Duration,
    },
}

/// Visibility change the caller must act on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Mount and position the floating element.
    Show,
    /// Unmount the floating element.
    Hide,
}

/// Show/hide delay state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerState {
    config: TriggerConfig,
    phase: TriggerPhase,
}

impl TriggerState {
    /// Create an idle trigger.
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            phase: TriggerPhase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// Current configuration.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Whether the floating element is currently shown (including while a hide is pending).
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            TriggerPhase::Visible | TriggerPhase::PendingHide { .. }
        )
    }

    /// When the caller should next call [`tick`](Self::tick), if anything is pending.
    pub fn deadline(&self) -> Option<Duration> {
        match self.phase {
            TriggerPhase::PendingShow { deadline } | TriggerPhase::PendingHide { deadline } => {
                Some(deadline)
            }
            TriggerPhase::Idle | TriggerPhase::Visible => None,
        }
    }

    /// Ask for the element to show (pointer enter, focus, click).
    ///
    /// Cancels a pending hide. Returns [`TriggerEvent::Show`] only when the
    /// show delay is zero and the element was hidden.
    pub fn request_show(&mut self, now: Duration) -> Option<TriggerEvent> {
        match self.phase {
            TriggerPhase::Idle if self.config.show_delay.is_zero() => {
                self.transition(TriggerPhase::Visible);
                Some(TriggerEvent::Show)
            }
            TriggerPhase::Idle => {
                self.transition(TriggerPhase::PendingShow {
                    deadline: now.saturating_add(self.config.show_delay),
                });
                None
            }
            TriggerPhase::PendingHide { .. } => {
                self.transition(TriggerPhase::Visible);
                None
            }
            // Already showing or about to: keep the original deadline.
            TriggerPhase::PendingShow { .. } | TriggerPhase::Visible => None,
        }
    }

    /// Ask for the element to hide (pointer leave, blur, outside click).
    ///
    /// Cancels a pending show. Returns [`TriggerEvent::Hide`] only when the
    /// hide delay is zero and the element was shown.
    pub fn request_hide(&mut self, now: Duration) -> Option<TriggerEvent> {
        match self.phase {
            TriggerPhase::Visible if self.config.hide_delay.is_zero() => {
                self.transition(TriggerPhase::Idle);
                Some(TriggerEvent::Hide)
            }
            TriggerPhase::Visible => {
                self.transition(TriggerPhase::PendingHide {
                    deadline: now.saturating_add(self.config.hide_delay),
                });
                None
            }
            TriggerPhase::PendingShow { .. } => {
                self.transition(TriggerPhase::Idle);
                None
            }
            TriggerPhase::Idle | TriggerPhase::PendingHide { .. } => None,
        }
    }

    /// Fire any pending transition whose deadline is at or before `now`.
    pub fn tick(&mut self, now: Duration) -> Option<TriggerEvent> {
        match self.phase {
            TriggerPhase::PendingShow { deadline } if now >= deadline => {
                self.transition(TriggerPhase::Visible);
                Some(TriggerEvent::Show)
            }
            TriggerPhase::PendingHide { deadline } if now >= deadline => {
                self.transition(TriggerPhase::Idle);
                Some(TriggerEvent::Hide)
            }
            _ => None,
        }
    }

    /// Cancel everything and go idle (unmount, anchor disposed, Escape).
    ///
    /// Returns [`TriggerEvent::Hide`] if the element was shown.
    pub fn teardown(&mut self) -> Option<TriggerEvent> {
        let was_visible = self.is_visible();
        self.transition(TriggerPhase::Idle);
        was_visible.then_some(TriggerEvent::Hide)
    }

    fn transition(&mut self, next: TriggerPhase) {
        #[cfg(feature = "tracing")]
        tracing::trace!(from = ?self.phase, to = ?next, "trigger transition");
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn trigger(show: u64, hide: u64) -> TriggerState {
        TriggerState::new(TriggerConfig {
            show_delay: ms(show),
            hide_delay: ms(hide),
        })
    }

    // Full cycle with delays on both sides.
    #[test]
    fn delayed_show_then_delayed_hide() {
        let mut t = trigger(200, 100);
        assert_eq!(t.request_show(ms(10)), None);
        assert_eq!(t.phase(), TriggerPhase::PendingShow { deadline: ms(210) });
        assert_eq!(t.tick(ms(209)), None);
        assert_eq!(t.tick(ms(210)), Some(TriggerEvent::Show));
        assert_eq!(t.phase(), TriggerPhase::Visible);

        assert_eq!(t.request_hide(ms(500)), None);
        assert_eq!(t.deadline(), Some(ms(600)));
        assert!(t.is_visible());
        assert_eq!(t.tick(ms(650)), Some(TriggerEvent::Hide));
        assert_eq!(t.phase(), TriggerPhase::Idle);
        assert_eq!(t.deadline(), None);
    }

    // Leaving before the show delay elapses cancels the show.
    #[test]
    fn hide_cancels_pending_show() {
        let mut t = trigger(200, 100);
        let _ = t.request_show(ms(0));
        assert_eq!(t.request_hide(ms(50)), None);
        assert_eq!(t.phase(), TriggerPhase::Idle);
        assert_eq!(t.tick(ms(1000)), None);
    }

    // Re-entering during the hide delay cancels the hide.
    #[test]
    fn show_cancels_pending_hide() {
        let mut t = trigger(0, 100);
        assert_eq!(t.request_show(ms(0)), Some(TriggerEvent::Show));
        let _ = t.request_hide(ms(10));
        assert_eq!(t.request_show(ms(20)), None);
        assert_eq!(t.phase(), TriggerPhase::Visible);
        assert_eq!(t.tick(ms(1000)), None);
    }

    // Repeated show requests do not push the deadline out.
    #[test]
    fn repeated_show_keeps_first_deadline() {
        let mut t = trigger(200, 100);
        let _ = t.request_show(ms(0));
        let _ = t.request_show(ms(150));
        assert_eq!(t.deadline(), Some(ms(200)));
    }

    #[test]
    fn zero_delays_act_immediately() {
        let mut t = trigger(0, 0);
        assert_eq!(t.request_show(ms(5)), Some(TriggerEvent::Show));
        assert_eq!(t.request_show(ms(6)), None);
        assert_eq!(t.request_hide(ms(7)), Some(TriggerEvent::Hide));
        assert_eq!(t.request_hide(ms(8)), None);
    }

    #[test]
    fn teardown_clears_pending_timers() {
        let mut t = trigger(200, 100);
        let _ = t.request_show(ms(0));
        assert_eq!(t.teardown(), None);
        assert_eq!(t.tick(ms(500)), None);

        let _ = t.tick(ms(0));
        let _ = t.request_show(ms(0));
        let _ = t.tick(ms(200));
        let _ = t.request_hide(ms(300));
        assert_eq!(t.teardown(), Some(TriggerEvent::Hide));
        assert_eq!(t.deadline(), None);
        assert_eq!(t.tick(ms(1000)), None);
    }

    #[test]
    fn default_config_uses_default_delays() {
        let t = TriggerState::default();
        assert_eq!(t.config().show_delay, DEFAULT_SHOW_DELAY);
        assert_eq!(t.config().hide_delay, DEFAULT_HIDE_DELAY);
        assert_eq!(t.phase(), TriggerPhase::Idle);
    }
}
