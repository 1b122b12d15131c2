// SPDX-License-Identifier: MPL-2.0
//! Page transition animator.
//!
//! A route change plays in two phases, strictly in order: the current page
//! exits (fades out while rising by the configured offset), then the new page
//! enters (fades in while settling from below). The new route is handed back
//! by [`Transition::tick`] only once the exit has finished, so the old page
//! stays on screen for the whole exit phase.

use crate::app::config::{TRANSITION_OFFSET_PX, TRANSITION_PHASE_MS};
use crate::ui::styles;
use iced::widget::{container, Stack};
use iced::{Element, Length, Padding};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting { started: Instant },
    Entering { started: Instant },
}

/// Visual state of the page at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0 = invisible, 1 = fully visible.
    pub opacity: f32,
    /// Vertical offset in logical pixels; negative is up.
    pub offset_y: f32,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct Transition<T> {
    phase: Phase,
    pending: Option<T>,
    duration: Duration,
    offset: f32,
}

impl<T> Default for Transition<T> {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(TRANSITION_PHASE_MS),
            TRANSITION_OFFSET_PX,
        )
    }
}

impl<T> Transition<T> {
    /// `duration` applies to each phase.
    #[must_use]
    pub fn new(duration: Duration, offset: f32) -> Self {
        Self {
            phase: Phase::Idle,
            pending: None,
            duration,
            offset,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Target waiting for the exit phase to finish.
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Requests a transition to `target`.
    ///
    /// During an exit the target is replaced and the exit keeps its timing.
    /// During an enter, a new exit starts from the current frame.
    pub fn start(&mut self, target: T, now: Instant) {
        self.pending = Some(target);
        match self.phase {
            Phase::Exiting { .. } => {}
            Phase::Idle => self.phase = Phase::Exiting { started: now },
            Phase::Entering { started } => {
                // Resume the exit at the opacity the page already has.
                let shown = self.progress(started, now);
                let remaining = 1.0 - shown;
                let rewind = self.duration.mul_f32(remaining);
                self.phase = Phase::Exiting {
                    started: now.checked_sub(rewind).unwrap_or(now),
                };
            }
        }
    }

    /// Plays only the enter phase, for a page that was swapped in directly.
    pub fn enter(&mut self, now: Instant) {
        self.pending = None;
        self.phase = Phase::Entering { started: now };
    }

    /// Abandons any running animation and pending target.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.pending = None;
    }

    /// Advances the phases. Returns the target when the exit completes,
    /// which is the moment the caller must swap pages.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        match self.phase {
            Phase::Idle => None,
            Phase::Exiting { started } => {
                if now.saturating_duration_since(started) < self.duration {
                    return None;
                }
                self.phase = Phase::Entering { started: now };
                let target = self.pending.take();
                if target.is_none() {
                    self.phase = Phase::Idle;
                }
                target
            }
            Phase::Entering { started } => {
                if now.saturating_duration_since(started) >= self.duration {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        match self.phase {
            Phase::Idle => Frame::REST,
            Phase::Exiting { started } => {
                let p = self.progress(started, now);
                Frame {
                    opacity: 1.0 - p,
                    offset_y: -self.offset * p,
                }
            }
            Phase::Entering { started } => {
                let p = self.progress(started, now);
                Frame {
                    opacity: p,
                    offset_y: self.offset * (1.0 - p),
                }
            }
        }
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Draws `content` at `frame`.
///
/// Opacity is rendered with a veil in the page color. Iced layout has no
/// negative margins, so the exit phase only fades; the page never moves
/// above its resting position.
pub fn view<'a, Message: 'a>(content: Element<'a, Message>, frame: Frame) -> Element<'a, Message> {
    if frame == Frame::REST {
        return content;
    }

    let shifted = container(content)
        .width(Length::Fill)
        .padding(Padding::ZERO.top(frame.offset_y.max(0.0)));

    Stack::new()
        .push(shifted)
        .push(
            container(iced::widget::Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::transition_veil(1.0 - frame.opacity)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE: Duration = Duration::from_millis(300);

    fn transition() -> Transition<&'static str> {
        Transition::new(PHASE, 40.0)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn idle_frame_is_at_rest() {
        let t = transition();
        assert_eq!(t.frame(Instant::now()), Frame::REST);
        assert!(!t.is_animating());
    }

    #[test]
    fn exit_completes_before_target_is_released() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/Gallery", t0);

        assert_eq!(t.tick(t0 + Duration::from_millis(150)), None);
        assert_eq!(t.pending(), Some(&"/Gallery"));
        assert_eq!(t.tick(t0 + PHASE), Some("/Gallery"));
        assert!(matches!(t.phase(), Phase::Entering { .. }));
    }

    #[test]
    fn exit_fades_out_and_rises() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/About", t0);

        let start = t.frame(t0);
        assert!(approx(start.opacity, 1.0));
        assert!(approx(start.offset_y, 0.0));

        let half = t.frame(t0 + PHASE / 2);
        assert!(approx(half.opacity, 0.5));
        assert!(approx(half.offset_y, -20.0));

        let end = t.frame(t0 + PHASE);
        assert!(approx(end.opacity, 0.0));
        assert!(approx(end.offset_y, -40.0));
    }

    #[test]
    fn enter_fades_in_and_settles() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/Career", t0);
        let swap = t0 + PHASE;
        t.tick(swap);

        let first = t.frame(swap);
        assert!(approx(first.opacity, 0.0));
        assert!(approx(first.offset_y, 40.0));

        let last = t.frame(swap + PHASE);
        assert!(approx(last.opacity, 1.0));
        assert!(approx(last.offset_y, 0.0));

        assert_eq!(t.tick(swap + PHASE), None);
        assert!(!t.is_animating());
    }

    #[test]
    fn retarget_during_exit_keeps_timing() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/About", t0);
        t.start("/Contact", t0 + Duration::from_millis(100));

        assert_eq!(t.tick(t0 + PHASE), Some("/Contact"));
    }

    #[test]
    fn retarget_during_enter_resumes_from_current_opacity() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/About", t0);
        let swap = t0 + PHASE;
        t.tick(swap);

        let mid_enter = swap + PHASE / 2;
        t.start("/Products", mid_enter);
        let frame = t.frame(mid_enter);
        assert!(approx(frame.opacity, 0.5));
        assert!(matches!(t.phase(), Phase::Exiting { .. }));
    }

    #[test]
    fn cancel_returns_to_rest() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/Login", t0);
        t.cancel();

        assert_eq!(t.tick(t0 + PHASE), None);
        assert_eq!(t.frame(t0), Frame::REST);
    }

    #[test]
    fn enter_skips_exit_phase() {
        let mut t = transition();
        let t0 = Instant::now();
        t.start("/Gallery", t0);
        t.enter(t0);

        assert_eq!(t.pending(), None);
        assert!(approx(t.frame(t0).opacity, 0.0));
        assert_eq!(t.tick(t0 + PHASE), None);
        assert!(!t.is_animating());
    }

    #[test]
    fn zero_duration_swaps_on_first_tick() {
        let mut t: Transition<u8> = Transition::new(Duration::ZERO, 40.0);
        let now = Instant::now();
        t.start(7, now);
        assert_eq!(t.tick(now), Some(7));
        t.tick(now);
        assert!(!t.is_animating());
    }
}
