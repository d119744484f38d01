//! Render instructions derived from configuration and state.

use std::time::Duration;

use crate::config::SpoilerConfig;
use crate::state::ToggleState;

/// The three observable spoiler states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoilerPhase {
    /// Content fits; no toggle, clamp at `max_height`.
    NoOverflow,
    /// Toggle shows the show label; clamp at `max_height`.
    CollapsedOverflow,
    /// Toggle shows the hide label; clamp at the measured height.
    ExpandedOverflow,
}

impl SpoilerPhase {
    pub fn from_state(state: &ToggleState) -> Self {
        match (state.is_overflowing(), state.is_expanded()) {
            (false, _) => SpoilerPhase::NoOverflow,
            (true, false) => SpoilerPhase::CollapsedOverflow,
            (true, true) => SpoilerPhase::ExpandedOverflow,
        }
    }
}

/// Everything the view layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstructions<'a, L> {
    /// Height clamp for the content wrapper. `None` means unbounded.
    pub applied_max_height: Option<f32>,
    pub show_toggle: bool,
    pub toggle_label: &'a L,
    pub transition_duration: Duration,
}

/// Pure mapping from configuration, state and the last measured height to
/// render instructions.
#[derive(Debug)]
pub struct RenderPolicy<'a, L> {
    config: &'a SpoilerConfig<L>,
    state: ToggleState,
    measured_height: Option<f32>,
}

impl<'a, L> RenderPolicy<'a, L> {
    pub fn new(
        config: &'a SpoilerConfig<L>,
        state: &ToggleState,
        measured_height: Option<f32>,
    ) -> Self {
        Self {
            config,
            state: *state,
            measured_height,
        }
    }

    pub fn phase(&self) -> SpoilerPhase {
        SpoilerPhase::from_state(&self.state)
    }

    /// `max_height` unless expanded and overflowing, in which case the
    /// measured height so a height transition has a concrete end value.
    ///
    /// Expanded before any measurement (seeded from the initial state) has no
    /// concrete height yet and is left unbounded.
    pub fn applied_max_height(&self) -> Option<f32> {
        match self.phase() {
            SpoilerPhase::ExpandedOverflow => self.measured_height,
            SpoilerPhase::NoOverflow | SpoilerPhase::CollapsedOverflow => {
                Some(self.config.max_height.max(0.0))
            }
        }
    }

    pub fn show_toggle(&self) -> bool {
        self.state.is_overflowing()
    }

    pub fn toggle_label(&self) -> &'a L {
        if self.state.is_expanded() {
            &self.config.hide_label
        } else {
            &self.config.show_label
        }
    }

    pub fn transition_duration(&self) -> Duration {
        self.config.transition_duration
    }

    /// False when the duration is zero.
    pub fn animated(&self) -> bool {
        !self.config.transition_duration.is_zero()
    }

    pub fn instructions(&self) -> RenderInstructions<'a, L> {
        RenderInstructions {
            applied_max_height: self.applied_max_height(),
            show_toggle: self.show_toggle(),
            toggle_label: self.toggle_label(),
            transition_duration: self.transition_duration(),
        }
    }
}
