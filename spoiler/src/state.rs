//! Overflow detection and the expanded/collapsed flag.

use crate::event::SpoilerEvent;

/// Whether `height` needs clamping at `max_height`.
///
/// A non-positive (or NaN) threshold counts every height as overflowing.
pub fn exceeds(height: f32, max_height: f32) -> bool {
    if max_height > 0.0 {
        height > max_height
    } else {
        true
    }
}

/// Expanded flag plus the derived overflow flag.
///
/// Both start at the configured initial state. The overflow flag is a
/// placeholder until the first real measurement arrives, so a spoiler that
/// starts expanded renders as expanded from the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    expanded: bool,
    overflowing: bool,
    measured: bool,
}

impl ToggleState {
    pub fn new(initial_state: bool) -> Self {
        Self {
            expanded: initial_state,
            overflowing: initial_state,
            measured: false,
        }
    }

    /// Derive the overflow flag from a new reading.
    ///
    /// `None` (nothing measurable yet) leaves the flag alone. Returns true
    /// if the flag changed.
    pub fn on_measurement(&mut self, height: Option<f32>, max_height: f32) -> bool {
        let Some(height) = height else {
            return false;
        };

        self.measured = true;
        let overflowing = exceeds(height, max_height);
        if overflowing == self.overflowing {
            return false;
        }

        log::debug!(
            "[spoiler] overflow {} -> {} (height={}, max_height={})",
            self.overflowing,
            overflowing,
            height,
            max_height
        );
        self.overflowing = overflowing;
        true
    }

    /// Flip the expanded flag. Safe to call without overflow.
    pub fn toggle(&mut self) -> SpoilerEvent {
        self.expanded = !self.expanded;
        if self.expanded {
            SpoilerEvent::Expand
        } else {
            SpoilerEvent::Collapse
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Whether a real measurement has replaced the seeded overflow flag.
    pub fn is_measured(&self) -> bool {
        self.measured
    }
}
