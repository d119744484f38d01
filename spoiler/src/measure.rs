//! Natural-height measurement of spoiler content.
//!
//! The host lays the content out inside a wrapper that is never height
//! constrained, and reports that wrapper's height through a [`LayoutProbe`].
//! [`HeightMeasurer`] decides when a new reading is due and keeps the last
//! valid one.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::layout::LayoutResult;

/// Handle naming the unclamped wrapper around the content.
///
/// Each spoiler owns exactly one; it is deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MeasureTarget {
    id: String,
}

impl MeasureTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Element id the host uses for the wrapper.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Source of committed content heights.
pub trait LayoutProbe {
    /// Natural height of `target`, or `None` while it is not attached to the
    /// render tree.
    fn natural_height(&self, target: &MeasureTarget) -> Option<f32>;
}

impl LayoutProbe for LayoutResult {
    fn natural_height(&self, target: &MeasureTarget) -> Option<f32> {
        self.get(target.id()).map(|rect| rect.height)
    }
}

/// Identity of the content shown in a spoiler.
///
/// Hosts pass a new key whenever the content changes; an unchanged key with
/// an unchanged threshold means no remeasurement is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey(pub u64);

impl ContentKey {
    /// Derive a key by hashing the content.
    pub fn of<T: Hash + ?Sized>(content: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        Self(hasher.finish())
    }
}

#[derive(Debug)]
pub struct HeightMeasurer {
    target: MeasureTarget,
    /// Content key and threshold (as bits) of the last successful reading.
    committed: Option<(ContentKey, u32)>,
    height: Option<f32>,
}

impl HeightMeasurer {
    pub fn new(target: MeasureTarget) -> Self {
        Self {
            target,
            committed: None,
            height: None,
        }
    }

    pub fn target(&self) -> &MeasureTarget {
        &self.target
    }

    /// Last valid reading.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Whether content identity or threshold changed since the last
    /// successful reading. Always true until a reading succeeds.
    pub fn needs_measure(&self, key: ContentKey, max_height: f32) -> bool {
        match self.committed {
            Some((committed_key, bits)) => committed_key != key || bits != max_height.to_bits(),
            None => true,
        }
    }

    /// Read the live height of the target.
    ///
    /// Returns `None` when the target is not attached or the host reports a
    /// non-finite or negative height. The previous reading is kept then.
    pub fn measure<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> Option<f32> {
        let reading = probe
            .natural_height(&self.target)
            .filter(|height| height.is_finite() && *height >= 0.0);

        match reading {
            Some(height) => {
                log::trace!("[spoiler] measured {} = {}", self.target.id(), height);
                self.height = Some(height);
            }
            None => {
                log::trace!("[spoiler] {} not measurable yet", self.target.id());
            }
        }

        reading
    }

    /// Measure only if [`needs_measure`](Self::needs_measure) says so.
    ///
    /// `Some(reading)` when a measurement was attempted. A failed attempt is
    /// retried on the next call even with identical inputs.
    pub fn remeasure<P: LayoutProbe + ?Sized>(
        &mut self,
        key: ContentKey,
        max_height: f32,
        probe: &P,
    ) -> Option<Option<f32>> {
        if !self.needs_measure(key, max_height) {
            return None;
        }

        let reading = self.measure(probe);
        if reading.is_some() {
            self.committed = Some((key, max_height.to_bits()));
        }
        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn layout_with(id: &str, height: f32) -> LayoutResult {
        let mut layout = LayoutResult::new();
        layout.insert(id.to_string(), Rect::from_size(40.0, height));
        layout
    }

    #[test]
    fn test_unattached_target_is_unavailable() {
        let mut measurer = HeightMeasurer::new(MeasureTarget::new("inner"));
        assert_eq!(measurer.measure(&LayoutResult::new()), None);
        assert_eq!(measurer.height(), None);
    }

    #[test]
    fn test_invalid_reading_keeps_previous() {
        let mut measurer = HeightMeasurer::new(MeasureTarget::new("inner"));
        measurer.measure(&layout_with("inner", 30.0));
        assert_eq!(measurer.measure(&layout_with("inner", f32::NAN)), None);
        assert_eq!(measurer.measure(&layout_with("inner", -1.0)), None);
        assert_eq!(measurer.height(), Some(30.0));
    }

    #[test]
    fn test_remeasure_skips_unchanged_inputs() {
        let mut measurer = HeightMeasurer::new(MeasureTarget::new("inner"));
        let key = ContentKey(1);

        assert_eq!(measurer.remeasure(key, 100.0, &layout_with("inner", 80.0)), Some(Some(80.0)));
        assert_eq!(measurer.remeasure(key, 100.0, &layout_with("inner", 500.0)), None);
        assert_eq!(measurer.height(), Some(80.0));

        // Threshold change alone triggers a new reading.
        assert_eq!(measurer.remeasure(key, 50.0, &layout_with("inner", 80.0)), Some(Some(80.0)));
        // So does new content.
        assert_eq!(
            measurer.remeasure(ContentKey(2), 50.0, &layout_with("inner", 20.0)),
            Some(Some(20.0))
        );
    }

    #[test]
    fn test_failed_reading_is_retried() {
        let mut measurer = HeightMeasurer::new(MeasureTarget::new("inner"));
        let key = ContentKey(7);

        assert_eq!(measurer.remeasure(key, 100.0, &LayoutResult::new()), Some(None));
        assert!(measurer.needs_measure(key, 100.0));
        assert_eq!(measurer.remeasure(key, 100.0, &layout_with("inner", 120.0)), Some(Some(120.0)));
        assert!(!measurer.needs_measure(key, 100.0));
    }

    #[test]
    fn test_content_key_of_is_stable() {
        assert_eq!(ContentKey::of("abc"), ContentKey::of("abc"));
        assert_ne!(ContentKey::of("abc"), ContentKey::of("abd"));
    }
}
