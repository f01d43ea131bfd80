// SPDX-License-Identifier: MPL-2.0
//! Mapping between horizontal scroll offsets and slide indices.
//!
//! Offsets are computed on demand from the slide count and width, so the
//! mapping always has exactly one boundary per slide and follows resizes.

/// Largest distance, in logical pixels, at which an offset still counts as
/// aligned with a slide boundary.
pub const OFFSET_TOLERANCE_PX: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOffsets {
    count: usize,
    slide_width: f32,
}

impl SlideOffsets {
    #[must_use]
    pub fn new(count: usize, slide_width: f32) -> Self {
        Self {
            count,
            slide_width: slide_width.max(0.0),
        }
    }

    /// Number of slide boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    /// Updates the slide width. Returns `true` if it changed.
    pub fn set_slide_width(&mut self, width: f32) -> bool {
        let width = width.max(0.0);
        if (width - self.slide_width).abs() < f32::EPSILON {
            return false;
        }
        self.slide_width = width;
        true
    }

    /// Offset at which slide `index` is aligned with the viewport.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Option<f32> {
        (index < self.count).then(|| index as f32 * self.slide_width)
    }

    /// All `(index, offset)` boundaries in order.
    pub fn boundaries(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        (0..self.count).map(|index| (index, index as f32 * self.slide_width))
    }

    /// Index of the slide aligned with `offset`, if any.
    ///
    /// Returns `None` for offsets between slides (mid-drag) and whenever the
    /// width is not known yet.
    #[must_use]
    pub fn resolve(&self, offset: f32) -> Option<usize> {
        let nearest = self.nearest(offset)?;
        let expected = nearest as f32 * self.slide_width;
        ((offset - expected).abs() <= OFFSET_TOLERANCE_PX).then_some(nearest)
    }

    /// Index of the slide closest to `offset`, clamped to the valid range.
    #[must_use]
    pub fn nearest(&self, offset: f32) -> Option<usize> {
        if self.count == 0 || self.slide_width <= 0.0 || !offset.is_finite() {
            return None;
        }
        let last = self.count - 1;
        let position = (offset / self.slide_width).round();
        if position <= 0.0 {
            Some(0)
        } else {
            Some((position as usize).min(last))
        }
    }

    /// Relative horizontal position (0 to 1) that aligns slide `index`.
    #[must_use]
    pub fn relative_x(&self, index: usize) -> f32 {
        if self.count <= 1 {
            0.0
        } else {
            index.min(self.count - 1) as f32 / (self.count - 1) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_one_boundary_per_slide() {
        let offsets = SlideOffsets::new(4, 360.0);
        let all: Vec<_> = offsets.boundaries().collect();
        assert_eq!(all, vec![(0, 0.0), (1, 360.0), (2, 720.0), (3, 1080.0)]);
        assert_eq!(offsets.len(), 4);
    }

    #[test]
    fn resolves_exact_offsets() {
        let offsets = SlideOffsets::new(3, 400.0);
        assert_eq!(offsets.resolve(0.0), Some(0));
        assert_eq!(offsets.resolve(400.0), Some(1));
        assert_eq!(offsets.resolve(800.0), Some(2));
    }

    #[test]
    fn tolerates_fractional_drift() {
        let offsets = SlideOffsets::new(3, 399.5);
        assert_eq!(offsets.resolve(798.4), Some(2));
        assert_eq!(offsets.resolve(400.2), Some(1));
    }

    #[test]
    fn mid_drag_offsets_do_not_resolve() {
        let offsets = SlideOffsets::new(3, 400.0);
        assert_eq!(offsets.resolve(150.0), None);
        assert_eq!(offsets.resolve(402.5), None);
    }

    #[test]
    fn out_of_range_offsets_do_not_resolve() {
        let offsets = SlideOffsets::new(2, 400.0);
        assert_eq!(offsets.resolve(1200.0), None);
    }

    #[test]
    fn empty_or_unsized_never_resolves() {
        assert_eq!(SlideOffsets::new(0, 400.0).resolve(0.0), None);
        assert_eq!(SlideOffsets::new(3, 0.0).resolve(0.0), None);
        assert_eq!(SlideOffsets::new(3, 400.0).resolve(f32::NAN), None);
    }

    #[test]
    fn nearest_rounds_and_clamps() {
        let offsets = SlideOffsets::new(3, 400.0);
        assert_eq!(offsets.nearest(-50.0), Some(0));
        assert_eq!(offsets.nearest(199.0), Some(0));
        assert_eq!(offsets.nearest(201.0), Some(1));
        assert_eq!(offsets.nearest(5_000.0), Some(2));
    }

    #[test]
    fn resize_rebuilds_boundaries() {
        let mut offsets = SlideOffsets::new(3, 400.0);
        assert!(offsets.set_slide_width(500.0));
        assert!(!offsets.set_slide_width(500.0));
        assert_eq!(offsets.offset_of(2), Some(1000.0));
        assert_eq!(offsets.resolve(800.0), None);
    }

    #[test]
    fn relative_x_spans_zero_to_one() {
        let offsets = SlideOffsets::new(5, 100.0);
        assert_eq!(offsets.relative_x(0), 0.0);
        assert_eq!(offsets.relative_x(2), 0.5);
        assert_eq!(offsets.relative_x(4), 1.0);
        assert_eq!(SlideOffsets::new(1, 100.0).relative_x(0), 0.0);
    }
}
