//! Paging state for the case-study swiper. The web frontend maps this onto
//! a translateX transform, button disabled states and pagination bullets.

/// Slides visible at once for a given viewport width (CSS pixels).
pub fn slides_per_view(viewport_width: f32) -> usize {
    if viewport_width < 640.0 {
        1
    } else if viewport_width < 1024.0 {
        2
    } else {
        3
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CarouselState {
    pub current: usize,
    pub total: usize,
    pub per_view: usize,
}

impl CarouselState {
    pub fn new(total: usize, viewport_width: f32) -> Self {
        Self {
            current: 0,
            total,
            per_view: slides_per_view(viewport_width),
        }
    }

    /// Last index the carousel can land on without showing empty space.
    fn max_index(&self) -> usize {
        self.total.saturating_sub(self.per_view)
    }

    /// Jump to `index`, clamped into the valid range.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.max_index());
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    /// Re-evaluate slides-per-view after a viewport resize, keeping the
    /// current index valid.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.per_view = slides_per_view(viewport_width);
        self.current = self.current.min(self.max_index());
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current >= self.max_index()
    }

    /// Offset for the wrapper track, in percent of one viewport.
    pub fn translate_percent(&self) -> f32 {
        self.current as f32 * (100.0 / self.per_view as f32)
    }
}
