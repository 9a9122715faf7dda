//! Windowed list rendering.
//!
//! Only the slice of a long, uniformly sized list that intersects the
//! viewport (plus an overscan margin) is handed to the render callback, so
//! the cost of a frame is bounded by the viewport height rather than the
//! number of records.
//!
//! The window is a pure function of `(len, item_height, scroll_top,
//! container_height, overscan)`. Nothing is remembered between frames.

use std::ops::Range;

use thiserror::Error;

/// Extra rows rendered above and below the visible area by default.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Invalid window geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowError {
    #[error("item height must be a positive finite number, got {0}")]
    InvalidItemHeight(f64),
    #[error("container height must be a positive finite number, got {0}")]
    InvalidContainerHeight(f64),
}

// =============================================================================
// WindowConfig
// =============================================================================

/// Geometry of a windowed list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    item_height: f64,
    container_height: f64,
    overscan: usize,
}

impl WindowConfig {
    /// Create a config with the default overscan.
    ///
    /// Both heights must be positive and finite.
    pub fn new(item_height: f64, container_height: f64) -> Result<Self, WindowError> {
        if !(item_height.is_finite() && item_height > 0.0) {
            return Err(WindowError::InvalidItemHeight(item_height));
        }
        if !(container_height.is_finite() && container_height > 0.0) {
            return Err(WindowError::InvalidContainerHeight(container_height));
        }
        Ok(Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Set the number of extra rows rendered on each side.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Return a copy with a new viewport height (e.g. after a resize).
    pub fn with_container_height(self, container_height: f64) -> Result<Self, WindowError> {
        Self::new(self.item_height, container_height).map(|c| c.with_overscan(self.overscan))
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Number of rows needed to cover the viewport, rounded up.
    pub fn rows_per_viewport(&self) -> usize {
        (self.container_height / self.item_height).ceil() as usize
    }
}

// =============================================================================
// VisibleWindow
// =============================================================================

/// The slice of rows to render and where to place it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    /// First rendered index (inclusive), overscan included.
    pub start_index: usize,
    /// Last rendered index (exclusive).
    pub end_index: usize,
    /// Translation of the rendered slice inside the scroll track.
    pub offset_y: f64,
    /// Logical height of the full scroll track.
    pub total_height: f64,
}

impl VisibleWindow {
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.end_index == self.start_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Compute the rendered window for a list of `len` rows at `scroll_top`.
///
/// `scroll_top` is not clamped to the content height: an offset past the end
/// yields a short or empty tail slice. Negative or non-finite offsets are
/// treated as zero.
pub fn compute_window(len: usize, config: &WindowConfig, scroll_top: f64) -> VisibleWindow {
    let scroll_top = if scroll_top.is_finite() && scroll_top > 0.0 {
        scroll_top
    } else {
        0.0
    };

    let start_index = (scroll_top / config.item_height).floor() as usize;
    let raw_end = start_index
        .saturating_add(config.rows_per_viewport())
        .saturating_add(config.overscan)
        .min(len);
    let visible_start = start_index.saturating_sub(config.overscan);

    VisibleWindow {
        start_index: visible_start,
        // Past the end the start can overtake the clamped end; keep the range well formed.
        end_index: raw_end.max(visible_start),
        offset_y: visible_start as f64 * config.item_height,
        total_height: len as f64 * config.item_height,
    }
}

// =============================================================================
// WindowedList
// =============================================================================

/// A borrowed list rendered through a window.
///
/// # Example
///
/// ```
/// use assetdesk_core::window::{WindowConfig, WindowedList};
///
/// let rows: Vec<u32> = (0..120).collect();
/// let config = WindowConfig::new(180.0, 600.0).unwrap();
/// let mut list = WindowedList::new(&rows, config);
///
/// list.on_scroll(900.0);
/// let rendered = list.render(|row, index| format!("{index}: {row}"));
/// assert_eq!(rendered.len(), 14);
/// assert_eq!(list.total_height(), 21600.0);
/// ```
#[derive(Debug, Clone)]
pub struct WindowedList<'a, T> {
    items: &'a [T],
    config: WindowConfig,
    scroll_top: f64,
}

impl<'a, T> WindowedList<'a, T> {
    pub fn new(items: &'a [T], config: WindowConfig) -> Self {
        Self {
            items,
            config,
            scroll_top: 0.0,
        }
    }

    /// Start at the given scroll offset.
    pub fn with_scroll_top(mut self, scroll_top: f64) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    /// Scroll callback: record the viewport's new offset.
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// The window for the current scroll offset.
    pub fn window(&self) -> VisibleWindow {
        compute_window(self.items.len(), &self.config, self.scroll_top)
    }

    /// Visible rows tagged with their absolute index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let window = self.window();
        let slice = self.items.get(window.range()).unwrap_or_default();
        slice
            .iter()
            .enumerate()
            .map(move |(i, item)| (window.start_index + i, item))
    }

    /// Invoke `render_item(item, index)` for every visible row, in order.
    pub fn render<R, F>(&self, mut render_item: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> R,
    {
        let window = self.window();
        log::trace!(
            "[WindowedList::render] rows {}..{} of {} (offset_y={})",
            window.start_index,
            window.end_index,
            self.items.len(),
            window.offset_y
        );
        self.visible()
            .map(|(index, item)| render_item(item, index))
            .collect()
    }

    pub fn total_height(&self) -> f64 {
        self.items.len() as f64 * self.config.item_height
    }

    pub fn offset_y(&self) -> f64 {
        self.window().offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(item: f64, container: f64, overscan: usize) -> WindowConfig {
        WindowConfig::new(item, container)
            .unwrap()
            .with_overscan(overscan)
    }

    #[test]
    fn test_rejects_invalid_heights() {
        assert_eq!(
            WindowConfig::new(0.0, 100.0),
            Err(WindowError::InvalidItemHeight(0.0))
        );
        assert_eq!(
            WindowConfig::new(10.0, -1.0),
            Err(WindowError::InvalidContainerHeight(-1.0))
        );
        assert!(WindowConfig::new(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_default_overscan() {
        assert_eq!(WindowConfig::new(10.0, 100.0).unwrap().overscan(), DEFAULT_OVERSCAN);
    }

    #[test]
    fn test_empty_list() {
        let w = compute_window(0, &config(20.0, 100.0, 5), 0.0);
        assert!(w.is_empty());
        assert_eq!(w.total_height, 0.0);
        assert_eq!(w.offset_y, 0.0);
    }

    #[test]
    fn test_top_of_list() {
        let w = compute_window(100, &config(20.0, 100.0, 5), 0.0);
        assert_eq!(w.range(), 0..10);
        assert_eq!(w.offset_y, 0.0);
    }

    #[test]
    fn test_middle_of_list() {
        // start 25, 5 rows fit, overscan 5 on each side
        let w = compute_window(100, &config(20.0, 100.0, 5), 500.0);
        assert_eq!(w.range(), 20..35);
        assert_eq!(w.offset_y, 400.0);
    }

    #[test]
    fn test_scroll_past_end_is_not_clamped() {
        let w = compute_window(10, &config(20.0, 100.0, 2), 10_000.0);
        assert!(w.is_empty());
        assert_eq!(w.start_index, 498);
        assert_eq!(w.total_height, 200.0);
    }

    #[test]
    fn test_negative_scroll_treated_as_zero() {
        let w = compute_window(50, &config(10.0, 50.0, 1), -120.0);
        assert_eq!(w.range(), 0..6);
    }

    #[test]
    fn test_visible_tags_absolute_indices() {
        let items: Vec<char> = "abcdefghij".chars().collect();
        let list = WindowedList::new(&items, config(1.0, 2.0, 1)).with_scroll_top(5.0);
        let visible: Vec<(usize, char)> = list.visible().map(|(i, c)| (i, *c)).collect();
        assert_eq!(visible, vec![(4, 'e'), (5, 'f'), (6, 'g'), (7, 'h')]);
    }

    #[test]
    fn test_with_container_height_keeps_overscan() {
        let c = config(10.0, 100.0, 3).with_container_height(40.0).unwrap();
        assert_eq!(c.overscan(), 3);
        assert_eq!(c.rows_per_viewport(), 4);
    }
}
