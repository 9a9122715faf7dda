//! Scroll state for windowed views.
//!
//! This module provides:
//! - `Viewport`: offset, viewport height, and content height, with clamping
//! - `ScrollRequest`: actions that can be queued on a viewport
//! - scroll subscriptions: hosts register callbacks that receive every new
//!   offset, so nothing in the core needs a handle to a rendering surface

use std::fmt;

// =============================================================================
// ScrollRequest
// =============================================================================

/// Actions that can be requested on a viewport.
///
/// A queued request is applied by [`Viewport::process_request`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// Scroll by a relative amount (positive = down, negative = up).
    Delta(f64),
    /// Scroll to an absolute offset.
    ToOffset(f64),
    /// Scroll the minimum distance that makes row `index` fully visible.
    IntoView(usize),
    /// Scroll up by one viewport.
    PageUp,
    /// Scroll down by one viewport.
    PageDown,
    /// Scroll to top.
    Home,
    /// Scroll to bottom.
    End,
}

/// Handle returned by [`Viewport::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ScrollCallback = Box<dyn FnMut(f64)>;

// =============================================================================
// Viewport
// =============================================================================

/// Scroll position of a viewport over a scroll track.
///
/// Unlike the windowing math, the viewport clamps its offset into
/// `[0, content_height - viewport]`. Hosts without native scroll physics feed
/// raw offsets through [`Viewport::set_offset`].
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use assetdesk_core::scroll::Viewport;
///
/// let seen = Rc::new(Cell::new(0.0));
/// let mut viewport = Viewport::new(600.0).with_content_height(21600.0);
///
/// let sink = Rc::clone(&seen);
/// viewport.subscribe(move |offset| sink.set(offset));
///
/// viewport.set_offset(900.0);
/// assert_eq!(seen.get(), 900.0);
/// ```
#[derive(Default)]
pub struct Viewport {
    offset: f64,
    viewport: f64,
    content_height: f64,
    /// Pending scroll request.
    request: Option<ScrollRequest>,
    subscribers: Vec<(SubscriptionId, ScrollCallback)>,
    next_subscription: u64,
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("offset", &self.offset)
            .field("viewport", &self.viewport)
            .field("content_height", &self.content_height)
            .field("request", &self.request)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Viewport {
    /// Create a viewport of the given visible height.
    pub fn new(viewport: f64) -> Self {
        Self {
            viewport: viewport.max(0.0),
            ..Default::default()
        }
    }

    /// Set the initial content height.
    pub fn with_content_height(mut self, content_height: f64) -> Self {
        self.content_height = content_height.max(0.0);
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Maximum scroll offset (content_height - viewport).
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport).max(0.0)
    }

    /// Current scroll progress (0.0 = top, 1.0 = bottom).
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0.0 { 0.0 } else { self.offset / max }
    }

    /// Whether content exceeds the viewport.
    pub fn can_scroll(&self) -> bool {
        self.content_height > self.viewport
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a callback invoked with the new offset whenever it changes.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(f64) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let offset = self.offset;
        for (_, callback) in &mut self.subscribers {
            callback(offset);
        }
    }

    /// Move to `offset`, clamped. Notifies subscribers if the offset changed.
    ///
    /// Returns true if the offset changed.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        let clamped = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        };
        if clamped == self.offset {
            return false;
        }
        log::trace!("[Viewport::set_offset] {} -> {}", self.offset, clamped);
        self.offset = clamped;
        self.notify();
        true
    }

    /// Set viewport height, re-clamping the offset.
    pub fn set_viewport(&mut self, viewport: f64) {
        self.viewport = viewport.max(0.0);
        self.set_offset(self.offset);
    }

    /// Set content height, re-clamping the offset.
    ///
    /// Called when the record list changes length.
    pub fn set_content_height(&mut self, content_height: f64) {
        self.content_height = content_height.max(0.0);
        self.set_offset(self.offset);
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Queue a request. A later request replaces an unprocessed one.
    pub fn request(&mut self, request: ScrollRequest) {
        self.request = Some(request);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.request(ScrollRequest::Delta(delta));
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.request(ScrollRequest::ToOffset(offset));
    }

    pub fn scroll_into_view(&mut self, index: usize) {
        self.request(ScrollRequest::IntoView(index));
    }

    pub fn page_up(&mut self) {
        self.request(ScrollRequest::PageUp);
    }

    pub fn page_down(&mut self) {
        self.request(ScrollRequest::PageDown);
    }

    pub fn home(&mut self) {
        self.request(ScrollRequest::Home);
    }

    pub fn end(&mut self) {
        self.request(ScrollRequest::End);
    }

    /// Take and clear the pending request.
    pub fn take_request(&mut self) -> Option<ScrollRequest> {
        self.request.take()
    }

    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }

    /// Apply the pending request, if any.
    ///
    /// `item_height` positions rows for `IntoView`. Returns true if the
    /// offset changed.
    pub fn process_request(&mut self, item_height: f64) -> bool {
        match self.take_request() {
            Some(request) => self.apply_request(request, item_height),
            None => false,
        }
    }

    /// Apply a request directly. Returns true if the offset changed.
    pub fn apply_request(&mut self, request: ScrollRequest, item_height: f64) -> bool {
        let target = match request {
            ScrollRequest::Delta(d) => self.offset + d,
            ScrollRequest::ToOffset(o) => o,
            ScrollRequest::IntoView(index) => {
                let y = index as f64 * item_height;
                if y < self.offset {
                    // Row above viewport
                    y
                } else if y + item_height > self.offset + self.viewport {
                    // Row below viewport
                    y + item_height - self.viewport
                } else {
                    self.offset
                }
            }
            ScrollRequest::PageUp => self.offset - self.viewport,
            ScrollRequest::PageDown => self.offset + self.viewport,
            ScrollRequest::Home => 0.0,
            ScrollRequest::End => self.max_offset(),
        };
        self.set_offset(target)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn viewport() -> Viewport {
        // 100 rows of 10
        Viewport::new(50.0).with_content_height(1000.0)
    }

    #[test]
    fn test_set_offset_clamps() {
        let mut v = viewport();
        assert!(v.set_offset(5000.0));
        assert_eq!(v.offset(), 950.0);
        assert!(v.set_offset(-10.0));
        assert_eq!(v.offset(), 0.0);
        assert!(!v.set_offset(f64::NAN));
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut v = viewport();
        let sink = Rc::clone(&seen);
        v.subscribe(move |o| sink.borrow_mut().push(o));

        v.set_offset(100.0);
        v.set_offset(100.0);
        v.set_offset(200.0);
        assert_eq!(*seen.borrow(), vec![100.0, 200.0]);
    }

    #[test]
    fn test_unsubscribe() {
        let seen = Rc::new(RefCell::new(0));
        let mut v = viewport();
        let sink = Rc::clone(&seen);
        let id = v.subscribe(move |_| *sink.borrow_mut() += 1);

        v.set_offset(10.0);
        assert!(v.unsubscribe(id));
        assert!(!v.unsubscribe(id));
        v.set_offset(20.0);
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_into_view_below_and_above() {
        let mut v = viewport();
        v.scroll_into_view(20);
        assert!(v.process_request(10.0));
        // Row 20 spans 200..210, so its bottom aligns with the viewport bottom
        assert_eq!(v.offset(), 160.0);

        v.scroll_into_view(3);
        assert!(v.process_request(10.0));
        assert_eq!(v.offset(), 30.0);

        v.scroll_into_view(5);
        assert!(!v.process_request(10.0));
    }

    #[test]
    fn test_paging_and_ends() {
        let mut v = viewport();
        v.page_down();
        v.process_request(10.0);
        assert_eq!(v.offset(), 50.0);
        v.end();
        v.process_request(10.0);
        assert_eq!(v.offset(), 950.0);
        v.page_down();
        assert!(!v.process_request(10.0));
        v.home();
        v.process_request(10.0);
        assert_eq!(v.offset(), 0.0);
        v.page_up();
        assert!(!v.process_request(10.0));
    }

    #[test]
    fn test_later_request_replaces_pending() {
        let mut v = viewport();
        v.scroll_by(30.0);
        v.scroll_to(400.0);
        assert!(v.has_request());
        v.process_request(10.0);
        assert_eq!(v.offset(), 400.0);
        assert!(!v.has_request());
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut v = viewport();
        v.set_offset(900.0);
        v.set_content_height(300.0);
        assert_eq!(v.offset(), 250.0);
        v.set_viewport(400.0);
        assert_eq!(v.offset(), 0.0);
        assert!(!v.can_scroll());
    }
}
