use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Observable state cell with whole-value replacement.
///
/// `State<T>` is cheap to clone; clones share the same value, so a scroll
/// subscription or event handler can hold one while the owning view holds
/// another. Changes go through [`State::set`] or [`State::replace`], which
/// swap in a complete new value, and mark the cell dirty so the host knows
/// to re-render.
///
/// # Example
///
/// ```
/// use assetdesk_core::{Selection, State};
///
/// let selection = State::new(Selection::new());
/// selection.replace(|s| s.cleared());
/// assert!(selection.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = value;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Replace the value with one derived from the previous value.
    ///
    /// The previous value is never visible half-updated. If `f` panics the
    /// value is left as it was, and later writes still go through.
    pub fn replace<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&guard);
        *guard = next;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = State::new(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
        assert!(a.is_dirty());
    }

    #[test]
    fn test_writes_survive_panicking_replace() {
        let state = State::new(1);
        let other = state.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            other.replace(|_| panic!("replace closure failed"))
        }));
        assert!(result.is_err());
        assert_eq!(state.get(), 1);

        state.replace(|v| v + 1);
        assert_eq!(state.get(), 2);
        state.set(5);
        assert_eq!(state.with(|v| *v), 5);
    }

    #[test]
    fn test_replace_and_clear_dirty() {
        let s = State::new(vec![1, 2]);
        s.replace(|v| v.iter().map(|x| x * 10).collect());
        assert_eq!(s.with(|v| v.clone()), vec![10, 20]);
        s.clear_dirty();
        assert!(!s.is_dirty());
    }
}
