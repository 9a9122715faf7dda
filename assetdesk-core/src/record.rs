//! Record identity.
//!
//! Selection is tracked by string id so it stays stable while the record
//! list is filtered, re-sorted, or refreshed.

/// An item with a stable, unique string id.
///
/// # Example
///
/// ```
/// use assetdesk_core::Record;
///
/// struct Pump {
///     id: String,
/// }
///
/// impl Record for Pump {
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
/// ```
pub trait Record {
    /// Return the record's unique id.
    fn id(&self) -> &str;
}

impl<T: Record + ?Sized> Record for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Key selector for any [`Record`].
///
/// Usable wherever a `Fn(&T) -> &str` key selector is expected.
pub fn record_id<T: Record + ?Sized>(record: &T) -> &str {
    record.id()
}
