//! Windowing, selection, and filtering primitives for long record tables.
//!
//! A host view owns its records and passes them through [`filter::apply`],
//! then hands the displayed list to a [`Selection`] and a
//! [`WindowedList`]. Only the visible slice is rendered, through a callback
//! supplied by the host.

pub mod filter;
pub mod record;
pub mod scroll;
pub mod selection;
pub mod state;
pub mod window;

pub use filter::{CategoryFilter, FilterCriteria, Filterable, SearchMode};
pub use record::{record_id, Record};
pub use scroll::{ScrollRequest, SubscriptionId, Viewport};
pub use selection::{HeaderCheckbox, Selection, SelectionView};
pub use state::State;
pub use window::{compute_window, VisibleWindow, WindowConfig, WindowError, WindowedList};

pub mod prelude {
    pub use crate::filter::{self, CategoryFilter, FilterCriteria, Filterable, SearchMode};
    pub use crate::record::{record_id, Record};
    pub use crate::scroll::{ScrollRequest, Viewport};
    pub use crate::selection::{HeaderCheckbox, Selection};
    pub use crate::state::State;
    pub use crate::window::{WindowConfig, WindowedList};
}
