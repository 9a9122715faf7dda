//! Table view: one dashboard table's records, filter, selection, and scroll.

use std::fmt;

use assetdesk_core::filter::{self, CategoryFilter, FilterCriteria, Filterable, SearchMode};
use assetdesk_core::{
    record_id, HeaderCheckbox, Record, ScrollRequest, Selection, State, Viewport, VisibleWindow,
    WindowConfig, WindowError, WindowedList,
};

use super::row::{render_header, TableRow};

/// Host state for one table.
///
/// The displayed list is derived on demand from the records and the current
/// [`FilterCriteria`]; nothing caches it. Criteria, selection, and scroll
/// offset live in [`State`] cells, so the view knows when it needs a redraw.
/// The scroll offset is fed by a [`Viewport`] subscription.
///
/// # Example
///
/// ```
/// use assetdesk_cli::views::TableView;
/// use assetdesk_core::WindowConfig;
/// use assetdesk_lib::model::{Asset, AssetStatus};
///
/// let assets = vec![
///     Asset::new("a-1", "Feed pump", "Pump", "Line 1"),
///     Asset::new("a-2", "Boiler", "Boiler", "Plant room").with_status(AssetStatus::Offline),
/// ];
/// let mut view = TableView::new(assets, WindowConfig::new(1.0, 10.0).unwrap());
/// view.set_search("pump");
/// view.click("a-1", false);
///
/// let frame = view.frame();
/// assert_eq!(frame.rows.len(), 1);
/// assert_eq!(frame.selected_count, 1);
/// ```
pub struct TableView<T: Filterable> {
    records: Vec<T>,
    /// Bumped whenever `records` is replaced.
    epoch: u64,
    criteria: State<FilterCriteria<T::Category>>,
    selection: State<Selection>,
    scroll_top: State<f64>,
    viewport: Viewport,
    window: WindowConfig,
}

impl<T> TableView<T>
where
    T: TableRow + Filterable,
    T::Category: Clone,
{
    pub fn new(records: Vec<T>, window: WindowConfig) -> Self {
        let scroll_top = State::new(0.0);
        let mut viewport = Viewport::new(window.container_height());
        let sink = scroll_top.clone();
        viewport.subscribe(move |offset| sink.set(offset));

        let mut view = Self {
            records,
            epoch: 0,
            criteria: State::default(),
            selection: State::default(),
            scroll_top,
            viewport,
            window,
        };
        view.sync_content_height();
        view
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Snapshot counter of the record list.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn criteria(&self) -> FilterCriteria<T::Category> {
        self.criteria.get()
    }

    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn window_config(&self) -> &WindowConfig {
        &self.window
    }

    /// Records that pass the filter, in display order.
    pub fn displayed(&self) -> Vec<&T> {
        self.criteria
            .with(|criteria| filter::apply(&self.records, criteria))
    }

    /// Replace the record list wholesale.
    ///
    /// Starts a new snapshot and drops selected ids that no longer exist.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.epoch += 1;

        let epoch = self.epoch;
        let records = &self.records;
        self.selection
            .replace(|selection| selection.reconcile(records, record_id::<T>, epoch));

        log::debug!(
            "[TableView::set_records] {} records, epoch {}",
            self.records.len(),
            epoch
        );
        self.sync_content_height();
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn set_search(&mut self, term: &str) {
        self.update_criteria(|criteria| criteria.clone().with_search(term));
    }

    pub fn set_category(&mut self, category: CategoryFilter<T::Category>) {
        self.update_criteria(|criteria| criteria.clone().with_category(category));
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.update_criteria(|criteria| criteria.clone().with_mode(mode));
    }

    /// Swap in new criteria, then drop selected ids the new filter hides so
    /// the header checkbox and the rows agree.
    fn update_criteria<F>(&mut self, f: F)
    where
        F: FnOnce(&FilterCriteria<T::Category>) -> FilterCriteria<T::Category>,
    {
        self.criteria.replace(f);

        let shown = self.displayed();
        let epoch = self.epoch;
        self.selection
            .replace(|selection| selection.reconcile(&shown, record_id::<&T>, epoch));

        self.sync_content_height();
    }

    /// Keep the scroll track in step with the displayed row count.
    fn sync_content_height(&mut self) {
        let shown = self.displayed().len();
        self.viewport
            .set_content_height(shown as f64 * self.window.item_height());
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Row checkbox click; `extend_range` is Shift held.
    ///
    /// Ranges follow the displayed order.
    pub fn click(&self, id: &str, extend_range: bool) {
        let shown = self.displayed();
        self.selection
            .replace(|selection| selection.toggle(id, extend_range, &shown, record_id::<&T>));
    }

    /// Header checkbox: select every displayed record.
    pub fn select_all(&self) {
        let shown = self.displayed();
        self.selection
            .replace(|selection| selection.select_all(&shown, record_id::<&T>));
    }

    pub fn clear_selection(&self) {
        self.selection.replace(Selection::cleared);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.with(|selection| selection.is_selected(id))
    }

    pub fn header(&self) -> HeaderCheckbox {
        let shown = self.displayed();
        self.selection
            .with(|selection| selection.view(&shown, record_id::<&T>).header())
    }

    /// Displayed records that are selected, in display order.
    pub fn selected_records(&self) -> Vec<&T> {
        let shown = self.displayed();
        self.selection.with(|selection| {
            selection
                .view(&shown, record_id::<&T>)
                .selected_records()
                .into_iter()
                .copied()
                .collect()
        })
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Raw scroll event from the host. Returns true if the offset moved.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.viewport.set_offset(offset)
    }

    pub fn scroll(&mut self, request: ScrollRequest) -> bool {
        self.viewport
            .apply_request(request, self.window.item_height())
    }

    /// Scroll the displayed record `id` into view.
    ///
    /// Returns `None` if the record is not displayed.
    pub fn scroll_to_record(&mut self, id: &str) -> Option<bool> {
        let index = self.displayed().iter().position(|r| r.id() == id)?;
        Some(self.scroll(ScrollRequest::IntoView(index)))
    }

    /// Change the visible height (terminal resize).
    pub fn resize(&mut self, viewport_height: f64) -> Result<(), WindowError> {
        self.window = self.window.with_container_height(viewport_height)?;
        self.viewport.set_viewport(viewport_height);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Whether filter, selection, or scroll changed since the last frame.
    pub fn needs_render(&self) -> bool {
        self.criteria.is_dirty() || self.selection.is_dirty() || self.scroll_top.is_dirty()
    }

    /// Render the visible rows.
    pub fn frame(&self) -> TableFrame {
        let shown = self.displayed();
        let columns = T::columns();
        let scroll_top = self.scroll_top.get();

        let (rows, window, checkbox, selected_count) = self.selection.with(|selection| {
            let list = WindowedList::new(&shown, self.window).with_scroll_top(scroll_top);
            let rows = list.render(|record, _| {
                record.render_row(&columns, selection.is_selected(record.id()))
            });
            let view = selection.view(&shown, record_id::<&T>);
            (rows, list.window(), view.header(), view.selected_count())
        });

        self.criteria.clear_dirty();
        self.selection.clear_dirty();
        self.scroll_top.clear_dirty();

        TableFrame {
            header: render_header(&columns, checkbox),
            checkbox,
            rows,
            window,
            scroll_top,
            selected_count,
            shown_count: shown.len(),
            record_count: self.records.len(),
        }
    }
}

/// One rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    pub header: String,
    pub checkbox: HeaderCheckbox,
    /// Rendered rows, starting at `window.start_index`.
    pub rows: Vec<String>,
    pub window: VisibleWindow,
    pub scroll_top: f64,
    pub selected_count: usize,
    /// Records passing the filter.
    pub shown_count: usize,
    pub record_count: usize,
}

impl fmt::Display for TableFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(
            f,
            "rows {}..{} of {} shown ({} total), offset_y {}, total_height {}, scroll {}",
            self.window.start_index,
            self.window.end_index,
            self.shown_count,
            self.record_count,
            self.window.offset_y,
            self.window.total_height,
            self.scroll_top
        )?;
        write!(f, "selected {} ({:?})", self.selected_count, self.checkbox)
    }
}
