//! Command line interface.

use std::path::PathBuf;
use std::str::FromStr;

use assetdesk_core::{CategoryFilter, Filterable, Record};
use assetdesk_lib::error::ParseLabelError;
use assetdesk_lib::Dataset;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::ViewConfig;
use crate::error::CliError;
use crate::views::{TableFrame, TableRow, TableView};

#[derive(Debug, Parser)]
#[command(name = "assetdesk", version)]
#[command(about = "Browse asset dashboard tables from a dataset file")]
pub struct Cli {
    /// View config file (default: config.json in the config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Mirror log output to stderr; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Equipment register (category: asset status)
    Assets(TableArgs),
    /// Maintenance tasks (category: priority)
    Tasks(TableArgs),
    /// Parts orders (category: order status)
    Orders(TableArgs),
    /// Notifications (category: priority)
    Notifications(TableArgs),
}

impl Command {
    pub fn args(&self) -> &TableArgs {
        match self {
            Command::Assets(args)
            | Command::Tasks(args)
            | Command::Orders(args)
            | Command::Notifications(args) => args,
        }
    }
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Dataset JSON file
    #[arg(long)]
    pub data: PathBuf,

    /// Category to show, or "all"
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Search term matched against the text columns
    #[arg(long, default_value = "")]
    pub search: String,

    /// Fuzzy search instead of substring
    #[arg(long)]
    pub fuzzy: bool,

    /// Scroll offset in lines
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub scroll: f64,

    /// Scroll so this record is visible (overrides --scroll)
    #[arg(long, value_name = "ID")]
    pub scroll_to: Option<String>,

    /// Visible height in lines
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long)]
    pub row_height: Option<f64>,

    #[arg(long)]
    pub overscan: Option<usize>,

    /// Toggle a record's checkbox; repeat for more
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Shift+click: extend from the last toggled record to this one
    #[arg(long, value_name = "ID")]
    pub range_to: Option<String>,

    /// Tick the header checkbox before any --select
    #[arg(long)]
    pub select_all: bool,
}

impl TableArgs {
    /// Apply flag overrides on top of the loaded config.
    pub fn view_config(&self, base: ViewConfig) -> ViewConfig {
        let mut config = base;
        if let Some(height) = self.height {
            config = config.with_viewport_height(height);
        }
        if let Some(row_height) = self.row_height {
            config = config.with_row_height(row_height);
        }
        if let Some(overscan) = self.overscan {
            config = config.with_overscan(overscan);
        }
        if self.fuzzy {
            config = config.with_fuzzy_search(true);
        }
        config
    }
}

/// Load the dataset and render the requested table.
pub fn run(cli: &Cli) -> Result<TableFrame, CliError> {
    let args = cli.command.args();
    let config = args.view_config(ViewConfig::load(cli.config.as_deref())?);
    let dataset = Dataset::from_path(&args.data)?;

    match &cli.command {
        Command::Assets(_) => show_table(dataset.assets, args, &config),
        Command::Tasks(_) => show_table(dataset.tasks, args, &config),
        Command::Orders(_) => show_table(dataset.parts_orders, args, &config),
        Command::Notifications(_) => show_table(dataset.notifications, args, &config),
    }
}

/// Replay the flags as user interactions on a fresh table view.
pub fn show_table<T>(
    records: Vec<T>,
    args: &TableArgs,
    config: &ViewConfig,
) -> Result<TableFrame, CliError>
where
    T: TableRow + Filterable,
    T::Category: Clone + FromStr<Err = ParseLabelError>,
{
    let mut view = TableView::new(records, config.window()?);
    view.set_category(CategoryFilter::parse(&args.category)?);
    view.set_search_mode(config.search_mode());
    view.set_search(&args.search);

    if args.select_all {
        view.select_all();
    }
    for id in &args.select {
        view.click(ensure_displayed(&view, id)?, false);
    }
    if let Some(id) = &args.range_to {
        view.click(ensure_displayed(&view, id)?, true);
    }

    match &args.scroll_to {
        Some(id) => {
            view.scroll_to_record(id)
                .ok_or_else(|| CliError::UnknownRecord(id.clone()))?;
        }
        None => {
            view.on_scroll(args.scroll);
        }
    }

    log::debug!(
        "[cli::show_table] {} of {} records shown",
        view.displayed().len(),
        view.records().len()
    );
    Ok(view.frame())
}

fn ensure_displayed<'a, T>(view: &TableView<T>, id: &'a str) -> Result<&'a str, CliError>
where
    T: TableRow + Filterable,
    T::Category: Clone,
{
    if view.displayed().iter().any(|r| r.id() == id) {
        Ok(id)
    } else {
        Err(CliError::UnknownRecord(id.to_string()))
    }
}
