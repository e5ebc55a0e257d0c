//! Headless command line front end.
//!
//! Every editing subcommand loads a document file, applies one edit and
//! writes the file back. Failed edits leave the file untouched. Files that
//! were written are recorded in the settings' recent files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};

use gridborder_core::Color;
use gridborder_designer::model::HighlightKind;
use gridborder_designer::ops::SideDeltas;
use gridborder_designer::{Cell, Document, LineKey, Orientation};
use gridborder_settings::{Config, SettingsManager};

#[derive(Debug, Parser)]
#[command(
    name = "gridborder",
    about = "Draw diagrams on the borders of a grid",
    version
)]
pub struct Cli {
    /// Settings file (.toml or .json). Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an empty document using the configured grid defaults.
    New(NewArgs),

    /// Print size, line counts and highlights of a document.
    Info(FileArg),

    /// Flood fill the closed region around a cell.
    Fill(CellArgs),

    /// Extend a segment to the nearest parallel segment on its line.
    Extend(SegmentArgs),

    /// Draw or erase every horizontal segment on a grid line.
    Row(BulkArgs),

    /// Draw or erase every vertical segment on a grid line.
    Column(BulkArgs),

    /// Color or clear a row or column highlight.
    Highlight(HighlightArgs),

    /// Resize the grid.
    Resize(ResizeArgs),

    /// List recently written documents, newest first.
    Recent,
}

#[derive(Debug, Args)]
pub struct FileArg {
    /// Document file in the JSON import/export format.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    /// Replace an existing file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CellArgs {
    pub file: PathBuf,
    pub x: i32,
    pub y: i32,
    /// Color to fill with, `#rrggbb`. Defaults to the document's color.
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Axis {
    #[value(name = "h")]
    Horizontal,
    #[value(name = "v")]
    Vertical,
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Orientation::Horizontal,
            Axis::Vertical => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Args)]
pub struct SegmentArgs {
    pub file: PathBuf,
    pub x: i32,
    pub y: i32,
    #[arg(value_enum)]
    pub axis: Axis,
}

#[derive(Debug, Args)]
pub struct BulkArgs {
    pub file: PathBuf,
    /// Grid line index.
    pub index: i32,
    #[arg(long)]
    pub erase: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HighlightTarget {
    Row,
    Col,
}

#[derive(Debug, Args)]
pub struct HighlightArgs {
    pub file: PathBuf,
    #[arg(value_enum)]
    pub target: HighlightTarget,
    pub index: i32,
    /// Highlight color, `#rrggbb`. Defaults to the document's color.
    #[arg(long, conflicts_with = "clear")]
    pub color: Option<String>,
    #[arg(long)]
    pub clear: bool,
}

#[derive(Debug, Args)]
pub struct ResizeArgs {
    pub file: PathBuf,
    /// New width, keeping the content centered.
    #[arg(long, requires = "height")]
    pub width: Option<i32>,
    #[arg(long, requires = "width")]
    pub height: Option<i32>,
    /// Rows to add (or remove, if negative) at the top.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub top: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub bottom: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub left: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub right: i32,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = load_settings(cli.config.as_deref())?;

    let saved = match cli.command {
        Commands::New(args) => {
            run_new(settings.config(), &args)?;
            Some(args.file)
        }
        Commands::Info(args) => {
            run_info(&args.file)?;
            None
        }
        Commands::Recent => {
            run_recent(settings.config());
            None
        }
        Commands::Fill(args) => {
            let saved = edit(&args.file, |doc| {
                if let Some(color) = &args.color {
                    doc.set_active_color(parse_color(color)?);
                }
                let region = doc.fill_at(Cell::new(args.x, args.y))?;
                println!(
                    "Filled {} cells bounded by {} segments",
                    region.cells,
                    region.borders.len()
                );
                Ok(())
            })?;
            saved.then_some(args.file)
        }
        Commands::Extend(args) => {
            let saved = edit(&args.file, |doc| {
                let added = doc.extend_line(LineKey::new(args.x, args.y, args.axis.into()))?;
                println!("Added {added} segments");
                Ok(())
            })?;
            saved.then_some(args.file)
        }
        Commands::Row(args) => {
            let saved = edit(&args.file, |doc| {
                let changed = if args.erase {
                    doc.erase_row(args.index)?
                } else {
                    doc.fill_row(args.index)?
                };
                println!("Changed {changed} segments");
                Ok(())
            })?;
            saved.then_some(args.file)
        }
        Commands::Column(args) => {
            let saved = edit(&args.file, |doc| {
                let changed = if args.erase {
                    doc.erase_column(args.index)?
                } else {
                    doc.fill_column(args.index)?
                };
                println!("Changed {changed} segments");
                Ok(())
            })?;
            saved.then_some(args.file)
        }
        Commands::Highlight(args) => {
            let saved = edit(&args.file, |doc| {
                let kind = match args.target {
                    HighlightTarget::Row => HighlightKind::Row,
                    HighlightTarget::Col => HighlightKind::Col,
                };
                if args.clear {
                    if !doc.remove_highlight(kind, args.index) {
                        println!("Nothing to clear");
                    }
                    return Ok(());
                }
                let color = match &args.color {
                    Some(text) => parse_color(text)?,
                    None => doc.active_color(),
                };
                doc.apply_highlight(kind, args.index, color)?;
                Ok(())
            })?;
            saved.then_some(args.file)
        }
        Commands::Resize(args) => {
            let saved = edit(&args.file, |doc| {
                let dropped = match (args.width, args.height) {
                    (Some(width), Some(height)) => doc.resize_to(width, height)?,
                    _ => doc.resize_sides(SideDeltas::new(
                        args.top,
                        args.bottom,
                        args.left,
                        args.right,
                    ))?,
                };
                println!(
                    "Grid is now {}x{}, {} segments dropped",
                    doc.width(),
                    doc.height(),
                    dropped
                );
                Ok(())
            })?;
            saved.then_some(args.file)
        }
    };

    if let Some(path) = saved {
        remember(&mut settings, &path);
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<SettingsManager> {
    match path {
        Some(path) => {
            let mut manager = SettingsManager::with_path(path);
            manager
                .load()
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            Ok(manager)
        }
        None => {
            let mut manager = SettingsManager::new()?;
            manager.load_or_default();
            Ok(manager)
        }
    }
}

/// Records `path` as the most recent document. A settings file that
/// cannot be written does not fail the command.
fn remember(settings: &mut SettingsManager, path: &Path) {
    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    settings.config_mut().add_recent_file(path);
    if let Err(err) = settings.save() {
        warn!(
            "Failed to update recent files in {}: {}",
            settings.path().display(),
            err
        );
    }
}

fn parse_color(text: &str) -> anyhow::Result<Color> {
    text.parse::<Color>()
        .with_context(|| format!("Invalid color '{text}'"))
}

fn run_new(config: &Config, args: &NewArgs) -> anyhow::Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists, pass --force to replace it",
            args.file.display()
        );
    }
    let mut grid = config.grid.clone();
    grid.width = args.width.unwrap_or(grid.width);
    grid.height = args.height.unwrap_or(grid.height);

    let document = grid.new_document()?;
    document.save_to_file(&args.file)?;
    info!(
        "Created {}x{} document at {}",
        document.width(),
        document.height(),
        args.file.display()
    );
    Ok(())
}

fn run_recent(config: &Config) {
    if config.recent_files.is_empty() {
        println!("No recent files");
        return;
    }
    for path in &config.recent_files {
        println!("{}", path.display());
    }
}

fn run_info(path: &Path) -> anyhow::Result<()> {
    let document = Document::load_from_file(path)?;
    let stats = document.statistics();

    println!("Size:        {}x{}", document.width(), document.height());
    println!("Color:       {}", document.active_color());
    println!(
        "Segments:    {} ({} horizontal, {} vertical)",
        stats.total, stats.horizontal, stats.vertical
    );
    if let Some(bounds) = stats.bounds {
        println!(
            "Extent:      ({}, {}) to ({}, {})",
            bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
        );
    }
    println!("Highlights:  {}", document.highlights().len());
    for highlight in document.highlights().iter() {
        let kind = match highlight.kind {
            HighlightKind::Row => "row",
            HighlightKind::Col => "col",
        };
        println!("  {kind} {} {}", highlight.index, highlight.color);
    }
    Ok(())
}

/// Loads `path`, applies `op` and saves the result only if `op` succeeded
/// and changed something. Returns whether the file was written.
fn edit<F>(path: &Path, op: F) -> anyhow::Result<bool>
where
    F: FnOnce(&mut Document) -> anyhow::Result<()>,
{
    let mut document = Document::load_from_file(path)?;
    let revision = document.revision();

    op(&mut document)?;

    if document.revision() == revision {
        debug!("No changes to {}", path.display());
        return Ok(false);
    }
    document.save_to_file(path)?;
    info!("Saved {}", path.display());
    Ok(true)
}
