//! Command-line front-end for inspecting an icon tree.
//!
//! Shares the index and filter logic with the web gallery so results match
//! what the browser shows for the same assets.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use icons_core::loader::{self, DiscoveredAsset, LoadOptions};
use icons_core::{
    Category, CategoryAxis, CategoryCombine, CategoryScheme, FilterState, FontTier, IconIndex,
    LoadError, display_name_for,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read image {}: {message}", path.display())]
    Image { path: PathBuf, message: String },
    #[error("unknown {axis} category '{value}'")]
    UnknownCategory { axis: &'static str, value: String },
}

#[derive(Debug, Parser)]
#[command(name = "icons-cli", version, about = "Inspect and search an icon tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Folder naming scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// Every folder is a service category
    Single,
    /// `a_` folders are services, `b_` folders are resources
    #[default]
    Split,
}

impl From<SchemeArg> for CategoryScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Single => CategoryScheme::Single,
            SchemeArg::Split => CategoryScheme::split(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every icon in master order, grouped by folder
    Index {
        root: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        scheme: SchemeArg,
        #[arg(long)]
        json: bool,
    },
    /// List the selectable categories per axis
    Categories {
        root: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        scheme: SchemeArg,
    },
    /// Filter icons by text and category
    Search {
        root: PathBuf,
        /// Case-insensitive text matched against filename and display name
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value = "All")]
        service: String,
        #[arg(long, default_value = "All")]
        resource: String,
        /// Match either category instead of both when two are given
        #[arg(long)]
        union: bool,
        #[arg(long, value_enum, default_value_t)]
        scheme: SchemeArg,
        #[arg(long)]
        json: bool,
    },
    /// Show derived details for a single image file
    Info { file: PathBuf },
    /// Print the discovered `(path, url)` catalog as JSON
    Manifest {
        root: PathBuf,
        #[arg(long, default_value = "icons")]
        url_prefix: String,
    },
}

/// Run a parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Index { root, scheme, json } => {
            let index = load_index(&root, scheme.into())?;
            if json {
                write_json(out, index.icons())?;
            } else {
                print_grouped(out, &index)?;
            }
        }
        Command::Categories { root, scheme } => {
            let index = load_index(&root, scheme.into())?;
            print_categories(out, &index)?;
        }
        Command::Search {
            root,
            query,
            service,
            resource,
            union,
            scheme,
            json,
        } => {
            let index = load_index(&root, scheme.into())?;
            let state = build_filter(&index, query, &service, &resource, union)?;
            let results = index.filter(&state);
            tracing::debug!(matches = results.len(), total = index.len(), "search finished");
            if json {
                write_json(out, &results)?;
            } else {
                for icon in &results {
                    writeln!(out, "{}/{}", icon.folder, icon.filename)?;
                }
                writeln!(out, "{} icon(s) found", results.len())?;
            }
        }
        Command::Info { file } => {
            let report = inspect(&file)?;
            write_json(out, &report)?;
        }
        Command::Manifest { root, url_prefix } => {
            let assets = discover(&root, &url_prefix)?;
            write_json(out, &assets)?;
        }
    }
    Ok(())
}

fn discover(root: &Path, url_prefix: &str) -> Result<Vec<DiscoveredAsset>, CliError> {
    let options = LoadOptions::default().with_url_prefix(url_prefix);
    let assets = loader::discover(root, &options)?;
    tracing::info!(root = %root.display(), count = assets.len(), "discovered assets");
    Ok(assets)
}

fn load_index(root: &Path, scheme: CategoryScheme) -> Result<IconIndex, CliError> {
    let assets = discover(root, "")?;
    Ok(IconIndex::build(
        assets.into_iter().map(|a| (a.path, a.url)),
        scheme,
    ))
}

/// Validate category arguments against the index and build the filter.
fn build_filter(
    index: &IconIndex,
    query: String,
    service: &str,
    resource: &str,
    union: bool,
) -> Result<FilterState, CliError> {
    let combine = if union {
        CategoryCombine::Union
    } else {
        CategoryCombine::Intersect
    };
    let mut state = FilterState::for_scheme(index.scheme())
        .with_search(query)
        .with_combine(combine)
        .with_service(known_category(index, CategoryAxis::Service, service)?);

    if index.scheme().is_split() {
        state = state.with_resource(known_category(index, CategoryAxis::Resource, resource)?);
    } else if resource != Category::All.key() {
        return Err(CliError::UnknownCategory {
            axis: CategoryAxis::Resource.title(),
            value: resource.to_string(),
        });
    }
    Ok(state)
}

fn known_category(index: &IconIndex, axis: CategoryAxis, value: &str) -> Result<Category, CliError> {
    let category = Category::parse(value);
    if index.categories(axis).contains(&category) {
        Ok(category)
    } else {
        Err(CliError::UnknownCategory {
            axis: axis.title(),
            value: value.to_string(),
        })
    }
}

fn print_grouped(out: &mut impl Write, index: &IconIndex) -> Result<(), CliError> {
    for (folder, icons) in index.folders() {
        writeln!(out, "{}/ ({})", folder, icons.len())?;
        for icon in icons {
            writeln!(out, "  {:<40} {}", icon.filename, icon.display_name)?;
        }
    }
    writeln!(out, "{} icon(s) total", index.len())?;
    Ok(())
}

fn print_categories(out: &mut impl Write, index: &IconIndex) -> Result<(), CliError> {
    for axis in index.scheme().axes() {
        writeln!(out, "{}:", axis.title())?;
        for category in index.categories(*axis) {
            let count = category.folder().map(|f| index.folder(f).len()).unwrap_or(index.len());
            writeln!(out, "  {:<32} {:<32} {}", category.key(), category.label(), count)?;
        }
    }
    Ok(())
}

/// Derived details for one image file.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AssetReport {
    pub folder: Option<String>,
    pub filename: String,
    pub display_name: String,
    pub font_size: &'static str,
    pub width: usize,
    pub height: usize,
}

/// Read an image's dimensions and compute the values the gallery derives from
/// its path.
pub fn inspect(file: &Path) -> Result<AssetReport, CliError> {
    let size = imagesize::size(file).map_err(|e| CliError::Image {
        path: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = file
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned());
    let display_name = display_name_for(&filename);

    Ok(AssetReport {
        font_size: FontTier::for_name(&display_name).css_size(),
        folder,
        filename,
        display_name,
        width: size.width,
        height: size.height,
    })
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

