// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sheetdex command-line interface.
//!
//! Every engine operation is a subcommand over one catalog. The catalog is
//! the bundled sample unless `--data` names a JSON file; that file is created
//! with the sample catalog on first use, and `show` writes view counts back
//! to it.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use sheetdex::{Filters, SortKey, SortOrder, DEFAULT_RELATED_LIMIT, DEFAULT_SUGGESTION_LIMIT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sheetdex",
    about = "Search, filter and rank a catalog of cheat sheets",
    version
)]
pub struct Cli {
    /// Catalog file (JSON array of sheets). Defaults to the bundled sample.
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Search options file (JSON, camelCase keys, every key optional)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default `tracing` directive for the chosen verbosity. `RUST_LOG` wins.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked fuzzy search
    Search {
        /// Search query (an empty query lists the catalog unscored)
        query: String,

        /// Ignore section titles and contents
        #[arg(long)]
        no_content: bool,

        /// Score title matches like any other field
        #[arg(long)]
        no_title_boost: bool,

        /// Minimum title similarity for a fuzzy title match (0.0 - 1.0)
        #[arg(long, value_name = "F")]
        threshold: Option<f64>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Autocomplete suggestions from titles, tags and categories
    Suggest {
        query: String,

        #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the catalog through filters and a sort
    List {
        /// Maximum number of sheets to show
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sheets related to the one with the given id
    Related {
        id: String,

        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show one sheet in full and count the view
    Show {
        id: String,

        /// Highlight these words in the section contents
        #[arg(long, value_name = "QUERY")]
        highlight: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Distinct categories, sorted
    Categories {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Distinct tags, sorted
    Tags {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Most viewed, liked and downloaded sheets
    Trending {
        #[arg(short, long, default_value_t = sheetdex::store::DEFAULT_TRENDING_LIMIT)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Mark the words of QUERY inside TEXT
    Highlight {
        query: String,
        text: String,

        /// Opening marker (defaults to a color on a TTY, "[" otherwise)
        #[arg(long)]
        open: Option<String>,

        /// Closing marker (defaults to a reset on a TTY, "]" otherwise)
        #[arg(long)]
        close: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only sheets in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Only sheets with any of these tags (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only sheets whose author name contains this text
    #[arg(long)]
    pub author: Option<String>,

    /// Created at or after (RFC 3339 or YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// Created at or before (RFC 3339 or YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,

    #[arg(long, value_name = "N")]
    pub min_views: Option<u64>,

    #[arg(long, value_name = "N")]
    pub min_likes: Option<u64>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Filters {
        Filters {
            category: self.category.clone(),
            tags: self.tags.clone(),
            author: self.author.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            min_views: self.min_views,
            min_likes: self.min_likes,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Sort key: title, author, category, created, updated, views, likes,
    /// downloads, popular, relevance (unknown keys sort by created)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// asc or desc
    #[arg(long, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
