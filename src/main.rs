// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sheetdex::{
    advanced_search, apply_filters, highlight_terms, related_sheets, search_suggestions,
    sheet_matches, sort_sheets, JsonFilePersistence, MemoryPersistence, Persistence,
    SearchOptions, SearchOutcome, Sheet, SheetStore,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, paint, Role};
use cli::{Cli, Commands, FilterArgs, OutputArgs, SortArgs};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = match &cli.config {
        Some(path) => SearchOptions::load(path)
            .with_context(|| format!("loading search options from {}", path.display()))?,
        None => SearchOptions::default(),
    };

    match &cli.data {
        Some(path) => {
            let store = SheetStore::open(JsonFilePersistence::new(path))
                .with_context(|| format!("opening catalog {}", path.display()))?;
            dispatch(store, cli.command, options)
        }
        None => {
            let store = SheetStore::open(MemoryPersistence::new()).context("loading sample catalog")?;
            dispatch(store, cli.command, options)
        }
    }
}

fn dispatch<P: Persistence>(
    mut store: SheetStore<P>,
    command: Commands,
    options: SearchOptions,
) -> Result<()> {
    debug!(sheets = store.sheets().len(), "catalog ready");

    match command {
        Commands::Search {
            query,
            no_content,
            no_title_boost,
            threshold,
            limit,
            filters,
            sort,
            output,
        } => {
            let mut options = options;
            if no_content {
                options = options.with_content(false);
            }
            if no_title_boost {
                options = options.with_title_boost(false);
            }
            if let Some(threshold) = threshold {
                options = options.with_fuzzy_threshold(threshold);
            }
            let outcome = advanced_search(store.sheets(), &query, &options);
            run_search(outcome, &filters, &sort, limit, output)
        }

        Commands::Suggest { query, limit, output } => {
            let suggestions = search_suggestions(store.sheets(), &query, limit);
            print_strings(&suggestions, output)
        }

        Commands::List {
            limit,
            filters,
            sort,
            output,
        } => {
            let filtered = apply_filters(store.sheets(), &filters.to_filters());
            let mut sheets = match sort.sort {
                Some(key) => sort_sheets(&filtered, key, sort.order),
                None => filtered,
            };
            if let Some(limit) = limit {
                sheets.truncate(limit);
            }
            print_sheets("Sheets", &sheets, output)
        }

        Commands::Related { id, limit, output } => {
            let reference = store
                .get(&id)
                .with_context(|| format!("no cheat sheet with id '{}'", id))?;
            let related = related_sheets(reference, store.sheets(), limit);
            if output.json {
                return print_json(&related);
            }
            display::section_top(&format!("Related to {}", reference.title));
            if related.is_empty() {
                display::row(" nothing related");
            }
            for (i, r) in related.iter().enumerate() {
                if i > 0 {
                    display::section_mid();
                }
                let prefix = format!("{} ", paint(Role::Accent, &format!("+{}", r.relation_score)));
                display::sheet_rows(&r.sheet, &prefix);
            }
            display::section_bot();
            Ok(())
        }

        Commands::Show { id, highlight, output } => {
            store.increment_views(&id)?;
            let sheet = store
                .get(&id)
                .with_context(|| format!("no cheat sheet with id '{}'", id))?;
            if output.json {
                return print_json(sheet);
            }
            print_sheet_detail(sheet, highlight.as_deref());
            Ok(())
        }

        Commands::Categories { output } => print_strings(&store.categories(), output),
        Commands::Tags { output } => print_strings(&store.tags(), output),

        Commands::Trending { limit, output } => {
            print_sheets("Trending", &store.trending(limit), output)
        }

        Commands::Highlight {
            query,
            text,
            open,
            close,
        } => {
            let (default_open, default_close) = display::highlight_markers();
            let open = open.unwrap_or(default_open);
            let close = close.unwrap_or(default_close);
            println!("{}", highlight_terms(&text, &query, &open, &close));
            Ok(())
        }
    }
}

/// Filter, optionally re-sort, and print a search outcome.
fn run_search(
    outcome: SearchOutcome,
    filters: &FilterArgs,
    sort: &SortArgs,
    limit: usize,
    output: OutputArgs,
) -> Result<()> {
    let filters = filters.to_filters();
    match outcome {
        SearchOutcome::Unscored(sheets) => {
            let filtered = apply_filters(&sheets, &filters);
            let mut sheets = match sort.sort {
                Some(key) => sort_sheets(&filtered, key, sort.order),
                None => filtered,
            };
            sheets.truncate(limit);
            print_sheets("Sheets", &sheets, output)
        }
        SearchOutcome::Ranked(results) => {
            let filtered: Vec<_> = results
                .into_iter()
                .filter(|r| sheet_matches(&r.sheet, &filters))
                .collect();
            let mut results = match sort.sort {
                Some(key) => sort_sheets(&filtered, key, sort.order),
                None => filtered,
            };
            results.truncate(limit);

            if output.json {
                return print_json(&results);
            }
            display::section_top(&format!("{} results", results.len()));
            if results.is_empty() {
                display::row(" no matches");
            }
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    display::section_mid();
                }
                let prefix = format!("{} ", display::score_value(result.search_score));
                display::sheet_rows(&result.sheet, &prefix);
                if !result.search_matches.is_empty() {
                    let labels: Vec<String> =
                        result.search_matches.iter().map(display::match_label).collect();
                    display::row(&format!("   {}", labels.join(" ")));
                }
            }
            display::section_bot();
            Ok(())
        }
    }
}

fn print_sheets(label: &str, sheets: &[Sheet], output: OutputArgs) -> Result<()> {
    if output.json {
        return print_json(sheets);
    }
    display::section_top(&format!("{} ({})", label, sheets.len()));
    if sheets.is_empty() {
        display::row(" no sheets");
    }
    for (i, sheet) in sheets.iter().enumerate() {
        if i > 0 {
            display::section_mid();
        }
        display::sheet_rows(sheet, "");
    }
    display::section_bot();
    Ok(())
}

fn print_sheet_detail(sheet: &Sheet, highlight: Option<&str>) {
    let (open, close) = display::highlight_markers();

    display::section_top(&sheet.title);
    display::sheet_rows(sheet, "");
    if !sheet.description.is_empty() {
        display::row(&format!("   {}", display::truncate(&sheet.description, display::BOX_WIDTH - 4)));
    }
    display::section_bot();

    for section in &sheet.sections {
        println!();
        println!("{}", paint(Role::Title, &section.title));
        let content = match highlight {
            Some(query) => highlight_terms(&section.content, query, &open, &close),
            None => section.content.clone(),
        };
        for line in content.lines() {
            println!("  {}", line);
        }
    }
}

fn print_strings(values: &[String], output: OutputArgs) -> Result<()> {
    if output.json {
        return print_json(values);
    }
    for (i, value) in values.iter().enumerate() {
        let index = paint(Role::Muted, &format!("{:>3}.", i + 1));
        println!("{} {}", index, paint(Role::Good, value));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", json);
    Ok(())
}
