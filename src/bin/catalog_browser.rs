//! Terminal front end for the product catalog
//!
//! One-shot mode applies the flag-given actions and prints the table.
//! `--interactive` opens a line editor that accepts browser commands
//! (`help` lists them) and re-renders after every action.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::filter::{Directive, ParseError};
use unicode_width::UnicodeWidthStr;

use product_catalog::command::HELP;
use product_catalog::{
    BrowserConfig, Catalog, CatalogBrowser, CatalogView, Command, ConfigLoader, Dataset,
    ProductRow, RowTone, SelectionAction, SortColumn,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "catalog_browser", about = "Browse, filter and sort a product catalog")]
struct Args {
    /// Configuration file (YAML)
    #[arg(long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset file (.json, .yaml); overrides the configured one
    #[arg(long)]
    data: Option<PathBuf>,

    /// Search product names
    #[arg(short, long)]
    query: Option<String>,

    /// Show only products owned by this user id
    #[arg(short, long)]
    user: Option<u32>,

    /// Restrict to these category ids (repeatable)
    #[arg(short, long = "category")]
    categories: Vec<u32>,

    /// Click a column's sort control (repeat to cycle direction)
    #[arg(short, long = "sort")]
    sort_clicks: Vec<SortColumn>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Start the interactive browser
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loader = match &args.config {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::from_env(),
    };
    let mut config = loader.load()?;
    if args.data.is_some() {
        config.data = args.data.clone();
    }
    if args.no_color {
        config.color = false;
    }

    init_tracing(&config);
    if let Some(enabled) = color_override(&config) {
        colored::control::set_override(enabled);
    }

    let dataset = match &config.data {
        Some(path) => Dataset::load(path)?,
        None => Dataset::sample()?,
    };
    let catalog = Catalog::join(dataset).context("Dataset failed integrity checks")?;
    let mut browser = CatalogBrowser::new(catalog);

    for action in initial_actions(&args) {
        browser.dispatch(action)?;
    }

    if args.interactive {
        run_interactive(&mut browser, &config)
    } else {
        print_view(browser.view(), &config, args.format)
    }
}

fn init_tracing(config: &BrowserConfig) {
    let (directive, rejected) = log_directive(&config.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = rejected {
        warn!(
            "Invalid log_filter {:?} ({}), falling back to warn",
            config.log_filter, err
        );
    }
}

/// `None` leaves colour to `colored`'s NO_COLOR and terminal detection
fn color_override(config: &BrowserConfig) -> Option<bool> {
    (!config.color).then_some(false)
}

/// Parse the configured directive, falling back to `warn` on error
fn log_directive(filter: &str) -> (Directive, Option<ParseError>) {
    match filter.parse::<Directive>() {
        Ok(directive) => (directive, None),
        Err(err) => (tracing::Level::WARN.into(), Some(err)),
    }
}

fn initial_actions(args: &Args) -> Vec<SelectionAction> {
    let mut actions = Vec::new();
    if let Some(query) = &args.query {
        actions.push(SelectionAction::SetQuery(query.clone()));
    }
    if let Some(user) = args.user {
        actions.push(SelectionAction::SelectOwner(user));
    }
    actions.extend(
        args.categories
            .iter()
            .map(|&id| SelectionAction::ToggleCategory(id)),
    );
    actions.extend(
        args.sort_clicks
            .iter()
            .map(|&column| SelectionAction::ClickSort(column)),
    );
    actions
}

fn run_interactive(browser: &mut CatalogBrowser, config: &BrowserConfig) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    print_panel(browser);
    print_table(browser.view(), config);

    loop {
        let line = match editor.readline("catalog> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Show) => {
                print_panel(browser);
                print_table(browser.view(), config);
            }
            Ok(Command::Action(action)) => match browser.dispatch(action) {
                Ok(view) => print_table(view, config),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            },
            Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
        }
    }

    Ok(())
}

fn print_view(view: &CatalogView, config: &BrowserConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(view, config),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}

/// Filter panel: owner tabs, search field and category chips
fn print_panel(browser: &CatalogBrowser) {
    let view = browser.view();

    let tabs: Vec<String> = view
        .owner_tabs
        .iter()
        .map(|tab| {
            let label = match tab.owner {
                Some(id) => format!("{}:{}", id, tab.label),
                None => tab.label.clone(),
            };
            if tab.is_active {
                format!("[{}]", label).bold().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("Users:      {}", tabs.join("  "));

    println!("Search:     {:?}", browser.selection().query);

    let all = if view.all_categories_outlined {
        "All".to_string()
    } else {
        "[All]".green().bold().to_string()
    };
    let chips: Vec<String> = view
        .category_chips
        .iter()
        .map(|chip| {
            let label = format!("{}:{}", chip.category, chip.label);
            if chip.is_selected {
                format!("[{}]", label).cyan().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("Categories: {}  {}", all, chips.join("  "));
    println!();
}

fn print_table(view: &CatalogView, config: &BrowserConfig) {
    if view.no_results {
        println!("{}", config.empty_message);
        return;
    }

    let rows = view.rows();
    let headers: Vec<String> = view
        .columns
        .iter()
        .map(|header| format!("{} {}", header.label, header.indicator.arrow()))
        .collect();

    let widths = [
        column_width(&rows, &headers[0], |row| row.id.to_string()),
        column_width(&rows, &headers[1], |row| row.name.clone()),
        column_width(&rows, &headers[2], |row| row.category.clone()),
        column_width(&rows, &headers[3], |row| row.user.clone()),
    ];

    let header_line: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(header, w)| pad(header, w))
        .collect();
    println!("{}", header_line.join(" | ").bold());

    for row in &rows {
        let user = pad(&row.user, widths[3]);
        let user = match row.tone {
            RowTone::Link => user.blue(),
            RowTone::Danger => user.red(),
        };
        println!(
            "{} | {} | {} | {}",
            pad(&row.id.to_string(), widths[0]).bold(),
            pad(&row.name, widths[1]),
            pad(&row.category, widths[2]),
            user
        );
    }
}

/// Widest cell in terminal columns; emoji icons take two
fn column_width(
    rows: &[ProductRow],
    header: &str,
    cell: impl Fn(&ProductRow) -> String,
) -> usize {
    rows.iter()
        .map(|row| cell(row).width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_only_ever_forced_off() {
        assert_eq!(color_override(&BrowserConfig::default()), None);

        let config = BrowserConfig {
            color: false,
            ..BrowserConfig::default()
        };
        assert_eq!(color_override(&config), Some(false));
    }

    #[test]
    fn test_log_directive_accepts_valid_filter() {
        let (directive, rejected) = log_directive("product_catalog=debug");
        assert!(rejected.is_none());
        assert_eq!(directive.to_string(), "product_catalog=debug");
    }

    #[test]
    fn test_log_directive_reports_invalid_filter() {
        let (directive, rejected) = log_directive("product_catalog=loud");
        assert!(rejected.is_some());
        assert_eq!(directive.to_string(), "warn");
    }

    #[test]
    fn test_pad_counts_emoji_as_double_width() {
        let cell = pad("🍏 - Fruits", 14);
        assert_eq!(cell.width(), 14);
        assert_eq!(cell, "🍏 - Fruits   ");
        assert_eq!(pad("Milk", 6), "Milk  ");
    }

    #[test]
    fn test_category_column_aligns_with_icons() {
        let catalog = Catalog::join(Dataset::sample().unwrap()).unwrap();
        let browser = CatalogBrowser::new(catalog);
        let rows = browser.view().rows();
        let width = column_width(&rows, "Category", |row| row.category.clone());

        for row in &rows {
            assert_eq!(pad(&row.category, width).width(), width);
        }
    }
}
