//! `jfv fields`: the "all fields" and "duplicate fields" tabs.

use clap::{Args, ValueEnum};
use jfv_core::config::ViewConfig;
use jfv_core::{DisplayRow, FieldViews, FieldsPage, JiraSource, get_all_fields};

use crate::exit_codes::codes as exit_codes;

pub const ALL_FIELDS_CAPTION: &str = "List of Jira Fields in this Jira instance";
pub const DUPLICATES_CAPTION: &str = "List of Duplicate Jira Fields in this Jira instance";
pub const EMPTY_VIEW: &str = "No fields to display";
pub const EMPTY_DUPLICATES_VIEW: &str = "No duplicate fields";

const HEADERS: [&str; 5] = ["#", "Field Name", "Field ID", "Field Type", "Project Name"];

/// Which tab(s) to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    /// Every field matching the filter.
    All,
    /// Fields whose name is used more than once.
    Duplicates,
    /// Both tabs, one after the other.
    #[default]
    Both,
}

impl Tab {
    const fn shows_all(self) -> bool {
        matches!(self, Self::All | Self::Both)
    }

    const fn shows_duplicates(self) -> bool {
        matches!(self, Self::Duplicates | Self::Both)
    }
}

/// Arguments for `jfv fields`.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Filter by field name (case-insensitive substring)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Tab to print
    #[arg(long, value_enum, default_value_t = Tab::Both)]
    pub tab: Tab,

    /// Output format (text or json)
    #[arg(long, default_value = "false")]
    pub json: bool,
}

pub fn run_fields(source: &dyn JiraSource, view: &ViewConfig, args: &FieldsArgs) -> u8 {
    let filter = args
        .filter
        .clone()
        .unwrap_or_else(|| view.default_filter.clone());
    let page = FieldsPage::new().with_filter(filter).begin_load();
    let page = page.finish_load(get_all_fields(source));

    if let Some(error) = page.error() {
        super::output_error(args.json, "fetch_failed", error);
        return exit_codes::GENERIC_ERROR;
    }

    if args.json {
        println!("{}", render_json(&page.views(), args.tab));
    } else {
        print!("{}", render_page(&page, args.tab));
    }
    exit_codes::SUCCESS
}

/// Renders the selected tab(s) of `page` as text.
pub fn render_page(page: &FieldsPage, tab: Tab) -> String {
    let views = page.views();
    let mut out = String::new();

    if tab.shows_all() {
        out.push_str(ALL_FIELDS_CAPTION);
        out.push('\n');
        if !page.filter().is_empty() {
            out.push_str(&format!("Filter by Field Name: {}\n", page.filter()));
        }
        out.push_str(&render_body(&views.rows, EMPTY_VIEW));
    }

    if tab.shows_duplicates() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(DUPLICATES_CAPTION);
        out.push('\n');
        out.push_str(&render_body(&views.duplicate_rows, EMPTY_DUPLICATES_VIEW));
    }

    out
}

fn render_body(rows: &[DisplayRow], empty_view: &str) -> String {
    if rows.is_empty() {
        format!("{empty_view}\n")
    } else {
        render_table(rows)
    }
}

/// Renders rows as an aligned text table with a header line.
pub fn render_table(rows: &[DisplayRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.row_number.to_string(),
                row.name.clone(),
                row.key.clone(),
                row.field_type.clone(),
                row.project_name.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    let mut out = String::new();
    push_line(&mut out, &widths, HEADERS.iter().copied());
    push_line(&mut out, &widths, rule.iter().map(String::as_str));
    for line in &cells {
        push_line(&mut out, &widths, line.iter().map(String::as_str));
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize; 5], cells: impl Iterator<Item = &'a str>) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Renders the selected tab(s) as pretty JSON.
pub fn render_json(views: &FieldViews, tab: Tab) -> String {
    let rendered = match tab {
        Tab::All => serde_json::to_string_pretty(&views.rows),
        Tab::Duplicates => serde_json::to_string_pretty(&views.duplicate_rows),
        Tab::Both => serde_json::to_string_pretty(views),
    };
    rendered.unwrap_or_else(|_| "[]".to_string())
}
