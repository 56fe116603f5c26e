//! Text renderings of records, datasets and before/after pairs.

use crate::models::dataset::{Dataset, Row};
use crate::models::schema::{ColumnSchema, Field};
use crate::utils::colors::{
    GREEN, RED, colorize_dod, colorize_optional, colorize_progress, paint,
};
use crate::utils::table::{Column, Table, visible_width};

const WRAP_WIDTH: usize = 72;

fn cell(row: &Row, column: &str) -> String {
    row.get(column).unwrap_or("").to_string()
}

fn styled(schema: &ColumnSchema, column: &str, value: &str) -> String {
    if column == schema.column(Field::Progress) {
        colorize_progress(value)
    } else if column == schema.column(Field::DoD) {
        colorize_dod(value)
    } else {
        colorize_optional(value)
    }
}

/// Compact table over the most useful columns.
pub fn render_dataset(dataset: &Dataset, schema: &ColumnSchema) -> String {
    let fields = [
        (Field::Position, 8),
        (Field::Tier, 10),
        (Field::CriteriaRef, 12),
        (Field::Criteria, 40),
        (Field::Progress, 8),
        (Field::DoD, 12),
        (Field::Notes, 30),
    ];

    let mut table = Table::new(
        fields
            .iter()
            .map(|(f, w)| Column::new(schema.column(*f), *w))
            .collect(),
    );

    for r in dataset.rows() {
        table.add_row(
            fields
                .iter()
                .map(|(f, _)| {
                    let col = schema.column(*f);
                    styled(schema, col, &cell(&r.row, col))
                })
                .collect(),
        );
    }

    table.render()
}

/// One field per line, long values wrapped under their label.
pub fn render_record(row: &Row, headers: &[String], schema: &ColumnSchema) -> String {
    let label_w = headers.iter().map(|h| visible_width(h)).max().unwrap_or(0);
    let indent = " ".repeat(label_w + 3);
    let opts = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent("")
        .subsequent_indent(&indent);

    let mut out = String::new();
    for h in headers {
        let value = cell(row, h);
        let body = if value.contains('\n') || visible_width(&value) > WRAP_WIDTH {
            value
                .lines()
                .map(|l| textwrap::fill(l, &opts))
                .collect::<Vec<_>>()
                .join(&format!("\n{}", indent))
        } else {
            styled(schema, h, &value)
        };
        out.push_str(&format!("{:<w$} : {}\n", h, body, w = label_w));
    }
    out
}

/// Changed fields only, old value in red and new value in green.
pub fn render_diff(before: &Row, after: &Row, headers: &[String]) -> String {
    let mut out = String::new();
    for h in headers {
        let old = cell(before, h);
        let new = cell(after, h);
        if old == new {
            continue;
        }
        out.push_str(&format!("{}:\n", h));
        for l in old.lines() {
            out.push_str(&format!("  - {}\n", paint(l, RED)));
        }
        for l in new.lines() {
            out.push_str(&format!("  + {}\n", paint(l, GREEN)));
        }
    }
    if out.is_empty() {
        out.push_str("(no changes)\n");
    }
    out
}
