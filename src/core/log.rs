use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

const OP_WIDTH_MAX: usize = 60;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Colour used for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "import" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" | "vacuum" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, shortened to the column limit.
fn op_target_text(row: &LogRow) -> String {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if full.chars().count() > OP_WIDTH_MAX {
        let mut s: String = full.chars().take(OP_WIDTH_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

/// One printable line; only the operation word is coloured.
fn format_row(row: &LogRow, id_w: usize, date_w: usize, op_w: usize) -> String {
    let text = op_target_text(row);
    let color = color_for_operation(&row.operation);

    let colored = match text.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(text.as_str()).to_string(),
    };
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        row.id, row.date, colored, padding, row.message
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows: Vec<LogRow> = load_log(conn)?
            .into_iter()
            .map(|mut r| {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&r.date) {
                    r.date = dt.format("%FT%T%:z").to_string();
                }
                r
            })
            .collect();

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| op_target_text(r).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");
        for r in &rows {
            println!("{}", format_row(r, id_w, date_w, op_w));
        }

        Ok(())
    }
}
