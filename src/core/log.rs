use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Colour per audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" | "product_add" => Colour::Green,
        "clock_out" | "product_del" => Colour::Red,
        "break_start" | "break_end" => Colour::Yellow,
        "sale" => Colour::Cyan,
        "backup" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut `s` to `max` display columns, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if UnicodeWidthStr::width(out.as_str()) + 3 >= max {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                let colored = color_for_operation(&operation).paint(operation.as_str());
                let op_target = if target.is_empty() {
                    colored.to_string()
                } else {
                    format!("{} ({})", colored, target)
                };

                (id, date, op_target, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(strip_ansi(&r.2).as_str()))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        header("Internal log");

        for (id, date, op_target, message) in rows {
            // truncated entries are printed without colour
            let visible = truncate(&strip_ansi(&op_target), op_w);
            let shown = if visible == strip_ansi(&op_target) {
                op_target
            } else {
                visible.clone()
            };
            let padding = " ".repeat(op_w.saturating_sub(UnicodeWidthStr::width(visible.as_str())));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                shown,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
