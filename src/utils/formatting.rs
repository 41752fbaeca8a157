//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amount with two decimals and the configured currency symbol.
pub fn money(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

/// `HHh MMm`, e.g. `07h 45m`, for shift listings.
pub fn secs2readable(secs: i64) -> String {
    let abs_s = secs.max(0);
    format!("{:02}h {:02}m", abs_s / 3600, (abs_s % 3600) / 60)
}

/// Repeat the first char of `separator` `width` times.
pub fn rule(separator: &str, width: usize) -> String {
    separator
        .chars()
        .next()
        .unwrap_or('-')
        .to_string()
        .repeat(width)
}
