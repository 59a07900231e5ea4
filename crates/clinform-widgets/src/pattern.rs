//! Date-pattern translation.
//!
//! Configured date formats use the server-side pattern dialect (`y` = year,
//! `M` = month, `d` = day, repetition controls width: `yyyy`, `MMM`, `MMMM`).
//! The client date picker and chrono each speak a different dialect, so the
//! resolved pattern gets translated before it reaches either of them.

/// Translates a server-side date pattern into the dialect understood by the
/// client date picker.
///
/// The checks are ordered and mutually exclusive by construction: the year
/// branch fires at most once, the month branch exactly once. Day tokens are
/// passed through untouched (the picker dialect agrees on `d`/`dd`), and so
/// is anything the translator does not recognize. Garbage in, garbage out.
pub fn to_picker_pattern(pattern: &str) -> String {
    let mut out = pattern.to_string();
    if out.contains("yyyy") {
        out = out.replace("yyyy", "yy"); // picker uses yy for 4-digit years
    } else if out.contains("yy") {
        out = out.replace("yy", "y"); // picker uses y for 2-digit years
    }
    if out.contains("MMMM") {
        out = out.replace("MMMM", "MM"); // picker uses MM for full month names
    } else if out.contains("MMM") {
        out = out.replace("MMM", "M"); // picker uses M for short month names
    } else if out.contains("MM") {
        out = out.replace("MM", "mm"); // picker uses mm for 2-digit months
    } else {
        out = out.replace('M', "m"); // picker uses m for months with no leading zero
    }
    out
}

/// Maps a server-side date pattern onto chrono's strftime dialect so a value
/// can be formatted for display with the configured pattern.
///
/// Scans the pattern in token runs: `yy` → `%y`, other `y` runs → `%Y`,
/// `MMMM` → `%B`, `MMM` → `%b`, `MM` → `%m`, `M` → `%-m`, `dd` → `%d`,
/// `d` → `%-d`, `EEEE` → `%A`, shorter `E` runs → `%a`. A literal `%` is
/// escaped; every other character is copied verbatim.
pub fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, 'y' | 'M' | 'd' | 'E') {
            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            out.push_str(strftime_token(c, run));
        } else if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
    out
}

fn strftime_token(field: char, run: usize) -> &'static str {
    match (field, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('E', n) if n >= 4 => "%A",
        _ => "%a",
    }
}
