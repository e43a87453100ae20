//! Formatting Helpers
//!
//! Date/money formatting and the status fragments pages drop into
//! containers while loading or after an action.

use askama::Template;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::surface::{write_html, Slot};

pub const CURRENCY: &str = "¥";

/// Calendar date (`YYYY-MM-DD`) of a timestamp; empty for empty or
/// unreadable input. Zoned timestamps are converted to UTC first.
pub fn format_date(input: Option<&str>) -> String {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    parse_date(input)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // Flask's jsonify renders datetimes as RFC 2822
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// `¥` followed by the amount with exactly two decimals; missing or
/// non-finite amounts count as zero.
pub fn format_money(amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    // Avoid "-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{}{:.2}", CURRENCY, round_half_away(amount))
}

/// `{:.2}` rounds exact ties to even; `toFixed` rounds them away from zero.
/// A binary value sits exactly on a cent tie only when it is an odd
/// multiple of 1/8, so only those are moved.
fn round_half_away(amount: f64) -> f64 {
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() < 9.0e15 && (eighths as i64) % 2 != 0 {
        (amount * 100.0).round() / 100.0
    } else {
        amount
    }
}

/// Leading decimal number of `text`, like `parseFloat`
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    let mantissa = &text[digits_start..end];
    if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    // Optional exponent, only taken when it has digits
    let mut exp_end = end;
    if matches!(bytes.get(exp_end), Some(b'e') | Some(b'E')) {
        exp_end += 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

// ========================
// Status fragments
// ========================

pub const LOADING_HTML: &str = r#"<div class="loading"></div>"#;

#[derive(Template)]
#[template(source = r#"<div class="{{ class }}">{{ message|safe }}</div>"#, ext = "html")]
struct Notice<'a> {
    class: &'a str,
    message: &'a str,
}

/// Message markup; the message is inserted as-is
pub fn notice_html(class: &str, message: &str) -> String {
    Notice { class, message }
        .render()
        .unwrap_or_else(|_| format!(r#"<div class="{}">{}</div>"#, class, message))
}

pub fn show_loading(slot: Option<&dyn Slot>) -> bool {
    write_html(slot, LOADING_HTML)
}

pub fn show_error(message: &str, slot: Option<&dyn Slot>) -> bool {
    write_html(slot, &notice_html("error-message", message))
}

pub fn show_success(message: &str, slot: Option<&dyn Slot>) -> bool {
    write_html(slot, &notice_html("success-message", message))
}
