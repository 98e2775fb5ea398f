//! Domain Services
//!
//! Rendering of query results and the query echo shown to the student.

use once_cell::sync::Lazy;
use platform::html::escape;
use regex::Regex;

use crate::domain::entities::{USER_DATA_COLUMNS, UserData};

static UNION_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bUNION\b").unwrap());

/// Render rows as the lesson's plain HTML table
///
/// Every value is HTML-escaped.
pub fn render_table(rows: &[UserData]) -> String {
    let mut out = String::from("<p>");
    if rows.is_empty() {
        out.push_str("Query Successful; however no data was returned from this query.");
    } else {
        for column in USER_DATA_COLUMNS {
            out.push_str(column);
            out.push_str(", ");
        }
        out.push_str("<br />");
        for row in rows {
            for value in row.values() {
                out.push_str(&escape(&value));
                out.push_str(", ");
            }
            out.push_str("<br />");
        }
    }
    out.push_str("</p>");
    out
}

/// Query text with `$n` placeholders replaced by the HTML-escaped values
///
/// Display only; the database always receives the parameters bound.
pub fn describe_query(query: &str, params: &[&str]) -> String {
    let mut described = query.to_string();
    // Highest index first so `$1` never clobbers the prefix of `$10`
    for (index, value) in params.iter().enumerate().rev() {
        described = described.replacen(&format!("${}", index + 1), &escape(value), 1);
    }
    described
}

/// True when the input contains a NUL and `UNION` appears before it
pub fn union_before_nul(input: &str) -> bool {
    match input.find('\0') {
        Some(nul) => UNION_KEYWORD.is_match(&input[..nul]),
        None => false,
    }
}
