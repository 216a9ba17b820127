use crate::prelude::*;
use core::fmt::Write;

/// Wraps a table or column name in double quotes so names that collide with
/// reserved words still parse. Embedded quotes are not escaped; names are
/// trusted identifiers.
pub fn quote_name(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Quotes every name, preserving order.
pub fn quote_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| quote_name(name.as_ref()))
        .collect()
}

/// Renders one parenthesised group of numbered placeholders.
///
/// `count` placeholders are numbered contiguously from the 1-based `start`:
/// `placeholders(3, 4)` yields `($4,$5,$6)`.
pub fn placeholders(count: usize, start: usize) -> String {
    let mut out = String::with_capacity(2 + count * 7);
    out.push('(');
    for offset in 0..count {
        if offset > 0 {
            out.push(',');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "${}", start + offset);
    }
    out.push(')');
    out
}

/// The current instant expressed in the given time zone.
///
/// Callers stamping audit columns use this with their configured zone so the
/// values they bind agree with what the database stores.
#[cfg(all(feature = "chrono", feature = "std"))]
pub fn current_time_in<Tz: chrono::TimeZone>(tz: &Tz) -> chrono::DateTime<Tz> {
    chrono::Utc::now().with_timezone(tz)
}
