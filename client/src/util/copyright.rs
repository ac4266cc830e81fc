//! Footer copyright line.

#[cfg(test)]
#[path = "copyright_test.rs"]
mod copyright_test;

/// Current calendar year in UTC.
#[must_use]
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} • All rights reserved.")
}
