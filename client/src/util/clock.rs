//! Wall-clock helpers for the footer.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

use crate::content::BRAND;

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Footer copyright line for `year`.
pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {BRAND}. Todos os direitos reservados.")
}
