//! Wall-clock helpers for footer copy.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year, from the browser clock in WASM builds.
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line, e.g. `© 2026 Jay Thakare`.
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}")
}
