//! Custom Askama template filters.

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}
