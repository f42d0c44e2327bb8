//! Read-side definitions.
//!
//! Pure transformations over a fetched content snapshot: nothing here
//! performs I/O or mutates its input.

pub mod listing;
pub mod neighborhood;
pub mod project;

/// Checks whether the provided criterion string means "any".
fn is_any(criterion: &str) -> bool {
    let criterion = criterion.trim();
    criterion.is_empty() || criterion.eq_ignore_ascii_case("all")
}
