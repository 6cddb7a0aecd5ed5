//! Test-only pin fixtures shared by unit tests and downstream crates.

use geo::Coord;

use crate::Pin;

/// Build a competitor pin at the given coordinates.
///
/// # Panics
/// Panics when the coordinates fail [`Pin::new`] validation; fixtures are
/// expected to use in-range values.
#[must_use]
pub fn competitor_pin(x: f64, y: f64) -> Pin {
    Pin::new(Coord { x, y }, "competitor").expect("fixture coordinates are valid")
}

/// A row of competitor pins marching east from the origin at the given
/// spacing in degrees.
///
/// # Panics
/// Panics when the spacing walks a pin outside the valid longitude range.
#[must_use]
pub fn competitor_row(count: usize, spacing_degrees: f64) -> Vec<Pin> {
    (0..count)
        .map(|i| competitor_pin((i as f64) * spacing_degrees, 0.0))
        .collect()
}
