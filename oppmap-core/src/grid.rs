//! The opportunity grid scorer.
//!
//! The overlay tessellates a square around the map center into a grid of
//! sample cells and scores each one by its distance to the nearest
//! competitor pin. Cells inside a competitor's exclusion radius score zero;
//! beyond it the score ramps linearly to 100 at the saturation distance.
//! The computation is pure: same pins, center, and configuration always
//! produce the same cells.

use geo::{Coord, LineString};
use thiserror::Error;

use crate::Pin;
use crate::distance::{degrees_of_latitude, degrees_of_longitude, haversine_miles};

/// Default number of cells per grid side.
pub const DEFAULT_RESOLUTION: usize = 10;

/// Default half-width of the scored square, in miles (a 3-mile-wide area).
pub const DEFAULT_HALF_WIDTH_MILES: f64 = 1.5;

/// Default competitor-exclusion radius, in miles.
pub const DEFAULT_EXCLUSION_RADIUS_MILES: f64 = 0.5;

/// Default distance at which the score saturates at 100, in miles.
pub const DEFAULT_SATURATION_MILES: f64 = 1.5;

/// Geometry and scoring parameters for the opportunity grid.
///
/// [`GridConfig::default`] reproduces the overlay's stock parameters: a
/// 10×10 grid over a 3-mile-wide square, a half-mile exclusion radius, and
/// saturation at a mile and a half.
///
/// # Examples
/// ```
/// use oppmap_core::GridConfig;
///
/// # fn main() -> Result<(), oppmap_core::GridConfigError> {
/// let config = GridConfig::new(20, 1.5, 0.5, 1.5)?;
/// assert_eq!(config.resolution, 20);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Cells per grid side; the scorer emits `resolution²` cells.
    pub resolution: usize,
    /// Half the side length of the scored square, in miles.
    pub half_width_miles: f64,
    /// Radius around each pin within which cells score zero, in miles.
    pub exclusion_radius_miles: f64,
    /// Distance at which the score reaches 100, in miles.
    pub saturation_miles: f64,
}

/// Errors returned by [`GridConfig::new`].
#[derive(Debug, Error, PartialEq)]
pub enum GridConfigError {
    /// The grid must contain at least one cell per side.
    #[error("grid resolution must be at least 1")]
    ZeroResolution,
    /// A distance parameter was NaN or infinite.
    #[error("grid distances must be finite")]
    NonFiniteDistance,
    /// The scored square must have positive extent.
    #[error("grid half-width must be positive, got {0}")]
    NonPositiveHalfWidth(f64),
    /// Radii may not be negative.
    #[error("grid radii must be non-negative, got {0}")]
    NegativeRadius(f64),
}

impl GridConfig {
    /// Validates and constructs a [`GridConfig`].
    ///
    /// A configuration where the exclusion radius equals or exceeds the
    /// saturation distance is accepted; every cell outside an exclusion
    /// zone then scores 100.
    ///
    /// # Errors
    /// Returns [`GridConfigError`] for a zero resolution, non-finite
    /// distances, a non-positive half-width, or negative radii.
    pub fn new(
        resolution: usize,
        half_width_miles: f64,
        exclusion_radius_miles: f64,
        saturation_miles: f64,
    ) -> Result<Self, GridConfigError> {
        if resolution == 0 {
            return Err(GridConfigError::ZeroResolution);
        }
        for distance in [half_width_miles, exclusion_radius_miles, saturation_miles] {
            if !distance.is_finite() {
                return Err(GridConfigError::NonFiniteDistance);
            }
        }
        if half_width_miles <= 0.0 {
            return Err(GridConfigError::NonPositiveHalfWidth(half_width_miles));
        }
        for radius in [exclusion_radius_miles, saturation_miles] {
            if radius < 0.0 {
                return Err(GridConfigError::NegativeRadius(radius));
            }
        }
        Ok(Self {
            resolution,
            half_width_miles,
            exclusion_radius_miles,
            saturation_miles,
        })
    }

    /// Construct the default configuration with a custom resolution.
    ///
    /// # Errors
    /// Returns [`GridConfigError::ZeroResolution`] when `resolution` is 0.
    pub fn with_resolution(resolution: usize) -> Result<Self, GridConfigError> {
        Self::new(
            resolution,
            DEFAULT_HALF_WIDTH_MILES,
            DEFAULT_EXCLUSION_RADIUS_MILES,
            DEFAULT_SATURATION_MILES,
        )
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            half_width_miles: DEFAULT_HALF_WIDTH_MILES,
            exclusion_radius_miles: DEFAULT_EXCLUSION_RADIUS_MILES,
            saturation_miles: DEFAULT_SATURATION_MILES,
        }
    }
}

/// A scored sample cell of the opportunity grid.
///
/// Entirely derived data: cells are recomputed from the current pins on
/// every call and never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Sample point the cell was scored at.
    pub center: Coord,
    /// Opportunity score in `[0, 100]`; higher means fewer competitors nearby.
    pub score: f64,
    /// Distance to the nearest pin in miles; infinite when no pins exist.
    pub nearest_competitor_miles: f64,
    /// Whether the cell sits inside a competitor's exclusion radius.
    pub in_competitor_zone: bool,
}

/// Score the opportunity grid around `center` against the given pins.
///
/// Emits `resolution²` cells in row-major order, rows running south to
/// north and cells west to east within a row. Sample points are laid out
/// from the square's south-west corner in steps of `side / resolution`, so
/// the center of the square is itself sampled when the resolution is even.
///
/// With no pins every cell scores exactly 100 with an infinite nearest
/// distance. A cell closer to a pin than the exclusion radius scores zero
/// and is flagged; otherwise the score ramps linearly from 0 at the
/// exclusion radius to 100 at the saturation distance, clamped to
/// `[0, 100]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use oppmap_core::{GridConfig, score_grid};
///
/// let cells = score_grid(&[], Coord { x: 0.0, y: 0.0 }, &GridConfig::default());
/// assert_eq!(cells.len(), 100);
/// assert!(cells.iter().all(|c| c.score == 100.0));
/// ```
#[must_use]
pub fn score_grid(pins: &[Pin], center: Coord, config: &GridConfig) -> Vec<GridCell> {
    let half_lat = degrees_of_latitude(config.half_width_miles);
    let half_lng = degrees_of_longitude(config.half_width_miles, center.y);
    let resolution = config.resolution;
    let step_lat = 2.0 * half_lat / (resolution as f64);
    let step_lng = 2.0 * half_lng / (resolution as f64);

    let mut cells = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        let y = center.y - half_lat + (row as f64) * step_lat;
        for col in 0..resolution {
            let x = center.x - half_lng + (col as f64) * step_lng;
            let sample = Coord { x, y };
            let nearest = pins
                .iter()
                .map(|pin| haversine_miles(sample, pin.location))
                .fold(f64::INFINITY, f64::min);
            let (score, in_competitor_zone) = score_for_distance(nearest, config);
            cells.push(GridCell {
                center: sample,
                score,
                nearest_competitor_miles: nearest,
                in_competitor_zone,
            });
        }
    }
    cells
}

/// Map a nearest-pin distance onto the scoring ramp.
fn score_for_distance(nearest_miles: f64, config: &GridConfig) -> (f64, bool) {
    if nearest_miles < config.exclusion_radius_miles {
        return (0.0, true);
    }
    let ramp = config.saturation_miles - config.exclusion_radius_miles;
    if ramp <= 0.0 {
        // Degenerate configuration: exclusion swallows the ramp.
        return (100.0, false);
    }
    let score = (nearest_miles - config.exclusion_radius_miles) / ramp * 100.0;
    (score.clamp(0.0, 100.0), false)
}

/// The square outline of a grid cell, for choropleth rendering.
///
/// The ring is centred on the cell's sample point and spans one grid step,
/// closed like the rings from [`circle_ring`](crate::circle_ring).
#[must_use]
pub fn cell_ring(cell: &GridCell, config: &GridConfig) -> LineString {
    let half_lat = degrees_of_latitude(config.half_width_miles) / (config.resolution as f64);
    let half_lng =
        degrees_of_longitude(config.half_width_miles, cell.center.y) / (config.resolution as f64);
    let Coord { x, y } = cell.center;
    let south_west = Coord {
        x: x - half_lng,
        y: y - half_lat,
    };
    LineString::new(vec![
        south_west,
        Coord {
            x: x + half_lng,
            y: y - half_lat,
        },
        Coord {
            x: x + half_lng,
            y: y + half_lat,
        },
        Coord {
            x: x - half_lng,
            y: y + half_lat,
        },
        south_west,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{competitor_pin, competitor_row};
    use rstest::{fixture, rstest};

    #[fixture]
    fn origin() -> Coord {
        Coord { x: 0.0, y: 0.0 }
    }

    #[rstest]
    fn default_config_matches_overlay_constants() {
        let config = GridConfig::default();
        assert_eq!(config.resolution, 10);
        assert_eq!(config.half_width_miles, 1.5);
        assert_eq!(config.exclusion_radius_miles, 0.5);
        assert_eq!(config.saturation_miles, 1.5);
    }

    #[rstest]
    fn config_rejects_zero_resolution() {
        let result = GridConfig::new(0, 1.5, 0.5, 1.5);
        assert_eq!(result, Err(GridConfigError::ZeroResolution));
    }

    #[rstest]
    #[case(f64::NAN, 0.5, 1.5)]
    #[case(1.5, f64::INFINITY, 1.5)]
    #[case(1.5, 0.5, f64::NAN)]
    fn config_rejects_non_finite_distances(
        #[case] half_width: f64,
        #[case] exclusion: f64,
        #[case] saturation: f64,
    ) {
        let result = GridConfig::new(10, half_width, exclusion, saturation);
        assert_eq!(result, Err(GridConfigError::NonFiniteDistance));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn config_rejects_non_positive_half_width(#[case] half_width: f64) {
        let result = GridConfig::new(10, half_width, 0.5, 1.5);
        assert!(matches!(
            result,
            Err(GridConfigError::NonPositiveHalfWidth(_))
        ));
    }

    #[rstest]
    fn config_rejects_negative_radius() {
        let result = GridConfig::new(10, 1.5, -0.5, 1.5);
        assert!(matches!(result, Err(GridConfigError::NegativeRadius(_))));
    }

    #[rstest]
    fn config_accepts_degenerate_ramp() {
        assert!(GridConfig::new(10, 1.5, 2.0, 1.5).is_ok());
    }

    #[rstest]
    fn empty_pins_score_every_cell_fully(origin: Coord) {
        let cells = score_grid(&[], origin, &GridConfig::default());
        assert_eq!(cells.len(), 100);
        for cell in &cells {
            assert_eq!(cell.score, 100.0);
            assert!(!cell.in_competitor_zone);
            assert!(cell.nearest_competitor_miles.is_infinite());
        }
    }

    #[rstest]
    fn pin_at_center_zeroes_the_center_cell(origin: Coord) {
        let config = GridConfig::default();
        let cells = score_grid(&[competitor_pin(0.0, 0.0)], origin, &config);
        let center_cell = cells
            .iter()
            .min_by(|a, b| {
                a.nearest_competitor_miles
                    .total_cmp(&b.nearest_competitor_miles)
            })
            .expect("grid is non-empty");
        assert_eq!(center_cell.score, 0.0);
        assert!(center_cell.in_competitor_zone);
        assert!(center_cell.nearest_competitor_miles < 1e-9);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 4)]
    #[case(10, 100)]
    #[case(13, 169)]
    fn cell_count_is_resolution_squared(#[case] resolution: usize, #[case] expected: usize) {
        let config = GridConfig::with_resolution(resolution).expect("valid config");
        let cells = score_grid(&[], Coord { x: 0.0, y: 0.0 }, &config);
        assert_eq!(cells.len(), expected);
    }

    #[rstest]
    fn scores_stay_clamped_with_crowded_pins(origin: Coord) {
        let pins = competitor_row(5, 0.001);
        let cells = score_grid(&pins, origin, &GridConfig::default());
        assert!(cells.iter().all(|c| (0.0..=100.0).contains(&c.score)));
    }

    #[rstest]
    fn degenerate_ramp_scores_non_excluded_cells_fully(origin: Coord) {
        let config = GridConfig::new(4, 1.5, 1.5, 0.5).expect("valid config");
        let cells = score_grid(&[competitor_pin(0.0, 0.0)], origin, &config);
        for cell in &cells {
            if cell.in_competitor_zone {
                assert_eq!(cell.score, 0.0);
            } else {
                assert_eq!(cell.score, 100.0);
            }
        }
    }

    #[rstest]
    fn cells_are_emitted_row_major_south_to_north(origin: Coord) {
        let config = GridConfig::with_resolution(3).expect("valid config");
        let cells = score_grid(&[], origin, &config);
        for row in cells.chunks(3) {
            // Within a row latitude is constant and longitude increases.
            assert!(row.windows(2).all(|w| w[0].center.y == w[1].center.y));
            assert!(row.windows(2).all(|w| w[0].center.x < w[1].center.x));
        }
        let row_latitudes: Vec<f64> = cells.chunks(3).map(|row| row[0].center.y).collect();
        assert!(row_latitudes.windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    fn cell_ring_is_a_closed_square(origin: Coord) {
        let config = GridConfig::default();
        let cells = score_grid(&[], origin, &config);
        let ring = cell_ring(&cells[0], &config);
        assert_eq!(ring.0.len(), 5);
        assert_eq!(ring.0.first(), ring.0.last());
    }
}
