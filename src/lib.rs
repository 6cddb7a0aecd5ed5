//! Facade crate for the opportunity map scoring engine.
//!
//! This crate re-exports the core domain types and the two geospatial
//! routines that back the marketplace's map overlay: the opportunity grid
//! scorer and the competitor-exclusion circle generator.

#![forbid(unsafe_code)]

pub use oppmap_core::{
    DEFAULT_RING_POINTS, EARTH_RADIUS_MILES, GridCell, GridConfig, GridConfigError, Pin, PinError,
    cell_ring, circle_ring, exclusion_zone, haversine_miles, score_grid,
};
