//! Business location pins supplied to the grid scorer.

use geo::Coord;
use thiserror::Error;

/// A business location marker on the opportunity map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// metadata mirrors what listing sources provide: a display name, an
/// optional aggregate rating, and the source the pin was imported from.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use oppmap_core::Pin;
///
/// # fn main() -> Result<(), oppmap_core::PinError> {
/// let pin = Pin::new(Coord { x: -122.42, y: 37.77 }, "Mission Barbers")?;
/// assert_eq!(pin.name, "Mission Barbers");
/// assert!(pin.rating.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pin {
    /// Geospatial position.
    pub location: Coord,
    /// Display name of the business.
    pub name: String,
    /// Aggregate review rating, when the listing source provides one.
    pub rating: Option<f32>,
    /// Listing source the pin was imported from.
    pub source: Option<String>,
}

/// Errors returned by [`Pin::new`].
#[derive(Debug, Error, PartialEq)]
pub enum PinError {
    /// A coordinate component was NaN or infinite.
    #[error("pin coordinates must be finite")]
    NonFiniteCoordinate,
    /// Latitude fell outside the valid range.
    #[error("pin latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside the valid range.
    #[error("pin longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Pin {
    /// Validates and constructs a [`Pin`] without rating or source metadata.
    ///
    /// # Errors
    /// Returns [`PinError`] when either coordinate component is non-finite
    /// or outside the WGS84 range.
    pub fn new(location: Coord, name: impl Into<String>) -> Result<Self, PinError> {
        validate_location(location)?;
        Ok(Self {
            location,
            name: name.into(),
            rating: None,
            source: None,
        })
    }

    /// Attach an aggregate review rating.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use oppmap_core::Pin;
    ///
    /// let pin = Pin::new(Coord { x: 0.0, y: 0.0 }, "Cafe")
    ///     .map(|p| p.with_rating(4.5))
    ///     .unwrap();
    /// assert_eq!(pin.rating, Some(4.5));
    /// ```
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach the name of the listing source the pin came from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Validate a WGS84 coordinate pair.
///
/// Shared by [`Pin::new`] and callers that accept a bare map center.
///
/// # Errors
/// Returns [`PinError`] when either component is non-finite or outside the
/// WGS84 range.
pub fn validate_location(location: Coord) -> Result<(), PinError> {
    if !location.x.is_finite() || !location.y.is_finite() {
        return Err(PinError::NonFiniteCoordinate);
    }
    if !(-90.0..=90.0).contains(&location.y) {
        return Err(PinError::LatitudeOutOfRange(location.y));
    }
    if !(-180.0..=180.0).contains(&location.x) {
        return Err(PinError::LongitudeOutOfRange(location.x));
    }
    Ok(())
}
