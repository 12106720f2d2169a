//! Configuration option set used for constructing an [`OpticalState`](crate::OpticalState).
//!
//! The keys follow the usual short-hand of absorption measurements: `I` for the (incident, transmitted)
//! intensity pair, `B` for the absorption coefficient β, `X` for the optical path length and `Miu`
//! for the penetration depth μ.
use crate::error::{OptResult, OptransError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Pair of light intensities measured in front of and behind a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Intensity {
    incident: f64,
    transmitted: f64,
}
impl Intensity {
    /// Creates a new [`Intensity`] pair.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::InvalidParameter`] if
    ///   - the incident intensity is not positive (it is used as divisor of the intensity ratio).
    ///   - the transmitted intensity is negative.
    ///   - one of the values is not finite.
    pub fn new(incident: f64, transmitted: f64) -> OptResult<Self> {
        if !incident.is_finite() || !transmitted.is_finite() {
            return Err(OptransError::InvalidParameter(
                "intensities must be finite".into(),
            ));
        }
        if incident <= 0.0 {
            return Err(OptransError::InvalidParameter(
                "incident intensity must be > 0.0".into(),
            ));
        }
        if transmitted < 0.0 {
            return Err(OptransError::InvalidParameter(
                "transmitted intensity must be >= 0.0".into(),
            ));
        }
        Ok(Self {
            incident,
            transmitted,
        })
    }
    /// Returns the incident (initial) intensity.
    #[must_use]
    pub const fn incident(&self) -> f64 {
        self.incident
    }
    /// Returns the transmitted (final) intensity.
    #[must_use]
    pub const fn transmitted(&self) -> f64 {
        self.transmitted
    }
    /// Ratio of transmitted to incident intensity.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.transmitted / self.incident
    }
}
impl Default for Intensity {
    fn default() -> Self {
        Self {
            incident: 1.0,
            transmitted: 0.5,
        }
    }
}
impl TryFrom<&[f64]> for Intensity {
    type Error = OptransError;

    fn try_from(values: &[f64]) -> OptResult<Self> {
        match values {
            [incident, transmitted] => Self::new(*incident, *transmitted),
            _ => Err(OptransError::InvalidParameter(format!(
                "intensity pair must contain exactly 2 values, found {}",
                values.len()
            ))),
        }
    }
}
impl TryFrom<Vec<f64>> for Intensity {
    type Error = OptransError;

    fn try_from(values: Vec<f64>) -> OptResult<Self> {
        Self::try_from(values.as_slice())
    }
}
impl From<Intensity> for [f64; 2] {
    fn from(intensity: Intensity) -> Self {
        [intensity.incident, intensity.transmitted]
    }
}
impl Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.incident, self.transmitted)
    }
}

/// The set of explicitly supplied physical inputs of an [`OpticalState`](crate::OpticalState).
///
/// Every field left at `None` is treated as "not supplied". Values are validated when the
/// state is constructed, not here.
///
/// ## Example
/// ```rust
/// use optrans::OpticalParams;
/// let params = OpticalParams::default().with_beta(2.0).with_length(0.5);
/// assert_eq!(params.beta, Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpticalParams {
    /// (incident, transmitted) intensity pair
    #[serde(rename = "I", default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// absorption coefficient β
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// optical path length X
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// penetration depth μ
    #[serde(rename = "Miu", default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}
impl OpticalParams {
    /// Sets the (incident, transmitted) intensity pair.
    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }
    /// Sets the absorption coefficient β.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }
    /// Sets the optical path length X.
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }
    /// Sets the penetration depth μ.
    #[must_use]
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }
    /// Returns `true` if no input has been supplied at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.intensity.is_none()
            && self.beta.is_none()
            && self.length.is_none()
            && self.depth.is_none()
    }
}

pub(crate) fn check_finite(name: &str, value: f64) -> OptResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OptransError::InvalidParameter(format!(
            "{name} must be finite"
        )))
    }
}
pub(crate) fn check_length(length: f64) -> OptResult<f64> {
    if check_finite("path length", length)? < 0.0 {
        return Err(OptransError::InvalidParameter(
            "path length must be >= 0.0".into(),
        ));
    }
    Ok(length)
}
pub(crate) fn check_depth(depth: f64) -> OptResult<f64> {
    if check_finite("penetration depth", depth)? == 0.0 {
        return Err(OptransError::InvalidParameter(
            "penetration depth must not be zero".into(),
        ));
    }
    Ok(depth)
}
