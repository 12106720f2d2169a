//! Optical absorbance derived from an [`OpticalState`].
use crate::error::{OptResult, OptransError};
use crate::optical_state::{OpticalState, Transmissive};
use crate::params::check_finite;
use crate::utils::format_quantity;
use std::fmt::Display;

/// Factor relating absorbance to the attenuation exponent (`A = 0.43·β·X`).
pub const ABSORBANCE_FACTOR: f64 = 0.43;

/// Formula used for resolving the absorbance of an [`AbsorbanceValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AbsorbanceSource {
    /// the last assigned (or recomputed) value
    Literal,
    /// `-log10(1/T)` of a transmittance carried over from another state
    Transmittance,
    /// `0.43·β·X`
    BetaLength,
}

/// Capability of entities which have an absorbance in addition to a transmittance.
pub trait Absorbing: Transmissive {
    /// Resolves the absorbance.
    ///
    /// # Errors
    ///
    /// This function will return an error if the absorbance cannot be resolved.
    fn absorbance(&self) -> OptResult<f64>;
}

/// Absorbance of a sample together with the [`OpticalState`] it is derived from.
///
/// The state is an independent snapshot: changing the [`OpticalState`] an [`AbsorbanceValue`] was
/// created from does not affect it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsorbanceValue {
    state: OpticalState,
    absorbance: Option<f64>,
    from_transmittance: bool,
}
impl AbsorbanceValue {
    /// Creates a new [`AbsorbanceValue`].
    ///
    /// A `value` > 0.0 is assigned via [`AbsorbanceValue::set_absorbance`]. If a `transmissive` entity
    /// is given, its state is copied afterwards (see [`AbsorbanceValue::from_state`]).
    ///
    /// # Errors
    ///
    /// This function will return an error if `value` could not be assigned.
    pub fn new(value: f64, transmissive: Option<&dyn Transmissive>) -> OptResult<Self> {
        let mut absorbance = Self::default();
        if value > 0.0 {
            absorbance.set_absorbance(value)?;
        }
        if let Some(transmissive) = transmissive {
            absorbance.adopt(transmissive.optical_state());
        }
        Ok(absorbance)
    }
    /// Creates a new [`AbsorbanceValue`] from a directly given absorbance.
    ///
    /// # Errors
    ///
    /// See [`AbsorbanceValue::set_absorbance`].
    pub fn from_value(value: f64) -> OptResult<Self> {
        Self::new(value, None)
    }
    /// Creates a new [`AbsorbanceValue`] by copying the state of a [`Transmissive`] entity.
    ///
    /// β, μ, X and the intensities are copied. A non-zero transmittance of the source is carried
    /// over as literal value and marks this absorbance as derived from the transmittance.
    /// Afterwards β counts as known if the source could resolve it and X if it is non-zero.
    #[must_use]
    pub fn from_state<T: Transmissive + ?Sized>(transmissive: &T) -> Self {
        let mut absorbance = Self::default();
        absorbance.adopt(transmissive.optical_state());
        absorbance
    }
    fn adopt(&mut self, state: &OpticalState) {
        let (state, carried) = state.reinterpret();
        self.state = state;
        if carried {
            self.from_transmittance = true;
        }
    }
    /// Returns the [`AbsorbanceSource`] used for resolving the absorbance.
    ///
    /// β·X wins whenever both are known, followed by a carried over transmittance.
    #[must_use]
    pub const fn source(&self) -> AbsorbanceSource {
        if self.state.has_beta() && self.state.has_length() {
            AbsorbanceSource::BetaLength
        } else if self.from_transmittance {
            AbsorbanceSource::Transmittance
        } else {
            AbsorbanceSource::Literal
        }
    }
    /// Resolves the absorbance.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no source is available and no value has been assigned.
    ///   - the transmittance it is derived from is not positive.
    pub fn absorbance(&self) -> OptResult<f64> {
        match self.source() {
            AbsorbanceSource::BetaLength => {
                Ok(ABSORBANCE_FACTOR * self.state.beta()? * self.state.length())
            }
            AbsorbanceSource::Transmittance => {
                let transmittance = self.state.transmittance()?;
                if transmittance <= 0.0 {
                    return Err(OptransError::InvalidParameter(format!(
                        "absorbance cannot be derived from transmittance {transmittance}"
                    )));
                }
                Ok(-transmittance.recip().log10())
            }
            AbsorbanceSource::Literal => self.absorbance.ok_or_else(|| {
                OptransError::UnresolvedQuantity(
                    "absorbance: neither a value nor any source is known".into(),
                )
            }),
        }
    }
    /// Assigns the absorbance.
    ///
    /// The absorption coefficient is back-derived as `value / (0.43·X)` and marked as known. The
    /// absorbance is no longer considered to be derived from a transmittance.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::InvalidParameter`] if
    ///   - the value is not finite.
    ///   - the path length is zero.
    pub fn set_absorbance(&mut self, value: f64) -> OptResult<()> {
        let value = check_finite("absorbance", value)?;
        let length = self.state.length();
        if length == 0.0 {
            return Err(OptransError::InvalidParameter(
                "absorption coefficient cannot be derived for a zero path length".into(),
            ));
        }
        self.state.set_beta(value / (ABSORBANCE_FACTOR * length))?;
        self.absorbance = Some(value);
        self.from_transmittance = false;
        Ok(())
    }
    /// Resolves the absorbance and stores it as cached value.
    ///
    /// # Errors
    ///
    /// See [`AbsorbanceValue::absorbance`].
    pub fn recompute(&mut self) -> OptResult<f64> {
        let absorbance = self.absorbance()?;
        self.absorbance = Some(absorbance);
        Ok(absorbance)
    }
    /// Returns the stored absorbance without resolving it.
    #[must_use]
    pub const fn cached_absorbance(&self) -> Option<f64> {
        self.absorbance
    }
    /// Returns `true` if the absorbance was built from a carried over transmittance.
    #[must_use]
    pub const fn is_from_transmittance(&self) -> bool {
        self.from_transmittance
    }
    /// Returns the [`OpticalState`] snapshot this absorbance is derived from.
    #[must_use]
    pub const fn state(&self) -> &OpticalState {
        &self.state
    }
    /// Returns the [`OpticalState`] snapshot for modification.
    pub fn state_mut(&mut self) -> &mut OpticalState {
        &mut self.state
    }
}
impl Transmissive for AbsorbanceValue {
    fn optical_state(&self) -> &OpticalState {
        &self.state
    }
}
impl Absorbing for AbsorbanceValue {
    fn absorbance(&self) -> OptResult<f64> {
        Self::absorbance(self)
    }
}
impl Display for AbsorbanceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.state)?;
        write!(f, "Absorbance = {}", format_quantity(&self.absorbance()))
    }
}
