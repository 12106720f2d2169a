//! Fractional absorbance (absorptance) of a sample.
use crate::absorbance::{Absorbing, AbsorbanceValue};
use crate::error::{OptResult, OptransError};
use crate::optical_state::{OpticalState, Transmissive};
use crate::params::check_finite;
use crate::utils::{format_quantity, optional};
use std::fmt::Display;

/// Absorbance input accepted when creating an [`AbsorptanceValue`].
pub enum AbsorbanceInput<'a> {
    /// a bare absorbance value
    Value(f64),
    /// an entity whose transmittance and absorbance are copied
    Object(&'a dyn Absorbing),
}

/// Fraction of the incident light absorbed by a sample, i.e. `1 - T`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsorptanceValue {
    absorbance: AbsorbanceValue,
    absorptance: Option<f64>,
}
impl AbsorptanceValue {
    /// Creates a new [`AbsorptanceValue`].
    ///
    /// A non-zero `value` is stored verbatim. An [`AbsorbanceInput::Value`] is assigned as
    /// absorbance, an [`AbsorbanceInput::Object`] is copied (see [`AbsorptanceValue::from_absorbance`]).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `value` is not finite.
    ///   - the absorbance could not be assigned or copied.
    pub fn new(value: f64, input: Option<AbsorbanceInput<'_>>) -> OptResult<Self> {
        let mut absorptance = Self::default();
        if value != 0.0 {
            absorptance.set_absorptance(value)?;
        }
        match input {
            Some(AbsorbanceInput::Value(absorbance)) => {
                absorptance.absorbance.set_absorbance(absorbance)?;
            }
            Some(AbsorbanceInput::Object(source)) => absorptance.adopt(source)?,
            None => {}
        }
        Ok(absorptance)
    }
    /// Creates a new [`AbsorptanceValue`] holding only the given value.
    ///
    /// # Errors
    ///
    /// This function will return an error if the value is not finite.
    pub fn from_value(value: f64) -> OptResult<Self> {
        Self::new(value, None)
    }
    /// Creates a new [`AbsorptanceValue`] by copying an [`Absorbing`] entity.
    ///
    /// The transmittance is copied first, the absorbance afterwards. Quantities the source cannot
    /// resolve are skipped.
    ///
    /// # Errors
    ///
    /// This function will return an error if the source reports an invalid parameter or one of
    /// the copied values cannot be assigned.
    pub fn from_absorbance<A: Absorbing + ?Sized>(source: &A) -> OptResult<Self> {
        let mut absorptance = Self::default();
        absorptance.adopt(source)?;
        Ok(absorptance)
    }
    fn adopt<A: Absorbing + ?Sized>(&mut self, source: &A) -> OptResult<()> {
        if let Some(transmittance) = optional(source.transmittance())? {
            self.absorbance
                .state_mut()
                .set_transmittance(transmittance)?;
        }
        if let Some(absorbance) = optional(source.absorbance())? {
            self.absorbance.set_absorbance(absorbance)?;
        }
        Ok(())
    }
    /// Resolves the absorptance.
    ///
    /// Returns `1 - T` whenever the transmittance resolves to a non-zero value, the stored value
    /// otherwise.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the transmittance is zero or unresolved and no value has been stored.
    ///   - the transmittance reports an invalid parameter.
    pub fn absorptance(&self) -> OptResult<f64> {
        match optional(self.absorbance.transmittance())? {
            Some(transmittance) if transmittance != 0.0 => Ok(1.0 - transmittance),
            _ => self.absorptance.ok_or_else(|| {
                OptransError::UnresolvedQuantity(
                    "absorptance: neither a value nor a non-zero transmittance is known".into(),
                )
            }),
        }
    }
    /// Stores the absorptance verbatim. No other quantity is touched.
    ///
    /// # Errors
    ///
    /// This function will return an error if the value is not finite.
    pub fn set_absorptance(&mut self, value: f64) -> OptResult<()> {
        self.absorptance = Some(check_finite("absorptance", value)?);
        Ok(())
    }
    /// Resolves the absorptance and stores it as cached value.
    ///
    /// # Errors
    ///
    /// See [`AbsorptanceValue::absorptance`].
    pub fn recompute(&mut self) -> OptResult<f64> {
        let absorptance = self.absorptance()?;
        self.absorptance = Some(absorptance);
        Ok(absorptance)
    }
    /// Returns the stored absorptance without resolving it.
    #[must_use]
    pub const fn cached_absorptance(&self) -> Option<f64> {
        self.absorptance
    }
    /// Returns the underlying [`AbsorbanceValue`].
    #[must_use]
    pub const fn absorbance_value(&self) -> &AbsorbanceValue {
        &self.absorbance
    }
    /// Returns the underlying [`AbsorbanceValue`] for modification.
    pub fn absorbance_value_mut(&mut self) -> &mut AbsorbanceValue {
        &mut self.absorbance
    }
}
impl Transmissive for AbsorptanceValue {
    fn optical_state(&self) -> &OpticalState {
        self.absorbance.state()
    }
}
impl Absorbing for AbsorptanceValue {
    fn absorbance(&self) -> OptResult<f64> {
        self.absorbance.absorbance()
    }
}
impl Display for AbsorptanceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.absorbance)?;
        write!(f, "Absorptance = {}", format_quantity(&self.absorptance()))
    }
}
