#![warn(missing_docs)]
//! Scenario documents describing a complete derivation chain.
//!
//! A scenario is a YAML document holding the inputs of an [`OpticalState`] and optional direct values
//! for the derived [`AbsorbanceValue`] and [`AbsorptanceValue`]. An optional spectrum table can be
//! attached.
//!
//! ```yaml
//! transmittance: 0.3
//! params: { I: [1.0, 0.5], B: 2.0, X: 0.01 }
//! precedence: attenuation_first
//! spectrum:
//!   file: absorbance.txt
//!   scale: [350, 700, 5]
//!   lambda: 400
//! ```
use crate::{
    absorbance::AbsorbanceValue,
    absorptance::{AbsorbanceInput, AbsorptanceValue},
    error::{OptResult, OptransError},
    optical_state::{OpticalState, SourcePrecedence},
    params::OpticalParams,
    spectrum::{Scale, Spectrum},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use uom::si::{f64::Length, length::nanometer};

const fn default_lambda() -> f64 {
    400.0
}

/// Spectrum table attached to a [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpectrumConfig {
    /// path of the table. Relative paths are resolved against the directory of the scenario file.
    pub file: PathBuf,
    /// wavelength scale (start, end, step) in nm
    #[serde(default)]
    pub scale: Scale,
    /// reference wavelength in nm
    #[serde(default = "default_lambda")]
    pub lambda: f64,
}

/// A derivation chain `OpticalState -> AbsorbanceValue -> AbsorptanceValue` as read from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// direct transmittance value of the [`OpticalState`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmittance: Option<f64>,
    /// inputs of the [`OpticalState`]
    #[serde(default, skip_serializing_if = "OpticalParams::is_empty")]
    pub params: OpticalParams,
    /// policy used if intensities and attenuation inputs are known at the same time
    #[serde(default)]
    pub precedence: SourcePrecedence,
    /// direct value of the [`AbsorbanceValue`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absorbance: Option<f64>,
    /// direct value of the [`AbsorptanceValue`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absorptance: Option<f64>,
    /// optional spectrum table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectrum: Option<SpectrumConfig>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}
impl Scenario {
    /// Creates a new [`Scenario`] consisting of a single transmittance value.
    #[must_use]
    pub fn from_transmittance(value: f64) -> Self {
        Self {
            transmittance: Some(value),
            ..Self::default()
        }
    }
    /// Returns this [`Scenario`] using the given [`SourcePrecedence`].
    #[must_use]
    pub fn with_precedence(mut self, precedence: SourcePrecedence) -> Self {
        self.precedence = precedence;
        self
    }
    /// Create a new [`Scenario`] from the given YAML file.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the file could not be read.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> OptResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            OptransError::Scenario(format!("cannot read file {} : {}", path.display(), e))
        })?;
        let mut scenario = Self::from_string(&contents)?;
        scenario.base_dir = path.parent().map(Path::to_path_buf);
        info!("Read scenario from {}", path.display());
        Ok(scenario)
    }
    /// Create a new [`Scenario`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the document failed.
    pub fn from_string(document: &str) -> OptResult<Self> {
        serde_yaml::from_str(document)
            .map_err(|e| OptransError::Scenario(format!("parsing of scenario failed: {e}")))
    }
    fn spectrum_path(&self, file: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) if file.is_relative() => base_dir.join(file),
            _ => file.to_path_buf(),
        }
    }
    /// Builds the derivation chain described by this [`Scenario`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - one of the inputs or direct values is invalid.
    ///   - the spectrum table could not be read.
    pub fn evaluate(&self) -> OptResult<Evaluation> {
        let state = OpticalState::new_with_precedence(
            self.transmittance.unwrap_or_default(),
            &self.params,
            self.precedence,
        )?;
        let absorbance = AbsorbanceValue::new(self.absorbance.unwrap_or_default(), Some(&state))?;
        let absorptance = AbsorptanceValue::new(
            self.absorptance.unwrap_or_default(),
            Some(AbsorbanceInput::Object(&absorbance)),
        )?;
        let spectrum = self
            .spectrum
            .as_ref()
            .map(|config| -> OptResult<Spectrum> {
                let mut spectrum =
                    Spectrum::from_file(&self.spectrum_path(&config.file), config.scale)?;
                spectrum.set_reference_wavelength(Length::new::<nanometer>(config.lambda))?;
                Ok(spectrum)
            })
            .transpose()?;
        Ok(Evaluation {
            state,
            absorbance,
            absorptance,
            spectrum,
        })
    }
}

/// Result of evaluating a [`Scenario`].
#[derive(Debug, Clone)]
pub struct Evaluation {
    state: OpticalState,
    absorbance: AbsorbanceValue,
    absorptance: AbsorptanceValue,
    spectrum: Option<Spectrum>,
}
impl Evaluation {
    /// Returns the [`OpticalState`] at the start of the chain.
    #[must_use]
    pub const fn state(&self) -> &OpticalState {
        &self.state
    }
    /// Returns the [`AbsorbanceValue`] derived from the state.
    #[must_use]
    pub const fn absorbance(&self) -> &AbsorbanceValue {
        &self.absorbance
    }
    /// Returns the [`AbsorptanceValue`] derived from the absorbance.
    #[must_use]
    pub const fn absorptance(&self) -> &AbsorptanceValue {
        &self.absorptance
    }
    /// Returns the attached [`Spectrum`] (if any).
    #[must_use]
    pub const fn spectrum(&self) -> Option<&Spectrum> {
        self.spectrum.as_ref()
    }
}
impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Transmittance source: {}", self.state.source())?;
        writeln!(f, "Absorbance source: {}", self.absorbance.source())?;
        write!(f, "{}", self.absorptance)?;
        if let Some(spectrum) = &self.spectrum {
            write!(f, "\n{spectrum}")?;
        }
        Ok(())
    }
}
