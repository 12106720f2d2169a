#![warn(missing_docs)]
//! The base entity of the derivation chain.
//!
//! An [`OpticalState`] holds the raw measurable quantities of a sample (light intensities,
//! absorption coefficient β, optical path length X and penetration depth μ) and derives the
//! transmittance from whichever of them have been supplied. The formula used for the derivation
//! is described by a [`TransmittanceSource`], which is re-selected every time an input is written.
use crate::error::{OptResult, OptransError};
use crate::params::{check_depth, check_finite, check_length, Intensity, OpticalParams};
use crate::utils::format_quantity;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Path length used if none is supplied.
pub const DEFAULT_PATH_LENGTH: f64 = 1e-2;

/// Formula used for resolving the transmittance of an [`OpticalState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransmittanceSource {
    /// the last literally assigned (or recomputed) value
    Literal,
    /// `exp(-β·X)`
    BetaLength,
    /// `exp(-X/μ)`
    DepthLength,
    /// ratio of transmitted to incident intensity
    Intensity,
}

/// Policy deciding which source wins if both an intensity pair and a complete attenuation pair
/// (β or μ together with X) are known. Within the attenuation pairs X/μ wins over β·X.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourcePrecedence {
    /// The measured intensity ratio is treated as ground truth.
    #[default]
    IntensityFirst,
    /// The attenuation law (β·X or X/μ) is preferred over the intensity ratio.
    AttenuationFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KnownInputs {
    beta: bool,
    length: bool,
    depth: bool,
    intensity: bool,
}

/// Partially specified physical state of a sample.
///
/// ## Example
/// ```rust
/// use optrans::{OpticalParams, OpticalState};
/// let state = OpticalState::from_params(&OpticalParams::default().with_beta(2.0).with_length(0.5)).unwrap();
/// assert!((state.transmittance().unwrap() - (-1.0f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalState {
    transmittance: Option<f64>,
    intensity: Intensity,
    beta: f64,
    length: f64,
    depth: f64,
    known: KnownInputs,
    precedence: SourcePrecedence,
    source: TransmittanceSource,
}
impl Default for OpticalState {
    fn default() -> Self {
        Self {
            transmittance: None,
            intensity: Intensity::default(),
            beta: 0.0,
            length: DEFAULT_PATH_LENGTH,
            depth: 0.0,
            known: KnownInputs::default(),
            precedence: SourcePrecedence::default(),
            source: TransmittanceSource::Literal,
        }
    }
}
impl OpticalState {
    /// Creates a new [`OpticalState`] from an optional direct transmittance value and a set of inputs.
    ///
    /// A `value` > 0.0 seeds the stored transmittance without marking any input as known. Each input
    /// present in `params` is marked as known.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::InvalidParameter`] if
    ///   - `value` is positive but not finite.
    ///   - β is not finite.
    ///   - the path length is negative or not finite.
    ///   - the penetration depth is zero or not finite.
    pub fn new(value: f64, params: &OpticalParams) -> OptResult<Self> {
        Self::new_with_precedence(value, params, SourcePrecedence::default())
    }
    /// Creates a new [`OpticalState`] like [`OpticalState::new`] but using the given [`SourcePrecedence`]
    /// from the start.
    ///
    /// # Errors
    ///
    /// See [`OpticalState::new`].
    pub fn new_with_precedence(
        value: f64,
        params: &OpticalParams,
        precedence: SourcePrecedence,
    ) -> OptResult<Self> {
        let mut state = Self {
            precedence,
            ..Self::default()
        };
        if value > 0.0 {
            state.transmittance = Some(check_finite("transmittance", value)?);
        }
        if let Some(intensity) = params.intensity {
            state.intensity = intensity;
            state.known.intensity = true;
        }
        if let Some(beta) = params.beta {
            state.beta = check_finite("absorption coefficient", beta)?;
            state.known.beta = true;
        }
        if let Some(length) = params.length {
            state.length = check_length(length)?;
            state.known.length = true;
        }
        if let Some(depth) = params.depth {
            state.depth = check_depth(depth)?;
            state.known.depth = true;
        }
        state.select_source();
        Ok(state)
    }
    /// Creates a new [`OpticalState`] from a set of inputs only.
    ///
    /// # Errors
    ///
    /// See [`OpticalState::new`].
    pub fn from_params(params: &OpticalParams) -> OptResult<Self> {
        Self::new(0.0, params)
    }
    /// Creates a new [`OpticalState`] holding only a literal transmittance value.
    ///
    /// # Errors
    ///
    /// This function will return an error if the value is not finite.
    pub fn from_transmittance(value: f64) -> OptResult<Self> {
        let mut state = Self::default();
        state.set_transmittance(value)?;
        Ok(state)
    }
    /// Returns this state using the given [`SourcePrecedence`].
    #[must_use]
    pub fn with_precedence(mut self, precedence: SourcePrecedence) -> Self {
        self.set_precedence(precedence);
        self
    }
    /// Sets the [`SourcePrecedence`] and re-selects the transmittance source accordingly.
    pub fn set_precedence(&mut self, precedence: SourcePrecedence) {
        self.precedence = precedence;
        self.select_source();
    }
    /// Returns the [`SourcePrecedence`] of this [`OpticalState`].
    #[must_use]
    pub const fn precedence(&self) -> SourcePrecedence {
        self.precedence
    }
    /// Returns the [`TransmittanceSource`] currently used for resolving the transmittance.
    #[must_use]
    pub const fn source(&self) -> TransmittanceSource {
        self.source
    }
    /// Resolves the transmittance from the currently selected [`TransmittanceSource`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no input is known and no literal value has been stored ([`OptransError::UnresolvedQuantity`]).
    ///   - the attenuation law overflows, e.g. for a negative β or μ ([`OptransError::InvalidParameter`]).
    pub fn transmittance(&self) -> OptResult<f64> {
        match self.source {
            TransmittanceSource::Literal => self.transmittance.ok_or_else(|| {
                OptransError::UnresolvedQuantity(
                    "transmittance: neither a value nor any input is known".into(),
                )
            }),
            TransmittanceSource::BetaLength => attenuation(self.beta, self.length),
            TransmittanceSource::DepthLength => attenuation(self.depth.recip(), self.length),
            TransmittanceSource::Intensity => Ok(self.intensity.ratio()),
        }
    }
    /// Assigns a literal transmittance value.
    ///
    /// All inputs are marked as unknown afterwards, so subsequent reads return this value until
    /// one of the inputs is set again.
    ///
    /// # Errors
    ///
    /// This function will return an error if the value is not finite.
    pub fn set_transmittance(&mut self, value: f64) -> OptResult<()> {
        self.transmittance = Some(check_finite("transmittance", value)?);
        self.known = KnownInputs::default();
        self.select_source();
        Ok(())
    }
    /// Resolves the transmittance and stores it as the cached literal value.
    ///
    /// # Errors
    ///
    /// See [`OpticalState::transmittance`].
    pub fn recompute(&mut self) -> OptResult<f64> {
        let transmittance = self.transmittance()?;
        self.transmittance = Some(transmittance);
        Ok(transmittance)
    }
    /// Returns the cached transmittance value (if any) without resolving it.
    #[must_use]
    pub const fn cached_transmittance(&self) -> Option<f64> {
        self.transmittance
    }
    /// Returns the penetration depth μ.
    ///
    /// An explicitly supplied depth is preferred. Otherwise it is derived as `1/β`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - neither μ nor β is known.
    ///   - μ has to be derived from β = 0.0.
    pub fn depth(&self) -> OptResult<f64> {
        if self.known.depth {
            Ok(self.depth)
        } else if self.known.beta {
            if self.beta == 0.0 {
                return Err(OptransError::InvalidParameter(
                    "penetration depth cannot be derived from a zero absorption coefficient".into(),
                ));
            }
            Ok(self.beta.recip())
        } else {
            Err(OptransError::UnresolvedQuantity(
                "penetration depth: neither depth nor absorption coefficient is known".into(),
            ))
        }
    }
    /// Sets the penetration depth μ and marks it as known.
    ///
    /// # Errors
    ///
    /// This function will return an error if μ is zero or not finite.
    pub fn set_depth(&mut self, depth: f64) -> OptResult<()> {
        self.depth = check_depth(depth)?;
        self.known.depth = true;
        self.select_source();
        Ok(())
    }
    /// Returns the absorption coefficient β.
    ///
    /// If μ and X are known, β is `1/μ` (the value used for the attenuation). Otherwise an explicitly
    /// supplied β is preferred over `1/μ`.
    ///
    /// # Errors
    ///
    /// This function will return an error if neither β nor μ is known.
    pub fn beta(&self) -> OptResult<f64> {
        match (self.known.beta, self.known.depth) {
            (_, true) if self.known.length => Ok(self.depth.recip()),
            (true, _) => Ok(self.beta),
            (false, true) => Ok(self.depth.recip()),
            (false, false) => Err(OptransError::UnresolvedQuantity(
                "absorption coefficient: neither absorption coefficient nor depth is known".into(),
            )),
        }
    }
    /// Sets the absorption coefficient β and marks it as known.
    ///
    /// # Errors
    ///
    /// This function will return an error if β is not finite.
    pub fn set_beta(&mut self, beta: f64) -> OptResult<()> {
        self.beta = check_finite("absorption coefficient", beta)?;
        self.known.beta = true;
        self.select_source();
        Ok(())
    }
    /// Returns the optical path length X.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }
    /// Sets the optical path length X and marks it as known.
    ///
    /// # Errors
    ///
    /// This function will return an error if X is negative or not finite.
    pub fn set_length(&mut self, length: f64) -> OptResult<()> {
        self.length = check_length(length)?;
        self.known.length = true;
        self.select_source();
        Ok(())
    }
    /// Returns the (incident, transmitted) [`Intensity`] pair.
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }
    /// Sets the [`Intensity`] pair and marks it as known.
    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.intensity = intensity;
        self.known.intensity = true;
        self.select_source();
    }
    /// Returns `true` if β was explicitly supplied.
    #[must_use]
    pub const fn has_beta(&self) -> bool {
        self.known.beta
    }
    /// Returns `true` if X was explicitly supplied.
    #[must_use]
    pub const fn has_length(&self) -> bool {
        self.known.length
    }
    /// Returns `true` if μ was explicitly supplied.
    #[must_use]
    pub const fn has_depth(&self) -> bool {
        self.known.depth
    }
    /// Returns `true` if the intensity pair was explicitly supplied.
    #[must_use]
    pub const fn has_intensity(&self) -> bool {
        self.known.intensity
    }
    /// Creates an independent copy of this state as seen by a derived entity.
    ///
    /// The copy carries β, the explicitly supplied μ, X and the intensities of `self`. If the transmittance resolves to a
    /// non-zero value it is stored as literal and the inputs it was derived from are forgotten.
    /// Finally β is marked as known if it was resolvable and X if it is non-zero. The returned flag
    /// tells whether a transmittance value was carried over.
    pub(crate) fn reinterpret(&self) -> (Self, bool) {
        let beta = self.beta().ok();
        let depth = self.known.depth.then_some(self.depth);
        let transmittance = self.transmittance().ok().filter(|t| *t != 0.0);
        let carried = transmittance.is_some();
        let mut state = Self {
            transmittance,
            intensity: self.intensity,
            beta: beta.unwrap_or_default(),
            length: self.length,
            depth: depth.unwrap_or_default(),
            known: KnownInputs {
                beta: beta.is_some(),
                length: self.length != 0.0,
                depth: !carried && depth.is_some(),
                intensity: !carried,
            },
            precedence: self.precedence,
            source: TransmittanceSource::Literal,
        };
        state.select_source();
        (state, carried)
    }
    fn select_source(&mut self) {
        let attenuation = if self.known.depth && self.known.length {
            Some(TransmittanceSource::DepthLength)
        } else if self.known.beta && self.known.length {
            Some(TransmittanceSource::BetaLength)
        } else {
            None
        };
        let source = match (self.known.intensity, attenuation) {
            (true, Some(attenuation)) => {
                let source = match self.precedence {
                    SourcePrecedence::IntensityFirst => TransmittanceSource::Intensity,
                    SourcePrecedence::AttenuationFirst => attenuation,
                };
                warn!(
                    "intensity and attenuation inputs are both known, transmittance uses {source} ({} precedence)",
                    self.precedence
                );
                source
            }
            (true, None) => TransmittanceSource::Intensity,
            (false, Some(attenuation)) => attenuation,
            (false, None) => TransmittanceSource::Literal,
        };
        if source != self.source {
            debug!("transmittance source changed: {} -> {source}", self.source);
        }
        self.source = source;
    }
}

fn attenuation(beta: f64, length: f64) -> OptResult<f64> {
    check_finite("transmittance", (-beta * length).exp())
}

/// Capability shared by all entities which carry an [`OpticalState`] and thus have a transmittance.
pub trait Transmissive {
    /// Returns the underlying [`OpticalState`].
    fn optical_state(&self) -> &OpticalState;
    /// Resolves the transmittance of the underlying [`OpticalState`].
    ///
    /// # Errors
    ///
    /// See [`OpticalState::transmittance`].
    fn transmittance(&self) -> OptResult<f64> {
        self.optical_state().transmittance()
    }
    /// Returns the absorption coefficient β of the underlying [`OpticalState`].
    ///
    /// # Errors
    ///
    /// See [`OpticalState::beta`].
    fn beta(&self) -> OptResult<f64> {
        self.optical_state().beta()
    }
    /// Returns the penetration depth μ of the underlying [`OpticalState`].
    ///
    /// # Errors
    ///
    /// See [`OpticalState::depth`].
    fn depth(&self) -> OptResult<f64> {
        self.optical_state().depth()
    }
    /// Returns the path length X of the underlying [`OpticalState`].
    fn length(&self) -> f64 {
        self.optical_state().length()
    }
    /// Returns the intensity pair of the underlying [`OpticalState`].
    fn intensity(&self) -> Intensity {
        self.optical_state().intensity()
    }
}
impl Transmissive for OpticalState {
    fn optical_state(&self) -> &OpticalState {
        self
    }
}

impl Display for OpticalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Depth = {}", format_quantity(&self.depth()))?;
        writeln!(f, "Length = {}", self.length)?;
        writeln!(f, "Beta = {}", format_quantity(&self.beta()))?;
        writeln!(f, "Initial Intensity = {}", self.intensity.incident())?;
        writeln!(f, "Final Intensity = {}", self.intensity.transmitted())?;
        write!(
            f,
            "Transmittance = {}",
            format_quantity(&self.transmittance())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_warnings;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    #[test]
    fn default() {
        let state = OpticalState::default();
        assert_eq!(state.length(), DEFAULT_PATH_LENGTH);
        assert_eq!(state.intensity(), Intensity::default());
        assert!(!state.has_beta());
        assert!(!state.has_length());
        assert!(!state.has_depth());
        assert!(!state.has_intensity());
        assert_eq!(state.source(), TransmittanceSource::Literal);
        assert_eq!(state.precedence(), SourcePrecedence::IntensityFirst);
        assert_eq!(state.cached_transmittance(), None);
    }
    #[test]
    fn new_with_value() {
        let state = OpticalState::new(0.3, &OpticalParams::default()).unwrap();
        assert_eq!(state.transmittance().unwrap(), 0.3);
        assert!(!state.has_beta());
        assert!(!state.has_length());
        assert!(!state.has_depth());
        assert!(!state.has_intensity());
    }
    #[test]
    fn new_with_non_positive_value() {
        let state = OpticalState::new(0.0, &OpticalParams::default()).unwrap();
        assert_matches!(
            state.transmittance(),
            Err(OptransError::UnresolvedQuantity(_))
        );
        let state = OpticalState::new(-0.5, &OpticalParams::default()).unwrap();
        assert!(state.transmittance().is_err());
    }
    #[test]
    fn new_wrong() {
        assert!(OpticalState::new(f64::INFINITY, &OpticalParams::default()).is_err());
        assert!(OpticalState::from_params(&OpticalParams::default().with_beta(f64::NAN)).is_err());
        assert!(OpticalState::from_params(&OpticalParams::default().with_length(-1.0)).is_err());
        assert_matches!(
            OpticalState::from_params(&OpticalParams::default().with_depth(0.0)),
            Err(OptransError::InvalidParameter(_))
        );
    }
    #[test]
    fn transmittance_beta_length() {
        let state =
            OpticalState::from_params(&OpticalParams::default().with_beta(3.0).with_length(0.2))
                .unwrap();
        assert!(state.has_beta());
        assert!(state.has_length());
        assert_eq!(state.source(), TransmittanceSource::BetaLength);
        assert_abs_diff_eq!(state.transmittance().unwrap(), (-0.6f64).exp());
    }
    #[test]
    fn transmittance_beta_without_length() {
        let state = OpticalState::from_params(&OpticalParams::default().with_beta(3.0)).unwrap();
        assert_eq!(state.source(), TransmittanceSource::Literal);
        assert!(state.transmittance().is_err());
    }
    #[test]
    fn transmittance_depth_length() {
        let by_depth =
            OpticalState::from_params(&OpticalParams::default().with_depth(0.25).with_length(0.5))
                .unwrap();
        let by_beta =
            OpticalState::from_params(&OpticalParams::default().with_beta(4.0).with_length(0.5))
                .unwrap();
        assert_eq!(by_depth.source(), TransmittanceSource::DepthLength);
        assert_abs_diff_eq!(
            by_depth.transmittance().unwrap(),
            by_beta.transmittance().unwrap(),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(by_depth.beta().unwrap(), 4.0);
    }
    #[test]
    fn transmittance_depth_preferred_over_beta() {
        let state = OpticalState::from_params(
            &OpticalParams::default()
                .with_beta(1.0)
                .with_depth(0.1)
                .with_length(1.0),
        )
        .unwrap();
        assert_eq!(state.source(), TransmittanceSource::DepthLength);
        assert_abs_diff_eq!(state.transmittance().unwrap(), (-10.0f64).exp());
        assert_abs_diff_eq!(state.beta().unwrap(), 10.0);
        assert_eq!(state.depth().unwrap(), 0.1);
    }
    #[test]
    fn transmittance_overflow() {
        let state =
            OpticalState::from_params(&OpticalParams::default().with_beta(-1000.0).with_length(1.0))
                .unwrap();
        assert_eq!(
            state.transmittance(),
            Err(OptransError::InvalidParameter(
                "transmittance must be finite".into()
            ))
        );
        let state =
            OpticalState::from_params(&OpticalParams::default().with_depth(-1e-3).with_length(1.0))
                .unwrap();
        assert_matches!(
            state.transmittance(),
            Err(OptransError::InvalidParameter(_))
        );
    }
    #[test]
    fn transmittance_intensity() {
        let state = OpticalState::from_params(
            &OpticalParams::default().with_intensity(Intensity::new(4.0, 1.0).unwrap()),
        )
        .unwrap();
        assert_eq!(state.source(), TransmittanceSource::Intensity);
        assert_eq!(state.transmittance().unwrap(), 0.25);
    }
    #[test]
    fn transmittance_intensity_overrides_attenuation() {
        testing_logger::setup();
        let state = OpticalState::from_params(
            &OpticalParams::default()
                .with_intensity(Intensity::new(2.0, 1.0).unwrap())
                .with_beta(3.0)
                .with_length(1.0),
        )
        .unwrap();
        check_warnings(vec![
            "intensity and attenuation inputs are both known, transmittance uses intensity (intensity_first precedence)",
        ]);
        assert_eq!(state.source(), TransmittanceSource::Intensity);
        assert_eq!(state.transmittance().unwrap(), 0.5);
    }
    #[test]
    fn transmittance_attenuation_first() {
        let mut state = OpticalState::from_params(
            &OpticalParams::default()
                .with_intensity(Intensity::new(2.0, 1.0).unwrap())
                .with_depth(0.5)
                .with_length(1.0),
        )
        .unwrap();
        testing_logger::setup();
        state.set_precedence(SourcePrecedence::AttenuationFirst);
        check_warnings(vec![
            "intensity and attenuation inputs are both known, transmittance uses depth_length (attenuation_first precedence)",
        ]);
        assert_eq!(state.source(), TransmittanceSource::DepthLength);
        assert_abs_diff_eq!(state.transmittance().unwrap(), (-2.0f64).exp());
        state.set_precedence(SourcePrecedence::IntensityFirst);
        assert_eq!(state.transmittance().unwrap(), 0.5);
    }
    #[test]
    fn new_with_precedence() {
        testing_logger::setup();
        let state = OpticalState::new_with_precedence(
            0.9,
            &OpticalParams::default()
                .with_intensity(Intensity::new(2.0, 1.0).unwrap())
                .with_beta(2.0)
                .with_length(0.5),
            SourcePrecedence::AttenuationFirst,
        )
        .unwrap();
        check_warnings(vec![
            "intensity and attenuation inputs are both known, transmittance uses beta_length (attenuation_first precedence)",
        ]);
        assert_eq!(state.precedence(), SourcePrecedence::AttenuationFirst);
        assert_abs_diff_eq!(state.transmittance().unwrap(), (-1.0f64).exp());
        assert_eq!(state.cached_transmittance(), Some(0.9));
    }
    #[test]
    fn attenuation_first_without_attenuation() {
        let state = OpticalState::from_params(
            &OpticalParams::default().with_intensity(Intensity::new(2.0, 1.0).unwrap()),
        )
        .unwrap()
        .with_precedence(SourcePrecedence::AttenuationFirst);
        assert_eq!(state.source(), TransmittanceSource::Intensity);
    }
    #[test]
    fn set_transmittance() {
        let mut state = OpticalState::from_params(
            &OpticalParams::default()
                .with_intensity(Intensity::default())
                .with_beta(1.0)
                .with_depth(2.0)
                .with_length(1.0),
        )
        .unwrap();
        state.set_transmittance(0.7).unwrap();
        assert_eq!(state.transmittance().unwrap(), 0.7);
        assert!(!state.has_beta());
        assert!(!state.has_length());
        assert!(!state.has_depth());
        assert!(!state.has_intensity());
        assert_matches!(state.beta(), Err(OptransError::UnresolvedQuantity(_)));
        assert_matches!(state.depth(), Err(OptransError::UnresolvedQuantity(_)));
        assert!(state.set_transmittance(f64::NAN).is_err());
    }
    #[test]
    fn set_input_after_literal() {
        let mut state = OpticalState::from_transmittance(0.7).unwrap();
        state.set_beta(2.0).unwrap();
        assert_eq!(state.transmittance().unwrap(), 0.7);
        state.set_length(1.0).unwrap();
        assert_abs_diff_eq!(state.transmittance().unwrap(), (-2.0f64).exp());
    }
    #[test]
    fn recompute() {
        let mut state = OpticalState::from_params(
            &OpticalParams::default().with_intensity(Intensity::new(1.0, 0.4).unwrap()),
        )
        .unwrap();
        assert_eq!(state.cached_transmittance(), None);
        assert_eq!(state.recompute().unwrap(), 0.4);
        assert_eq!(state.cached_transmittance(), Some(0.4));
        assert!(OpticalState::default().recompute().is_err());
    }
    #[test]
    fn depth() {
        let mut state = OpticalState::default();
        assert_matches!(state.depth(), Err(OptransError::UnresolvedQuantity(_)));
        state.set_beta(4.0).unwrap();
        assert_eq!(state.depth().unwrap(), 0.25);
        state.set_depth(2.0).unwrap();
        assert_eq!(state.depth().unwrap(), 2.0);
        assert!(state.has_beta());
        assert!(state.set_depth(0.0).is_err());
    }
    #[test]
    fn depth_from_zero_beta() {
        let state = OpticalState::from_params(&OpticalParams::default().with_beta(0.0)).unwrap();
        assert_matches!(state.depth(), Err(OptransError::InvalidParameter(_)));
    }
    #[test]
    fn beta() {
        let mut state = OpticalState::default();
        assert_matches!(state.beta(), Err(OptransError::UnresolvedQuantity(_)));
        state.set_depth(0.5).unwrap();
        assert_eq!(state.beta().unwrap(), 2.0);
        state.set_beta(3.0).unwrap();
        assert_eq!(state.beta().unwrap(), 3.0);
        assert!(state.has_depth());
        assert!(state.set_beta(f64::INFINITY).is_err());
    }
    #[test]
    fn length_and_intensity() {
        let mut state = OpticalState::default();
        state.set_length(0.3).unwrap();
        assert_eq!(state.length(), 0.3);
        assert!(state.has_length());
        assert!(state.set_length(-0.3).is_err());
        state.set_intensity(Intensity::new(5.0, 1.0).unwrap());
        assert!(state.has_intensity());
        assert_eq!(state.transmittance().unwrap(), 0.2);
    }
    #[test]
    fn reinterpret_literal() {
        let state = OpticalState::from_transmittance(0.3).unwrap();
        let (copy, carried) = state.reinterpret();
        assert!(carried);
        assert!(!copy.has_beta());
        assert!(copy.has_length());
        assert!(!copy.has_depth());
        assert!(!copy.has_intensity());
        assert_eq!(copy.transmittance().unwrap(), 0.3);
    }
    #[test]
    fn reinterpret_beta_length() {
        let state =
            OpticalState::from_params(&OpticalParams::default().with_beta(2.0).with_length(0.5))
                .unwrap();
        let (copy, carried) = state.reinterpret();
        assert!(carried);
        assert!(copy.has_beta());
        assert!(copy.has_length());
        assert!(!copy.has_intensity());
        assert_eq!(copy.beta().unwrap(), 2.0);
        assert_abs_diff_eq!(copy.transmittance().unwrap(), (-1.0f64).exp());
    }
    #[test]
    fn reinterpret_unresolved() {
        let state = OpticalState::from_params(&OpticalParams::default().with_length(0.0)).unwrap();
        let (copy, carried) = state.reinterpret();
        assert!(!carried);
        assert!(copy.has_intensity());
        assert!(!copy.has_length());
        assert_eq!(copy.transmittance().unwrap(), 0.5);
    }
    #[test]
    fn display() {
        let state = OpticalState::from_transmittance(0.3).unwrap();
        assert_eq!(
            format!("{state}"),
            "Depth = undefined\nLength = 0.01\nBeta = undefined\nInitial Intensity = 1\nFinal Intensity = 0.5\nTransmittance = 0.3"
        );
    }
}
