#![warn(missing_docs)]
//! This is the documentation for the **optrans** software package. **optrans** derives the optical
//! transmittance, absorbance and absorptance of a sample from partially known physical inputs.
//!
//! The derivation chain consists of three entities:
//!   - [`OpticalState`]: raw inputs (intensities, absorption coefficient β, path length X,
//!     penetration depth μ) and the transmittance derived from them.
//!   - [`AbsorbanceValue`]: the absorbance derived from a snapshot of an [`OpticalState`].
//!   - [`AbsorptanceValue`]: the fraction of absorbed light derived from an [`AbsorbanceValue`].
//!
//! ```rust
//! use optrans::{AbsorbanceValue, AbsorptanceValue, OpticalState};
//! let state = OpticalState::from_transmittance(0.3).unwrap();
//! let absorbance = AbsorbanceValue::from_state(&state);
//! let absorptance = AbsorptanceValue::from_absorbance(&absorbance).unwrap();
//! assert!((absorptance.absorptance().unwrap() - 0.7).abs() < 1e-12);
//! ```
pub mod absorbance;
pub mod absorptance;
pub mod console;
pub mod error;
pub mod optical_state;
pub mod params;
pub mod scenario;
pub mod spectrum;
pub mod utils;

pub use absorbance::{AbsorbanceSource, AbsorbanceValue, Absorbing};
pub use absorptance::{AbsorbanceInput, AbsorptanceValue};
pub use error::{OptResult, OptransError};
pub use optical_state::{OpticalState, SourcePrecedence, Transmissive, TransmittanceSource};
pub use params::{Intensity, OpticalParams};
pub use scenario::{Evaluation, Scenario};
pub use spectrum::{Scale, Spectrum};
