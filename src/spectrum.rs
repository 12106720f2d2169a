#![warn(missing_docs)]
//! Module for handling tabulated spectra
//!
//! A [`Spectrum`] maps a fixed, equidistant wavelength [`Scale`] (integer nanometers) to amplitude
//! values read from a two-column text table.
use crate::error::{OptResult, OptransError};
use csv::{ReaderBuilder, WriterBuilder};
use kahan::KahanSummator;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::path::{Path, PathBuf};
use uom::fmt::DisplayStyle::Abbreviation;
use uom::si::{f64::Length, length::nanometer};

/// Name of the file written by [`Spectrum::save`].
pub const SPECTRUM_FILE_NAME: &str = "Spectrum.txt";

/// Equidistant wavelength scale in nanometers. `end` is included if it lies on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "[u32; 3]")]
pub struct Scale {
    start: u32,
    end: u32,
    step: u32,
}
impl Scale {
    /// Creates a new [`Scale`].
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::InvalidParameter`] if
    ///   - the step is zero.
    ///   - the start wavelength is larger than the end wavelength.
    pub fn new(start: u32, end: u32, step: u32) -> OptResult<Self> {
        if step == 0 {
            return Err(OptransError::InvalidParameter(
                "scale step must be > 0".into(),
            ));
        }
        if start > end {
            return Err(OptransError::InvalidParameter(
                "scale start must be <= scale end".into(),
            ));
        }
        Ok(Self { start, end, step })
    }
    /// Returns all wavelengths (in nm) of this [`Scale`].
    #[must_use]
    pub fn wavelengths(&self) -> Vec<u32> {
        (self.start..=self.end)
            .step_by(self.step as usize)
            .collect()
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self {
            start: 350,
            end: 700,
            step: 5,
        }
    }
}
impl TryFrom<Vec<u32>> for Scale {
    type Error = OptransError;

    fn try_from(values: Vec<u32>) -> OptResult<Self> {
        match values.as_slice() {
            [start, end, step] => Self::new(*start, *end, *step),
            _ => Err(OptransError::InvalidParameter(format!(
                "scale must contain exactly 3 values (start, end, step), found {}",
                values.len()
            ))),
        }
    }
}
impl From<Scale> for [u32; 3] {
    fn from(scale: Scale) -> Self {
        [scale.start, scale.end, scale.step]
    }
}

/// Structure for handling tabulated spectral data.
///
/// Each slot of the [`Scale`] holds the mean of all table rows with the same (integer) wavelength
/// or `None` if the table does not contain such a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    data: Vec<(u32, Option<f64>)>,
    reference_wavelength: Length,
}
impl Default for Spectrum {
    fn default() -> Self {
        Self::new(Scale::default())
    }
}
impl Spectrum {
    /// Create a new (empty) spectrum on the given [`Scale`].
    ///
    /// The reference wavelength defaults to 400 nm.
    #[must_use]
    pub fn new(scale: Scale) -> Self {
        Self {
            data: scale.wavelengths().into_iter().map(|l| (l, None)).collect(),
            reference_wavelength: Length::new::<nanometer>(400.0),
        }
    }
    /// Create a new [`Spectrum`] on the given [`Scale`] from a text table.
    ///
    /// # Errors
    ///
    /// See [`Spectrum::load`].
    pub fn from_file(path: &Path, scale: Scale) -> OptResult<Self> {
        let mut spectrum = Self::new(scale);
        spectrum.load(path)?;
        Ok(spectrum)
    }
    /// Fill this [`Spectrum`] from a text table.
    ///
    /// The file must consist of two tab-separated columns without header. The first column
    /// contains the wavelength in nm (truncated to an integer), the second one the amplitude.
    /// Rows with the same wavelength are aggregated by their mean value. Rows whose wavelength
    /// is not part of the scale are ignored.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::Spectrum`] if
    ///   - the file path is not found or could not be read.
    ///   - the file is empty.
    ///   - a row could not be parsed or contains negative or non-finite values.
    pub fn load(&mut self, path: &Path) -> OptResult<()> {
        let file = File::open(path).map_err(|e| {
            OptransError::Spectrum(format!("cannot read file {} : {}", path.display(), e))
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .from_reader(file);
        let mut rows: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for record in reader.records() {
            let record = record.map_err(|e| OptransError::Spectrum(e.to_string()))?;
            let (Some(lambda), Some(amplitude)) = (record.get(0), record.get(1)) else {
                return Err(OptransError::Spectrum(
                    "each row must contain a wavelength and an amplitude".into(),
                ));
            };
            let lambda = parse_value(lambda)?;
            if lambda.is_sign_negative() || lambda > f64::from(u32::MAX) {
                return Err(OptransError::Spectrum(format!(
                    "wavelength {lambda} is out of range"
                )));
            }
            #[allow(clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            let lambda = lambda as u32;
            rows.entry(lambda).or_default().push(parse_value(amplitude)?);
        }
        if rows.is_empty() {
            return Err(OptransError::Spectrum(
                "no data was found in file".into(),
            ));
        }
        for (lambda, amplitude) in &mut self.data {
            *amplitude = rows.get(lambda).map(|values| {
                let sum: f64 = values.iter().kahan_sum().sum();
                #[allow(clippy::cast_precision_loss)]
                let count = values.len() as f64;
                sum / count
            });
        }
        let missing = self.data.iter().filter(|d| d.1.is_none()).count();
        if missing > 0 {
            warn!(
                "{missing} of {} spectrum slots have no data in {}",
                self.data.len(),
                path.display()
            );
        }
        info!("Read spectrum from {}", path.display());
        Ok(())
    }
    /// Returns the reference wavelength of this [`Spectrum`].
    #[must_use]
    pub const fn reference_wavelength(&self) -> Length {
        self.reference_wavelength
    }
    /// Sets the reference wavelength of this [`Spectrum`].
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::InvalidParameter`] if the wavelength is not
    /// positive and finite.
    pub fn set_reference_wavelength(&mut self, wavelength: Length) -> OptResult<()> {
        let nm = wavelength.get::<nanometer>();
        if nm <= 0.0 || !nm.is_finite() {
            return Err(OptransError::InvalidParameter(
                "reference wavelength must be positive and finite".into(),
            ));
        }
        self.reference_wavelength = wavelength;
        Ok(())
    }
    /// Returns the iter of all (wavelength, amplitude) slots of this [`Spectrum`].
    pub fn iter(&self) -> std::slice::Iter<'_, (u32, Option<f64>)> {
        self.data.iter()
    }
    fn values(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.data
            .iter()
            .filter_map(|(lambda, amplitude)| amplitude.map(|a| (*lambda, a)))
    }
    /// Returns the wavelength (in nm) and the value of the largest amplitude.
    ///
    /// If the maximum occurs more than once, the shortest wavelength is returned.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::Spectrum`] if the spectrum contains no data.
    pub fn max(&self) -> OptResult<(u32, f64)> {
        self.values()
            .reduce(|max, value| if value.1 > max.1 { value } else { max })
            .ok_or_else(|| OptransError::Spectrum("spectrum contains no data".into()))
    }
    /// Returns the amplitude weighted mean wavelength (in nm) of this [`Spectrum`].
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::Spectrum`] if the sum of all amplitudes is zero
    /// (this includes an empty spectrum).
    pub fn weighted_mean_wavelength(&self) -> OptResult<f64> {
        let weighted: Vec<f64> = self.values().map(|(l, a)| f64::from(l) * a).collect();
        let amplitudes: Vec<f64> = self.values().map(|(_, a)| a).collect();
        let total: f64 = amplitudes.iter().kahan_sum().sum();
        if total == 0.0 {
            return Err(OptransError::Spectrum(
                "weighted mean wavelength is undefined for a zero total amplitude".into(),
            ));
        }
        let weighted_sum: f64 = weighted.iter().kahan_sum().sum();
        Ok(weighted_sum / total)
    }
    /// Write this [`Spectrum`] as tab-separated table (with header) into the given directory.
    ///
    /// Slots without data are written with an empty amplitude. Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// This function will return an [`OptransError::Spectrum`] if the file could not be created or
    /// written.
    pub fn save(&self, directory: &Path) -> OptResult<PathBuf> {
        let path = directory.join(SPECTRUM_FILE_NAME);
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .map_err(|e| {
                OptransError::Spectrum(format!(
                    "could not create file path: {}: {}",
                    path.display(),
                    e
                ))
            })?;
        writer
            .write_record(["Lambda", "Amplitude"])
            .map_err(|e| OptransError::Spectrum(e.to_string()))?;
        for (lambda, amplitude) in &self.data {
            let amplitude = amplitude.map_or_else(String::new, |a| a.to_string());
            writer
                .write_record([lambda.to_string(), amplitude])
                .map_err(|e| OptransError::Spectrum(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| OptransError::Spectrum(e.to_string()))?;
        info!("Write spectrum to {}", path.display());
        Ok(path)
    }
}
fn parse_value(field: &str) -> OptResult<f64> {
    let value = field
        .trim()
        .parse::<f64>()
        .map_err(|e| OptransError::Spectrum(format!("cannot parse '{field}': {e}")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OptransError::Spectrum(format!(
            "value '{field}' is not finite"
        )))
    }
}
impl<'a> IntoIterator for &'a Spectrum {
    type IntoIter = std::slice::Iter<'a, (u32, Option<f64>)>;
    type Item = &'a (u32, Option<f64>);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl Display for Spectrum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt_length = Length::format_args(nanometer, Abbreviation);
        let max = self
            .max()
            .map_or_else(|_| String::from("undefined"), |m| format!("({}, {})", m.0, m.1));
        let mean = self
            .weighted_mean_wavelength()
            .map_or_else(|_| String::from("undefined"), |m| m.to_string());
        write!(
            f,
            "The spectrum values are Max:{max}\tAverageDist:{mean}\tReferenceLambda:{:.1}",
            fmt_length.with(self.reference_wavelength)
        )
    }
}
