//! Handling the optrans CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    error::{OptResult, OptransError},
    optical_state::SourcePrecedence,
    scenario::Scenario,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Transmittance used if neither a scenario file nor a value is given on the command line.
pub const DEMO_TRANSMITTANCE: f64 = 0.3;

/// Origin of the [`Scenario`] to be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioInput {
    /// a YAML scenario document
    File(PathBuf),
    /// a single transmittance value
    Transmittance(f64),
}

/// Command line arguments for the optrans application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// scenario to be evaluated
    pub input: ScenarioInput,
    /// precedence overriding the one of the scenario (if any)
    pub precedence: Option<SourcePrecedence>,
}

/// Raw command line arguments. They are validated when converted into [`Args`].
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// file path of the scenario document (YAML) to be evaluated
    #[arg(short, long, conflicts_with = "transmittance")]
    file: Option<String>,

    /// transmittance value. if neither a file nor a value is given, a demo value of 0.3 is used
    #[arg(short, long)]
    transmittance: Option<f64>,

    /// precedence if intensities and attenuation inputs are known at the same time (intensity_first or attenuation_first)
    #[arg(short, long)]
    precedence: Option<String>,
}

/// Checks if the passed file path points to an existing YAML file.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn eval_file_path_input(file_path: &str) -> OptResult<PathBuf> {
    let path = PathBuf::from(file_path);
    if file_path_is_valid(&path) {
        Ok(path)
    } else {
        Err(OptransError::Console(format!(
            "invalid scenario file: {file_path}. Please provide an existing .yaml or .yml file"
        )))
    }
}

fn eval_precedence_input(precedence: &str) -> OptResult<SourcePrecedence> {
    SourcePrecedence::from_str(precedence).map_err(|_| {
        let valid: Vec<String> = SourcePrecedence::iter().map(|p| p.to_string()).collect();
        OptransError::Console(format!(
            "invalid precedence: {precedence}. Valid values are: {}",
            valid.join(", ")
        ))
    })
}

impl Args {
    /// Builds the [`Scenario`] selected by these arguments.
    ///
    /// # Errors
    ///
    /// This function will return an error if the scenario file could not be read or parsed.
    pub fn scenario(&self) -> OptResult<Scenario> {
        let mut scenario = match &self.input {
            ScenarioInput::File(path) => Scenario::from_file(path)?,
            ScenarioInput::Transmittance(value) => Scenario::from_transmittance(*value),
        };
        if let Some(precedence) = self.precedence {
            scenario.precedence = precedence;
        }
        Ok(scenario)
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = OptransError;

    fn try_from(part_args: PartialArgs) -> OptResult<Self> {
        let input = match (part_args.file.as_deref(), part_args.transmittance) {
            (Some(_), Some(_)) => {
                return Err(OptransError::Console(
                    "a scenario file and a transmittance value cannot be given at the same time"
                        .into(),
                ))
            }
            (Some(file), None) => ScenarioInput::File(eval_file_path_input(file)?),
            (None, Some(value)) => ScenarioInput::Transmittance(value),
            (None, None) => ScenarioInput::Transmittance(DEMO_TRANSMITTANCE),
        };
        let precedence = part_args
            .precedence
            .as_deref()
            .map(eval_precedence_input)
            .transpose()?;
        Ok(Self { input, precedence })
    }
}
