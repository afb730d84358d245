//! Command-line front end.
//!
//! ```bash
//! rut validate 11.111.111-1 12345678-K
//! rut format 11111111-1
//! rut --json generate --count 5 --seed 42
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{AppConfig, GeneratorConfig};
use crate::domain::{Rut, ValidationReport};
use crate::error::{AppError, AppResult};
use crate::service::Generator;

/// Overall result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every input was valid.
    Success,
    /// At least one input was invalid.
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Invalid => Self::FAILURE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rut")]
#[command(about = "Validate, format and generate Chilean RUT identifiers")]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check one or more identifiers; exits non-zero if any is invalid
    Validate {
        /// Identifiers such as 11.111.111-1 or 12345678-k
        #[arg(required = true)]
        ruts: Vec<String>,
    },

    /// Print a valid identifier with thousands separators
    Format {
        /// Identifier to format
        rut: String,
    },

    /// Generate random valid identifiers
    Generate {
        /// How many identifiers to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Lowest body (defaults to generator.min)
        #[arg(long)]
        min: Option<u32>,

        /// Exclusive upper bound for the body (defaults to generator.max)
        #[arg(long)]
        max: Option<u32>,

        /// Seed for reproducible output (defaults to generator.seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print with thousands separators
        #[arg(long)]
        decimal: bool,
    },
}

impl Cli {
    /// Run the selected command, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator range is invalid, if `format` is
    /// given an invalid identifier, or if writing fails.
    pub fn execute<W: Write>(self, config: &AppConfig, out: &mut W) -> AppResult<Outcome> {
        match self.command {
            Commands::Validate { ruts } => validate(&ruts, self.json, out),
            Commands::Format { rut } => format(&rut, self.json, out),
            Commands::Generate {
                count,
                min,
                max,
                seed,
                decimal,
            } => {
                let generator_config = GeneratorConfig {
                    min: min.unwrap_or(config.generator.min),
                    max: max.unwrap_or(config.generator.max),
                    seed: seed.or(config.generator.seed),
                };
                generator_config.validate()?;
                generate(&generator_config, count, decimal, self.json, out)
            }
        }
    }
}

fn validate<W: Write>(ruts: &[String], json: bool, out: &mut W) -> AppResult<Outcome> {
    let reports: Vec<ValidationReport> =
        ruts.iter().map(|rut| ValidationReport::check(rut)).collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    } else {
        for report in &reports {
            match (&report.message, report.category, report.expected) {
                (None, _, Some(expected)) => {
                    writeln!(out, "{}: valid (check '{expected}')", report.input)?;
                }
                (Some(message), Some(category), _) => {
                    writeln!(out, "{}: invalid ({category}): {message}", report.input)?;
                }
                (Some(message), None, _) => {
                    writeln!(out, "{}: invalid: {message}", report.input)?;
                }
                (None, _, None) => writeln!(out, "{}: invalid", report.input)?,
            }
        }
    }

    info!(total = reports.len(), invalid, "Validation finished");

    Ok(if invalid == 0 {
        Outcome::Success
    } else {
        Outcome::Invalid
    })
}

fn format<W: Write>(raw: &str, json: bool, out: &mut W) -> AppResult<Outcome> {
    let rut = Rut::parse(raw).map_err(|source| AppError::Rut {
        input: raw.to_string(),
        source,
    })?;
    let formatted = rut.decimal_format();

    if json {
        serde_json::to_writer(&mut *out, &formatted)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{formatted}")?;
    }

    Ok(Outcome::Success)
}

fn generate<W: Write>(
    config: &GeneratorConfig,
    count: usize,
    decimal: bool,
    json: bool,
    out: &mut W,
) -> AppResult<Outcome> {
    let mut generator = Generator::from_config(config);
    let ruts: Vec<String> = (0..count)
        .map(|_| {
            let rut = generator.generate_default();
            if decimal {
                rut.decimal_format()
            } else {
                rut.to_string()
            }
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &ruts)?;
        writeln!(out)?;
    } else {
        for rut in &ruts {
            writeln!(out, "{rut}")?;
        }
    }

    info!(
        count,
        min = config.min,
        max = config.max,
        "Generated RUTs"
    );
    Ok(Outcome::Success)
}
