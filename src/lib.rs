//! # rut
//!
//! Validation, formatting and generation of Chilean RUT identifiers
//! (*Rol Único Tributario*): a 7–8 digit body, a `-` separator and a check
//! character that is a digit or `K`.
//!
//! - **Normalization**: `12.345.678-k` becomes `12345678-K`, or a format error
//! - **Validation**: modulo-11 checksum with weights `2..=7` applied right to left
//! - **Generation**: random bodies with the matching check character
//! - **Formatting**: `11111111-1` rendered as `11.111.111-1`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            rut crate                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────────────┐  ┌────────────────┐  │
//! │  │     CLI     │→ │       Service        │→ │     Domain     │  │
//! │  │   (clap)    │  │ normalize, checksum  │  │ NormalizedRut  │  │
//! │  │             │  │ generator, formatter │  │ Rut, CheckDigit│  │
//! │  └─────────────┘  └──────────────────────┘  └────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use rut::{CheckDigit, Rut, validate_str};
//!
//! assert_eq!(validate_str("11.111.111-1"), Ok(CheckDigit::Digit(1)));
//!
//! let rut: Rut = "11111111-1".parse().unwrap();
//! assert_eq!(rut.decimal_format(), "11.111.111-1");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

pub use crate::domain::{CheckDigit, NormalizedRut, Rut, ValidationReport};
pub use crate::error::{RutError, Result};
pub use crate::service::{
    Generator, compute_expected_check, format_thousands, normalize, validate, validate_str,
};

use crate::cli::Cli;
use crate::config::AppConfig;

/// Run the `rut` command-line tool.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads configuration from files and environment
/// 3. Initializes logging
/// 4. Executes the command, writing to stdout
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The command fails (invalid range, invalid identifier to format)
/// - Output cannot be written
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command,
        "Starting rut"
    );

    let stdout = std::io::stdout();
    let outcome = cli.execute(&config, &mut stdout.lock())?;
    Ok(outcome.into())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
