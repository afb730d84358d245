//! rut command-line entry point
//!
//! Validates, formats and generates Chilean RUT identifiers.

use std::process::ExitCode;

use rut::run;

fn main() -> anyhow::Result<ExitCode> {
    run()
}
