//! Graphene build tools CLI
//!
//! Entry point for the helpers the Graphene build runs: the identifier filter
//! handed to the introspection scanner, the installed-test descriptor
//! generator, and the introspection smoke test.

mod args;

use std::io::{Read, Write};

use clap::Parser;
use graphene_tools_common::check_introspection;
use tracing::{debug, info};

use args::{Args, Command, GenInstalledTestArgs, IdentFilterArgs, IntrospectionArgs};

/// Reads all of `input`, converts it, and writes the result without adding a
/// newline.
fn run_identfilter(
    args: &IdentFilterArgs,
    input: impl Read,
    mut output: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::io::read_to_string(input)?;
    let converted = args.to_filter().convert(&text);

    output.write_all(converted.as_bytes())?;
    output.flush()?;
    Ok(())
}

fn run_gen_installed_test(args: &GenInstalledTestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let test = args.to_installed_test()?;
    let path = test.write_to(&args.outdir, &args.outfile)?;
    debug!("descriptor for {} written to {}", test.exec.display(), path.display());
    Ok(())
}

/// Prints the TAP report; fails if any assertion failed.
fn run_introspection(args: &IntrospectionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = check_introspection(args.gir.as_deref(), &args.namespace, &args.gir_version)?;
    print!("{report}");

    if !report.is_success() {
        return Err(format!("{} introspection check(s) failed", report.failures()).into());
    }

    info!("Introspection checks passed");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the filter output and TAP, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match &args.command {
        Command::Identfilter(filter_args) => {
            run_identfilter(filter_args, std::io::stdin().lock(), std::io::stdout().lock())
        },
        Command::GenInstalledTest(gen_args) => run_gen_installed_test(gen_args),
        Command::Introspection(intro_args) => run_introspection(intro_args),
    }
}
