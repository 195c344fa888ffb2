//! Command execution: network guard, contract reads, printing.
//!
//! `execute` is the single error boundary. Whatever fails below it is logged
//! and turned into [`Outcome::Failed`]; the process still exits 0.

use std::future::Future;
use std::io::Write;

use crate::cli::Command;
use crate::config::validation::is_expected_network;
use crate::config::Config;
use crate::galaxy::decode::{hex_to_string, hex_to_strings};
use crate::galaxy::{build_catalog, GalaxyError, TokenId, TraitReader};

/// How a run ended. None of these map to a non-zero exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Network guard tripped; nothing was read.
    WrongNetwork,
    /// Results were written to the output.
    Printed,
    /// An error was caught and logged.
    Failed(String),
}

/// Run one command, catching and logging every error.
pub async fn execute<R, F, Fut, W>(
    config: &Config,
    command: &Command,
    json: bool,
    connect: F,
    out: &mut W,
) -> Outcome
where
    R: TraitReader,
    F: FnOnce(Config) -> Fut,
    Fut: Future<Output = Result<R, GalaxyError>>,
    W: Write,
{
    match run(config, command, json, connect, out).await {
        Ok(outcome) => outcome,
        Err(e) => {
            report_failure(&e);
            Outcome::Failed(e.to_string())
        }
    }
}

/// Log an error that ends the run.
pub fn report_failure(error: &dyn std::error::Error) {
    tracing::error!(error = %error, "galaxy-data command failed");
}

/// Run one command, propagating errors.
///
/// `connect` builds the contract-access object and is only invoked once the
/// network guard has passed.
pub async fn run<R, F, Fut, W>(
    config: &Config,
    command: &Command,
    json: bool,
    connect: F,
    out: &mut W,
) -> Result<Outcome, GalaxyError>
where
    R: TraitReader,
    F: FnOnce(Config) -> Fut,
    Fut: Future<Output = Result<R, GalaxyError>>,
    W: Write,
{
    if !is_expected_network(config) {
        tracing::warn!(network = ?config.network, "Refusing to run against this network");
        writeln!(out, "wrong network")?;
        return Ok(Outcome::WrongNetwork);
    }

    let reader = connect(config.clone()).await?;
    let token_id: TokenId = command.token_id().parse()?;

    match command {
        Command::GetTraits { .. } => print_traits(&reader, &token_id, json, out).await?,
        Command::GetTraitsAvailableValues { .. } => {
            print_available_values(&reader, &token_id, out).await?
        }
    }

    Ok(Outcome::Printed)
}

/// Decoded trait names, one per line (or a JSON array).
///
/// Lines are written as each name decodes, so names ahead of an undecodable
/// entry are already printed when the error surfaces. The JSON array is
/// only written once every name has decoded.
pub async fn print_traits<R: TraitReader, W: Write>(
    reader: &R,
    token_id: &TokenId,
    json: bool,
    out: &mut W,
) -> Result<(), GalaxyError> {
    let encoded = reader.get_traits(token_id).await?;
    tracing::info!(token_id = %token_id, count = encoded.len(), "Traits read");

    if json {
        let names = hex_to_strings(&encoded)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
    } else {
        for hex in &encoded {
            writeln!(out, "{}", hex_to_string(hex)?)?;
        }
    }
    Ok(())
}

/// Trait name → available values, printed as one JSON object.
pub async fn print_available_values<R: TraitReader, W: Write>(
    reader: &R,
    token_id: &TokenId,
    out: &mut W,
) -> Result<(), GalaxyError> {
    let traits = reader.get_traits(token_id).await?;
    let values = reader.get_traits_available_values(token_id).await?;
    let catalog = build_catalog(&traits, &values)?;
    tracing::info!(token_id = %token_id, traits = catalog.len(), "Trait values read");

    writeln!(out, "{}", serde_json::to_string_pretty(&catalog)?)?;
    Ok(())
}
