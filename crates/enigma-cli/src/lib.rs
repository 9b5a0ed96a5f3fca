//! Command line front end for the Enigma emulator.
//!
//! Parses flags, resolves rotor and reflector names against the catalogue,
//! validates positions and steckerboard pairs, and hands a fully built
//! [`MachineConfig`] to the core.
//!
//! # Usage
//!
//! ```bash
//! enigma --rotors=I,II,IV --reflector=B --positions=A,A,A --steckerboard=A,B,C,E "hello world"
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::{io::Write, process::ExitCode};

use clap::Parser;
use enigma_core::{
    ConfigError, Letter, MachineConfig, Plug, Plugboard, ReflectorId, RotorId, encode,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Wheel order used when `--rotors` is not given.
pub const DEFAULT_ROTORS: [RotorId; 3] = [RotorId::I, RotorId::II, RotorId::III];

/// Enigma machine emulator
#[derive(Parser, Debug, Clone)]
#[command(name = "enigma")]
#[command(about = "M3 Enigma machine emulator")]
#[command(version)]
pub struct Args {
    /// Comma separated rotors, left to right. Available: I, II, III, IV, V.
    /// Default I,II,III
    #[arg(long, value_delimiter = ',')]
    pub rotors: Vec<String>,

    /// Reflector. Available: B, C
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Comma separated starting positions, left to right. Default A,A,A
    #[arg(long, value_delimiter = ',')]
    pub positions: Vec<String>,

    /// Comma separated list of letters, taken in pairs
    #[arg(long, value_delimiter = ',')]
    pub steckerboard: Vec<String>,

    /// Trace every key press
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Message to encipher
    pub message: Option<String>,
}

/// Errors from resolving command line flags.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of rotors.
    #[error("you have to select 3 rotors, got {count}")]
    RotorCount {
        /// Number of rotors given.
        count: usize,
    },

    /// Wrong number of positions.
    #[error("you have to select 3 positions, got {count}")]
    PositionCount {
        /// Number of positions given.
        count: usize,
    },

    /// Steckerboard letters do not pair up.
    #[error("steckerboard options should be even, got {count}")]
    OddPlugList {
        /// Number of letters given.
        count: usize,
    },

    /// Position is not a single letter.
    #[error("position {value:?} is not valid")]
    BadPosition {
        /// The rejected position.
        value: String,
    },

    /// Component construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Build the machine configuration described by `args`.
///
/// Missing rotors default to I, II, III and missing positions to A, A, A.
pub fn resolve(args: &Args) -> Result<MachineConfig<'static>, CliError> {
    let rotors = resolve_rotors(&args.rotors)?;
    let reflector: ReflectorId = args.reflector.parse()?;
    let positions = resolve_positions(&args.positions)?;
    let plugboard = resolve_steckerboard(&args.steckerboard)?;

    tracing::debug!(
        rotors = %rotors.map(|id| id.to_string()).join(","),
        %reflector,
        positions = %positions.iter().map(ToString::to_string).collect::<String>(),
        plugs = plugboard.len(),
        "resolved configuration"
    );

    Ok(MachineConfig::new(rotors.map(RotorId::rotor), reflector.reflector())
        .with_positions(positions)
        .with_plugboard(plugboard)
        .with_trace(args.verbose))
}

/// Resolve `args` and encipher the message.
pub fn run(args: &Args) -> Result<String, CliError> {
    let config = resolve(args)?;
    Ok(encode(&config, args.message.as_deref().unwrap_or_default()))
}

/// Run `args` and write the ciphertext line to `out`.
///
/// Failures are reported through `tracing` only; nothing is written to `out`.
pub fn execute(args: &Args, out: &mut impl Write) -> ExitCode {
    match run(args) {
        Ok(ciphertext) => match writeln!(out, "{ciphertext}") {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("failed to write output: {}", e);
                ExitCode::FAILURE
            },
        },
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        },
    }
}

/// Install the `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise `--verbose` selects `debug`, and
/// `--log-level` applies.
pub fn init_tracing(args: &Args) {
    let level = if args.verbose { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_rotors(names: &[String]) -> Result<[RotorId; 3], CliError> {
    if names.is_empty() {
        return Ok(DEFAULT_ROTORS);
    }

    let ids = names.iter().map(|name| name.parse()).collect::<Result<Vec<RotorId>, _>>()?;
    <[RotorId; 3]>::try_from(ids).map_err(|ids| CliError::RotorCount { count: ids.len() })
}

fn resolve_positions(values: &[String]) -> Result<[Letter; 3], CliError> {
    if values.is_empty() {
        return Ok([Letter::A; 3]);
    }

    let letters = values
        .iter()
        .map(|value| {
            value.parse::<Letter>().map_err(|_| CliError::BadPosition { value: value.clone() })
        })
        .collect::<Result<Vec<Letter>, _>>()?;
    <[Letter; 3]>::try_from(letters)
        .map_err(|letters| CliError::PositionCount { count: letters.len() })
}

fn resolve_steckerboard(values: &[String]) -> Result<Plugboard, CliError> {
    if values.len() % 2 != 0 {
        return Err(CliError::OddPlugList { count: values.len() });
    }

    let plugs = values
        .chunks(2)
        .map(|pair| -> Result<Plug, ConfigError> {
            Plug::new(pair[0].parse()?, pair[1].parse()?)
        })
        .collect::<Result<Vec<Plug>, ConfigError>>()?;

    Ok(Plugboard::new(plugs)?)
}
