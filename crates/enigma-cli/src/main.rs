//! Enigma emulator binary.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: rotors I,II,III, reflector B, positions A,A,A
//! enigma "enigma"
//!
//! # Full setup with a per-letter trace on stderr
//! enigma --rotors=I,II,IV --reflector=B --positions=A,A,A --steckerboard=A,B,C,E --verbose "hello"
//! ```

use std::{io, process::ExitCode};

use clap::Parser;
use enigma_cli::{Args, execute, init_tracing};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    execute(&args, &mut io::stdout().lock())
}
