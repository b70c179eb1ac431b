//! m2j - convert a 3D model file to a JSON buffer document.
//!
//! Usage: m2j <input-model> <output-json>

use std::env;
use std::process::ExitCode;

use thiserror::Error;

use m2j_core::import::{import_obj, ImportError};
use m2j_export::{export_scene, write_document, ExportError};

// Exit codes: each failure kind gets its own so callers can tell a bad
// invocation from a bad model from a bad output path.
const EXIT_USAGE: u8 = 2;
const EXIT_INPUT_NOT_FOUND: u8 = 3;
const EXIT_IMPORT_FAILED: u8 = 4;
const EXIT_WRITE_FAILED: u8 = 5;

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("Failed to write output: {0}")]
    Write(#[from] ExportError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Import(ImportError::InputNotFound(_)) => EXIT_INPUT_NOT_FOUND,
            CliError::Import(_) => EXIT_IMPORT_FAILED,
            CliError::Write(_) => EXIT_WRITE_FAILED,
        }
    }
}

fn run(input: &str, output: &str) -> Result<(), CliError> {
    let scene = import_obj(input)?;
    log::info!("Import of scene {} succeeded", input);

    let document = export_scene(&scene);
    write_document(&document, output)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <input-model> <output-json>", args[0]);
        eprintln!("Converts an OBJ model to a JSON buffer document");
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
