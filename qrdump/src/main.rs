use std::io::Write;
use std::process::ExitCode;

use clap::*;
use qrseg::*;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Encode a string into the data codewords of a QR symbol.
#[derive(Parser)]
struct Args {
    string: String,
    ec: _ErrorCorrectLv,
    #[arg(short, long)]
    mode: Option<_Mode>,
    #[arg(short, long)]
    version: Option<u8>,
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,
    #[arg(long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum Format {
    Hex,
    Bin,
    Raw,
}

#[derive(ValueEnum, Clone)]
pub enum _Mode {
    Numeric,
    Alphanumeric,
    Bytes,
    // Kanji,
}

#[derive(ValueEnum, Clone)]
pub enum _ErrorCorrectLv {
    L, M, Q, H
}

impl From<_Mode> for Mode {
    fn from(value: _Mode) -> Self {
        match value {
            _Mode::Numeric => Self::Numeric,
            _Mode::Alphanumeric => Self::Alphanumeric,
            _Mode::Bytes => Self::Bytes,
        }
    }
}

impl From<_ErrorCorrectLv> for ErrorCorrectLv {
    fn from(value: _ErrorCorrectLv) -> Self {
        match value {
            _ErrorCorrectLv::L => Self::L,
            _ErrorCorrectLv::M => Self::M,
            _ErrorCorrectLv::Q => Self::Q,
            _ErrorCorrectLv::H => Self::H,
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<Vec<u8>, EncodeError> {
    let ec = args.ec.into();
    let mode = args.mode.map(Mode::from);

    let version = match args.version {
        Some(v) => Version::new(v)?,
        None => {
            let m = mode.unwrap_or_else(|| Mode::best_mode(&args.string));
            let chars = m.char_count(&args.string);
            Version::smallest_version(chars, ec, m).ok_or(EncodeError::TooManyCharacters {
                mode: m,
                count: chars,
                capacity: capacity::character_capacity(m, ec, Version::MAX),
            })?
        },
    };
    debug!(%version, ?ec, "selected version");

    match mode {
        Some(mode) => encode(&args.string, mode, version, ec),
        None => BestEncoder::new(ec, version).encode(&args.string),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let format = args.format;
    let data = match run(args) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "encoding failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        },
    };

    let join = |f: fn(&u8) -> String| data.iter().map(f).collect::<Vec<_>>().join(" ");

    let mut out = std::io::stdout().lock();
    let written = match format {
        Format::Hex => writeln!(out, "{}", join(|b| format!("{b:02x}"))),
        Format::Bin => writeln!(out, "{}", join(|b| format!("{b:08b}"))),
        Format::Raw => out.write_all(&data),
    };

    match written.and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
