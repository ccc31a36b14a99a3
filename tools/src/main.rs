mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use namecase_core::{Config, Gender, LanguageRegistry, NamePart};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namecase", version, about = "Decline East-Slavic personal names")]
struct Args {
    /// Language code or alias (uk, ua, ru, russian, ...)
    #[arg(short, long, default_value = "uk", global = true)]
    lang: String,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decline names read from arguments, or one per stdin line
    Decline {
        names: Vec<String>,

        /// Case name or index; omit for every case
        #[arg(short, long)]
        case: Option<String>,

        /// Skip gender detection
        #[arg(short, long, value_enum)]
        gender: Option<GenderArg>,

        /// Which part the input is; `full` splits and classifies it
        #[arg(short, long, value_enum, default_value = "full")]
        part: PartArg,

        /// Output template, e.g. "N F" (full names only)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Detect the gender of full names
    Gender { names: Vec<String> },
    /// List registered languages
    Languages,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    #[value(alias = "m")]
    Masculine,
    #[value(alias = "f")]
    Feminine,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Masculine => Gender::Masculine,
            GenderArg::Feminine => Gender::Feminine,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PartArg {
    Full,
    Given,
    Family,
    Patronymic,
}

impl PartArg {
    fn name_part(self) -> Option<NamePart> {
        match self {
            PartArg::Full => None,
            PartArg::Given => Some(NamePart::Given),
            PartArg::Family => Some(NamePart::Family),
            PartArg::Patronymic => Some(NamePart::Patronymic),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn registry() -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::new();
    let uk = namecase_uk::Ukrainian::new().context("loading Ukrainian language data")?;
    let ru = namecase_ru::Russian::new().context("loading Russian language data")?;
    registry.register(Arc::new(uk))?;
    registry.register(Arc::new(ru))?;
    Ok(registry)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };
    let registry = registry()?;
    let ctx = commands::Context {
        registry: &registry,
        language: &args.lang,
        config,
        json: args.json,
    };

    match args.command {
        Command::Decline {
            names,
            case,
            gender,
            part,
            format,
        } => {
            let request = commands::DeclineRequest {
                case: case.as_deref(),
                gender: gender.map(Gender::from),
                part: part.name_part(),
                format: format.as_deref(),
            };
            commands::decline(&ctx, &commands::inputs(names)?, &request)
        }
        Command::Gender { names } => commands::gender(&ctx, &commands::inputs(names)?),
        Command::Languages => commands::languages(&ctx),
    }
}
