//! Tournament CLI
//!
//! Generate single-elimination brackets from a roster and export match records.

use anyhow::Result;
use bracket_core::{generate_records, GenerationRequest, GroupId, StageId};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tournament::{load_config, load_roster, BracketExport};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tournament", about = "Single-elimination bracket generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a bracket from a roster file
    Generate(GenerateArgs),
    /// Print a previously exported bracket
    Preview {
        export: PathBuf,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// JSON array of { "id", "name" } competitors
    #[arg(long, short)]
    roster: PathBuf,
    /// "sequential" or "random" (config default when omitted)
    #[arg(long, short)]
    seeding: Option<String>,
    /// Fix the RNG for reproducible random seeding
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    stage: StageId,
    #[arg(long)]
    group: Option<GroupId>,
    /// Games per match: 1, 3, 5 or 7 (config default when omitted)
    #[arg(long, short)]
    best_of: Option<u32>,
    /// Generator config (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Where to write the bracket export (JSON)
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Print only the match records as JSON
    #[arg(long)]
    records: bool,
    #[arg(long, default_value = "Bracket")]
    name: String,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let competitors = load_roster(&args.roster)?;
    tracing::info!(competitors = competitors.len(), roster = %args.roster.display(), "loaded roster");

    let request = GenerationRequest {
        competitors,
        seeding_method: args.seeding,
        stage_id: args.stage,
        group_id: args.group,
        best_of: args.best_of,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generated = generate_records(&request, &config, &mut rng)?;
    let export = BracketExport::new(&args.name, args.seed, generated);

    if args.records {
        println!("{}", export.records_json()?);
    } else {
        export.print_report();
    }

    if let Some(path) = args.output {
        export.save(&path)?;
        tracing::info!(path = %path.display(), "saved bracket export");
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Preview { export } => {
            BracketExport::load(&export)?.print_report();
            Ok(())
        }
    }
}
