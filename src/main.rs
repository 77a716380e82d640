use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use ecotally::config::ScoringWeights;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate a yearly carbon footprint from lifestyle figures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weights profile. Flags typed on the command line still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single set of lifestyle figures
    Calculate(cmd::calculate::CalculateArgs),
    /// Score every input in a JSON file
    Batch(cmd::batch::BatchArgs),
    /// Show the tier thresholds and their recommendations
    Tips(cmd::tips::TipsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so --json output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (mut config, cli_weights_ref, sub_name) = match &cli.command {
        Commands::Calculate(args) => (args.config.clone(), &args.config.weights, "calculate"),
        Commands::Batch(args) => (args.config.clone(), &args.config.weights, "batch"),
        Commands::Tips(args) => (args.config.clone(), &args.config.weights, "tips"),
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading Weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ Failed to load weights profile '{}': {}", path, e);
            process::exit(1);
        });
        if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
            file_weights.merge_from_cli(cli_weights_ref, sub_matches);
        }
        config.weights = file_weights;
    }

    if let Err(e) = config.weights.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let outcome = match cli.command {
        Commands::Calculate(args) => cmd::calculate::run(&args, config.weights),
        Commands::Batch(args) => cmd::batch::run(&args, config.weights),
        Commands::Tips(_) => {
            cmd::tips::run(&config.weights);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
