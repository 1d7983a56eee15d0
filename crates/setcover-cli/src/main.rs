use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use setcover_benchmark::BatchRunner;
use setcover_config::{SetCoverConfig, TieBreak};
use setcover_io::{generate_datasets, load_family, write_cover};
use setcover_solver::GreedySetCoverSolver;

/// Greedy set cover over CSV membership datasets.
#[derive(Debug, Parser)]
#[command(name = "setcover", version)]
struct Cli {
    /// Configuration file (TOML, or YAML by `.yaml`/`.yml` extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Suppress console event output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one dataset and write its cover
    Solve {
        /// CSV file with `set_id` and `member_id` columns
        dataset: PathBuf,
        /// Where to write the cover
        #[arg(long, short, default_value = "min_cover_sets.csv")]
        output: PathBuf,
        /// Order among sets with equal gain
        #[arg(long, value_enum)]
        tie_break: Option<TieBreakArg>,
        /// Keep requeueing sets that no longer add coverage
        #[arg(long)]
        no_prune: bool,
    },
    /// Write synthetic datasets for the configured grid
    Generate {
        #[arg(long)]
        output_dir: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        total_sets: Option<usize>,
    },
    /// Solve every dataset in a directory and write the results table
    Batch {
        #[arg(long)]
        dataset_dir: Option<String>,
        #[arg(long)]
        results_dir: Option<String>,
        /// Also write a Markdown report to this path
        #[arg(long)]
        markdown: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    Identifier,
    InsertionOrder,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Identifier => TieBreak::Identifier,
            TieBreakArg::InsertionOrder => TieBreak::InsertionOrder,
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {e}", "error:".bright_red().bold());
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;
    if !cli.quiet {
        setcover_console::init();
    }
    let config = apply_overrides(config, &cli.command);
    config.validate()?;

    match &cli.command {
        Command::Solve {
            dataset, output, ..
        } => {
            let family = load_family(dataset)?;
            let cover = GreedySetCoverSolver::new(config.solver).solve(&family)?;
            write_cover(output, &cover)?;
            println!(
                "Required number of sets: {}",
                cover.len().to_formatted_string(&Locale::en).bright_green().bold()
            );
        }
        Command::Generate { .. } => {
            let written = generate_datasets(&config.generator)?;
            println!(
                "Wrote {} datasets to {}",
                written.len().to_formatted_string(&Locale::en).bright_green().bold(),
                config.generator.output_dir
            );
        }
        Command::Batch { .. } => {
            let runner = BatchRunner::new(GreedySetCoverSolver::new(config.solver), config.batch);
            let batch = runner.run()?;
            println!(
                "Solved {} datasets, results in {}",
                batch.len().to_formatted_string(&Locale::en).bright_green().bold(),
                Path::new(&runner.config().results_dir)
                    .join(&runner.config().results_file)
                    .display()
            );
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SetCoverConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(SetCoverConfig::default());
    };
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        Ok(SetCoverConfig::from_yaml_file(path)?)
    } else {
        Ok(SetCoverConfig::from_toml_file(path)?)
    }
}

/// Command-line flags win over the configuration file.
fn apply_overrides(mut config: SetCoverConfig, command: &Command) -> SetCoverConfig {
    match command {
        Command::Solve {
            tie_break,
            no_prune,
            ..
        } => {
            if let Some(tie_break) = tie_break {
                config.solver.tie_break = (*tie_break).into();
            }
            if *no_prune {
                config.solver.prune_exhausted = false;
            }
        }
        Command::Generate {
            output_dir,
            seed,
            total_sets,
        } => {
            if let Some(dir) = output_dir {
                config.generator.output_dir = dir.clone();
            }
            if let Some(seed) = seed {
                config.generator.random_seed = *seed;
            }
            if let Some(total) = total_sets {
                config.generator.total_sets = *total;
            }
        }
        Command::Batch {
            dataset_dir,
            results_dir,
            markdown,
        } => {
            if let Some(dir) = dataset_dir {
                config.batch.dataset_dir = dir.clone();
            }
            if let Some(dir) = results_dir {
                config.batch.results_dir = dir.clone();
            }
            if markdown.is_some() {
                config.batch.markdown_report = markdown.clone();
            }
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("setcover").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_defaults() {
        let cli = parse(&["solve", "data.csv"]);
        match cli.command {
            Command::Solve {
                dataset,
                output,
                tie_break,
                no_prune,
            } => {
                assert_eq!(dataset, PathBuf::from("data.csv"));
                assert_eq!(output, PathBuf::from("min_cover_sets.csv"));
                assert_eq!(tie_break, None);
                assert!(!no_prune);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_solve_flags_override_config() {
        let cli = parse(&[
            "--quiet",
            "solve",
            "data.csv",
            "--tie-break",
            "insertion-order",
            "--no-prune",
        ]);
        assert!(cli.quiet);

        let config = apply_overrides(SetCoverConfig::default(), &cli.command);
        assert_eq!(config.solver.tie_break, TieBreak::InsertionOrder);
        assert!(!config.solver.prune_exhausted);
    }

    #[test]
    fn test_generate_flags_override_config() {
        let cli = parse(&["generate", "--seed", "7", "--total-sets", "50", "--output-dir", "out"]);
        let config = apply_overrides(SetCoverConfig::default(), &cli.command);

        assert_eq!(config.generator.random_seed, 7);
        assert_eq!(config.generator.total_sets, 50);
        assert_eq!(config.generator.output_dir, "out");
    }

    #[test]
    fn test_batch_keeps_config_without_flags() {
        let cli = parse(&["batch", "--markdown", "report.md"]);
        let config = apply_overrides(SetCoverConfig::default(), &cli.command);

        assert_eq!(config.batch.dataset_dir, "datasets");
        assert_eq!(config.batch.markdown_report.as_deref(), Some("report.md"));
    }

    #[test]
    fn test_unknown_tie_break_is_rejected() {
        let result = Cli::try_parse_from(["setcover", "solve", "d.csv", "--tie-break", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        assert!(load_config(Some(Path::new("/nonexistent/setcover.toml"))).is_err());
        assert!(load_config(None).is_ok());
    }
}
