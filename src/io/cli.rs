//! Command-line interface for hiding and revealing maze messages

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::Rng;

use crate::algorithm::executor::{GeneratorConfig, MazeGenerator, validate_message};
use crate::algorithm::solver;
use crate::io::error::{MazeError, Result};
use crate::io::persistence;
use crate::io::progress::ProgressManager;
use crate::io::render::render_path;

/// Command-line arguments for the maze steganography tool
#[derive(Parser)]
#[command(name = "stegmaze")]
#[command(
    version,
    about = "Hide a message in a weighted grid maze as its unique shortest path"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Hide a message in a freshly generated maze
    Hide {
        /// Message to hide (ASCII)
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Output file for the maze document
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Random seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print an ASCII preview of the hiding path
        #[arg(short, long)]
        preview: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Recover the message hidden in a maze document
    Reveal {
        /// Maze document produced by `hide`
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Dispatches parsed arguments to the generation or solving pipeline
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Propagates any generation, solving, or I/O error to the caller.
    pub fn run(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Hide {
                message,
                output,
                seed,
                preview,
                quiet,
            } => Self::run_hide(message, output, *seed, *preview, *quiet),
            Command::Reveal { input } => Self::run_reveal(input),
        }
    }

    // Allow print for the preview art requested by the user
    #[allow(clippy::print_stdout)]
    fn run_hide(
        message: &str,
        output: &Path,
        seed: Option<u64>,
        preview: bool,
        quiet: bool,
    ) -> Result<()> {
        validate_message(message)?;

        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let config = GeneratorConfig::default();
        let mut generator = MazeGenerator::with_config(config, seed);
        let progress = (!quiet).then(ProgressManager::new);

        // Drive attempts here so the progress display can narrate them
        let mut last = None;
        let mut maze = None;
        for attempt in 1..=config.max_attempts.max(1) {
            if let Some(ref pm) = progress {
                pm.start_attempt(attempt, config.max_attempts.max(1));
            }
            match generator.attempt(message) {
                Ok(generated) => {
                    maze = Some(generated);
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    last = Some(err);
                }
                Err(err) => {
                    if let Some(ref pm) = progress {
                        pm.abandon();
                    }
                    return Err(err);
                }
            }
        }

        let Some(maze) = maze else {
            if let Some(ref pm) = progress {
                pm.abandon();
            }
            return Err(last.unwrap_or(MazeError::PathConstruction {
                steps: message.len() + 1,
                expansions: 0,
            }));
        };

        persistence::save_maze(&maze, output)?;
        if let Some(ref pm) = progress {
            pm.finish(maze.width(), maze.height());
        }

        if preview {
            // Post-convergence, the solved path is the hiding path
            let path = solver::solve(&maze)?;
            print!("{}", render_path(&path, maze.width(), maze.height()));
        }

        Ok(())
    }

    // Allow print for the recovered message, the command's entire output
    #[allow(clippy::print_stdout)]
    fn run_reveal(input: &Path) -> Result<()> {
        let maze = persistence::load_maze(input)?;
        let message = solver::recover_message(&maze)?;
        println!("{message}");
        Ok(())
    }
}
