//! Generation orchestration
//!
//! Runs the whole pipeline (random walk, weight assignment, correction)
//! and retries the recoverable failures with fresh randomness. All
//! randomness flows from one seeded generator owned here, so a seed pins
//! down the entire generation including every retry.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::corrector::Corrector;
use crate::algorithm::walk;
use crate::algorithm::weights;
use crate::io::configuration::{
    MAX_CORRECTION_ROUNDS, MAX_GENERATION_ATTEMPTS, MAX_MESSAGE_LEN, MAX_WALK_EXPANSIONS,
};
use crate::io::error::{MazeError, Result};
use crate::spatial::grid::Maze;

/// Caps controlling how hard generation tries before giving up
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Full pipeline attempts, each with a fresh path and fresh weights
    pub max_attempts: usize,
    /// Correction rounds per attempt before declaring non-convergence
    pub max_correction_rounds: usize,
    /// Walk search expansions per attempt before abandoning the path
    pub max_walk_expansions: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_GENERATION_ATTEMPTS,
            max_correction_rounds: MAX_CORRECTION_ROUNDS,
            max_walk_expansions: MAX_WALK_EXPANSIONS,
        }
    }
}

/// Maze generator with seeded, reproducible randomness
pub struct MazeGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator with default caps
    pub fn new(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::default(), seed)
    }

    /// Create a generator with explicit caps
    pub fn with_config(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a maze hiding `message`, retrying recoverable failures
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidMessage`] for an unencodable message, and
    /// otherwise the last recoverable error once the attempt cap is spent
    /// ([`MazeError::PathConstruction`] or [`MazeError::DidNotConverge`]).
    pub fn generate(&mut self, message: &str) -> Result<Maze> {
        let mut last = None;
        for attempt in 1..=self.config.max_attempts.max(1) {
            match self.attempt(message) {
                Ok(maze) => {
                    debug!("attempt {attempt} succeeded");
                    return Ok(maze);
                }
                Err(err) if err.is_recoverable() => {
                    debug!("attempt {attempt} failed: {err}");
                    last = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last.unwrap_or(MazeError::PathConstruction {
            steps: message.len() + 1,
            expansions: 0,
        }))
    }

    /// Run a single walk-assign-correct pass
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidMessage`] for an unencodable message,
    /// [`MazeError::PathConstruction`] when no walk was found, or
    /// [`MazeError::DidNotConverge`] when correction hit its round cap.
    pub fn attempt(&mut self, message: &str) -> Result<Maze> {
        validate_message(message)?;

        let steps = message.len() + 1;
        let layout = walk::build_path(steps, self.config.max_walk_expansions, &mut self.rng)?;
        let mut maze = weights::assign_weights(&layout, message, &mut self.rng)?;

        let mut corrector = Corrector::new(&mut maze, &layout.cells);
        let rounds = corrector.run(self.config.max_correction_rounds)?;
        debug!(
            "converged after {rounds} rounds on a {}x{} grid",
            layout.width, layout.height
        );

        Ok(maze)
    }
}

/// Check that a message can be encoded into cell residues
///
/// # Errors
///
/// Returns [`MazeError::InvalidMessage`] when the message is empty, not
/// pure ASCII, or longer than [`MAX_MESSAGE_LEN`].
pub fn validate_message(message: &str) -> Result<()> {
    if message.is_empty() {
        return Err(MazeError::InvalidMessage {
            reason: "message is empty".to_string(),
        });
    }
    if !message.is_ascii() {
        return Err(MazeError::InvalidMessage {
            reason: "message contains non-ASCII characters".to_string(),
        });
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err(MazeError::InvalidMessage {
            reason: format!(
                "message length {} exceeds the {MAX_MESSAGE_LEN}-character ceiling",
                message.len()
            ),
        });
    }
    Ok(())
}
