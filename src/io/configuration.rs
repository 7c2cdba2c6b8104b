//! Algorithm constants and runtime configuration defaults

// Weight encoding
/// Modulus separating a weight's character residue from its magnitude.
/// Every printable ASCII code fits below it.
pub const ASCII_MAX: u32 = 128;

/// Exclusive ceiling for cell weights, kept well under `u32::MAX` so the
/// correction loop can shift magnitudes without overflow checks
pub const CELL_MAX: u32 = 100_000;

/// Longest accepted message, tied to the number of whole `ASCII_MAX` units
/// that fit under the weight ceiling
pub const MAX_MESSAGE_LEN: usize = (CELL_MAX / ASCII_MAX) as usize;

// Random walk construction
/// Exponent applied to the walk length to pick the endpoint's Manhattan
/// distance from the origin
pub const REACH_EXPONENT: f64 = 0.75;

/// Upper bound on walk search expansions before the attempt is abandoned
pub const MAX_WALK_EXPANSIONS: usize = 250_000;

/// Fraction of each axis span added as empty border around the path
pub const MARGIN_DIVISOR: usize = 10;

// Correction loop
/// Divisor turning the larger mismatch count into a per-round batch size
pub const BATCH_DIVISOR: usize = 10;

/// Upper bound on correction rounds before convergence is abandoned
pub const MAX_CORRECTION_ROUNDS: usize = 10_000;

// Generation retry policy
/// Attempts (fresh path and weights each) before generation gives up
pub const MAX_GENERATION_ATTEMPTS: usize = 16;

// Persisted grid format
/// Marker string for the starting sentinel cell
pub const BEGIN_MARKER: &str = "BEGIN";
/// Marker string for the final sentinel cell
pub const END_MARKER: &str = "END";

// Filler cells
/// First printable filler residue (space)
pub const PRINTABLE_MIN: u32 = 0x20;
/// Last printable filler residue (tilde)
pub const PRINTABLE_MAX: u32 = 0x7E;
