//! ASCII-art rendering of paths

use std::collections::HashSet;

use crate::spatial::cell::Cell;

/// Render a path as bordered ASCII art, one `#` per path cell
///
/// The caller owns printing; this only builds the picture.
pub fn render_path(cells: &[Cell], width: usize, height: usize) -> String {
    let occupied: HashSet<Cell> = cells.iter().copied().collect();
    let border = "-".repeat(width + 2);

    let mut art = String::with_capacity((width + 3) * (height + 2));
    art.push_str(&border);
    art.push('\n');
    for y in 0..height {
        art.push('|');
        for x in 0..width {
            let mark = occupied.contains(&Cell::new(x as i32, y as i32));
            art.push(if mark { '#' } else { ' ' });
        }
        art.push_str("|\n");
    }
    art.push_str(&border);
    art.push('\n');
    art
}
