//! Text rendering of boards for the CLI.

use crate::fleet::Fleet;
use crate::grid::Grid;

/// Render `grid` as aligned text columns, occupied cells shown by ship name,
/// empty cells as `.`. Column width follows the longest name so rows line up.
pub fn render_grid(grid: &Grid, fleet: &Fleet) -> String {
    let width = fleet
        .iter()
        .map(|class| class.name().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for y in 0..grid.size() {
        let mut row = String::new();
        for x in 0..grid.size() {
            if x > 0 {
                row.push(' ');
            }
            let name = match grid.cell(x, y).ok().flatten() {
                Some(index) => fleet.get(index).map(|c| c.name()).unwrap_or("?"),
                None => ".",
            };
            row.push_str(&format!("{:<1$}", name, width));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
