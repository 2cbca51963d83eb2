//! Canonical text rendering for diagnostics.

use std::fmt;

use crate::volume::Volume;

impl<T: fmt::Display, E> fmt::Display for Volume<T, E> {
    /// Renders dimensions first (rows, columns, planes), then each plane
    /// labeled with its 1-based index as `height` lines of `width`
    /// space-separated cells. Exact spacing is a convenience, not a
    /// contract; output is one-way and never parsed back in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows: {}", self.height())?;
        writeln!(f, "columns: {}", self.width())?;
        writeln!(f, "planes: {}", self.depth())?;
        for plane in 0..self.depth() {
            writeln!(f, "plane {}:", plane + 1)?;
            for row in 0..self.height() {
                for col in 0..self.width() {
                    if col > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", self.at(plane, row, col))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
