use super::Field;
use std::fmt;

const SEPARATOR: &str = "-------------";

impl Field {
    /// Debug dump: one glyph per cell, one line per matrix row, framed by separators.
    /// Not a stable format.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|obj| obj.obj_type().glyph()).collect();
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}
