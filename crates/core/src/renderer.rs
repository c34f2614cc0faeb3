use std::fmt::Display;

use crate::game::{Board, BoxPos, Move, Side};

const DOT: &str = "+";
const HORIZONTAL_LINE: &str = "---";
const VERTICAL_LINE: &str = "|";

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..=self.rows() {
            write!(f, " {DOT}")?;
            for col in 0..self.cols() {
                let line = if self[Move::horizontal(row, col)] {
                    HORIZONTAL_LINE
                } else {
                    "   "
                };
                write!(f, "{line}{DOT}")?;
            }
            writeln!(f)?;

            if row == self.rows() {
                break;
            }

            write!(f, " ")?;
            for col in 0..=self.cols() {
                let line = if self[Move::vertical(row, col)] {
                    VERTICAL_LINE
                } else {
                    " "
                };
                write!(f, "{line}")?;

                if col < self.cols() {
                    let owner = self[BoxPos::new(row, col)].map_or(' ', Side::initial);
                    write!(f, " {owner} ")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Position: {}", self.to_notation())?;
        writeln!(
            f,
            "Score: {} {} - {} {}",
            Side::First,
            self.score(Side::First),
            self.score(Side::Second),
            Side::Second
        )?;

        Ok(())
    }
}
