use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cell of the Eisenhower matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    /// Urgent and important.
    DoFirst,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither.
    Eliminate,
}

impl Quadrant {
    /// Board order: top-left, top-right, bottom-left, bottom-right.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "DO_FIRST",
            Quadrant::Schedule => "SCHEDULE",
            Quadrant::Delegate => "DELEGATE",
            Quadrant::Eliminate => "ELIMINATE",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Urgent & Important",
            Quadrant::Schedule => "Not Urgent but Important",
            Quadrant::Delegate => "Urgent but Not Important",
            Quadrant::Eliminate => "Neither Urgent nor Important",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Quadrant::DoFirst => 0,
            Quadrant::Schedule => 1,
            Quadrant::Delegate => 2,
            Quadrant::Eliminate => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Quadrant> {
        Self::ALL.get(index).copied()
    }

    /// Next quadrant in board order, wrapping around.
    pub fn next(self) -> Quadrant {
        Self::ALL[(self.index() + 1) % 4]
    }

    pub fn prev(self) -> Quadrant {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// (row, column) in the 2x2 grid.
    pub fn grid_position(self) -> (usize, usize) {
        let index = self.index();
        (index / 2, index % 2)
    }

    fn at_grid(row: usize, column: usize) -> Option<Quadrant> {
        if row > 1 || column > 1 {
            return None;
        }
        Self::from_index(row * 2 + column)
    }

    pub fn left(self) -> Option<Quadrant> {
        let (row, column) = self.grid_position();
        column.checked_sub(1).and_then(|c| Self::at_grid(row, c))
    }

    pub fn right(self) -> Option<Quadrant> {
        let (row, column) = self.grid_position();
        Self::at_grid(row, column + 1)
    }

    pub fn up(self) -> Option<Quadrant> {
        let (row, column) = self.grid_position();
        row.checked_sub(1).and_then(|r| Self::at_grid(r, column))
    }

    pub fn down(self) -> Option<Quadrant> {
        let (row, column) = self.grid_position();
        Self::at_grid(row + 1, column)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Quadrant {
    type Err = String;

    /// Case-insensitive; accepts `DO_FIRST`, `do-first`, `do first` and `dofirst`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "dofirst" => Ok(Quadrant::DoFirst),
            "schedule" => Ok(Quadrant::Schedule),
            "delegate" => Ok(Quadrant::Delegate),
            "eliminate" => Ok(Quadrant::Eliminate),
            _ => Err(format!(
                "unknown quadrant '{}', expected one of DO_FIRST, SCHEDULE, DELEGATE, ELIMINATE",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        for quadrant in Quadrant::ALL {
            let json = serde_json::to_string(&quadrant).unwrap();
            assert_eq!(json, format!("\"{}\"", quadrant.wire_name()));
        }
        let parsed: Quadrant = serde_json::from_str("\"DO_FIRST\"").unwrap();
        assert_eq!(parsed, Quadrant::DoFirst);
        assert!(serde_json::from_str::<Quadrant>("\"URGENT\"").is_err());
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("DO_FIRST".parse::<Quadrant>(), Ok(Quadrant::DoFirst));
        assert_eq!("do-first".parse::<Quadrant>(), Ok(Quadrant::DoFirst));
        assert_eq!("Do First".parse::<Quadrant>(), Ok(Quadrant::DoFirst));
        assert_eq!("schedule".parse::<Quadrant>(), Ok(Quadrant::Schedule));
        assert_eq!("DELEGATE".parse::<Quadrant>(), Ok(Quadrant::Delegate));
        assert_eq!("eliminate".parse::<Quadrant>(), Ok(Quadrant::Eliminate));
        assert!("later".parse::<Quadrant>().is_err());
    }

    #[test]
    fn test_cycling() {
        assert_eq!(Quadrant::DoFirst.next(), Quadrant::Schedule);
        assert_eq!(Quadrant::Eliminate.next(), Quadrant::DoFirst);
        assert_eq!(Quadrant::DoFirst.prev(), Quadrant::Eliminate);
        for quadrant in Quadrant::ALL {
            assert_eq!(quadrant.next().prev(), quadrant);
            assert_eq!(Quadrant::from_index(quadrant.index()), Some(quadrant));
        }
    }

    #[test]
    fn test_grid_neighbours() {
        assert_eq!(Quadrant::DoFirst.right(), Some(Quadrant::Schedule));
        assert_eq!(Quadrant::DoFirst.down(), Some(Quadrant::Delegate));
        assert_eq!(Quadrant::DoFirst.left(), None);
        assert_eq!(Quadrant::DoFirst.up(), None);
        assert_eq!(Quadrant::Eliminate.left(), Some(Quadrant::Delegate));
        assert_eq!(Quadrant::Eliminate.up(), Some(Quadrant::Schedule));
        assert_eq!(Quadrant::Eliminate.right(), None);
        assert_eq!(Quadrant::Eliminate.down(), None);
    }
}
