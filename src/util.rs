use std::fmt::{self, Display};

/// A zero-based spot in a depth chart entry, displayed as its rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub usize);

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "Starter"),
            1 => write!(f, "Second"),
            2 => write!(f, "Third"),
            3 => write!(f, "Fourth"),
            spot => {
                let n = spot.saturating_add(1);
                write!(
                    f,
                    "{}{}",
                    n,
                    match n % 100 {
                        11 | 12 | 13 => "th",
                        _ => match n % 10 {
                            1 => "st",
                            2 => "nd",
                            3 => "rd",
                            _ => "th",
                        },
                    }
                )
            }
        }
    }
}
