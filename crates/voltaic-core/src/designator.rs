//! Reference designators such as `R1` or `C12`.

use std::fmt;

/// A type letter plus an index identifying one component instance.
///
/// Negative indices are provisional: the component was referenced without an
/// explicit number and is waiting for automatic numbering. Resolved indices
/// are always `>= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Designator {
    letter: String,
    index: i32,
}

impl Designator {
    /// Creates a designator from a type letter and an index.
    pub fn new(letter: impl Into<String>, index: i32) -> Self {
        Self {
            letter: letter.into(),
            index,
        }
    }

    /// The type letter(s), e.g. `R`.
    pub fn letter(&self) -> &str {
        &self.letter
    }

    /// The numeric index. Negative while provisional.
    pub fn index(&self) -> i32 {
        self.index
    }

    /// True while the designator is waiting for automatic numbering.
    pub fn is_provisional(&self) -> bool {
        self.index < 0
    }

    /// Replaces the index, keeping the letter.
    pub fn with_index(&self, index: i32) -> Self {
        Self {
            letter: self.letter.clone(),
            index,
        }
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_provisional() {
            write!(f, "{}?{}", self.letter, -self.index)
        } else {
            write!(f, "{}{}", self.letter, self.index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_resolved() {
        assert_eq!(Designator::new("R", 1).to_string(), "R1");
        assert_eq!(Designator::new("IC", 12).to_string(), "IC12");
    }

    #[test]
    fn test_display_provisional() {
        let designator = Designator::new("C", -3);
        assert!(designator.is_provisional());
        assert_eq!(designator.to_string(), "C?3");
    }

    #[test]
    fn test_with_index_keeps_letter() {
        let designator = Designator::new("D", -1).with_index(4);
        assert_eq!(designator, Designator::new("D", 4));
        assert!(!designator.is_provisional());
    }
}
