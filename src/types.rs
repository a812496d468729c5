//! Core data types shared by the evaluator and the display layer.

/// One independently-checkable password rule, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    LengthAndNoSpace,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl Criterion {
    /// All criteria in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::LengthAndNoSpace,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::SpecialCharacter,
    ];

    /// Human-readable requirement label for indicator rows.
    pub fn requirement(&self) -> &'static str {
        match self {
            Criterion::LengthAndNoSpace => "8-32 characters (no spaces)",
            Criterion::Uppercase => "uppercase letter (A-Z)",
            Criterion::Lowercase => "lowercase (a-z)",
            Criterion::Digit => "digit (0-9)",
            Criterion::SpecialCharacter => "special character (e.g. !@#$%^)",
        }
    }
}

/// Result of one evaluation call: the five criterion booleans.
///
/// A snapshot is a pure function of the evaluated text. It carries no
/// history; display stickiness lives in [`PasswordStatus`](crate::PasswordStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaSnapshot {
    pub length_and_no_space: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special_character: bool,
}

impl CriteriaSnapshot {
    /// Returns the result for a single criterion.
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::LengthAndNoSpace => self.length_and_no_space,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Digit => self.digit,
            Criterion::SpecialCharacter => self.special_character,
        }
    }

    /// Number of satisfied character classes (the four non-length criteria).
    pub fn met_class_count(&self) -> usize {
        [self.uppercase, self.lowercase, self.digit, self.special_character]
            .iter()
            .filter(|&&met| met)
            .count()
    }

    /// True if every criterion, length included, is satisfied.
    pub fn all_met(&self) -> bool {
        self.length_and_no_space && self.met_class_count() == 4
    }
}
