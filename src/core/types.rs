#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilingStatus {
    Single,
    Married,
}

impl FilingStatus {
    pub fn from_married(married: bool) -> Self {
        if married {
            FilingStatus::Married
        } else {
            FilingStatus::Single
        }
    }

    pub fn is_married(self) -> bool {
        self == FilingStatus::Married
    }
}

/// One row of a progressive schedule: `width` dollars taxed at `rate`.
/// Widths are bucket sizes, not income limits; the last row is infinite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarginalBracket {
    pub rate: f64,
    pub width: f64,
}

/// One row of the estate schedule. `base_tax` is the precomputed cumulative
/// tax on everything below `threshold`, so applying a row is a single lookup
/// plus linear extrapolation rather than a slice sum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EstateBracket {
    pub threshold: f64,
    pub base_tax: f64,
    pub rate: f64,
}

/// One row of the savers' credit schedule: the credit rate that applies from
/// `agi_limit` upward, until the next row takes over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CreditBracket {
    pub agi_limit: f64,
    pub rate: f64,
}
