//! 2020/2021 federal tax tables.
//!
//! Income and LTCG rows store the amount of money in each bracket bucket,
//! not income limits; the cumulative thresholds are noted alongside.

use super::types::{CreditBracket, EstateBracket, FilingStatus, MarginalBracket};

pub const SINGLE_INCOME_BRACKETS: [MarginalBracket; 7] = [
    MarginalBracket { rate: 0.10, width: 9_875.0 },
    MarginalBracket { rate: 0.12, width: 30_250.0 }, //  40,125
    MarginalBracket { rate: 0.22, width: 45_400.0 }, //  85,525
    MarginalBracket { rate: 0.24, width: 77_805.0 }, // 163,330
    MarginalBracket { rate: 0.32, width: 44_020.0 }, // 207,350
    MarginalBracket { rate: 0.35, width: 311_050.0 }, // 518,400
    MarginalBracket { rate: 0.37, width: f64::INFINITY },
];

pub const MARRIED_INCOME_BRACKETS: [MarginalBracket; 7] = [
    MarginalBracket { rate: 0.10, width: 19_750.0 },
    MarginalBracket { rate: 0.12, width: 60_500.0 }, //  80,250
    MarginalBracket { rate: 0.22, width: 90_800.0 }, // 171,050
    MarginalBracket { rate: 0.24, width: 155_550.0 }, // 326,600
    MarginalBracket { rate: 0.32, width: 88_100.0 }, // 414,700
    MarginalBracket { rate: 0.35, width: 207_350.0 }, // 622,050
    MarginalBracket { rate: 0.37, width: f64::INFINITY },
];

pub const SINGLE_LTCG_BRACKETS: [MarginalBracket; 3] = [
    MarginalBracket { rate: 0.00, width: 40_000.0 },
    MarginalBracket { rate: 0.15, width: 401_450.0 }, // 441,450
    MarginalBracket { rate: 0.20, width: f64::INFINITY },
];

pub const MARRIED_LTCG_BRACKETS: [MarginalBracket; 3] = [
    MarginalBracket { rate: 0.00, width: 80_000.0 },
    MarginalBracket { rate: 0.15, width: 416_600.0 }, // 496,600
    MarginalBracket { rate: 0.20, width: f64::INFINITY },
];

pub const ESTATE_TAX_BRACKETS: [EstateBracket; 12] = [
    EstateBracket { threshold: 0.0, base_tax: 0.0, rate: 0.18 },
    EstateBracket { threshold: 10_000.0, base_tax: 1_800.0, rate: 0.20 },
    EstateBracket { threshold: 20_000.0, base_tax: 3_800.0, rate: 0.22 },
    EstateBracket { threshold: 40_000.0, base_tax: 8_200.0, rate: 0.24 },
    EstateBracket { threshold: 60_000.0, base_tax: 13_000.0, rate: 0.26 },
    EstateBracket { threshold: 80_000.0, base_tax: 18_200.0, rate: 0.28 },
    EstateBracket { threshold: 100_000.0, base_tax: 23_800.0, rate: 0.30 },
    EstateBracket { threshold: 150_000.0, base_tax: 38_800.0, rate: 0.32 },
    EstateBracket { threshold: 250_000.0, base_tax: 70_800.0, rate: 0.34 },
    EstateBracket { threshold: 500_000.0, base_tax: 155_800.0, rate: 0.37 },
    EstateBracket { threshold: 750_000.0, base_tax: 248_300.0, rate: 0.39 },
    EstateBracket { threshold: 1_000_000.0, base_tax: 345_800.0, rate: 0.40 },
];

/// Estate tax exemption for 2021 ($11.7 million).
pub const ESTATE_TAX_EXEMPTION: f64 = 11_700_000.0;

pub const MARRIED_SAVERS_CREDIT_BRACKETS: [CreditBracket; 4] = [
    CreditBracket { agi_limit: 0.0, rate: 0.50 },
    CreditBracket { agi_limit: 39_501.0, rate: 0.20 },
    CreditBracket { agi_limit: 43_001.0, rate: 0.10 },
    CreditBracket { agi_limit: 66_000.0, rate: 0.00 },
];

pub const OTHER_SAVERS_CREDIT_BRACKETS: [CreditBracket; 4] = [
    CreditBracket { agi_limit: 0.0, rate: 0.50 },
    CreditBracket { agi_limit: 19_751.0, rate: 0.20 },
    CreditBracket { agi_limit: 21_501.0, rate: 0.10 },
    CreditBracket { agi_limit: 33_000.0, rate: 0.00 },
];

pub fn income_brackets(status: FilingStatus) -> &'static [MarginalBracket] {
    match status {
        FilingStatus::Single => &SINGLE_INCOME_BRACKETS,
        FilingStatus::Married => &MARRIED_INCOME_BRACKETS,
    }
}

pub fn ltcg_brackets(status: FilingStatus) -> &'static [MarginalBracket] {
    match status {
        FilingStatus::Single => &SINGLE_LTCG_BRACKETS,
        FilingStatus::Married => &MARRIED_LTCG_BRACKETS,
    }
}

pub fn savers_credit_brackets(status: FilingStatus) -> &'static [CreditBracket] {
    match status {
        FilingStatus::Single => &OTHER_SAVERS_CREDIT_BRACKETS,
        FilingStatus::Married => &MARRIED_SAVERS_CREDIT_BRACKETS,
    }
}

pub fn standard_deduction(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::Single => 12_400.0,
        FilingStatus::Married => 24_800.0,
    }
}

/// AGI below this makes traditional IRA contributions fully deductible.
pub fn ira_deduction_limit(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::Single => 65_000.0,
        FilingStatus::Married => 104_000.0,
    }
}
