//! IRS Single Life Expectancy table (Publication 590-B, pre-2022 edition),
//! used as the divisor for required minimum distributions from inherited
//! tax-deferred accounts.
//!
//! The table ends at age 111; a lookup past the end returns `None`, which is
//! the designed end-of-projection signal for the heir calculation, not an
//! error condition.

// Indexed by age.
const SINGLE_LIFE_EXPECTANCY: [f64; 112] = [
    82.4, 81.6, 80.6, 79.7, 78.7, 77.7, 76.7, 75.8, 74.8, 73.8, // 0-9
    72.8, 71.8, 70.8, 69.9, 68.9, 67.9, 66.9, 66.0, 65.0, 64.0, // 10-19
    63.0, 62.1, 61.1, 60.1, 59.1, 58.2, 57.2, 56.2, 55.3, 54.3, // 20-29
    53.3, 52.4, 51.4, 50.4, 49.4, 48.5, 47.5, 46.5, 45.6, 44.6, // 30-39
    43.6, 42.7, 41.7, 40.7, 39.8, 38.8, 37.9, 37.0, 36.0, 35.1, // 40-49
    34.2, 33.3, 32.3, 31.4, 30.5, 29.6, 28.7, 27.9, 27.0, 26.1, // 50-59
    25.2, 24.4, 23.5, 22.7, 21.8, 21.0, 20.2, 19.4, 18.6, 17.8, // 60-69
    17.0, 16.3, 15.5, 14.8, 14.1, 13.4, 12.7, 12.1, 11.4, 10.8, // 70-79
    10.2, 9.7, 9.1, 8.6, 8.1, 7.6, 7.1, 6.7, 6.3, 5.9, // 80-89
    5.5, 5.2, 4.9, 4.6, 4.3, 4.1, 3.8, 3.6, 3.4, 3.1, // 90-99
    2.9, 2.7, 2.5, 2.3, 2.1, 1.9, 1.7, 1.5, 1.4, 1.2, // 100-109
    1.1, 1.0, // 110-111
];

/// Actuarial divisor for the required withdrawal at `age`, or `None` once
/// the table has no further entries.
pub fn withdrawal_factor(age: u32) -> Option<f64> {
    SINGLE_LIFE_EXPECTANCY.get(age as usize).copied()
}
