mod brackets;
mod engine;
mod rmd;
mod types;

pub use brackets::{
    ESTATE_TAX_BRACKETS, ESTATE_TAX_EXEMPTION, MARRIED_INCOME_BRACKETS, MARRIED_LTCG_BRACKETS,
    SINGLE_INCOME_BRACKETS, SINGLE_LTCG_BRACKETS, income_brackets, ira_deduction_limit,
    ltcg_brackets, savers_credit_brackets, standard_deduction,
};
pub use engine::{
    apply_progressive, calculate_estate_taxes, calculate_minimum_remaining_taxes_for_heir,
    calculate_savers_credit, calculate_taxes, fully_tax_deductible_ira,
};
pub use rmd::withdrawal_factor;
pub use types::{CreditBracket, EstateBracket, FilingStatus, MarginalBracket};
