use super::brackets::{
    ESTATE_TAX_BRACKETS, ESTATE_TAX_EXEMPTION, income_brackets, ira_deduction_limit,
    ltcg_brackets, savers_credit_brackets, standard_deduction,
};
use super::rmd::withdrawal_factor;
use super::types::{FilingStatus, MarginalBracket};

/// Total tax from applying an ascending progressive schedule to `amount`,
/// slice by slice at each bracket's marginal rate.
pub fn apply_progressive(amount: f64, brackets: &[MarginalBracket]) -> f64 {
    assert!(amount >= 0.0, "amount must be >= 0, got {amount:.2}");
    apply_progressive_traced(amount, brackets, false)
}

fn apply_progressive_traced(amount: f64, brackets: &[MarginalBracket], debug: bool) -> f64 {
    let mut remaining = amount;
    let mut total = 0.0;
    for bracket in brackets {
        let slice = remaining.min(bracket.width);
        let taxes_at_rate = slice * bracket.rate;
        if debug {
            println!(
                "rate {:.2}: {slice:>14.2} taxed = {taxes_at_rate:>12.2}",
                bracket.rate
            );
        }
        total += taxes_at_rate;
        remaining -= slice;
        // slice == remaining in the final bracket makes this subtraction
        // exact; <= rather than == guards against drift at boundaries.
        if remaining <= 0.0 {
            break;
        }
    }
    total
}

/// Federal income tax for one year: ordinary tax on `agi` less the standard
/// deduction, plus long-term capital gains tax with the gains stacked on top
/// of ordinary income on the LTCG schedule's shared income axis.
///
/// The first `agi` dollars of each LTCG bracket are consumed by ordinary
/// income and contribute nothing; only the width left over taxes the gains.
/// That is how low-AGI filers land gains entirely in the 0% bucket while
/// high-AGI filers pay 15-20% from the first dollar of gains.
///
/// `just_ltcg` returns only the gains component; `debug` prints the
/// per-bracket trace to stdout.
pub fn calculate_taxes(
    agi: f64,
    status: FilingStatus,
    ltcg: f64,
    just_ltcg: bool,
    debug: bool,
) -> f64 {
    assert!(agi >= 0.0, "agi must be >= 0, got {agi:.2}");
    assert!(ltcg >= 0.0, "ltcg must be >= 0, got {ltcg:.2}");

    if debug {
        println!("Calculating federal income tax");
    }
    let income_to_tax = (agi - standard_deduction(status)).max(0.0);
    let income_taxes = apply_progressive_traced(income_to_tax, income_brackets(status), debug);
    if debug {
        println!("{}", "=".repeat(60));
        println!("Total: ${income_taxes:.2}\n");
        println!("Calculating long-term capital gains tax");
    }

    let mut gains_to_tax = ltcg;
    let mut ltcg_taxes = 0.0;
    // Dollars of the unreduced AGI+LTCG continuum already accounted for.
    let mut taxed_income = 0.0;
    for bracket in ltcg_brackets(status) {
        let mut width = bracket.width;
        if taxed_income < agi {
            let occupied = (agi - taxed_income).min(width);
            if debug {
                println!(
                    "rate {:.2}: {occupied:>14.2} occupied by ordinary income",
                    bracket.rate
                );
            }
            taxed_income += occupied;
            width -= occupied;
            if agi - taxed_income > 0.0 {
                continue;
            }
            if width <= 0.0 {
                continue;
            }
        }
        let slice = gains_to_tax.min(width);
        let taxes_at_rate = slice * bracket.rate;
        if debug {
            println!(
                "rate {:.2}: {slice:>14.2} taxed = {taxes_at_rate:>12.2}",
                bracket.rate
            );
        }
        ltcg_taxes += taxes_at_rate;
        gains_to_tax -= slice;
        taxed_income += slice;
        if gains_to_tax <= 0.0 {
            break;
        }
    }
    if debug {
        println!("{}", "=".repeat(60));
        println!("Total: ${ltcg_taxes:.2}\n");
    }

    if just_ltcg {
        ltcg_taxes
    } else {
        income_taxes + ltcg_taxes
    }
}

/// Federal estate tax after the $11.7M exemption. The schedule's base-tax
/// column is cumulative, so this is a single descending lookup plus linear
/// extrapolation above the matched threshold.
pub fn calculate_estate_taxes(estate: f64) -> f64 {
    assert!(estate > 0.0, "estate must be > 0, got {estate:.2}");
    let taxable_estate = (estate - ESTATE_TAX_EXEMPTION).max(0.0);
    if taxable_estate == 0.0 {
        return 0.0;
    }
    for bracket in ESTATE_TAX_BRACKETS.iter().rev() {
        if taxable_estate > bracket.threshold {
            return bracket.base_tax + (taxable_estate - bracket.threshold) * bracket.rate;
        }
    }
    unreachable!("estate schedule starts at threshold 0")
}

/// Retirement savings contributions credit: the rate of the highest schedule
/// row at or below `agi`, applied to the whole contribution.
pub fn calculate_savers_credit(
    agi: f64,
    retirement_contributions: f64,
    status: FilingStatus,
) -> f64 {
    assert!(agi >= 0.0, "agi must be >= 0, got {agi:.2}");
    for bracket in savers_credit_brackets(status).iter().rev() {
        if agi >= bracket.agi_limit {
            return retirement_contributions * bracket.rate;
        }
    }
    unreachable!("savers' credit schedule starts at AGI 0")
}

/// Ordinary income tax an heir owes over the forced drawdown of an inherited
/// tax-deferred account: each year's required withdrawal is the remaining
/// balance divided by the age's actuarial factor, taxed as married ordinary
/// income, until the factor table runs out.
pub fn calculate_minimum_remaining_taxes_for_heir(value: f64, age: u32) -> f64 {
    assert!(value > 0.0, "account value must be > 0, got {value:.2}");
    let mut value = value;
    let mut age = age;
    let mut total_taxes = 0.0;
    while let Some(divisor) = withdrawal_factor(age) {
        let rmd = value / divisor;
        value -= rmd;
        total_taxes += calculate_taxes(rmd, FilingStatus::Married, 0.0, false, false);
        age += 1;
    }
    total_taxes
}

/// Whether traditional IRA contributions are fully deductible at this AGI.
pub fn fully_tax_deductible_ira(agi: f64, status: FilingStatus) -> bool {
    assert!(agi >= 0.0, "agi must be >= 0, got {agi:.2}");
    agi < ira_deduction_limit(status)
}
