//! Reimbursement contribution.
//!
//! Reimbursements are paid at face value; no rate is involved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendancePeriod, ReimbursementRecord};

use super::rounding::round_money;

/// Upper bound on a single reimbursement claim.
pub const MAX_REIMBURSEMENT_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// An employee's reimbursement contribution for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReimbursementContribution {
    /// Number of claims within the period.
    pub claims: usize,
    /// Sum of claim amounts, rounded to cents.
    pub amount: Decimal,
}

/// Folds reimbursement claims into one employee's contribution.
pub fn aggregate_reimbursements(
    employee_id: &str,
    records: &[ReimbursementRecord],
    period: &AttendancePeriod,
) -> ReimbursementContribution {
    let (claims, total) = records
        .iter()
        .filter(|r| r.employee_id == employee_id && period.contains_date(r.date))
        .fold((0usize, Decimal::ZERO), |(n, sum), r| (n + 1, sum + r.amount));

    ReimbursementContribution {
        claims,
        amount: round_money(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn june() -> AttendancePeriod {
        AttendancePeriod {
            id: "06-2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            created_at: Utc::now(),
            created_by: "admin".to_string(),
        }
    }

    fn claim(employee_id: &str, m: u32, d: u32, amount: &str) -> ReimbursementRecord {
        ReimbursementRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, m, d).unwrap(),
            amount: dec(amount),
            description: "taxi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_multiple_claims_same_day_are_all_paid() {
        let records = vec![
            claim("emp_001", 6, 7, "25.50"),
            claim("emp_001", 6, 7, "14.50"),
            claim("emp_001", 6, 20, "10.00"),
        ];
        let result = aggregate_reimbursements("emp_001", &records, &june());
        assert_eq!(result.claims, 3);
        assert_eq!(result.amount, dec("50.00"));
    }

    #[test]
    fn test_weekend_claims_are_accepted() {
        let records = vec![claim("emp_001", 6, 8, "12.00")];
        let result = aggregate_reimbursements("emp_001", &records, &june());
        assert_eq!(result.amount, dec("12.00"));
    }

    #[test]
    fn test_claims_outside_period_or_other_employee_ignored() {
        let records = vec![claim("emp_001", 7, 1, "99.00"), claim("emp_002", 6, 3, "5.00")];
        let result = aggregate_reimbursements("emp_001", &records, &june());
        assert_eq!(result, ReimbursementContribution::default());
    }
}
