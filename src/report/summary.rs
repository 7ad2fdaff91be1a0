use crate::format::FormatError;
use crate::model::employee::{Deductions, Earnings};

/// Derived totals of a payslip, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaySummary {
    pub gross_pay: i64,
    pub total_deductions: i64,
    pub net_pay: i64,
}

impl PaySummary {
    pub fn new(earnings: &Earnings, deductions: &Deductions) -> Result<PaySummary, FormatError> {
        let gross_pay = earnings.total().ok_or(FormatError::Overflow("gross pay"))?;
        let total_deductions = deductions
            .total()
            .ok_or(FormatError::Overflow("total deductions"))?;
        let net_pay = gross_pay
            .checked_sub(total_deductions)
            .ok_or(FormatError::Overflow("net pay"))?;

        Ok(PaySummary {
            gross_pay,
            total_deductions,
            net_pay,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sample_summary() {
        let summary = PaySummary::new(
            &Earnings::new(7_000_000, 1_000_000, 0),
            &Deductions::new(560_000, 0, 0),
        )
        .unwrap();

        assert_eq!(8_000_000, summary.gross_pay);
        assert_eq!(560_000, summary.total_deductions);
        assert_eq!(7_440_000, summary.net_pay);
    }

    #[test]
    fn test_all_fields_contribute() {
        let summary = PaySummary::new(
            &Earnings::new(100, 20, 3),
            &Deductions::new(10, 2, 1),
        )
        .unwrap();

        assert_eq!(123, summary.gross_pay);
        assert_eq!(13, summary.total_deductions);
        assert_eq!(110, summary.net_pay);
    }

    #[test]
    fn test_net_pay_can_go_negative() {
        let summary =
            PaySummary::new(&Earnings::new(1_000, 0, 0), &Deductions::new(0, 1_500, 0)).unwrap();

        assert_eq!(-500, summary.net_pay);
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let huge = 6_000_000_000_000_000_000;

        assert_eq!(
            Err(FormatError::Overflow("gross pay")),
            PaySummary::new(&Earnings::new(huge, huge, 0), &Deductions::default())
        );
        assert_eq!(
            Err(FormatError::Overflow("total deductions")),
            PaySummary::new(&Earnings::default(), &Deductions::new(0, huge, huge))
        );
        assert_eq!(
            Err(FormatError::Overflow("net pay")),
            PaySummary::new(&Earnings::new(i64::MIN, 0, 0), &Deductions::new(1, 0, 0))
        );
    }
}
