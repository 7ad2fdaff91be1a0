use super::employee::*;
use super::period::*;

/// Everything needed to render one employee's payslip for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct SalarySlip {
    pub company: Company,
    pub employee: Employee,
    pub period: PayPeriod,
    pub earnings: Earnings,
    pub deductions: Deductions,
    pub leave: LeaveSummary,
}

impl SalarySlip {
    pub fn new(
        company: Company,
        employee: Employee,
        period: PayPeriod,
        earnings: Earnings,
        deductions: Deductions,
        leave: LeaveSummary,
    ) -> SalarySlip {
        SalarySlip {
            company,
            employee,
            period,
            earnings,
            deductions,
            leave,
        }
    }
}

#[cfg(test)]
pub mod fixture {
    use chrono::NaiveDate;

    use super::*;

    pub fn sample_slip() -> SalarySlip {
        SalarySlip::new(
            Company::default(),
            Employee {
                name: String::from("T W K D A Dayarathna"),
                number: String::from("177"),
                designation: String::from("Head of IT"),
                phone: String::from("94 78 600 4040"),
                account_number: String::from("8006616706"),
                bank_branch: String::from("Commercial Bank - Matara"),
            },
            PayPeriod::new(
                NaiveDate::from_ymd_opt(2024, 10, 31).unwrap(),
                PayType::Monthly,
                None,
            ),
            Earnings::new(7_000_000, 1_000_000, 0),
            Deductions::new(560_000, 0, 0),
            LeaveSummary::default(),
        )
    }
}
