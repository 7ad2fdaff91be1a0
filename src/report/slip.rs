use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::format::currency::format_cents;
use crate::format::words::amount_in_words;
use crate::format::FormatError;
use crate::model::slip::SalarySlip;

use super::summary::PaySummary;

const WIDTH: usize = 76;
const LABEL_WIDTH: usize = 20;

const CONFIDENTIALITY_NOTE: &str =
    "All matters related to salary and other benefits are strictly confidential.";

/// A salary slip with its totals worked out, ready to be displayed.
pub struct Payslip<'s> {
    slip: &'s SalarySlip,
    summary: PaySummary,
    net_pay_in_words: String,
}

impl<'s> Payslip<'s> {
    pub fn new(slip: &'s SalarySlip) -> Result<Payslip<'s>, FormatError> {
        let summary = PaySummary::new(&slip.earnings, &slip.deductions)?;
        let net_pay_in_words = amount_in_words(summary.net_pay)?;

        Ok(Payslip {
            slip,
            summary,
            net_pay_in_words,
        })
    }

    pub fn summary(&self) -> &PaySummary {
        &self.summary
    }

    pub fn net_pay_in_words(&self) -> &str {
        &self.net_pay_in_words
    }

    pub fn print_to_file(&self, destination: &Path) -> anyhow::Result<()> {
        fs::write(destination, self.to_string())
            .with_context(|| format!("Failed to write payslip to {:?}", destination))
    }

    fn fmt_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let company = &self.slip.company;
        let title = "SALARY SHEET";
        writeln!(
            f,
            "{:<width$}{}",
            company.name,
            title,
            width = WIDTH.saturating_sub(title.len()).max(company.name.len() + 1)
        )?;
        writeln!(f, "{}", company.address)?;
        writeln!(f, "Tel: {}", company.phone)?;
        rule(f, '=')
    }

    fn fmt_employee(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let employee = &self.slip.employee;
        writeln!(f, "EMPLOYEE INFORMATION")?;
        for (label, value) in [
            ("Name", &employee.name),
            ("Employee Number", &employee.number),
            ("Designation", &employee.designation),
            ("Phone", &employee.phone),
            ("Account Number", &employee.account_number),
            ("Bank and Branch", &employee.bank_branch),
        ] {
            writeln!(f, "  {:<w$}: {}", label, value, w = LABEL_WIDTH)?;
        }
        writeln!(f)?;

        let period = &self.slip.period;
        writeln!(f, "  {:<16}{:<16}{}", "PAY DATE", "PAY TYPE", "PERIOD")?;
        writeln!(
            f,
            "  {:<16}{:<16}{}",
            period.pay_date.format("%d/%m/%Y").to_string(),
            period.pay_type.to_string(),
            period.label
        )
    }

    fn fmt_earnings(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let earnings = &self.slip.earnings;
        writeln!(f, "SALARY PARTICULARS")?;
        amount_row(f, "Basic Salary", earnings.basic_salary)?;
        amount_row(f, "Fixed Allowances", earnings.fixed_allowances)?;
        amount_row(f, "Fuel and Sales Commissions", earnings.fuel_commission)?;
        rule(f, '-')?;
        amount_row(f, "GROSS PAY", self.summary.gross_pay)
    }

    fn fmt_deductions(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let deductions = &self.slip.deductions;
        writeln!(f, "DEDUCTIONS")?;
        amount_row(f, "EPF 8%", deductions.epf)?;
        amount_row(f, "Salary Advances", deductions.advances)?;
        amount_row(f, "Loan Repayments/No Pay", deductions.loan_repayments)?;
        rule(f, '-')?;
        amount_row(f, "TOTAL DEDUCTIONS", self.summary.total_deductions)
    }

    fn fmt_net_pay(&self, f: &mut fmt::Formatter) -> fmt::Result {
        rule(f, '=')?;
        let net_pay = format!("{} LKR", format_cents(self.summary.net_pay));
        writeln!(f, "{:<w$}{:>24}", "NET PAY", net_pay, w = WIDTH - 24)?;
        rule(f, '=')?;
        writeln!(f, "AMOUNT IN WORDS: {}", self.net_pay_in_words)
    }

    fn fmt_leave(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let leave = &self.slip.leave;
        writeln!(f, "LEAVE SUMMARY")?;
        for (label, value) in [
            ("Absent Dates:", &leave.absent_dates),
            ("Sick/Medical Leaves:", &leave.sick_leaves),
            ("Leave Balance C/F:", &leave.leave_balance),
        ] {
            match value {
                Some(value) => writeln!(f, "  {:<w$}  {}", label, value, w = LABEL_WIDTH)?,
                None => writeln!(f, "  {}", label)?,
            }
        }
        Ok(())
    }

    fn fmt_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let half = WIDTH / 2;
        let line = "_".repeat(half - 6);
        writeln!(f, "{:<half$}{}", line, line)?;
        writeln!(
            f,
            "{:<half$}{}",
            "HR/Payroll Department", "Employee Signature & Date"
        )?;
        writeln!(f)?;
        writeln!(f, "{}", CONFIDENTIALITY_NOTE)
    }
}

fn rule(f: &mut fmt::Formatter, c: char) -> fmt::Result {
    writeln!(f, "{}", c.to_string().repeat(WIDTH))
}

fn amount_row(f: &mut fmt::Formatter, label: &str, cents: i64) -> fmt::Result {
    writeln!(
        f,
        "  {:<w$}{:>20}",
        label,
        format_cents(cents),
        w = WIDTH - 22
    )
}

impl fmt::Display for Payslip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_header(f)?;
        writeln!(f)?;
        self.fmt_employee(f)?;
        writeln!(f)?;
        self.fmt_earnings(f)?;
        writeln!(f)?;
        self.fmt_deductions(f)?;
        writeln!(f)?;
        self.fmt_net_pay(f)?;
        writeln!(f)?;
        self.fmt_leave(f)?;
        writeln!(f)?;
        writeln!(f)?;
        self.fmt_footer(f)
    }
}
