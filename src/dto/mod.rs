use std::{fs, path::Path};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::model;

mod naive_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Largest accepted money field, in cents. Three fields must sum without
/// overflowing `i64`.
const MAX_FIELD_CENTS: i64 = i64::MAX / 3;

fn to_cents(field: &str, value: f64) -> anyhow::Result<i64> {
    if !value.is_finite() || value < 0.0 {
        bail!("{field} must be a non-negative amount, got {value}");
    }
    let cents = (value * 100.0).round();
    if cents > MAX_FIELD_CENTS as f64 {
        bail!("{field} is too large, got {value}");
    }
    Ok(cents as i64)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Company {
    name: String,
    address: String,
    phone: String,
}

impl Company {
    pub fn to_model(self) -> model::employee::Company {
        model::employee::Company::new(self.name, self.address, self.phone)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Employee {
    name: String,
    number: String,
    designation: String,
    phone: String,
    account_number: String,
    bank_branch: String,
}

impl Employee {
    pub fn to_model(self) -> model::employee::Employee {
        model::employee::Employee {
            name: self.name,
            number: self.number,
            designation: self.designation,
            phone: self.phone,
            account_number: self.account_number,
            bank_branch: self.bank_branch,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PayType {
    Monthly,
    Weekly,
    Daily,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PayPeriod {
    #[serde(with = "naive_date_format")]
    pay_date: NaiveDate,
    #[serde(default)]
    pay_type: Option<PayType>,
    #[serde(default)]
    label: Option<String>,
}

impl PayPeriod {
    pub fn to_model(self) -> model::period::PayPeriod {
        let pay_type = match self.pay_type {
            Some(PayType::Monthly) | None => model::period::PayType::Monthly,
            Some(PayType::Weekly) => model::period::PayType::Weekly,
            Some(PayType::Daily) => model::period::PayType::Daily,
        };
        model::period::PayPeriod::new(self.pay_date, pay_type, self.label)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Earnings {
    basic_salary: f64,
    #[serde(default)]
    fixed_allowances: f64,
    #[serde(default)]
    fuel_commission: f64,
}

impl Earnings {
    pub fn to_model(&self) -> anyhow::Result<model::employee::Earnings> {
        Ok(model::employee::Earnings::new(
            to_cents("earnings.basic_salary", self.basic_salary)?,
            to_cents("earnings.fixed_allowances", self.fixed_allowances)?,
            to_cents("earnings.fuel_commission", self.fuel_commission)?,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Deductions {
    #[serde(default)]
    epf: f64,
    #[serde(default)]
    advances: f64,
    #[serde(default)]
    loan_repayments: f64,
}

impl Deductions {
    pub fn to_model(&self) -> anyhow::Result<model::employee::Deductions> {
        Ok(model::employee::Deductions::new(
            to_cents("deductions.epf", self.epf)?,
            to_cents("deductions.advances", self.advances)?,
            to_cents("deductions.loan_repayments", self.loan_repayments)?,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LeaveSummary {
    absent_dates: Option<String>,
    sick_leaves: Option<String>,
    leave_balance: Option<String>,
}

impl LeaveSummary {
    pub fn to_model(self) -> model::period::LeaveSummary {
        model::period::LeaveSummary {
            absent_dates: self.absent_dates,
            sick_leaves: self.sick_leaves,
            leave_balance: self.leave_balance,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SalarySlip {
    company: Option<Company>,
    employee: Employee,
    period: PayPeriod,
    earnings: Earnings,
    #[serde(default)]
    deductions: Deductions,
    #[serde(default)]
    leave: LeaveSummary,
}

impl SalarySlip {
    pub fn to_model(self) -> anyhow::Result<model::slip::SalarySlip> {
        let earnings = self.earnings.to_model()?;
        let deductions = self.deductions.to_model()?;

        Ok(model::slip::SalarySlip::new(
            self.company.map(Company::to_model).unwrap_or_default(),
            self.employee.to_model(),
            self.period.to_model(),
            earnings,
            deductions,
            self.leave.to_model(),
        ))
    }
}

pub fn parse_slip(contents: &str) -> anyhow::Result<model::slip::SalarySlip> {
    let slip: SalarySlip = serde_yaml::from_str(contents).context("Invalid payslip document")?;
    slip.to_model()
}

pub fn load_slip(path: &Path) -> anyhow::Result<model::slip::SalarySlip> {
    debug!(path = %path.display(), "loading payslip");

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payslip from {:?}", path))?;

    parse_slip(&contents).with_context(|| format!("Failed to load payslip from {:?}", path))
}
