use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayType {
    #[default]
    Monthly,
    Weekly,
    Daily,
}

impl fmt::Display for PayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayType::Monthly => "Monthly",
            PayType::Weekly => "Weekly",
            PayType::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayPeriod {
    pub pay_date: NaiveDate,
    pub pay_type: PayType,
    pub label: String,
}

impl PayPeriod {
    /// Without an explicit label the period is named after the pay date's
    /// month, e.g. `Oct 2024`.
    pub fn new(pay_date: NaiveDate, pay_type: PayType, label: Option<String>) -> PayPeriod {
        let label = label.unwrap_or_else(|| pay_date.format("%b %Y").to_string());
        PayPeriod {
            pay_date,
            pay_type,
            label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveSummary {
    pub absent_dates: Option<String>,
    pub sick_leaves: Option<String>,
    pub leave_balance: Option<String>,
}
