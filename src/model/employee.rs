#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Company {
    pub fn new(name: String, address: String, phone: String) -> Company {
        Company {
            name,
            address,
            phone,
        }
    }
}

impl Default for Company {
    fn default() -> Company {
        Company::new(
            String::from("Dunhinda Agro International (Pvt) Ltd"),
            String::from("Level 12, East Tower, World Trade Centre, Co 01."),
            String::from("+94 112 337 886"),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub number: String,
    pub designation: String,
    pub phone: String,
    pub account_number: String,
    pub bank_branch: String,
}

/// Earnings for one pay period, in cents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Earnings {
    pub basic_salary: i64,
    pub fixed_allowances: i64,
    pub fuel_commission: i64,
}

impl Earnings {
    pub fn new(basic_salary: i64, fixed_allowances: i64, fuel_commission: i64) -> Earnings {
        Earnings {
            basic_salary,
            fixed_allowances,
            fuel_commission,
        }
    }

    /// `None` when the sum does not fit in `i64`.
    pub fn total(&self) -> Option<i64> {
        self.basic_salary
            .checked_add(self.fixed_allowances)?
            .checked_add(self.fuel_commission)
    }
}

/// Deductions for one pay period, in cents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deductions {
    pub epf: i64,
    pub advances: i64,
    pub loan_repayments: i64,
}

impl Deductions {
    pub fn new(epf: i64, advances: i64, loan_repayments: i64) -> Deductions {
        Deductions {
            epf,
            advances,
            loan_repayments,
        }
    }

    /// `None` when the sum does not fit in `i64`.
    pub fn total(&self) -> Option<i64> {
        self.epf
            .checked_add(self.advances)?
            .checked_add(self.loan_repayments)
    }
}
