//! Employee model and the editable fields used to register or update one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee paid by the hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, unique among registered employees.
    pub name: String,
    /// Pay per hour in whole currency units.
    pub hourly_rate: Decimal,
}

/// The user-supplied fields of an employee.
///
/// A draft is what a registration or edit form submits. The registry
/// validates it and either creates a new [`Employee`] or applies it to an
/// existing one.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::EmployeeDraft;
/// use rust_decimal::Decimal;
///
/// let draft = EmployeeDraft::new("  Yamada Taro ", Decimal::new(1200, 0));
/// assert_eq!(draft.trimmed_name(), "Yamada Taro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Display name as entered.
    pub name: String,
    /// Pay per hour in whole currency units.
    pub hourly_rate: Decimal,
}

impl EmployeeDraft {
    /// Creates a draft from a name and an hourly rate.
    pub fn new(name: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
        }
    }

    /// The name with surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}
