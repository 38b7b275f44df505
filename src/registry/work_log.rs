//! Append-only log of recorded shifts.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::WorkEntry;

/// Highest accepted transportation fee per shift.
pub const MAX_TRANSPORTATION_FEE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Checks that a transportation fee is between zero and [`MAX_TRANSPORTATION_FEE`].
pub fn check_transportation_fee(fee: Decimal) -> PayrollResult<()> {
    let message = if fee < Decimal::ZERO {
        "must not be negative".to_string()
    } else if fee > MAX_TRANSPORTATION_FEE {
        format!("must not exceed {}", MAX_TRANSPORTATION_FEE)
    } else {
        return Ok(());
    };

    Err(PayrollError::InvalidWorkEntry {
        field: "transportation_fee".to_string(),
        message,
    })
}

/// Recorded work entries in submission order.
///
/// Entries can only be appended; there is no way to edit or remove one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLog {
    entries: Vec<WorkEntry>,
}

impl WorkLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from persisted entries.
    ///
    /// Returns `InvalidWorkEntry` if a stored fee is out of range.
    pub fn from_entries(entries: Vec<WorkEntry>) -> PayrollResult<Self> {
        for entry in &entries {
            check_transportation_fee(entry.transportation_fee)?;
        }
        Ok(Self { entries })
    }

    /// Appends an entry at the end of the log.
    pub fn append(&mut self, entry: WorkEntry) {
        self.entries.push(entry);
    }

    /// All entries in submission order.
    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&WorkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries recorded for one employee, in submission order.
    pub fn for_employee<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a WorkEntry> {
        self.entries
            .iter()
            .filter(move |e| e.employee_id == employee_id)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
