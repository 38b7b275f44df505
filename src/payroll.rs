//! Payroll service tying the registry, the work log and the store together.
//!
//! Every mutation is applied to a copy, persisted, and only then committed,
//! so the in-memory state never runs ahead of what the store holds.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::calculate_shift;
use crate::calculation::calculate_work_entry;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{CalculationResult, Employee, EmployeeDraft, WorkEntry, WorkSubmission};
use crate::registry::{EmployeeRegistry, WorkLog, check_transportation_fee};
use crate::store::{EMPLOYEES_KEY, KeyValueStore, WORK_ENTRIES_KEY, load_records, save_records};

/// The payroll application state.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{EmployeeDraft, WorkSubmission};
/// use shift_payroll::payroll::Payroll;
/// use shift_payroll::store::MemoryStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut payroll = Payroll::open(Box::new(MemoryStore::new()))?;
/// let employee = payroll.register_employee(EmployeeDraft::new("Yamada Taro", Decimal::new(1200, 0)))?;
///
/// let (entry, result) = payroll.submit_work_entry(
///     WorkSubmission {
///         employee_id: employee.id.clone(),
///         start_time: "09:00".parse()?,
///         end_time: "17:30".parse()?,
///         transportation_fee: Decimal::new(500, 0),
///     },
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// )?;
///
/// assert_eq!(entry.employee_id, employee.id);
/// assert_eq!(result.total_salary, Decimal::new(10700, 0));
/// # Ok::<(), shift_payroll::error::PayrollError>(())
/// ```
pub struct Payroll {
    registry: EmployeeRegistry,
    work_log: WorkLog,
    store: Box<dyn KeyValueStore>,
}

impl Payroll {
    /// Loads employees and work entries from the store.
    pub fn open(store: Box<dyn KeyValueStore>) -> PayrollResult<Self> {
        let employees: Vec<Employee> = load_records(store.as_ref(), EMPLOYEES_KEY)?;
        let entries: Vec<WorkEntry> = load_records(store.as_ref(), WORK_ENTRIES_KEY)?;

        debug!(
            employees = employees.len(),
            work_entries = entries.len(),
            "Loaded payroll records"
        );

        Ok(Self {
            registry: EmployeeRegistry::from_employees(employees)?,
            work_log: WorkLog::from_entries(entries)?,
            store,
        })
    }

    /// Registered employees in registration order.
    pub fn employees(&self) -> &[Employee] {
        self.registry.employees()
    }

    /// Looks up an employee by identifier.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.registry.get(id)
    }

    /// Recorded work entries in submission order.
    pub fn work_entries(&self) -> &[WorkEntry] {
        self.work_log.entries()
    }

    /// Work entries of one registered employee, in submission order.
    ///
    /// Returns `EmployeeNotFound` if no such employee is registered.
    pub fn work_entries_for(&self, employee_id: &str) -> PayrollResult<Vec<WorkEntry>> {
        let employee = self
            .employee(employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        Ok(self.work_log.for_employee(&employee.id).cloned().collect())
    }

    /// Registers a new employee and persists the registry.
    pub fn register_employee(&mut self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let mut registry = self.registry.clone();
        let employee = registry.register(draft)?;
        self.commit_registry(registry)?;

        debug!(employee_id = %employee.id, name = %employee.name, "Registered employee");
        Ok(employee)
    }

    /// Changes an employee's name and rate and persists the registry.
    pub fn update_employee(&mut self, id: &str, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let mut registry = self.registry.clone();
        let employee = registry.update(id, draft)?;
        self.commit_registry(registry)?;

        debug!(employee_id = %employee.id, "Updated employee");
        Ok(employee)
    }

    /// Removes an employee and persists the registry.
    ///
    /// Work entries recorded for the employee stay in the log.
    pub fn remove_employee(&mut self, id: &str) -> PayrollResult<Employee> {
        let mut registry = self.registry.clone();
        let employee = registry.remove(id)?;
        self.commit_registry(registry)?;

        debug!(employee_id = %employee.id, "Removed employee");
        Ok(employee)
    }

    /// Calculates one shift and appends it to the work log.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the submission names an unknown employee
    /// - `InvalidWorkEntry` if the transportation fee is negative or above
    ///   [`MAX_TRANSPORTATION_FEE`](crate::registry::MAX_TRANSPORTATION_FEE)
    /// - `Storage` if the log could not be persisted; nothing is appended then
    pub fn submit_work_entry(
        &mut self,
        submission: WorkSubmission,
        date: NaiveDate,
    ) -> PayrollResult<(WorkEntry, CalculationResult)> {
        let employee = self.registry.get(&submission.employee_id).ok_or_else(|| {
            PayrollError::EmployeeNotFound {
                id: submission.employee_id.clone(),
            }
        })?;

        check_transportation_fee(submission.transportation_fee)?;

        let result = calculate_shift(
            employee.hourly_rate,
            submission.start_time,
            submission.end_time,
            submission.transportation_fee,
        );

        let entry = WorkEntry {
            id: Uuid::new_v4().to_string(),
            employee_id: submission.employee_id,
            start_time: submission.start_time,
            end_time: submission.end_time,
            transportation_fee: submission.transportation_fee,
            date,
        };

        let mut work_log = self.work_log.clone();
        work_log.append(entry.clone());
        save_records(self.store.as_mut(), WORK_ENTRIES_KEY, work_log.entries())?;
        self.work_log = work_log;

        debug!(
            entry_id = %entry.id,
            employee_id = %entry.employee_id,
            working_minutes = result.working_minutes,
            rounded_minutes = result.rounded_minutes,
            total_salary = %result.total_salary,
            "Recorded work entry"
        );
        Ok((entry, result))
    }

    /// Recomputes the result of a recorded entry with the employee's current rate.
    pub fn recalculate(&self, entry_id: &str) -> PayrollResult<CalculationResult> {
        let entry = self
            .work_log
            .get(entry_id)
            .ok_or_else(|| PayrollError::WorkEntryNotFound {
                id: entry_id.to_string(),
            })?;
        let employee =
            self.registry
                .get(&entry.employee_id)
                .ok_or_else(|| PayrollError::EmployeeNotFound {
                    id: entry.employee_id.clone(),
                })?;

        Ok(calculate_work_entry(entry, employee))
    }

    fn commit_registry(&mut self, registry: EmployeeRegistry) -> PayrollResult<()> {
        save_records(self.store.as_mut(), EMPLOYEES_KEY, registry.employees())?;
        self.registry = registry;
        Ok(())
    }
}

impl fmt::Debug for Payroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payroll")
            .field("employees", &self.registry.len())
            .field("work_entries", &self.work_log.len())
            .finish_non_exhaustive()
    }
}
