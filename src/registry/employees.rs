//! Employee registry with registration validation.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeDraft};

/// Highest accepted hourly rate.
///
/// Keeps a full day of quarter-hour blocks well inside `Decimal` range.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Registered employees in registration order.
///
/// The registry enforces the registration rules: a non-empty trimmed name
/// that no other employee uses, and a positive hourly rate no higher than
/// [`MAX_HOURLY_RATE`].
///
/// # Examples
///
/// ```
/// use shift_payroll::models::EmployeeDraft;
/// use shift_payroll::registry::EmployeeRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = EmployeeRegistry::new();
/// let employee = registry
///     .register(EmployeeDraft::new("Yamada Taro", Decimal::new(1200, 0)))
///     .unwrap();
///
/// assert_eq!(registry.get(&employee.id), Some(&employee));
/// assert!(registry
///     .register(EmployeeDraft::new("Yamada Taro", Decimal::new(1000, 0)))
///     .is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from persisted records.
    ///
    /// Persisted records must already satisfy the registration rules.
    ///
    /// # Errors
    ///
    /// - `InvalidEmployee` for a blank or untrimmed name or a rate out of range
    /// - `DuplicateEmployeeName` if two records share a name
    pub fn from_employees(employees: Vec<Employee>) -> PayrollResult<Self> {
        let mut registry = Self::new();
        for employee in employees {
            check_name(&employee.name)?;
            if employee.name.trim() != employee.name {
                return Err(PayrollError::InvalidEmployee {
                    field: "name".to_string(),
                    message: format!("stored name '{}' has surrounding whitespace", employee.name),
                });
            }
            check_hourly_rate(employee.hourly_rate)?;

            if registry.find_by_name(&employee.name).is_some() {
                return Err(PayrollError::DuplicateEmployeeName {
                    name: employee.name,
                });
            }
            registry.employees.push(employee);
        }
        Ok(registry)
    }

    /// All employees in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employee is registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Looks up an employee by identifier.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up an employee by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Registers a new employee with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// - `InvalidEmployee` if the trimmed name is empty or the rate is not
    ///   positive or above [`MAX_HOURLY_RATE`]
    /// - `DuplicateEmployeeName` if the trimmed name is already registered
    pub fn register(&mut self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let name = self.validate(&draft, None)?;

        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            name,
            hourly_rate: draft.hourly_rate,
        };
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Replaces the name and rate of an existing employee.
    ///
    /// The employee keeps its identifier and position. The name check ignores
    /// the employee being edited, so saving an unchanged name succeeds.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let index = self.position(id)?;
        let name = self.validate(&draft, Some(id))?;

        let employee = &mut self.employees[index];
        employee.name = name;
        employee.hourly_rate = draft.hourly_rate;
        Ok(employee.clone())
    }

    /// Removes an employee and returns it.
    pub fn remove(&mut self, id: &str) -> PayrollResult<Employee> {
        let index = self.position(id)?;
        Ok(self.employees.remove(index))
    }

    fn position(&self, id: &str) -> PayrollResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })
    }

    /// Checks a draft and returns its trimmed name.
    fn validate(&self, draft: &EmployeeDraft, editing: Option<&str>) -> PayrollResult<String> {
        let name = draft.trimmed_name();
        check_name(name)?;

        let taken = self
            .employees
            .iter()
            .any(|e| e.name == name && Some(e.id.as_str()) != editing);
        if taken {
            return Err(PayrollError::DuplicateEmployeeName {
                name: name.to_string(),
            });
        }

        check_hourly_rate(draft.hourly_rate)?;

        Ok(name.to_string())
    }
}

fn check_name(name: &str) -> PayrollResult<()> {
    if name.trim().is_empty() {
        return Err(PayrollError::InvalidEmployee {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn check_hourly_rate(rate: Decimal) -> PayrollResult<()> {
    if rate <= Decimal::ZERO {
        return Err(PayrollError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if rate > MAX_HOURLY_RATE {
        return Err(PayrollError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: format!("must not exceed {}", MAX_HOURLY_RATE),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, rate: i64) -> EmployeeDraft {
        EmployeeDraft::new(name, Decimal::new(rate, 0))
    }

    #[test]
    fn test_register_assigns_id_and_trims_name() {
        let mut registry = EmployeeRegistry::new();
        let employee = registry.register(draft("  Yamada Taro  ", 1200)).unwrap();

        assert_eq!(employee.name, "Yamada Taro");
        assert_eq!(employee.hourly_rate, Decimal::new(1200, 0));
        assert!(Uuid::parse_str(&employee.id).is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_keeps_registration_order() {
        let mut registry = EmployeeRegistry::new();
        registry.register(draft("Sato", 1000)).unwrap();
        registry.register(draft("Abe", 1100)).unwrap();
        registry.register(draft("Kato", 1200)).unwrap();

        let names: Vec<&str> = registry.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sato", "Abe", "Kato"]);
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut registry = EmployeeRegistry::new();
        registry.register(draft("Yamada Taro", 1200)).unwrap();

        match registry.register(draft(" Yamada Taro", 900)) {
            Err(PayrollError::DuplicateEmployeeName { name }) => assert_eq!(name, "Yamada Taro"),
            other => panic!("Expected DuplicateEmployeeName, got {:?}", other),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let mut registry = EmployeeRegistry::new();
        match registry.register(draft("   ", 1200)) {
            Err(PayrollError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_non_positive_rate() {
        let mut registry = EmployeeRegistry::new();
        for rate in [0, -500] {
            match registry.register(draft("Yamada Taro", rate)) {
                Err(PayrollError::InvalidEmployee { field, .. }) => assert_eq!(field, "hourly_rate"),
                other => panic!("Expected InvalidEmployee, got {:?}", other),
            }
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_rate_above_maximum() {
        let mut registry = EmployeeRegistry::new();
        let huge = EmployeeDraft::new("Yamada Taro", Decimal::MAX);
        match registry.register(huge) {
            Err(PayrollError::InvalidEmployee { field, .. }) => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }

        let at_limit = registry
            .register(EmployeeDraft::new("Yamada Taro", MAX_HOURLY_RATE))
            .unwrap();
        assert_eq!(at_limit.hourly_rate, MAX_HOURLY_RATE);

        let employee_id = at_limit.id.clone();
        let over = registry.update(&employee_id, EmployeeDraft::new("Yamada Taro", MAX_HOURLY_RATE + Decimal::ONE));
        assert!(matches!(over, Err(PayrollError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_update_changes_fields_in_place() {
        let mut registry = EmployeeRegistry::new();
        let first = registry.register(draft("Sato", 1000)).unwrap();
        registry.register(draft("Abe", 1100)).unwrap();

        let updated = registry.update(&first.id, draft("Sato Ichiro", 1300)).unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.name, "Sato Ichiro");
        assert_eq!(registry.employees()[0], updated);
    }

    #[test]
    fn test_update_allows_keeping_own_name() {
        let mut registry = EmployeeRegistry::new();
        let employee = registry.register(draft("Sato", 1000)).unwrap();

        let updated = registry.update(&employee.id, draft("Sato", 1050)).unwrap();
        assert_eq!(updated.hourly_rate, Decimal::new(1050, 0));
    }

    #[test]
    fn test_update_rejects_name_of_other_employee() {
        let mut registry = EmployeeRegistry::new();
        let sato = registry.register(draft("Sato", 1000)).unwrap();
        registry.register(draft("Abe", 1100)).unwrap();

        let result = registry.update(&sato.id, draft("Abe", 1000));
        assert!(matches!(
            result,
            Err(PayrollError::DuplicateEmployeeName { .. })
        ));
        assert_eq!(registry.get(&sato.id).unwrap().name, "Sato");
    }

    #[test]
    fn test_update_unknown_id_returns_not_found() {
        let mut registry = EmployeeRegistry::new();
        let result = registry.update("missing", draft("Sato", 1000));
        assert!(matches!(result, Err(PayrollError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_remove_returns_employee() {
        let mut registry = EmployeeRegistry::new();
        let employee = registry.register(draft("Sato", 1000)).unwrap();

        let removed = registry.remove(&employee.id).unwrap();
        assert_eq!(removed, employee);
        assert!(registry.get(&employee.id).is_none());
        assert!(matches!(
            registry.remove(&employee.id),
            Err(PayrollError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_removed_name_can_be_registered_again() {
        let mut registry = EmployeeRegistry::new();
        let employee = registry.register(draft("Sato", 1000)).unwrap();
        registry.remove(&employee.id).unwrap();

        assert!(registry.register(draft("Sato", 1000)).is_ok());
    }

    #[test]
    fn test_from_employees_rejects_duplicate_names() {
        let employees = vec![
            Employee {
                id: "a".to_string(),
                name: "Sato".to_string(),
                hourly_rate: Decimal::new(1000, 0),
            },
            Employee {
                id: "b".to_string(),
                name: "Sato".to_string(),
                hourly_rate: Decimal::new(1100, 0),
            },
        ];

        assert!(matches!(
            EmployeeRegistry::from_employees(employees),
            Err(PayrollError::DuplicateEmployeeName { .. })
        ));
    }

    fn stored(id: &str, name: &str, rate: Decimal) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            hourly_rate: rate,
        }
    }

    #[test]
    fn test_from_employees_accepts_valid_records() {
        let registry = EmployeeRegistry::from_employees(vec![
            stored("a", "Sato", Decimal::new(1000, 0)),
            stored("b", "Abe", Decimal::new(105050, 2)),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_name("Abe").unwrap().id, "b");
    }

    #[test]
    fn test_from_employees_rejects_invalid_records() {
        let invalid = [
            stored("a", "   ", Decimal::new(1000, 0)),
            stored("a", " Sato", Decimal::new(1000, 0)),
            stored("a", "Sato", Decimal::ZERO),
            stored("a", "Sato", Decimal::new(-1000, 0)),
            stored("a", "Sato", Decimal::MAX),
        ];

        for employee in invalid {
            let result = EmployeeRegistry::from_employees(vec![employee.clone()]);
            assert!(
                matches!(result, Err(PayrollError::InvalidEmployee { .. })),
                "{:?} should be rejected",
                employee
            );
        }
    }
}
