use crate::database::seed::mock_employees;
use crate::models::employee::Employee;

/// Label used when a creator id has no directory entry.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Read-only id → employee table.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn seeded() -> Self {
        Self::new(mock_employees())
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    pub fn lookup_name(&self, employee_id: &str) -> &str {
        self.get(employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_EMPLOYEE)
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
