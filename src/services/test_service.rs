use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed::mock_tests;
use crate::error::{Error, Result};
use crate::models::employee::Employee;
use crate::models::test::{
    Difficulty, NewTest, TestAction, TestCategory, TestRecord, TestStatus, TestView,
};
use crate::services::employee_service::EmployeeDirectory;
use crate::utils::time;

/// Search box plus the three dropdowns of the admin screen. `None` stands
/// for "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestFilter {
    pub search: String,
    pub status: Option<TestStatus>,
    pub category: Option<TestCategory>,
    pub difficulty: Option<Difficulty>,
}

impl TestFilter {
    pub fn matches(&self, test: &TestRecord) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = test.title.to_lowercase().contains(&needle)
            || test.description.to_lowercase().contains(&needle)
            || test.subject.to_lowercase().contains(&needle);

        matches_search
            && self.status.map_or(true, |s| test.status == s)
            && self.category.map_or(true, |c| test.category == c)
            && self.difficulty.map_or(true, |d| test.difficulty == d)
    }
}

/// Sole owner of the in-memory test collection. Only `status` is ever
/// mutated, records are never removed, and ids stay unique.
#[derive(Debug, Clone)]
pub struct TestCatalog {
    tests: Vec<TestRecord>,
    employees: EmployeeDirectory,
}

impl TestCatalog {
    pub fn new(tests: Vec<TestRecord>, employees: EmployeeDirectory) -> Self {
        Self { tests, employees }
    }

    pub fn seeded() -> Self {
        Self::new(mock_tests(), EmployeeDirectory::seeded())
    }

    pub fn list(&self) -> &[TestRecord] {
        &self.tests
    }

    pub fn filter(&self, filter: &TestFilter) -> Vec<TestRecord> {
        self.view(filter, TestView::All)
    }

    /// Filtered tests as shown on one tab, still in insertion order.
    pub fn view(&self, filter: &TestFilter, view: TestView) -> Vec<TestRecord> {
        self.tests
            .iter()
            .filter(|t| filter.matches(t) && view.includes(t))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<&TestRecord> {
        self.tests
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Test not found: {}", id)))
    }

    pub fn create(&mut self, new_test: NewTest) -> TestRecord {
        let test = TestRecord {
            id: self.next_id(),
            title: new_test.title,
            description: new_test.description,
            category: new_test.category,
            subject: new_test.subject,
            difficulty: new_test.difficulty,
            question_count: new_test.question_count,
            duration_minutes: new_test.duration_minutes,
            created_by: new_test.created_by,
            created_at: time::now(),
            status: TestStatus::Draft,
            analytics: None,
        };
        self.tests.push(test.clone());
        test
    }

    /// Replaces the status of one test. Every transition is accepted.
    pub fn set_status(&mut self, id: &str, status: TestStatus) -> Result<TestRecord> {
        let test = self
            .tests
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Test not found: {}", id)))?;
        test.status = status;
        Ok(test.clone())
    }

    pub fn apply_action(&mut self, id: &str, action: TestAction) -> Result<TestRecord> {
        self.set_status(id, action.target_status())
    }

    /// Totals per status; statuses without tests report zero.
    pub fn status_counts(&self) -> BTreeMap<TestStatus, usize> {
        let mut counts: BTreeMap<TestStatus, usize> =
            TestStatus::all().into_iter().map(|s| (s, 0)).collect();
        for test in &self.tests {
            *counts.entry(test.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn lookup_employee_name(&self, employee_id: &str) -> &str {
        self.employees.lookup_name(employee_id)
    }

    pub fn employees(&self) -> &[Employee] {
        self.employees.list()
    }

    // `test{len + 1}` unless a seeded or earlier id already took it.
    fn next_id(&self) -> String {
        let mut n = self.tests.len() + 1;
        loop {
            let candidate = format!("test{}", n);
            if !self.tests.iter().any(|t| t.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[derive(Clone)]
pub struct TestService {
    catalog: Arc<RwLock<TestCatalog>>,
}

impl TestService {
    pub fn new(catalog: TestCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TestCatalog>> {
        self.catalog
            .read()
            .map_err(|_| Error::Internal("Test catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TestCatalog>> {
        self.catalog
            .write()
            .map_err(|_| Error::Internal("Test catalog lock poisoned".to_string()))
    }

    pub fn list_tests(&self) -> Result<Vec<TestRecord>> {
        Ok(self.read()?.list().to_vec())
    }

    pub fn filter_tests(&self, filter: &TestFilter) -> Result<Vec<TestRecord>> {
        Ok(self.read()?.filter(filter))
    }

    pub fn view_tests(&self, filter: &TestFilter, view: TestView) -> Result<Vec<TestRecord>> {
        Ok(self.read()?.view(filter, view))
    }

    pub fn get_test(&self, id: &str) -> Result<TestRecord> {
        let catalog = self.read()?;
        catalog.get(id).cloned().map_err(|e| {
            tracing::warn!("Test lookup failed for id {}", id);
            e
        })
    }

    pub fn create_test(&self, new_test: NewTest) -> Result<TestRecord> {
        let test = self.write()?.create(new_test);
        tracing::info!(
            test_id = %test.id,
            created_by = %test.created_by,
            "Created draft test '{}'",
            test.title
        );
        Ok(test)
    }

    pub fn set_status(&self, id: &str, status: TestStatus) -> Result<TestRecord> {
        match self.write()?.set_status(id, status) {
            Ok(test) => {
                tracing::info!(test_id = %id, status = %status, "Test status updated");
                Ok(test)
            }
            Err(e) => {
                tracing::warn!(test_id = %id, status = %status, "Status change for unknown test");
                Err(e)
            }
        }
    }

    pub fn apply_action(&self, id: &str, action: TestAction) -> Result<TestRecord> {
        tracing::info!(test_id = %id, ?action, "Applying review action");
        self.set_status(id, action.target_status())
    }

    pub fn status_counts(&self) -> Result<BTreeMap<TestStatus, usize>> {
        Ok(self.read()?.status_counts())
    }

    pub fn lookup_employee_name(&self, employee_id: &str) -> Result<String> {
        Ok(self.read()?.lookup_employee_name(employee_id).to_string())
    }

    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.read()?.employees().to_vec())
    }
}
