//! Frontend Models
//!
//! Data structures matching the organization API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Embedded summary of a department's parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentSummary {
    pub id: u32,
    pub name: String,
}

/// Department (division) record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub parent: Option<ParentSummary>,
    pub level: u32,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub ambassador_name: Option<String>,
    #[serde(default)]
    pub children_count: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Department {
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(EmployeeStatus::Active),
            "inactive" => Some(EmployeeStatus::Inactive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee (collaborator) record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    #[serde(deserialize_with = "number_or_string")]
    pub salary: f64,
    pub hire_date: String,
    pub department: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub years_of_service: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hire date as `YYYY-MM-DD`, dropping any time component
    pub fn hire_day(&self) -> &str {
        self.hire_date.get(..10).unwrap_or(&self.hire_date)
    }
}

/// Decimal columns arrive either as JSON numbers or as strings like "3500.00"
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ========================
// Pagination
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub current_page: u32,
    pub from: Option<u32>,
    pub last_page: u32,
    #[serde(default)]
    pub path: String,
    pub per_page: u32,
    pub to: Option<u32>,
    pub total: u64,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Links,
    pub meta: Meta,
}

/// `{ "data": ... }` wrapper used by single-resource endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// ========================
// Statistics
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub total_employees: u32,
    pub active_employees: u32,
    pub inactive_employees: u32,
    #[serde(default)]
    pub departments_count: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub average_salary: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub total_payroll: f64,
    #[serde(default)]
    pub by_department: Vec<DepartmentCount>,
    #[serde(default)]
    pub recent_hires: u32,
}

// ========================
// Mutation payloads
// ========================

/// Body for department create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPayload {
    pub name: String,
    pub parent_id: Option<u32>,
    pub level: u32,
    pub employee_count: u32,
    pub ambassador_name: Option<String>,
}

/// Body for employee create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DepartmentForm;

    #[test]
    fn test_department_list_response() {
        let json = r#"{
            "data": [
                {"id": 1, "name": "Dirección", "parent_id": null, "level": 1,
                 "employee_count": 4, "ambassador_name": null, "children_count": 2,
                 "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"},
                {"id": 2, "name": "IT", "parent_id": 1, "parent": {"id": 1, "name": "Dirección"},
                 "level": 2, "employee_count": 9, "ambassador_name": "Ana",
                 "created_at": "2024-01-02T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z"}
            ],
            "links": {"first": "/departments?page=1", "last": "/departments?page=1", "prev": null, "next": null},
            "meta": {"current_page": 1, "from": 1, "last_page": 1, "path": "/departments",
                     "per_page": 10, "to": 2, "total": 2}
        }"#;

        let page: Paginated<Department> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].parent_name(), Some("Dirección"));
        assert_eq!(page.data[1].children_count, 0);
        assert_eq!(page.meta.total, 2);
        assert!(page.links.prev.is_none());
    }

    #[test]
    fn test_employee_salary_as_string() {
        let json = r#"{
            "id": 7, "first_name": "Juan", "last_name": "Pérez", "email": "juan@acme.test",
            "position": "Dev", "salary": "3500.50", "hire_date": "2023-05-01T00:00:00.000000Z",
            "department": "IT", "status": "inactive"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary, 3500.5);
        assert_eq!(employee.status, EmployeeStatus::Inactive);
        assert_eq!(employee.hire_day(), "2023-05-01");
        assert_eq!(employee.full_name(), "Juan Pérez");
    }

    #[test]
    fn test_empty_page_meta() {
        let json = r#"{"data": [], "meta": {"current_page": 1, "from": null, "last_page": 1,
                       "per_page": 10, "to": null, "total": 0}}"#;
        let page: Paginated<Employee> = serde_json::from_str(json).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.from, None);
    }

    #[test]
    fn test_cleared_optional_fields_are_sent_as_null() {
        let department = Department {
            id: 4,
            name: "IT".to_string(),
            parent_id: None,
            parent: None,
            level: 1,
            employee_count: 2,
            ambassador_name: Some("Ana".to_string()),
            children_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let mut form = DepartmentForm::from_department(&department);
        form.ambassador_name.clear();

        let value = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(value["parent_id"], serde_json::Value::Null);
        assert_eq!(value.get("ambassador_name"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_employee_payload_keeps_empty_optionals() {
        let payload = EmployeePayload {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            email: "juan@acme.test".to_string(),
            phone: None,
            position: "Dev".to_string(),
            salary: 1200.0,
            hire_date: "2024-01-10".to_string(),
            department: "IT".to_string(),
            status: EmployeeStatus::Active,
            address: None,
            notes: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        for key in ["phone", "address", "notes"] {
            assert_eq!(value.get(key), Some(&serde_json::Value::Null), "{} should be null", key);
        }
    }
}
