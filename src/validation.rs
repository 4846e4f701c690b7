//! Form Validation
//!
//! Raw form input for the division and collaborator modals, checked before
//! anything is sent to the API.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ValidationErrors;
use crate::models::{Department, DepartmentPayload, Employee, EmployeePayload, EmployeeStatus};
use crate::tree::ParentChoice;

pub const DEPARTMENT_NAME_MAX: usize = 45;
pub const PERSON_NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;
pub const ADDRESS_MAX: usize = 255;
pub const NOTES_MAX: usize = 1000;
pub const SALARY_MAX: f64 = 999_999.99;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

fn too_long(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Division modal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentForm {
    pub name: String,
    pub parent: ParentChoice,
    pub level: String,
    pub employee_count: String,
    pub ambassador_name: String,
}

impl DepartmentForm {
    pub fn from_department(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            parent: ParentChoice::from_parent_id(department.parent_id),
            level: department.level.to_string(),
            employee_count: department.employee_count.to_string(),
            ambassador_name: department.ambassador_name.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<DepartmentPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        } else if too_long(name, DEPARTMENT_NAME_MAX) {
            errors.push("name", format!("Maximum {} characters", DEPARTMENT_NAME_MAX));
        }

        let level = match self.level.trim() {
            "" => {
                errors.push("level", "Level is required");
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(level) if level >= 1 => Some(level),
                _ => {
                    errors.push("level", "Minimum level 1");
                    None
                }
            },
        };

        let employee_count = match self.employee_count.trim() {
            "" => {
                errors.push("employee_count", "Employee count is required");
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(count) => Some(count),
                Err(_) => {
                    errors.push("employee_count", "Minimum 0");
                    None
                }
            },
        };

        match (level, employee_count) {
            (Some(level), Some(employee_count)) if errors.is_empty() => Ok(DepartmentPayload {
                name: name.to_string(),
                parent_id: self.parent.parent_id(),
                level,
                employee_count,
                ambassador_name: optional(&self.ambassador_name),
            }),
            _ => Err(errors),
        }
    }
}

/// Collaborator modal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub address: String,
    pub notes: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
            hire_date: employee.hire_day().to_string(),
            department: employee.department.clone(),
            status: employee.status,
            address: employee.address.clone().unwrap_or_default(),
            notes: employee.notes.clone().unwrap_or_default(),
        }
    }

    /// Check every field; `today` bounds the hire date
    pub fn validate(&self, today: NaiveDate) -> Result<EmployeePayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.push("first_name", "First name is required");
        } else if too_long(first_name, PERSON_NAME_MAX) {
            errors.push("first_name", format!("Maximum {} characters", PERSON_NAME_MAX));
        }

        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.push("last_name", "Last name is required");
        } else if too_long(last_name, PERSON_NAME_MAX) {
            errors.push("last_name", format!("Maximum {} characters", PERSON_NAME_MAX));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.push("email", "Invalid email");
        } else if too_long(email, EMAIL_MAX) {
            errors.push("email", format!("Maximum {} characters", EMAIL_MAX));
        }

        if too_long(self.phone.trim(), PHONE_MAX) {
            errors.push("phone", format!("Maximum {} characters", PHONE_MAX));
        }

        if self.department.trim().is_empty() {
            errors.push("department", "Department is required");
        }
        if self.position.trim().is_empty() {
            errors.push("position", "Position is required");
        }

        let salary = match self.salary.trim() {
            "" => {
                errors.push("salary", "Salary is required");
                None
            }
            raw => match raw.replace(',', "").parse::<f64>() {
                Ok(salary) if salary.is_finite() && (0.0..=SALARY_MAX).contains(&salary) => Some(salary),
                _ => {
                    errors.push("salary", "Salary must be a number between 0 and 999,999.99");
                    None
                }
            },
        };

        let hire_date = match self.hire_date.trim() {
            "" => {
                errors.push("hire_date", "Hire date is required");
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if date <= today => Some(date),
                Ok(_) => {
                    errors.push("hire_date", "Hire date cannot be in the future");
                    None
                }
                Err(_) => {
                    errors.push("hire_date", "Invalid date");
                    None
                }
            },
        };

        if too_long(self.address.trim(), ADDRESS_MAX) {
            errors.push("address", format!("Maximum {} characters", ADDRESS_MAX));
        }
        if too_long(self.notes.trim(), NOTES_MAX) {
            errors.push("notes", format!("Maximum {} characters", NOTES_MAX));
        }

        match (salary, hire_date) {
            (Some(salary), Some(hire_date)) if errors.is_empty() => Ok(EmployeePayload {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: optional(&self.phone),
                position: self.position.trim().to_string(),
                salary,
                hire_date: hire_date.format("%Y-%m-%d").to_string(),
                department: self.department.trim().to_string(),
                status: self.status,
                address: optional(&self.address),
                notes: optional(&self.notes),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_employee() -> EmployeeForm {
        EmployeeForm {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            email: "juan.perez@empresa.com".to_string(),
            phone: "+51 999 999 999".to_string(),
            position: "Developer".to_string(),
            salary: "3,500.50".to_string(),
            hire_date: "2024-06-15".to_string(),
            department: "IT".to_string(),
            status: EmployeeStatus::Active,
            address: String::new(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn test_department_form_valid() {
        let form = DepartmentForm {
            name: "  Recursos Humanos ".to_string(),
            parent: ParentChoice::Department(3),
            level: "2".to_string(),
            employee_count: "0".to_string(),
            ambassador_name: String::new(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Recursos Humanos");
        assert_eq!(payload.parent_id, Some(3));
        assert_eq!(payload.employee_count, 0);
        assert_eq!(payload.ambassador_name, None);
    }

    #[test]
    fn test_department_form_rules() {
        let form = DepartmentForm {
            name: "x".repeat(46),
            parent: ParentChoice::NoParent,
            level: "0".to_string(),
            employee_count: "-1".to_string(),
            ambassador_name: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("name").as_deref(), Some("Maximum 45 characters"));
        assert_eq!(errors.message_for("level").as_deref(), Some("Minimum level 1"));
        assert_eq!(errors.message_for("employee_count").as_deref(), Some("Minimum 0"));
    }

    #[test]
    fn test_department_required_fields() {
        let errors = DepartmentForm::default().validate().unwrap_err();
        assert!(errors.message_for("name").is_some());
        assert!(errors.message_for("level").is_some());
        assert!(errors.message_for("employee_count").is_some());
    }

    #[test]
    fn test_department_round_trip_from_record() {
        let department = Department {
            id: 9,
            name: "Ventas".to_string(),
            parent_id: None,
            parent: None,
            level: 1,
            employee_count: 12,
            ambassador_name: Some("Ana".to_string()),
            children_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let payload = DepartmentForm::from_department(&department).validate().unwrap();
        assert_eq!(payload.parent_id, None);
        assert_eq!(payload.ambassador_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_employee_form_valid() {
        let payload = valid_employee().validate(today()).unwrap();
        assert_eq!(payload.salary, 3500.5);
        assert_eq!(payload.hire_date, "2024-06-15");
        assert_eq!(payload.notes, None);
        assert_eq!(payload.phone.as_deref(), Some("+51 999 999 999"));
    }

    #[test]
    fn test_employee_future_hire_date() {
        let form = EmployeeForm {
            hire_date: "2024-06-16".to_string(),
            ..valid_employee()
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.message_for("hire_date").as_deref(), Some("Hire date cannot be in the future"));
    }

    #[test]
    fn test_employee_email_and_salary() {
        let form = EmployeeForm {
            email: "not-an-email".to_string(),
            salary: "1000000".to_string(),
            ..valid_employee()
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.message_for("email").as_deref(), Some("Invalid email"));
        assert!(errors.message_for("salary").is_some());
        assert_eq!(errors.0.len(), 2);
    }

    #[test]
    fn test_employee_length_limits() {
        let form = EmployeeForm {
            first_name: "n".repeat(51),
            phone: "1".repeat(21),
            address: "a".repeat(256),
            email: format!("{}@x.io", "e".repeat(100)),
            ..valid_employee()
        };
        let errors = form.validate(today()).unwrap_err();
        for field in ["first_name", "phone", "address", "email"] {
            assert!(errors.message_for(field).is_some(), "{} should fail", field);
        }
    }

    #[test]
    fn test_employee_required_fields() {
        let errors = EmployeeForm::default().validate(today()).unwrap_err();
        for field in ["first_name", "last_name", "email", "department", "position", "salary", "hire_date"] {
            assert!(errors.message_for(field).is_some(), "{} should be required", field);
        }
        assert!(errors.message_for("phone").is_none());
    }
}
