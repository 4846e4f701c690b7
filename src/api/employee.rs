//! Collaborator Endpoints

use super::{send_empty, send_json, with_retry, ApiClient};
use crate::error::ApiError;
use crate::filters::EmployeeFilters;
use crate::models::{DataEnvelope, Employee, EmployeePayload, EmployeeStats, Paginated};

impl ApiClient {
    /// `POST /employees/search` with the filter state as JSON body
    pub async fn search_employees(&self, filters: &EmployeeFilters) -> Result<Paginated<Employee>, ApiError> {
        let url = self.url("employees/search");
        log::debug!("[API] POST {} page={} per_page={}", url, filters.page, filters.per_page);
        with_retry(self.read_retries(), || send_json(self.http().post(&url).json(filters))).await
    }

    pub async fn get_employee(&self, id: u32) -> Result<Employee, ApiError> {
        let url = self.url(&format!("employees/{}", id));
        let envelope: DataEnvelope<Employee> =
            with_retry(self.read_retries(), || send_json(self.http().get(&url))).await?;
        Ok(envelope.data)
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let envelope: DataEnvelope<Employee> =
            send_json(self.http().post(self.url("employees")).json(payload)).await?;
        log::info!("[API] Created collaborator {}", envelope.data.id);
        Ok(envelope.data)
    }

    pub async fn update_employee(&self, id: u32, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let url = self.url(&format!("employees/{}", id));
        let envelope: DataEnvelope<Employee> = send_json(self.http().put(url).json(payload)).await?;
        log::info!("[API] Updated collaborator {}", id);
        Ok(envelope.data)
    }

    pub async fn delete_employee(&self, id: u32) -> Result<(), ApiError> {
        send_empty(self.http().delete(self.url(&format!("employees/{}", id)))).await?;
        log::info!("[API] Deleted collaborator {}", id);
        Ok(())
    }

    /// Lookup endpoints answer with bare JSON, not a `data` envelope
    pub async fn employee_statistics(&self) -> Result<EmployeeStats, ApiError> {
        let url = self.url("employees/statistics");
        with_retry(self.read_retries(), || send_json(self.http().get(&url))).await
    }

    /// Distinct department names used by collaborators
    pub async fn employee_departments(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("employees/departments");
        with_retry(self.read_retries(), || send_json(self.http().get(&url))).await
    }

    pub async fn employee_positions(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("employees/positions");
        with_retry(self.read_retries(), || send_json(self.http().get(&url))).await
    }
}
