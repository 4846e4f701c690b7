//! Division Endpoints

use super::{send_empty, send_json, with_retry, ApiClient};
use crate::error::ApiError;
use crate::filters::DepartmentFilters;
use crate::models::{DataEnvelope, Department, DepartmentPayload, Paginated};

impl ApiClient {
    /// `GET /departments` with the filter state as query parameters
    pub async fn list_departments(&self, filters: &DepartmentFilters) -> Result<Paginated<Department>, ApiError> {
        let url = self.url("departments");
        let query = filters.query_pairs();
        log::debug!("[API] GET {} page={} per_page={}", url, filters.page, filters.per_page);
        with_retry(self.read_retries(), || send_json(self.http().get(&url).query(&query))).await
    }

    pub async fn get_department(&self, id: u32) -> Result<Department, ApiError> {
        let url = self.url(&format!("departments/{}", id));
        let envelope: DataEnvelope<Department> =
            with_retry(self.read_retries(), || send_json(self.http().get(&url))).await?;
        Ok(envelope.data)
    }

    pub async fn create_department(&self, payload: &DepartmentPayload) -> Result<Department, ApiError> {
        let envelope: DataEnvelope<Department> =
            send_json(self.http().post(self.url("departments")).json(payload)).await?;
        log::info!("[API] Created division {} ({})", envelope.data.id, envelope.data.name);
        Ok(envelope.data)
    }

    pub async fn update_department(&self, id: u32, payload: &DepartmentPayload) -> Result<Department, ApiError> {
        let url = self.url(&format!("departments/{}", id));
        let envelope: DataEnvelope<Department> = send_json(self.http().put(url).json(payload)).await?;
        log::info!("[API] Updated division {}", id);
        Ok(envelope.data)
    }

    pub async fn delete_department(&self, id: u32) -> Result<(), ApiError> {
        send_empty(self.http().delete(self.url(&format!("departments/{}", id)))).await?;
        log::info!("[API] Deleted division {}", id);
        Ok(())
    }
}
