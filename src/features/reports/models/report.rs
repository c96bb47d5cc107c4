use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::reports::dtos::ReportResponseDto;

/// Database row for a stored report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub description: String,
    pub full_address: String,
    pub localidad: String,
    pub barrio: String,
    pub contact_email: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id.to_string(),
            description: r.description,
            full_address: r.full_address,
            localidad: r.localidad,
            barrio: r.barrio,
            contact_email: r.contact_email,
            image_url: r.image_url,
            created_at: r.created_at,
        }
    }
}
