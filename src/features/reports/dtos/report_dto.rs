use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;

/// Multipart form DTO for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart fields directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code, non_snake_case)]
pub struct CreateReportForm {
    /// What was observed at the incident site
    pub description: String,
    /// Full street address, as entered by the submitter
    pub address: String,
    /// Administrative locality of the incident
    pub localidad: String,
    /// Neighborhood within the locality
    pub barrio: String,
    /// Contact email of the submitter (presence only, shape is not checked)
    #[schema(example = "vecina@example.com")]
    pub correoElectronico: String,
    /// Photo of the incident
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: String,
}

/// Image part extracted from the multipart form
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Raw multipart fields as collected from the request, prior to validation
#[derive(Debug, Default)]
pub struct ReportSubmission {
    pub description: Option<String>,
    pub address: Option<String>,
    pub localidad: Option<String>,
    pub barrio: Option<String>,
    pub correo_electronico: Option<String>,
    pub image: Option<ImagePart>,
}

/// Text fields of a submission after validation
#[derive(Debug, Clone)]
pub struct NewReport {
    pub description: String,
    pub full_address: String,
    pub localidad: String,
    pub barrio: String,
    pub contact_email: String,
}

impl ReportSubmission {
    /// Fail-fast validation: the first missing or empty field wins, checked
    /// in the order the form documents them, image last. An empty string
    /// counts as missing; the email is checked for presence only.
    pub fn validate(self) -> Result<(NewReport, ImagePart), AppError> {
        fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Validation(message.to_string()))
        }

        let description = required(self.description, "La descripción es requerida")?;
        let full_address = required(self.address, "La dirección es requerida")?;
        let localidad = required(self.localidad, "La localidad es requerida")?;
        let barrio = required(self.barrio, "El barrio es requerido")?;
        let contact_email =
            required(self.correo_electronico, "El correo electrónico es requerido")?;

        let image = self
            .image
            .ok_or_else(|| AppError::Validation("Imagen es requerida".to_string()))?;

        Ok((
            NewReport {
                description,
                full_address,
                localidad,
                barrio,
                contact_email,
            },
            image,
        ))
    }
}

/// Wire representation of a stored report: exactly the eight documented
/// fields, identifier rendered as text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    /// Store-assigned identifier
    pub id: String,
    pub description: String,
    pub full_address: String,
    pub localidad: String,
    pub barrio: String,
    pub contact_email: String,
    /// Public URL of the uploaded photo
    pub image_url: String,
    /// Upload time of the photo
    pub created_at: DateTime<Utc>,
}

/// Response body for report creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReportResponseDto {
    pub message: String,
    pub report: ReportResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    fn full_submission() -> ReportSubmission {
        ReportSubmission {
            description: Some(Sentence(3..8).fake()),
            address: Some("Calle 26 #13-25".to_string()),
            localidad: Some("Chapinero".to_string()),
            barrio: Some("Quinta Camacho".to_string()),
            correo_electronico: Some(SafeEmail().fake()),
            image: Some(ImagePart {
                data: vec![0xFF, 0xD8, 0xFF],
                content_type: "image/jpeg".to_string(),
            }),
        }
    }

    fn validation_message(result: Result<(NewReport, ImagePart), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("Expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_description_is_reported_first() {
        let submission = ReportSubmission::default();
        assert_eq!(
            validation_message(submission.validate()),
            "La descripción es requerida"
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut submission = full_submission();
        submission.barrio = Some(String::new());
        assert_eq!(
            validation_message(submission.validate()),
            "El barrio es requerido"
        );
    }

    #[test]
    fn fields_are_checked_in_documented_order() {
        let mut submission = full_submission();
        submission.address = None;
        // localidad is also missing, but address comes first
        submission.localidad = None;
        assert_eq!(
            validation_message(submission.validate()),
            "La dirección es requerida"
        );
    }

    #[test]
    fn image_is_checked_last() {
        let mut submission = full_submission();
        submission.image = None;
        assert_eq!(validation_message(submission.validate()), "Imagen es requerida");
    }

    #[test]
    fn email_shape_is_not_validated() {
        let mut submission = full_submission();
        submission.correo_electronico = Some("not-an-email".to_string());
        let (report, _) = submission.validate().expect("submission should pass");
        assert_eq!(report.contact_email, "not-an-email");
    }

    #[test]
    fn complete_submission_passes_with_verbatim_fields() {
        let mut submission = full_submission();
        submission.description = Some("Basural en la esquina".to_string());
        let (report, image) = submission.validate().expect("submission should pass");
        assert_eq!(report.description, "Basural en la esquina");
        assert_eq!(report.full_address, "Calle 26 #13-25");
        assert_eq!(image.content_type, "image/jpeg");
    }

    #[test]
    fn response_dto_serializes_exactly_eight_fields() {
        let dto = ReportResponseDto {
            id: "5d2f1a6e-8a51-4b07-9c3a-2f9a0b1c2d3e".to_string(),
            description: "Basural".to_string(),
            full_address: "Calle 26 #13-25".to_string(),
            localidad: "Chapinero".to_string(),
            barrio: "Quinta Camacho".to_string(),
            contact_email: SafeEmail().fake(),
            image_url: "http://localhost:9000/ecoalert-reports/reports/x.jpg".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        for field in [
            "id",
            "description",
            "full_address",
            "localidad",
            "barrio",
            "contact_email",
            "image_url",
            "created_at",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert!(object["id"].is_string());
    }
}
