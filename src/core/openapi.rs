use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
    ),
    components(
        schemas(
            reports_dtos::CreateReportForm,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportResponseDto,
            ErrorBody,
        )
    ),
    tags(
        (name = "reports", description = "Citizen environmental incident reports"),
    ),
    info(
        title = "EcoAlert API",
        version = "0.1.0",
        description = "API documentation for EcoAlert",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
