mod report_dto;

pub use report_dto::{
    CreateReportForm, CreateReportResponseDto, ImagePart, NewReport, ReportResponseDto,
    ReportSubmission,
};
