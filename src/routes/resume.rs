use actix_files::NamedFile;
use actix_web::http::StatusCode;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, ResponseError, web};

use super::helpers::{ApiResponse, error_chain_fmt};
use crate::configuration::StaticFilesSettings;

#[derive(thiserror::Error)]
pub enum ResumeError {
    #[error("Resume file not found.")]
    FileNotFound(#[source] std::io::Error),
}

impl std::fmt::Debug for ResumeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ResumeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}

#[tracing::instrument(name = "Serving the resume download", skip(static_files))]
pub async fn download_resume(
    static_files: web::Data<StaticFilesSettings>,
) -> Result<NamedFile, ResumeError> {
    let file = NamedFile::open_async(&static_files.resume_file)
        .await
        .map_err(ResumeError::FileNotFound)?;

    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(
            static_files.resume_download_name.clone(),
        )],
    }))
}
