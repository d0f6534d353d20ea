use actix_web::{get, http::header, web, HttpRequest, HttpResponse};

use crate::routes::{current_session, redirect_to};
use crate::services::{excel_export, SessionStore};

/// Serve the result set from the most recent submission as a spreadsheet.
/// The bytes are built from the stored set, never re-fetched, so the download
/// always matches what the results page showed. With nothing to export the
/// user is sent back to the form.
#[get("/download")]
async fn download(req: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    let Some(session_id) = current_session(&req, &sessions) else {
        return redirect_to("/login");
    };

    let articles = match sessions.results(&session_id) {
        Some(articles) if !articles.is_empty() => articles,
        _ => return redirect_to("/"),
    };

    match excel_export::to_workbook_bytes(&articles) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(excel_export::XLSX_MIME)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    excel_export::DOWNLOAD_FILE_NAME
                ),
            ))
            .body(bytes),
        Err(e) => {
            log::error!("Failed to build spreadsheet: {}", e);
            HttpResponse::InternalServerError()
                .body(format!("Failed to build spreadsheet: {}", e))
        }
    }
}
