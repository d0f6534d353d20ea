use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::domain::{Article, UrlBatch, UrlBatchError, COLUMN_LABELS};
use crate::routes::{current_session, redirect_to};
use crate::services::{ApifyClient, SessionStore};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    /// Pre-filled contents of the URL text area.
    urls: String,
    error: String,
    warning: String,
    notice: String,
}

impl IndexTemplate {
    fn blank() -> Self {
        IndexTemplate {
            urls: String::new(),
            error: String::new(),
            warning: String::new(),
            notice: String::new(),
        }
    }

    fn render_page(self) -> HttpResponse {
        HttpResponse::Ok().body(self.render().unwrap())
    }
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    articles: Vec<Article>,
    column_labels: [&'static str; 6],
}

#[get("/")]
async fn index(req: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    if current_session(&req, &sessions).is_none() {
        return redirect_to("/login");
    }
    IndexTemplate::blank().render_page()
}

#[derive(MultipartForm)]
struct UploadForm {
    #[multipart(limit = "2MB")]
    file: Bytes,
}

/// Decode the uploaded file as text and pre-populate the text area with it.
/// The user can still edit the list before submitting; a file that does not
/// decode only produces a warning and leaves manual entry usable.
#[post("/upload")]
async fn upload(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> HttpResponse {
    if current_session(&req, &sessions).is_none() {
        return redirect_to("/login");
    }

    match String::from_utf8(form.file.data.to_vec()) {
        Ok(content) => IndexTemplate {
            urls: content.trim().to_string(),
            ..IndexTemplate::blank()
        }
        .render_page(),
        Err(e) => {
            log::error!("Failed to decode uploaded file: {}", e);
            IndexTemplate {
                warning: format!("Error reading file: {}", e),
                ..IndexTemplate::blank()
            }
            .render_page()
        }
    }
}

#[derive(Deserialize)]
struct RunForm {
    urls: String,
}

/// Validate the submitted list, call the crawling actor, and render whatever
/// comes back. Every failure ends as an inline message on the form page.
#[post("/run")]
async fn run_crawler(
    req: HttpRequest,
    form: web::Form<RunForm>,
    sessions: web::Data<SessionStore>,
    apify_client: web::Data<ApifyClient>,
) -> HttpResponse {
    let Some(session_id) = current_session(&req, &sessions) else {
        return redirect_to("/login");
    };

    let batch = match UrlBatch::parse(&form.urls) {
        Ok(batch) => batch,
        Err(UrlBatchError::Empty) => {
            return IndexTemplate {
                urls: form.urls.clone(),
                error: "Please enter at least one URL".to_string(),
                ..IndexTemplate::blank()
            }
            .render_page();
        }
        Err(UrlBatchError::InvalidFormat(entry)) => {
            return IndexTemplate {
                urls: form.urls.clone(),
                error: format!(
                    "Invalid URL format detected ({}). Please check your URLs.",
                    entry
                ),
                ..IndexTemplate::blank()
            }
            .render_page();
        }
    };

    // Previous results are gone the moment a new submission starts.
    sessions.clear_results(&session_id);

    let articles = match apify_client.crawl_news(batch.urls()).await {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("Crawler run failed: {}", e);
            return IndexTemplate {
                urls: form.urls.clone(),
                error: format!("Error running crawler: {}", e),
                ..IndexTemplate::blank()
            }
            .render_page();
        }
    };

    if articles.is_empty() {
        return IndexTemplate {
            urls: form.urls.clone(),
            notice: "No articles found. Try different URLs.".to_string(),
            ..IndexTemplate::blank()
        }
        .render_page();
    }

    // The same set backs both the rendered page and a later download.
    sessions.store_results(&session_id, articles.clone());

    HttpResponse::Ok().body(
        ResultsTemplate {
            articles,
            column_labels: COLUMN_LABELS,
        }
        .render()
        .unwrap(),
    )
}
