pub mod crawler_route;
pub mod export_route;
pub mod login_route;

use actix_web::{http::header, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::services::SessionStore;

pub(crate) const SESSION_COOKIE: &str = "sid";

/// The session id from the request cookie, if it names a live session.
pub(crate) fn current_session(req: &HttpRequest, sessions: &SessionStore) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        .filter(|id| sessions.contains(id))
}

pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
