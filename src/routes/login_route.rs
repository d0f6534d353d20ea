use actix_web::{cookie::Cookie, get, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::configuration::Settings;
use crate::routes::{redirect_to, SESSION_COOKIE};
use crate::services::SessionStore;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
}

#[get("/login")]
async fn login_form() -> HttpResponse {
    HttpResponse::Ok().body(
        LoginTemplate {
            error: String::new(),
        }
        .render()
        .unwrap(),
    )
}

#[derive(Deserialize)]
struct LoginForm {
    password: String,
}

/// Exact string match against the configured shared secret. On success a
/// session is opened and its id handed back in an HttpOnly cookie.
#[post("/login")]
async fn login(
    form: web::Form<LoginForm>,
    settings: web::Data<Settings>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    if form.password != settings.application.access_password {
        log::info!("Rejected login attempt");
        return HttpResponse::Ok().body(
            LoginTemplate {
                error: "Incorrect password. Please try again.".to_string(),
            }
            .render()
            .unwrap(),
        );
    }

    let session_id = sessions.open();
    let cookie = Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .finish();

    let mut response = redirect_to("/");
    response.add_cookie(&cookie).unwrap();
    response
}
