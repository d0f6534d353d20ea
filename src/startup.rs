use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::Settings,
    routes::{crawler_route, export_route, login_route},
    services::{ApifyClient, SessionStore},
};

pub fn run(
    listener: TcpListener,
    settings: Settings,
    apify_client: ApifyClient,
    sessions: SessionStore,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let apify_client = web::Data::new(apify_client);
    let sessions = web::Data::new(sessions);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(login_route::login_form)
            .service(login_route::login)
            .service(crawler_route::index)
            .service(crawler_route::upload)
            .service(crawler_route::run_crawler)
            .service(export_route::download)
            .app_data(settings.clone())
            .app_data(apify_client.clone())
            .app_data(sessions.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
