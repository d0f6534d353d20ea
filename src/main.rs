use std::net::TcpListener;

use env_logger::Env;
use lookout::{
    configuration::get_configuration,
    services::{ApifyClient, SessionStore},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Missing secrets (gate password, Apify token) fail here, before the
    // listener is bound.
    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let apify_client = ApifyClient::new(configuration.apify.api_token.clone());
    let sessions = SessionStore::default();

    run(listener, configuration, apify_client, sessions)?.await
}
