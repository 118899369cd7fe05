use std::net::SocketAddr;
use std::error::Error;
use tracing::info;
use bookservice::core::controller::{AppState, create_router};
use bookservice::core::domain::Configuration;
use bookservice::utils::logs::setup_tracing;

// Serves the REST book api and the SOAP book service on one listener.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    setup_tracing();

    let config = Configuration::from_env("dev")?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(soap_path = %config.soap_path, id_assignment = %config.id_assignment, "starting book service");

    let state = AppState::new(config);
    let soap_path = state.config.soap_path.clone();
    let app = create_router(state);

    info!("REST + SOAP running at http://{}", addr);
    info!("SOAP WSDL: http://{}{}?wsdl", addr, soap_path);
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
