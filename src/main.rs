use actix_web::{web, HttpServer};
use std::process::ExitCode;
use tracing_actix_web::TracingLogger;
use user_admin::{config, http, store::PgUserStore, App};

#[tokio::main]
async fn main() -> ExitCode {
  if let Err(error) = user_admin::logging::init() {
    eprintln!("{error}");
    return ExitCode::FAILURE;
  }

  let config = match config::Server::load() {
    Ok(config) => config,
    Err(error) => {
      tracing::error!(%error, "could not load configuration");
      return ExitCode::FAILURE;
    }
  };

  let app = match App::new(config).await {
    Ok(app) => app,
    Err(error) => {
      tracing::error!(error = ?error, "could not start the service");
      return ExitCode::FAILURE;
    }
  };

  let service = web::Data::new(app.users());
  let address = (app.config.service.host.clone(), app.config.service.port);
  let server = HttpServer::new(move || {
    actix_web::App::new()
      .app_data(service.clone())
      .wrap(TracingLogger::default())
      .configure(http::configure::<PgUserStore>)
  })
  .bind(address.clone());

  let server = match server {
    Ok(server) => server,
    Err(error) => {
      tracing::error!(%error, host = %address.0, port = address.1, "could not bind the server");
      app.db.close().await;
      return ExitCode::FAILURE;
    }
  };

  tracing::info!(host = %address.0, port = address.1, "serving user administration API");
  let result = server.run().await;

  app.db.close().await;
  match result {
    Ok(()) => {
      tracing::info!("server stopped");
      ExitCode::SUCCESS
    }
    Err(error) => {
      tracing::error!(%error, "server stopped unexpectedly");
      ExitCode::FAILURE
    }
  }
}
