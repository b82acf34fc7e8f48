use crate::config::Config;
use crate::database::Database;
use crate::middleware::DatabaseTransaction;
use crate::routing;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{http, web, web::Data, App, HttpRequest, HttpServer, HttpResponse};
use log::Level::Warn;

// Must be valid JSON
const LOGGER_FORMAT: &'static str = r#"{"level": "INFO", "target":"encore::request", "remote_ip":"%a", "user_agent": "%{User-Agent}i", "request": "%r", "status_code": %s, "response_time": %D}"#;

pub struct AppState {
    pub config: Config,
    pub database: Database,
}

impl AppState {
    pub fn new(config: Config, database: Database) -> AppState {
        AppState { config, database }
    }
}

pub trait GetAppState {
    fn state(&self) -> Data<AppState>;
}

impl GetAppState for HttpRequest {
    fn state(&self) -> Data<AppState> {
        let data: &Data<AppState> = self.app_data().expect("critical: AppState not configured for App");
        data.clone()
    }
}

pub struct Server {
    pub config: Config,
}

impl Server {
    pub async fn start(config: Config) {
        let bind_addr = format!("{}:{}", config.api_host, config.api_port);
        let database = Database::from_config(&config);

        info!("Listening on {}", bind_addr);

        let conf = config.clone();
        let server = HttpServer::new({
            move || {
                App::new()
                    .data(AppState::new(conf.clone(), database.clone()))
                    .wrap({
                        let mut cors_config = Cors::new();
                        cors_config = match conf.allowed_origins.as_ref() {
                            "*" => cors_config.send_wildcard(),
                            _ => cors_config.allowed_origin(&conf.allowed_origins),
                        };
                        cors_config
                            .allowed_methods(vec!["GET", "POST", "DELETE"])
                            .allowed_headers(vec![http::header::ACCEPT])
                            .allowed_header(http::header::CONTENT_TYPE)
                            .max_age(3600)
                            .finish()
                    })
                    .wrap(Logger::new(LOGGER_FORMAT))
                    .wrap(DatabaseTransaction::new())
                    .configure(routing::routes)
                    .default_service(web::route().to(|| HttpResponse::NotFound().json(json!({"error": "Not found"}))))
            }
        })
        .bind(&bind_addr)
        .unwrap_or_else(|_| panic!("Can not bind to {}", bind_addr));

        match server.run().await {
            Ok(_) => {}
            Err(e) => jlog!(Warn, "encore_api::server", "Server exited with error", {"error": e.to_string()}),
        };
    }
}
