use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::application::SheetDataUseCase;
use crate::infrastructure::sheets::SheetsClient;

/// Fixed bind address; the service takes no configuration.
pub const BIND_ADDR: (&str, u16) = ("0.0.0.0", 8000);

pub struct HttpState {
    pub sheet_data: SheetDataUseCase,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Deserialize)]
pub struct SheetDataQuery {
    pub sheet_url: String,
}

#[get("/")]
async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(LivenessResponse {
        message: "Google Sheets Reader API is running".to_string(),
    })
}

#[get("/api/sheet-data")]
async fn get_sheet_data(
    data: web::Data<HttpState>,
    query: web::Query<SheetDataQuery>,
) -> impl Responder {
    info!(reference = %query.sheet_url, "Loading sheet data");

    match data.sheet_data.execute(&query.sheet_url).await {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(e) => {
            error!("Failed to load sheet data: {}", e);
            HttpResponse::BadRequest().json(ErrorDetail {
                detail: e.to_string(),
            })
        }
    }
}

pub fn start_server() -> std::io::Result<Server> {
    let state = web::Data::new(HttpState {
        sheet_data: SheetDataUseCase::new(SheetsClient::new()),
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // public read API, every origin allowed

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(read_root)
            .service(get_sheet_data)
    })
    .bind(BIND_ADDR)?
    .run();

    Ok(server)
}
