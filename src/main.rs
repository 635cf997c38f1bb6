use tracing::info;

use sheetbridge::interfaces::http::{start_server, BIND_ADDR};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let server = start_server()?;
    info!("Google Sheets Reader API listening on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    server.await
}
