use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use env_logger::Env;

use cinema_api::settings::Settings;
use cinema_api::{build_pool, configure, init_store, uploads};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::load()?;
    let pool = build_pool(
        &settings.database_url,
        settings.pool_size,
        settings.busy_timeout_ms,
    )?;
    init_store(&pool)?;
    uploads::ensure_uploads_dir(Path::new(&settings.uploads_dir))?;

    let bind = (settings.host.clone(), settings.port);
    log::info!("Server is running on {}:{}", bind.0, bind.1);

    let settings = web::Data::new(settings);
    let pool = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(pool.clone())
            .app_data(settings.clone())
            .configure(configure)
            .service(Files::new("/uploads", &settings.uploads_dir))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
