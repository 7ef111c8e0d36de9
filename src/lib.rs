//! REST backend for a cinema ticketing app: users, the movie catalog,
//! theatres and seat bookings, each route backed by a single SQL statement.

use actix_web::web;
use anyhow::anyhow;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Pool;

pub mod bookings;
pub mod db;
pub mod error;
pub mod model;
pub mod movies;
pub mod schema;
pub mod settings;
pub mod theatres;
pub mod uploads;
pub mod users;

use crate::error::ApiError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pooled connections share one database file; writers wait on the lock
/// instead of failing with `database is locked`.
#[derive(Debug, Clone, Copy)]
pub struct SqlitePragmas {
    pub busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str, size: u32, busy_timeout_ms: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Ok(Pool::builder()
        .max_size(size)
        .connection_customizer(Box::new(SqlitePragmas { busy_timeout_ms }))
        .build(manager)?)
}

pub fn init_store(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;

    if db::seed_default_admin(&mut conn)? {
        log::info!("Default admin user created");
    } else {
        log::info!("Default admin user already exists");
    }
    Ok(())
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::InvalidPath(err.to_string()).into())
}

/// Registers the `/api` routes. Expects a [`DbPool`] and a
/// [`settings::Settings`] in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .service(users::login)
            .service(users::create_user)
            .service(users::list_users)
            .service(users::update_user)
            .service(users::delete_user)
            .service(movies::create_movie)
            .service(movies::list_movies)
            .service(movies::get_movie_by_title)
            .service(movies::update_movie)
            .service(movies::delete_movie)
            .service(theatres::create_theatre)
            .service(theatres::list_theatres)
            .service(theatres::update_theatre)
            .service(theatres::delete_theatre)
            .service(bookings::create_booking)
            .service(bookings::list_bookings)
            .service(uploads::upload),
    );
}
