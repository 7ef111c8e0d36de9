use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Movie, MovieForm, RowId, SuccessResponse};
use crate::{db, DbPool};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCreatedResponse {
    pub success: bool,
    pub movie_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub moviedatas: Vec<Movie>,
}

#[post("/moviesdata")]
pub async fn create_movie(
    pool: web::Data<DbPool>,
    movie: web::Json<MovieForm>,
) -> Result<HttpResponse> {
    let movie_id = web::block(move || {
        let mut conn = pool.get()?;
        db::save_new_movie(&mut conn, movie.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(MovieCreatedResponse {
        success: true,
        movie_id,
    }))
}

#[put("/moviesdata/{id}")]
pub async fn update_movie(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
    movie: web::Json<MovieForm>,
) -> Result<HttpResponse> {
    let movie_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::update_movie(&mut conn, movie_id, movie.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[delete("/moviesdata/{id}")]
pub async fn delete_movie(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
) -> Result<HttpResponse> {
    let movie_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::delete_movie(&mut conn, movie_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/moviesdata")]
pub async fn list_movies(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let moviedatas = web::block(move || {
        let mut conn = pool.get()?;
        db::list_movies(&mut conn)
    })
    .await??;

    Ok(HttpResponse::Ok().json(MoviesResponse { moviedatas }))
}

#[get("/moviesdata/title/{title}")]
pub async fn get_movie_by_title(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let title = path.into_inner();
    let movie = web::block(move || {
        let mut conn = pool.get()?;
        db::find_movie_by_title(&mut conn, title)
    })
    .await??;

    Ok(HttpResponse::Ok().json(movie))
}
