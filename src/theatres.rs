use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{RowId, SuccessResponse, Theatre, TheatreForm};
use crate::{db, DbPool};

#[derive(Debug, Serialize, Deserialize)]
pub struct TheatresResponse {
    pub theatres: Vec<Theatre>,
}

#[post("/theatre")]
pub async fn create_theatre(
    pool: web::Data<DbPool>,
    form: web::Json<TheatreForm>,
) -> Result<HttpResponse> {
    web::block(move || {
        let mut conn = pool.get()?;
        db::save_new_theatre(&mut conn, form.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[put("/theatre/{id}")]
pub async fn update_theatre(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
    form: web::Json<TheatreForm>,
) -> Result<HttpResponse> {
    let theatre_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::update_theatre(&mut conn, theatre_id, form.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[delete("/theatre/{id}")]
pub async fn delete_theatre(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
) -> Result<HttpResponse> {
    let theatre_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::delete_theatre(&mut conn, theatre_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/theatre")]
pub async fn list_theatres(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let theatres = web::block(move || {
        let mut conn = pool.get()?;
        db::list_theatres(&mut conn)
    })
    .await??;

    Ok(HttpResponse::Ok().json(TheatresResponse { theatres }))
}
