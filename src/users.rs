use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{NewUser, RowId, SuccessResponse, User, UserChanges};
use crate::{db, DbPool};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: i64,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// No token or session is issued; the client keeps the returned id and role.
#[post("/login")]
pub async fn login(
    pool: web::Data<DbPool>,
    login_request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let user = web::block(move || {
        let mut conn = pool.get()?;
        db::login(&mut conn, login_request.into_inner())
    })
    .await??;

    log::info!("User {} logged in", user.id);
    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        user_id: user.id,
        role: user.role,
    }))
}

#[post("/create-user")]
pub async fn create_user(
    pool: web::Data<DbPool>,
    new_user: web::Json<NewUser>,
) -> Result<HttpResponse> {
    web::block(move || {
        let mut conn = pool.get()?;
        db::save_new_user(&mut conn, new_user.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/users")]
pub async fn list_users(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let users = web::block(move || {
        let mut conn = pool.get()?;
        db::list_users(&mut conn)
    })
    .await??;

    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

#[put("/users/{id}")]
pub async fn update_user(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
    changes: web::Json<UserChanges>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::update_user(&mut conn, user_id, changes.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[delete("/users/{id}")]
pub async fn delete_user(
    pool: web::Data<DbPool>,
    path: web::Path<RowId>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    web::block(move || {
        let mut conn = pool.get()?;
        db::delete_user(&mut conn, user_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
