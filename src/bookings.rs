use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Booking, BookingRequest, SuccessResponse};
use crate::{db, DbPool};

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub book: Vec<Booking>,
}

#[post("/booking")]
pub async fn create_booking(
    pool: web::Data<DbPool>,
    booking: web::Json<BookingRequest>,
) -> Result<HttpResponse> {
    let booking = booking.into_inner();
    if let Some(theatre) = &booking.theatre {
        log::debug!("Booking theatre {:?} is not persisted", theatre);
    }
    web::block(move || {
        let mut conn = pool.get()?;
        db::save_new_booking(&mut conn, booking)
    })
    .await??;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/booking")]
pub async fn list_bookings(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    let book = web::block(move || {
        let mut conn = pool.get()?;
        db::list_bookings(&mut conn)
    })
    .await??;

    Ok(HttpResponse::Ok().json(BookingsResponse { book }))
}
