use diesel::{
    BoolExpressionMethods, ExpressionMethods, NullableExpressionMethods, OptionalExtension,
    QueryDsl, RunQueryDsl, SelectableHelper, SqliteConnection,
};

use crate::error::{ApiError, Result};
use crate::model::{
    Booking, BookingRequest, Movie, MovieForm, NewBooking, NewUser, RowId, Theatre, TheatreForm,
    User, UserChanges,
};
use crate::users::LoginRequest;

// Passwords are stored and compared as plain text.
pub fn login(conn: &mut SqliteConnection, credentials: LoginRequest) -> Result<User> {
    use crate::schema::users::dsl::*;

    users
        .filter(
            username
                .eq(credentials.username)
                .and(password.eq(credentials.password))
                .and(role.eq(credentials.role)),
        )
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::InvalidCredentials)
}

pub fn save_new_user(conn: &mut SqliteConnection, new_user: NewUser) -> Result<()> {
    use crate::schema::users::dsl::*;

    diesel::insert_into(users)
        .values(&new_user)
        .execute(conn)
        .map_err(ApiError::from_user_write)?;
    Ok(())
}

pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use crate::schema::users::dsl::*;

    Ok(users.select(User::as_select()).load(conn)?)
}

pub fn update_user(conn: &mut SqliteConnection, user_id: RowId, changes: UserChanges) -> Result<()> {
    use crate::schema::users::dsl::*;

    diesel::update(users.filter(id.nullable().eq(user_id.0)))
        .set(&changes)
        .execute(conn)
        .map_err(ApiError::from_user_write)?;
    Ok(())
}

/// Deleting an id that does not exist is not an error.
pub fn delete_user(conn: &mut SqliteConnection, user_id: RowId) -> Result<()> {
    use crate::schema::users::dsl::*;

    diesel::delete(users.filter(id.nullable().eq(user_id.0))).execute(conn)?;
    Ok(())
}

pub fn seed_default_admin(conn: &mut SqliteConnection) -> Result<bool> {
    let admin = NewUser {
        fullname: Some("Admin".to_string()),
        username: Some("admin".to_string()),
        password: Some("admin".to_string()),
        role: Some("admin".to_string()),
    };
    match save_new_user(conn, admin) {
        Ok(()) => Ok(true),
        Err(ApiError::DuplicateUsername) => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn save_new_movie(conn: &mut SqliteConnection, movie: MovieForm) -> Result<i64> {
    use crate::schema::acienma::dsl::*;

    Ok(diesel::insert_into(acienma)
        .values(&movie)
        .returning(id)
        .get_result(conn)?)
}

pub fn update_movie(conn: &mut SqliteConnection, movie_id: RowId, movie: MovieForm) -> Result<()> {
    use crate::schema::acienma::dsl::*;

    diesel::update(acienma.filter(id.nullable().eq(movie_id.0)))
        .set(&movie)
        .execute(conn)?;
    Ok(())
}

pub fn delete_movie(conn: &mut SqliteConnection, movie_id: RowId) -> Result<()> {
    use crate::schema::acienma::dsl::*;

    diesel::delete(acienma.filter(id.nullable().eq(movie_id.0))).execute(conn)?;
    Ok(())
}

pub fn list_movies(conn: &mut SqliteConnection) -> Result<Vec<Movie>> {
    use crate::schema::acienma::dsl::*;

    Ok(acienma.select(Movie::as_select()).load(conn)?)
}

// Titles are not unique; the first row the store yields wins.
pub fn find_movie_by_title(conn: &mut SqliteConnection, movie_title: String) -> Result<Movie> {
    use crate::schema::acienma::dsl::*;

    acienma
        .filter(title.eq(movie_title))
        .select(Movie::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::MovieNotFound)
}

pub fn save_new_theatre(conn: &mut SqliteConnection, form: TheatreForm) -> Result<()> {
    use crate::schema::theatre::dsl::*;

    diesel::insert_into(theatre).values(&form).execute(conn)?;
    Ok(())
}

pub fn update_theatre(
    conn: &mut SqliteConnection,
    theatre_id: RowId,
    form: TheatreForm,
) -> Result<()> {
    use crate::schema::theatre::dsl::*;

    diesel::update(theatre.filter(id.nullable().eq(theatre_id.0)))
        .set(&form)
        .execute(conn)?;
    Ok(())
}

pub fn delete_theatre(conn: &mut SqliteConnection, theatre_id: RowId) -> Result<()> {
    use crate::schema::theatre::dsl::*;

    diesel::delete(theatre.filter(id.nullable().eq(theatre_id.0))).execute(conn)?;
    Ok(())
}

pub fn list_theatres(conn: &mut SqliteConnection) -> Result<Vec<Theatre>> {
    use crate::schema::theatre::dsl::*;

    Ok(theatre.select(Theatre::as_select()).load(conn)?)
}

// No seat, capacity or double-booking checks.
pub fn save_new_booking(conn: &mut SqliteConnection, booking: BookingRequest) -> Result<()> {
    use crate::schema::bbooking::dsl::bbooking;

    diesel::insert_into(bbooking)
        .values(NewBooking::from(booking))
        .execute(conn)?;
    Ok(())
}

pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>> {
    use crate::schema::bbooking::dsl::bbooking;

    Ok(bbooking.select(Booking::as_select()).load(conn)?)
}
