use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::schema::*;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i64,
    pub fullname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub fullname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct UserChanges {
    pub username: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = acienma)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Movie {
    #[serde(rename = "Id")]
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub languages: Option<String>,
    #[serde(rename = "cardposterURL")]
    pub cardposter_url: Option<String>,
    #[serde(rename = "coverPageUrl")]
    pub cover_page_url: Option<String>,
    #[serde(rename = "fristpostURL")]
    pub fristpost_url: Option<String>,
    #[serde(rename = "secondpostURL")]
    pub secondpost_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = acienma, treat_none_as_null = true)]
pub struct MovieForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub languages: Option<String>,
    #[serde(rename = "cardposterUrl")]
    pub cardposter_url: Option<String>,
    #[serde(rename = "coverPageUrl")]
    pub cover_page_url: Option<String>,
    #[serde(rename = "fristpostURL")]
    pub fristpost_url: Option<String>,
    #[serde(rename = "secondpostURL")]
    pub secondpost_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = theatre)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Theatre {
    pub id: i64,
    pub theatrename: Option<String>,
    pub screennumber: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = theatre, treat_none_as_null = true)]
pub struct TheatreForm {
    pub theatrename: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub screennumber: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = bbooking)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Booking {
    pub id: i64,
    pub movietitle: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub theatre: Option<String>,
    pub seatno: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub movietitle: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub seatno: Option<String>,
    pub theatre: Option<String>,
}

// No theatre column: a submitted theatre is not persisted and reads back as null.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bbooking)]
pub struct NewBooking {
    pub movietitle: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub seatno: Option<String>,
}

impl From<BookingRequest> for NewBooking {
    fn from(value: BookingRequest) -> Self {
        Self {
            movietitle: value.movietitle,
            date: value.date,
            name: value.name,
            seatno: value.seatno,
        }
    }
}

/// Row id taken from the URL. Text that is not an integer matches no row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowId(pub Option<i64>);

impl<'de> Deserialize<'de> for RowId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(RowId(raw.trim().parse().ok()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screennumber_accepts_numbers_and_text() {
        let form: TheatreForm =
            serde_json::from_str(r#"{"theatrename":"Royal","screennumber":3}"#).unwrap();
        assert_eq!(form.screennumber.as_deref(), Some("3"));

        let form: TheatreForm =
            serde_json::from_str(r#"{"theatrename":"Royal","screennumber":"3D"}"#).unwrap();
        assert_eq!(form.screennumber.as_deref(), Some("3D"));

        let form: TheatreForm = serde_json::from_str(r#"{"theatrename":"Royal"}"#).unwrap();
        assert_eq!(form.screennumber, None);
    }

    #[test]
    fn screennumber_rejects_structures() {
        let res = serde_json::from_str::<TheatreForm>(r#"{"screennumber":[1,2]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn movie_form_uses_client_field_names() {
        let form: MovieForm = serde_json::from_str(
            r#"{"title":"Inception","cardposterUrl":"/uploads/1.png","fristpostURL":"/uploads/2.png"}"#,
        )
        .unwrap();
        assert_eq!(form.cardposter_url.as_deref(), Some("/uploads/1.png"));
        assert_eq!(form.fristpost_url.as_deref(), Some("/uploads/2.png"));
        assert_eq!(form.description, None);
    }

    #[test]
    fn movie_serializes_stored_column_names() {
        let movie = Movie {
            id: 7,
            title: Some("Inception".to_string()),
            description: None,
            languages: None,
            cardposter_url: Some("/uploads/1.png".to_string()),
            cover_page_url: None,
            fristpost_url: None,
            secondpost_url: None,
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["Id"], 7);
        assert_eq!(json["cardposterURL"], "/uploads/1.png");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn row_id_keeps_unparseable_text_as_no_row() {
        let id: RowId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id, RowId(Some(42)));
        let id: RowId = serde_json::from_str(r#""99999999999""#).unwrap();
        assert_eq!(id, RowId(Some(99_999_999_999)));
        let id: RowId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id, RowId(None));
    }

    #[test]
    fn booking_request_drops_theatre() {
        let req = BookingRequest {
            movietitle: Some("Inception".to_string()),
            date: Some("2024-01-01".to_string()),
            name: Some("Alice".to_string()),
            seatno: Some("A1".to_string()),
            theatre: Some("Royal".to_string()),
        };
        let row = NewBooking::from(req);
        assert_eq!(row.seatno.as_deref(), Some("A1"));
        assert_eq!(row.movietitle.as_deref(), Some("Inception"));
    }
}
