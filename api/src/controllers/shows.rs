use crate::database::Connection;
use crate::errors::*;
use crate::extractors::*;
use actix_web::HttpResponse;
use chrono::NaiveDateTime;
use db::models::*;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateShowRequest {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: NaiveDateTime,
}

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let shows = Show::find_all_for_display(connection.get())?;

    Ok(HttpResponse::Ok().json(&shows))
}

pub async fn create_form() -> HttpResponse {
    // The form definition belongs to the presentation layer
    HttpResponse::Ok().json(json!({}))
}

pub async fn create(
    (connection, create_show): (Connection, Json<CreateShowRequest>),
) -> Result<HttpResponse, ApiError> {
    let create_show = create_show.into_inner();
    let show = Show::create(create_show.artist_id, create_show.venue_id, create_show.start_time)
        .commit(connection.get())?;

    Ok(HttpResponse::Created().json(json!({"success": true, "show": show})))
}
