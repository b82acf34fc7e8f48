use crate::database::Connection;
use crate::errors::*;
use crate::extractors::*;
use crate::models::{PathParameters, SearchParameters};
use actix_web::web::{Form, Path};
use actix_web::HttpResponse;
use db::models::*;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let venues = Venue::grouped_by_location(connection.get())?;

    Ok(HttpResponse::Ok().json(&venues))
}

pub async fn search(
    (connection, parameters): (Connection, Form<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let parameters = parameters.into_inner();
    let venues = Venue::search(&parameters.search_term, connection.get())?;

    Ok(HttpResponse::Ok().json(json!({
        "count": venues.len(),
        "data": venues,
        "search_term": parameters.search_term
    })))
}

pub async fn show((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;

    Ok(HttpResponse::Ok().json(&venue.for_display(connection)?))
}

pub async fn create_form() -> HttpResponse {
    // The form definition belongs to the presentation layer
    HttpResponse::Ok().json(json!({}))
}

pub async fn create((connection, new_venue): (Connection, Json<NewVenue>)) -> Result<HttpResponse, ApiError> {
    let venue = new_venue.into_inner().commit(connection.get())?;

    Ok(HttpResponse::Created().json(json!({"success": true, "venue": venue})))
}

pub async fn edit_form(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let venue = Venue::find(parameters.id, connection.get())?;

    Ok(HttpResponse::Ok().json(&venue))
}

pub async fn update(
    (connection, parameters, venue_parameters): (Connection, Path<PathParameters>, Json<VenueEditableAttributes>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;
    let updated_venue = venue.update(venue_parameters.into_inner(), connection)?;

    Ok(HttpResponse::Ok().json(json!({"success": true, "venue": updated_venue})))
}

pub async fn destroy((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let venue = Venue::find(parameters.id, connection)?;
    venue.destroy(connection)?;

    Ok(HttpResponse::Ok().json(json!({"success": true})))
}
