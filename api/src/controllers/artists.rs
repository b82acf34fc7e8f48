use crate::database::Connection;
use crate::errors::*;
use crate::extractors::*;
use crate::models::{PathParameters, SearchParameters};
use actix_web::web::{Form, Path};
use actix_web::HttpResponse;
use db::models::*;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let artists: Vec<ArtistSummary> = Artist::all(connection.get())?
        .into_iter()
        .map(ArtistSummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(&artists))
}

pub async fn search(
    (connection, parameters): (Connection, Form<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let parameters = parameters.into_inner();
    let artists: Vec<ArtistSummary> = Artist::search(&parameters.search_term, connection.get())?
        .into_iter()
        .map(ArtistSummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "count": artists.len(),
        "data": artists,
        "search_term": parameters.search_term
    })))
}

pub async fn show((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = Artist::find(parameters.id, connection)?;

    Ok(HttpResponse::Ok().json(&artist.for_display(connection)?))
}

pub async fn create_form() -> HttpResponse {
    // The form definition belongs to the presentation layer
    HttpResponse::Ok().json(json!({}))
}

pub async fn create((connection, new_artist): (Connection, Json<NewArtist>)) -> Result<HttpResponse, ApiError> {
    let artist = new_artist.into_inner().commit(connection.get())?;

    Ok(HttpResponse::Created().json(json!({"success": true, "artist": artist})))
}

pub async fn edit_form(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let artist = Artist::find(parameters.id, connection.get())?;

    Ok(HttpResponse::Ok().json(&artist))
}

pub async fn update(
    (connection, parameters, artist_parameters): (Connection, Path<PathParameters>, Json<ArtistEditableAttributes>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let artist = Artist::find(parameters.id, connection)?;
    let updated_artist = artist.update(artist_parameters.into_inner(), connection)?;

    Ok(HttpResponse::Ok().json(json!({"success": true, "artist": updated_artist})))
}
