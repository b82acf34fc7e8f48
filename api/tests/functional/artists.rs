use crate::support;
use crate::support::database::TestDatabase;
use crate::support::test_request::TestRequest;
use actix_web::web::{Form, Path};
use actix_web::{http::StatusCode, FromRequest, HttpResponse};
use db::models::*;
use db::prelude::dates;
use encore_api::controllers::artists;
use encore_api::extractors::*;
use encore_api::models::{PathParameters, SearchParameters};
use uuid::Uuid;

#[actix_rt::test]
async fn index() {
    let database = TestDatabase::new();
    let artist = database.create_artist().with_name("Alpha Band".to_string()).finish();
    let artist2 = database.create_artist().with_name("Beta Band".to_string()).finish();

    let response: HttpResponse = artists::index(database.connection.into()).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let summaries: Vec<ArtistSummary> = serde_json::from_str(body).unwrap();
    assert_eq!(
        summaries,
        vec![ArtistSummary::from(artist), ArtistSummary::from(artist2)]
    );
}

#[actix_rt::test]
async fn search() {
    let database = TestDatabase::new();
    let artist = database.create_artist().with_name("The Midnight Owls".to_string()).finish();
    database.create_artist().with_name("Daybreak Choir".to_string()).finish();

    let parameters = Form(SearchParameters {
        search_term: "midnight".to_string(),
    });
    let response: HttpResponse = artists::search((database.connection.clone().into(), parameters))
        .await
        .into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["count"], 1);
    assert_eq!(result["data"][0]["id"], serde_json::json!(artist.id));
    assert_eq!(result["data"][0]["name"], "The Midnight Owls");

    let parameters = Form(SearchParameters {
        search_term: "".to_string(),
    });
    let response: HttpResponse = artists::search((database.connection.into(), parameters)).await.into();
    let result: serde_json::Value =
        serde_json::from_str(support::unwrap_body_to_string(&response).unwrap()).unwrap();
    assert_eq!(result["count"], 2);
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let artist = database.create_artist().finish();
    let venue = database
        .create_venue()
        .with_name("The Fillmore".to_string())
        .with_image_link("https://example.com/venue.png".to_string())
        .finish();
    database
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .with_show_time(dates::now().add_days(4).finish())
        .finish();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = artist.id;

    let response: HttpResponse = artists::show((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let display: DisplayArtist = serde_json::from_str(body).unwrap();
    assert_eq!(display.id, artist.id);
    assert_eq!(display.past_shows_count, 0);
    assert_eq!(display.upcoming_shows_count, 1);
    assert_eq!(display.upcoming_shows[0].venue_name, "The Fillmore");
    assert_eq!(
        display.upcoming_shows[0].venue_image_link,
        Some("https://example.com/venue.png".to_string())
    );
}

#[actix_rt::test]
async fn show_missing_artist() {
    let database = TestDatabase::new();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = Uuid::new_v4();

    let response: HttpResponse = artists::show((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn create() {
    let database = TestDatabase::new();

    let json = Json(
        serde_json::from_str::<NewArtist>(r#"{"name": "Test Band", "genres": "Rock,Folk", "city": "Oakland"}"#)
            .unwrap(),
    );
    let response: HttpResponse = artists::create((database.connection.clone().into(), json)).await.into();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["artist"]["name"], "Test Band");
    assert_eq!(result["artist"]["genres"], serde_json::json!(["Rock", "Folk"]));

    let id: Uuid = serde_json::from_value(result["artist"]["id"].clone()).unwrap();
    let artist = Artist::find(id, &database.connection).unwrap();
    assert_eq!(artist.city, Some("Oakland".to_string()));
}

#[actix_rt::test]
async fn create_with_validation_error() {
    let database = TestDatabase::new();

    let json = Json(serde_json::from_str::<NewArtist>(r#"{"name": "", "genres": ["Rock"]}"#).unwrap());
    let response: HttpResponse = artists::create((database.connection.into(), json)).await.into();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], false);
    assert!(result["fields"]["name"].is_array());
}

#[actix_rt::test]
async fn update_overwrites_omitted_fields() {
    let database = TestDatabase::new();
    let new_artist: NewArtist =
        serde_json::from_str(r#"{"name": "Test Band", "genres": ["Rock"], "phone": "555-0100"}"#).unwrap();
    let artist = new_artist.commit(&database.connection).unwrap();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = artist.id;

    // Payload leaves phone out; the update writes NULL over the old value
    let json = Json(
        serde_json::from_str::<ArtistEditableAttributes>(r#"{"name": "Test Band", "genres": ["Rock"]}"#).unwrap(),
    );
    let response: HttpResponse = artists::update((database.connection.clone().into(), path, json))
        .await
        .into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["artist"]["phone"], serde_json::Value::Null);

    let updated = Artist::find(artist.id, &database.connection).unwrap();
    assert_eq!(updated.phone, None);
}

#[actix_rt::test]
async fn update_missing_artist() {
    let database = TestDatabase::new();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = Uuid::new_v4();

    let json = Json(
        serde_json::from_str::<ArtistEditableAttributes>(r#"{"name": "Test Band", "genres": ["Rock"]}"#).unwrap(),
    );
    let response: HttpResponse = artists::update((database.connection.into(), path, json)).await.into();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
