use crate::support;
use crate::support::database::TestDatabase;
use crate::support::test_request::TestRequest;
use actix_web::web::{Form, Path};
use actix_web::{http::StatusCode, FromRequest, HttpResponse};
use db::models::*;
use db::prelude::dates;
use encore_api::controllers::venues;
use encore_api::extractors::*;
use encore_api::models::{PathParameters, SearchParameters};
use serde_json::json;
use uuid::Uuid;

#[actix_rt::test]
async fn index() {
    let database = TestDatabase::new();
    let venue = database
        .create_venue()
        .with_name("The Fillmore".to_string())
        .with_city("San Francisco".to_string())
        .with_state("CA".to_string())
        .finish();
    database
        .create_venue()
        .with_name("Red Rocks".to_string())
        .with_city("Morrison".to_string())
        .with_state("CO".to_string())
        .finish();
    database
        .create_show()
        .with_venue(&venue)
        .with_show_time(dates::now().add_days(2).finish())
        .finish();

    let response: HttpResponse = venues::index(database.connection.clone().into()).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let locations: Vec<VenueLocation> = serde_json::from_str(body).unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].city, Some("Morrison".to_string()));
    assert_eq!(locations[1].city, Some("San Francisco".to_string()));
    assert_eq!(locations[1].venues[0].name, "The Fillmore");
    assert_eq!(locations[1].venues[0].num_upcoming_shows, 1);
}

#[actix_rt::test]
async fn search() {
    let database = TestDatabase::new();
    let venue = database.create_venue().with_name("The Fillmore".to_string()).finish();
    database.create_venue().with_name("Red Rocks".to_string()).finish();

    let parameters = Form(SearchParameters {
        search_term: "fill".to_string(),
    });
    let response: HttpResponse = venues::search((database.connection.clone().into(), parameters))
        .await
        .into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["count"], 1);
    assert_eq!(result["search_term"], "fill");
    assert_eq!(result["data"][0]["id"], json!(venue.id));

    // Empty term matches everything, a garbage term matches nothing
    let parameters = Form(SearchParameters {
        search_term: "".to_string(),
    });
    let response: HttpResponse = venues::search((database.connection.clone().into(), parameters))
        .await
        .into();
    let result: serde_json::Value =
        serde_json::from_str(support::unwrap_body_to_string(&response).unwrap()).unwrap();
    assert_eq!(result["count"], 2);

    let parameters = Form(SearchParameters {
        search_term: "xyz-no-match".to_string(),
    });
    let response: HttpResponse = venues::search((database.connection.into(), parameters)).await.into();
    let result: serde_json::Value =
        serde_json::from_str(support::unwrap_body_to_string(&response).unwrap()).unwrap();
    assert_eq!(result["count"], 0);
    assert_eq!(result["data"], json!([]));
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    let artist = database.create_artist().with_name("Test Band".to_string()).finish();
    database
        .create_show()
        .with_venue(&venue)
        .with_artist(&artist)
        .with_show_time(dates::now().add_days(-3).finish())
        .finish();
    database
        .create_show()
        .with_venue(&venue)
        .with_artist(&artist)
        .with_show_time(dates::now().add_days(3).finish())
        .finish();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = venue.id;

    let response: HttpResponse = venues::show((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let display: DisplayVenue = serde_json::from_str(body).unwrap();
    assert_eq!(display.id, venue.id);
    assert_eq!(display.past_shows_count, 1);
    assert_eq!(display.upcoming_shows_count, 1);
    assert_eq!(display.upcoming_shows[0].artist_name, "Test Band");
}

#[actix_rt::test]
async fn show_missing_venue() {
    let database = TestDatabase::new();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = Uuid::new_v4();

    let response: HttpResponse = venues::show((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn create() {
    let database = TestDatabase::new();

    let json = Json(
        serde_json::from_str::<NewVenue>(
            r#"{"name": "The Fillmore", "genres": "Rock,Jazz", "city": "San Francisco", "state": "CA"}"#,
        )
        .unwrap(),
    );
    let response: HttpResponse = venues::create((database.connection.clone().into(), json)).await.into();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["venue"]["name"], "The Fillmore");
    assert_eq!(result["venue"]["genres"], json!(["Rock", "Jazz"]));

    let id: Uuid = serde_json::from_value(result["venue"]["id"].clone()).unwrap();
    let venue = Venue::find(id, &database.connection).unwrap();
    assert_eq!(venue.city, Some("San Francisco".to_string()));
}

#[actix_rt::test]
async fn create_with_validation_error() {
    let database = TestDatabase::new();

    let json = Json(serde_json::from_str::<NewVenue>(r#"{"name": "The Fillmore", "genres": []}"#).unwrap());
    let response: HttpResponse = venues::create((database.connection.into(), json)).await.into();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], false);
    assert!(result["fields"]["genres"].is_array());
}

#[actix_rt::test]
async fn edit_form() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = venue.id;

    let response: HttpResponse = venues::edit_form((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let prefill: Venue = serde_json::from_str(body).unwrap();
    assert_eq!(prefill, venue);
}

#[actix_rt::test]
async fn update_overwrites_omitted_fields() {
    let database = TestDatabase::new();
    let new_venue: NewVenue = serde_json::from_str(
        r#"{"name": "The Fillmore", "genres": ["Rock"], "phone": "555-0100"}"#,
    )
    .unwrap();
    let venue = new_venue.commit(&database.connection).unwrap();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = venue.id;

    // No phone in the payload; the stored phone gets nulled out
    let json = Json(
        serde_json::from_str::<VenueEditableAttributes>(r#"{"name": "The Fillmore", "genres": ["Rock"]}"#).unwrap(),
    );
    let response: HttpResponse = venues::update((database.connection.clone().into(), path, json))
        .await
        .into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    let result: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["venue"]["phone"], serde_json::Value::Null);

    let updated = Venue::find(venue.id, &database.connection).unwrap();
    assert_eq!(updated.phone, None);
}

#[actix_rt::test]
async fn update_missing_venue() {
    let database = TestDatabase::new();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = Uuid::new_v4();

    let json = Json(
        serde_json::from_str::<VenueEditableAttributes>(r#"{"name": "The Fillmore", "genres": ["Rock"]}"#).unwrap(),
    );
    let response: HttpResponse = venues::update((database.connection.into(), path, json)).await.into();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn destroy() {
    let database = TestDatabase::new();
    let venue = database.create_venue().finish();
    database.create_show().with_venue(&venue).finish();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = venue.id;

    let response: HttpResponse = venues::destroy((database.connection.clone().into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::unwrap_body_to_string(&response).unwrap();
    assert_eq!(body, json!({"success": true}).to_string());
    assert_eq!(Venue::find(venue.id, &database.connection).err().unwrap().code, 2000);
}

#[actix_rt::test]
async fn destroy_missing_venue() {
    let database = TestDatabase::new();

    let test_request = TestRequest::create();
    let mut path = Path::<PathParameters>::extract(&test_request.request).await.unwrap();
    path.id = Uuid::new_v4();

    let response: HttpResponse = venues::destroy((database.connection.into(), path)).await.into();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
