pub use self::artists::*;
pub use self::shows::*;
pub use self::venues::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod artists;
mod shows;
mod venues;

pub fn deserialize_unless_blank<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    if value.as_str().map_or(false, |v| !v.is_empty()) {
        Ok(T::deserialize(value).ok())
    } else {
        Ok(None)
    }
}

/// Genres arrive from forms as either a JSON list or one comma separated
/// string. Both normalize to a list; a blank string normalizes to an empty
/// list so the non-empty validation can reject it.
pub fn genre_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    genre_list_from_value(value).map_err(serde::de::Error::custom)
}

pub fn genre_list_option<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    genre_list_from_value(value).map(Some).map_err(serde::de::Error::custom)
}

fn genre_list_from_value(value: Value) -> Result<Vec<String>, String> {
    match value {
        Value::String(s) => {
            if s.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(s.split(',').map(|g| g.to_string()).collect())
            }
        }
        Value::Array(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
        _ => Err("expected a list of genres or a comma separated string".to_string()),
    }
}

#[test]
fn genre_list_properly_deserializes() {
    let venue_data = r#"{"name": "The Fillmore", "genres": ["Rock", "Jazz"]}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.genres, vec!["Rock".to_string(), "Jazz".to_string()]);

    let venue_data = r#"{"name": "The Fillmore", "genres": "Rock,Jazz"}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.genres, vec!["Rock".to_string(), "Jazz".to_string()]);

    let venue_data = r#"{"name": "The Fillmore", "genres": ""}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert!(venue.genres.is_empty());

    let venue_data = r#"{"name": "The Fillmore"}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert!(venue.genres.is_empty());

    let venue_data = r#"{"name": "The Fillmore", "genres": 7}"#;
    assert!(serde_json::from_str::<NewVenue>(&venue_data).is_err());
}

#[test]
fn genre_list_option_properly_deserializes() {
    let artist_data = r#"{"name": "Test Band", "genres": "Rock"}"#;
    let attributes: ArtistEditableAttributes = serde_json::from_str(&artist_data).unwrap();
    assert_eq!(attributes.genres, Some(vec!["Rock".to_string()]));

    let artist_data = r#"{"name": "Test Band"}"#;
    let attributes: ArtistEditableAttributes = serde_json::from_str(&artist_data).unwrap();
    assert_eq!(attributes.genres, None);

    let artist_data = r#"{"name": "Test Band", "genres": null}"#;
    let attributes: ArtistEditableAttributes = serde_json::from_str(&artist_data).unwrap();
    assert_eq!(attributes.genres, None);
}

#[test]
fn deserialize_unless_blank_properly_deserializes() {
    let venue_data = r#"{"name": "The Fillmore", "genres": ["Rock"], "phone": "555-0100"}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, Some("555-0100".to_string()));

    let venue_data = r#"{"name": "The Fillmore", "genres": ["Rock"], "phone": ""}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, None);

    let venue_data = r#"{"name": "The Fillmore", "genres": ["Rock"]}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, None);
}
