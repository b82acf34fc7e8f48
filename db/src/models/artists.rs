use crate::models::*;
use crate::schema::artists;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use chrono::Utc;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[table_name = "artists"]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Clone, Validate)]
#[table_name = "artists"]
pub struct NewArtist {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "genre_list")]
    #[validate(length(min = 1, message = "Genres are required"))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl NewArtist {
    pub fn commit(&self, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new artist",
            diesel::insert_into(artists::table).values(self).get_result(conn),
        )
    }
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[changeset_options(treat_none_as_null = "true")]
#[table_name = "artists"]
pub struct ArtistEditableAttributes {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "genre_list_option")]
    #[validate(length(min = 1, message = "Genres are required"))]
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn create(name: &str, genres: Vec<String>) -> NewArtist {
        NewArtist {
            name: String::from(name),
            genres,
            ..Default::default()
        }
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .order_by(artists::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all artists")
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading artist",
            artists::table.find(id).first::<Artist>(conn),
        )
    }

    pub fn search(term: &str, conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        let query_like = format!("%{}%", term);
        artists::table
            .filter(artists::name.ilike(query_like))
            .order_by(artists::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search artists")
    }

    pub fn update(&self, attributes: ArtistEditableAttributes, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Error updating artist",
            diesel::update(self)
                .set((attributes, artists::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    /// Full artist record with shows split into past and upcoming, each
    /// entry carrying the venue it plays at. Same clock-at-call-time split
    /// as the venue display.
    pub fn for_display(self, conn: &PgConnection) -> Result<DisplayArtist, DatabaseError> {
        let shows = Show::find_for_artist(self.id, conn)?;
        let now = Utc::now().naive_utc();

        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();
        for (show, venue) in shows {
            let entry = ArtistShowEntry {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.show_time,
            };
            if show.show_time < now {
                past_shows.push(entry);
            } else {
                upcoming_shows.push(entry);
            }
        }

        Ok(DisplayArtist {
            id: self.id,
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website_link: self.website_link,
            facebook_link: self.facebook_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
            image_link: self.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<Artist> for ArtistSummary {
    fn from(artist: Artist) -> Self {
        ArtistSummary {
            id: artist.id,
            name: artist.name,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayArtist {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
