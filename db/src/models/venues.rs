use crate::models::*;
use crate::schema::venues;
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
#[table_name = "venues"]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Default, Insertable, Serialize, Deserialize, PartialEq, Debug, Clone, Validate)]
#[table_name = "venues"]
pub struct NewVenue {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub address: Option<String>,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl NewVenue {
    pub fn commit(&self, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new venue",
            diesel::insert_into(venues::table).values(self).get_result(conn),
        )
    }
}

/// Changeset for the edit form. Every column the form owns is written on
/// update; a field missing from the payload writes NULL rather than keeping
/// the old value.
#[derive(AsChangeset, Default, Deserialize, Validate)]
#[changeset_options(treat_none_as_null = "true")]
#[table_name = "venues"]
pub struct VenueEditableAttributes {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub address: Option<String>,
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
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn create(name: &str, genres: Vec<String>) -> NewVenue {
        NewVenue {
            name: String::from(name),
            genres,
            ..Default::default()
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading venue",
            venues::table.find(id).first::<Venue>(conn),
        )
    }

    pub fn update(&self, attributes: VenueEditableAttributes, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update venue",
            diesel::update(self)
                .set((attributes, venues::updated_at.eq(dsl::now)))
                .get_result(conn),
        )
    }

    pub fn destroy(&self, conn: &PgConnection) -> Result<usize, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::DeleteError,
            "Failed to destroy venue record",
            diesel::delete(self).execute(conn),
        )
    }

    pub fn search(term: &str, conn: &PgConnection) -> Result<Vec<VenueSummary>, DatabaseError> {
        let query_like = format!("%{}%", term);
        let venues: Vec<Venue> = venues::table
            .filter(venues::name.ilike(query_like))
            .order_by(venues::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search venues")?;

        let now = Utc::now().naive_utc();
        let mut results = Vec::new();
        for venue in venues {
            results.push(VenueSummary {
                num_upcoming_shows: Show::upcoming_count_for_venue(venue.id, now, conn)?,
                id: venue.id,
                name: venue.name,
            });
        }
        Ok(results)
    }

    /// Venue listing grouped into distinct (city, state) locations, each
    /// venue annotated with its upcoming show count.
    pub fn grouped_by_location(conn: &PgConnection) -> Result<Vec<VenueLocation>, DatabaseError> {
        let venues: Vec<Venue> = venues::table
            .order_by((venues::city, venues::state, venues::name))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all venues")?;

        let now = Utc::now().naive_utc();
        let mut locations: Vec<VenueLocation> = Vec::new();
        for venue in venues {
            let summary = VenueSummary {
                num_upcoming_shows: Show::upcoming_count_for_venue(venue.id, now, conn)?,
                id: venue.id,
                name: venue.name.clone(),
            };
            if let Some(location) = locations.last_mut() {
                if location.city == venue.city && location.state == venue.state {
                    location.venues.push(summary);
                    continue;
                }
            }
            locations.push(VenueLocation {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            });
        }
        Ok(locations)
    }

    /// Full venue record with its shows split into past and upcoming. The
    /// shows are fetched with no time predicate; the split happens here
    /// against the clock at call time.
    pub fn for_display(self, conn: &PgConnection) -> Result<DisplayVenue, DatabaseError> {
        let shows = Show::find_for_venue(self.id, conn)?;
        let now = Utc::now().naive_utc();

        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();
        for (show, artist) in shows {
            let entry = VenueShowEntry {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.show_time,
            };
            if show.show_time < now {
                past_shows.push(entry);
            } else {
                upcoming_shows.push(entry);
            }
        }

        Ok(DisplayVenue {
            id: self.id,
            name: self.name,
            genres: self.genres,
            address: self.address,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website_link: self.website_link,
            facebook_link: self.facebook_link,
            seeking_talent: self.seeking_talent,
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
pub struct VenueSummary {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayVenue {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
