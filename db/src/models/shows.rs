use crate::models::*;
use crate::schema::{artists, shows, venues};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Associations, Clone, Identifiable, Queryable, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Artist)]
#[belongs_to(Venue)]
#[table_name = "shows"]
pub struct Show {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub show_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Clone, Debug)]
#[table_name = "shows"]
pub struct NewShow {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub show_time: NaiveDateTime,
}

impl NewShow {
    /// Referential integrity is the foreign keys' job; a dangling artist or
    /// venue id comes back as ErrorCode::ForeignKeyError.
    pub fn commit(&self, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new show",
            diesel::insert_into(shows::table).values(self).get_result(conn),
        )
    }
}

impl Show {
    pub fn create(artist_id: Uuid, venue_id: Uuid, show_time: NaiveDateTime) -> NewShow {
        NewShow {
            artist_id,
            venue_id,
            show_time,
        }
    }

    pub fn find_for_venue(venue_id: Uuid, conn: &PgConnection) -> Result<Vec<(Show, Artist)>, DatabaseError> {
        shows::table
            .inner_join(artists::table)
            .filter(shows::venue_id.eq(venue_id))
            .order_by(shows::show_time.asc())
            .select((shows::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for venue")
    }

    pub fn find_for_artist(artist_id: Uuid, conn: &PgConnection) -> Result<Vec<(Show, Venue)>, DatabaseError> {
        shows::table
            .inner_join(venues::table)
            .filter(shows::artist_id.eq(artist_id))
            .order_by(shows::show_time.asc())
            .select((shows::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for artist")
    }

    pub fn find_all_for_display(conn: &PgConnection) -> Result<Vec<DisplayShow>, DatabaseError> {
        let results: Vec<(Show, Artist, Venue)> = shows::table
            .inner_join(artists::table)
            .inner_join(venues::table)
            .order_by(shows::show_time.asc())
            .select((shows::all_columns, artists::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows")?;

        let mut display_results = Vec::new();
        for (show, artist, venue) in results {
            display_results.push(DisplayShow {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.show_time,
            })
        }
        Ok(display_results)
    }

    pub fn upcoming_count_for_venue(
        venue_id: Uuid,
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<i64, DatabaseError> {
        shows::table
            .filter(shows::venue_id.eq(venue_id))
            .filter(shows::show_time.ge(now))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count upcoming shows for venue")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayShow {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueShowEntry {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistShowEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}
