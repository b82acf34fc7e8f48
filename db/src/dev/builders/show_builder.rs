use crate::dev::builders::*;
use crate::models::*;
use crate::utils::dates;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ShowBuilder<'a> {
    artist_id: Option<Uuid>,
    venue_id: Option<Uuid>,
    show_time: NaiveDateTime,
    connection: &'a PgConnection,
}

impl<'a> ShowBuilder<'a> {
    pub fn new(connection: &PgConnection) -> ShowBuilder {
        ShowBuilder {
            connection,
            artist_id: None,
            venue_id: None,
            show_time: dates::now().add_days(2).finish(),
        }
    }

    pub fn with_artist(mut self, artist: &Artist) -> Self {
        self.artist_id = Some(artist.id);
        self
    }

    pub fn with_venue(mut self, venue: &Venue) -> Self {
        self.venue_id = Some(venue.id);
        self
    }

    pub fn with_show_time(mut self, show_time: NaiveDateTime) -> Self {
        self.show_time = show_time;
        self
    }

    pub fn finish(self) -> Show {
        let artist_id = match self.artist_id {
            Some(id) => id,
            None => ArtistBuilder::new(self.connection).finish().id,
        };
        let venue_id = match self.venue_id {
            Some(id) => id,
            None => VenueBuilder::new(self.connection).finish().id,
        };

        Show::create(artist_id, venue_id, self.show_time)
            .commit(self.connection)
            .unwrap()
    }
}
