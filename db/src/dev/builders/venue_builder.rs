use crate::models::*;
use diesel::prelude::*;

pub struct VenueBuilder<'a> {
    name: String,
    city: Option<String>,
    state: Option<String>,
    genres: Vec<String>,
    image_link: Option<String>,
    connection: &'a PgConnection,
}

impl<'a> VenueBuilder<'a> {
    pub fn new(connection: &PgConnection) -> VenueBuilder {
        VenueBuilder {
            connection,
            name: "Venue".into(),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            genres: vec!["Rock".into()],
            image_link: None,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    pub fn with_city(mut self, city: String) -> Self {
        self.city = Some(city);
        self
    }

    pub fn with_state(mut self, state: String) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_image_link(mut self, image_link: String) -> Self {
        self.image_link = Some(image_link);
        self
    }

    pub fn finish(self) -> Venue {
        let mut venue = Venue::create(&self.name, self.genres);
        venue.city = self.city;
        venue.state = self.state;
        venue.image_link = self.image_link;
        venue.commit(self.connection).unwrap()
    }
}
