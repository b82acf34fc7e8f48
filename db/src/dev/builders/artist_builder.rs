use crate::models::*;
use diesel::prelude::*;

pub struct ArtistBuilder<'a> {
    name: String,
    city: Option<String>,
    state: Option<String>,
    genres: Vec<String>,
    image_link: Option<String>,
    connection: &'a PgConnection,
}

impl<'a> ArtistBuilder<'a> {
    pub fn new(connection: &PgConnection) -> ArtistBuilder {
        ArtistBuilder {
            connection,
            name: "Artist".into(),
            city: Some("Oakland".into()),
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

    pub fn finish(self) -> Artist {
        let mut artist = Artist::create(&self.name, self.genres);
        artist.city = self.city;
        artist.state = self.state;
        artist.image_link = self.image_link;
        artist.commit(self.connection).unwrap()
    }
}
