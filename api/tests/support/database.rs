use db::dev::builders::*;
use diesel::{Connection, PgConnection};
use encore_api::config::{Config, Environment};
use std::sync::Arc;

#[derive(Clone)]
pub struct TestDatabase {
    pub connection: Arc<PgConnection>,
}

#[allow(dead_code)]
impl TestDatabase {
    pub fn new() -> TestDatabase {
        let config = Config::new(Environment::Test);

        let connection = PgConnection::establish(&config.database_url).unwrap_or_else(|_| {
            panic!("Connection to {} could not be established.", config.database_url)
        });

        connection.begin_test_transaction().unwrap();

        TestDatabase {
            connection: Arc::new(connection),
        }
    }

    pub fn create_artist(&self) -> ArtistBuilder {
        ArtistBuilder::new(&self.connection)
    }

    pub fn create_show(&self) -> ShowBuilder {
        ShowBuilder::new(&self.connection)
    }

    pub fn create_venue(&self) -> VenueBuilder {
        VenueBuilder::new(&self.connection)
    }
}
