use crate::dev::builders::*;
use diesel::{Connection, PgConnection};
use dotenv::dotenv;
use std::env;

/// Test harness around a connection to the test database. Every project runs
/// inside a test transaction, so nothing a test writes survives it.
pub struct TestProject {
    pub connection: PgConnection,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        dotenv().ok();
        let conn_str = env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be defined.");
        let connection = PgConnection::establish(&conn_str).expect("Could not get access to test database");
        connection
            .begin_test_transaction()
            .expect("Could not start testing transaction");
        TestProject { connection }
    }

    pub fn get_connection(&self) -> &PgConnection {
        &self.connection
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
