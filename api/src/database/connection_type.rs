use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::PgConnection;
use std::sync::Arc;

pub enum ConnectionType {
    Pg(Arc<PgConnection>),
    R2D2(PooledConnection<ConnectionManager<PgConnection>>),
}
