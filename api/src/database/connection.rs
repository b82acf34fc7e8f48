use crate::database::ConnectionType;
use crate::errors::ApiError;
use crate::server::GetAppState;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use diesel::connection::TransactionManager;
use diesel::Connection as DieselConnection;
use diesel::PgConnection;
use futures::future::{err, ok, Ready};
use std::sync::Arc;

#[derive(Clone)]
pub struct Connection {
    inner: Arc<ConnectionType>,
}

impl From<ConnectionType> for Connection {
    fn from(connection_type: ConnectionType) -> Self {
        Connection {
            inner: Arc::new(connection_type),
        }
    }
}

impl From<PgConnection> for Connection {
    fn from(connection: PgConnection) -> Self {
        ConnectionType::Pg(Arc::new(connection)).into()
    }
}

impl From<Arc<PgConnection>> for Connection {
    fn from(connection: Arc<PgConnection>) -> Self {
        ConnectionType::Pg(connection).into()
    }
}

impl Connection {
    pub fn get(&self) -> &PgConnection {
        match *self.inner {
            ConnectionType::Pg(ref connection) => &*connection,
            ConnectionType::R2D2(ref connection) => &**connection,
        }
    }
}

impl FromRequest for Connection {
    type Config = ();
    type Error = ApiError;
    type Future = Ready<Result<Connection, Self::Error>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(connection) = request.extensions().get::<Connection>() {
            return ok(connection.clone());
        }

        let connection = match request.state().database.get_connection() {
            Ok(connection) => connection,
            Err(e) => return err(e.into()),
        };
        {
            let connection_object = connection.get();
            if let Err(e) = connection_object
                .transaction_manager()
                .begin_transaction(connection_object)
            {
                return err(e.into());
            }
        }
        request.extensions_mut().insert(connection.clone());
        ok(connection)
    }
}
