use std::ops::Deref;
use std::sync::Arc;

use vodca::References;

use application::service::ResetStoreService;
use driver::database::SqliteDatabase;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl From<Handler> for AppModule {
    fn from(handler: Handler) -> Self {
        Self(Arc::new(handler))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: SqliteDatabase,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = SqliteDatabase::new().await?;
        if database.initialize_store().await? {
            tracing::info!("created schema and loaded seed data");
        }
        Ok(Self::new(database))
    }

    pub fn new(database: SqliteDatabase) -> Self {
        Self { database }
    }
}
