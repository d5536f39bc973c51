use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::AppModule;

pub use self::{
    admin::AdminRouter, analytics::AnalyticsRouter, catalog::CatalogRouter,
    customer::CustomerRouter, inventory::InventoryRouter, order::OrderRouter,
};

mod admin;
mod analytics;
mod catalog;
mod customer;
mod inventory;
mod order;

/// Every route is served at the root and again under `/api`, where the dashboard expects it.
pub fn router(module: AppModule) -> Router {
    let api = Router::new()
        .route_order()
        .route_inventory()
        .route_catalog()
        .route_customer()
        .route_analytics()
        .route_admin();

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(module)
}

#[cfg(test)]
pub(crate) mod test {
    use error_stack::ResultExt;
    use tokio::net::TcpListener;

    use application::service::ResetStoreService;
    use driver::database::SqliteDatabase;
    use kernel::KernelError;

    use crate::handler::{AppModule, Handler};

    /// Serves a freshly seeded store on an ephemeral port and returns its base url.
    pub async fn spawn_server() -> error_stack::Result<String, KernelError> {
        let path = std::env::temp_dir().join(format!("bookstore-{}.db", uuid::Uuid::new_v4()));
        let database = SqliteDatabase::open(path).await?;
        database.reset_store().await?;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        let address = listener
            .local_addr()
            .change_context_lazy(|| KernelError::Internal)?;
        let app = super::router(AppModule::from(Handler::new(database)));
        tokio::spawn(async move { axum::serve(listener, app.into_make_service()).await });
        Ok(format!("http://{address}"))
    }
}
