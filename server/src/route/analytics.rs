use axum::extract::State;
use axum::routing::get;
use axum::Router;

use application::service::GetAnalyticsService;

use crate::controller::Controller;
use crate::handler::AppModule;

pub use self::response::*;

mod response;

pub trait AnalyticsRouter {
    fn route_analytics(self) -> Self;
}

impl AnalyticsRouter for Router<AppModule> {
    fn route_analytics(self) -> Self {
        self.route(
            "/book-demand",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_book_demand())
                    .await
            }),
        )
        .route(
            "/profit-margins",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .fetch(|| module.database().get_profit_margins())
                    .await
            }),
        )
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use kernel::KernelError;

    use crate::route::test::spawn_server;

    async fn fetch(url: String) -> Value {
        reqwest::get(url)
            .await
            .expect("request")
            .json()
            .await
            .expect("json body")
    }

    #[tokio::test]
    async fn reports_demand_with_titles() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let demand = fetch(format!("{base}/book-demand")).await;
        assert_eq!(demand.as_array().map(Vec::len), Some(5));
        assert_eq!(
            demand[2],
            json!({
                "ID": "D003",
                "ISBN": "9780000000003",
                "BookTitle": "Northern Lines",
                "Popularity": 91
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn reports_margins_as_numbers() -> error_stack::Result<(), KernelError> {
        let base = spawn_server().await?;
        let margins = fetch(format!("{base}/api/profit-margins")).await;
        assert_eq!(margins.as_array().map(Vec::len), Some(5));
        assert_eq!(margins[2]["ID"], json!("PM003"));
        assert_eq!(margins[2]["SalesTotal"], json!(599.76));
        assert_eq!(margins[2]["CostTotal"], json!(372.0));
        Ok(())
    }
}
