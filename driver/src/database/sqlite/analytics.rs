use sqlx::SqliteConnection;

use kernel::interface::query::AnalyticsQuery;
use kernel::prelude::entity::{
    BookDemand, BookTitle, CostTotal, DemandId, Isbn, MarginId, Popularity, ProfitMargin,
    SalesTotal, Titled,
};
use kernel::KernelError;

use crate::database::sqlite::decimal_from_real;
use crate::error::ConvertError;

pub struct SqliteAnalyticsRepository;

#[async_trait::async_trait]
impl AnalyticsQuery<SqliteConnection> for SqliteAnalyticsRepository {
    async fn find_book_demand(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<BookDemand>>, KernelError> {
        SqliteAnalyticsInternal::find_book_demand(con).await
    }

    async fn find_profit_margins(
        &self,
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<ProfitMargin>>, KernelError> {
        SqliteAnalyticsInternal::find_profit_margins(con).await
    }
}

#[derive(sqlx::FromRow)]
struct DemandRow {
    id: String,
    isbn: String,
    popularity: i32,
    book_title: Option<String>,
}

impl From<DemandRow> for Titled<BookDemand> {
    fn from(value: DemandRow) -> Self {
        Titled::new(
            BookDemand::new(
                DemandId::new(value.id),
                Isbn::new(value.isbn),
                Popularity::new(value.popularity),
            ),
            value.book_title.map(BookTitle::new),
        )
    }
}

#[derive(sqlx::FromRow)]
struct MarginRow {
    id: String,
    isbn: String,
    sales_total: f64,
    cost_total: f64,
    book_title: Option<String>,
}

impl TryFrom<MarginRow> for Titled<ProfitMargin> {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: MarginRow) -> Result<Self, Self::Error> {
        let margin = ProfitMargin::new(
            MarginId::new(value.id),
            Isbn::new(value.isbn),
            SalesTotal::new(decimal_from_real(value.sales_total)?),
            CostTotal::new(decimal_from_real(value.cost_total)?),
        );
        Ok(Titled::new(margin, value.book_title.map(BookTitle::new)))
    }
}

pub(in crate::database) struct SqliteAnalyticsInternal;

impl SqliteAnalyticsInternal {
    async fn find_book_demand(
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<BookDemand>>, KernelError> {
        let rows = sqlx::query_as::<_, DemandRow>(
            // language=sqlite
            r#"
            SELECT d.ID AS id, d.ISBN AS isbn, d.Popularity AS popularity, b.Title AS book_title
            FROM bookDemand d
            LEFT JOIN book b ON b.ISBN = d.ISBN
            ORDER BY d.ID
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Titled::from).collect())
    }

    async fn find_profit_margins(
        con: &mut SqliteConnection,
    ) -> error_stack::Result<Vec<Titled<ProfitMargin>>, KernelError> {
        let rows = sqlx::query_as::<_, MarginRow>(
            // language=sqlite
            r#"
            SELECT m.ID AS id, m.ISBN AS isbn, m.SalesTotal AS sales_total,
                   m.CostTotal AS cost_total, b.Title AS book_title
            FROM profitMargin m
            LEFT JOIN book b ON b.ISBN = m.ISBN
            ORDER BY m.ID
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Titled::try_from).collect()
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AnalyticsQuery;
    use kernel::prelude::entity::{BookTitle, CostTotal, Popularity, SalesTotal};
    use kernel::KernelError;

    use crate::database::sqlite::test::seeded_database;
    use crate::database::SqliteAnalyticsRepository;

    #[tokio::test]
    async fn reads_demand_and_margins() -> error_stack::Result<(), KernelError> {
        let db = seeded_database().await?;
        let mut con = db.connect().await?;

        let demand = SqliteAnalyticsRepository.find_book_demand(&mut *con).await?;
        assert_eq!(demand.len(), 5);
        assert_eq!(demand[2].record().popularity(), &Popularity::new(91));
        assert_eq!(demand[2].book_title(), Some(&BookTitle::new("Northern Lines")));

        let margins = SqliteAnalyticsRepository.find_profit_margins(&mut *con).await?;
        assert_eq!(margins.len(), 5);
        assert_eq!(margins[2].record().sales_total(), &SalesTotal::new(dec!(599.76)));
        assert_eq!(margins[2].record().cost_total(), &CostTotal::new(dec!(372.00)));
        Ok(())
    }
}
