use error_stack::Report;
use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    BookQuery, CustomerQuery, DependOnBookQuery, DependOnCustomerQuery, DependOnOrderItemQuery,
    DependOnOrderQuery, OrderItemQuery, OrderQuery,
};
use kernel::interface::update::{
    DependOnInventoryModifier, DependOnOrderItemModifier, DependOnOrderModifier,
    InventoryModifier, OrderItemModifier, OrderModifier,
};
use kernel::prelude::entity::{
    CustomerId, Isbn, ItemQuantity, Order, OrderDate, OrderId, OrderItem, OrderItemId, OrderTotal,
};
use kernel::KernelError;

use crate::service::settle;
use crate::transfer::{
    GetOrderDto, OrderDetailDto, OrderDto, OrderItemDto, PlaceOrderDto, PlacedOrderDto,
};

struct CartLine {
    isbn: Isbn,
    quantity: ItemQuantity,
    quoted_price: Decimal,
}

fn validate(dto: PlaceOrderDto) -> error_stack::Result<(CustomerId, Vec<CartLine>), KernelError> {
    if dto.customer_id.trim().is_empty() {
        return Err(Report::new(KernelError::validation("customerId is required")));
    }
    if dto.items.is_empty() {
        return Err(Report::new(KernelError::validation("order has no items")));
    }
    let lines = dto
        .items
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if line.isbn.trim().is_empty() {
                return Err(Report::new(KernelError::validation(format!(
                    "items[{index}].isbn is required"
                ))));
            }
            if line.quantity <= 0 {
                return Err(Report::new(KernelError::validation(format!(
                    "items[{index}].quantity must be greater than 0"
                ))));
            }
            let quantity = i32::try_from(line.quantity).map_err(|error| {
                Report::new(error).change_context(KernelError::validation(format!(
                    "items[{index}].quantity is too large"
                )))
            })?;
            if line.price < Decimal::ZERO {
                return Err(Report::new(KernelError::validation(format!(
                    "items[{index}].price must not be negative"
                ))));
            }
            Ok(CartLine {
                isbn: Isbn::new(line.isbn),
                quantity: ItemQuantity::new(quantity),
                quoted_price: line.price,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((CustomerId::new(dto.customer_id), lines))
}

/// Places an order as one unit of work.
///
/// Either the order, every one of its items and every stock decrement are committed
/// together, or the store is left exactly as it was.
#[async_trait::async_trait]
pub trait PlaceOrderService:
    'static
    + Sync
    + Send
    + DependOnCustomerQuery
    + DependOnBookQuery
    + DependOnOrderModifier
    + DependOnOrderItemModifier
    + DependOnInventoryModifier
{
    async fn place_order(&self, dto: PlaceOrderDto) -> error_stack::Result<PlacedOrderDto, KernelError> {
        let (customer_id, lines) = validate(dto).map_err(|report| {
            tracing::warn!("order rejected: {}", report.current_context());
            report
        })?;

        let mut transaction = self.database_connection().transact().await?;
        let placed = async {
            let customer = self
                .customer_query()
                .find_by_id(&mut *transaction, &customer_id)
                .await?;
            if customer.is_none() {
                return Err(Report::new(KernelError::UnknownCustomer {
                    customer_id: customer_id.clone().into(),
                }));
            }

            let mut priced = Vec::with_capacity(lines.len());
            for line in &lines {
                let book = self
                    .book_query()
                    .find_by_isbn(&mut *transaction, &line.isbn)
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::UnknownBook {
                            isbn: line.isbn.to_string(),
                        })
                    })?;
                let price = *book.price();
                let catalog: Decimal = price.into();
                if catalog != line.quoted_price {
                    tracing::warn!(
                        "quoted price {} for {} differs from catalog price {catalog}, charging catalog price",
                        line.quoted_price,
                        line.isbn,
                    );
                }
                priced.push((line, price));
            }

            let total = OrderTotal::of_lines(priced.iter().map(|(line, price)| (price, &line.quantity)));
            let order_id = OrderId::new(Uuid::new_v4().to_string());
            let order = Order::new(order_id.clone(), customer_id.clone(), OrderDate::today(), total);
            self.order_modifier()
                .create(&mut *transaction, &order)
                .await?;

            for (line, price) in priced {
                let item = OrderItem::new(
                    OrderItemId::new(Uuid::new_v4().to_string()),
                    order_id.clone(),
                    line.isbn.clone(),
                    line.quantity,
                    price,
                );
                self.order_item_modifier()
                    .create(&mut *transaction, &item)
                    .await?;

                let taken = self
                    .inventory_modifier()
                    .decrement(&mut *transaction, &line.isbn, &line.quantity)
                    .await?;
                if !taken {
                    tracing::debug!("stock for {} cannot cover {:?}", line.isbn, line.quantity);
                    return Err(Report::new(KernelError::InsufficientStock {
                        isbn: line.isbn.to_string(),
                    }));
                }
            }

            Ok::<_, Report<KernelError>>(PlacedOrderDto {
                order_id: order_id.to_string(),
                order_total: total.into(),
            })
        }
        .await;

        match settle(transaction, placed).await {
            Ok(placed) => {
                tracing::info!(
                    "order {} placed for {} totalling {}",
                    placed.order_id,
                    String::from(customer_id),
                    placed.order_total
                );
                Ok(placed)
            }
            Err(report) => {
                tracing::warn!("order rejected: {}", report.current_context());
                Err(report)
            }
        }
    }
}

impl<T> PlaceOrderService for T where
    T: DependOnCustomerQuery
        + DependOnBookQuery
        + DependOnOrderModifier
        + DependOnOrderItemModifier
        + DependOnInventoryModifier
{
}

#[async_trait::async_trait]
pub trait GetOrderService: 'static + Sync + Send + DependOnOrderQuery + DependOnOrderItemQuery {
    async fn get_orders(&self) -> error_stack::Result<Vec<OrderDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let orders = self.order_query().find_all(&mut *connection).await?;
        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    async fn get_order(&self, dto: GetOrderDto) -> error_stack::Result<Option<OrderDetailDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let id = OrderId::new(dto.id);
        let Some(order) = self.order_query().find_by_id(&mut *connection, &id).await? else {
            return Ok(None);
        };
        let items = self
            .order_item_query()
            .find_by_order_id(&mut *connection, &id)
            .await?;
        Ok(Some(OrderDetailDto {
            order: OrderDto::from(order),
            items: items.into_iter().map(OrderItemDto::from).collect(),
        }))
    }
}

impl<T> GetOrderService for T where T: DependOnOrderQuery + DependOnOrderItemQuery {}

#[async_trait::async_trait]
pub trait GetOrderItemService: 'static + Sync + Send + DependOnOrderItemQuery {
    async fn get_order_items(&self) -> error_stack::Result<Vec<OrderItemDto>, KernelError> {
        let mut connection = self.database_connection().connect().await?;
        let items = self.order_item_query().find_all(&mut *connection).await?;
        Ok(items.into_iter().map(OrderItemDto::from).collect())
    }
}

impl<T> GetOrderItemService for T where T: DependOnOrderItemQuery {}
