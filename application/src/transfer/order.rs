use rust_decimal::Decimal;
use time::Date;

use kernel::prelude::entity::{
    DestructOrder, DestructOrderItem, DestructOrderView, OrderItem, OrderView, Titled,
};

pub struct PlaceOrderDto {
    pub customer_id: String,
    pub items: Vec<OrderLineDto>,
}

/// One cart line. `price` is what the caller saw; the catalog price is what gets charged.
pub struct OrderLineDto {
    pub isbn: String,
    pub quantity: i64,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrderDto {
    pub order_id: String,
    pub order_total: Decimal,
}

pub struct GetOrderDto {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDto {
    pub id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub date: Date,
    pub total: Decimal,
}

impl From<OrderView> for OrderDto {
    fn from(value: OrderView) -> Self {
        let DestructOrderView {
            order,
            customer_name,
        } = value.into_destruct();
        let DestructOrder {
            id,
            customer_id,
            date,
            total,
        } = order.into_destruct();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            customer_name: customer_name.map(Into::into),
            date: date.into(),
            total: total.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemDto {
    pub id: String,
    pub order_id: String,
    pub isbn: String,
    pub book_title: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
}

impl From<Titled<OrderItem>> for OrderItemDto {
    fn from(value: Titled<OrderItem>) -> Self {
        let (item, book_title) = value.into_parts();
        let DestructOrderItem {
            id,
            order_id,
            isbn,
            quantity,
            price,
        } = item.into_destruct();
        Self {
            id: id.into(),
            order_id: order_id.into(),
            isbn: isbn.into(),
            book_title: book_title.map(Into::into),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailDto {
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}
