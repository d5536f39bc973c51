use rust_decimal::Decimal;
use vodca::{AsRefln, Fromln};

use crate::entity::{BookPrice, ItemQuantity};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct OrderTotal(Decimal);

impl OrderTotal {
    pub fn new(total: impl Into<Decimal>) -> Self {
        Self(total.into())
    }

    pub fn of_lines<'a>(lines: impl IntoIterator<Item = (&'a BookPrice, &'a ItemQuantity)>) -> Self {
        Self(
            lines
                .into_iter()
                .map(|(price, quantity)| price.line_total(quantity))
                .sum(),
        )
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use crate::entity::{BookPrice, ItemQuantity, OrderTotal};

    #[test]
    fn sums_price_times_quantity() {
        let lines = [
            (BookPrice::new(dec!(10.00)), ItemQuantity::new(2)),
            (BookPrice::new(dec!(5.50)), ItemQuantity::new(1)),
        ];
        let total = OrderTotal::of_lines(lines.iter().map(|(p, q)| (p, q)));
        assert_eq!(total, OrderTotal::new(dec!(25.50)));
    }

    #[test]
    fn empty_order_totals_zero() {
        let lines: Vec<(&BookPrice, &ItemQuantity)> = Vec::new();
        assert_eq!(OrderTotal::of_lines(lines), OrderTotal::new(dec!(0)));
    }
}
