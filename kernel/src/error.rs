use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    Validation { reason: String },
    UnknownCustomer { customer_id: String },
    UnknownBook { isbn: String },
    InsufficientStock { isbn: String },
    Timeout,
    Internal,
}

impl KernelError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation { reason } => write!(f, "Invalid request: {reason}"),
            KernelError::UnknownCustomer { customer_id } => {
                write!(f, "Unknown customer: {customer_id}")
            }
            KernelError::UnknownBook { isbn } => write!(f, "Unknown book: {isbn}"),
            KernelError::InsufficientStock { isbn } => {
                write!(f, "Insufficient stock for ISBN {isbn}")
            }
            KernelError::Timeout => write!(f, "Store timed out"),
            KernelError::Internal => write!(f, "Internal store error"),
        }
    }
}

impl Context for KernelError {}

#[cfg(test)]
mod test {
    use super::KernelError;

    #[test]
    fn messages_name_the_offending_record() {
        assert_eq!(
            KernelError::InsufficientStock {
                isbn: "9780143127741".to_string()
            }
            .to_string(),
            "Insufficient stock for ISBN 9780143127741"
        );
        assert_eq!(
            KernelError::UnknownCustomer {
                customer_id: "C999".to_string()
            }
            .to_string(),
            "Unknown customer: C999"
        );
        assert_eq!(
            KernelError::validation("order has no items").to_string(),
            "Invalid request: order has no items"
        );
    }
}
