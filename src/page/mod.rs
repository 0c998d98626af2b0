//! Dashboard pages. Every page loads its rows on open and reports failures
//! through a [`Notifier`](crate::notify::Notifier) instead of returning them.

use std::fmt::Display;

use tracing::error;

use crate::notify::{Notification, Notifier};

pub mod dashboard;
pub mod form;
pub mod products;
pub mod purchase_orders;
pub mod reports;
pub mod sales_orders;
pub mod stock;
pub mod vendors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Default,
    Secondary,
    Destructive,
}

impl Badge {
    /// Destructive badges are flagged with a leading `!`.
    pub fn decorate(self, label: &str) -> String {
        match self {
            Badge::Destructive => format!("!{}", label),
            Badge::Default | Badge::Secondary => label.to_owned(),
        }
    }
}

/// Upper-cases the first character of a status and leaves the rest as stored.
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => "-",
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Logs a failed page operation and raises its single error notification.
fn report_failure(notifier: &dyn Notifier, context: &str, message: &str, err: &dyn Display) {
    error!("Error {}: {}", context, err);
    notifier.notify(Notification::error(message));
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_capitalizes_first_letter_only() {
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label("in_transit"), "In_transit");
        assert_eq!(status_label("Shipped"), "Shipped");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn only_destructive_badges_are_flagged() {
        assert_eq!(Badge::Destructive.decorate("Cancelled"), "!Cancelled");
        assert_eq!(Badge::Secondary.decorate("Pending"), "Pending");
        assert_eq!(Badge::Default.decorate("Shipped"), "Shipped");
    }

    #[test]
    fn missing_text_renders_as_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("kg")), "kg");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(-3.456), "$-3.46");
    }
}
