use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{
    form::{self, FormError},
    format_amount, or_dash, report_failure, status_label, Badge,
};
use crate::entity::purchase_order;
use crate::notify::{Notification, Notifier};
use crate::render::{self, Render, Table};

pub fn status_badge(status: &str) -> Badge {
    match status {
        "pending" => Badge::Secondary,
        "approved" | "completed" => Badge::Default,
        "cancelled" => Badge::Destructive,
        _ => Badge::Secondary,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchaseOrderForm {
    pub order_number: String,
    pub vendor_id: String,
    pub order_date: String,
    pub status: String,
    pub total_amount: String,
    pub notes: String,
}

impl PurchaseOrderForm {
    pub fn to_active_model(&self) -> Result<purchase_order::ActiveModel, FormError> {
        let mut active = purchase_order::ActiveModel::new();
        active.order_number = Set(form::required("order_number", &self.order_number)?);
        active.vendor_id = Set(form::leading_int("vendor_id", &self.vendor_id)?);
        active.order_date = Set(form::date_or_today("order_date", &self.order_date)?);
        active.status = Set(form::or_default(&self.status, purchase_order::DEFAULT_STATUS));
        active.total_amount = Set(form::amount("total_amount", &self.total_amount)?);
        active.notes = Set(form::optional(&self.notes));
        Ok(active)
    }
}

#[derive(Debug)]
pub struct PurchaseOrdersPage {
    pub orders: Vec<purchase_order::Model>,
    pub loading: bool,
    pub show_form: bool,
    pub form: PurchaseOrderForm,
}

impl Default for PurchaseOrdersPage {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            show_form: false,
            form: PurchaseOrderForm::default(),
        }
    }
}

impl PurchaseOrdersPage {
    /// Newest orders first.
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match purchase_order::Entity::find()
            .order_by_desc(purchase_order::Column::CreatedAt)
            .order_by_desc(purchase_order::Column::Id)
            .all(db)
            .await
        {
            Ok(orders) => {
                debug!("loaded {} purchase orders", orders.len());
                self.orders = orders;
            }
            Err(err) => report_failure(
                notifier,
                "loading purchase orders",
                "Failed to load purchase orders",
                &err,
            ),
        }
        self.loading = false;
    }

    pub async fn submit(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) -> bool {
        let inserted = match self.form.to_active_model() {
            Ok(active) => active.insert(db).await.map_err(anyhow::Error::from),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = inserted {
            report_failure(
                notifier,
                "creating purchase order",
                "Failed to create purchase order",
                &err,
            );
            return false;
        }
        notifier.notify(Notification::success("Purchase order created successfully"));
        self.form = PurchaseOrderForm::default();
        self.show_form = false;
        self.load(db, notifier).await;
        true
    }
}

impl Render for PurchaseOrdersPage {
    fn render(&self) -> String {
        let mut out = render::heading(
            "Purchase Orders",
            "Manage your purchase orders and supplier requests",
        );
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        if self.orders.is_empty() {
            out.push_str(&render::empty_state(
                "No purchase orders found",
                "Create your first purchase order to get started",
            ));
            return out;
        }
        let mut table = Table::new(["Order Number", "Order Date", "Status", "Total Amount", "Notes"]);
        for order in &self.orders {
            table.push([
                order.order_number.clone(),
                order.order_date.format("%Y-%m-%d").to_string(),
                status_badge(&order.status).decorate(&status_label(&order.status)),
                format_amount(order.total_amount),
                or_dash(order.notes.as_deref()).to_owned(),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::page::testing::{memory_db, prepared_db};

    fn order_form(order_number: &str, total_amount: &str) -> PurchaseOrderForm {
        PurchaseOrderForm {
            order_number: order_number.to_owned(),
            vendor_id: "1".to_owned(),
            total_amount: total_amount.to_owned(),
            ..PurchaseOrderForm::default()
        }
    }

    #[test]
    fn badges_follow_status() {
        assert_eq!(status_badge("pending"), Badge::Secondary);
        assert_eq!(status_badge("approved"), Badge::Default);
        assert_eq!(status_badge("completed"), Badge::Default);
        assert_eq!(status_badge("cancelled"), Badge::Destructive);
        assert_eq!(status_badge("on_hold"), Badge::Secondary);
    }

    #[tokio::test]
    async fn newest_order_is_listed_first() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = PurchaseOrdersPage::default();
        page.form = order_form("PO-1", "10");
        assert!(page.submit(&db, &notifier).await);
        page.form = order_form("PO-2", "20.5");
        assert!(page.submit(&db, &notifier).await);

        let numbers: Vec<&str> = page.orders.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, ["PO-2", "PO-1"]);
        assert_eq!(page.orders[0].status, "pending");
        assert_eq!(page.orders[0].notes, None);

        let rendered = page.render();
        assert!(rendered.contains("$20.50"));
        assert!(rendered.contains("Pending"));
    }

    #[tokio::test]
    async fn vendor_id_is_stored_unchecked() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = PurchaseOrdersPage::default();
        page.form = PurchaseOrderForm {
            vendor_id: "404".to_owned(),
            order_date: "2024-03-01".to_owned(),
            ..order_form("PO-9", "99.99")
        };
        assert!(page.submit(&db, &notifier).await);
        assert_eq!(page.orders[0].vendor_id, 404);
        assert!(page.render().contains("2024-03-01"));
    }

    #[tokio::test]
    async fn bad_amount_is_rejected() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = PurchaseOrdersPage::default();
        page.form = order_form("PO-3", "a lot");
        assert!(!page.submit(&db, &notifier).await);
        assert_eq!(
            notifier.errors(),
            vec![Notification::error("Failed to create purchase order")]
        );
    }

    #[tokio::test]
    async fn failed_load_notifies_once() {
        let db = memory_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = PurchaseOrdersPage::default();
        page.load(&db, &notifier).await;
        assert!(page.orders.is_empty());
        assert_eq!(
            notifier.all(),
            vec![Notification::error("Failed to load purchase orders")]
        );
    }
}
