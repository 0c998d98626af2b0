use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{
    form::{self, FormError},
    format_amount, report_failure, status_label, Badge,
};
use crate::entity::sales_order;
use crate::notify::{Notification, Notifier};
use crate::render::{self, Render, Table};

pub fn status_badge(status: &str) -> Badge {
    match status {
        "pending" => Badge::Secondary,
        "processing" | "shipped" | "delivered" => Badge::Default,
        "cancelled" => Badge::Destructive,
        _ => Badge::Secondary,
    }
}

/// Customer name, falling back to the email address.
pub fn customer(order: &sales_order::Model) -> &str {
    [&order.customer_name, &order.customer_email]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .find(|value| !value.is_empty())
        .unwrap_or("-")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesOrderForm {
    pub order_number: String,
    pub sales_channel_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: String,
    pub order_date: String,
    pub status: String,
    pub total_amount: String,
}

impl SalesOrderForm {
    pub fn to_active_model(&self) -> Result<sales_order::ActiveModel, FormError> {
        let mut active = sales_order::ActiveModel::new();
        active.order_number = Set(form::required("order_number", &self.order_number)?);
        active.sales_channel_id = Set(form::optional_int("sales_channel_id", &self.sales_channel_id)?);
        active.customer_name = Set(form::optional(&self.customer_name));
        active.customer_email = Set(form::optional(&self.customer_email));
        active.shipping_address = Set(form::optional(&self.shipping_address));
        active.order_date = Set(form::date_or_today("order_date", &self.order_date)?);
        active.status = Set(form::or_default(&self.status, sales_order::DEFAULT_STATUS));
        active.total_amount = Set(form::amount("total_amount", &self.total_amount)?);
        Ok(active)
    }
}

#[derive(Debug)]
pub struct SalesOrdersPage {
    pub orders: Vec<sales_order::Model>,
    pub loading: bool,
    pub show_form: bool,
    pub form: SalesOrderForm,
}

impl Default for SalesOrdersPage {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            show_form: false,
            form: SalesOrderForm::default(),
        }
    }
}

impl SalesOrdersPage {
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match sales_order::Entity::find()
            .order_by_desc(sales_order::Column::CreatedAt)
            .order_by_desc(sales_order::Column::Id)
            .all(db)
            .await
        {
            Ok(orders) => {
                debug!("loaded {} sales orders", orders.len());
                self.orders = orders;
            }
            Err(err) => report_failure(
                notifier,
                "loading sales orders",
                "Failed to load sales orders",
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
                "creating sales order",
                "Failed to create sales order",
                &err,
            );
            return false;
        }
        notifier.notify(Notification::success("Sales order created successfully"));
        self.form = SalesOrderForm::default();
        self.show_form = false;
        self.load(db, notifier).await;
        true
    }
}

impl Render for SalesOrdersPage {
    fn render(&self) -> String {
        let mut out = render::heading("Sales Orders", "Track and manage your customer orders");
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        if self.orders.is_empty() {
            out.push_str(&render::empty_state(
                "No sales orders found",
                "Create your first sales order to get started",
            ));
            return out;
        }
        let mut table = Table::new(["Order Number", "Customer", "Order Date", "Status", "Total Amount"]);
        for order in &self.orders {
            table.push([
                order.order_number.clone(),
                customer(order).to_owned(),
                order.order_date.format("%Y-%m-%d").to_string(),
                status_badge(&order.status).decorate(&status_label(&order.status)),
                format_amount(order.total_amount),
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

    #[test]
    fn badges_follow_status() {
        assert_eq!(status_badge("pending"), Badge::Secondary);
        for status in ["processing", "shipped", "delivered"] {
            assert_eq!(status_badge(status), Badge::Default);
        }
        assert_eq!(status_badge("cancelled"), Badge::Destructive);
        assert_eq!(status_badge("returned"), Badge::Secondary);
    }

    #[tokio::test]
    async fn customer_falls_back_to_email_then_dash() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = SalesOrdersPage::default();
        for (number, name, email) in [
            ("SO-1", "Ada Lovelace", "ada@example.test"),
            ("SO-2", "", "grace@example.test"),
            ("SO-3", "", ""),
        ] {
            page.form = SalesOrderForm {
                order_number: number.to_owned(),
                customer_name: name.to_owned(),
                customer_email: email.to_owned(),
                status: "shipped".to_owned(),
                total_amount: "5".to_owned(),
                ..SalesOrderForm::default()
            };
            assert!(page.submit(&db, &notifier).await);
        }

        let customers: Vec<(&str, &str)> = page
            .orders
            .iter()
            .map(|o| (o.order_number.as_str(), customer(o)))
            .collect();
        assert_eq!(
            customers,
            [
                ("SO-3", "-"),
                ("SO-2", "grace@example.test"),
                ("SO-1", "Ada Lovelace"),
            ]
        );
        assert_eq!(page.orders[0].customer_name, None);
        assert!(page.render().contains("Shipped"));
    }

    #[tokio::test]
    async fn failed_load_notifies_once() {
        let db = memory_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = SalesOrdersPage::default();
        page.load(&db, &notifier).await;
        assert!(page.orders.is_empty());
        assert_eq!(
            notifier.all(),
            vec![Notification::error("Failed to load sales orders")]
        );
    }
}
