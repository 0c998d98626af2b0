use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use super::{format_amount, report_failure};
use crate::entity::{product, purchase_order, sales_order, stock_balance};
use crate::notify::Notifier;
use crate::render::{self, Render};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReportStats {
    pub total_products: u64,
    pub total_purchase_orders: u64,
    pub total_sales_orders: u64,
    pub low_stock_items: u64,
    pub total_purchase_value: f64,
    pub total_sales_value: f64,
}

impl ReportStats {
    /// Sales revenue minus purchase spend.
    pub fn net(&self) -> f64 {
        self.total_sales_value - self.total_purchase_value
    }

    pub fn is_net_positive(&self) -> bool {
        self.total_sales_value > self.total_purchase_value
    }

    pub fn restock_insight(&self) -> String {
        if self.low_stock_items > 0 {
            format!("{} items need restocking", self.low_stock_items)
        } else {
            "All items are adequately stocked".to_owned()
        }
    }
}

pub fn sum_totals<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    amounts.into_iter().fold(0.0, |sum, amount| sum + amount)
}

async fn fetch_stats(db: &DatabaseConnection) -> Result<ReportStats, DbErr> {
    let (total_products, purchases, sales, balance) = futures::try_join!(
        product::Entity::find().count(db),
        purchase_order::Entity::find().all(db),
        sales_order::Entity::find().all(db),
        stock_balance::fetch_all(db),
    )?;
    Ok(ReportStats {
        total_products: total_products as u64,
        total_purchase_orders: purchases.len() as u64,
        total_sales_orders: sales.len() as u64,
        low_stock_items: balance.iter().filter(|item| item.is_low_stock()).count() as u64,
        total_purchase_value: sum_totals(purchases.iter().map(|order| order.total_amount)),
        total_sales_value: sum_totals(sales.iter().map(|order| order.total_amount)),
    })
}

#[derive(Debug)]
pub struct ReportsPage {
    pub stats: ReportStats,
    pub loading: bool,
}

impl Default for ReportsPage {
    fn default() -> Self {
        Self {
            stats: ReportStats::default(),
            loading: true,
        }
    }
}

impl ReportsPage {
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match fetch_stats(db).await {
            Ok(stats) => self.stats = stats,
            Err(err) => report_failure(
                notifier,
                "loading report data",
                "Failed to load report data",
                &err,
            ),
        }
        self.loading = false;
    }
}

impl Render for ReportsPage {
    fn render(&self) -> String {
        let mut out = render::heading(
            "Reports",
            "Overview of your business performance and key metrics",
        );
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        let stats = &self.stats;
        let cards = [
            ("Total Products", stats.total_products.to_string(), "Products in inventory"),
            ("Purchase Orders", stats.total_purchase_orders.to_string(), "Total purchase orders"),
            ("Sales Orders", stats.total_sales_orders.to_string(), "Total sales orders"),
            ("Low Stock Items", stats.low_stock_items.to_string(), "Items below minimum stock"),
            ("Purchase Value", format_amount(stats.total_purchase_value), "Total purchase value"),
            ("Sales Value", format_amount(stats.total_sales_value), "Total sales revenue"),
        ];
        for (label, value, caption) in &cards {
            render::card(&mut out, label, value, caption);
        }
        out.push_str("\nQuick Insights\n");
        out.push_str(&format!("Stock Status: {}\n", stats.restock_insight()));
        let trend = if stats.is_net_positive() { "up" } else { "down" };
        out.push_str(&format!(
            "Profit Margin: Net {} ({})\n",
            format_amount(stats.net()),
            trend
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{testing::RecordingNotifier, Notification};
    use crate::page::purchase_orders::{PurchaseOrderForm, PurchaseOrdersPage};
    use crate::page::sales_orders::{SalesOrderForm, SalesOrdersPage};
    use crate::page::testing::{memory_db, prepared_db};

    #[test]
    fn empty_totals_sum_to_zero() {
        assert_eq!(sum_totals(Vec::new()), 0.0);
        assert_eq!(format_amount(sum_totals(std::iter::empty())), "$0.00");
    }

    #[test]
    fn insight_and_net() {
        let stats = ReportStats {
            low_stock_items: 3,
            total_purchase_value: 120.0,
            total_sales_value: 100.25,
            ..ReportStats::default()
        };
        assert_eq!(stats.restock_insight(), "3 items need restocking");
        assert_eq!(format_amount(stats.net()), "$-19.75");
        assert!(!stats.is_net_positive());
        assert_eq!(
            ReportStats::default().restock_insight(),
            "All items are adequately stocked"
        );
        assert!(!ReportStats::default().is_net_positive());
    }

    #[tokio::test]
    async fn empty_database_reports_zero_values() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = ReportsPage::default();
        page.load(&db, &notifier).await;
        assert_eq!(page.stats, ReportStats::default());
        assert!(page.render().contains("Net $0.00"));
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn totals_cover_all_orders() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut purchases = PurchaseOrdersPage::default();
        for (number, amount) in [("PO-1", "100.50"), ("PO-2", "49.50")] {
            purchases.form = PurchaseOrderForm {
                order_number: number.to_owned(),
                vendor_id: "1".to_owned(),
                total_amount: amount.to_owned(),
                ..PurchaseOrderForm::default()
            };
            assert!(purchases.submit(&db, &notifier).await);
        }
        let mut sales = SalesOrdersPage::default();
        sales.form = SalesOrderForm {
            order_number: "SO-1".to_owned(),
            total_amount: "400".to_owned(),
            ..SalesOrderForm::default()
        };
        assert!(sales.submit(&db, &notifier).await);

        let mut page = ReportsPage::default();
        page.load(&db, &notifier).await;

        assert_eq!(page.stats.total_purchase_orders, 2);
        assert_eq!(page.stats.total_sales_orders, 1);
        assert_eq!(format_amount(page.stats.total_purchase_value), "$150.00");
        assert_eq!(format_amount(page.stats.net()), "$250.00");
        assert!(page.stats.is_net_positive());
        assert!(page.render().contains("All items are adequately stocked"));
    }

    #[tokio::test]
    async fn failed_load_notifies_once() {
        let db = memory_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = ReportsPage::default();
        page.load(&db, &notifier).await;
        assert_eq!(page.stats, ReportStats::default());
        assert_eq!(
            notifier.all(),
            vec![Notification::error("Failed to load report data")]
        );
    }
}
