use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use super::report_failure;
use crate::entity::{product, purchase_order, sales_order, stock_balance};
use crate::notify::Notifier;
use crate::render::{self, Render};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_purchases: u64,
    pub total_sales: u64,
    pub low_stock_items: u64,
}

#[derive(Debug)]
pub struct DashboardPage {
    pub stats: DashboardStats,
    pub loading: bool,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self {
            stats: DashboardStats::default(),
            loading: true,
        }
    }
}

async fn fetch_stats(db: &DatabaseConnection) -> Result<DashboardStats, DbErr> {
    let (total_products, total_purchases, total_sales, balance) = futures::try_join!(
        product::Entity::find().count(db),
        purchase_order::Entity::find().count(db),
        sales_order::Entity::find().count(db),
        stock_balance::fetch_all(db),
    )?;
    Ok(DashboardStats {
        total_products: total_products as u64,
        total_purchases: total_purchases as u64,
        total_sales: total_sales as u64,
        low_stock_items: balance.iter().filter(|item| item.is_low_stock()).count() as u64,
    })
}

impl DashboardPage {
    /// Issues all dashboard queries at once; any failure keeps the previous
    /// stats.
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match fetch_stats(db).await {
            Ok(stats) => self.stats = stats,
            Err(err) => report_failure(
                notifier,
                "loading dashboard stats",
                "Failed to load dashboard statistics",
                &err,
            ),
        }
        self.loading = false;
    }
}

impl Render for DashboardPage {
    fn render(&self) -> String {
        let mut out = render::heading(
            "Dashboard",
            "Overview of your stock and order management system",
        );
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        let stats = &self.stats;
        render::card(
            &mut out,
            "Total Products",
            &stats.total_products.to_string(),
            "Active products in inventory",
        );
        render::card(
            &mut out,
            "Purchase Orders",
            &stats.total_purchases.to_string(),
            "Total purchase orders",
        );
        render::card(
            &mut out,
            "Sales Orders",
            &stats.total_sales.to_string(),
            "Total sales orders",
        );
        render::card(
            &mut out,
            "Low Stock Alerts",
            &stats.low_stock_items.to_string(),
            "Items below minimum stock",
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{testing::RecordingNotifier, Notification};
    use crate::page::products::{ProductForm, ProductsPage};
    use crate::page::sales_orders::{SalesOrderForm, SalesOrdersPage};
    use crate::page::stock::StockPage;
    use crate::page::testing::{memory_db, prepared_db};

    #[tokio::test]
    async fn counts_rows_and_low_stock() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut products = ProductsPage::default();
        for (sku, minimum) in [("A", "5"), ("B", "0"), ("C", "10")] {
            products.form = ProductForm {
                name: format!("Part {}", sku),
                sku: sku.to_owned(),
                minimum_stock: minimum.to_owned(),
                ..ProductForm::default()
            };
            assert!(products.submit(&db, &notifier).await);
        }
        let mut stock = StockPage::default();
        assert!(stock.adjust(&db, &notifier, "A", 6).await);
        assert!(stock.adjust(&db, &notifier, "B", 0).await);
        assert!(stock.adjust(&db, &notifier, "C", 10).await);
        let mut sales = SalesOrdersPage::default();
        sales.form = SalesOrderForm {
            order_number: "SO-1".to_owned(),
            total_amount: "12".to_owned(),
            ..SalesOrderForm::default()
        };
        assert!(sales.submit(&db, &notifier).await);

        let mut page = DashboardPage::default();
        page.load(&db, &notifier).await;

        assert_eq!(
            page.stats,
            DashboardStats {
                total_products: 3,
                total_purchases: 0,
                total_sales: 1,
                low_stock_items: 2,
            }
        );
        assert!(notifier.errors().is_empty());
        assert!(page.render().contains("Low Stock Alerts"));
    }

    #[tokio::test]
    async fn failed_load_notifies_once_and_keeps_zeroes() {
        let db = memory_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = DashboardPage::default();
        page.load(&db, &notifier).await;
        assert_eq!(page.stats, DashboardStats::default());
        assert!(!page.loading);
        assert_eq!(
            notifier.all(),
            vec![Notification::error("Failed to load dashboard statistics")]
        );
    }
}
