use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use super::{product, stock_level};

/// One row of the stock-balance view: a product joined with its quantity on
/// hand. Products without a recorded stock level count as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockBalance {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub unit: String,
    pub minimum_stock: i32,
    pub current_stock: i32,
}

impl StockBalance {
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.current_stock, self.minimum_stock)
    }
}

pub fn is_low_stock(current_stock: i32, minimum_stock: i32) -> bool {
    current_stock <= minimum_stock
}

impl From<(product::Model, Option<stock_level::Model>)> for StockBalance {
    fn from((product, level): (product::Model, Option<stock_level::Model>)) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            unit: product.unit,
            minimum_stock: product.minimum_stock,
            current_stock: level.map(|level| level.quantity).unwrap_or(0),
        }
    }
}

pub async fn fetch_all<C: ConnectionTrait>(db: &C) -> Result<Vec<StockBalance>, DbErr> {
    let rows = product::Entity::find()
        .find_also_related(stock_level::Entity)
        .order_by_asc(product::Column::Name)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(StockBalance::from).collect())
}
