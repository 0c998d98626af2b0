use chrono::Local;
use rand::{thread_rng, Rng};
use sea_orm::{entity::prelude::*, Set};

/// Quantity on hand for one product.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_levels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub quantity: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(product_id: i32, quantity: i32) -> Self {
        Self {
            product_id: Set(product_id),
            quantity: Set(quantity),
            updated_at: Set(Local::now().naive_local()),
        }
    }

    pub fn rand_fake_new(product_id: i32) -> Self {
        Self::new(product_id, thread_rng().gen_range(0..200))
    }
}
