use chrono::Local;
use fakeit::{hipster, unique};
use rand::{thread_rng, Rng};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

pub const DEFAULT_UNIT: &str = "pcs";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub sku: String,
    pub description: Option<String>,
    pub unit: String,
    pub minimum_stock: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::stock_level::Entity")]
    StockLevel,
}

impl Related<super::stock_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        let create_at = Local::now().naive_local();
        Self {
            id: NotSet,
            name: NotSet,
            sku: NotSet,
            description: Set(None),
            unit: Set(DEFAULT_UNIT.to_owned()),
            minimum_stock: Set(0),
            created_at: Set(create_at),
            updated_at: Set(create_at),
        }
    }

    pub fn rand_fake_new() -> Self {
        let mut rng = thread_rng();
        let mut active = Self::new();
        active.name = Set(hipster::sentence(3));
        active.sku = Set(format!("SKU-{}", unique::uuid_v4()));
        active.description = Set(Some(hipster::sentence(12)));
        active.minimum_stock = Set(rng.gen_range(0..50));
        active
    }
}
