use chrono::Local;
use fakeit::{address, contact, name};
use rand::{thread_rng, Rng};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

pub const DEFAULT_STATUS: &str = "pending";
pub const FAKE_STATUSES: [&str; 5] = ["pending", "processing", "shipped", "delivered", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_number: String,
    pub sales_channel_id: Option<i32>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<String>,
    pub order_date: Date,
    pub status: String,
    pub total_amount: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            id: NotSet,
            order_number: NotSet,
            sales_channel_id: Set(None),
            customer_name: Set(None),
            customer_email: Set(None),
            shipping_address: Set(None),
            order_date: Set(now.date_naive()),
            status: Set(DEFAULT_STATUS.to_owned()),
            total_amount: Set(0.0),
            created_at: Set(now.naive_local()),
        }
    }

    pub fn rand_fake_new() -> Self {
        let mut rng = thread_rng();
        let mut active = Self::new();
        active.order_number = Set(format!("SO-{:06}", rng.gen_range(0..1_000_000)));
        active.customer_name = Set(Some(name::full()));
        active.customer_email = Set(Some(contact::email()));
        active.shipping_address = Set(Some(address::street()));
        active.status = Set(FAKE_STATUSES[rng.gen_range(0..FAKE_STATUSES.len())].to_owned());
        active.total_amount = Set(f64::from(rng.gen_range(100..500_000)) / 100.0);
        active
    }
}
