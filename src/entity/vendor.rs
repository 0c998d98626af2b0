use chrono::Local;
use fakeit::{address, company, contact, name};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        let create_at = Local::now().naive_local();
        Self {
            id: NotSet,
            name: NotSet,
            email: Set(None),
            phone: Set(None),
            address: Set(None),
            contact_person: Set(None),
            created_at: Set(create_at),
            updated_at: Set(create_at),
        }
    }

    pub fn rand_fake_new() -> Self {
        let mut active = Self::new();
        active.name = Set(company::company());
        active.email = Set(Some(contact::email()));
        active.phone = Set(Some(contact::phone_formatted()));
        active.address = Set(Some(address::street()));
        active.contact_person = Set(Some(name::full()));
        active
    }
}
