use crate::data::models::money::Money;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = menu_items)]
#[diesel(primary_key(menu_item_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MenuItem {
    pub menu_item_id: i32,
    pub name: String,
    pub price: Money,
    pub category: String,
    pub description: String,
    pub available: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem<'a> {
    pub name: &'a str,
    pub price: Money,
    pub category: &'a str,
    pub description: &'a str,
    pub available: bool,
}

/// Partial update: `None` fields keep their stored value.
#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = menu_items)]
pub struct UpdateMenuItem<'a> {
    pub name: Option<&'a str>,
    pub price: Option<Money>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub available: Option<bool>,
    pub updated_at: chrono::NaiveDateTime,
}
