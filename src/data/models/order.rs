use crate::data::models::account::Account;
use crate::data::models::money::Money;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(Account, foreign_key = account_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    pub order_id: i32,
    pub account_id: i32,
    pub total_amount: Money,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub account_id: i32,
    pub total_amount: Money,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct UpdateOrder<'a> {
    pub status: Option<&'a str>,
    pub updated_at: chrono::NaiveDateTime,
}
