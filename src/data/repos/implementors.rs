pub mod account_repo;
pub mod catalog_repo;
pub mod order_repo;

use crate::data::database::DbConnection;
use diesel::result;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

/// Id generated by the most recent insert on this connection.
pub(crate) async fn last_insert_rowid(conn: &mut DbConnection) -> Result<i32, result::Error> {
    diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
        .get_result(conn)
        .await
}
