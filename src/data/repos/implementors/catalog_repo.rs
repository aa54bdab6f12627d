use crate::data::database::Database;
use crate::data::models::menu_item::{MenuItem, NewMenuItem, UpdateMenuItem};
use crate::data::repos::implementors::last_insert_rowid;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

/// Menu items. Every listing is in creation order (ascending id).
pub struct CatalogRepo {
    db: Database,
}

impl CatalogRepo {
    pub fn new(db: Database) -> Self {
        CatalogRepo { db }
    }

    /// Items that can currently be ordered.
    pub async fn get_available(&self) -> Result<Vec<MenuItem>, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{available, menu_item_id, menu_items};

        let mut conn = self.db.get_connection().await?;

        menu_items
            .filter(available.eq(true))
            .order(menu_item_id.asc())
            .select(MenuItem::as_select())
            .load(&mut conn)
            .await
    }

    pub async fn get_by_name(&self, name_query: &str) -> Result<Option<MenuItem>, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{menu_item_id, menu_items, name};

        let mut conn = self.db.get_connection().await?;

        menu_items
            .filter(name.eq(name_query))
            .order(menu_item_id.asc())
            .select(MenuItem::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Loads the given ids in one query. Unknown ids are simply absent.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<MenuItem>, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{menu_item_id, menu_items};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.get_connection().await?;

        menu_items
            .filter(menu_item_id.eq_any(ids))
            .order(menu_item_id.asc())
            .select(MenuItem::as_select())
            .load(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for CatalogRepo {
    type Id = i32;
    type Item = MenuItem;
    type NewItem<'a> = NewMenuItem<'a>;
    type UpdateForm<'a> = UpdateMenuItem<'a>;

    async fn get_all(&self) -> Result<Vec<Self::Item>, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{menu_item_id, menu_items};

        let mut conn = self.db.get_connection().await?;

        menu_items
            .order(menu_item_id.asc())
            .select(MenuItem::as_select())
            .load(&mut conn)
            .await
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{menu_item_id, menu_items};

        let mut conn = self.db.get_connection().await?;

        menu_items
            .filter(menu_item_id.eq(id))
            .select(MenuItem::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::menu_items::dsl::menu_items;

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(menu_items)
                    .values(&item)
                    .execute(connection)
                    .await?;

                last_insert_rowid(connection).await
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<usize, result::Error> {
        use crate::data::models::schema::menu_items::dsl::{menu_item_id, menu_items};

        let mut conn = self.db.get_connection().await?;

        diesel::update(menu_items.filter(menu_item_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await
    }
}
