use crate::data::database::Database;
use crate::data::models::account::{Account, NewAccount, UpdateAccount};
use crate::data::repos::implementors::last_insert_rowid;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct AccountRepo {
    db: Database,
}

impl AccountRepo {
    pub fn new(db: Database) -> Self {
        AccountRepo { db }
    }

    pub async fn get_by_username(
        &self,
        username_query: &str,
    ) -> Result<Option<Account>, result::Error> {
        use crate::data::models::schema::accounts::dsl::{accounts, username};

        let mut conn = self.db.get_connection().await?;

        accounts
            .filter(username.eq(username_query))
            .select(Account::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn get_by_email(&self, email_query: &str) -> Result<Option<Account>, result::Error> {
        use crate::data::models::schema::accounts::dsl::{accounts, email};

        let mut conn = self.db.get_connection().await?;

        accounts
            .filter(email.eq(email_query))
            .select(Account::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// All administrator accounts, oldest first.
    pub async fn get_admins(&self) -> Result<Vec<Account>, result::Error> {
        use crate::data::models::schema::accounts::dsl::{account_id, accounts, is_admin};

        let mut conn = self.db.get_connection().await?;

        accounts
            .filter(is_admin.eq(true))
            .order(account_id.asc())
            .select(Account::as_select())
            .load(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for AccountRepo {
    type Id = i32;
    type Item = Account;
    type NewItem<'a> = NewAccount<'a>;
    type UpdateForm<'a> = UpdateAccount;

    async fn get_all(&self) -> Result<Vec<Self::Item>, result::Error> {
        use crate::data::models::schema::accounts::dsl::{account_id, accounts};

        let mut conn = self.db.get_connection().await?;

        accounts
            .order(account_id.asc())
            .select(Account::as_select())
            .load(&mut conn)
            .await
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::accounts::dsl::{account_id, accounts};

        let mut conn = self.db.get_connection().await?;

        accounts
            .filter(account_id.eq(id))
            .select(Account::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::accounts::dsl::accounts;

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(accounts)
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
        use crate::data::models::schema::accounts::dsl::{account_id, accounts};

        let mut conn = self.db.get_connection().await?;

        diesel::update(accounts.filter(account_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await
    }
}
