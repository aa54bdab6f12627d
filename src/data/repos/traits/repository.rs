use async_trait::async_trait;
use diesel::result;

/// Create/read/update surface shared by the entity repositories.
///
/// Lookups that find nothing return `Ok(None)` rather than
/// `Err(result::Error::NotFound)`; `get_all` returns an empty vector.
#[async_trait]
pub trait Repository {
    type Id;
    type Item;
    type NewItem<'a>;
    type UpdateForm<'a>;

    async fn get_all(&self) -> Result<Vec<Self::Item>, result::Error>;
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;
    /// Inserts the row and returns its generated id.
    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error>;
    /// Applies the changeset; returns the number of rows touched (0 for an unknown id).
    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<usize, result::Error>;
}
