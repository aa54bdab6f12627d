use crate::data::models::account::Account;
use crate::security::errors::AuthError;

/// Admin-only operations call this before touching any data.
pub fn require_admin(account: &Account) -> Result<(), AuthError> {
    if account.is_admin {
        Ok(())
    } else {
        tracing::warn!(
            account_id = account.account_id,
            username = %account.username,
            "Admin access denied"
        );
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(is_admin: bool) -> Account {
        Account {
            account_id: 1,
            username: "someone".into(),
            email: "someone@example.com".into(),
            password_hash: String::new(),
            is_admin,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn only_admins_pass() {
        assert_eq!(require_admin(&account(true)), Ok(()));
        assert_eq!(require_admin(&account(false)), Err(AuthError::Forbidden));
    }
}
