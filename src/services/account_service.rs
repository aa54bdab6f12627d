use crate::data::database::Database;
use crate::data::models::account::{Account, NewAccount};
use crate::data::repos::implementors::account_repo::AccountRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::PasswordService;
use crate::services::errors::AccountServiceError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Fields submitted on the registration form.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: Option<&'a str>,
}

pub struct AccountService {
    accounts: AccountRepo,
    passwords: PasswordService,
}

impl AccountService {
    pub fn new(db: Database) -> Self {
        AccountService {
            accounts: AccountRepo::new(db),
            passwords: PasswordService::new(),
        }
    }

    /// Creates a regular (non-admin) account and returns its id.
    pub async fn register(&self, form: Registration<'_>) -> Result<i32, AccountServiceError> {
        let username = form.username.trim();
        let email = form.email.trim();
        validate_registration(username, email, form.password, form.password_confirmation)?;

        if self
            .accounts
            .get_by_username(username)
            .await
            .map_err(db_error)?
            .is_some()
        {
            return Err(AccountServiceError::DuplicateUsername);
        }

        if self
            .accounts
            .get_by_email(email)
            .await
            .map_err(db_error)?
            .is_some()
        {
            return Err(AccountServiceError::DuplicateEmail);
        }

        let password_hash = self
            .passwords
            .hash_password(form.password)
            .await
            .map_err(|_| AccountServiceError::HashingError)?;

        let new_account = NewAccount {
            username,
            email,
            password_hash: &password_hash,
            is_admin: false,
        };

        let account_id = self.accounts.add(new_account).await.map_err(|e| match e {
            // Lost a race with a concurrent registration.
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
                if info.message().contains("email") =>
            {
                AccountServiceError::DuplicateEmail
            }
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AccountServiceError::DuplicateUsername
            }
            other => db_error(other),
        })?;

        tracing::info!(account_id, username, "Account registered");

        Ok(account_id)
    }

    /// Unknown usernames and wrong passwords fail identically.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, AccountServiceError> {
        let Some(account) = self
            .accounts
            .get_by_username(username.trim())
            .await
            .map_err(db_error)?
        else {
            tracing::warn!(username, "Login rejected");
            return Err(AccountServiceError::InvalidCredentials);
        };

        match self
            .passwords
            .verify_password(password, &account.password_hash)
            .await
        {
            Ok(true) => Ok(account),
            Ok(false) => {
                tracing::warn!(username, "Login rejected");
                Err(AccountServiceError::InvalidCredentials)
            }
            Err(e) => {
                tracing::error!("Error verifying password for {}: {}", username, e);
                Err(AccountServiceError::InvalidCredentials)
            }
        }
    }

    pub async fn get_account(&self, account_id: i32) -> Result<Option<Account>, AccountServiceError> {
        self.accounts.get_by_id(account_id).await.map_err(db_error)
    }
}

fn db_error(e: DieselError) -> AccountServiceError {
    tracing::error!("Account store error: {}", e);
    AccountServiceError::DatabaseError
}

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    password_confirmation: Option<&str>,
) -> Result<(), AccountServiceError> {
    if username.is_empty() {
        return Err(AccountServiceError::InvalidInput("Username is required.".into()));
    }
    if email.is_empty() {
        return Err(AccountServiceError::InvalidInput("Email is required.".into()));
    }
    if password.is_empty() {
        return Err(AccountServiceError::InvalidInput("Password is required.".into()));
    }
    if !looks_like_email(email) {
        return Err(AccountServiceError::InvalidInput("Invalid email address.".into()));
    }
    if password_confirmation.is_some_and(|confirmation| confirmation != password) {
        return Err(AccountServiceError::InvalidInput(
            "Field must be equal to password.".into(),
        ));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("newuser@example.com"));
        assert!(looks_like_email("a.b@mail.example.org"));
        assert!(!looks_like_email("invalid-email"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@localhost"));
        assert!(!looks_like_email("user@@example.com"));
        assert!(!looks_like_email("us er@example.com"));
    }

    #[test]
    fn registration_rules() {
        assert!(validate_registration("u", "u@example.com", "pw", None).is_ok());
        assert!(validate_registration("u", "u@example.com", "pw", Some("pw")).is_ok());
        assert_eq!(
            validate_registration("u", "u@example.com", "pw", Some("other")),
            Err(AccountServiceError::InvalidInput(
                "Field must be equal to password.".into()
            ))
        );
        assert_eq!(
            validate_registration("u", "nope", "pw", None),
            Err(AccountServiceError::InvalidInput("Invalid email address.".into()))
        );
        assert!(matches!(
            validate_registration("", "u@example.com", "pw", None),
            Err(AccountServiceError::InvalidInput(_))
        ));
    }
}
