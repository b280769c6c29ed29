//! # Login and Session Roles
//!
//! Both front ends authenticate the same way: look up the credential
//! row, compare the password, then resolve the session role. The login
//! id `chirag` is the store administrator; every other credential must
//! map to a customer record.
//!
//! Passwords are compared in clear text to match the stored credential
//! format (see the authentication repository).

use thiserror::Error;
use tracing::{debug, info, warn};

use bookstore_core::ADMIN_LOGIN_ID;
use bookstore_db::{Database, DbError};

/// Who the authenticated session belongs to. Decides which menu or
/// dashboard the front end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionContext {
    /// Full access: inventory, people, reports.
    Admin,
    /// Storefront access for one customer.
    Customer { cust_id: i64 },
}

impl SessionContext {
    pub fn is_admin(&self) -> bool {
        matches!(self, SessionContext::Admin)
    }
}

/// Login failures. `InvalidCredentials` deliberately does not say
/// whether the login id or the password was wrong.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("invalid login id or password")]
    InvalidCredentials,

    #[error("no customer record is linked to login id '{0}'")]
    CustomerRecordMissing(String),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Checks a login id and password against stored credentials and
/// resolves the session role.
pub async fn login(
    db: &Database,
    login_id: &str,
    password: &str,
) -> Result<SessionContext, LoginError> {
    let creds = match db.credentials().find(login_id).await? {
        Some(creds) => creds,
        None => {
            debug!(login_id, "Login rejected: unknown login id");
            return Err(LoginError::InvalidCredentials);
        }
    };

    if creds.password != password {
        debug!(login_id, "Login rejected: password mismatch");
        return Err(LoginError::InvalidCredentials);
    }

    if login_id == ADMIN_LOGIN_ID {
        info!(login_id, "Admin login");
        return Ok(SessionContext::Admin);
    }

    match db.customers().find_by_login(login_id).await? {
        Some(customer) => {
            info!(login_id, cust_id = customer.cust_id, "Customer login");
            Ok(SessionContext::Customer {
                cust_id: customer.cust_id,
            })
        }
        None => {
            // Credential exists but the customer row was deleted (or
            // never created): the account cannot be routed anywhere.
            warn!(login_id, "Credential has no customer record");
            Err(LoginError::CustomerRecordMissing(login_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::Credentials;
    use bookstore_db::{seed, Database, DbConfig};

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed_if_empty(db.pool()).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_admin_login() {
        let db = seeded_db().await;
        let ctx = login(&db, "chirag", "admin").await.unwrap();
        assert_eq!(ctx, SessionContext::Admin);
    }

    #[tokio::test]
    async fn test_customer_login_resolves_customer_id() {
        let db = seeded_db().await;
        let ctx = login(&db, "prachi", "1234").await.unwrap();
        assert_eq!(ctx, SessionContext::Customer { cust_id: 2 });
        assert!(!ctx.is_admin());
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let db = seeded_db().await;
        let err = login(&db, "prachi", "wrong").await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_login_id_is_rejected() {
        let db = seeded_db().await;
        let err = login(&db, "nobody", "1234").await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_credential_without_customer_record() {
        let db = seeded_db().await;
        db.credentials()
            .add(&Credentials {
                login_id: "ghost".to_string(),
                password: "1234".to_string(),
            })
            .await
            .unwrap();

        let err = login(&db, "ghost", "1234").await.unwrap_err();
        assert!(matches!(err, LoginError::CustomerRecordMissing(id) if id == "ghost"));
    }
}
