//! Registration validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! email format, then required fields, then email uniqueness. A missing
//! email is therefore reported as an invalid format rather than a missing
//! field.

use std::sync::LazyLock;

use entities::User;
use regex::Regex;
use serde::Deserialize;
use user_store::{UserStore, UserStoreError, UserStoreResult};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex pattern is valid")
});

/// Candidate registration as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Why a registration was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("All fields are required")]
    MissingFields,
    #[error("Email already exists")]
    EmailAlreadyExists,
}

/// Outcome of validating a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// All checks passed; the user may be stored.
    Accepted(User),
    /// The registration was refused.
    Rejected(RejectReason),
}

/// Returns true if `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Runs the format and required-field checks, which need no store access.
pub fn check_fields(request: &RegisterRequest) -> Result<User, RejectReason> {
    if !request.email.as_deref().is_some_and(is_valid_email) {
        return Err(RejectReason::InvalidEmailFormat);
    }

    match (
        non_empty(&request.name),
        non_empty(&request.email),
        non_empty(&request.password),
    ) {
        (Some(name), Some(email), Some(password)) => Ok(User::new(name, email, password)),
        _ => Err(RejectReason::MissingFields),
    }
}

/// Validates a registration against the store without modifying it.
pub async fn validate<S: UserStore>(
    store: &S,
    request: &RegisterRequest,
) -> UserStoreResult<Validation> {
    let user = match check_fields(request) {
        Ok(user) => user,
        Err(reason) => return Ok(Validation::Rejected(reason)),
    };

    if store.exists(&user.email).await? {
        return Ok(Validation::Rejected(RejectReason::EmailAlreadyExists));
    }

    Ok(Validation::Accepted(user))
}

/// Validates a registration and stores the user when it is accepted.
///
/// The final insert re-checks uniqueness under the store's lock, so a
/// concurrent registration for the same email is rejected rather than
/// duplicated.
pub async fn register<S: UserStore>(
    store: &S,
    request: RegisterRequest,
) -> UserStoreResult<Validation> {
    let user = match validate(store, &request).await? {
        Validation::Accepted(user) => user,
        Validation::Rejected(reason) => {
            tracing::debug!(%reason, "Registration rejected");
            return Ok(Validation::Rejected(reason));
        }
    };

    match store.append_if_absent(user.clone()).await {
        Ok(()) => {
            tracing::info!(email = %user.email, "User registered");
            Ok(Validation::Accepted(user))
        }
        Err(UserStoreError::AlreadyExists { email }) => {
            tracing::debug!(%email, "Registration lost race for email");
            Ok(Validation::Rejected(RejectReason::EmailAlreadyExists))
        }
    }
}

#[cfg(test)]
mod tests {
    use user_store::MemoryUserStore;

    use super::*;

    fn request(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b.c.d"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_malformed_email_wins_over_missing_fields() {
        for email in [None, Some(""), Some("not-an-email"), Some("a@bcom")] {
            assert_eq!(
                check_fields(&request(None, email, None)),
                Err(RejectReason::InvalidEmailFormat)
            );
            assert_eq!(
                check_fields(&request(Some("Al"), email, Some("x"))),
                Err(RejectReason::InvalidEmailFormat)
            );
        }
    }

    #[test]
    fn test_missing_name_or_password() {
        assert_eq!(
            check_fields(&request(None, Some("a@b.com"), Some("x"))),
            Err(RejectReason::MissingFields)
        );
        assert_eq!(
            check_fields(&request(Some("Al"), Some("a@b.com"), None)),
            Err(RejectReason::MissingFields)
        );
        assert_eq!(
            check_fields(&request(Some(""), Some("a@b.com"), Some("x"))),
            Err(RejectReason::MissingFields)
        );
        assert_eq!(
            check_fields(&request(Some("Al"), Some("a@b.com"), Some(""))),
            Err(RejectReason::MissingFields)
        );
    }

    #[test]
    fn test_reject_reason_messages() {
        assert_eq!(RejectReason::InvalidEmailFormat.to_string(), "Invalid email format");
        assert_eq!(RejectReason::MissingFields.to_string(), "All fields are required");
        assert_eq!(RejectReason::EmailAlreadyExists.to_string(), "Email already exists");
    }

    #[tokio::test]
    async fn test_validate_does_not_store() {
        let store = MemoryUserStore::new();
        let result = validate(&store, &request(Some("Al"), Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        assert_eq!(result, Validation::Accepted(User::new("Al", "a@b.com", "x")));
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_stores_accepted_user() {
        let store = MemoryUserStore::new();
        let result = register(&store, request(Some("Al"), Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        assert!(matches!(result, Validation::Accepted(_)));
        assert_eq!(store.list().await.unwrap(), vec![User::new("Al", "a@b.com", "x")]);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_even_with_other_fields() {
        let store = MemoryUserStore::new();
        register(&store, request(Some("Al"), Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        let result = register(&store, request(Some("Bo"), Some("a@b.com"), Some("y")))
            .await
            .unwrap();

        assert_eq!(result, Validation::Rejected(RejectReason::EmailAlreadyExists));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_checked_before_uniqueness() {
        let store = MemoryUserStore::new();
        register(&store, request(Some("Al"), Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        let result = register(&store, request(None, Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        assert_eq!(result, Validation::Rejected(RejectReason::MissingFields));
    }

    #[tokio::test]
    async fn test_email_comparison_is_case_sensitive() {
        let store = MemoryUserStore::new();
        register(&store, request(Some("Al"), Some("a@b.com"), Some("x")))
            .await
            .unwrap();

        let result = register(&store, request(Some("Al"), Some("A@b.com"), Some("x")))
            .await
            .unwrap();

        assert!(matches!(result, Validation::Accepted(_)));
        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_store_one_user() {
        let store = MemoryUserStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let name = format!("user{i}");
                    register(&store, request(Some(name.as_str()), Some("same@b.com"), Some("x")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Validation::Accepted(_) => accepted += 1,
                Validation::Rejected(reason) => {
                    assert_eq!(reason, RejectReason::EmailAlreadyExists)
                }
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(store.len().await.unwrap(), 1);
    }
}
