//! Auth use-case tests over an in-memory repository.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::token::TokenSigner;

use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::refresh::RefreshTokenUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::domain::entity::{NewUser, RefreshToken, User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository double
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryAuthStore {
    users: Arc<Mutex<Vec<User>>>,
    tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

impl InMemoryAuthStore {
    fn token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    fn backdate_token(&self, token: &str, expires: DateTime<Utc>) {
        let mut tokens = self.tokens.lock().unwrap();
        let row = tokens.iter_mut().find(|t| t.token == token).unwrap();
        row.expires = expires;
    }
}

impl UserRepository for InMemoryAuthStore {
    async fn create(&self, user: &NewUser) -> AuthResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let created = User {
            id: users.len() as i64 + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(Some(created))
    }

    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

impl RefreshTokenRepository for InMemoryAuthStore {
    async fn create(
        &self,
        token: &str,
        user_id: i64,
        expires: DateTime<Utc>,
    ) -> AuthResult<RefreshToken> {
        let mut tokens = self.tokens.lock().unwrap();
        let created = RefreshToken {
            id: tokens.len() as i64 + 1,
            token: token.to_string(),
            user_id,
            expires,
            created_at: Utc::now(),
        };
        tokens.push(created.clone());
        Ok(created)
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<RefreshToken>> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token == token)
            .cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AuthResult<()> {
        self.tokens.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> AuthResult<()> {
        self.tokens.lock().unwrap().retain(|t| t.token != token);
        Ok(())
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        let now = Utc::now();
        tokens.retain(|t| t.expires >= now);
        Ok((before - tokens.len()) as u64)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_signer() -> Arc<TokenSigner> {
    Arc::new(TokenSigner::new(
        "test-access-secret",
        "test-refresh-secret",
        Duration::from_secs(3600),
        Duration::from_secs(7 * 24 * 3600),
    ))
}

fn register_use_case(
    store: &InMemoryAuthStore,
    signer: &Arc<TokenSigner>,
) -> RegisterUseCase<InMemoryAuthStore, InMemoryAuthStore> {
    RegisterUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::clone(signer),
    )
}

fn login_use_case(
    store: &InMemoryAuthStore,
    signer: &Arc<TokenSigner>,
) -> LoginUseCase<InMemoryAuthStore, InMemoryAuthStore> {
    LoginUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::clone(signer),
    )
}

fn refresh_use_case(
    store: &InMemoryAuthStore,
    signer: &Arc<TokenSigner>,
) -> RefreshTokenUseCase<InMemoryAuthStore, InMemoryAuthStore> {
    RefreshTokenUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::clone(signer),
    )
}

fn sample_registration() -> RegisterInput {
    RegisterInput {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "Sup3rSecret!".to_string(),
    }
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn register_returns_user_and_token_pair() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let output = register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    assert_eq!(output.user.email, "ada@example.com");
    assert_eq!(output.user.role, "user");
    assert!(!output.access_token.is_empty());
    assert!(!output.refresh_token.is_empty());
    assert_eq!(store.token_count(), 1);

    // Stored password is an Argon2 PHC string, never the plaintext
    let stored = store.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert!(stored.password.starts_with("$argon2"));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();
    let use_case = register_use_case(&store, &signer);

    use_case.execute(sample_registration()).await.unwrap();
    let err = use_case.execute(sample_registration()).await.unwrap_err();

    assert!(matches!(err, AuthError::UserAlreadyExists));
    assert_eq!(err.to_string(), "User already exists");
}

#[tokio::test]
async fn access_token_carries_identity_claims() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let output = register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    let claims = signer.verify_access(&output.access_token).unwrap();
    assert_eq!(claims.id, output.user.id);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.role, "user");
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_succeeds_with_correct_password() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    let output = login_use_case(&store, &signer)
        .execute(LoginInput {
            email: "ada@example.com".to_string(),
            password: "Sup3rSecret!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.email, "ada@example.com");
    // Login stores a second refresh token alongside the registration one
    assert_eq!(store.token_count(), 2);
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    let unknown_email = login_use_case(&store, &signer)
        .execute(LoginInput {
            email: "nobody@example.com".to_string(),
            password: "Sup3rSecret!".to_string(),
        })
        .await
        .unwrap_err();

    let wrong_password = login_use_case(&store, &signer)
        .execute(LoginInput {
            email: "ada@example.com".to_string(),
            password: "WrongPass1!".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(unknown_email.to_string(), "Invalid email or password");
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

// ============================================================================
// Refresh
// ============================================================================

#[tokio::test]
async fn refresh_issues_new_access_token_without_rotating() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let output = register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    let access_token = refresh_use_case(&store, &signer)
        .execute(&output.refresh_token)
        .await
        .unwrap();

    let claims = signer.verify_access(&access_token).unwrap();
    assert_eq!(claims.id, output.user.id);

    // The refresh token row survives and can be used again
    assert_eq!(store.token_count(), 1);
    assert!(
        refresh_use_case(&store, &signer)
            .execute(&output.refresh_token)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn refresh_rejects_unknown_token() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let err = refresh_use_case(&store, &signer)
        .execute("never-issued")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidRefreshToken));
    assert_eq!(err.to_string(), "Invalid refresh token");
}

#[tokio::test]
async fn refresh_deletes_expired_token_row() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let output = register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    store.backdate_token(
        &output.refresh_token,
        Utc::now() - chrono::Duration::hours(1),
    );

    let err = refresh_use_case(&store, &signer)
        .execute(&output.refresh_token)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::RefreshTokenExpired));
    assert_eq!(err.to_string(), "Refresh token expired");
    assert_eq!(store.token_count(), 0);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn logout_removes_token_and_is_idempotent() {
    let store = InMemoryAuthStore::default();
    let signer = test_signer();

    let output = register_use_case(&store, &signer)
        .execute(sample_registration())
        .await
        .unwrap();

    let use_case = LogoutUseCase::new(Arc::new(store.clone()));
    use_case.execute(&output.refresh_token).await.unwrap();
    assert_eq!(store.token_count(), 0);

    // Second logout with the same token still succeeds
    use_case.execute(&output.refresh_token).await.unwrap();

    // The deleted token can no longer be refreshed
    let err = refresh_use_case(&store, &signer)
        .execute(&output.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));
}
