//! Main authentication service implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::notification::NotificationService;
use crate::services::token::TokenService;
use sf_shared::utils::validation::{is_valid_email, is_valid_password, mask_email};

use super::config::AuthServiceConfig;
use super::password::{generate_reset_token, hash_password, verify_password};

/// Authentication service for managing the complete account lifecycle
///
/// Per user, the password-reset state machine lives in the
/// `(reset_token, reset_token_expiry)` pair: both null means idle, both set
/// means a reset is pending. The pair is always written and cleared
/// together; a second forgot-password request overwrites it, so the latest
/// token wins.
pub struct AuthService<U, N>
where
    U: UserRepository,
    N: NotificationService,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Outbound email seam
    notification_service: Arc<N>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, N> AuthService<U, N>
where
    U: UserRepository,
    N: NotificationService,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        notification_service: Arc<N>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            notification_service,
            token_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// Fails with `EmailAlreadyRegistered` on a duplicate email. The
    /// welcome email is best-effort: a delivery failure is logged and
    /// swallowed, the account still exists.
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<User> {
        let email = email.trim().to_lowercase();

        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        if !is_valid_password(password) {
            return Err(DomainError::Validation {
                message: "Password must be at least 8 characters".to_string(),
            });
        }

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = hash_password(password)?;
        let user = User::new(
            email.clone(),
            password_hash,
            first_name.to_string(),
            last_name.to_string(),
        );
        let user = self.user_repository.create(user).await?;

        if let Err(e) = self
            .notification_service
            .send_welcome_email(&user.email, &user.first_name)
            .await
        {
            warn!("Welcome email to {} failed: {}", mask_email(&user.email), e);
        }

        info!("Registered new user {}", mask_email(&user.email));
        Ok(user)
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password return the same
    /// `InvalidCredentials` error so callers cannot discover which emails
    /// are registered.
    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        let email = email.trim().to_lowercase();

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_token_pair(&user.email, user.role)?;
        info!("User {} authenticated", mask_email(&user.email));
        Ok(AuthResponse::from_token_pair(pair, &user))
    }

    /// Begin a password reset
    ///
    /// Always succeeds from the caller's point of view when the email is
    /// unknown, with no state change and no email, so the endpoint cannot
    /// be used to enumerate accounts. When the reset email cannot be
    /// delivered the error propagates and the user is rolled back to idle
    /// so no dangling pending state is left behind.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let email = email.trim().to_lowercase();

        let mut user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                info!("Password reset requested for unknown email");
                return Ok(());
            }
        };

        let token = generate_reset_token();
        user.begin_password_reset(
            token.clone(),
            Duration::minutes(self.config.reset_token_expiry_minutes),
        );
        let mut user = self.user_repository.update(user).await?;

        if let Err(e) = self
            .notification_service
            .send_password_reset_email(&user.email, &token)
            .await
        {
            warn!(
                "Reset email to {} failed, rolling back pending reset: {}",
                mask_email(&user.email),
                e
            );
            user.clear_password_reset();
            self.user_repository.update(user).await?;
            return Err(e);
        }

        info!("Password reset initiated for {}", mask_email(&email));
        Ok(())
    }

    /// Redeem a reset token and set a new password
    ///
    /// An expired token is treated as consumed: the pair is cleared before
    /// the error is returned, so the same token cannot be retried.
    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> DomainResult<()> {
        if !is_valid_password(new_password) {
            return Err(DomainError::Validation {
                message: "Password must be at least 8 characters".to_string(),
            });
        }

        let mut user = match self
            .user_repository
            .find_by_reset_token(reset_token)
            .await?
        {
            Some(user) => user,
            None => return Err(AuthError::InvalidResetToken.into()),
        };

        if user.reset_token_expired() {
            user.clear_password_reset();
            self.user_repository.update(user).await?;
            return Err(AuthError::ResetTokenExpired.into());
        }

        let password_hash = hash_password(new_password)?;
        user.set_password_hash(password_hash);
        user.clear_password_reset();
        self.user_repository.update(user).await?;

        info!("Password reset completed");
        Ok(())
    }

    /// Change the password of an authenticated user
    ///
    /// The email comes from a validated access token at the HTTP boundary,
    /// never from the request body.
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !is_valid_password(new_password) {
            return Err(DomainError::Validation {
                message: "Password must be at least 8 characters".to_string(),
            });
        }

        let mut user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(current_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = hash_password(new_password)?;
        user.set_password_hash(password_hash);
        self.user_repository.update(user).await?;

        info!("Password changed for {}", mask_email(email));
        Ok(())
    }

    /// Exchange a refresh token for a fresh access token
    ///
    /// The supplied refresh token is echoed back unrotated; a refresh
    /// window is bounded by the refresh token's own expiry.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;

        let user = match self.user_repository.find_by_email(&claims.sub).await? {
            Some(user) => user,
            None => return Err(AuthError::UserNotFound.into()),
        };

        let access_token = self.token_service.issue_access_token(&user.email, user.role)?;
        Ok(AuthResponse {
            access_token,
            refresh_token: refresh_token.to_string(),
            expires_in: self.token_service.access_token_expiry_seconds(),
            user_id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        })
    }

    /// Fetch the profile of an authenticated user
    pub async fn get_profile(&self, email: &str) -> DomainResult<UserProfile> {
        match self.user_repository.find_by_email(email).await? {
            Some(user) => Ok(UserProfile::from(&user)),
            None => Err(DomainError::NotFound {
                resource: "user".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::mock::MockUserRepository;
    use crate::services::notification::{MockNotificationService, SentEmailKind};
    use crate::services::token::TokenServiceConfig;

    type TestAuthService = AuthService<MockUserRepository, MockNotificationService>;

    struct Fixture {
        service: TestAuthService,
        users: Arc<MockUserRepository>,
        emails: Arc<MockNotificationService>,
        tokens: Arc<TokenService>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MockUserRepository::new());
        let emails = Arc::new(MockNotificationService::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        }));
        let service = AuthService::new(
            users.clone(),
            emails.clone(),
            tokens.clone(),
            AuthServiceConfig::default(),
        );
        Fixture {
            service,
            users,
            emails,
            tokens,
        }
    }

    async fn register(f: &Fixture, email: &str) -> User {
        f.service
            .register_user(email, "hunter22pass", "Alice", "Smith")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let f = fixture();
        let user = register(&f, "alice@example.com").await;

        assert_ne!(user.password_hash, "hunter22pass");
        assert!(verify_password("hunter22pass", &user.password_hash));
        assert_eq!(f.emails.sent_emails()[0].kind, SentEmailKind::Welcome);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        let err = f
            .service
            .register_user("alice@example.com", "hunter22pass", "Alice", "Smith")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailAlreadyRegistered)
        ));
    }

    #[tokio::test]
    async fn test_register_survives_welcome_email_failure() {
        let f = fixture();
        f.emails.set_failing(true);

        let user = register(&f, "alice@example.com").await;
        assert!(f
            .users
            .find_by_email(&user.email)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_authenticate_returns_valid_token_pair() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        let response = f
            .service
            .authenticate_user("alice@example.com", "hunter22pass")
            .await
            .unwrap();

        let claims = f.tokens.verify_access_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(f
            .tokens
            .verify_refresh_token(&response.refresh_token)
            .is_ok());
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        let unknown = f
            .service
            .authenticate_user("nobody@example.com", "hunter22pass")
            .await
            .unwrap_err();
        let wrong = f
            .service
            .authenticate_user("alice@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(
            unknown,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_email_is_silent() {
        let f = fixture();

        f.service.forgot_password("nobody@example.com").await.unwrap();
        assert_eq!(f.emails.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_forgot_password_sets_pending_state_and_sends_token() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        f.service.forgot_password("alice@example.com").await.unwrap();

        let user = f
            .users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(user.has_pending_reset());

        let sent = f.emails.sent_emails();
        let reset_mail = sent
            .iter()
            .find(|m| m.kind == SentEmailKind::PasswordReset)
            .unwrap();
        assert_eq!(Some(&reset_mail.body_fragment), user.reset_token.as_ref());
    }

    #[tokio::test]
    async fn test_second_forgot_password_overwrites_token() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        f.service.forgot_password("alice@example.com").await.unwrap();
        let first = f
            .users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap()
            .reset_token
            .unwrap();

        f.service.forgot_password("alice@example.com").await.unwrap();
        let user = f
            .users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        let second = user.reset_token.clone().unwrap();

        assert_ne!(first, second);
        // The superseded token no longer matches any user
        let err = f
            .service
            .reset_password(&first, "newpassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidResetToken)));
    }

    #[tokio::test]
    async fn test_forgot_password_rolls_back_when_email_fails() {
        let f = fixture();
        register(&f, "alice@example.com").await;
        f.emails.set_failing(true);

        let err = f.service.forgot_password("alice@example.com").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailDeliveryFailed)
        ));

        let user = f
            .users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(!user.has_pending_reset());
    }

    #[tokio::test]
    async fn test_reset_password_redeems_token_once() {
        let f = fixture();
        register(&f, "alice@example.com").await;
        f.service.forgot_password("alice@example.com").await.unwrap();

        let token = f
            .users
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap()
            .reset_token
            .unwrap();

        f.service.reset_password(&token, "newpassword1").await.unwrap();

        // New password works, old one does not, token is consumed
        assert!(f
            .service
            .authenticate_user("alice@example.com", "newpassword1")
            .await
            .is_ok());
        assert!(f
            .service
            .authenticate_user("alice@example.com", "hunter22pass")
            .await
            .is_err());
        assert!(matches!(
            f.service.reset_password(&token, "anotherpass1").await,
            Err(DomainError::Auth(AuthError::InvalidResetToken))
        ));
    }

    #[tokio::test]
    async fn test_expired_reset_token_is_consumed() {
        let f = fixture();
        let mut user = register(&f, "alice@example.com").await;

        user.begin_password_reset("expiredtoken1234".to_string(), Duration::minutes(-5));
        f.users.update(user).await.unwrap();

        let err = f
            .service
            .reset_password("expiredtoken1234", "newpassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::ResetTokenExpired)));

        // Pair is cleared, so a retry sees an unknown token
        let err = f
            .service
            .reset_password("expiredtoken1234", "newpassword1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidResetToken)));
    }

    #[tokio::test]
    async fn test_change_password_requires_current_password() {
        let f = fixture();
        register(&f, "alice@example.com").await;

        let err = f
            .service
            .change_password("alice@example.com", "wrong-password", "newpassword1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));

        f.service
            .change_password("alice@example.com", "hunter22pass", "newpassword1")
            .await
            .unwrap();
        assert!(f
            .service
            .authenticate_user("alice@example.com", "newpassword1")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_change_password_does_not_revoke_issued_tokens() {
        let f = fixture();
        register(&f, "alice@example.com").await;
        let login = f
            .service
            .authenticate_user("alice@example.com", "hunter22pass")
            .await
            .unwrap();

        f.service
            .change_password("alice@example.com", "hunter22pass", "newpassword1")
            .await
            .unwrap();

        // Tokens issued before the change stay valid until their own expiry
        assert!(f.tokens.verify_access_token(&login.access_token).is_ok());
        assert!(f.service.refresh_token(&login.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_token_mints_new_access_token() {
        let f = fixture();
        register(&f, "alice@example.com").await;
        let login = f
            .service
            .authenticate_user("alice@example.com", "hunter22pass")
            .await
            .unwrap();

        let refreshed = f.service.refresh_token(&login.refresh_token).await.unwrap();
        assert_eq!(refreshed.refresh_token, login.refresh_token);
        assert!(f
            .tokens
            .verify_access_token(&refreshed.access_token)
            .is_ok());
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let f = fixture();
        register(&f, "alice@example.com").await;
        let login = f
            .service
            .authenticate_user("alice@example.com", "hunter22pass")
            .await
            .unwrap();

        assert!(f.service.refresh_token(&login.access_token).await.is_err());
        assert!(f.service.refresh_token("garbage").await.is_err());
    }

    #[tokio::test]
    async fn test_get_profile() {
        let f = fixture();
        let user = register(&f, "alice@example.com").await;

        let profile = f.service.get_profile("alice@example.com").await.unwrap();
        assert_eq!(profile.id, user.id);
        assert_eq!(profile.role, "USER");

        assert!(matches!(
            f.service.get_profile("nobody@example.com").await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
