//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{
    Claims, TokenPair, JWT_AUDIENCE, JWT_ISSUER, TOKEN_USE_ACCESS, TOKEN_USE_REFRESH,
};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and validating JWT access and refresh tokens
///
/// The service is a pure function of (claims, secret, clock): it owns no
/// persistent state and performs no I/O. Refresh tokens use the same
/// signing mechanism as access tokens and differ only in expiry window and
/// the `token_use` claim.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Expiry is exact; no clock-skew leeway
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for an identity
    pub fn issue_access_token(&self, email: &str, role: Role) -> Result<String, DomainError> {
        let claims =
            Claims::new_access_token(email, role, self.config.access_token_expiry_minutes);
        self.encode_jwt(&claims)
    }

    /// Issues a signed refresh token for an identity
    pub fn issue_refresh_token(&self, email: &str, role: Role) -> Result<String, DomainError> {
        let claims =
            Claims::new_refresh_token(email, role, self.config.refresh_token_expiry_days);
        self.encode_jwt(&claims)
    }

    /// Issues an access + refresh token pair
    pub fn issue_token_pair(&self, email: &str, role: Role) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(email, role)?;
        let refresh_token = self.issue_refresh_token(email, role)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes * 60,
            self.config.refresh_token_expiry_days * 24 * 60 * 60,
        ))
    }

    /// Access token expiry window in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// Verifies an access token and returns its claims
    ///
    /// Fails closed: malformed input, a bad signature, an expired token,
    /// or refresh-token claims all yield an error, never a panic.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token)?;

        if claims.token_use != TOKEN_USE_ACCESS {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token)?;

        if claims.token_use != TOKEN_USE_REFRESH {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(claims)
    }

    /// Reads the subject (email) from a token, if it validates
    pub fn subject(&self, token: &str) -> Option<String> {
        self.decode_jwt(token).ok().map(|claims| claims.sub)
    }

    /// Reads the account role from a token, if it validates
    pub fn role(&self, token: &str) -> Option<Role> {
        self.decode_jwt(token)
            .ok()
            .and_then(|claims| claims.account_role())
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and validates a JWT, mapping library errors to domain errors
    fn decode_jwt(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                    DomainError::Token(TokenError::TokenNotYetValid)
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        // The library accepts exp == now; expiry here is exclusive, so a
        // token is invalid from the instant its exp is reached
        if token_data.claims.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_issue_and_verify_access_token() {
        let service = service();
        let token = service
            .issue_access_token("alice@example.com", Role::User)
            .unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.role, "USER");
        assert_eq!(claims.token_use, TOKEN_USE_ACCESS);
    }

    #[test]
    fn test_issue_and_verify_refresh_token() {
        let service = service();
        let token = service
            .issue_refresh_token("alice@example.com", Role::Admin)
            .unwrap();

        let claims = service.verify_refresh_token(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.is_refresh());
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let service = service();
        let access = service
            .issue_access_token("alice@example.com", Role::User)
            .unwrap();
        let refresh = service
            .issue_refresh_token("alice@example.com", Role::User)
            .unwrap();

        assert!(matches!(
            service.verify_refresh_token(&access),
            Err(DomainError::Token(TokenError::InvalidClaims))
        ));
        assert!(matches!(
            service.verify_access_token(&refresh),
            Err(DomainError::Token(TokenError::InvalidClaims))
        ));
    }

    #[test]
    fn test_expired_token_fails_closed() {
        let service = service();

        // Encode claims that expired a minute ago with the service's secret
        let mut claims = Claims::new_access_token("alice@example.com", Role::User, 15);
        claims.exp = Utc::now().timestamp() - 60;
        claims.iat = claims.exp - 60;
        claims.nbf = claims.iat;
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            service.verify_access_token(&token),
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_token_invalid_from_the_instant_it_expires() {
        let service = service();

        // exp set to the current second: expiry is exclusive, so the
        // token must already be rejected
        let mut claims = Claims::new_access_token("alice@example.com", Role::User, 15);
        claims.exp = Utc::now().timestamp();
        claims.iat = claims.exp - 900;
        claims.nbf = claims.iat;
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            service.verify_access_token(&token),
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_wrong_secret_fails_closed() {
        let issuing = TokenService::new(TokenServiceConfig {
            jwt_secret: "other-secret".to_string(),
            ..Default::default()
        });
        let token = issuing
            .issue_access_token("alice@example.com", Role::User)
            .unwrap();

        assert!(matches!(
            service().verify_access_token(&token),
            Err(DomainError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_malformed_token_is_an_error_not_a_panic() {
        let service = service();

        assert!(service.verify_access_token("not-a-jwt").is_err());
        assert!(service.verify_access_token("").is_err());
        assert_eq!(service.subject("garbage"), None);
        assert_eq!(service.role("garbage"), None);
    }

    #[test]
    fn test_subject_and_role_reads() {
        let service = service();
        let token = service
            .issue_access_token("bob@example.com", Role::Admin)
            .unwrap();

        assert_eq!(service.subject(&token), Some("bob@example.com".to_string()));
        assert_eq!(service.role(&token), Some(Role::Admin));
    }

    #[test]
    fn test_token_pair_expiry_windows() {
        let service = service();
        let pair = service
            .issue_token_pair("alice@example.com", Role::User)
            .unwrap();

        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }
}
