//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use opsboard_core::config::auth::AuthConfig;
use opsboard_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens.
///
/// Access tokens are fully stateless — validity is signature + expiry,
/// never a store lookup. Refresh tokens additionally require equality
/// with the stored value, which is the session manager's job.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for access token verification.
    access_key: DecodingKey,
    /// HMAC secret key for refresh token verification.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token, &self.access_key)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthorized("Invalid token"));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token, &self.refresh_key)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::unauthorized("Invalid token"));
        }

        Ok(claims)
    }

    /// Internal decode against one of the two keys.
    ///
    /// Expired and invalid-signature failures collapse to the same
    /// client-visible error so the endpoint cannot be used as an oracle.
    fn decode_token(&self, token: &str, key: &DecodingKey) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                _ => AppError::unauthorized("Invalid token"),
            }
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-secret-for-tests".to_string(),
            refresh_token_secret: "refresh-secret-for-tests".to_string(),
            access_ttl_minutes: 60,
            refresh_ttl_days: 7,
            password_min_length: 5,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(user_id).unwrap();

        let access = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(access.sub, user_id);
        assert_eq!(access.token_type, TokenType::Access);

        let refresh = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, user_id);
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_token_type_confusion_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).unwrap();

        // A refresh token is not a valid access token and vice versa —
        // they are signed with different keys.
        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_forged_subject_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);
        let now = chrono::Utc::now();

        // Token with a chosen subject but the wrong signing key.
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        let forged = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"attacker-secret"),
        )
        .unwrap();

        assert!(decoder.decode_access_token(&forged).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);
        let now = chrono::Utc::now();

        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.access_token_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode_access_token(&expired).unwrap_err();
        assert_eq!(err.kind, opsboard_core::error::ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not-a-jwt").is_err());
        assert!(decoder.decode_refresh_token("").is_err());
    }
}
