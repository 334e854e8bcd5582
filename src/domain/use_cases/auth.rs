use crate::{
    domain::entities::token::{AuthResponse, Claims, LoginRequest},
    errors::AuthError,
    infrastructure::auth::{jwt::JwtService, password::verify_password},
    settings::AppConfig,
};

/// Authentication against the single configured admin account. The
/// GraphQL endpoint is the only gated surface; REST stays public.
#[derive(Clone)]
pub struct AuthHandler {
    jwt_service: JwtService,
    admin_username: String,
    admin_password_hash: String,
    token_minutes: i64,
}

impl AuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AuthHandler {
            jwt_service: JwtService::new(config),
            admin_username: config.admin_username.clone(),
            admin_password_hash: config.admin_password_hash.clone(),
            token_minutes: config.jwt_expiration_minutes,
        }
    }

    /// Verifies the credentials and issues a bearer token for the session
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        if request.username != self.admin_username {
            return Err(AuthError::WrongCredentials);
        }

        if !verify_password(&request.password, &self.admin_password_hash)? {
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.jwt_service.create_jwt(&self.admin_username)?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in_minutes: self.token_minutes,
        })
    }

    /// Decodes and validates a session token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.jwt_service.decode_jwt(token)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::password::hash_password;
    use crate::settings::AppEnvironment;

    fn config_with_password(password: &str) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/test".into(),
            cors_allowed_origins: vec!["*".into()],
            jwt_secret: "test_jwt_secret_that_is_long_enough_1234567890".into(),
            jwt_expiration_minutes: 5,
            admin_username: "admin".into(),
            admin_password_hash: hash_password(password).unwrap(),
        }
    }

    #[test]
    fn login_round_trips_through_token_verification() {
        let handler = AuthHandler::new(&config_with_password("CorrectHorse9!"));

        let response = handler
            .login(LoginRequest {
                username: "admin".into(),
                password: "CorrectHorse9!".into(),
            })
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        let claims = handler.verify(&response.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn wrong_password_or_username_is_rejected() {
        let handler = AuthHandler::new(&config_with_password("CorrectHorse9!"));

        assert!(matches!(
            handler.login(LoginRequest {
                username: "admin".into(),
                password: "wrong".into(),
            }),
            Err(AuthError::WrongCredentials)
        ));
        assert!(matches!(
            handler.login(LoginRequest {
                username: "root".into(),
                password: "CorrectHorse9!".into(),
            }),
            Err(AuthError::WrongCredentials)
        ));
    }

    #[test]
    fn garbage_tokens_do_not_verify() {
        let handler = AuthHandler::new(&config_with_password("CorrectHorse9!"));
        assert!(handler.verify("not-a-token").is_err());
    }
}
