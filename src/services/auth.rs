use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::user::UserService;
use crate::store::{Collection, Store};
use crate::utils::auth::create_jwt;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a Store) -> Self {
        AuthService { store }
    }

    /// Registers a regular account. The configured administrator emails are
    /// reserved regardless of what the user collection currently holds, and
    /// the role is always `user`.
    pub async fn register(&self, config: &Config, form: &RegisterRequest) -> AppResult<User> {
        if form.email == config.superadmin_email || form.email == config.admin_email {
            return Err(AppError::Validation("Email is already taken".to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            password: hash_password(&form.password)?,
            role: "user".to_string(),
        };

        let created = user.clone();
        self.store
            .update(Collection::Users, move |users: &mut Vec<User>| {
                if users.iter().any(|u| u.email == user.email) {
                    return Err(AppError::Validation("Email is already taken".to_string()));
                }
                users.push(user);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    /// Verifies credentials and issues a session token. Unknown email and
    /// wrong password are indistinguishable to the caller.
    pub async fn login(&self, config: &Config, form: &LoginRequest) -> AppResult<(String, User)> {
        let user = UserService::new(self.store)
            .get_user_by_email(&form.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&form.password, &user.password)? {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let token = create_jwt(&user.id, &config.secret_key, &config.token_expires_in)?;
        Ok((token, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::auth::verify_jwt;

    fn test_config() -> Config {
        serde_json::from_str("{}").unwrap()
    }

    fn register_form(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Dilnoza".to_string(),
            email: email.to_string(),
            password: "sirli-parol".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let config = test_config();

        let service = AuthService::new(&store);
        let user = service
            .register(&config, &register_form("dilnoza@mail.com"))
            .await
            .unwrap();

        assert_eq!(user.role, "user");
        assert_ne!(user.password, "sirli-parol");
        assert!(user.password.starts_with("$argon2"));

        let stored: Vec<User> = store.read(Collection::Users).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_rejects_reserved_and_duplicate_emails() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let config = test_config();
        let service = AuthService::new(&store);

        let reserved = service
            .register(&config, &register_form(&config.superadmin_email))
            .await;
        assert!(matches!(reserved, Err(AppError::Validation(_))));

        service
            .register(&config, &register_form("dilnoza@mail.com"))
            .await
            .unwrap();
        let duplicate = service
            .register(&config, &register_form("dilnoza@mail.com"))
            .await;
        assert!(matches!(duplicate, Err(AppError::Validation(_))));

        let stored: Vec<User> = store.read(Collection::Users).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let config = test_config();
        let service = AuthService::new(&store);

        let user = service
            .register(&config, &register_form("dilnoza@mail.com"))
            .await
            .unwrap();

        let (token, logged_in) = service
            .login(
                &config,
                &LoginRequest {
                    email: "dilnoza@mail.com".to_string(),
                    password: "sirli-parol".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(logged_in.id, user.id);
        let claims = verify_jwt(&token, &config.secret_key).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let config = test_config();
        let service = AuthService::new(&store);

        service
            .register(&config, &register_form("dilnoza@mail.com"))
            .await
            .unwrap();

        let wrong_password = service
            .login(
                &config,
                &LoginRequest {
                    email: "dilnoza@mail.com".to_string(),
                    password: "notogri".to_string(),
                },
            )
            .await;
        assert!(matches!(wrong_password, Err(AppError::Unauthorized(_))));

        let unknown_email = service
            .login(
                &config,
                &LoginRequest {
                    email: "boshqa@mail.com".to_string(),
                    password: "sirli-parol".to_string(),
                },
            )
            .await;
        assert!(matches!(unknown_email, Err(AppError::Unauthorized(_))));
    }
}
