use crate::error::AppResult;
use crate::models::User;
use crate::store::{Collection, Store};

pub struct UserService<'a> {
    store: &'a Store,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a Store) -> Self {
        UserService { store }
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users: Vec<User> = self.store.read(Collection::Users).await?;
        Ok(users.into_iter().find(|user| user.id == id))
    }

    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users: Vec<User> = self.store.read(Collection::Users).await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Jasur".to_string(),
            email: "jasur@mail.com".to_string(),
            password: "$argon2$fake".to_string(),
            role: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        store
            .write(Collection::Users, &[sample_user()])
            .await
            .unwrap();

        let service = UserService::new(&store);
        let found = service.get_user_by_id("u1").await.unwrap();
        assert_eq!(found.unwrap().email, "jasur@mail.com");

        let missing = service.get_user_by_id("u2").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        store
            .write(Collection::Users, &[sample_user()])
            .await
            .unwrap();

        let service = UserService::new(&store);
        let found = service.get_user_by_email("jasur@mail.com").await.unwrap();
        assert_eq!(found.unwrap().id, "u1");
    }
}
