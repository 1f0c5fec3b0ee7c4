use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Category, CategoryForm};
use crate::store::{Collection, Store};

pub struct CategoryService<'a> {
    store: &'a Store,
}

impl<'a> CategoryService<'a> {
    pub fn new(store: &'a Store) -> Self {
        CategoryService { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.store.read(Collection::Categories).await
    }

    pub async fn create(&self, form: CategoryForm) -> AppResult<Category> {
        let record = Category {
            id: Uuid::new_v4().to_string(),
            name: form.name,
        };

        let created = record.clone();
        self.store
            .update(Collection::Categories, move |categories: &mut Vec<Category>| {
                if categories.iter().any(|c| c.name == record.name) {
                    return Err(AppError::Validation(
                        "A category with this name already exists".to_string(),
                    ));
                }
                categories.push(record);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .update(Collection::Categories, move |categories: &mut Vec<Category>| {
                if !categories.iter().any(|c| c.id == id) {
                    return Err(AppError::NotFound("Category not found".to_string()));
                }
                categories.retain(|c| c.id != id);
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_enforces_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let service = CategoryService::new(&store);

        service
            .create(CategoryForm {
                name: "Futbol".to_string(),
            })
            .await
            .unwrap();

        let duplicate = service
            .create(CategoryForm {
                name: "Futbol".to_string(),
            })
            .await;
        assert!(matches!(duplicate, Err(AppError::Validation(_))));

        let stored = service.list().await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let service = CategoryService::new(&store);

        let category = service
            .create(CategoryForm {
                name: "Tennis".to_string(),
            })
            .await
            .unwrap();

        service.delete(&category.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());

        let missing = service.delete(&category.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
