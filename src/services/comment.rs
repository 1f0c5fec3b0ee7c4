use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Comment, CommentForm};
use crate::store::{Collection, Store};
use crate::utils::time::now_iso;

/// Comments live in their own collection keyed by `newsId`; the parent news
/// record is never consulted, so comments on unknown or deleted news are
/// accepted and survive the parent's soft delete.
pub struct CommentService<'a> {
    store: &'a Store,
}

impl<'a> CommentService<'a> {
    pub fn new(store: &'a Store) -> Self {
        CommentService { store }
    }

    pub async fn list_for_news(&self, news_id: &str) -> AppResult<Vec<Comment>> {
        let comments: Vec<Comment> = self.store.read(Collection::Comments).await?;
        Ok(comments
            .into_iter()
            .filter(|c| c.news_id == news_id)
            .collect())
    }

    pub async fn create(&self, news_id: &str, form: CommentForm) -> AppResult<Comment> {
        let record = Comment {
            id: Uuid::new_v4().to_string(),
            news_id: news_id.to_string(),
            author: form.author,
            text: form.text,
            created_at: now_iso(),
        };

        let created = record.clone();
        self.store
            .update(Collection::Comments, move |comments: &mut Vec<Comment>| {
                comments.push(record);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    /// Deletes only when both the comment id and its parent news id match.
    pub async fn delete(&self, news_id: &str, comment_id: &str) -> AppResult<()> {
        let news_id = news_id.to_string();
        let comment_id = comment_id.to_string();
        self.store
            .update(Collection::Comments, move |comments: &mut Vec<Comment>| {
                if !comments
                    .iter()
                    .any(|c| c.id == comment_id && c.news_id == news_id)
                {
                    return Err(AppError::NotFound("Comment not found".to_string()));
                }
                comments.retain(|c| !(c.id == comment_id && c.news_id == news_id));
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(author: &str) -> CommentForm {
        CommentForm {
            author: author.to_string(),
            text: "yaxshi o'yin".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_news_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let service = CommentService::new(&store);

        service.create("news-1", form("Aziz")).await.unwrap();
        service.create("news-2", form("Bekzod")).await.unwrap();

        let comments = service.list_for_news("news-1").await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author, "Aziz");
    }

    #[tokio::test]
    async fn test_delete_requires_matching_parent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let service = CommentService::new(&store);

        let comment = service.create("news-1", form("Aziz")).await.unwrap();

        let wrong_parent = service.delete("news-2", &comment.id).await;
        assert!(matches!(wrong_parent, Err(AppError::NotFound(_))));

        service.delete("news-1", &comment.id).await.unwrap();
        assert!(service.list_for_news("news-1").await.unwrap().is_empty());
    }
}
