use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{News, NewsForm, NewsUpdateForm};
use crate::store::{Collection, Store};
use crate::utils::time::now_iso;

pub struct NewsService<'a> {
    store: &'a Store,
}

impl<'a> NewsService<'a> {
    pub fn new(store: &'a Store) -> Self {
        NewsService { store }
    }

    /// All non-deleted news, newest first (creation prepends).
    pub async fn list(&self) -> AppResult<Vec<News>> {
        let news: Vec<News> = self.store.read(Collection::News).await?;
        Ok(news.into_iter().filter(|n| !n.deleted).collect())
    }

    pub async fn create(&self, form: NewsForm) -> AppResult<News> {
        let record = News {
            id: Uuid::new_v4().to_string(),
            title: form.title,
            content: form.content,
            image: form.image.filter(|s| !s.is_empty()),
            status: form
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Draft".to_string()),
            deleted: false,
            published_at: now_iso(),
            is_featured: form.is_featured.unwrap_or(false),
        };

        let created = record.clone();
        self.store
            .update(Collection::News, move |news: &mut Vec<News>| {
                // At most one item may carry the featured flag
                if record.is_featured {
                    for item in news.iter_mut() {
                        item.is_featured = false;
                    }
                }
                news.insert(0, record);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    /// Partial merge by id: empty or absent fields keep their stored value,
    /// `image` may be explicitly cleared, and `isFeatured` only changes when
    /// the field is present.
    pub async fn update(&self, id: &str, form: NewsUpdateForm) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .update(Collection::News, move |news: &mut Vec<News>| {
                if !news.iter().any(|n| n.id == id) {
                    return Err(AppError::NotFound("News not found".to_string()));
                }

                if form.is_featured == Some(true) {
                    for item in news.iter_mut() {
                        item.is_featured = false;
                    }
                }

                if let Some(item) = news.iter_mut().find(|n| n.id == id) {
                    if let Some(title) = form.title.filter(|t| !t.is_empty()) {
                        item.title = title;
                    }
                    if let Some(content) = form.content.filter(|c| !c.is_empty()) {
                        item.content = content;
                    }
                    if let Some(image) = form.image {
                        item.image = image;
                    }
                    if let Some(status) = form.status.filter(|s| !s.is_empty()) {
                        item.status = status;
                    }
                    if let Some(flag) = form.is_featured {
                        item.is_featured = flag;
                    }
                }
                Ok(())
            })
            .await
    }

    /// Soft delete: the record stays on disk (comments included) and is only
    /// excluded from listings.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .update(Collection::News, move |news: &mut Vec<News>| {
                let item = news
                    .iter_mut()
                    .find(|n| n.id == id)
                    .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;
                item.deleted = true;
                Ok(())
            })
            .await
    }
}
