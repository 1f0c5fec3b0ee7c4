use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub status: String,
    #[serde(default)]
    pub deleted: bool,
    pub published_at: String,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsForm {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    pub image: Option<String>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
}

/// Partial update. `image` distinguishes an absent field (keep the stored
/// value) from an explicit `null` (clear it); the other fields simply keep
/// the stored value when absent or empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsUpdateForm {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_form_image_tri_state() {
        let absent: NewsUpdateForm = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert_eq!(absent.image, None);

        let cleared: NewsUpdateForm = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert_eq!(cleared.image, Some(None));

        let replaced: NewsUpdateForm = serde_json::from_str(r#"{"image": "/uploads/x.png"}"#).unwrap();
        assert_eq!(replaced.image, Some(Some("/uploads/x.png".to_string())));
    }

    #[test]
    fn test_record_round_trips_camel_case() {
        let record = News {
            id: "n1".to_string(),
            title: "Derby".to_string(),
            content: "Big game".to_string(),
            image: None,
            status: "Draft".to_string(),
            deleted: false,
            published_at: "2026-01-02T03:04:05.678Z".to_string(),
            is_featured: true,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["publishedAt"], "2026-01-02T03:04:05.678Z");
        assert_eq!(json["isFeatured"], true);
        assert!(json["image"].is_null());
    }
}
