use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub news_id: String,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1))]
    pub author: String,

    #[validate(length(min = 1))]
    pub text: String,
}
