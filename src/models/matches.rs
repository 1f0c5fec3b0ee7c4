use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSide {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedMatch {
    pub id: String,
    pub home: TeamSide,
    pub away: TeamSide,
    pub time: String,
    pub date: String,
    pub league: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create and update share the same full-field form; updates replace every
/// field except `id` and `createdAt`.
#[derive(Debug, Deserialize, Validate)]
pub struct MatchForm {
    #[validate(length(min = 1))]
    pub home: String,

    #[validate(length(min = 1))]
    pub away: String,

    #[validate(length(min = 1))]
    pub time: String,

    #[validate(length(min = 1))]
    pub date: String,

    #[validate(length(min = 1))]
    pub league: String,
}
