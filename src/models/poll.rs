use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Poll record. The option set is not stored separately; the keys of `votes`
/// are the options, each mapped to its running count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub votes: BTreeMap<String, u64>,
    pub created_at: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PollForm {
    #[validate(length(min = 1))]
    pub question: String,

    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteForm {
    pub poll_id: String,
    pub option: String,
}
