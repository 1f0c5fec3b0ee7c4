use std::collections::BTreeMap;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Poll, PollForm, VoteForm};
use crate::store::{Collection, Store};
use crate::utils::time::now_iso;

pub struct PollService<'a> {
    store: &'a Store,
}

impl<'a> PollService<'a> {
    pub fn new(store: &'a Store) -> Self {
        PollService { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Poll>> {
        self.store.read(Collection::Polls).await
    }

    /// Creates a poll with one zeroed counter per distinct option. The
    /// option set is only implied by the counter keys from here on.
    pub async fn create(&self, form: PollForm) -> AppResult<Poll> {
        let mut votes = BTreeMap::new();
        for option in form.options {
            votes.insert(option, 0);
        }
        if votes.len() < 2 {
            return Err(AppError::Validation(
                "At least two distinct options are required".to_string(),
            ));
        }

        let record = Poll {
            id: Uuid::new_v4().to_string(),
            question: form.question,
            votes,
            created_at: now_iso(),
        };

        let created = record.clone();
        self.store
            .update(Collection::Polls, move |polls: &mut Vec<Poll>| {
                polls.insert(0, record);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    /// Increments the counter for an option; voting for an option outside
    /// the original set starts a new counter rather than failing.
    pub async fn vote(&self, form: VoteForm) -> AppResult<()> {
        self.store
            .update(Collection::Polls, move |polls: &mut Vec<Poll>| {
                let poll = polls
                    .iter_mut()
                    .find(|p| p.id == form.poll_id)
                    .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;
                *poll.votes.entry(form.option).or_insert(0) += 1;
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .update(Collection::Polls, move |polls: &mut Vec<Poll>| {
                if !polls.iter().any(|p| p.id == id) {
                    return Err(AppError::NotFound("Poll not found".to_string()));
                }
                polls.retain(|p| p.id != id);
                Ok(())
            })
            .await
    }
}
