use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{FeaturedMatch, MatchForm, TeamSide};
use crate::store::{Collection, Store};
use crate::utils::logos::logo_url;
use crate::utils::time::now_iso;

pub struct MatchService<'a> {
    store: &'a Store,
}

impl<'a> MatchService<'a> {
    pub fn new(store: &'a Store) -> Self {
        MatchService { store }
    }

    fn team_side(name: String) -> TeamSide {
        let logo = logo_url(&name).map(|url| url.to_string());
        TeamSide { name, logo }
    }

    fn check_teams(form: &MatchForm) -> AppResult<()> {
        if form.home == form.away {
            return Err(AppError::Validation(
                "Home and away teams cannot be the same".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<FeaturedMatch>> {
        self.store.read(Collection::Matches).await
    }

    pub async fn create(&self, form: MatchForm) -> AppResult<FeaturedMatch> {
        Self::check_teams(&form)?;

        let record = FeaturedMatch {
            id: Uuid::new_v4().to_string(),
            home: Self::team_side(form.home),
            away: Self::team_side(form.away),
            time: form.time,
            date: form.date,
            league: form.league,
            created_at: now_iso(),
            updated_at: None,
        };

        let created = record.clone();
        self.store
            .update(Collection::Matches, move |matches: &mut Vec<FeaturedMatch>| {
                matches.push(record);
                Ok(())
            })
            .await?;

        Ok(created)
    }

    /// Full replacement keyed by id: every field is taken from the form, the
    /// id and creation stamp are retained, and `updatedAt` is set.
    pub async fn update(&self, id: &str, form: MatchForm) -> AppResult<()> {
        Self::check_teams(&form)?;

        let id = id.to_string();
        self.store
            .update(Collection::Matches, move |matches: &mut Vec<FeaturedMatch>| {
                let item = matches
                    .iter_mut()
                    .find(|m| m.id == id)
                    .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;
                item.home = Self::team_side(form.home);
                item.away = Self::team_side(form.away);
                item.time = form.time;
                item.date = form.date;
                item.league = form.league;
                item.updated_at = Some(now_iso());
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = id.to_string();
        self.store
            .update(Collection::Matches, move |matches: &mut Vec<FeaturedMatch>| {
                if !matches.iter().any(|m| m.id == id) {
                    return Err(AppError::NotFound("Match not found".to_string()));
                }
                matches.retain(|m| m.id != id);
                Ok(())
            })
            .await
    }
}
