//! Feedback repository. The board is the only mutation surface.
//!
//! DESIGN
//! ======
//! The board keeps the item list and the vote ledger in memory and writes
//! both back to storage after every mutation. Storage is best-effort: in-memory
//! state stays authoritative and a failed write is logged, never surfaced.
//!
//! ERROR HANDLING
//! ==============
//! On load, a missing dataset seeds storage with the static dataset. A dataset
//! that cannot be read or parsed falls back to the seed in memory only, so
//! the broken value stays on disk for diagnosis until the next mutation
//! overwrites it.

use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::feedback::{NewFeedback, ValidationError};
use crate::model::{FeedbackItem, FeedbackStatus, VoteRecord};
use crate::query::{self, ListQuery, TabCounts};
use crate::seed;
use crate::storage::{FEEDBACKS_KEY, Storage, StorageError, VOTES_KEY, load_json, save_json};
use crate::vote::{self, VoteOutcome};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("feedback not found: {0}")]
    NotFound(String),
    #[error("feedback {0} is already resolved")]
    AlreadyResolved(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Where the board's data came from on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Both keys were present and parsed.
    Stored,
    /// First load; the seed dataset was written to storage.
    Seeded,
    /// Stored data was unreadable; the seed is in memory only.
    Fallback,
}

pub struct FeedbackBoard<S: Storage> {
    storage: S,
    feedbacks: Vec<FeedbackItem>,
    votes: Vec<VoteRecord>,
    source: LoadSource,
}

// =============================================================================
// LOAD / PERSIST
// =============================================================================

fn read_stored<S: Storage>(storage: &S) -> Result<Option<(Vec<FeedbackItem>, Vec<VoteRecord>)>, StorageError> {
    let feedbacks = load_json::<_, Vec<FeedbackItem>>(storage, FEEDBACKS_KEY)?;
    let votes = load_json::<_, Vec<VoteRecord>>(storage, VOTES_KEY)?;
    Ok(feedbacks.zip(votes))
}

impl<S: Storage> FeedbackBoard<S> {
    /// Load the board from `storage`, seeding or falling back as needed.
    #[must_use]
    pub fn load(storage: S) -> Self {
        match read_stored(&storage) {
            Ok(Some((feedbacks, votes))) => {
                info!(feedbacks = feedbacks.len(), votes = votes.len(), "board loaded from storage");
                Self { storage, feedbacks, votes, source: LoadSource::Stored }
            }
            Ok(None) => {
                let board = Self {
                    storage,
                    feedbacks: seed::seed_feedbacks(),
                    votes: seed::seed_votes(),
                    source: LoadSource::Seeded,
                };
                board.persist();
                info!(feedbacks = board.feedbacks.len(), "board seeded");
                board
            }
            Err(e) => {
                warn!(error = %e, "board data unreadable; using seed data");
                Self {
                    storage,
                    feedbacks: seed::seed_feedbacks(),
                    votes: seed::seed_votes(),
                    source: LoadSource::Fallback,
                }
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = save_json(&self.storage, FEEDBACKS_KEY, &self.feedbacks) {
            warn!(error = %e, "failed to persist feedbacks");
        }
        if let Err(e) = save_json(&self.storage, VOTES_KEY, &self.votes) {
            warn!(error = %e, "failed to persist votes");
        }
    }

    #[must_use]
    pub fn source(&self) -> LoadSource {
        self.source
    }

    #[must_use]
    pub fn feedbacks(&self) -> &[FeedbackItem] {
        &self.feedbacks
    }

    #[must_use]
    pub fn votes(&self) -> &[VoteRecord] {
        &self.votes
    }

    fn position(&self, id: &str) -> Result<usize, BoardError> {
        self.feedbacks
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| BoardError::NotFound(id.to_owned()))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FeedbackItem> {
        self.feedbacks.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn list(&self, query: &ListQuery) -> Vec<FeedbackItem> {
        query::filter_feedback(&self.feedbacks, query)
    }

    #[must_use]
    pub fn tab_counts(&self) -> TabCounts {
        query::tab_counts(&self.feedbacks)
    }

    #[must_use]
    pub fn has_voted(&self, feedback_id: &str, user_identifier: &str) -> bool {
        vote::has_voted(&self.votes, feedback_id, user_identifier)
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Validate and store a new active item with zero votes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if the submission breaks a field rule.
    pub fn create(&mut self, input: NewFeedback) -> Result<FeedbackItem, BoardError> {
        self.create_at(input, OffsetDateTime::now_utc())
    }

    pub(crate) fn create_at(&mut self, input: NewFeedback, now: OffsetDateTime) -> Result<FeedbackItem, BoardError> {
        input.validate()?;

        let item = FeedbackItem {
            id: Uuid::new_v4().simple().to_string(),
            kind: input.kind,
            title: input.title,
            content: input.content,
            author: input.author,
            files: input.files,
            votes: 0,
            status: FeedbackStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.feedbacks.insert(0, item.clone());
        self.persist();

        info!(feedback_id = %item.id, kind = %item.kind, "feedback created");
        Ok(item)
    }

    /// Remove an item together with every vote cast on it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<FeedbackItem, BoardError> {
        let idx = self.position(id)?;
        let removed = self.feedbacks.remove(idx);

        let before = self.votes.len();
        self.votes.retain(|v| v.feedback_id != id);
        let dropped_votes = before - self.votes.len();
        self.persist();

        info!(feedback_id = %id, dropped_votes, "feedback deleted");
        Ok(removed)
    }

    /// Move an active item to resolved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown id and
    /// [`BoardError::AlreadyResolved`] if the item is already resolved.
    pub fn resolve(&mut self, id: &str) -> Result<FeedbackItem, BoardError> {
        self.resolve_at(id, OffsetDateTime::now_utc())
    }

    pub(crate) fn resolve_at(&mut self, id: &str, now: OffsetDateTime) -> Result<FeedbackItem, BoardError> {
        let idx = self.position(id)?;
        let item = &mut self.feedbacks[idx];
        if !item.is_active() {
            return Err(BoardError::AlreadyResolved(id.to_owned()));
        }
        item.status = FeedbackStatus::Resolved;
        item.updated_at = now;
        let resolved = item.clone();
        self.persist();

        info!(feedback_id = %id, "feedback resolved");
        Ok(resolved)
    }

    /// Flip `user_identifier`'s vote on an item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown id.
    pub fn toggle_vote(&mut self, feedback_id: &str, user_identifier: &str) -> Result<VoteOutcome, BoardError> {
        self.toggle_vote_at(feedback_id, user_identifier, OffsetDateTime::now_utc())
    }

    pub(crate) fn toggle_vote_at(
        &mut self,
        feedback_id: &str,
        user_identifier: &str,
        now: OffsetDateTime,
    ) -> Result<VoteOutcome, BoardError> {
        let idx = self.position(feedback_id)?;
        let item = &mut self.feedbacks[idx];
        let outcome = vote::toggle(item, &mut self.votes, user_identifier, now);
        let votes = item.votes;
        self.persist();

        info!(feedback_id, ?outcome, votes, "vote toggled");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
