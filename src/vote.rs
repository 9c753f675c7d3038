//! Vote toggle over the item list and the vote ledger.
//!
//! The ledger holds at most one record per `(feedback_id, user_identifier)`;
//! an item's `votes` moves by exactly one per toggle and never drops below 0.

use time::OffsetDateTime;

use crate::model::{FeedbackItem, VoteRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Voted,
    Unvoted,
}

impl VoteOutcome {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Voted => "vote recorded",
            Self::Unvoted => "vote withdrawn",
        }
    }
}

#[must_use]
pub fn has_voted(votes: &[VoteRecord], feedback_id: &str, user_identifier: &str) -> bool {
    votes.iter().any(|v| v.matches(feedback_id, user_identifier))
}

/// Flip `user_identifier`'s vote on `item`. The caller has already resolved
/// `item` from `feedback_id`, so no orphan record can be created.
pub fn toggle(
    item: &mut FeedbackItem,
    votes: &mut Vec<VoteRecord>,
    user_identifier: &str,
    now: OffsetDateTime,
) -> VoteOutcome {
    let before = votes.len();
    votes.retain(|v| !v.matches(&item.id, user_identifier));

    if votes.len() < before {
        item.votes = item.votes.saturating_sub(1);
        VoteOutcome::Unvoted
    } else {
        votes.push(VoteRecord {
            feedback_id: item.id.clone(),
            user_identifier: user_identifier.to_owned(),
            voted_at: now,
        });
        item.votes = item.votes.saturating_add(1);
        VoteOutcome::Voted
    }
}

#[cfg(test)]
#[path = "vote_test.rs"]
mod tests;
