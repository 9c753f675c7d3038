//! List view derivation: tab filter, text search, sort.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the item slice. The board hands in
//! its current items and gets back an owned, ordered copy; nothing is cached
//! and nothing is written back.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::model::{FeedbackItem, FeedbackType, ParseEnumError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTab {
    /// Every active item.
    #[default]
    All,
    /// Active items of one type.
    Type(FeedbackType),
    /// Resolved items of any type.
    Resolved,
}

impl FilterTab {
    #[must_use]
    pub fn matches(self, item: &FeedbackItem) -> bool {
        match self {
            Self::All => item.is_active(),
            Self::Type(kind) => item.kind == kind && item.is_active(),
            Self::Resolved => !item.is_active(),
        }
    }
}

impl fmt::Display for FilterTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Type(kind) => write!(f, "{kind}"),
            Self::Resolved => f.write_str("resolved"),
        }
    }
}

impl FromStr for FilterTab {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "resolved" => Ok(Self::Resolved),
            other => other.parse::<FeedbackType>().map(Self::Type).map_err(|_| ParseEnumError {
                kind: "tab",
                value: s.to_owned(),
                expected: "all, feedback, idea, error, resolved",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Most votes first; ties keep stored order.
    Votes,
    /// Most votes first; ties newest first.
    Popular,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latest => "latest",
            Self::Votes => "votes",
            Self::Popular => "popular",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "votes" => Ok(Self::Votes),
            "popular" => Ok(Self::Popular),
            _ => Err(ParseEnumError { kind: "sort order", value: s.to_owned(), expected: "latest, votes, popular" }),
        }
    }
}

/// Parameters for one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub tab: FilterTab,
    pub search: String,
    pub sort: SortOrder,
}

/// Item count per tab for the list header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabCounts {
    pub all: usize,
    pub feedback: usize,
    pub idea: usize,
    pub error: usize,
    pub resolved: usize,
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Case-insensitive substring match on title, content and author.
///
/// A whitespace-only query matches everything. Otherwise the query is used
/// as typed (lowercased, not trimmed).
#[must_use]
pub fn matches_search(item: &FeedbackItem, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.content.to_lowercase().contains(&needle)
        || item.author.to_lowercase().contains(&needle)
}

/// Filter by tab, then search, then sort.
#[must_use]
pub fn filter_feedback(items: &[FeedbackItem], query: &ListQuery) -> Vec<FeedbackItem> {
    let mut view: Vec<FeedbackItem> = items
        .iter()
        .filter(|item| query.tab.matches(item))
        .filter(|item| matches_search(item, &query.search))
        .cloned()
        .collect();

    // `sort_by_key` is stable, which the `Votes` order relies on.
    match query.sort {
        SortOrder::Latest => view.sort_by_key(|item| Reverse(item.created_at)),
        SortOrder::Votes => view.sort_by_key(|item| Reverse(item.votes)),
        SortOrder::Popular => view.sort_by_key(|item| (Reverse(item.votes), Reverse(item.created_at))),
    }
    view
}

#[must_use]
pub fn tab_counts(items: &[FeedbackItem]) -> TabCounts {
    let count = |tab: FilterTab| items.iter().filter(|item| tab.matches(item)).count();
    TabCounts {
        all: count(FilterTab::All),
        feedback: count(FilterTab::Type(FeedbackType::Feedback)),
        idea: count(FilterTab::Type(FeedbackType::Idea)),
        error: count(FilterTab::Type(FeedbackType::Error)),
        resolved: count(FilterTab::Resolved),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
