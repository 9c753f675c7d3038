//! Board commands shared by the one-shot CLI and the interactive shell.
//!
//! DESIGN
//! ======
//! `App` bundles the three pieces one client owns: the board, the admin
//! gate and the voter identifier. `execute` runs one parsed command against
//! it and returns the text to print. Delete and resolve pass through the
//! admin gate first; everything else is open to any client.

use std::path::PathBuf;

use clap::Subcommand;
use time::OffsetDateTime;

use crate::admin::{AdminCredentials, AdminGate, AuthError, format_remaining};
use crate::board::{BoardError, FeedbackBoard};
use crate::feedback::NewFeedback;
use crate::identity;
use crate::media::{self, MediaError};
use crate::model::FeedbackType;
use crate::query::{FilterTab, ListQuery, SortOrder};
use crate::render;
use crate::storage::Storage;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Media(#[from] MediaError),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List feedback with tab counts.
    List {
        /// all, feedback, idea, error or resolved
        #[arg(long, default_value_t = FilterTab::All)]
        tab: FilterTab,
        /// latest, votes or popular
        #[arg(long, default_value_t = SortOrder::Latest)]
        sort: SortOrder,
        /// Case-insensitive match on title, content and author
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one item in full.
    Show { id: String },
    /// Submit new feedback.
    Create {
        /// feedback, idea or error
        #[arg(long = "type", value_name = "TYPE")]
        kind: FeedbackType,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        author: String,
        /// JPG, PNG or MP4 attachment; repeat for more
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,
    },
    /// Toggle this client's vote.
    Vote { id: String },
    /// Delete an item and its votes (admin).
    Delete { id: String },
    /// Mark an item resolved (admin).
    Resolve { id: String },
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the admin session status.
    Session,
    /// Extend the admin session by seven days from now.
    Extend,
    /// Print this client's voter identifier.
    Whoami,
}

// =============================================================================
// APP
// =============================================================================

pub struct App<S: Storage> {
    board: FeedbackBoard<S>,
    admin: AdminGate<S>,
    user_id: String,
}

impl<S: Storage> App<S> {
    #[must_use]
    pub fn open(storage: S, credentials: AdminCredentials) -> Self {
        let user_id = identity::client_identifier(&storage);
        let board = FeedbackBoard::load(storage.clone());
        let admin = AdminGate::open(storage, credentials);
        Self { board, admin, user_id }
    }

    #[must_use]
    pub fn board(&self) -> &FeedbackBoard<S> {
        &self.board
    }

    #[must_use]
    pub fn admin(&self) -> &AdminGate<S> {
        &self.admin
    }

    pub fn admin_mut(&mut self) -> &mut AdminGate<S> {
        &mut self.admin
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Run one command and return its printable result.
    ///
    /// # Errors
    ///
    /// Returns the board, auth or media error the command hit. State is
    /// unchanged on error.
    pub fn execute(&mut self, command: Command) -> Result<String, AppError> {
        match command {
            Command::List { tab, sort, search } => {
                let query = ListQuery { tab, search, sort };
                let items = self.board.list(&query);
                Ok(render::list(&items, self.board.tab_counts(), &query))
            }
            Command::Show { id } => {
                let item = self.board.get(&id).ok_or_else(|| BoardError::NotFound(id.clone()))?;
                Ok(render::detail(item, self.board.has_voted(&id, &self.user_id)))
            }
            Command::Create { kind, title, content, author, files } => {
                let attachments = media::attach_all(&files)?;
                let input = NewFeedback::new(kind, title, content, author).with_files(attachments);
                let item = self.board.create(input)?;
                Ok(format!("created {}", render::row(&item)))
            }
            Command::Vote { id } => {
                let outcome = self.board.toggle_vote(&id, &self.user_id)?;
                let votes = self.board.get(&id).map_or(0, |item| item.votes);
                Ok(format!("{}; {id} now has {votes} votes", outcome.message()))
            }
            Command::Delete { id } => {
                self.admin.require()?;
                let removed = self.board.delete(&id)?;
                Ok(format!("deleted {} ({})", removed.id, removed.title))
            }
            Command::Resolve { id } => {
                self.admin.require()?;
                let item = self.board.resolve(&id)?;
                Ok(format!("resolved {}", render::row(&item)))
            }
            Command::Login { username, password } => {
                let session = self.admin.login(&username, &password)?;
                Ok(format!("logged in; session expires {}", render::timestamp(session.expires_at)))
            }
            Command::Logout => {
                self.admin.logout();
                Ok("logged out".to_owned())
            }
            Command::Session => Ok(render::session_status(self.admin.session(), OffsetDateTime::now_utc())),
            Command::Extend => {
                let session = self.admin.extend()?;
                Ok(format!(
                    "session extended; expires {} ({} left)",
                    render::timestamp(session.expires_at),
                    format_remaining(self.admin.time_remaining()),
                ))
            }
            Command::Whoami => Ok(self.user_id.clone()),
        }
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
