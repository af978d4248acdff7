//! Search + offset pagination cursor.
//!
//! The pager never talks to the network itself. Each cursor change hands out
//! a [`FetchTicket`]; the caller performs the request and reports the outcome
//! back with the same ticket. Only the most recently issued ticket can change
//! state, so a slow response for an older query is dropped instead of
//! overwriting fresher results.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(50) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDirection {
    Next,
    Prev,
}

/// `{query, limit, offset}` driving one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCursor {
    pub query: String,
    pub limit: NonZeroU32,
    pub offset: u32,
}

impl QueryCursor {
    pub fn new(limit: NonZeroU32) -> Self {
        Self {
            query: String::new(),
            limit,
            offset: 0,
        }
    }

    /// A new query always starts from the first page.
    pub fn search(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: self.limit,
            offset: 0,
        }
    }

    /// `Next` is not clamped: walking past the end is the caller's call.
    pub fn page(&self, direction: PageDirection) -> Self {
        let limit = self.limit.get();
        let offset = match direction {
            PageDirection::Next => self.offset.saturating_add(limit),
            PageDirection::Prev => self.offset.saturating_sub(limit),
        };
        Self {
            query: self.query.clone(),
            limit: self.limit,
            offset,
        }
    }

    pub fn to_list_query(&self) -> ListQuery {
        ListQuery {
            q: self.query.trim().to_string(),
            limit: self.limit.get(),
            offset: self.offset,
        }
    }
}

impl Default for QueryCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Query-string parameters of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
    pub limit: u32,
    pub offset: u32,
}

impl ListQuery {
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

/// Ticket for one in-flight list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket {
    pub generation: u64,
    pub cursor: QueryCursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Response belonged to the latest request and was accepted.
    Applied,
    /// Latest request failed; cursor left untouched.
    Failed,
    /// A newer request was issued after this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    cursor: QueryCursor,
    has_more: bool,
    issued: u64,
    pending: Option<u64>,
}

impl Pager {
    pub fn new(limit: NonZeroU32) -> Self {
        Self {
            cursor: QueryCursor::new(limit),
            has_more: false,
            issued: 0,
            pending: None,
        }
    }

    /// Cursor of the records currently on screen.
    pub fn cursor(&self) -> &QueryCursor {
        &self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_go_prev(&self) -> bool {
        self.cursor.offset > 0
    }

    /// Issue a ticket for `cursor`, superseding any request still in flight.
    pub fn request(&mut self, cursor: QueryCursor) -> FetchTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        FetchTicket {
            generation: self.issued,
            cursor,
        }
    }

    pub fn search(&mut self, query: impl Into<String>) -> FetchTicket {
        let next = self.cursor.search(query);
        self.request(next)
    }

    pub fn page(&mut self, direction: PageDirection) -> FetchTicket {
        let next = self.cursor.page(direction);
        self.request(next)
    }

    /// Re-fetch the window currently on screen.
    pub fn reload(&mut self) -> FetchTicket {
        let current = self.cursor.clone();
        self.request(current)
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.issued
    }

    /// Record a successful response of `returned` items for `ticket`.
    pub fn resolve_success(&mut self, ticket: &FetchTicket, returned: usize) -> Resolution {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale page (generation {} < {})",
                ticket.generation,
                self.issued
            );
            return Resolution::Stale;
        }
        self.pending = None;
        self.cursor = ticket.cursor.clone();
        self.has_more = returned == ticket.cursor.limit.get() as usize;
        Resolution::Applied
    }

    pub fn resolve_failure(&mut self, ticket: &FetchTicket) -> Resolution {
        if !self.is_current(ticket) {
            log::debug!("dropping stale failure (generation {})", ticket.generation);
            return Resolution::Stale;
        }
        self.pending = None;
        Resolution::Failed
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn search_resets_offset() {
        let cursor = QueryCursor {
            query: "bob".into(),
            limit: limit(10),
            offset: 40,
        };
        let next = cursor.search("alice");
        assert_eq!(next.offset, 0);
        assert_eq!(next.query, "alice");
        assert_eq!(next.limit, limit(10));
    }

    #[test]
    fn prev_floors_at_zero() {
        let cursor = QueryCursor {
            query: String::new(),
            limit: limit(10),
            offset: 5,
        };
        assert_eq!(cursor.page(PageDirection::Prev).offset, 0);
        assert_eq!(QueryCursor::new(limit(10)).page(PageDirection::Prev).offset, 0);
    }

    #[test]
    fn next_is_unclamped() {
        let cursor = QueryCursor::new(limit(25));
        let cursor = cursor.page(PageDirection::Next).page(PageDirection::Next);
        assert_eq!(cursor.offset, 50);
    }

    #[test]
    fn query_string_omits_empty_q() {
        let q = QueryCursor::new(limit(50)).to_list_query();
        assert_eq!(q.to_query_string().unwrap(), "limit=50&offset=0");

        let q = QueryCursor::new(limit(50)).search("  alice ").to_list_query();
        assert_eq!(q.to_query_string().unwrap(), "q=alice&limit=50&offset=0");
    }

    #[test]
    fn pager_tracks_loading() {
        let mut pager = Pager::new(limit(2));
        assert!(!pager.is_loading());
        let ticket = pager.reload();
        assert!(pager.is_loading());
        assert_eq!(pager.resolve_success(&ticket, 2), Resolution::Applied);
        assert!(!pager.is_loading());
        assert!(pager.has_more());
    }
}
