//! Searchable, paginated employee list as a pure state machine.

use super::aggregate::{Employee, EmployeeId};
use crate::shared::api_error::ApiError;
use crate::shared::debounce::{DebounceTick, Debouncer};
use crate::shared::in_flight::InFlight;
use crate::shared::pager::{FetchTicket, PageDirection, Pager, Resolution};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeListState {
    pub pager: Pager,
    /// Text in the search box; becomes the cursor query on submit.
    pub search_text: String,
    pub employees: Vec<Employee>,
    pub deleting: InFlight,
    pub debounce: Debouncer,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl EmployeeListState {
    pub fn new(page_size: NonZeroU32) -> Self {
        Self {
            pager: Pager::new(page_size),
            search_text: String::new(),
            employees: Vec::new(),
            deleting: InFlight::new(),
            debounce: Debouncer::new(),
            error: None,
            notice: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_loading()
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.has_more() && !self.is_loading()
    }

    pub fn can_go_prev(&self) -> bool {
        self.pager.can_go_prev() && !self.is_loading()
    }

    pub fn is_deleting(&self, id: &EmployeeId) -> bool {
        self.deleting.contains(id.as_str())
    }

    fn fetch(&mut self, ticket: FetchTicket) -> Vec<ListEffect> {
        self.error = None;
        vec![ListEffect::Fetch(ticket)]
    }

    fn submit_search(&mut self) -> Vec<ListEffect> {
        self.debounce.cancel();
        let ticket = self.pager.search(self.search_text.trim().to_string());
        self.fetch(ticket)
    }
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self::new(crate::shared::pager::DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    Mounted,
    SearchInputChanged(String),
    DebounceElapsed(DebounceTick),
    SearchSubmitted,
    /// Clear the query and go back to the first page.
    Refresh,
    NextPage,
    PrevPage,
    PageLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Employee>, ApiError>,
    },
    /// Already confirmed by the user.
    DeleteRequested(EmployeeId),
    DeleteFinished {
        employee_id: EmployeeId,
        result: Result<(), ApiError>,
    },
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    Fetch(FetchTicket),
    /// Start the quiet-window timer; answer with `DebounceElapsed(tick)`.
    StartDebounce(DebounceTick),
    Delete(EmployeeId),
}

/// Pure update function: applies a message and returns the effects to run.
pub fn update(mut state: EmployeeListState, msg: ListMsg) -> (EmployeeListState, Vec<ListEffect>) {
    let effects = match msg {
        ListMsg::Mounted => {
            let ticket = state.pager.reload();
            state.fetch(ticket)
        }
        ListMsg::SearchInputChanged(text) => {
            state.search_text = text;
            vec![ListEffect::StartDebounce(state.debounce.schedule())]
        }
        ListMsg::DebounceElapsed(tick) => {
            if state.debounce.fire(tick) {
                state.submit_search()
            } else {
                Vec::new()
            }
        }
        ListMsg::SearchSubmitted => state.submit_search(),
        ListMsg::Refresh => {
            state.search_text.clear();
            state.submit_search()
        }
        ListMsg::NextPage => {
            if !state.can_go_next() {
                return (state, Vec::new());
            }
            let ticket = state.pager.page(PageDirection::Next);
            state.fetch(ticket)
        }
        ListMsg::PrevPage => {
            if !state.can_go_prev() {
                return (state, Vec::new());
            }
            let ticket = state.pager.page(PageDirection::Prev);
            state.fetch(ticket)
        }
        ListMsg::PageLoaded { ticket, result } => {
            match result {
                Ok(employees) => {
                    if state.pager.resolve_success(&ticket, employees.len()) == Resolution::Applied {
                        state.employees = employees;
                    }
                }
                Err(e) => {
                    if state.pager.resolve_failure(&ticket) == Resolution::Failed {
                        state.error = Some(e.to_string());
                    }
                }
            }
            Vec::new()
        }
        ListMsg::DeleteRequested(id) => {
            if !state.deleting.begin(id.as_str()) {
                return (state, Vec::new());
            }
            vec![ListEffect::Delete(id)]
        }
        ListMsg::DeleteFinished {
            employee_id,
            result,
        } => {
            state.deleting.finish(employee_id.as_str());
            match result {
                Ok(()) => {
                    state.notice = Some("Deleted successfully".to_string());
                    let ticket = state.pager.reload();
                    state.fetch(ticket)
                }
                Err(e) => {
                    state.error = Some(e.to_string());
                    Vec::new()
                }
            }
        }
        ListMsg::DismissNotice => {
            state.notice = None;
            state.error = None;
            Vec::new()
        }
    };

    (state, effects)
}
