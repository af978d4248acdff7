use crate::domain::a001_employee::api;
use contracts::domain::a001_employee::list_state::{update, EmployeeListState, ListEffect, ListMsg};
use contracts::shared::config::AppConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Reactive handle around the list reducer. Effects returned by the reducer
/// are run here and their results fed back as messages.
#[derive(Clone, Copy)]
pub struct EmployeeListController {
    pub state: RwSignal<EmployeeListState>,
    debounce_ms: u32,
}

impl EmployeeListController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(EmployeeListState::new(config.page_size())),
            debounce_ms: config.debounce_ms,
        }
    }

    pub fn dispatch(self, msg: ListMsg) {
        let current = self.state.get_untracked();
        let (next, effects) = update(current, msg);
        self.state.set(next);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: ListEffect) {
        match effect {
            ListEffect::Fetch(ticket) => spawn_local(async move {
                let result = api::list_employees(&ticket.cursor.to_list_query()).await;
                if let Err(e) = &result {
                    log::warn!("employee list fetch failed: {}", e);
                }
                self.dispatch(ListMsg::PageLoaded { ticket, result });
            }),
            ListEffect::StartDebounce(tick) => {
                let delay = self.debounce_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    self.dispatch(ListMsg::DebounceElapsed(tick));
                })
            }
            ListEffect::Delete(employee_id) => spawn_local(async move {
                let result = api::delete_employee(&employee_id).await;
                match &result {
                    Ok(()) => log::info!("deleted employee {}", employee_id),
                    Err(e) => log::warn!("delete of {} failed: {}", employee_id, e),
                }
                self.dispatch(ListMsg::DeleteFinished {
                    employee_id,
                    result,
                });
            }),
        }
    }
}

pub fn create_state(config: &AppConfig) -> EmployeeListController {
    EmployeeListController::new(config)
}
