//! Plan template operations for the Session.

use log::debug;

use super::Session;
use crate::{
    error::Result,
    loader::PlanEntry,
    models::Plan,
    store::{LoadOutcome, LoadTicket, PlanStore},
};

impl Session {
    /// Lists the templates available in the plans directory.
    pub async fn list_plans(&self) -> Result<Vec<PlanEntry>> {
        self.catalog().entries().await
    }

    /// Fetches the template a load ticket was issued for.
    ///
    /// Callers sharing a store between tasks fetch without holding the store
    /// and hand the result to [`PlanStore::finish_load`] afterwards.
    pub async fn fetch_for(&self, ticket: &LoadTicket) -> Result<Plan> {
        debug!("Loading plan '{}'", ticket.plan_id());
        self.catalog().load(ticket.plan_id()).await
    }

    /// Loads the selected plan into `store`.
    pub async fn load_plan(&self, store: &mut PlanStore) -> LoadOutcome {
        let ticket = store.begin_load();
        let result = self.fetch_for(&ticket).await;
        store.finish_load(ticket, result)
    }

    /// Selects `plan_id` and loads it. Re-selecting the current plan reloads
    /// the template but keeps the schedule's swaps when it is unchanged.
    pub async fn select_plan(&self, store: &mut PlanStore, plan_id: &str) -> LoadOutcome {
        store.set_plan_id(plan_id);
        self.load_plan(store).await
    }
}
