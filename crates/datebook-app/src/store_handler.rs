use salvo::async_trait;

use crate::error::AppResult;
use datebook_core::error::CoreError;
use datebook_db::db::Store;

/// Injects the shared in-memory store into every request's depot.
pub struct StoreHandler {
    pub store: Store,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Clones share the same locked state
        depot.inject(self.store.clone());
    }
}

/// ## Summary
/// Retrieves the store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Store> {
    depot
        .obtain::<Store>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Store not found in depot").into())
}
