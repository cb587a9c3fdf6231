use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use datebook_core::error::CoreError;
use datebook_service::auth::CredentialVerifier;

pub struct CredentialsHandler {
    pub verifier: Arc<dyn CredentialVerifier>,
}

#[async_trait]
impl salvo::Handler for CredentialsHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.verifier));
    }
}

/// ## Summary
/// Retrieves the credential verifier from the depot.
///
/// ## Errors
/// Returns an error if no verifier was injected.
pub fn get_verifier_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn CredentialVerifier>> {
    depot
        .obtain::<Arc<dyn CredentialVerifier>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Credential verifier not found in depot").into())
}
