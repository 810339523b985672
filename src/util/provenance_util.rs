use crate::core::error::ContractError;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};
use provwasm_std::{ProvenanceQuerier, ProvenanceQuery, Scope};

/// Defines a ProvenanceUtil instance.  This value should be used to query provenance modules for
/// the data a payable is attached to.
pub trait ProvenanceUtil {
    /// Returns a provwasm Scope struct for the given scope_id, which is a bech32 address prefixed
    /// with "scope"
    fn get_scope_by_id(
        &self,
        querier: &QuerierWrapper<ProvenanceQuery>,
        scope_id: impl Into<String>,
    ) -> StdResult<Scope>;

    /// Ensures that the given address is listed as an owner on the target scope.  Registering a
    /// payable against a scope is only permitted for its owners.
    fn verify_scope_owner(
        &self,
        querier: &QuerierWrapper<ProvenanceQuery>,
        scope_id: impl Into<String>,
        address: &Addr,
    ) -> Result<(), ContractError> {
        let scope = self.get_scope_by_id(querier, scope_id)?;
        if scope.owners.iter().any(|owner| &owner.address == address) {
            Ok(())
        } else {
            ContractError::Unauthorized.to_result()
        }
    }
}

/// The core production ProvenanceUtil instance.  A static struct instance for re-use throughout the
/// various execution flows.
pub struct ProvenanceUtilImpl;

impl ProvenanceUtil for ProvenanceUtilImpl {
    fn get_scope_by_id(
        &self,
        querier: &QuerierWrapper<ProvenanceQuery>,
        scope_id: impl Into<String>,
    ) -> StdResult<Scope> {
        ProvenanceQuerier::new(querier).get_scope(scope_id)
    }
}
