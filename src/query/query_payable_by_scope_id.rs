use crate::core::error::ContractError;
use crate::core::state::{Payable, SCOPE_PAYABLE_INDEX};
use crate::query::query_payable_by_uuid::query_payable_by_uuid;
use cosmwasm_std::{to_binary, Binary, Deps};
use provwasm_std::ProvenanceQuery;

/// Finds the payable registered against a scope's address (scope_id - a bech32 address prefixed
/// with "scope").
pub fn query_payable_binary_by_scope_id(
    deps: &Deps<ProvenanceQuery>,
    scope_id: impl Into<String>,
) -> Result<Binary, ContractError> {
    Ok(to_binary(&query_payable_by_scope_id(deps, scope_id)?)?)
}

/// Resolves the scope to its payable uuid through the local index, then loads the payable.  An
/// unindexed scope yields PayableNotFound, reporting the scope id as the missing key.
pub fn query_payable_by_scope_id(
    deps: &Deps<ProvenanceQuery>,
    scope_id: impl Into<String>,
) -> Result<Payable, ContractError> {
    let scope_id = scope_id.into();
    match SCOPE_PAYABLE_INDEX.may_load(deps.storage, &scope_id)? {
        Some(payable_uuid) => query_payable_by_uuid(deps, payable_uuid),
        None => ContractError::PayableNotFound {
            payable_uuid: scope_id,
        }
        .to_result(),
    }
}
