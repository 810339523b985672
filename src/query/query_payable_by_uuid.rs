use crate::core::error::ContractError;
use crate::core::state::{payable_storage_read, Payable};
use cosmwasm_std::{to_binary, Binary, Deps};
use provwasm_std::ProvenanceQuery;

pub fn query_payable_binary_by_uuid(
    deps: &Deps<ProvenanceQuery>,
    payable_uuid: impl Into<String>,
) -> Result<Binary, ContractError> {
    Ok(to_binary(&query_payable_by_uuid(deps, payable_uuid)?)?)
}

/// Loads the stored payable for the given uuid, failing with PayableNotFound when no such payable
/// has been registered.
pub fn query_payable_by_uuid(
    deps: &Deps<ProvenanceQuery>,
    payable_uuid: impl Into<String>,
) -> Result<Payable, ContractError> {
    let payable_uuid = payable_uuid.into();
    match payable_storage_read(deps.storage).may_load(payable_uuid.as_bytes())? {
        Some(payable) => Ok(payable),
        None => ContractError::PayableNotFound { payable_uuid }.to_result(),
    }
}
