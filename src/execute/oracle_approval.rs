use crate::core::error::ContractError;
use crate::core::state::{payable_storage, PayableStatus};
use crate::util::constants::{
    ORACLE_ADDRESS_KEY, ORACLE_APPROVED_KEY, PAYABLE_STATUS_KEY, PAYABLE_TYPE_KEY,
    PAYABLE_UUID_KEY,
};
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OracleApprovalV1 {
    pub payable_uuid: String,
}

/// Moves a pending payable to approved.  Only the oracle named at registration may do this, and
/// only once.
pub fn oracle_approval(
    deps: DepsMut<ProvenanceQuery>,
    info: MessageInfo,
    oracle_approval: OracleApprovalV1,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    // Oracle approval should not require any funds
    if !info.funds.is_empty() {
        return ContractError::FundsPresent.to_result();
    }
    let mut payables_bucket = payable_storage(deps.storage);
    let mut target_payable =
        match payables_bucket.may_load(oracle_approval.payable_uuid.as_bytes())? {
            Some(payable) => payable,
            None => {
                return ContractError::PayableNotFound {
                    payable_uuid: oracle_approval.payable_uuid,
                }
                .to_result();
            }
        };
    // Only the designated oracle can approve a payable
    if info.sender != target_payable.oracle_address {
        return ContractError::Unauthorized.to_result();
    }
    if target_payable.status != PayableStatus::Pending {
        return ContractError::InvalidStateTransition {
            payable_uuid: target_payable.payable_uuid,
            current_status: target_payable.status.to_string(),
            target_status: PayableStatus::Approved.to_string(),
        }
        .to_result();
    }
    target_payable.status = PayableStatus::Approved;
    payables_bucket.save(target_payable.payable_uuid.as_bytes(), &target_payable)?;
    Ok(Response::new()
        .add_attribute(ORACLE_APPROVED_KEY, &target_payable.payable_uuid)
        .add_attribute(PAYABLE_TYPE_KEY, &target_payable.payable_type)
        .add_attribute(PAYABLE_UUID_KEY, &target_payable.payable_uuid)
        .add_attribute(ORACLE_ADDRESS_KEY, target_payable.oracle_address.as_str())
        .add_attribute(PAYABLE_STATUS_KEY, target_payable.status.as_str()))
}
