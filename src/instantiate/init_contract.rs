use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::state::{config_v2, Configuration};
use crate::migrate::version_info::migrate_version_info;
use crate::util::conversions::to_uint128;
use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg, ProvenanceQuery};

/// Standard entrypoint for contract -> instantiate.  Generates the initial Configuration value
/// that drives fee behavior, and automatically binds the contract name to its address.  Also
/// establishes the initial version info storage.  The message should be validated before this is
/// invoked.
pub fn init_contract(
    deps: DepsMut<ProvenanceQuery>,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    // Ensure no funds were sent with the message
    if !info.funds.is_empty() {
        return ContractError::FundsPresent.to_result();
    }
    let onboarding_cost = match msg.onboarding_cost {
        Some(cost) => Some(to_uint128(cost)?),
        None => None,
    };
    config_v2(deps.storage).save(&Configuration {
        contract_name: msg.contract_name.clone(),
        fee_collection_address: msg.fee_collection_address.map(Addr::unchecked),
        fee_percent: msg.fee_percent,
        // Always default to non-local if the value is not provided
        is_local: msg.is_local.unwrap_or(false),
        onboarding_cost,
        onboarding_denom: msg.onboarding_denom,
    })?;
    // Create a message that will bind a restricted name to the contract address.
    let bind_name_msg = bind_name(
        &msg.contract_name,
        env.contract.address,
        NameBinding::Restricted,
    )?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Ok(Response::new()
        .add_message(bind_name_msg)
        .add_attribute("action", "init"))
}
