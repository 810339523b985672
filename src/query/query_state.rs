use crate::core::error::ContractError;
use crate::core::state::config_read_v2;
use cosmwasm_std::{to_binary, Binary, Deps};
use provwasm_std::ProvenanceQuery;

pub fn query_state(deps: Deps<ProvenanceQuery>) -> Result<Binary, ContractError> {
    let state = config_read_v2(deps.storage).load()?;
    Ok(to_binary(&state)?)
}
