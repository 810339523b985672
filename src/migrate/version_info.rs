use crate::core::error::ContractError;
use cosmwasm_std::{StdResult, Storage};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn get_version_info(storage: &dyn Storage) -> StdResult<ContractVersion> {
    get_contract_version(storage)
}

/// Stamps the name and version of the running code into storage, returning what was stored.
pub fn migrate_version_info(storage: &mut dyn Storage) -> StdResult<ContractVersion> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

pub fn parse_sem_ver(version_info: &ContractVersion) -> Result<Version, ContractError> {
    Ok(version_info.version.parse::<Version>()?)
}
