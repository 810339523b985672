use crate::core::error::ContractError;
use crate::core::msg::MigrateMsg;
use crate::core::state::{config_read_v2, config_v2, Configuration};
use crate::migrate::version_info::{
    get_version_info, migrate_version_info, parse_sem_ver, CONTRACT_NAME, CONTRACT_VERSION,
};
use crate::util::constants::{
    MIGRATION_CONTRACT_NAME, MIGRATION_CONTRACT_VERSION, MIGRATION_STATE_CHANGE_PREFIX,
};
use cosmwasm_std::{Addr, Attribute, DepsMut, Response, Storage};
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};
use semver::Version;

/// Applies a partial configuration update and advances the stored contract version.  Fields
/// omitted from the message keep their stored values.  The message should be validated before this
/// is invoked.
pub fn migrate_contract(
    deps: DepsMut<ProvenanceQuery>,
    msg: MigrateMsg,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    check_valid_migration_versioning(deps.storage)?;
    let migration = msg.to_migrate_contract_v2()?;
    let mut config = config_read_v2(deps.storage).load()?;
    let mut attributes: Vec<Attribute> = vec![];
    if let Some(fee_collection_address) = migration.fee_collection_address {
        attributes.push(state_change_attribute(
            "fee_collection_address",
            &fee_collection_address,
        ));
        config.fee_collection_address = Some(Addr::unchecked(fee_collection_address));
    }
    if let Some(fee_percent) = migration.fee_percent {
        attributes.push(state_change_attribute(
            "fee_percent",
            fee_percent.to_string(),
        ));
        config.fee_percent = Some(fee_percent);
    }
    if let Some(is_local) = migration.is_local {
        attributes.push(state_change_attribute("is_local", is_local.to_string()));
        config.is_local = is_local;
    }
    if let Some(onboarding_cost) = migration.onboarding_cost {
        attributes.push(state_change_attribute(
            "onboarding_cost",
            onboarding_cost.to_string(),
        ));
        config.onboarding_cost = Some(onboarding_cost);
    }
    if let Some(onboarding_denom) = migration.onboarding_denom {
        attributes.push(state_change_attribute("onboarding_denom", &onboarding_denom));
        config.onboarding_denom = Some(onboarding_denom);
    }
    check_onboarding_pairing(&config)?;
    config_v2(deps.storage).save(&config)?;
    // Ensure that the new contract version is stored for future migrations to reference
    let new_version_info = migrate_version_info(deps.storage)?;
    Ok(Response::new()
        .add_attribute(MIGRATION_CONTRACT_NAME, &new_version_info.contract)
        .add_attribute(MIGRATION_CONTRACT_VERSION, &new_version_info.version)
        .add_attributes(attributes))
}

fn state_change_attribute(field_name: &str, value: impl Into<String>) -> Attribute {
    Attribute::new(
        format!("{}{}", MIGRATION_STATE_CHANGE_PREFIX, field_name),
        value,
    )
}

/// A stored onboarding cost is meaningless without a denom to charge it in.
fn check_onboarding_pairing(config: &Configuration) -> Result<(), ContractError> {
    if let (Some(onboarding_cost), None) = (config.onboarding_cost, &config.onboarding_denom) {
        return ContractError::MissingOnboardingDenom {
            onboarding_cost: onboarding_cost.to_string(),
        }
        .to_result();
    }
    Ok(())
}

fn check_valid_migration_versioning(storage: &mut dyn Storage) -> Result<(), ContractError> {
    let stored_version_info = get_version_info(storage)?;
    // If the contract name has changed or another contract attempts to overwrite this one, this
    // check will reject the change
    if CONTRACT_NAME != stored_version_info.contract {
        return ContractError::InvalidContractName {
            current_contract: stored_version_info.contract,
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_result();
    }
    let contract_version = CONTRACT_VERSION.parse::<Version>()?;
    // If the stored version in the contract is greater than the derived version from the package,
    // then this migration is effectively a downgrade and should not be committed
    if parse_sem_ver(&stored_version_info)? > contract_version {
        return ContractError::InvalidContractVersion {
            current_version: stored_version_info.version,
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_result();
    }
    Ok(())
}
