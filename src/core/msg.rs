use crate::core::error::ContractError;
use crate::core::state::Configuration;
use crate::util::conversions::{to_percent, to_uint128};
use crate::util::traits::ValidatedMsg;
use cosmwasm_std::{Decimal, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A message sent to initialize the contract state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    // Name of the contract that is bound as a restricted name to the contract address
    pub contract_name: String,
    // The address that will collect onboarding fees and payment fees
    pub fee_collection_address: Option<String>,
    // Percentage of each payment that is taken as fee
    pub fee_percent: Option<Decimal>,
    // Cost to onboard each payable
    pub onboarding_cost: Option<String>,
    // Coin type for onboarding charge
    pub onboarding_denom: Option<String>,
    // Whether or not this contract should have assistance for local environments
    pub is_local: Option<bool>,
}
impl ValidatedMsg for InitMsg {
    fn validate(&self) -> Result<(), ContractError> {
        let mut invalid_fields: Vec<&str> = vec![];
        if self.contract_name.is_empty() {
            invalid_fields.push("contract_name");
        }
        collect_invalid_config_fields(
            &mut invalid_fields,
            &self.fee_collection_address,
            &self.onboarding_cost,
            &self.onboarding_denom,
        );
        if !invalid_fields.is_empty() {
            return ContractError::invalid_fields(invalid_fields).to_result();
        }
        validate_fee_percent(&self.fee_percent)?;
        if let (Some(onboarding_cost), None) = (&self.onboarding_cost, &self.onboarding_denom) {
            return ContractError::MissingOnboardingDenom {
                onboarding_cost: onboarding_cost.to_owned(),
            }
            .to_result();
        }
        Ok(())
    }
}

/// Contract execution routes.  Funds for registration and payment are supplied by the transaction,
/// not the message body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    RegisterPayable {
        oracle_address: String,
        payable_denom: String,
        payable_total: Uint128,
        payable_type: String,
        payable_uuid: String,
        scope_id: String,
    },
    OracleApproval {
        payable_uuid: String,
    },
    MakePayment {
        payable_uuid: String,
    },
}
impl ValidatedMsg for ExecuteMsg {
    fn validate(&self) -> Result<(), ContractError> {
        let mut invalid_fields: Vec<&str> = vec![];
        match self {
            ExecuteMsg::RegisterPayable {
                oracle_address,
                payable_denom,
                payable_type,
                payable_uuid,
                scope_id,
                ..
            } => {
                if oracle_address.is_empty() {
                    invalid_fields.push("oracle_address");
                }
                if payable_denom.is_empty() {
                    invalid_fields.push("payable_denom");
                }
                if payable_type.is_empty() {
                    invalid_fields.push("payable_type");
                }
                if payable_uuid.is_empty() {
                    invalid_fields.push("payable_uuid");
                }
                if scope_id.is_empty() {
                    invalid_fields.push("scope_id");
                }
            }
            ExecuteMsg::OracleApproval { payable_uuid } => {
                if payable_uuid.is_empty() {
                    invalid_fields.push("payable_uuid");
                }
            }
            ExecuteMsg::MakePayment { payable_uuid } => {
                if payable_uuid.is_empty() {
                    invalid_fields.push("payable_uuid");
                }
            }
        };
        if !invalid_fields.is_empty() {
            ContractError::invalid_fields(invalid_fields).to_result()
        } else {
            Ok(())
        }
    }
}

/// A message sent to query contract config state or registered payables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    QueryState {},
    QueryPayableByScopeId { scope_id: String },
    QueryPayableByUuid { payable_uuid: String },
}
impl ValidatedMsg for QueryMsg {
    fn validate(&self) -> Result<(), ContractError> {
        let mut invalid_fields: Vec<&str> = vec![];
        match self {
            QueryMsg::QueryState {} => (),
            QueryMsg::QueryPayableByScopeId { scope_id } => {
                if scope_id.is_empty() {
                    invalid_fields.push("scope_id");
                }
            }
            QueryMsg::QueryPayableByUuid { payable_uuid } => {
                if payable_uuid.is_empty() {
                    invalid_fields.push("payable_uuid");
                }
            }
        };
        if !invalid_fields.is_empty() {
            ContractError::invalid_fields(invalid_fields).to_result()
        } else {
            Ok(())
        }
    }
}

/// A type alias for contract state.
pub type QueryResponse = Configuration;

/// Migrate the contract.  Every field is optional, and an omitted field leaves the stored value
/// untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MigrateMsg {
    pub fee_collection_address: Option<String>,
    pub fee_percent: Option<Decimal>,
    pub is_local: Option<bool>,
    pub onboarding_cost: Option<String>,
    pub onboarding_denom: Option<String>,
}
impl ValidatedMsg for MigrateMsg {
    fn validate(&self) -> Result<(), ContractError> {
        let mut invalid_fields: Vec<&str> = vec![];
        collect_invalid_config_fields(
            &mut invalid_fields,
            &self.fee_collection_address,
            &self.onboarding_cost,
            &self.onboarding_denom,
        );
        if !invalid_fields.is_empty() {
            return ContractError::invalid_fields(invalid_fields).to_result();
        }
        validate_fee_percent(&self.fee_percent)
    }
}
impl MigrateMsg {
    /// Parses the string-encoded fields of the message into their native values.  The message
    /// should be validated before this is invoked.
    pub fn to_migrate_contract_v2(self) -> Result<MigrateContractV2, ContractError> {
        Ok(MigrateContractV2 {
            fee_collection_address: self.fee_collection_address,
            fee_percent: self.fee_percent,
            is_local: self.is_local,
            onboarding_cost: match self.onboarding_cost {
                Some(cost) => Some(to_uint128(cost)?),
                None => None,
            },
            onboarding_denom: self.onboarding_denom,
        })
    }
}

/// The parsed form of a MigrateMsg, with amounts converted to native integers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MigrateContractV2 {
    pub fee_collection_address: Option<String>,
    pub fee_percent: Option<Decimal>,
    pub is_local: Option<bool>,
    pub onboarding_cost: Option<Uint128>,
    pub onboarding_denom: Option<String>,
}

fn collect_invalid_config_fields<'a>(
    invalid_fields: &mut Vec<&'a str>,
    fee_collection_address: &Option<String>,
    onboarding_cost: &Option<String>,
    onboarding_denom: &Option<String>,
) {
    if matches!(fee_collection_address, Some(address) if address.is_empty()) {
        invalid_fields.push("fee_collection_address");
    }
    if let Some(cost) = onboarding_cost {
        if to_uint128(cost.as_str()).is_err() {
            invalid_fields.push("onboarding_cost");
        }
    }
    if matches!(onboarding_denom, Some(denom) if denom.is_empty()) {
        invalid_fields.push("onboarding_denom");
    }
}

fn validate_fee_percent(fee_percent: &Option<Decimal>) -> Result<(), ContractError> {
    match fee_percent {
        Some(percent) if *percent > Decimal::one() => ContractError::InvalidFeePercent {
            fee_percent: to_percent(*percent),
        }
        .to_result(),
        _ => Ok(()),
    }
}
