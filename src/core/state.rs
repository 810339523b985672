use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use cosmwasm_std::{Addr, Decimal, Storage, Uint128};
use cosmwasm_storage::{
    bucket, bucket_read, singleton, singleton_read, Bucket, ReadonlyBucket, ReadonlySingleton,
    Singleton,
};
use cw_storage_plus::Map;

pub static CONFIG_KEY_V2: &[u8] = b"config_v2";
pub static PAYABLE_KEY: &[u8] = b"payable";

/// Links a scope id to the uuid of the payable registered against it. Only one payable may ever be
/// registered per scope.
pub const SCOPE_PAYABLE_INDEX: Map<&str, String> = Map::new("scope_payable_index");

/// Stores all protocol parameters of the contract. Modifiable only partially by migrations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Configuration {
    // Name of the contract, bound as a restricted name to the contract address
    pub contract_name: String,
    // The address that will collect onboarding fees and the fee cut of each payment
    pub fee_collection_address: Option<Addr>,
    // Percentage of each payment that is taken as fee
    pub fee_percent: Option<Decimal>,
    // Whether nor not the contract is running locally.  Skips some important checks if enabled, which expedites testing
    pub is_local: bool,
    // Cost to onboard each payable
    pub onboarding_cost: Option<Uint128>,
    // Coin type for onboarding charge
    pub onboarding_denom: Option<String>,
}
impl Configuration {
    /// Resolves the onboarding charge, if any.  A zero cost or a missing denom means registration
    /// is free.
    pub fn onboarding_charge(&self) -> Option<(Uint128, String)> {
        match (self.onboarding_cost, &self.onboarding_denom) {
            (Some(cost), Some(denom)) if !cost.is_zero() => Some((cost, denom.to_owned())),
            _ => None,
        }
    }
}

pub fn config_v2(storage: &mut dyn Storage) -> Singleton<Configuration> {
    singleton(storage, CONFIG_KEY_V2)
}

pub fn config_read_v2(storage: &dyn Storage) -> ReadonlySingleton<Configuration> {
    singleton_read(storage, CONFIG_KEY_V2)
}

/// The lifecycle position of a payable.  Payments are only accepted while Approved or
/// PartiallyPaid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayableStatus {
    Pending,
    Approved,
    Rejected,
    PartiallyPaid,
    Paid,
}
impl PayableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayableStatus::Pending => "pending",
            PayableStatus::Approved => "approved",
            PayableStatus::Rejected => "rejected",
            PayableStatus::PartiallyPaid => "partially_paid",
            PayableStatus::Paid => "paid",
        }
    }
}
impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Payable {
    // The unique identifier for the payable. Used for all requests that target a payable and the key to the Bucket
    pub payable_uuid: String,
    // The address of the scope the payable is attached to
    pub scope_id: String,
    // The address of the oracle that handles validation for this payable
    pub oracle_address: Addr,
    // The name of the asset classification for this payable
    pub payable_type: String,
    // The denomination the payable accepts for payment
    pub payable_denom: String,
    // The amount of payable_denom that the payable was originally created to reflect
    pub payable_total: Uint128,
    // The amount of payable_denom left unpaid on the payable
    pub payable_remaining: Uint128,
    pub status: PayableStatus,
    // The registrant, who receives each payment after the fee is removed
    pub payee_address: Addr,
}

pub fn payable_storage(storage: &mut dyn Storage) -> Bucket<Payable> {
    bucket(storage, PAYABLE_KEY)
}

pub fn payable_storage_read(storage: &dyn Storage) -> ReadonlyBucket<Payable> {
    bucket_read(storage, PAYABLE_KEY)
}
