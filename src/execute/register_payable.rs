use crate::core::error::ContractError;
use crate::core::state::{
    config_read_v2, payable_storage, payable_storage_read, Configuration, Payable, PayableStatus,
    SCOPE_PAYABLE_INDEX,
};
use crate::util::constants::{
    ONBOARDING_FEE_COLLECTED_KEY, ONBOARDING_FEE_REFUNDED_KEY, ORACLE_ADDRESS_KEY,
    PAYABLE_REGISTERED_KEY, PAYABLE_STATUS_KEY, PAYABLE_TYPE_KEY, PAYABLE_UUID_KEY,
    REGISTERED_DENOM_KEY, SCOPE_ID_KEY, TOTAL_OWED_KEY,
};
use crate::util::conversions::to_coin_attribute;
use crate::util::provenance_util::{ProvenanceUtil, ProvenanceUtilImpl};
use cosmwasm_std::{
    coin, Addr, Attribute, BankMsg, CosmosMsg, DepsMut, MessageInfo, Response, Uint128,
};
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contains all relevant fields required in order to register a payable with the contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RegisterPayableV2 {
    pub payable_type: String,
    pub payable_uuid: String,
    pub scope_id: String,
    pub oracle_address: String,
    pub payable_denom: String,
    pub payable_total: Uint128,
}
impl RegisterPayableV2 {
    /// Produces the freshly-registered form of the payable.  Nothing has been paid yet, so the
    /// remaining amount starts at the total.
    pub fn to_payable(self, payee_address: Addr) -> Payable {
        Payable {
            payable_uuid: self.payable_uuid,
            scope_id: self.scope_id,
            oracle_address: Addr::unchecked(self.oracle_address),
            payable_type: self.payable_type,
            payable_denom: self.payable_denom,
            payable_total: self.payable_total,
            payable_remaining: self.payable_total,
            status: PayableStatus::Pending,
            payee_address,
        }
    }
}

/// Parent function path for the contract to register a payable.  Ensures that the ProvenanceUtilImpl
/// is the implementation used for this functionality outside of tests.
pub fn register_payable(
    deps: DepsMut<ProvenanceQuery>,
    info: MessageInfo,
    register: RegisterPayableV2,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    register_payable_with_util(deps, &ProvenanceUtilImpl, info, register)
}

/// Registers a payable with the contract with the following steps:
/// - Rejects zero totals and uuids or scopes that have already been used.
/// - Verifies that the related scope_id is owned by the sender.
/// - Charges the contract's configured onboarding fee, or refunds it if no collector exists.
/// - Stores the payable as pending, with the sender recorded as its payee.
/// - Creates a link in local storage for scope_id to payable_uuid lookups.
pub fn register_payable_with_util<T: ProvenanceUtil>(
    deps: DepsMut<ProvenanceQuery>,
    provenance_util: &T,
    info: MessageInfo,
    register: RegisterPayableV2,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    if register.payable_total.is_zero() {
        return ContractError::InvalidAmount {
            payable_uuid: register.payable_uuid,
            reason: "payable total must be greater than zero".to_string(),
        }
        .to_result();
    }
    if payable_storage_read(deps.storage)
        .may_load(register.payable_uuid.as_bytes())?
        .is_some()
    {
        return ContractError::DuplicatePayable {
            payable_uuid: register.payable_uuid,
        }
        .to_result();
    }
    if SCOPE_PAYABLE_INDEX
        .may_load(deps.storage, &register.scope_id)?
        .is_some()
    {
        return ContractError::DuplicateRegistration {
            scope_id: register.scope_id,
        }
        .to_result();
    }
    let state = config_read_v2(deps.storage).load()?;
    // Skip this step locally - creating a scope is an unnecessary piece of testing this
    if !state.is_local {
        provenance_util.verify_scope_owner(&deps.querier, &register.scope_id, &info.sender)?;
    }
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    let mut attributes: Vec<Attribute> = vec![];
    if let Some(onboarding_fee) = validate_onboarding_fee_get_message(&info, &state)? {
        messages.push(onboarding_fee.fee_message);
        attributes.push(onboarding_fee.fee_attribute);
    }
    // Ensure that this payable registration can be picked up by event key
    attributes.push(Attribute::new(
        PAYABLE_REGISTERED_KEY,
        &register.payable_uuid,
    ));
    attributes.push(Attribute::new(PAYABLE_TYPE_KEY, &register.payable_type));
    attributes.push(Attribute::new(PAYABLE_UUID_KEY, &register.payable_uuid));
    attributes.push(Attribute::new(ORACLE_ADDRESS_KEY, &register.oracle_address));
    attributes.push(Attribute::new(
        TOTAL_OWED_KEY,
        register.payable_total.to_string(),
    ));
    attributes.push(Attribute::new(
        REGISTERED_DENOM_KEY,
        &register.payable_denom,
    ));
    attributes.push(Attribute::new(SCOPE_ID_KEY, &register.scope_id));
    let payable = register.to_payable(info.sender);
    attributes.push(Attribute::new(PAYABLE_STATUS_KEY, payable.status.as_str()));
    payable_storage(deps.storage).save(payable.payable_uuid.as_bytes(), &payable)?;
    SCOPE_PAYABLE_INDEX.save(deps.storage, &payable.scope_id, &payable.payable_uuid)?;
    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}

/// The transfer produced by a successful onboarding fee charge, alongside the attribute that
/// describes where it went.
struct OnboardingFee {
    fee_message: CosmosMsg<ProvenanceMsg>,
    fee_attribute: Attribute,
}

/// Verifies the funds sent against the configured onboarding charge.  The charge must be paid
/// exactly.  It goes to the fee collector when one is configured, and straight back to the sender
/// otherwise.
fn validate_onboarding_fee_get_message(
    info: &MessageInfo,
    state: &Configuration,
) -> Result<Option<OnboardingFee>, ContractError> {
    let (onboarding_cost, onboarding_denom) = match state.onboarding_charge() {
        Some(charge) => charge,
        None => {
            if !info.funds.is_empty() {
                return ContractError::FundsPresent.to_result();
            }
            return Ok(None);
        }
    };
    // Local environments waive the charge when nothing is sent at all
    if state.is_local && info.funds.is_empty() {
        return Ok(None);
    }
    let amount_provided = info
        .funds
        .iter()
        .filter(|coin| coin.denom == onboarding_denom)
        .fold(0u128, |total, coin| total.saturating_add(coin.amount.u128()));
    let has_foreign_denom = info.funds.iter().any(|coin| coin.denom != onboarding_denom);
    if has_foreign_denom || amount_provided != onboarding_cost.u128() {
        return ContractError::InsufficientOnboardingFee {
            amount_needed: onboarding_cost.u128(),
            amount_provided,
            denom: onboarding_denom,
        }
        .to_result();
    }
    let (recipient, attribute_key) = match &state.fee_collection_address {
        Some(collector) => (collector.to_string(), ONBOARDING_FEE_COLLECTED_KEY),
        None => (info.sender.to_string(), ONBOARDING_FEE_REFUNDED_KEY),
    };
    Ok(Some(OnboardingFee {
        fee_message: CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient,
            amount: vec![coin(onboarding_cost.u128(), &onboarding_denom)],
        }),
        fee_attribute: Attribute::new(
            attribute_key,
            to_coin_attribute(onboarding_cost, &onboarding_denom),
        ),
    }))
}
