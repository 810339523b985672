use crate::contract::instantiate;
use crate::core::error::ContractError;
use crate::core::msg::{ExecuteMsg, InitMsg};
use crate::testutil::mock_provenance_util::MockProvenanceUtil;
use cosmwasm_std::testing::{mock_env, mock_info, MockApi, MockStorage};
use cosmwasm_std::{Addr, Decimal, DepsMut, Env, MessageInfo, OwnedDeps, Response, Uint128};
use provwasm_mocks::ProvenanceMockQuerier;
use provwasm_std::{Party, PartyType, ProvenanceMsg, ProvenanceQuery, Scope};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, ProvenanceMockQuerier, ProvenanceQuery>;

pub const DEFAULT_INFO_NAME: &str = "admin";
pub const DEFAULT_PAYER_NAME: &str = "payer";
pub const DEFAULT_PAYABLE_TYPE: &str = "invoice";
pub const DEFAULT_CONTRACT_NAME: &str = "payables.registry";
pub const DEFAULT_ONBOARDING_COST: u128 = 100;
pub const DEFAULT_ONBOARDING_DENOM: &str = "nhash";
pub const DEFAULT_FEE_COLLECTION_ADDRESS: &str = "feebucket";
pub const DEFAULT_FEE_PERCENT: u64 = 5;
pub const DEFAULT_ORACLE_ADDRESS: &str = "matt";
pub const DEFAULT_PAYABLE_UUID: &str = "200425c6-83ab-11ec-a486-eb4f069082c5";
pub const DEFAULT_SCOPE_ID: &str = "scope1qpyq6g6j0tuprmyglw0hn2czfzsq6fcyl8";
pub const DEFAULT_PAYABLE_TOTAL: u128 = 1000;
pub const DEFAULT_PAYABLE_DENOM: &str = "uusd";

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub contract_name: String,
    pub fee_collection_address: Option<String>,
    pub fee_percent: Option<Decimal>,
    pub onboarding_cost: Option<String>,
    pub onboarding_denom: Option<String>,
    pub is_local: bool,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_INFO_NAME, &[]),
            contract_name: DEFAULT_CONTRACT_NAME.into(),
            fee_collection_address: Some(DEFAULT_FEE_COLLECTION_ADDRESS.into()),
            fee_percent: Some(Decimal::percent(DEFAULT_FEE_PERCENT)),
            onboarding_cost: Some(DEFAULT_ONBOARDING_COST.to_string()),
            onboarding_denom: Some(DEFAULT_ONBOARDING_DENOM.into()),
            is_local: false,
        }
    }
}
impl InstArgs {
    /// Instantiation args with no fees of any kind configured.
    pub fn fee_free() -> Self {
        InstArgs {
            fee_collection_address: None,
            fee_percent: None,
            onboarding_cost: None,
            onboarding_denom: None,
            ..Default::default()
        }
    }
}

pub fn test_instantiate(
    deps: DepsMut<ProvenanceQuery>,
    args: InstArgs,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            contract_name: args.contract_name,
            fee_collection_address: args.fee_collection_address,
            fee_percent: args.fee_percent,
            onboarding_cost: args.onboarding_cost,
            onboarding_denom: args.onboarding_denom,
            is_local: Some(args.is_local),
        },
    )
}

/// Instantiates the contract and mocks the default scope as owned by the default sender, which is
/// all a registration requires to succeed.
pub fn setup_test_suite(deps: &mut MockOwnedDeps, args: InstArgs) -> MockProvenanceUtil {
    test_instantiate(deps.as_mut(), args).expect("instantiation should succeed");
    deps.querier
        .with_scope(get_duped_scope(DEFAULT_SCOPE_ID, DEFAULT_INFO_NAME));
    MockProvenanceUtil::new()
}

pub fn default_register_payable() -> ExecuteMsg {
    ExecuteMsg::RegisterPayable {
        oracle_address: DEFAULT_ORACLE_ADDRESS.into(),
        payable_denom: DEFAULT_PAYABLE_DENOM.into(),
        payable_total: Uint128::new(DEFAULT_PAYABLE_TOTAL),
        payable_type: DEFAULT_PAYABLE_TYPE.into(),
        payable_uuid: DEFAULT_PAYABLE_UUID.into(),
        scope_id: DEFAULT_SCOPE_ID.into(),
    }
}

pub fn get_duped_scope(scope_id: &str, owner_address: &str) -> Scope {
    Scope {
        scope_id: scope_id.into(),
        specification_id: "duped_spec_id".into(),
        owners: vec![Party {
            address: Addr::unchecked(owner_address),
            role: PartyType::Owner,
        }],
        data_access: vec![],
        value_owner_address: Addr::unchecked(owner_address),
    }
}

/// Finds the value of the only attribute in the response with the given key.  Panics if the key is
/// missing or duplicated.
pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    let matches = response
        .attributes
        .iter()
        .filter(|attr| attr.key.as_str() == key)
        .collect::<Vec<_>>();
    assert_eq!(
        1,
        matches.len(),
        "expected exactly one attribute with key {} but found {}",
        key,
        matches.len(),
    );
    matches.first().unwrap().value.as_str()
}
