use crate::core::error::ContractError;
use crate::execute::make_payment::{make_payment, MakePaymentV1};
use crate::testutil::mock_provenance_util::MockProvenanceUtil;
use crate::testutil::oracle_approval_helpers::{test_oracle_approval, TestOracleApproval};
use crate::testutil::register_payable_helpers::{test_register_payable, TestRegisterPayable};
use crate::testutil::test_utilities::{
    MockOwnedDeps, DEFAULT_PAYABLE_DENOM, DEFAULT_PAYABLE_TOTAL, DEFAULT_PAYABLE_UUID,
    DEFAULT_PAYER_NAME,
};
use cosmwasm_std::testing::mock_info;
use cosmwasm_std::{coin, Coin, MessageInfo, Response};
use provwasm_std::ProvenanceMsg;

pub struct TestMakePayment {
    pub info: MessageInfo,
    pub make_payment: MakePaymentV1,
}
impl TestMakePayment {
    pub fn default_make_payment() -> MakePaymentV1 {
        MakePaymentV1 {
            payable_uuid: DEFAULT_PAYABLE_UUID.to_string(),
        }
    }
    pub fn default_full_sender(sender: &str, amount: u128, denom: &str) -> Self {
        TestMakePayment {
            info: mock_info(sender, &[coin(amount, denom)]),
            ..Default::default()
        }
    }
    pub fn default_with_coin(amount: u128, denom: &str) -> Self {
        Self::default_full_sender(DEFAULT_PAYER_NAME, amount, denom)
    }
    pub fn default_with_amount(amount: u128) -> Self {
        Self::default_full_sender(DEFAULT_PAYER_NAME, amount, DEFAULT_PAYABLE_DENOM)
    }
    pub fn default_with_funds(funds: &[Coin]) -> Self {
        TestMakePayment {
            info: mock_info(DEFAULT_PAYER_NAME, funds),
            ..Default::default()
        }
    }
    pub fn default_with_uuid(payable_uuid: &str) -> Self {
        TestMakePayment {
            make_payment: MakePaymentV1 {
                payable_uuid: payable_uuid.to_string(),
            },
            ..Default::default()
        }
    }
}
impl Default for TestMakePayment {
    fn default() -> Self {
        TestMakePayment {
            info: mock_info(
                DEFAULT_PAYER_NAME,
                &[coin(DEFAULT_PAYABLE_TOTAL, DEFAULT_PAYABLE_DENOM)],
            ),
            make_payment: TestMakePayment::default_make_payment(),
        }
    }
}

pub fn test_make_payment(
    deps: &mut MockOwnedDeps,
    msg: TestMakePayment,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    make_payment(deps.as_mut(), msg.info, msg.make_payment)
}

/// Registers the default payable and approves it with the default oracle, leaving it ready to
/// receive payments.
pub fn setup_approved_payable(deps: &mut MockOwnedDeps, provenance_util: &MockProvenanceUtil) {
    test_register_payable(deps, provenance_util, TestRegisterPayable::default())
        .expect("the default payable should register");
    test_oracle_approval(deps, TestOracleApproval::default())
        .expect("the default oracle should be able to approve the payable");
}
