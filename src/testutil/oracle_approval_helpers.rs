use crate::core::error::ContractError;
use crate::execute::oracle_approval::{oracle_approval, OracleApprovalV1};
use crate::testutil::test_utilities::{MockOwnedDeps, DEFAULT_ORACLE_ADDRESS, DEFAULT_PAYABLE_UUID};
use cosmwasm_std::testing::mock_info;
use cosmwasm_std::{coin, MessageInfo, Response};
use provwasm_std::ProvenanceMsg;

pub struct TestOracleApproval {
    pub info: MessageInfo,
    pub oracle_approval: OracleApprovalV1,
}
impl TestOracleApproval {
    pub fn default_oracle_approval() -> OracleApprovalV1 {
        OracleApprovalV1 {
            payable_uuid: DEFAULT_PAYABLE_UUID.to_string(),
        }
    }

    pub fn default_with_sender(sender: &str) -> Self {
        TestOracleApproval {
            info: mock_info(sender, &[]),
            ..Default::default()
        }
    }

    pub fn default_with_uuid(payable_uuid: &str) -> Self {
        TestOracleApproval {
            oracle_approval: OracleApprovalV1 {
                payable_uuid: payable_uuid.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn default_with_coin(amount: u128, denom: &str) -> Self {
        TestOracleApproval {
            info: mock_info(DEFAULT_ORACLE_ADDRESS, &[coin(amount, denom)]),
            ..Default::default()
        }
    }
}
impl Default for TestOracleApproval {
    fn default() -> Self {
        TestOracleApproval {
            // The default oracle address is the oracle bound to the default registered payable
            info: mock_info(DEFAULT_ORACLE_ADDRESS, &[]),
            oracle_approval: TestOracleApproval::default_oracle_approval(),
        }
    }
}

pub fn test_oracle_approval(
    deps: &mut MockOwnedDeps,
    msg: TestOracleApproval,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    oracle_approval(deps.as_mut(), msg.info, msg.oracle_approval)
}
