use crate::core::state::Configuration;
use cosmwasm_std::{Addr, Uint128};

/// The result of dividing a single payment between the fee collector and the payee.  The two
/// amounts always sum to the original payment.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeSplit {
    pub fee_amount: Uint128,
    pub net_amount: Uint128,
    pub fee_collector: Option<Addr>,
}

/// Computes floor(amount * fee_percent) as the fee when both a fee collector and a fee percent are
/// configured.  Otherwise, the full amount is net.
pub fn calculate_fee_split(amount: Uint128, config: &Configuration) -> FeeSplit {
    match (&config.fee_collection_address, config.fee_percent) {
        (Some(collector), Some(fee_percent)) => {
            let fee_amount = amount * fee_percent;
            FeeSplit {
                fee_amount,
                // fee_percent is capped at one, so the fee can never exceed the payment
                net_amount: amount - fee_amount,
                fee_collector: Some(collector.to_owned()),
            }
        }
        _ => FeeSplit {
            fee_amount: Uint128::zero(),
            net_amount: amount,
            fee_collector: None,
        },
    }
}
