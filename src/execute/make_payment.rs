use crate::core::error::ContractError;
use crate::core::state::{config_read_v2, payable_storage, PayableStatus};
use crate::util::constants::{
    FEE_AMOUNT_KEY, NET_AMOUNT_KEY, ORACLE_ADDRESS_KEY, PAYABLE_STATUS_KEY, PAYABLE_TYPE_KEY,
    PAYABLE_UUID_KEY, PAYEE_KEY, PAYER_KEY, PAYMENT_AMOUNT_KEY, PAYMENT_MADE_KEY,
    TOTAL_REMAINING_KEY,
};
use crate::util::fees::calculate_fee_split;
use cosmwasm_std::{
    coin, Attribute, BankMsg, CosmosMsg, DepsMut, MessageInfo, Response, StdError, Uint128,
};
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MakePaymentV1 {
    pub payable_uuid: String,
}

/// Applies the attached funds as a payment against an approved payable.  The configured fee is cut
/// from the payment and sent to the fee collector, and the rest is forwarded to the payee.
pub fn make_payment(
    deps: DepsMut<ProvenanceQuery>,
    info: MessageInfo,
    make_payment: MakePaymentV1,
) -> Result<Response<ProvenanceMsg>, ContractError> {
    let state = config_read_v2(deps.storage).load()?;
    let mut payables_bucket = payable_storage(deps.storage);
    let mut target_payable = match payables_bucket.may_load(make_payment.payable_uuid.as_bytes())? {
        Some(payable) => payable,
        None => {
            return ContractError::PayableNotFound {
                payable_uuid: make_payment.payable_uuid,
            }
            .to_result();
        }
    };
    match target_payable.status {
        PayableStatus::Approved | PayableStatus::PartiallyPaid => {}
        PayableStatus::Paid => {
            return ContractError::PayableAlreadyPaid {
                payable_uuid: target_payable.payable_uuid,
            }
            .to_result();
        }
        PayableStatus::Pending | PayableStatus::Rejected => {
            return ContractError::PayableNotApproved {
                payable_uuid: target_payable.payable_uuid,
                current_status: target_payable.status.to_string(),
            }
            .to_result();
        }
    }
    let invalid_denoms = info
        .funds
        .iter()
        .filter(|coin| coin.denom != target_payable.payable_denom)
        .map(|coin| coin.denom.clone())
        .collect::<Vec<String>>();
    if !invalid_denoms.is_empty() {
        return ContractError::DenomMismatch {
            valid_denom: target_payable.payable_denom,
            invalid_denoms,
        }
        .to_result();
    }
    // Every coin is now known to be of the payable's denom, so they all count toward the payment
    let mut payment_amount = Uint128::zero();
    for fund in info.funds.iter() {
        payment_amount = payment_amount
            .checked_add(fund.amount)
            .map_err(StdError::from)?;
    }
    if payment_amount.is_zero() {
        return ContractError::InvalidAmount {
            payable_uuid: target_payable.payable_uuid,
            reason: "payment must include a non-zero amount of the payable denom".to_string(),
        }
        .to_result();
    }
    if payment_amount > target_payable.payable_remaining {
        return ContractError::OverPayment {
            total_owed: target_payable.payable_remaining.u128(),
            amount_provided: payment_amount.u128(),
        }
        .to_result();
    }
    let fee_split = calculate_fee_split(payment_amount, &state);
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    // Zero-amount sends are rejected by the bank module, so only route non-empty portions
    if !fee_split.net_amount.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: target_payable.payee_address.to_string(),
            amount: vec![coin(
                fee_split.net_amount.u128(),
                &target_payable.payable_denom,
            )],
        }));
    }
    if let Some(fee_collector) = &fee_split.fee_collector {
        if !fee_split.fee_amount.is_zero() {
            messages.push(CosmosMsg::Bank(BankMsg::Send {
                to_address: fee_collector.to_string(),
                amount: vec![coin(
                    fee_split.fee_amount.u128(),
                    &target_payable.payable_denom,
                )],
            }));
        }
    }
    target_payable.payable_remaining = target_payable
        .payable_remaining
        .checked_sub(payment_amount)
        .map_err(StdError::from)?;
    target_payable.status = if target_payable.payable_remaining.is_zero() {
        PayableStatus::Paid
    } else {
        PayableStatus::PartiallyPaid
    };
    payables_bucket.save(target_payable.payable_uuid.as_bytes(), &target_payable)?;
    let attributes = vec![
        Attribute::new(PAYMENT_MADE_KEY, &target_payable.payable_uuid),
        Attribute::new(PAYABLE_TYPE_KEY, &target_payable.payable_type),
        Attribute::new(PAYABLE_UUID_KEY, &target_payable.payable_uuid),
        Attribute::new(ORACLE_ADDRESS_KEY, target_payable.oracle_address.as_str()),
        Attribute::new(PAYMENT_AMOUNT_KEY, payment_amount.to_string()),
        Attribute::new(FEE_AMOUNT_KEY, fee_split.fee_amount.to_string()),
        Attribute::new(NET_AMOUNT_KEY, fee_split.net_amount.to_string()),
        Attribute::new(
            TOTAL_REMAINING_KEY,
            target_payable.payable_remaining.to_string(),
        ),
        Attribute::new(PAYABLE_STATUS_KEY, target_payable.status.as_str()),
        Attribute::new(PAYER_KEY, info.sender.as_str()),
        Attribute::new(PAYEE_KEY, target_payable.payee_address.as_str()),
    ];
    Ok(Response::new()
        .add_messages(messages)
        .add_attributes(attributes))
}
