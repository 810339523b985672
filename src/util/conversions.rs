use crate::core::error::ContractError;
use crate::util::constants::ONE_HUNDRED;
use cosmwasm_std::{Decimal, Uint128};

/// Renders a fractional Decimal as a human-readable percentage, ex: 0.05 -> "5".
pub fn to_percent(dec: Decimal) -> String {
    (ONE_HUNDRED * dec).to_string()
}

/// Converts the derived String into a Uint128, or returns a ContractError if a parsing failure
/// occurs.  Amounts travel over the wire as decimal digit strings and are only ever parsed here.
pub fn to_uint128(string: impl Into<String>) -> Result<Uint128, ContractError> {
    match string.into().parse::<u128>() {
        Ok(int) => Ok(Uint128::new(int)),
        Err(e) => Err(ContractError::ParseInt(e)),
    }
}

/// Formats a coin amount for event attributes, ex: "420/nhash".
pub fn to_coin_attribute(amount: impl Into<Uint128>, denom: impl AsRef<str>) -> String {
    format!("{}/{}", amount.into(), denom.as_ref())
}
