use cosmwasm_std::StdError;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid fund types provided: {invalid_denoms:?}. Please provide coin of type {valid_denom}")]
    DenomMismatch {
        valid_denom: String,
        invalid_denoms: Vec<String>,
    },

    #[error("Payable with uuid [{payable_uuid}] has already been registered")]
    DuplicatePayable { payable_uuid: String },

    #[error("Scope [{scope_id}] already has a payable registered to it")]
    DuplicateRegistration { scope_id: String },

    #[error("Funds were provided for an operation that does not require them")]
    FundsPresent,

    #[error("Onboarding fee must be exactly {amount_needed}{denom}, but {amount_provided}{denom} was provided")]
    InsufficientOnboardingFee {
        amount_needed: u128,
        amount_provided: u128,
        denom: String,
    },

    #[error("Invalid amount for payable [{payable_uuid}]: {reason}")]
    InvalidAmount {
        payable_uuid: String,
        reason: String,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("Fee percent [{fee_percent}%] must not exceed 100%")]
    InvalidFeePercent { fee_percent: String },

    #[error("Invalid fields: {fields:?}")]
    InvalidFields { fields: Vec<String> },

    #[error("Payable [{payable_uuid}] cannot move from status [{current_status}] to [{target_status}]")]
    InvalidStateTransition {
        payable_uuid: String,
        current_status: String,
        target_status: String,
    },

    #[error("An onboarding cost of [{onboarding_cost}] was provided without an onboarding denom")]
    MissingOnboardingDenom { onboarding_cost: String },

    #[error("Payment too large. Total owed [{total_owed}], amount provided [{amount_provided}]")]
    OverPayment {
        total_owed: u128,
        amount_provided: u128,
    },

    #[error("Payable [{payable_uuid}] has already been paid in full")]
    PayableAlreadyPaid { payable_uuid: String },

    #[error("Payable [{payable_uuid}] is not approved for payment. Current status: [{current_status}]")]
    PayableNotApproved {
        payable_uuid: String,
        current_status: String,
    },

    #[error("Unable to locate target payable [{payable_uuid}]")]
    PayableNotFound { payable_uuid: String },

    #[error("Integer parsing error: {0}")]
    ParseInt(ParseIntError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),
}
impl ContractError {
    /// Allows ContractError instances to be generically returned as a Response in a fluent manner
    /// instead of wrapping in an Err() call, improving readability.
    /// Ex: return ContractError::Unauthorized.to_result();
    /// vs
    ///     return Err(ContractError::Unauthorized);
    pub fn to_result<T>(self) -> Result<T, ContractError> {
        Err(self)
    }
    /// Helper to map a Vec<&str> into an InvalidFields enum
    pub fn invalid_fields(fields: Vec<&str>) -> ContractError {
        ContractError::InvalidFields {
            fields: fields
                .into_iter()
                .map(|element| element.to_string())
                .collect(),
        }
    }
}
impl From<semver::Error> for ContractError {
    /// Enables SemVer issues to cast convert implicitly to contract error
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
