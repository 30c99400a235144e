use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use stadium_types::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Unknown stadium type")]
    UnknownStadiumType {},

    #[error("Stadiums sold out")]
    StadiumsSoldOut {},

    #[error("Max purchases reached")]
    MaxPurchasesReached {},

    #[error("No marketing stadiums left")]
    NoMarketingStadiumsLeft {},

    #[error("There is no balance to withdraw")]
    NoBalanceToWithdraw {},

    #[error("Invalid stadium price")]
    InvalidStadiumPrice {},

    #[error("Token id not minted")]
    TokenNotMinted {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
