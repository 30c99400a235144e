use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid base uri")]
    InvalidBaseUri {},
    #[error("Per address limit cannot be zero")]
    PerAddressLimitZero {},
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub token_address: Addr,
    pub base_uri: String,
    pub max_purchases_per_address: u32,
}

impl Config {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.base_uri.is_empty() {
            return Err(ConfigurationError::InvalidBaseUri {});
        }
        if self.max_purchases_per_address == 0 {
            return Err(ConfigurationError::PerAddressLimitZero {});
        }
        Ok(())
    }
}
