pub mod config;
pub mod msg;
pub mod stadium;

pub use config::{Config, ConfigurationError};
pub use msg::{InstantiateMsg, QueryMsg};
pub use stadium::{BuyerDetails, MintedStadium, StadiumDetails};
