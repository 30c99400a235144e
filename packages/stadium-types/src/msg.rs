use crate::config::Config;
use crate::stadium::{BuyerDetails, StadiumDetails};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub token_address: String,
    pub base_uri: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(u32)]
    MaxSupply {},
    #[returns(Vec<(u32, StadiumDetails)>)]
    AllStadiums {},
    #[returns(u32)]
    StadiumsLeft { stadium_type: u32 },
    #[returns(u32)]
    StadiumsQuantity { stadium_type: u32 },
    #[returns(Uint128)]
    Price { stadium_type: u32 },
    #[returns(String)]
    StadiumName { stadium_type: u32 },
    #[returns(Addr)]
    TokenAddress {},
    #[returns(u32)]
    MaxPurchasesPerAddress {},
    #[returns(u32)]
    AddressPurchases { address: String },
    #[returns(BuyerDetails)]
    BuyerDetails { address: String },
    #[returns(u32)]
    StadiumType { token_id: u32 },
    #[returns(String)]
    StadiumNameById { token_id: u32 },
    #[returns(u32)]
    TotalSupply {},
    #[returns(String)]
    TokenUri { token_id: u32 },
    #[returns(u32)]
    BalanceOf { address: String },
    #[returns(Addr)]
    OwnerOf { token_id: u32 },
    #[returns(u32)]
    MarketingStadiums {},
}
