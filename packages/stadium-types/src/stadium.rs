use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct StadiumDetails {
    pub name: String,
    // Fixed at instantiation
    pub quantity: u32,
    pub left: u32,
    pub price: Uint128,
}

#[cw_serde]
pub struct MintedStadium {
    pub owner: Addr,
    pub stadium_type: u32,
}

// Purchase count excludes marketing mints, owned_stadiums includes them
#[derive(Default)]
#[cw_serde]
pub struct BuyerDetails {
    pub owned_stadiums: Vec<u32>,
    pub purchase_count: u32,
}
