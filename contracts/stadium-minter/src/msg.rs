use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub enum ExecuteMsg {
    Purchase {
        stadium_type: u32,
    },
    MarketingMint {
        recipient: String,
        stadium_type: u32,
    },
    ChangeTokenAddress {
        address: String,
    },
    SetMaxPurchasesPerAddress {
        limit: u32,
    },
    ChangeStadiumPrice {
        stadium_type: u32,
        price: Uint128,
    },
    SetBaseUri {
        base_uri: String,
    },
    Withdraw {},
}
