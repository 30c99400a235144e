use cosmwasm_std::{Addr, Storage};
use cw_storage_plus::{Item, Map};

use stadium_types::{BuyerDetails, Config, MintedStadium, StadiumDetails};

pub const CONFIG: Item<Config> = Item::new("config");
// Stadium type index to catalog entry
pub const STADIUMS: Map<u32, StadiumDetails> = Map::new("stadiums");
// Token id to minted stadium
pub const MINTED_STADIUMS: Map<u32, MintedStadium> = Map::new("minted_stadiums");
// Total number of tokens minted, purchased and marketing combined
pub const TOTAL_MINTED: Item<u32> = Item::new("total_minted");
pub const MARKETING_STADIUMS_LEFT: Item<u32> = Item::new("marketing_stadiums_left");
// Address to owned token ids and purchase count
pub const BUYERS: Map<Addr, BuyerDetails> = Map::new("buyers");

pub fn last_token_id(store: &mut dyn Storage) -> u32 {
    let minted_count = TOTAL_MINTED.load(store).unwrap_or_default();
    minted_count
}
