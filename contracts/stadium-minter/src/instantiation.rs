use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use stadium_types::{Config, InstantiateMsg, StadiumDetails};

use crate::error::ContractError;
use crate::state::{CONFIG, MARKETING_STADIUMS_LEFT, STADIUMS, TOTAL_MINTED};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:stadium-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_MAX_PURCHASES_PER_ADDRESS: u32 = 5;
pub const MARKETING_ALLOTMENT: u32 = 50;

// (name, quantity, price in token base units)
pub const STADIUM_CATALOG: [(&str, u32, u128); 3] = [
    ("Classic", 7500, 600_000),
    ("Deluxe", 5000, 1_200_000),
    ("Legendary", 2500, 1_900_000),
];

pub fn default_instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // Set contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Payment is pulled through the token contract, never sent along
    nonpayable(&info)?;

    let token_address = deps.api.addr_validate(&msg.token_address)?;

    let config = Config {
        owner: info.sender.clone(),
        token_address,
        base_uri: msg.base_uri,
        max_purchases_per_address: DEFAULT_MAX_PURCHASES_PER_ADDRESS,
    };
    // Check config integrity
    config.check_integrity()?;
    CONFIG.save(deps.storage, &config)?;

    // Seed the catalog
    for (index, (name, quantity, price)) in STADIUM_CATALOG.iter().enumerate() {
        let stadium = StadiumDetails {
            name: name.to_string(),
            quantity: *quantity,
            left: *quantity,
            price: Uint128::new(*price),
        };
        STADIUMS.save(deps.storage, index as u32, &stadium)?;
    }

    TOTAL_MINTED.save(deps.storage, &0)?;
    MARKETING_STADIUMS_LEFT.save(deps.storage, &MARKETING_ALLOTMENT)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner.into_string())
        .add_attribute("token_address", config.token_address.into_string());

    Ok(res)
}
