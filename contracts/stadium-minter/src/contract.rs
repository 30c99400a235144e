#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    Uint128, WasmMsg,
};
use cw_utils::nonpayable;

use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use stadium_types::{BuyerDetails, Config, InstantiateMsg, MintedStadium, QueryMsg, StadiumDetails};

use crate::error::ContractError;
use crate::instantiation::default_instantiate;
use crate::msg::ExecuteMsg;
use crate::state::{
    last_token_id, BUYERS, CONFIG, MARKETING_STADIUMS_LEFT, MINTED_STADIUMS, STADIUMS, TOTAL_MINTED,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    default_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Purchase { stadium_type } => execute_purchase(deps, env, info, stadium_type),
        ExecuteMsg::MarketingMint {
            recipient,
            stadium_type,
        } => execute_marketing_mint(deps, env, info, recipient, stadium_type),
        ExecuteMsg::ChangeTokenAddress { address } => {
            execute_change_token_address(deps, env, info, address)
        }
        ExecuteMsg::SetMaxPurchasesPerAddress { limit } => {
            execute_set_max_purchases_per_address(deps, env, info, limit)
        }
        ExecuteMsg::ChangeStadiumPrice {
            stadium_type,
            price,
        } => execute_change_stadium_price(deps, env, info, stadium_type, price),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, env, info, base_uri),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    stadium_type: u32,
) -> Result<Response, ContractError> {
    // Payment is pulled from the token contract, not sent along
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let mut stadium = load_stadium(deps.as_ref(), stadium_type)?;
    if stadium.left == 0 {
        return Err(ContractError::StadiumsSoldOut {});
    }

    let mut buyer = BUYERS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    // Increment purchase count
    buyer.purchase_count += 1;
    // Check if address has reached the limit
    if buyer.purchase_count > config.max_purchases_per_address {
        return Err(ContractError::MaxPurchasesReached {});
    }

    let token_id = last_token_id(deps.storage) + 1;
    buyer.owned_stadiums.push(token_id);

    stadium.left -= 1;
    STADIUMS.save(deps.storage, stadium_type, &stadium)?;
    TOTAL_MINTED.update(deps.storage, |mut total_minted| -> StdResult<_> {
        total_minted += 1;
        Ok(total_minted)
    })?;
    BUYERS.save(deps.storage, info.sender.clone(), &buyer)?;
    MINTED_STADIUMS.save(
        deps.storage,
        token_id,
        &MintedStadium {
            owner: info.sender.clone(),
            stadium_type,
        },
    )?;

    // Pull the payment through the allowance set for this contract
    let payment_msg: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token_address.into_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.clone().into_string(),
            recipient: env.contract.address.into_string(),
            amount: stadium.price,
        })?,
        funds: vec![],
    }
    .into();

    let res = Response::new()
        .add_message(payment_msg)
        .add_attribute("action", "purchase")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("stadium_type", stadium_type.to_string())
        .add_attribute("price", stadium.price.to_string());

    Ok(res)
}

pub fn execute_marketing_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    stadium_type: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let marketing_left = MARKETING_STADIUMS_LEFT.load(deps.storage)?;
    if marketing_left == 0 {
        return Err(ContractError::NoMarketingStadiumsLeft {});
    }

    let mut stadium = load_stadium(deps.as_ref(), stadium_type)?;
    if stadium.left == 0 {
        return Err(ContractError::StadiumsSoldOut {});
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    let token_id = last_token_id(deps.storage) + 1;

    // Marketing mints bypass the purchase counter
    let mut buyer = BUYERS
        .may_load(deps.storage, recipient.clone())?
        .unwrap_or_default();
    buyer.owned_stadiums.push(token_id);

    stadium.left -= 1;
    STADIUMS.save(deps.storage, stadium_type, &stadium)?;
    MARKETING_STADIUMS_LEFT.save(deps.storage, &(marketing_left - 1))?;
    TOTAL_MINTED.update(deps.storage, |mut total_minted| -> StdResult<_> {
        total_minted += 1;
        Ok(total_minted)
    })?;
    BUYERS.save(deps.storage, recipient.clone(), &buyer)?;
    MINTED_STADIUMS.save(
        deps.storage,
        token_id,
        &MintedStadium {
            owner: recipient.clone(),
            stadium_type,
        },
    )?;

    let res = Response::new()
        .add_attribute("action", "marketing_mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("stadium_type", stadium_type.to_string())
        .add_attribute("recipient", recipient.into_string());

    Ok(res)
}

pub fn execute_change_token_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    let token_address = deps.api.addr_validate(&address)?;
    config.token_address = token_address.clone();

    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "change_token_address")
        .add_attribute("token_address", token_address.into_string());
    Ok(res)
}

pub fn execute_set_max_purchases_per_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    config.max_purchases_per_address = limit;
    // Rejects a zero limit
    config.check_integrity()?;

    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "set_max_purchases_per_address")
        .add_attribute("limit", limit.to_string());
    Ok(res)
}

pub fn execute_change_stadium_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    stadium_type: u32,
    price: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    if price == Uint128::new(0) {
        return Err(ContractError::InvalidStadiumPrice {});
    }
    let mut stadium = load_stadium(deps.as_ref(), stadium_type)?;
    stadium.price = price;

    STADIUMS.save(deps.storage, stadium_type, &stadium)?;

    let res = Response::new()
        .add_attribute("action", "change_stadium_price")
        .add_attribute("stadium_type", stadium_type.to_string())
        .add_attribute("price", price.to_string());
    Ok(res)
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    config.base_uri = base_uri.clone();
    // Rejects an empty uri
    config.check_integrity()?;

    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri);
    Ok(res)
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    // Check if sender is owner
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        config.token_address.clone().into_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.into_string(),
        },
    )?;
    if balance.balance.is_zero() {
        return Err(ContractError::NoBalanceToWithdraw {});
    }

    let withdraw_msg: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token_address.into_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: config.owner.into_string(),
            amount: balance.balance,
        })?,
        funds: vec![],
    }
    .into();

    let res = Response::new()
        .add_message(withdraw_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("amount", balance.balance.to_string());
    Ok(res)
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::MaxSupply {} => to_json_binary(&query_max_supply(deps, env)?),
        QueryMsg::AllStadiums {} => to_json_binary(&query_all_stadiums(deps, env)?),
        QueryMsg::StadiumsLeft { stadium_type } => {
            to_json_binary(&load_stadium(deps, stadium_type)?.left)
        }
        QueryMsg::StadiumsQuantity { stadium_type } => {
            to_json_binary(&load_stadium(deps, stadium_type)?.quantity)
        }
        QueryMsg::Price { stadium_type } => to_json_binary(&load_stadium(deps, stadium_type)?.price),
        QueryMsg::StadiumName { stadium_type } => {
            to_json_binary(&load_stadium(deps, stadium_type)?.name)
        }
        QueryMsg::TokenAddress {} => to_json_binary(&query_config(deps, env)?.token_address),
        QueryMsg::MaxPurchasesPerAddress {} => {
            to_json_binary(&query_config(deps, env)?.max_purchases_per_address)
        }
        QueryMsg::AddressPurchases { address } => {
            to_json_binary(&query_address_purchases(deps, env, address)?)
        }
        QueryMsg::BuyerDetails { address } => {
            to_json_binary(&query_buyer_details(deps, env, address)?)
        }
        QueryMsg::StadiumType { token_id } => {
            to_json_binary(&load_minted_stadium(deps, token_id)?.stadium_type)
        }
        QueryMsg::StadiumNameById { token_id } => {
            to_json_binary(&query_stadium_name_by_id(deps, env, token_id)?)
        }
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps, env)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, env, token_id)?),
        QueryMsg::BalanceOf { address } => to_json_binary(&query_balance_of(deps, env, address)?),
        QueryMsg::OwnerOf { token_id } => {
            to_json_binary(&load_minted_stadium(deps, token_id)?.owner)
        }
        QueryMsg::MarketingStadiums {} => {
            to_json_binary(&MARKETING_STADIUMS_LEFT.load(deps.storage)?)
        }
    }
}

fn load_stadium(deps: Deps, stadium_type: u32) -> Result<StadiumDetails, ContractError> {
    let stadium = STADIUMS
        .may_load(deps.storage, stadium_type)?
        .ok_or(ContractError::UnknownStadiumType {})?;
    Ok(stadium)
}

fn load_minted_stadium(deps: Deps, token_id: u32) -> Result<MintedStadium, ContractError> {
    let minted = MINTED_STADIUMS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotMinted {})?;
    Ok(minted)
}

fn query_config(deps: Deps, _env: Env) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_max_supply(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let mut max_supply: u32 = 0;
    for item in STADIUMS.range(deps.storage, None, None, Order::Ascending) {
        let (_key, stadium) = item?;
        max_supply += stadium.quantity;
    }
    Ok(max_supply)
}

fn query_all_stadiums(deps: Deps, _env: Env) -> Result<Vec<(u32, StadiumDetails)>, ContractError> {
    let mut stadiums: Vec<(u32, StadiumDetails)> = Vec::new();
    for item in STADIUMS.range(deps.storage, None, None, Order::Ascending) {
        let (key, stadium) = item?;
        stadiums.push((key, stadium));
    }
    Ok(stadiums)
}

fn query_address_purchases(deps: Deps, _env: Env, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let buyer = BUYERS.may_load(deps.storage, address)?.unwrap_or_default();
    Ok(buyer.purchase_count)
}

fn query_buyer_details(
    deps: Deps,
    _env: Env,
    address: String,
) -> Result<BuyerDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let buyer = BUYERS.load(deps.storage, address)?;
    Ok(buyer)
}

fn query_stadium_name_by_id(deps: Deps, _env: Env, token_id: u32) -> Result<String, ContractError> {
    let minted = load_minted_stadium(deps, token_id)?;
    let stadium = load_stadium(deps, minted.stadium_type)?;
    Ok(stadium.name)
}

fn query_total_supply(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    Ok(total_minted)
}

fn query_token_uri(deps: Deps, _env: Env, token_id: u32) -> Result<String, ContractError> {
    // Token must exist, the uri is recomputed from the current base
    let _minted = load_minted_stadium(deps, token_id)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(format!("{}{}.json", config.base_uri, token_id))
}

fn query_balance_of(deps: Deps, _env: Env, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let buyer = BUYERS.may_load(deps.storage, address)?.unwrap_or_default();
    Ok(buyer.owned_stadiums.len() as u32)
}
