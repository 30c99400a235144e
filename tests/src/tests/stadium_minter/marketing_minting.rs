use cw_multi_test::Executor;

use stadium_types::msg::QueryMsg;

use crate::helpers::mock_messages::stadium_minter_mock_messages::BASE_URI;
use crate::helpers::setup::setup;
use crate::helpers::utils::instantiate_contracts;

use stadium_minter::error::ContractError;
use stadium_minter::msg::ExecuteMsg;

#[test]
fn marketing_minting() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let token_code_id = res.token_code_id;
    let stadium_minter_code_id = res.stadium_minter_code_id;
    let mut app = res.app;

    let (_token_address, minter_address) = instantiate_contracts(
        &mut app,
        owner.clone(),
        token_code_id,
        stadium_minter_code_id,
    );

    let marketing_stadiums: u32 = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::MarketingStadiums {})
        .unwrap();

    for _ in 0..marketing_stadiums {
        app.execute_contract(
            owner.clone(),
            minter_address.clone(),
            &ExecuteMsg::MarketingMint {
                recipient: buyer.to_string(),
                stadium_type: 2,
            },
            &[],
        )
        .unwrap();
    }

    // Allotment is spent
    let error = app
        .execute_contract(
            owner.clone(),
            minter_address.clone(),
            &ExecuteMsg::MarketingMint {
                recipient: buyer.to_string(),
                stadium_type: 2,
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::NoMarketingStadiumsLeft {});

    let left_marketing: u32 = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::MarketingStadiums {})
        .unwrap();
    assert_eq!(left_marketing, 0);

    let balance: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &QueryMsg::BalanceOf {
                address: buyer.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance, marketing_stadiums);

    let quantity: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &QueryMsg::StadiumsQuantity { stadium_type: 2 },
        )
        .unwrap();
    let left: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &QueryMsg::StadiumsLeft { stadium_type: 2 },
        )
        .unwrap();
    assert_eq!(left, quantity - marketing_stadiums);

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, marketing_stadiums);

    // Marketing mints are not purchases
    let purchases: u32 = app
        .wrap()
        .query_wasm_smart(
            minter_address.clone(),
            &QueryMsg::AddressPurchases {
                address: buyer.to_string(),
            },
        )
        .unwrap();
    assert_eq!(purchases, 0);
}

#[test]
fn marketing_mint_token_uri() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let token_code_id = res.token_code_id;
    let stadium_minter_code_id = res.stadium_minter_code_id;
    let mut app = res.app;

    let (_token_address, minter_address) = instantiate_contracts(
        &mut app,
        owner.clone(),
        token_code_id,
        stadium_minter_code_id,
    );

    app.execute_contract(
        owner.clone(),
        minter_address.clone(),
        &ExecuteMsg::MarketingMint {
            recipient: buyer.to_string(),
            stadium_type: 2,
        },
        &[],
    )
    .unwrap();

    let token_uri: String = app
        .wrap()
        .query_wasm_smart(minter_address.clone(), &QueryMsg::TokenUri { token_id: 1 })
        .unwrap();
    assert_eq!(token_uri, format!("{}1.json", BASE_URI));
}

#[test]
fn marketing_mint_not_owner() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let token_code_id = res.token_code_id;
    let stadium_minter_code_id = res.stadium_minter_code_id;
    let mut app = res.app;

    let (_token_address, minter_address) = instantiate_contracts(
        &mut app,
        owner.clone(),
        token_code_id,
        stadium_minter_code_id,
    );

    let error = app
        .execute_contract(
            buyer.clone(),
            minter_address.clone(),
            &ExecuteMsg::MarketingMint {
                recipient: buyer.to_string(),
                stadium_type: 2,
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Unauthorized {});
}
