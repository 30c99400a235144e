use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, Contract, ContractWrapper};

pub struct TestAccounts {
    pub owner: Addr,
    pub buyer: Addr,
    pub collector: Addr,
}

pub struct SetupResponse {
    pub app: App,
    pub test_accounts: TestAccounts,
    pub stadium_minter_code_id: u64,
    pub token_code_id: u64,
}

pub fn stadium_minter_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stadium_minter::contract::execute,
        stadium_minter::contract::instantiate,
        stadium_minter::contract::query,
    );
    Box::new(contract)
}

pub fn token_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn setup() -> SetupResponse {
    let mut app = App::default();

    let owner = Addr::unchecked("owner");
    let buyer = Addr::unchecked("buyer");
    let collector = Addr::unchecked("collector");

    let stadium_minter_code_id = app.store_code(stadium_minter_contract());
    let token_code_id = app.store_code(token_contract());

    SetupResponse {
        app,
        test_accounts: TestAccounts {
            owner,
            buyer,
            collector,
        },
        stadium_minter_code_id,
        token_code_id,
    }
}
