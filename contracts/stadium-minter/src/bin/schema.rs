use cosmwasm_schema::write_api;

use stadium_minter::msg::ExecuteMsg;

use stadium_types::msg::{InstantiateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
    }
}
