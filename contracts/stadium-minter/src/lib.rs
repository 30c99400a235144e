pub mod contract;
pub mod error;
pub mod instantiation;
pub mod msg;
pub mod state;
