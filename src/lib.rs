pub mod cards;
pub mod export;
pub mod filter;
pub mod provider;
pub mod roster;
pub mod state;
