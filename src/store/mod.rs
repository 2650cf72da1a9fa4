pub mod team_store;
pub mod user_store;
