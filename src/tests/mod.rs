mod auth_tests;
mod team_store_tests;
mod validation_tests;
