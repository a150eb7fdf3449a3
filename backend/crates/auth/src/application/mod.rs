pub mod bootstrap;
pub mod config;
pub mod login;
pub mod update_profile;
pub mod verify_token;
