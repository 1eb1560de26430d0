pub mod admin;
pub mod ai;
pub mod auth;
pub mod chapter;
pub mod character;
pub mod novel;
pub mod outline;
pub mod world_building;
