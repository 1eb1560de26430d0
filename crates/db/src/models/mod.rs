pub mod chapter;
pub mod character;
pub mod novel;
pub mod outline;
pub mod user;
pub mod world_building;
