mod chapter_repo;
mod character_repo;
mod novel_repo;
mod outline_repo;
mod user_repo;
mod world_building_repo;

pub use chapter_repo::ChapterRepo;
pub use character_repo::CharacterRepo;
pub use novel_repo::NovelRepo;
pub use outline_repo::OutlineRepo;
pub use user_repo::UserRepo;
pub use world_building_repo::WorldBuildingRepo;
