pub mod tutorial_repository;

pub use tutorial_repository::{MySqlTutorialRepository, TutorialRepository};
