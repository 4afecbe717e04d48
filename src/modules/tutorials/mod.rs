// Tutorials module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Tutorial, TutorialPayload};
pub use repositories::{MySqlTutorialRepository, TutorialRepository};
pub use services::TutorialService;
