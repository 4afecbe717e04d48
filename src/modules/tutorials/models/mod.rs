mod tutorial;

pub use tutorial::{Tutorial, TutorialPayload};
