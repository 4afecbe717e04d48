pub mod orders;
pub mod tutorials;
