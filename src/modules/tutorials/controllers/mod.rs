pub mod tutorial_controller;
