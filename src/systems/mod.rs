pub mod audio;
pub mod camera;
pub mod levels;
pub mod player;
pub mod startup;
pub mod ui;
