pub mod compute;
pub mod display;
pub mod entities;
pub mod grid;
pub mod input;
pub mod timers;
