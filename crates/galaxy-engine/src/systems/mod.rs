pub mod hud;
pub mod info;
pub mod picking;
