pub mod assets;
pub mod health;
