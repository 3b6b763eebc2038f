pub mod verlet;
pub mod body;
pub mod terrain;
