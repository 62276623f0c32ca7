pub mod add;
pub mod distance;
pub mod health;
pub mod index;
