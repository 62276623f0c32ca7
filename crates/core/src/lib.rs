pub mod power;

pub use power::{power, power_value, TypeError};
