pub mod floor;
pub mod project;
pub mod tower;
pub mod unit;
