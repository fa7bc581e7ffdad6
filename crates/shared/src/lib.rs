//! Navigation core for the Sector 66 property viewer. Pure and synchronous,
//! no rendering concerns. The frontend crate owns routing and the DOM.

pub mod assets;
pub mod carousel;
pub mod models;
pub mod nav;
pub mod registry;
