pub mod asset;
pub mod chart;
pub mod forecast;
pub mod indicator;
pub mod market;
pub mod quote;

pub use asset::*;
pub use chart::*;
pub use forecast::*;
pub use indicator::*;
pub use market::*;
pub use quote::*;
