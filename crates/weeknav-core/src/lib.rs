pub mod config;
pub mod logging;

pub mod identity;
pub mod navigator;
pub mod probe;
pub mod range;
pub mod site;
