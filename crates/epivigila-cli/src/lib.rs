//! CLI library components for the Epivigila reporting toolkit.

pub mod logging;
