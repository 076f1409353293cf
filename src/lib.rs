pub mod cli;
pub mod deform_map;
pub mod logger;
