pub mod auth;
pub mod cpi;
pub mod guard;
pub mod math;
