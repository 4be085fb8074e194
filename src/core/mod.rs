pub mod naming;
pub mod store;
