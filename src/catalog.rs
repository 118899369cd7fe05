pub mod command;
pub mod contract;
pub mod dispatcher;
pub mod domain;
pub mod factory;
pub mod fault;
pub mod store;
