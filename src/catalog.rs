pub mod command;
pub mod controller;
pub mod factory;
pub mod shell;
pub mod view;
