pub mod config;
pub mod consts;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod input;
pub mod io;
pub mod view;
