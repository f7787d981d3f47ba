//! Frame renderers

pub mod console;
