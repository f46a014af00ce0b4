pub mod class_names;
pub mod components;
pub mod config;
pub mod icons;
