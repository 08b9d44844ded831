pub mod app_config;
pub mod catalog;
pub mod domain;
pub mod game;
pub mod geodesy;
pub mod selection;

mod geo_coordinate_deserializer;
