pub mod controller;
pub mod db;
pub mod listing;
pub mod registry;
pub mod settings;
pub mod stats;
