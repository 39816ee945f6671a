pub mod database;
pub mod id_generator;
pub mod repositories;
