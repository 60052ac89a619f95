// JSON HTTP surface over the recipe finder

pub mod handlers;
pub mod models;
pub mod routes;
