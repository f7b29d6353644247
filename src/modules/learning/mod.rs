pub mod controller;
pub mod model;
pub mod prompt;
pub mod routes;
pub mod schema;
