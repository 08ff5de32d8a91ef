pub mod config;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod optimizer;
pub mod phonetics;
pub mod scheme;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).
