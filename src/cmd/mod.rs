pub mod baseline;
pub mod evaluate;
pub mod generate;
