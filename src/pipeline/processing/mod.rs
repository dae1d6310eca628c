pub mod display;
pub mod enrich;
pub mod normalize;
