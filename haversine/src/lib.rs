pub mod aggregate;
pub mod answers;
pub mod dataset;
pub mod distance;
pub mod earth;
pub mod haversine;
pub mod source;
