pub mod dijkstra;
pub mod route;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
