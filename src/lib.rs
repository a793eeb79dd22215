//! K loopless shortest paths between two nodes of a weighted directed
//! network, by Yen's algorithm on top of Dijkstra.

pub mod algorithm;
pub mod component;
pub mod network;
pub mod utils;

pub use algorithm::{k_shortest_paths, shortest_path, Strategy, Yens};
pub use component::Path;
pub use network::{Edge, Network};
pub use utils::config::Config;
pub use utils::error::{Error, InputError, Result};
