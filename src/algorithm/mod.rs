mod dijkstra;
mod strategy;
mod yens;

pub use dijkstra::{shortest_path, Dijkstra};
pub use strategy::{EdgeFn, Strategy, WeightFn};
pub use yens::{k_shortest_paths, Yens};
