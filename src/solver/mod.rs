//! Shortest-ladder solver
//!
//! Computes minimal-length ladders between dictionary words.

mod bfs;

pub use bfs::{shortest_path, shortest_path_bounded};
