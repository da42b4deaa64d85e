//! Spheres of a Cayley graph, generated level by level

mod cayley_graph;
mod connector;
mod generator;

pub use cayley_graph::{CayleyGraph, Vertex};
pub use connector::{Connection, Connector, NoConnections};
pub use generator::Levels;
