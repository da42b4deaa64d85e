//! Connection hook for observing edges found during level generation

use crate::algebra::Word;

/// One product `parent * edge = child` found while building a level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection<'a> {
    /// Word the edge starts from
    pub parent: &'a Word,
    /// Level of the parent
    pub parent_level: usize,
    /// Product of parent and edge
    pub child: &'a Word,
    /// Level the child was first seen at
    pub child_level: usize,
    /// Generator used
    pub edge: &'a Word,
    /// Whether the child was discovered by this edge
    pub is_new: bool,
}

/// Receives every connection found by [`Levels`](super::Levels), in
/// generation order.
///
/// The only discovery that is never reported is the identity placed in
/// level zero.
pub trait Connector {
    /// Called once per (parent, generator) pair. Does nothing by default.
    fn connect(&mut self, _connection: &Connection<'_>) {}
}

/// Connector that ignores all connections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoConnections;

impl Connector for NoConnections {}

impl<F> Connector for F
where
    F: FnMut(&Connection<'_>),
{
    fn connect(&mut self, connection: &Connection<'_>) {
        self(connection)
    }
}
