mod changeset;
mod topology;

pub use changeset::Changeset;
pub use topology::{Edge, Network, NodeId, NodeIndex};
