// Mon Oct 12 2026 - Alex

pub mod accessor;
pub mod builder;
pub mod cycles;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod path;
pub mod scc;

pub use accessor::{Accessor, CycleStep};
pub use builder::TypeGraphBuilder;
pub use cycles::{Cycle, CycleMap};
pub use edge::GraphEdge;
pub use error::GraphError;
pub use graph::TypeGraph;
pub use node::{GraphNode, NodeKind};
pub use path::{shortest_path, EdgePath};
pub use scc::strongly_connected_components;
