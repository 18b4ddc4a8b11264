//! `dv-graph` — road-graph document, loading, and nearest-node resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `GraphDocument`, `GraphDocumentBuilder`, `Node`, `Segment` |
//! | [`loader`]   | `parse_graph`, `load_graph_file`                           |
//! | [`resolver`] | `NodeResolver` trait, `LinearScanResolver`, `SpatialIndexResolver` |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Node` and `Segment`.   |

pub mod error;
pub mod graph;
pub mod loader;
pub mod resolver;


pub use error::{GraphError, GraphResult};
pub use graph::{GraphDocument, GraphDocumentBuilder, Node, Segment};
pub use loader::{load_graph_file, parse_graph};
pub use resolver::{LinearScanResolver, NodeResolver, SpatialIndexResolver};
