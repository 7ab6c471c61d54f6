//! In-memory store data the path engine consumes.
//!
//! Three providers, each holding one slice of store state:
//!
//! - [`StoreTopology`]: aisle roster, grid positions, and the undirected
//!   adjacency between aisles. Set up administratively, rarely changes.
//! - [`PromotionCatalog`]: promotion records with date windows; answers
//!   per-aisle active-promotion counts for a given day.
//! - [`SessionLocationLog`]: append-only location fixes per shopping
//!   session; answers "where was this session last seen".

mod promotions;
mod sessions;
mod topology;

pub use promotions::PromotionCatalog;
pub use sessions::SessionLocationLog;
pub use topology::StoreTopology;
