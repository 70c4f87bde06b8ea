//! Core-Domänentypen: Features, Geometrie-Transformation, Store, Bewegungs-Beschränkung.

pub mod constraint;
pub mod feature;
pub mod store;
pub mod transform;

pub use constraint::{MovementBounds, MovementConstraint, Unconstrained, WorldBoundsConstraint};
pub use feature::{CoordPath, Feature, FeatureId, FeatureKind, Geometry, Properties, Shape};
pub use store::FeatureStore;
pub use transform::translate;
