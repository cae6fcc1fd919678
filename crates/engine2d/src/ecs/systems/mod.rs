//! Systems operating over the whole entity set

pub mod collision_system;

pub use collision_system::{Collider, CollisionDetector, CollisionPair};
