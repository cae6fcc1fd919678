//! Collision detection system
//!
//! Brute-force AABB overlap test over every unordered pair of candidates.
//! Candidates that are inactive or not collidable are filtered here, so
//! callers can pass the full entity list. The detector keeps no state between
//! calls; pairs are reported in enumeration order `(i, j)` with `i < j`.

use crate::ecs::entity::EntityId;
use crate::ecs::registry::EntityRegistry;
use crate::foundation::math::Rect;

/// Anything the collision detector can test
pub trait Collider {
    /// Inactive colliders are ignored
    fn is_active(&self) -> bool;

    /// Non-collidable colliders are ignored
    fn is_collidable(&self) -> bool;

    /// Rectangle used for the overlap test
    fn collision_bounds(&self) -> Rect;

    /// Whether this collider takes part in detection at all
    fn is_candidate(&self) -> bool {
        self.is_active() && self.is_collidable()
    }
}

/// Unordered pair of overlapping colliders
///
/// `a` is always the one that appeared first in the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair<K = EntityId> {
    /// Earlier member
    pub a: K,
    /// Later member
    pub b: K,
}

impl<K: Copy + PartialEq> CollisionPair<K> {
    /// Create a pair
    pub const fn new(a: K, b: K) -> Self {
        Self { a, b }
    }

    /// Check whether `key` is either member
    pub fn involves(&self, key: K) -> bool {
        self.a == key || self.b == key
    }

    /// The member that is not `key`, if `key` is in the pair
    pub fn other(&self, key: K) -> Option<K> {
        if self.a == key {
            Some(self.b)
        } else if self.b == key {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Pairwise overlap detector
#[derive(Debug, Default, Clone)]
pub struct CollisionDetector {
    /// Log every detected pair at debug level
    pub debug_enabled: bool,
}

impl CollisionDetector {
    /// Create a detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Find every overlapping pair among `candidates`
    ///
    /// Lists shorter than two entries yield an empty result.
    pub fn get_collisions<K, C>(&self, candidates: &[(K, &C)]) -> Vec<CollisionPair<K>>
    where
        K: Copy + PartialEq + std::fmt::Debug,
        C: Collider + ?Sized,
    {
        let mut pairs = Vec::new();
        if candidates.len() < 2 {
            return pairs;
        }

        for (i, (key_a, a)) in candidates.iter().enumerate() {
            if !a.is_candidate() {
                continue;
            }
            let bounds_a = a.collision_bounds();

            for (key_b, b) in &candidates[i + 1..] {
                if !b.is_candidate() || key_a == key_b {
                    continue;
                }

                if bounds_a.intersects(&b.collision_bounds()) {
                    if self.debug_enabled {
                        log::debug!("Collision between {key_a:?} and {key_b:?}");
                    }
                    pairs.push(CollisionPair::new(*key_a, *key_b));
                }
            }
        }

        pairs
    }

    /// Find every overlapping pair in a registry, in insertion order
    pub fn collisions_in(&self, registry: &EntityRegistry) -> Vec<CollisionPair> {
        self.get_collisions(&registry.candidates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::entity::Entity;
    use crate::foundation::math::Vec2;
    use crate::test_support::texture;
    use std::collections::HashSet;

    struct Box2 {
        bounds: Rect,
        active: bool,
        collidable: bool,
    }

    impl Box2 {
        fn at(x: f32, y: f32, w: f32, h: f32) -> Self {
            Self { bounds: Rect::new(x, y, w, h), active: true, collidable: true }
        }
    }

    impl Collider for Box2 {
        fn is_active(&self) -> bool {
            self.active
        }

        fn is_collidable(&self) -> bool {
            self.collidable
        }

        fn collision_bounds(&self) -> Rect {
            self.bounds
        }
    }

    fn keyed(boxes: &[Box2]) -> Vec<(usize, &Box2)> {
        boxes.iter().enumerate().collect()
    }

    #[test]
    fn test_short_lists_yield_nothing() {
        let detector = CollisionDetector::new();
        let empty: Vec<(usize, &Box2)> = Vec::new();
        assert!(detector.get_collisions(&empty).is_empty());

        let one = [Box2::at(0.0, 0.0, 10.0, 10.0)];
        assert!(detector.get_collisions(&keyed(&one)).is_empty());
    }

    #[test]
    fn test_overlap_and_separation() {
        let detector = CollisionDetector::new();
        let boxes = [
            Box2::at(0.0, 0.0, 10.0, 10.0),
            Box2::at(5.0, 5.0, 10.0, 10.0),
            Box2::at(20.0, 20.0, 10.0, 10.0),
        ];

        let pairs = detector.get_collisions(&keyed(&boxes));
        assert_eq!(pairs, vec![CollisionPair::new(0, 1)]);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let detector = CollisionDetector::new();
        let boxes = [Box2::at(0.0, 0.0, 10.0, 10.0), Box2::at(10.0, 0.0, 10.0, 10.0)];
        assert!(detector.get_collisions(&keyed(&boxes)).is_empty());
    }

    #[test]
    fn test_inactive_and_non_collidable_are_filtered() {
        let detector = CollisionDetector::new();
        let mut boxes = [
            Box2::at(0.0, 0.0, 10.0, 10.0),
            Box2::at(1.0, 1.0, 10.0, 10.0),
            Box2::at(2.0, 2.0, 10.0, 10.0),
        ];
        boxes[1].active = false;
        boxes[2].collidable = false;

        assert!(detector.get_collisions(&keyed(&boxes)).is_empty());
    }

    #[test]
    fn test_pairs_are_unique_and_ordered() {
        let detector = CollisionDetector::new();
        let boxes: Vec<Box2> = (0..5).map(|i| Box2::at(i as f32, 0.0, 10.0, 10.0)).collect();

        let pairs = detector.get_collisions(&keyed(&boxes));
        assert_eq!(pairs.len(), 10);

        let mut seen = HashSet::new();
        for pair in &pairs {
            assert!(pair.a < pair.b);
            assert!(seen.insert((pair.a, pair.b)));
        }

        let expected: Vec<(usize, usize)> =
            (0..5).flat_map(|i| ((i + 1)..5).map(move |j| (i, j))).collect();
        let actual: Vec<(usize, usize)> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repeated_key_is_not_a_self_pair() {
        let detector = CollisionDetector::new();
        let b = Box2::at(0.0, 0.0, 10.0, 10.0);
        let candidates = [(7usize, &b), (7usize, &b)];
        assert!(detector.get_collisions(&candidates).is_empty());
    }

    #[test]
    fn test_pair_helpers() {
        let pair = CollisionPair::new(3, 9);
        assert!(pair.involves(3));
        assert!(pair.involves(9));
        assert!(!pair.involves(4));
        assert_eq!(pair.other(3), Some(9));
        assert_eq!(pair.other(9), Some(3));
        assert_eq!(pair.other(4), None);
    }

    #[test]
    fn test_collisions_in_registry_use_collision_box() {
        let mut registry = EntityRegistry::new();
        // Obstacle sprite 0..100 has collision box 30..70 x 20..80
        let rock = registry.add(Entity::obstacle("rock", texture(100, 100), Vec2::zeros())).unwrap();
        let near = registry.add(Entity::new("near", texture(10, 10), Vec2::new(15.0, 40.0))).unwrap();
        let inside = registry.add(Entity::new("inside", texture(10, 10), Vec2::new(45.0, 45.0))).unwrap();

        let detector = CollisionDetector { debug_enabled: true };
        let pairs = detector.collisions_in(&registry);

        assert_eq!(pairs, vec![CollisionPair::new(rock, inside)]);
        assert!(!pairs.iter().any(|p| p.involves(near)));
    }
}
