//! Indexed hit-test registry
//!
//! Maps pick colliders to stable identifiers, independently of what is drawn.
//! A collider is placed by the world matrix of the visible object it was
//! registered with, so it follows that object around the scene.

use std::fmt;

use glam::Vec3;
use tw_core::{MeshId, ObjectId, Ray, Scene};

/// Opaque identifier handed out by [`Raycaster::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u32);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Nearest collider hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit<K> {
    /// Key the collider was registered with
    pub key: K,
    /// Identifier assigned at registration
    pub id: HandleId,
    /// Ray parameter of the hit
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    id: HandleId,
    object: ObjectId,
    collider: MeshId,
}

/// Collider registry keyed by `K`
#[derive(Debug, Clone)]
pub struct Raycaster<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Default for Raycaster<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Raycaster<K> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `collider`, placed by `object`'s world matrix, under `key`.
    ///
    /// Identifiers are assigned in registration order.
    pub fn register(&mut self, key: K, object: ObjectId, collider: MeshId) -> HandleId {
        let id = HandleId(self.entries.len() as u32);
        self.entries.push(Entry {
            key,
            id,
            object,
            collider,
        });
        id
    }

    /// Identifier registered for `key`
    pub fn id_of(&self, key: K) -> Option<HandleId> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.id)
    }

    /// Key registered under `id`
    pub fn key_of(&self, id: HandleId) -> Option<K> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.key)
    }

    /// Number of registered colliders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All collider hits, nearest first.
    ///
    /// Equal distances keep registration order.
    pub fn cast_ray_all(&self, scene: &Scene, ray: &Ray) -> Vec<RaycastHit<K>> {
        let mut hits: Vec<_> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let world = scene.world_matrix(entry.object);
                let hit = ray.intersect_mesh(scene.mesh(entry.collider), &world)?;
                Some(RaycastHit {
                    key: entry.key,
                    id: entry.id,
                    distance: hit.distance,
                    point: hit.point,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Nearest collider hit, if any
    pub fn cast_ray(&self, scene: &Scene, ray: &Ray) -> Option<RaycastHit<K>> {
        self.cast_ray_all(scene, ray).into_iter().next()
    }
}
