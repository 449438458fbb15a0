//! Light collections
//!
//! Three ordered collections, one per light kind. Order matters: it is the
//! upload order, and it decides which lights are dropped when the shader's
//! slot array is full. Indices handed to callers are 1-based positions and
//! shift down when an earlier entry is removed.

use thiserror::Error;

use crate::core::config::TorchDefaults;
use crate::foundation::math::{Vec2, Vec3};
use crate::render::MAX_LIGHTS;
use super::light::{Explosion, StaticLight, Torch, TorchOptions};

/// Errors from collection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The static collection already holds its maximum number of lights
    #[error("Static light capacity exceeded: {count}/{capacity} lights")]
    CapacityExceeded {
        /// Lights currently stored
        count: usize,
        /// Maximum number of static lights
        capacity: usize,
    },

    /// A 1-based index outside the collection
    #[error("Invalid light index {index} (collection holds {len})")]
    InvalidIndex {
        /// Requested 1-based index
        index: usize,
        /// Current collection length
        len: usize,
    },
}

/// Convert a 1-based index into a vector position
fn position_of(index: usize, len: usize) -> Result<usize, StoreError> {
    if index == 0 || index > len {
        Err(StoreError::InvalidIndex { index, len })
    } else {
        Ok(index - 1)
    }
}

/// Ordered storage for static lights, explosions and torches
#[derive(Debug, Clone, Default)]
pub struct LightStore {
    static_lights: Vec<StaticLight>,
    explosions: Vec<Explosion>,
    torches: Vec<Torch>,
}

impl LightStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a static light and return its 1-based index
    ///
    /// The static collection holds at most [`MAX_LIGHTS`] entries on its own;
    /// the budget shared with other kinds is only applied at upload time.
    pub fn add_static(&mut self, light: StaticLight) -> Result<usize, StoreError> {
        if self.static_lights.len() >= MAX_LIGHTS {
            return Err(StoreError::CapacityExceeded {
                count: self.static_lights.len(),
                capacity: MAX_LIGHTS,
            });
        }
        self.static_lights.push(light);
        Ok(self.static_lights.len())
    }

    /// Remove the static light at a 1-based index
    pub fn remove_static(&mut self, index: usize) -> Result<StaticLight, StoreError> {
        let at = position_of(index, self.static_lights.len())?;
        Ok(self.static_lights.remove(at))
    }

    /// Swap in a whole new static collection
    ///
    /// An empty list leaves the current lights untouched and returns `false`.
    /// Lights beyond [`MAX_LIGHTS`] are dropped.
    pub fn replace_all_static(&mut self, mut lights: Vec<StaticLight>) -> bool {
        if lights.is_empty() {
            return false;
        }
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "LightStore: replacement list has {} static lights, keeping the first {}",
                lights.len(),
                MAX_LIGHTS
            );
            lights.truncate(MAX_LIGHTS);
        }
        self.static_lights = lights;
        true
    }

    /// Append an explosion built from raw, unclamped inputs
    pub fn spawn_explosion(&mut self, position: Vec2, intensity_percent: f32, duration: f32, diffuse: Vec3) {
        self.explosions.push(Explosion::new(position, intensity_percent, duration, diffuse));
    }

    /// Append a torch built from raw, unclamped inputs and return its 1-based index
    pub fn spawn_torch(
        &mut self,
        position: Vec2,
        intensity_percent: f32,
        duration: f32,
        options: &TorchOptions,
        defaults: &TorchDefaults,
    ) -> usize {
        self.torches.push(Torch::new(position, intensity_percent, duration, options, defaults));
        self.torches.len()
    }

    /// Remove the torch at a 1-based index
    pub fn remove_torch(&mut self, index: usize) -> Result<Torch, StoreError> {
        let at = position_of(index, self.torches.len())?;
        Ok(self.torches.remove(at))
    }

    /// Age every explosion by `dt` and drop the expired ones
    ///
    /// Returns how many were dropped.
    pub fn age_explosions(&mut self, dt: f32) -> usize {
        let before = self.explosions.len();
        for explosion in &mut self.explosions {
            explosion.advance(dt);
        }
        self.explosions.retain(|explosion| !explosion.is_expired());
        before - self.explosions.len()
    }

    /// Age every torch by `dt`, applying the freeze rule
    pub fn age_torches(&mut self, dt: f32) {
        for torch in &mut self.torches {
            torch.advance(dt);
        }
    }

    /// Static lights in upload order
    pub fn static_lights(&self) -> &[StaticLight] {
        &self.static_lights
    }

    /// Mutable access to the static light at a 1-based index
    pub fn static_light_mut(&mut self, index: usize) -> Option<&mut StaticLight> {
        index.checked_sub(1).and_then(|at| self.static_lights.get_mut(at))
    }

    /// Live explosions, oldest first
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Torches in upload order
    pub fn torches(&self) -> &[Torch] {
        &self.torches
    }

    /// Mutable access to the torch at a 1-based index
    pub fn torch_mut(&mut self, index: usize) -> Option<&mut Torch> {
        index.checked_sub(1).and_then(|at| self.torches.get_mut(at))
    }

    /// Mutable access to every torch, in upload order
    pub fn torches_mut(&mut self) -> std::slice::IterMut<'_, Torch> {
        self.torches.iter_mut()
    }

    /// Total stored lights of every kind
    pub fn len(&self) -> usize {
        self.static_lights.len() + self.explosions.len() + self.torches.len()
    }

    /// Whether no light of any kind is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every light
    pub fn clear(&mut self) {
        self.static_lights.clear();
        self.explosions.clear();
        self.torches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::WHITE;

    fn light(x: f32) -> StaticLight {
        StaticLight::white(Vec2::new(x, 0.0), 50.0)
    }

    #[test]
    fn test_add_returns_one_based_positions() {
        let mut store = LightStore::new();
        assert_eq!(store.add_static(light(1.0)), Ok(1));
        assert_eq!(store.add_static(light(2.0)), Ok(2));
        assert_eq!(store.static_lights().len(), 2);
    }

    #[test]
    fn test_static_capacity_is_enforced() {
        let mut store = LightStore::new();
        for i in 0..MAX_LIGHTS {
            assert_eq!(store.add_static(light(i as f32)), Ok(i + 1));
        }
        let before = store.static_lights().to_vec();

        let err = store.add_static(light(999.0)).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { count: MAX_LIGHTS, capacity: MAX_LIGHTS });
        assert_eq!(store.static_lights(), before.as_slice());
    }

    #[test]
    fn test_static_capacity_ignores_other_kinds() {
        let mut store = LightStore::new();
        let defaults = TorchDefaults::default();
        for _ in 0..MAX_LIGHTS {
            store.spawn_torch(Vec2::zeros(), 50.0, 0.0, &TorchOptions::default(), &defaults);
            store.spawn_explosion(Vec2::zeros(), 50.0, 1.0, WHITE);
        }
        assert_eq!(store.add_static(light(0.0)), Ok(1));
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut store = LightStore::new();
        store.add_static(light(1.0)).unwrap();
        store.add_static(light(2.0)).unwrap();
        store.add_static(light(3.0)).unwrap();

        let removed = store.remove_static(2).unwrap();
        assert_eq!(removed.position.x, 2.0);
        assert_eq!(store.static_lights()[1].position.x, 3.0);
        assert_eq!(store.static_light_mut(2).map(|l| l.position.x), Some(3.0));
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut store = LightStore::new();
        assert_eq!(store.remove_static(1), Err(StoreError::InvalidIndex { index: 1, len: 0 }));
        assert!(store.static_lights().is_empty());

        store.add_static(light(1.0)).unwrap();
        assert!(store.remove_static(0).is_err());
        assert!(store.remove_static(2).is_err());
        assert_eq!(store.static_lights().len(), 1);
        assert!(store.remove_torch(1).is_err());
    }

    #[test]
    fn test_replace_with_empty_list_keeps_lights() {
        let mut store = LightStore::new();
        store.add_static(light(1.0)).unwrap();
        assert!(!store.replace_all_static(Vec::new()));
        assert_eq!(store.static_lights().len(), 1);

        assert!(store.replace_all_static(vec![light(7.0), light(8.0)]));
        assert_eq!(store.static_lights().len(), 2);
        assert_eq!(store.static_lights()[0].position.x, 7.0);
    }

    #[test]
    fn test_replace_truncates_to_capacity() {
        let mut store = LightStore::new();
        let lights: Vec<_> = (0..MAX_LIGHTS + 10).map(|i| light(i as f32)).collect();
        assert!(store.replace_all_static(lights));
        assert_eq!(store.static_lights().len(), MAX_LIGHTS);
    }

    #[test]
    fn test_explosions_expire_on_the_tick_they_run_out() {
        let mut store = LightStore::new();
        store.spawn_explosion(Vec2::zeros(), 100.0, 0.5, WHITE);

        assert_eq!(store.age_explosions(0.25), 0);
        assert_eq!(store.explosions().len(), 1);
        assert_eq!(store.age_explosions(0.25), 1);
        assert!(store.explosions().is_empty());
    }

    #[test]
    fn test_torches_are_never_pruned() {
        let mut store = LightStore::new();
        let index = store.spawn_torch(Vec2::zeros(), 60.0, 0.1, &TorchOptions::default(), &TorchDefaults::default());
        assert_eq!(index, 1);
        store.age_torches(10.0);
        assert_eq!(store.torches().len(), 1);
        assert!(store.torches()[0].frozen);

        assert!(store.remove_torch(1).is_ok());
        assert!(store.is_empty());
    }
}
