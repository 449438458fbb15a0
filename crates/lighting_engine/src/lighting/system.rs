//! Lighting system
//!
//! [`LightingSystem`] owns the light collections and the compiled shader
//! handle, and runs the per-frame synchronization:
//!
//! 1. upload every static light
//! 2. age explosions and drop the expired ones
//! 3. upload explosions, oldest first, while slots remain
//! 4. age torches and apply the freeze rule
//! 5. animate and upload torches while slots remain
//! 6. upload the number of slots used
//!
//! Until the shader compiles, `update` does nothing at all.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::config::{ApplicationConfig, LightingConfig, SceneConfig, TorchDesc};
use crate::foundation::math::{Vec2, Vec3, WHITE};
use crate::render::{
    LightUniform, ShaderHandle, ShaderSource, ShadingBackend, Uniform, MAX_LIGHTS,
};
use super::light::{Explosion, StaticLight, Torch, TorchOptions};
use super::slots::{FrameStats, SlotWriter};
use super::store::LightStore;
use super::LightingError;

/// Torch noise seeds are drawn from `[0, NOISE_SEED_SPAN)`
const NOISE_SEED_SPAN: f32 = 1000.0;

/// Lifecycle of the lighting system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingState {
    /// No shader yet; updates are skipped
    Uninitialized,
    /// Shader compiled; updates upload lights
    Ready(ShaderHandle),
    /// Shader compilation failed; updates are skipped
    Failed,
}

/// Owned lighting subsystem driven once per frame by the host
#[derive(Debug)]
pub struct LightingSystem {
    config: LightingConfig,
    scene: SceneConfig,
    store: LightStore,
    state: LightingState,
    screen_size: Option<Vec2>,
    rng: StdRng,
    last_stats: FrameStats,
}

impl LightingSystem {
    /// Create an uninitialized system
    ///
    /// `scene` lists the lights added by [`initialize`](Self::initialize).
    pub fn new(config: LightingConfig, scene: SceneConfig) -> Result<Self, LightingError> {
        config.validate()?;
        let rng = match config.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            scene,
            store: LightStore::new(),
            state: LightingState::Uninitialized,
            screen_size: None,
            rng,
            last_stats: FrameStats::default(),
        })
    }

    /// Create a system from the application config, including the initial screen size
    pub fn from_config(config: &ApplicationConfig) -> Result<Self, LightingError> {
        let mut system = Self::new(config.lighting.clone(), config.scene.clone())?;
        let [width, height] = config.engine.screen_size;
        system.screen_size = Some(Vec2::new(width, height));
        Ok(system)
    }

    /// Compile the shader and seed the default scene
    ///
    /// On failure the system is marked [`LightingState::Failed`] and every
    /// later `update` is a no-op. A failed system may be initialized again.
    pub fn initialize<B: ShadingBackend + ?Sized>(&mut self, backend: &mut B) -> Result<ShaderHandle, LightingError> {
        if let LightingState::Ready(_) = self.state {
            return Err(LightingError::AlreadyInitialized);
        }

        let source = ShaderSource::point_lights();
        let shader = match backend.compile_shader(&source) {
            Ok(shader) => shader,
            Err(e) => {
                log::error!("LightingSystem: shader '{}' failed to compile: {}", source.name, e);
                self.state = LightingState::Failed;
                return Err(e.into());
            }
        };
        self.state = LightingState::Ready(shader);

        if let Some(size) = self.screen_size {
            backend.set_uniform(shader, Uniform::ScreenSize(size));
        }
        self.seed_scene();

        log::info!(
            "LightingSystem initialized with shader {:?}: {} static lights, {} torches",
            shader,
            self.store.static_lights().len(),
            self.store.torches().len()
        );
        Ok(shader)
    }

    fn seed_scene(&mut self) {
        for desc in &self.scene.static_lights {
            let light = StaticLight::new(
                Vec2::new(desc.position[0], desc.position[1]),
                desc.power,
                Vec3::new(desc.diffuse[0], desc.diffuse[1], desc.diffuse[2]),
            );
            if let Err(e) = self.store.add_static(light) {
                log::warn!("LightingSystem: default static light skipped: {}", e);
            }
        }
        for desc in &self.scene.torches {
            self.store.spawn_torch(
                Vec2::new(desc.position[0], desc.position[1]),
                desc.intensity,
                desc.duration,
                &torch_options(desc),
                &self.config.torch,
            );
        }
    }

    /// Release the shader and drop every light
    pub fn teardown<B: ShadingBackend + ?Sized>(&mut self, backend: &mut B) {
        if let LightingState::Ready(shader) = self.state {
            backend.release_shader(shader);
        }
        self.state = LightingState::Uninitialized;
        self.store.clear();
        self.last_stats = FrameStats::default();
        log::info!("LightingSystem torn down");
    }

    /// Run one frame of aging, animation and upload
    ///
    /// Negative or non-finite `dt` counts as zero.
    pub fn update<B: ShadingBackend + ?Sized>(&mut self, backend: &mut B, dt: f32) -> FrameStats {
        let LightingState::Ready(shader) = self.state else {
            log::trace!("LightingSystem: update skipped in state {:?}", self.state);
            return FrameStats::default();
        };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let tuning = self.config.explosion;
        let mut stats = FrameStats::default();
        let mut slots = SlotWriter::new(backend, shader, MAX_LIGHTS);

        for light in self.store.static_lights() {
            let uniform = LightUniform::new(light.position, light.diffuse, light.attenuation());
            if slots.push(&uniform) {
                stats.static_lights += 1;
            } else {
                stats.truncated += 1;
            }
        }

        stats.expired = self.store.age_explosions(dt);
        for explosion in self.store.explosions() {
            if slots.push(&explosion.to_uniform(&tuning)) {
                stats.explosions += 1;
            } else {
                stats.truncated += 1;
            }
        }

        self.store.age_torches(dt);
        let rng = &mut self.rng;
        for torch in self.store.torches_mut() {
            if slots.is_full() {
                stats.truncated += 1;
                continue;
            }
            let uniform = torch.animate(|| rng.gen_range(0.0..NOISE_SEED_SPAN));
            slots.push(&uniform);
            stats.torches += 1;
        }

        let count = slots.finish();
        debug_assert_eq!(count, stats.uploaded());

        if stats.truncated > 0 {
            log::debug!(
                "LightingSystem: {} lights over the {}-slot budget were not uploaded",
                stats.truncated,
                MAX_LIGHTS
            );
        }
        if stats.expired > 0 {
            log::trace!("LightingSystem: {} explosions expired", stats.expired);
        }

        self.last_stats = stats;
        stats
    }

    /// Record a new render target size and push it to the shader
    ///
    /// Degenerate sizes (a minimized window) are ignored.
    pub fn on_resize<B: ShadingBackend + ?Sized>(&mut self, backend: &mut B, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::debug!("LightingSystem: ignoring resize to {}x{}", width, height);
            return;
        }
        let size = Vec2::new(width, height);
        self.screen_size = Some(size);
        if let LightingState::Ready(shader) = self.state {
            backend.set_uniform(shader, Uniform::ScreenSize(size));
        }
    }

    /// Add a static light; `None` when the static collection is full
    pub fn add_static_light(&mut self, position: Vec2, power: f32, diffuse: Option<Vec3>) -> Option<usize> {
        match self.store.add_static(StaticLight::new(position, power, diffuse.unwrap_or(WHITE))) {
            Ok(index) => {
                log::debug!("LightingSystem: static light #{} at ({}, {})", index, position.x, position.y);
                Some(index)
            }
            Err(e) => {
                log::warn!("LightingSystem: add_static_light rejected: {}", e);
                None
            }
        }
    }

    /// Remove a static light by 1-based index
    pub fn remove_static_light(&mut self, index: usize) -> bool {
        match self.store.remove_static(index) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("LightingSystem: remove_static_light failed: {}", e);
                false
            }
        }
    }

    /// Remove a torch by 1-based index
    pub fn remove_torch_light(&mut self, index: usize) -> bool {
        match self.store.remove_torch(index) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("LightingSystem: remove_torch_light failed: {}", e);
                false
            }
        }
    }

    /// Replace every static light; an empty list keeps the current ones
    pub fn replace_static_lights(&mut self, lights: Vec<StaticLight>) {
        if !self.store.replace_all_static(lights) {
            log::debug!("LightingSystem: empty replacement list ignored");
        }
    }

    /// Spawn an explosion flash
    ///
    /// `intensity_percent` is clamped to 0..100, `duration` to at least 0.01s
    /// and `diffuse` (white by default) to `[0, 1]` per channel.
    pub fn spawn_explosion(&mut self, position: Vec2, intensity_percent: f32, duration: f32, diffuse: Option<Vec3>) {
        self.store.spawn_explosion(position, intensity_percent, duration, diffuse.unwrap_or(WHITE));
        log::debug!(
            "LightingSystem: explosion at ({}, {}) for {}s ({} live)",
            position.x,
            position.y,
            duration,
            self.store.explosions().len()
        );
    }

    /// Spawn a torch and return its 1-based index
    ///
    /// A `duration <= 0` torch never freezes.
    pub fn spawn_torch(&mut self, position: Vec2, intensity_percent: f32, duration: f32, options: TorchOptions) -> usize {
        let index = self.store.spawn_torch(position, intensity_percent, duration, &options, &self.config.torch);
        log::debug!("LightingSystem: torch #{} at ({}, {})", index, position.x, position.y);
        index
    }

    /// Lifecycle state
    pub fn state(&self) -> LightingState {
        self.state
    }

    /// Whether updates will upload lights
    pub fn is_ready(&self) -> bool {
        matches!(self.state, LightingState::Ready(_))
    }

    /// Compiled shader, once initialized
    pub fn shader(&self) -> Option<ShaderHandle> {
        match self.state {
            LightingState::Ready(shader) => Some(shader),
            _ => None,
        }
    }

    /// Animator tuning in use
    pub fn config(&self) -> &LightingConfig {
        &self.config
    }

    /// Last known render target size
    pub fn screen_size(&self) -> Option<Vec2> {
        self.screen_size
    }

    /// Statistics from the most recent uploading frame
    pub fn last_frame_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// The underlying collections
    pub fn store(&self) -> &LightStore {
        &self.store
    }

    /// Static lights in upload order
    pub fn static_lights(&self) -> &[StaticLight] {
        self.store.static_lights()
    }

    /// Edit a static light between frames (1-based index)
    pub fn static_light_mut(&mut self, index: usize) -> Option<&mut StaticLight> {
        self.store.static_light_mut(index)
    }

    /// Live explosions, oldest first
    pub fn explosions(&self) -> &[Explosion] {
        self.store.explosions()
    }

    /// Torches in upload order
    pub fn torches(&self) -> &[Torch] {
        self.store.torches()
    }

    /// Edit a torch between frames (1-based index)
    pub fn torch_mut(&mut self, index: usize) -> Option<&mut Torch> {
        self.store.torch_mut(index)
    }

    /// Stored lights of every kind, uploaded or not
    pub fn light_count(&self) -> usize {
        self.store.len()
    }
}

fn torch_options(desc: &TorchDesc) -> TorchOptions {
    TorchOptions {
        diffuse: desc.diffuse.map(|c| Vec3::new(c[0], c[1], c[2])),
        infinite: desc.infinite,
        brightness: desc.brightness,
        ..TorchOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::map_power;
    use crate::render::{RecordingBackend, RenderError};
    use approx::assert_relative_eq;

    fn system(scene: SceneConfig) -> LightingSystem {
        LightingSystem::new(LightingConfig::default().with_noise_seed(1), scene).unwrap()
    }

    fn ready() -> (LightingSystem, RecordingBackend) {
        let mut backend = RecordingBackend::new();
        let mut lighting = system(SceneConfig::empty());
        lighting.initialize(&mut backend).unwrap();
        (lighting, backend)
    }

    fn fill_static(lighting: &mut LightingSystem, count: usize) {
        for i in 0..count {
            assert!(lighting.add_static_light(Vec2::new(i as f32, 0.0), 50.0, None).is_some());
        }
    }

    #[test]
    fn test_update_before_initialize_is_a_no_op() {
        let mut backend = RecordingBackend::new();
        let mut lighting = system(SceneConfig::empty());
        lighting.spawn_explosion(Vec2::zeros(), 100.0, 0.5, None);

        let stats = lighting.update(&mut backend, 1.0);

        assert_eq!(stats, FrameStats::default());
        assert_eq!(lighting.explosions().len(), 1);
        assert_eq!(lighting.explosions()[0].elapsed, 0.0);
        assert_eq!(backend.count_writes(), 0);
    }

    #[test]
    fn test_failed_initialize_leaves_system_unusable() {
        let mut backend = RecordingBackend::failing("0:12: syntax error");
        let mut lighting = system(SceneConfig::default());

        let err = lighting.initialize(&mut backend).unwrap_err();
        assert!(matches!(err, LightingError::Initialization(RenderError::ShaderCompilation { .. })));
        assert_eq!(lighting.state(), LightingState::Failed);
        assert!(lighting.shader().is_none());
        assert_eq!(lighting.light_count(), 0);

        lighting.spawn_torch(Vec2::zeros(), 50.0, 1.0, TorchOptions::default());
        lighting.update(&mut backend, 2.0);
        assert_eq!(lighting.torches()[0].elapsed, 0.0);
        assert_eq!(backend.count_writes(), 0);
    }

    #[test]
    fn test_initialize_seeds_default_scene() {
        let mut backend = RecordingBackend::new();
        let mut lighting = system(SceneConfig::default());
        let shader = lighting.initialize(&mut backend).unwrap();

        assert!(backend.is_live(shader));
        assert_eq!(lighting.static_lights().len(), 3);
        assert_eq!(lighting.torches().len(), 1);
        assert!(lighting.torches()[0].infinite);

        let stats = lighting.update(&mut backend, 1.0 / 60.0);
        assert_eq!(stats.uploaded(), 4);
        assert_eq!(backend.light_count(), 4);
        let first = backend.lights().slot(0).unwrap();
        assert_eq!(first.position, [200.0, 150.0]);
        assert_relative_eq!(first.power, map_power(70.0));
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let (mut lighting, mut backend) = ready();
        assert!(matches!(lighting.initialize(&mut backend), Err(LightingError::AlreadyInitialized)));
        assert_eq!(backend.compiled_shaders().len(), 1);
    }

    #[test]
    fn test_explosion_end_to_end() {
        let (mut lighting, mut backend) = ready();
        lighting.spawn_explosion(Vec2::new(10.0, 20.0), 100.0, 0.5, None);

        let stats = lighting.update(&mut backend, 0.0);
        assert_eq!(stats.explosions, 1);
        let slot = backend.lights().slot(0).unwrap();
        assert_eq!(slot.position, [10.0, 20.0]);
        assert_eq!(slot.diffuse, [1.0, 1.0, 1.0]);
        assert_eq!(slot.power, 0.0);

        let stats = lighting.update(&mut backend, 0.5);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.uploaded(), 0);
        assert!(lighting.explosions().is_empty());
        assert_eq!(backend.light_count(), 0);
    }

    #[test]
    fn test_explosion_lives_until_its_duration() {
        let (mut lighting, mut backend) = ready();
        lighting.spawn_explosion(Vec2::zeros(), 80.0, 0.5, Some(Vec3::new(1.0, 0.5, 0.0)));

        for _ in 0..3 {
            let stats = lighting.update(&mut backend, 0.125);
            assert_eq!(stats.explosions, 1);
            assert_eq!(backend.light_count(), 1);
        }
        let stats = lighting.update(&mut backend, 0.125);
        assert_eq!(stats.expired, 1);
        assert_eq!(backend.light_count(), 0);
        assert!(lighting.explosions().is_empty());
    }

    #[test]
    fn test_upload_order_is_static_explosion_torch() {
        let (mut lighting, mut backend) = ready();
        lighting.spawn_torch(Vec2::new(3.0, 3.0), 50.0, 0.0, TorchOptions::default());
        lighting.spawn_explosion(Vec2::new(2.0, 2.0), 50.0, 1.0, None);
        lighting.add_static_light(Vec2::new(1.0, 1.0), 50.0, None);

        lighting.update(&mut backend, 0.1);

        let positions: Vec<_> = backend.lights().active().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
    }

    #[test]
    fn test_full_static_budget_starves_transient_lights() {
        let (mut lighting, mut backend) = ready();
        fill_static(&mut lighting, MAX_LIGHTS);
        lighting.spawn_explosion(Vec2::new(-1.0, -1.0), 100.0, 10.0, None);
        lighting.spawn_torch(Vec2::new(-2.0, -2.0), 100.0, 0.0, TorchOptions::default());

        let stats = lighting.update(&mut backend, 0.1);
        assert_eq!(stats.static_lights, MAX_LIGHTS);
        assert_eq!(stats.explosions + stats.torches, 0);
        assert_eq!(stats.truncated, 2);
        assert_eq!(backend.light_count(), MAX_LIGHTS as u32);
        assert!(backend.lights().active().iter().all(|l| l.position[0] >= 0.0));

        // Freeing one slot lets the explosion in, the torch stays out
        assert!(lighting.remove_static_light(1));
        let stats = lighting.update(&mut backend, 0.1);
        assert_eq!(stats.explosions, 1);
        assert_eq!(stats.torches, 0);
        assert_eq!(backend.lights().slot(MAX_LIGHTS - 1).unwrap().position, [-1.0, -1.0]);
    }

    #[test]
    fn test_older_explosions_win_the_last_slot() {
        let (mut lighting, mut backend) = ready();
        fill_static(&mut lighting, MAX_LIGHTS - 1);
        lighting.spawn_explosion(Vec2::new(-1.0, 0.0), 100.0, 5.0, None);
        lighting.spawn_explosion(Vec2::new(-2.0, 0.0), 100.0, 5.0, None);

        let stats = lighting.update(&mut backend, 0.0);
        assert_eq!(stats.explosions, 1);
        assert_eq!(stats.truncated, 1);
        assert_eq!(backend.lights().slot(MAX_LIGHTS - 1).unwrap().position, [-1.0, 0.0]);
        // Left out, but still stored
        assert_eq!(lighting.explosions().len(), 2);
    }

    #[test]
    fn test_lights_without_a_slot_still_age() {
        let (mut lighting, mut backend) = ready();
        fill_static(&mut lighting, MAX_LIGHTS);
        lighting.spawn_explosion(Vec2::new(-1.0, 0.0), 100.0, 0.3, None);
        lighting.spawn_torch(Vec2::new(-2.0, 0.0), 60.0, 0.2, TorchOptions::default());

        for _ in 0..4 {
            let stats = lighting.update(&mut backend, 0.1);
            assert_eq!(stats.uploaded(), MAX_LIGHTS);
        }
        assert!(lighting.explosions().is_empty());
        let torch = &lighting.torches()[0];
        assert_relative_eq!(torch.elapsed, 0.4, epsilon = 1e-5);
        assert!(torch.frozen);
        assert_eq!(torch.last_brightness, None);

        // A freed slot shows the torch at rest, not mid-flicker
        assert!(lighting.remove_static_light(1));
        let stats = lighting.update(&mut backend, 0.1);
        assert_eq!(stats.torches, 1);

        let torch = &lighting.torches()[0];
        let resting = torch.brightness * (1.0 - torch.amplitude);
        assert_relative_eq!(resting, 0.65, epsilon = 1e-6);
        assert_eq!(torch.last_brightness, Some(resting));

        let slot = backend.lights().slot(MAX_LIGHTS - 1).unwrap();
        assert_eq!(slot.position, [-2.0, 0.0]);
        assert_relative_eq!(slot.diffuse[0], torch.base_color.x * resting, epsilon = 1e-6);
        assert_relative_eq!(slot.diffuse[1], torch.base_color.y * resting, epsilon = 1e-6);
        assert_relative_eq!(slot.diffuse[2], torch.base_color.z * resting, epsilon = 1e-6);
        assert_relative_eq!(slot.power, torch.base_power);
    }

    #[test]
    fn test_sixty_fifth_static_light_is_rejected() {
        let (mut lighting, _backend) = ready();
        fill_static(&mut lighting, MAX_LIGHTS);
        assert_eq!(lighting.add_static_light(Vec2::zeros(), 10.0, None), None);
        assert_eq!(lighting.static_lights().len(), MAX_LIGHTS);
    }

    #[test]
    fn test_remove_from_empty_collections_fails() {
        let (mut lighting, _backend) = ready();
        assert!(!lighting.remove_static_light(1));
        assert!(!lighting.remove_torch_light(1));
        assert!(lighting.static_lights().is_empty());
    }

    #[test]
    fn test_replace_static_lights() {
        let (mut lighting, _backend) = ready();
        lighting.add_static_light(Vec2::zeros(), 10.0, None);
        lighting.replace_static_lights(Vec::new());
        assert_eq!(lighting.static_lights().len(), 1);

        lighting.replace_static_lights(vec![
            StaticLight::white(Vec2::new(5.0, 5.0), 20.0),
            StaticLight::white(Vec2::new(6.0, 6.0), 30.0),
        ]);
        assert_eq!(lighting.static_lights().len(), 2);
        assert_eq!(lighting.static_lights()[0].position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_torch_freezes_and_thaws() {
        let (mut lighting, mut backend) = ready();
        let index = lighting.spawn_torch(Vec2::zeros(), 60.0, 0.25, TorchOptions::default());

        for _ in 0..20 {
            lighting.update(&mut backend, 0.05);
        }
        assert!(lighting.torches()[0].frozen);
        let held = *backend.lights().slot(0).unwrap();
        for _ in 0..10 {
            lighting.update(&mut backend, 0.05);
            assert_eq!(*backend.lights().slot(0).unwrap(), held);
        }

        lighting.torch_mut(index).unwrap().infinite = true;
        lighting.update(&mut backend, 0.05);
        assert!(!lighting.torches()[0].frozen);

        assert!(lighting.remove_torch_light(index));
        assert!(lighting.torches().is_empty());
    }

    #[test]
    fn test_host_edits_show_up_next_frame() {
        let (mut lighting, mut backend) = ready();
        let index = lighting.add_static_light(Vec2::new(1.0, 1.0), 50.0, None).unwrap();
        lighting.update(&mut backend, 0.016);

        let light = lighting.static_light_mut(index).unwrap();
        light.position = Vec2::new(300.0, 200.0);
        light.power = 100.0;
        lighting.update(&mut backend, 0.016);

        let slot = backend.lights().slot(0).unwrap();
        assert_eq!(slot.position, [300.0, 200.0]);
        assert_eq!(slot.power, 0.0);
    }

    #[test]
    fn test_same_noise_seed_gives_same_flicker() {
        let run = || {
            let (mut lighting, mut backend) = ready();
            lighting.spawn_torch(Vec2::zeros(), 80.0, 0.0, TorchOptions::default());
            let mut samples = Vec::new();
            for _ in 0..30 {
                lighting.update(&mut backend, 1.0 / 30.0);
                samples.push(*backend.lights().slot(0).unwrap());
            }
            samples
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_resize_before_and_after_initialize() {
        let mut backend = RecordingBackend::new();
        let mut lighting = system(SceneConfig::empty());

        lighting.on_resize(&mut backend, 1280.0, 720.0);
        assert_eq!(backend.screen_size(), None);

        lighting.initialize(&mut backend).unwrap();
        assert_eq!(backend.screen_size(), Some(Vec2::new(1280.0, 720.0)));

        lighting.on_resize(&mut backend, 1920.0, 1080.0);
        lighting.on_resize(&mut backend, 0.0, 0.0);
        assert_eq!(backend.screen_size(), Some(Vec2::new(1920.0, 1080.0)));
        assert_eq!(lighting.screen_size(), Some(Vec2::new(1920.0, 1080.0)));
    }

    #[test]
    fn test_teardown_releases_shader_and_allows_restart() {
        let mut backend = RecordingBackend::new();
        let mut lighting = system(SceneConfig::default());
        let shader = lighting.initialize(&mut backend).unwrap();

        lighting.teardown(&mut backend);
        assert!(!backend.is_live(shader));
        assert_eq!(lighting.state(), LightingState::Uninitialized);
        assert_eq!(lighting.light_count(), 0);
        assert_eq!(lighting.update(&mut backend, 0.1), FrameStats::default());

        lighting.initialize(&mut backend).unwrap();
        assert_eq!(lighting.light_count(), 4);
    }

    #[test]
    fn test_from_config_uses_engine_screen_size() {
        let config = ApplicationConfig::default();
        let lighting = LightingSystem::from_config(&config).unwrap();
        assert_eq!(lighting.screen_size(), Some(Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let mut config = LightingConfig::default();
        config.torch.smoothing = 0.0;
        assert!(matches!(
            LightingSystem::new(config, SceneConfig::empty()),
            Err(LightingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let (mut lighting, mut backend) = ready();
        lighting.spawn_explosion(Vec2::zeros(), 50.0, 1.0, None);
        lighting.update(&mut backend, 0.5);
        lighting.update(&mut backend, -10.0);
        lighting.update(&mut backend, f32::NAN);
        assert_relative_eq!(lighting.explosions()[0].elapsed, 0.5);
    }
}
