//! Torchlight demo
//!
//! Headless host for the lighting engine. Drives a scripted scene at a fixed
//! timestep against the recording backend and logs what each frame uploads.
//!
//! Usage: `torchlight_demo [config.toml|config.ron]`

use lighting_engine::foundation::logging;
use lighting_engine::prelude::*;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "torchlight.toml";

/// Frames between scripted explosions
const EXPLOSION_INTERVAL: u32 = 45;
/// Frames between stats reports
const REPORT_INTERVAL: u32 = 60;
const TORCH_SPAWN_FRAME: u32 = 60;
const RESIZE_FRAME: u32 = 240;
const TORCH_RELIGHT_FRAME: u32 = 360;

/// Radius in pixels of the orbiting static light's path
const ORBIT_RADIUS: f32 = 120.0;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lighting error: {0}")]
    Lighting(#[from] LightingError),
}

/// Running totals over the whole script
#[derive(Debug, Default)]
struct Totals {
    uploaded: usize,
    truncated: usize,
    expired: usize,
}

struct Demo {
    config: ApplicationConfig,
    backend: RecordingBackend,
    lighting: LightingSystem,
    orbit_center: Vec2,
    torch: Option<usize>,
    totals: Totals,
}

impl Demo {
    fn new(config: ApplicationConfig) -> Result<Self, DemoError> {
        let lighting = LightingSystem::from_config(&config)?;
        let [width, height] = config.engine.screen_size;

        Ok(Self {
            config,
            backend: RecordingBackend::new(),
            lighting,
            orbit_center: Vec2::new(width * 0.5, height * 0.5),
            torch: None,
            totals: Totals::default(),
        })
    }

    fn initialize(&mut self) -> Result<(), DemoError> {
        log::info!("Initializing torchlight demo...");
        self.lighting.initialize(&mut self.backend)?;
        let [width, height] = self.config.engine.screen_size;
        self.lighting.on_resize(&mut self.backend, width, height);
        log::info!(
            "Demo ready: {} lights in the scene",
            self.lighting.light_count()
        );
        Ok(())
    }

    fn run(&mut self) {
        let dt = self.config.engine.fixed_timestep;
        let frames = self.config.engine.frame_count;
        log::info!("Running {} frames at {:.4}s per step", frames, dt);

        for frame in 0..frames {
            self.script(frame, dt);
            let stats = self.lighting.update(&mut self.backend, dt);

            self.totals.uploaded += stats.uploaded();
            self.totals.truncated += stats.truncated;
            self.totals.expired += stats.expired;

            if frame % REPORT_INTERVAL == 0 {
                log::info!(
                    "Frame {}: {} uploaded ({} static, {} explosions, {} torches), {} left out",
                    frame,
                    stats.uploaded(),
                    stats.static_lights,
                    stats.explosions,
                    stats.torches,
                    stats.truncated
                );
            }
        }
    }

    /// Scripted host events for one frame
    fn script(&mut self, frame: u32, dt: f32) {
        let time = frame as f32 * dt;

        // First static light circles the screen center
        let center = self.orbit_center;
        if let Some(light) = self.lighting.static_light_mut(1) {
            light.position = center + Vec2::new(time.cos(), time.sin()) * ORBIT_RADIUS;
        }

        if frame % EXPLOSION_INTERVAL == 0 {
            let step = (frame / EXPLOSION_INTERVAL) as f32;
            let position = Vec2::new(
                center.x + (step * 2.3).sin() * center.x * 0.8,
                center.y + (step * 1.7).cos() * center.y * 0.8,
            );
            let color = Vec3::new(1.0, 0.5 + 0.1 * (step % 5.0), 0.2);
            self.lighting.spawn_explosion(position, 90.0, 0.6, Some(color));
        }

        match frame {
            TORCH_SPAWN_FRAME => {
                let options = TorchOptions::default()
                    .with_diffuse(Vec3::new(1.0, 0.45, 0.1))
                    .with_flicker(3.0, 0.5, 0.15);
                let index = self.lighting.spawn_torch(center * 0.5, 65.0, 3.0, options);
                log::info!("Spawned torch #{} with a 3s burn", index);
                self.torch = Some(index);
            }
            RESIZE_FRAME => {
                log::info!("Resizing to 1024x768");
                self.lighting.on_resize(&mut self.backend, 1024.0, 768.0);
                self.orbit_center = Vec2::new(512.0, 384.0);
            }
            TORCH_RELIGHT_FRAME => {
                if let Some(torch) = self.torch.and_then(|index| self.lighting.torch_mut(index)) {
                    log::info!("Relighting torch (frozen: {})", torch.frozen);
                    torch.infinite = true;
                }
            }
            _ => {}
        }
    }

    fn shutdown(&mut self) {
        log::info!(
            "Demo finished: {} light uploads, {} left out, {} explosions expired, {} count writes",
            self.totals.uploaded,
            self.totals.truncated,
            self.totals.expired,
            self.backend.count_writes()
        );
        self.lighting.teardown(&mut self.backend);
    }
}

fn run() -> Result<(), DemoError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ApplicationConfig::load_or_default(&path)?;
    config.validate()?;
    logging::init(&config.engine.log_level);
    log::info!("Loaded configuration from {}", path);

    let mut demo = Demo::new(config)?;
    demo.initialize()?;
    demo.run();
    demo.shutdown();
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        // Logging may not be up yet if the config failed to load
        eprintln!("torchlight_demo: {}", e);
        std::process::exit(1);
    }
}
