//! Siege Arena - scripted headless round
//!
//! Run with: `cargo run --bin siege_arena [seed]`
//!
//! Drives a complete round without a window: raises the aim a touch to
//! compensate for ball drop, lobs the six cannonballs at the wall, and
//! logs the outcome. The final frame snapshot is printed as JSON so the
//! result can be piped into other tooling.
//!
//! Set `RUST_LOG=debug` to watch every spawn and refusal.

use brickfall_engine::game::config::SiegeConfig;
use brickfall_engine::game::input::InputEvent;
use brickfall_engine::game::scenes::SiegeScene;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const FRAME: f32 = 1.0 / 60.0;
/// One minute of simulated time before calling the round undecided.
const MAX_FRAMES: u32 = 60 * 60;
/// Frames between scripted shots.
const SHOT_INTERVAL: u32 = 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB121C);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut scene = SiegeScene::new(SiegeConfig::default(), &mut rng);
    log::info!("seed {seed}: target waiting at x = {}", scene.spawn_point());

    // Tilt the aim up slightly so the volley lands mid-wall.
    scene.handle_event(InputEvent::LookDelta { dx: 0.0, dy: -20.0 });

    let mut outcome = None;
    for frame in 0..MAX_FRAMES {
        if frame % SHOT_INTERVAL == 0 && scene.ammo_remaining() > 0 {
            scene.handle_event(InputEvent::FirePressed);
            scene.handle_event(InputEvent::FireReleased);
            log::info!("{}", scene.hud().status_line());
        }

        if let Some(event) = scene.update(FRAME) {
            log::info!(
                "{} (frame {frame})",
                event.message.replace('\n', " - ")
            );
            outcome = Some(event.state);
            break;
        }
    }

    match outcome {
        Some(state) => log::info!("round finished: {state:?}"),
        None => log::warn!("round undecided after {MAX_FRAMES} frames"),
    }

    let snapshot = scene.snapshot();
    println!(
        "{}",
        serde_json::to_string(&snapshot).expect("snapshot serializes")
    );
}
