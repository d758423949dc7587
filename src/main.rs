//! Waterfall entry point
//!
//! Headless driver: steps the simulation at full speed and logs population
//! statistics. A renderer would sit in this loop, consuming
//! `Simulation::particles()` read-only after each frame step.

use std::path::Path;
use std::time::Instant;

use waterfall::sim::{SimParams, Simulation, advance_frame};

/// Default frame count when none is given on the command line
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let params = SimParams::load(Path::new("waterfall-params.json"));
    let mut sim = Simulation::from_time(params);
    log::info!("Waterfall starting: {frames} frames");

    let start = Instant::now();
    let mut peak = 0usize;
    for _ in 0..frames {
        match advance_frame(&mut sim) {
            Ok(stats) => {
                peak = peak.max(stats.live);
                if stats.clock % 60 == 0 {
                    log::debug!(
                        "frame {}: {} live (+{} -{})",
                        stats.clock,
                        stats.live,
                        stats.spawned,
                        stats.retired
                    );
                }
            }
            Err(e) => {
                log::error!("frame {} failed: {e}", sim.clock());
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    let stepped = sim.clock().max(1);
    log::info!(
        "{} frames in {:.2?} ({:.3} ms/frame), peak population {}",
        sim.clock(),
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / stepped as f64,
        peak
    );
}
