use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::states::{NVec2, Planet, Sun, System, Universe};

/// Helper to build `n` planets on deterministic circular orbits
/// No rand needed, distances fan out from the sun
fn make_planets(universe: &Universe, sun: &Sun, n: usize) -> Vec<Planet> {
    let mut planets = Vec::with_capacity(n);

    for i in 0..n {
        let distance = 2.0 + (i as f64) * 0.05;
        let planet = Planet::from_orbit(universe, sun, 1.0, distance, 1.0, 90.0)
            .expect("benchmark orbit parameters are valid");
        planets.push(planet);
    }

    planets
}

/// Time a single acceleration pass over systems of increasing size
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let universe = Universe::new(1.0).expect("benchmark G is valid");
    let sun = Sun::new(1000.0).expect("benchmark sun mass is valid");

    for n in ns {
        let sys = System {
            bodies: make_planets(&universe, &sun, n),
            t: 0.0,
        };

        let gravity = AccelSet::new().with(CentralGravity {
            g: universe.g,
            source_mass: sun.mass,
            source_pos: sun.position,
        });

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        let _ = gravity.accumulate_accels(0.0, &sys, &mut out);

        let t0 = Instant::now();
        let _ = gravity.accumulate_accels(0.0, &sys, &mut out);
        let dt_gravity = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {:8.6} s", dt_gravity);
    }
}

/// Time full `run()` calls (stepping + trajectory recording) per body count
/// Paste output directly into a spreadsheet to graph
pub fn bench_run() {
    let steps = 1000;

    println!("N,run_ms");

    let universe = Universe::new(1.0).expect("benchmark G is valid");
    let sun = Sun::new(1000.0).expect("benchmark sun mass is valid");

    for n in (200..=3200).step_by(200) {
        let planets = make_planets(&universe, &sun, n);

        let mut sim = Simulation::new(universe, sun, planets, 0.001, steps)
            .expect("benchmark parameters are valid");

        let t0 = Instant::now();
        sim.run().expect("benchmark orbits stay clear of the sun");
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, elapsed_ms);
    }
}
