use std::time::SystemTime;

use pdyn::ammo::SHOT_TYPES;
use pdyn::error::PdynResult;
use pdyn::particle::PId;
use pdyn::pworld::PWorld;
use pdyn::rig::{Platform, Rope};
use pdyn::V3;
use rand::Rng;

const ROUNDS: usize = 16;
const DT: f32 = 1. / 60.;

struct Round {
	id: PId,
	age: f32,
}

fn main() -> PdynResult<()> {
	let mut rng = rand::thread_rng();
	let mut world = PWorld::new(256, 0);
	let platform = Platform::build(&mut world)?;
	platform.set_mass_position(&mut world, 0.3, 0.6)?;
	Rope::build(&mut world, V3::new(-6., 8., 0.), 8, 0.5, 0.2)?;

	let origin = V3::new(0., 1.5, 0.);
	let mut rounds = Vec::with_capacity(ROUNDS);
	for _ in 0..ROUNDS {
		// parked until fired
		let id = world.add_particle(SHOT_TYPES[0].template(origin)?.immovable());
		rounds.push(Round { id, age: f32::INFINITY });
	}

	world.start();
	let start = SystemTime::now();
	let rframes = 600;
	let mut fired = 0;
	for frame in 0..rframes {
		if frame % 10 == 0 {
			// reuse the first parked round
			if let Some(round) = rounds.iter_mut().find(|r| r.age.is_infinite()) {
				let shot = SHOT_TYPES[rng.gen_range(0..SHOT_TYPES.len())];
				let aim = V3::new(rng.gen_range(-0.3..0.3), 0., 1.);
				if let Some(p) = world.particle_mut(round.id) {
					*p = shot.fire(origin, aim)?;
				}
				round.age = 0.;
				fired += 1;
			}
		}
		world.run(DT);
		for round in rounds.iter_mut() {
			if round.age.is_infinite() {
				continue;
			}
			round.age += DT;
			let p = match world.particle_mut(round.id) {
				Some(p) => p,
				None => continue,
			};
			let pos = p.get_pos();
			if pos[1] < 0. || pos[2] > 200. || round.age > 5. {
				p.reset(origin);
				p.set_imass(0.)?;
				round.age = f32::INFINITY;
			}
		}
	}
	let time = rframes as f32 * DT;
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or(0);
	eprintln!(
		"INFO: {} particles, {} rounds fired, {} contacts in last frame",
		world.particles().len(),
		fired,
		world.last_contact_count(),
	);
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
	Ok(())
}
