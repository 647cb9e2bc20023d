use crate::error::PdynResult;
use crate::force::ForceGenerator;
use crate::link::{Cable, CableConstraint, GroundContacts, Rod};
use crate::particle::{PId, Particle};
use crate::pworld::PWorld;
use crate::vector::{gravity, VecExt};
use crate::{Real, V3};

pub const BASE_MASS: Real = 1.0;
pub const EXTRA_MASS: Real = 10.0;

// particle index pairs, rod length is taken from the initial layout
const PLATFORM_RODS: [(usize, usize); 15] = [
	(0, 1),
	(2, 3),
	(4, 5),
	(2, 4),
	(3, 5),
	(0, 2),
	(1, 3),
	(0, 4),
	(1, 5),
	(0, 3),
	(2, 5),
	(4, 1),
	(1, 2),
	(3, 4),
	(5, 0),
];

/// Six particles braced by rods into a ramp resting on the ground, with a
/// movable extra mass spread over the top four corners.
pub struct Platform {
	pub particles: [PId; 6],
	pub rods: Vec<Rod>,
}

impl Platform {
	pub fn build(world: &mut PWorld) -> PdynResult<Self> {
		let layout = [
			V3::new(0., 0., 1.),
			V3::new(0., 0., -1.),
			V3::new(-3., 2., 1.),
			V3::new(-3., 2., -1.),
			V3::new(4., 2., 1.),
			V3::new(4., 2., -1.),
		];
		let mut particles = [PId(0); 6];
		for (slot, pos) in particles.iter_mut().zip(layout.iter()) {
			let p = Particle::new(*pos)
				.with_accel(gravity())
				.with_mass(BASE_MASS)?
				.with_damping(0.9)?;
			*slot = world.add_particle(p);
		}
		let mut rods = Vec::with_capacity(PLATFORM_RODS.len());
		for (i, j) in PLATFORM_RODS.iter() {
			let length = (layout[*i] - layout[*j]).norm();
			let rod = Rod::new(particles[*i], particles[*j], length)?;
			world.add_contact_generator(rod.clone())?;
			rods.push(rod);
		}
		world.add_contact_generator(GroundContacts::new(particles.to_vec()))?;
		Ok(Self { particles, rods })
	}

	/// Spread `EXTRA_MASS` over the top corners by bilinear weights of
	/// `(x, z)`, each clamped to [0, 1]. Returns where the mass sits.
	pub fn set_mass_position(
		&self,
		world: &mut PWorld,
		x: Real,
		z: Real,
	) -> PdynResult<V3> {
		let xp = x.clamp(0., 1.);
		let zp = z.clamp(0., 1.);
		let weights = [
			(2, (1. - xp) * (1. - zp)),
			(3, (1. - xp) * zp),
			(4, xp * (1. - zp)),
			(5, xp * zp),
		];
		let mut at = V3::zeros();
		for (idx, w) in weights.iter() {
			if let Some(p) = world.particle_mut(self.particles[*idx]) {
				p.set_mass(BASE_MASS + EXTRA_MASS * w)?;
				at.add_scaled(&p.get_pos(), *w);
			}
		}
		Ok(at)
	}
}

/// A chain of particles hung from a fixed point by cables.
pub struct Rope {
	pub particles: Vec<PId>,
}

impl Rope {
	pub fn build(
		world: &mut PWorld,
		anchor: V3,
		segments: usize,
		segment_len: Real,
		mass: Real,
	) -> PdynResult<Self> {
		let mut particles = Vec::with_capacity(segments);
		for idx in 0..segments {
			let pos = anchor - V3::new(0., segment_len * (idx + 1) as Real, 0.);
			let p = Particle::new(pos).with_mass(mass)?.with_damping(0.95)?;
			let id = world.add_particle(p);
			world.add_force_generator(id, ForceGenerator::gravity(gravity()))?;
			world.add_force_generator(id, ForceGenerator::drag(0.1, 0.01))?;
			particles.push(id);
		}
		if let Some(first) = particles.first() {
			world.add_contact_generator(CableConstraint::new(
				*first,
				anchor,
				segment_len,
				0.,
			))?;
		}
		for pair in particles.windows(2) {
			world.add_contact_generator(Cable::new(pair[0], pair[1], segment_len, 0.)?)?;
		}
		world.add_contact_generator(GroundContacts::new(particles.clone()))?;
		Ok(Self { particles })
	}
}
