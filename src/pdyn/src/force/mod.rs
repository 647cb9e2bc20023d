pub mod buoyancy;
pub mod registry;
pub mod spring;

use crate::error::{PdynError, PdynResult};
use crate::particle::{PId, Particle};
use crate::particle_group::ParticleGroup;
use crate::vector::VecExt;
use crate::{Real, V3};

pub use buoyancy::Buoyancy;
pub use registry::ForceRegistry;

#[derive(Clone, Debug, PartialEq)]
pub enum ForceGenerator {
	Gravity {
		gravity: V3,
	},
	Drag {
		k1: Real, // velocity
		k2: Real, // velocity squared
	},
	AnchoredSpring {
		anchor: V3,
		spring_constant: Real,
		rest_length: Real,
	},
	AnchoredBungee {
		anchor: V3,
		spring_constant: Real,
		rest_length: Real,
	},
	FakeSpring {
		anchor: V3,
		spring_constant: Real,
		damping: Real,
	},
	Spring {
		end: PId,
		spring_constant: Real,
		rest_length: Real,
	},
	Bungee {
		end: PId,
		spring_constant: Real,
		rest_length: Real,
	},
	Buoyancy(Buoyancy),
}

impl ForceGenerator {
	pub fn gravity(gravity: V3) -> Self {
		Self::Gravity { gravity }
	}

	pub fn drag(k1: Real, k2: Real) -> Self {
		Self::Drag { k1, k2 }
	}

	/// The other particle a two-body generator reads.
	pub fn end(&self) -> Option<PId> {
		match self {
			Self::Spring { end, .. } | Self::Bungee { end, .. } => Some(*end),
			_ => None,
		}
	}

	/// Validate this generator for particle `id` against the arena.
	pub fn check(&self, id: PId, particles: &ParticleGroup) -> PdynResult<()> {
		particles.check(id)?;
		if let Some(end) = self.end() {
			particles.check(end)?;
			if end == id {
				return Err(PdynError::DegenerateLink(id.0));
			}
		}
		Ok(())
	}

	/// Force this generator applies to particle `id` for a step of `dt`.
	/// `None` when it contributes nothing.
	pub fn force(
		&self,
		id: PId,
		particles: &ParticleGroup,
		dt: Real,
	) -> Option<V3> {
		let p = particles.get(id)?;
		match self {
			Self::Gravity { gravity } => gravity_force(*gravity, p),
			Self::Drag { k1, k2 } => drag_force(*k1, *k2, p),
			Self::AnchoredSpring {
				anchor,
				spring_constant,
				rest_length,
			} => spring::spring_force(
				p.get_pos(),
				*anchor,
				*spring_constant,
				*rest_length,
			),
			Self::AnchoredBungee {
				anchor,
				spring_constant,
				rest_length,
			} => spring::bungee_force(
				p.get_pos(),
				*anchor,
				*spring_constant,
				*rest_length,
			),
			Self::FakeSpring {
				anchor,
				spring_constant,
				damping,
			} => spring::fake_spring_force(
				p,
				*anchor,
				*spring_constant,
				*damping,
				dt,
			),
			Self::Spring {
				end,
				spring_constant,
				rest_length,
			} => spring::spring_force(
				p.get_pos(),
				particles.get(*end)?.get_pos(),
				*spring_constant,
				*rest_length,
			),
			Self::Bungee {
				end,
				spring_constant,
				rest_length,
			} => spring::bungee_force(
				p.get_pos(),
				particles.get(*end)?.get_pos(),
				*spring_constant,
				*rest_length,
			),
			Self::Buoyancy(b) => b.force(p),
		}
	}
}

impl From<Buoyancy> for ForceGenerator {
	fn from(b: Buoyancy) -> Self {
		Self::Buoyancy(b)
	}
}

fn gravity_force(gravity: V3, p: &Particle) -> Option<V3> {
	if !p.has_finite_mass() {
		return None;
	}
	Some(gravity * p.get_mass())
}

fn drag_force(k1: Real, k2: Real, p: &Particle) -> Option<V3> {
	let vel = p.get_vel();
	let speed = vel.norm();
	if speed == 0. {
		return None;
	}
	let coeff = k1 * speed + k2 * speed * speed;
	Some(vel.unit() * -coeff)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::vector::gravity;

	fn group(p: Particle) -> (ParticleGroup, PId) {
		let mut pg = ParticleGroup::default();
		let id = pg.add(p);
		(pg, id)
	}

	#[test]
	fn test_gravity_scales_with_mass() {
		let p = Particle::new(V3::zeros()).with_mass(3.).unwrap();
		let (pg, id) = group(p);
		let f = ForceGenerator::gravity(gravity()).force(id, &pg, 0.1);
		assert!((f.unwrap() - gravity() * 3.).norm() < 1e-5);
	}

	#[test]
	fn test_gravity_skips_immovable() {
		let (pg, id) = group(Particle::default().immovable());
		assert_eq!(ForceGenerator::gravity(gravity()).force(id, &pg, 0.1), None);
	}

	#[test]
	fn test_drag() {
		let p = Particle::new(V3::zeros()).with_vel(V3::new(0., 0., 2.));
		let (pg, id) = group(p);
		let f = ForceGenerator::drag(0.5, 0.25).force(id, &pg, 0.1).unwrap();
		// -(0.5 * 2 + 0.25 * 4)
		assert!((f - V3::new(0., 0., -2.)).norm() < 1e-6);

		let (pg, id) = group(Particle::default());
		assert_eq!(ForceGenerator::drag(0.5, 0.25).force(id, &pg, 0.1), None);
	}

	#[test]
	fn test_two_body_check() {
		let mut pg = ParticleGroup::default();
		let a = pg.add(Particle::default());
		let b = pg.add(Particle::new(V3::new(3., 0., 0.)));
		let spring = ForceGenerator::Spring {
			end: b,
			spring_constant: 2.,
			rest_length: 1.,
		};
		assert_eq!(spring.check(a, &pg), Ok(()));
		assert_eq!(spring.check(b, &pg), Err(PdynError::DegenerateLink(1)));
		assert_eq!(spring.check(PId(9), &pg), Err(PdynError::UnknownParticle(9)));
		// stretched by 2, pulls a toward b
		let f = spring.force(a, &pg, 0.1).unwrap();
		assert!((f - V3::new(4., 0., 0.)).norm() < 1e-5);
	}

	#[test]
	fn test_anchored_variants() {
		let (pg, id) = group(Particle::new(V3::new(0., -3., 0.)));
		let spring = ForceGenerator::AnchoredSpring {
			anchor: V3::zeros(),
			spring_constant: 10.,
			rest_length: 1.,
		};
		let f = spring.force(id, &pg, 0.1).unwrap();
		assert!((f - V3::new(0., 20., 0.)).norm() < 1e-4);

		let bungee = ForceGenerator::AnchoredBungee {
			anchor: V3::zeros(),
			spring_constant: 10.,
			rest_length: 1.,
		};
		assert_eq!(bungee.force(id, &pg, 0.1), Some(f));
		let slack = ForceGenerator::AnchoredBungee {
			anchor: V3::zeros(),
			spring_constant: 10.,
			rest_length: 4.,
		};
		assert_eq!(slack.force(id, &pg, 0.1), None);
		// a spring with that rest length pushes instead
		let pushed = ForceGenerator::AnchoredSpring {
			anchor: V3::zeros(),
			spring_constant: 10.,
			rest_length: 4.,
		};
		let f = pushed.force(id, &pg, 0.1).unwrap();
		assert!((f - V3::new(0., -10., 0.)).norm() < 1e-4);
	}

	#[test]
	fn test_fake_spring_variant() {
		let p = Particle::new(V3::new(1., 0., 0.))
			.with_vel(V3::new(0., 0.5, 0.))
			.with_mass(2.)
			.unwrap();
		let expect = spring::fake_spring_force(&p, V3::zeros(), 4., 0.5, 0.02);
		let (pg, id) = group(p);
		let gen = ForceGenerator::FakeSpring {
			anchor: V3::zeros(),
			spring_constant: 4.,
			damping: 0.5,
		};
		let f = gen.force(id, &pg, 0.02);
		assert!(f.is_some());
		assert_eq!(f, expect);
		// pulls back toward the anchor
		assert!(f.unwrap()[0] < 0.);
		assert_eq!(gen.force(id, &pg, 0.), None);
	}

	#[test]
	fn test_bungee_variant() {
		let mut pg = ParticleGroup::default();
		let a = pg.add(Particle::default());
		let b = pg.add(Particle::new(V3::new(3., 0., 0.)));
		let bungee = ForceGenerator::Bungee {
			end: b,
			spring_constant: 2.,
			rest_length: 1.,
		};
		assert_eq!(bungee.end(), Some(b));
		let f = bungee.force(a, &pg, 0.1).unwrap();
		assert!((f - V3::new(4., 0., 0.)).norm() < 1e-5);
		let slack = ForceGenerator::Bungee {
			end: b,
			spring_constant: 2.,
			rest_length: 5.,
		};
		assert_eq!(slack.force(a, &pg, 0.1), None);
	}

	#[test]
	fn test_buoyancy_variant() {
		let b = Buoyancy::new(0.5, 0.1, 2.);
		let gen = ForceGenerator::from(b.clone());
		for y in [3., 2.25, 2., 1.] {
			let p = Particle::new(V3::new(0., y, 0.));
			let expect = b.force(&p);
			let (pg, id) = group(p);
			assert_eq!(gen.force(id, &pg, 0.1), expect);
		}
		let (pg, id) = group(Particle::new(V3::new(0., 1., 0.)));
		let f = gen.force(id, &pg, 0.1).unwrap();
		assert!((f - V3::new(0., 981., 0.)).norm() < 1e-2);
	}
}
