use crate::particle::PId;
use crate::particle_group::ParticleGroup;
use crate::{Real, V3};

/// One resolvable violation between a particle and either a second particle
/// or the immovable world.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
	pub p1: PId,
	pub p2: Option<PId>,
	// direction p1 moves to resolve, in world coordinates
	pub normal: V3,
	pub penetration: Real,
	pub restitution: Real,
	// set by resolution, read by propagation
	pub movement: [V3; 2],
}

impl Default for Contact {
	fn default() -> Self {
		Self::single(PId(0), V3::zeros(), 0., 0.)
	}
}

impl Contact {
	pub fn single(
		p: PId,
		normal: V3,
		penetration: Real,
		restitution: Real,
	) -> Self {
		Self {
			p1: p,
			p2: None,
			normal,
			penetration,
			restitution,
			movement: [V3::zeros(); 2],
		}
	}

	pub fn pair(
		p1: PId,
		p2: PId,
		normal: V3,
		penetration: Real,
		restitution: Real,
	) -> Self {
		Self {
			p2: Some(p2),
			..Self::single(p1, normal, penetration, restitution)
		}
	}

	pub fn separating_velocity(&self, particles: &ParticleGroup) -> Real {
		let mut rel = particles[self.p1].get_vel();
		if let Some(p2) = self.p2 {
			rel -= particles[p2].get_vel();
		}
		rel.dot(&self.normal)
	}

	fn total_imass(&self, particles: &ParticleGroup) -> Real {
		let mut imass = particles[self.p1].get_imass();
		if let Some(p2) = self.p2 {
			imass += particles[p2].get_imass();
		}
		imass
	}

	pub fn resolve(&mut self, particles: &mut ParticleGroup, dt: Real) {
		self.movement = [V3::zeros(); 2];
		self.resolve_velocity(particles, dt);
		self.resolve_interpenetration(particles);
	}

	fn resolve_velocity(&self, particles: &mut ParticleGroup, dt: Real) {
		let sep = self.separating_velocity(particles);
		if sep > 0. {
			return;
		}
		let mut new_sep = -sep * self.restitution;

		// closing velocity built up by acceleration during this step alone
		let mut accel = particles[self.p1].get_accel();
		if let Some(p2) = self.p2 {
			accel -= particles[p2].get_accel();
		}
		let accel_sep = accel.dot(&self.normal) * dt;
		if accel_sep < 0. {
			new_sep += self.restitution * accel_sep;
			if new_sep < 0. {
				new_sep = 0.;
			}
		}

		let imass = self.total_imass(particles);
		if imass <= 0. {
			return;
		}
		let impulse = self.normal * ((new_sep - sep) / imass);
		let p1 = &mut particles[self.p1];
		let imass1 = p1.get_imass();
		p1.add_vel(impulse * imass1);
		if let Some(p2) = self.p2 {
			let p2 = &mut particles[p2];
			let imass2 = p2.get_imass();
			p2.add_vel(impulse * -imass2);
		}
	}

	fn resolve_interpenetration(&mut self, particles: &mut ParticleGroup) {
		if self.penetration <= 0. {
			return;
		}
		let imass = self.total_imass(particles);
		if imass <= 0. {
			return;
		}
		let move_per_imass = self.normal * (self.penetration / imass);
		self.movement[0] = move_per_imass * particles[self.p1].get_imass();
		particles[self.p1].add_pos(self.movement[0]);
		if let Some(p2) = self.p2 {
			self.movement[1] = move_per_imass * -particles[p2].get_imass();
			particles[p2].add_pos(self.movement[1]);
		}
	}
}
