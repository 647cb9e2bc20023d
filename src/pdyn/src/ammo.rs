use crate::error::PdynResult;
use crate::onb::Onb;
use crate::particle::Particle;
use crate::vector::{out_of_screen, up};
use crate::{Real, V3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotType {
	Pistol,
	Artillery,
	Fireball,
	Laser,
}

pub const SHOT_TYPES: [ShotType; 4] = [
	ShotType::Pistol,
	ShotType::Artillery,
	ShotType::Fireball,
	ShotType::Laser,
];

struct Preset {
	mass: Real,
	vel: [Real; 3],
	accel: [Real; 3],
	damping: Real,
}

impl ShotType {
	fn preset(&self) -> Preset {
		use ShotType::*;
		match self {
			Pistol => Preset {
				mass: 2.0,
				vel: [0., 0., 35.],
				accel: [0., -1.0, 0.],
				damping: 0.99,
			},
			Artillery => Preset {
				mass: 200.0,
				vel: [0., 30., 40.],
				accel: [0., -20.0, 0.],
				damping: 0.99,
			},
			Fireball => Preset {
				mass: 1.0,
				vel: [0., 0., 10.],
				accel: [0., 0.6, 0.], // floats
				damping: 0.9,
			},
			Laser => Preset {
				mass: 0.1,
				vel: [0., 0., 100.],
				accel: [0., 0., 0.],
				damping: 0.99,
			},
		}
	}

	/// A round at `origin` fired along +z.
	pub fn template(&self, origin: V3) -> PdynResult<Particle> {
		self.fire(origin, out_of_screen())
	}

	/// A round at `origin` fired along `aim`, the launch velocity is the
	/// preset one turned so that its forward axis follows `aim`.
	pub fn fire(&self, origin: V3, aim: V3) -> PdynResult<Particle> {
		let preset = self.preset();
		let frame = Onb::from_w_up(aim, up())?;
		let [x, y, z] = preset.vel;
		let [ax, ay, az] = preset.accel;
		Particle::new(origin)
			.with_vel(frame.local(x, y, z))
			.with_accel(V3::new(ax, ay, az))
			.with_mass(preset.mass)?
			.with_damping(preset.damping)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::error::PdynError;
	use crate::vector::right;

	#[test]
	fn test_presets() {
		let origin = V3::new(0., 1.5, 0.);
		let p = ShotType::Artillery.template(origin).unwrap();
		assert_eq!(p.get_pos(), origin);
		assert!((p.get_vel() - V3::new(0., 30., 40.)).norm() < 1e-4);
		assert_eq!(p.get_accel(), V3::new(0., -20., 0.));
		assert!((p.get_mass() - 200.).abs() < 1e-2);
		let laser = ShotType::Laser.template(origin).unwrap();
		assert_eq!(laser.get_accel(), V3::zeros());
		assert_eq!(laser.get_damping(), 0.99);
	}

	#[test]
	fn test_aimed() {
		let p = ShotType::Artillery.fire(V3::zeros(), right()).unwrap();
		// forward is +x now, the lift stays up
		assert!((p.get_vel() - V3::new(40., 30., 0.)).norm() < 1e-4);
		assert_eq!(
			ShotType::Pistol.fire(V3::zeros(), up()),
			Err(PdynError::DegenerateBasis)
		);
	}
}
