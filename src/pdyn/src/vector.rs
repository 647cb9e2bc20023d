use crate::{Real, V3};

pub const GRAVITY_MAG: Real = 9.81;

pub fn gravity() -> V3 {
	V3::new(0., -GRAVITY_MAG, 0.)
}

pub fn high_gravity() -> V3 {
	V3::new(0., -20.62, 0.)
}

pub fn up() -> V3 {
	V3::new(0., 1., 0.)
}

pub fn right() -> V3 {
	V3::new(1., 0., 0.)
}

pub fn out_of_screen() -> V3 {
	V3::new(0., 0., 1.)
}

pub trait VecExt {
	/// Unit vector, or zero when the length is zero.
	fn unit(&self) -> V3;

	fn add_scaled(&mut self, v: &V3, s: Real);

	/// Limit the length to `size`.
	fn trimmed(&self, size: Real) -> V3;
}

impl VecExt for V3 {
	fn unit(&self) -> V3 {
		self.try_normalize(0.).unwrap_or_else(V3::zeros)
	}

	fn add_scaled(&mut self, v: &V3, s: Real) {
		*self += v * s;
	}

	fn trimmed(&self, size: Real) -> V3 {
		if self.norm_squared() > size * size {
			self.unit() * size
		} else {
			*self
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_unit_of_zero() {
		assert_eq!(V3::zeros().unit(), V3::zeros());
		let u = V3::new(3., 0., 4.).unit();
		assert!((u.norm() - 1.).abs() < 1e-6);
		assert!((u[2] - 0.8).abs() < 1e-6);
	}

	#[test]
	fn test_trimmed() {
		let v = V3::new(0., 10., 0.);
		assert_eq!(v.trimmed(2.), V3::new(0., 2., 0.));
		assert_eq!(v.trimmed(20.), v);
	}

	#[test]
	fn test_add_scaled() {
		let mut v = V3::new(1., 1., 1.);
		v.add_scaled(&up(), -2.);
		assert_eq!(v, V3::new(1., -1., 1.));
		assert_eq!(up().cross(&right()), -out_of_screen());
	}
}
