use crate::error::{PdynError, PdynResult};
use crate::vector::VecExt;
use crate::{Real, V3};

/// Orthonormal basis, `w` is the primary axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Onb {
	pub axis: [V3; 3],
}

impl Onb {
	pub fn u(&self) -> V3 {
		self.axis[0]
	}

	pub fn v(&self) -> V3 {
		self.axis[1]
	}

	pub fn w(&self) -> V3 {
		self.axis[2]
	}

	pub fn local(&self, a: Real, b: Real, c: Real) -> V3 {
		self.u() * a + self.v() * b + self.w() * c
	}

	pub fn local_v(&self, p: V3) -> V3 {
		self.local(p[0], p[1], p[2])
	}

	/// Basis around a surface normal, the other two axes are arbitrary.
	pub fn from_w(normal: V3) -> PdynResult<Self> {
		let w = normal.unit();
		if w == V3::zeros() {
			return Err(PdynError::DegenerateBasis);
		}
		let a = if w[0].abs() > 0.9 {
			V3::new(0., 1., 0.)
		} else {
			V3::new(1., 0., 0.)
		};
		let v = w.cross(&a).unit();
		let u = w.cross(&v);
		Ok(Self { axis: [u, v, w] })
	}

	/// Basis looking along `front` with `v` as close to `up` as possible.
	/// `from_w_up(z, y)` is the identity basis.
	pub fn from_w_up(front: V3, up: V3) -> PdynResult<Self> {
		let w = front.unit();
		let u = up.cross(&w);
		if u.norm_squared() == 0. {
			return Err(PdynError::DegenerateBasis);
		}
		let u = u.unit();
		let v = w.cross(&u);
		Ok(Self { axis: [u, v, w] })
	}

	/// Basis whose `u` is along `a` and whose `v` is normal to the plane of
	/// `a` and `b`.
	pub fn from_two(a: V3, b: V3) -> PdynResult<Self> {
		let u = a.unit();
		let c = u.cross(&b);
		if c.norm_squared() == 0. {
			return Err(PdynError::DegenerateBasis);
		}
		let v = c.unit();
		let w = v.cross(&u);
		Ok(Self { axis: [u, v, w] })
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::vector::{out_of_screen, right, up};

	fn assert_orthonormal(onb: &Onb) {
		for i in 0..3 {
			assert!((onb.axis[i].norm() - 1.).abs() < 1e-5);
			for j in (i + 1)..3 {
				assert!(onb.axis[i].dot(&onb.axis[j]).abs() < 1e-5);
			}
		}
	}

	#[test]
	fn test_from_w_up_identity() {
		let onb = Onb::from_w_up(out_of_screen(), up()).unwrap();
		assert!((onb.u() - right()).norm() < 1e-6);
		assert!((onb.v() - up()).norm() < 1e-6);
		let p = V3::new(0., 30., 40.);
		assert!((onb.local_v(p) - p).norm() < 1e-5);
	}

	#[test]
	fn test_from_w() {
		let onb = Onb::from_w(V3::new(2., 0.1, 0.)).unwrap();
		assert_orthonormal(&onb);
		let onb = Onb::from_w(V3::new(0., 0., -3.)).unwrap();
		assert_orthonormal(&onb);
		assert!((onb.w() - V3::new(0., 0., -1.)).norm() < 1e-6);
	}

	#[test]
	fn test_degenerate() {
		assert_eq!(Onb::from_w(V3::zeros()), Err(PdynError::DegenerateBasis));
		assert_eq!(
			Onb::from_w_up(up() * 2., up()),
			Err(PdynError::DegenerateBasis)
		);
		assert_eq!(
			Onb::from_two(right(), right() * -4.),
			Err(PdynError::DegenerateBasis)
		);
		let onb = Onb::from_two(right(), up()).unwrap();
		assert_orthonormal(&onb);
		assert!((onb.v() - out_of_screen()).norm() < 1e-6);
	}
}
