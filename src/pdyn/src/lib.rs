pub mod ammo;
pub mod contact;
pub mod error;
pub mod force;
pub mod link;
pub mod onb;
pub mod particle;
pub mod particle_group;
pub mod pworld;
pub mod resolver;
pub mod rig;
pub mod vector;

pub type Real = f32;
pub type V3 = nalgebra::Vector3<Real>;
