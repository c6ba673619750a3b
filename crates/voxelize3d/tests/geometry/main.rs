extern crate nalgebra as na;

mod fill_modes;
mod meshes;
mod properties;
mod scenarios;
