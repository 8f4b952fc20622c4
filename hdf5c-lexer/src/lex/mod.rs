//! Main module for hdf5c library functionality

pub mod lexing;
pub mod registry;
pub mod testing;
pub mod token;
