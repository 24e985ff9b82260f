//! Quadratic-equation solver: discriminant, roots, vertex and a terminal
//! plot of the parabola.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
