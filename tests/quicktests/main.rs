//! Property tests driving the public API of each structure.

mod priority;
mod tree;
mod turns;
