//! Coconut island: a small animated scene where coconuts drop onto a spinning
//! island, one sliding down its slope and one coming to rest, while the palm
//! sways and the sun sets.

pub mod engine;
