//! Integration test crate for LaneCut.
//!
//! This crate exists solely to hold cross-crate tests that exercise the
//! arrangement, gesture, and playback layers together.


#[cfg(test)]
mod arrangement;

#[cfg(test)]
mod interaction;
