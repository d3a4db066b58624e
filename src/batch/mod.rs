//! Epoch Processing Module
//! 
//! This module seals epochs: each epoch's candidates are ordered by the scheduler,
//! filtered by the validator, and summarised in an `EpochReport`.

mod engine;


pub use engine::EpochEngine;
