//! Unit test modules.

mod autoregulation_test;
mod mesocycle_test;
mod program_test;
mod tuning_test;
