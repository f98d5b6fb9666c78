//! Complex arithmetic and level conversions

pub mod complex;
pub mod levels;

pub use complex::{Complex, conjugate_all, real_sequence, scale_all, unit_phasor};
pub use levels::{
    db_to_linear_amplitude, db_to_linear_power, linear_amplitude_to_db, linear_power_to_db,
};
