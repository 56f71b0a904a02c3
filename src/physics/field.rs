use crate::models::FieldSample;
use nalgebra as na;

pub const VACUUM_PERMEABILITY: f64 = 4.0 * std::f64::consts::PI * 1e-7; // [T*m/A]

// Only the apparent rate from body rotation is modelled: dB/dt = -omega x B
pub fn project(
    orientation: &na::Vector3<f64>,
    b_body: &na::Vector3<f64>,
    omega_body: &na::Vector3<f64>,
) -> FieldSample {
    // Convert B [T] to H [A/m]
    let h = b_body.dot(orientation) / VACUUM_PERMEABILITY;

    let db_dt_body = -omega_body.cross(b_body);
    let dh_dt = db_dt_body.dot(orientation) / VACUUM_PERMEABILITY;

    FieldSample { h, dh_dt }
}

pub fn bh_sample(h_max: f64, frequency: f64, t: f64) -> FieldSample {
    let omega = 2.0 * std::f64::consts::PI * frequency;
    FieldSample {
        h: h_max * (omega * t).sin(),
        dh_dt: h_max * omega * (omega * t).cos(),
    }
}

// B = mu0 * (H + M)
pub fn flux_density(h: f64, m: f64) -> f64 {
    VACUUM_PERMEABILITY * (h + m)
}
