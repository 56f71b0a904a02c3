use crate::errors::HysteresisErrors;
use crate::models::RodParameters;
use crate::physics::field::project;
use crate::physics::hysteresis::dmdt;
use csv::ReaderBuilder;
use log::debug;
use nalgebra as na;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum CaseInput {
    /// Field and rate along the rod supplied directly.
    Field { h: f64, dh_dt: f64 },
    /// Field and rate derived through the projector.
    Vectors {
        orientation: na::Vector3<f64>,
        b_body: na::Vector3<f64>,
        omega_body: na::Vector3<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCase {
    pub name: String,
    pub m: f64,
    pub input: CaseInput,
    pub expected: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub name: String,
    pub h: f64,
    pub dh_dt: f64,
    pub dm_dt: f64,
    pub expected: Option<f64>,
}

impl CaseResult {
    /// `None` when there is no reference value to compare against.
    pub fn passes(&self, tolerance: f64) -> Option<bool> {
        self.expected
            .map(|expected| (self.dm_dt - expected).abs() <= tolerance)
    }
}

/// The reference fixtures and the values the reference model printed for them.
pub fn reference_cases() -> Vec<VerificationCase> {
    vec![
        VerificationCase {
            name: "MagnetizationDerivativeFromH".to_string(),
            m: 5.0e4,
            input: CaseInput::Field {
                h: 1.5e3,
                dh_dt: 1.0e2,
            },
            expected: Some(-782.51825848),
        },
        VerificationCase {
            name: "MagnetizationDerivative".to_string(),
            m: 5.0e4,
            input: CaseInput::Vectors {
                orientation: na::Vector3::new(1.0, 0.0, 0.0),
                b_body: na::Vector3::new(0.002, 0.001, 0.0),
                omega_body: na::Vector3::new(0.0, 0.0, 0.1),
            },
            expected: Some(-510.24644148),
        },
        VerificationCase {
            name: "NegativeDhDt".to_string(),
            m: 5.0e4,
            input: CaseInput::Field {
                h: 1.5e3,
                dh_dt: -1.0e2,
            },
            expected: Some(-1650.58156137),
        },
    ]
}

pub fn evaluate(params: &RodParameters, case: &VerificationCase) -> CaseResult {
    let (h, dh_dt) = match &case.input {
        CaseInput::Field { h, dh_dt } => (*h, *dh_dt),
        CaseInput::Vectors {
            orientation,
            b_body,
            omega_body,
        } => {
            let sample = project(orientation, b_body, omega_body);
            (sample.h, sample.dh_dt)
        }
    };

    CaseResult {
        name: case.name.clone(),
        h,
        dh_dt,
        dm_dt: dmdt(params, case.m, h, dh_dt),
        expected: case.expected,
    }
}

/// Parses `x,y,z` (or `x;y;z`) into a vector.
pub fn parse_vec3(text: &str) -> Result<na::Vector3<f64>, HysteresisErrors> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c == ';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != 3 {
        return Err(HysteresisErrors::InvalidVector(text.to_string()));
    }

    Ok(na::Vector3::new(
        tokens[0].parse::<f64>()?,
        tokens[1].parse::<f64>()?,
        tokens[2].parse::<f64>()?,
    ))
}

#[derive(Debug, Deserialize)]
struct CaseRecord {
    name: String,
    m: f64,
    h: Option<f64>,
    dh_dt: Option<f64>,
    orientation: Option<String>,
    b_body: Option<String>,
    omega_body: Option<String>,
    expected: Option<f64>,
}

impl CaseRecord {
    fn into_case(self) -> Result<VerificationCase, HysteresisErrors> {
        let input = match (self.h, self.dh_dt, &self.orientation, &self.b_body, &self.omega_body) {
            (Some(h), Some(dh_dt), _, _, _) => CaseInput::Field { h, dh_dt },
            (_, _, Some(orientation), Some(b_body), Some(omega_body)) => CaseInput::Vectors {
                orientation: parse_vec3(orientation)?,
                b_body: parse_vec3(b_body)?,
                omega_body: parse_vec3(omega_body)?,
            },
            _ => return Err(HysteresisErrors::InvalidCase(self.name)),
        };

        Ok(VerificationCase {
            name: self.name,
            m: self.m,
            input,
            expected: self.expected,
        })
    }
}

/// Reads cases from a CSV file with header
/// `name,m,h,dh_dt,orientation,b_body,omega_body[,expected]`.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<VerificationCase>, HysteresisErrors> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut cases = Vec::new();
    for record in reader.deserialize::<CaseRecord>() {
        cases.push(record?.into_case()?);
    }

    debug!("loaded {} cases from {:?}", cases.len(), path.as_ref());
    Ok(cases)
}
