use super::cases::CaseResult;
use crate::errors::HysteresisErrors;
use csv::Writer;
use std::fs::File;
use std::path::Path;

pub fn format_result(result: &CaseResult) -> String {
    format!("Result for {}: {:.8}", result.name, result.dm_dt)
}

pub fn write_results<P: AsRef<Path>>(path: P, results: &[CaseResult]) -> Result<(), HysteresisErrors> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["name", "h (A/m)", "dH/dt (A/m/s)", "dM/dt (A/m/s)", "expected (A/m/s)"])?;
    for result in results {
        let expected = result
            .expected
            .map(|value| format!("{:.8}", value))
            .unwrap_or_default();
        writer.write_record([
            result.name.clone(),
            result.h.to_string(),
            result.dh_dt.to_string(),
            format!("{:.8}", result.dm_dt),
            expected,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
