use crate::errors::{Error, Result};
use crate::model::NewMeasurement;

const TEMP_MIN: f64 = -50.0;
const TEMP_MAX: f64 = 100.0;
const HUMIDITY_MIN: f64 = 0.0;
const HUMIDITY_MAX: f64 = 100.0;

/// Validates an incoming measurement before it is stored
pub fn validate(measurement: &NewMeasurement) -> Result<()> {
    // Validate temperature (finite check catches NaN, which compares false)
    if !measurement.temperature.is_finite()
        || measurement.temperature < TEMP_MIN
        || measurement.temperature > TEMP_MAX
    {
        return Err(Error::Validation(format!(
            "Temperature {} out of range [{}, {}]",
            measurement.temperature, TEMP_MIN, TEMP_MAX
        )));
    }

    // Validate humidity
    if !measurement.humidity.is_finite()
        || measurement.humidity < HUMIDITY_MIN
        || measurement.humidity > HUMIDITY_MAX
    {
        return Err(Error::Validation(format!(
            "Humidity {} out of range [{}, {}]",
            measurement.humidity, HUMIDITY_MIN, HUMIDITY_MAX
        )));
    }

    // Validate device_id
    if measurement.device_id.is_empty() {
        return Err(Error::Validation("Device ID cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(device_id: &str, temperature: f64, humidity: f64) -> NewMeasurement {
        NewMeasurement {
            device_id: device_id.to_string(),
            temperature,
            humidity,
        }
    }

    #[test]
    fn test_valid_measurement() {
        assert!(validate(&measurement("raspberry-pi-01", 22.5, 55.0)).is_ok());
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(validate(&measurement("dev-1", -50.0, 0.0)).is_ok());
        assert!(validate(&measurement("dev-1", 100.0, 100.0)).is_ok());
    }

    #[test]
    fn test_invalid_temperature() {
        assert!(validate(&measurement("dev-1", 150.0, 55.0)).is_err());
    }

    #[test]
    fn test_invalid_humidity() {
        assert!(validate(&measurement("dev-1", 22.5, -5.0)).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(validate(&measurement("dev-1", f64::NAN, 55.0)).is_err());
        assert!(validate(&measurement("dev-1", 22.5, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_empty_device_id() {
        assert!(validate(&measurement("", 22.5, 55.0)).is_err());
    }
}
