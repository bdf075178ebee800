use rand::Rng;

/// A single temperature/humidity reading from the (simulated) sensor.
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    /// Samples a simulated sensor. Values cluster in the indoor range with
    /// occasional outliers, rounded to one decimal like the Sense HAT firmware
    /// reports them.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let temperature = if rng.gen_bool(0.05) {
            rng.gen_range(-50.0..100.0) // 5% outliers
        } else {
            rng.gen_range(15.0..35.0) // Normal range
        };

        let humidity = if rng.gen_bool(0.05) {
            rng.gen_range(0.0..100.0) // 5% outliers
        } else {
            rng.gen_range(30.0..80.0) // Normal range
        };

        Self {
            temperature: round_tenth(temperature),
            humidity: round_tenth(humidity),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_in_sensor_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let reading = Reading::sample(&mut rng);
            assert!((-50.0..=100.0).contains(&reading.temperature));
            assert!((0.0..=100.0).contains(&reading.humidity));
        }
    }

    #[test]
    fn test_rounded_to_one_decimal() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let reading = Reading::sample(&mut rng);
            assert_eq!(reading.temperature, round_tenth(reading.temperature));
            assert_eq!(reading.humidity, round_tenth(reading.humidity));
        }
    }
}
