//! Generates a deterministic sample temperature CSV for demos and manual
//! testing. The layout matches real country temperature exports: monthly
//! records with `dt`, `AverageTemperature`, `AverageTemperatureUncertainty`,
//! and `Country` columns, including occasional missing temperatures and a
//! sprinkle of unparseable dates.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-country climate shape: baseline, seasonal swing, warming per century
struct CountryProfile {
    name: &'static str,
    base_temperature: f64,
    seasonal_amplitude: f64,
    warming_per_century: f64,
}

const PROFILES: &[CountryProfile] = &[
    CountryProfile {
        name: "Kenya",
        base_temperature: 24.5,
        seasonal_amplitude: 1.5,
        warming_per_century: 0.8,
    },
    CountryProfile {
        name: "United States",
        base_temperature: 8.5,
        seasonal_amplitude: 11.0,
        warming_per_century: 1.2,
    },
    CountryProfile {
        name: "India",
        base_temperature: 24.0,
        seasonal_amplitude: 4.5,
        warming_per_century: 0.9,
    },
    CountryProfile {
        name: "Brazil",
        base_temperature: 24.8,
        seasonal_amplitude: 2.0,
        warming_per_century: 0.7,
    },
    CountryProfile {
        name: "Norway",
        base_temperature: 1.5,
        seasonal_amplitude: 9.0,
        warming_per_century: 1.5,
    },
];

const FIRST_YEAR: i32 = 1850;
const LAST_YEAR: i32 = 2013;

// Deterministic cadence for imperfect rows
const MISSING_TEMPERATURE_EVERY: u64 = 97;
const BAD_DATE_EVERY: u64 = 1500;

fn monthly_temperature(
    profile: &CountryProfile,
    year: i32,
    month: u32,
    rng: &mut SimpleRng,
) -> f64 {
    let trend = profile.warming_per_century * f64::from(year - FIRST_YEAR) / 100.0;
    let season_angle = 2.0 * std::f64::consts::PI * (f64::from(month) - 1.0) / 12.0;
    let seasonal = -profile.seasonal_amplitude * season_angle.cos();

    profile.base_temperature + trend + seasonal + rng.gauss(0.0, 0.6)
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_temperatures.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create output file {}", output_path))?;

    writer
        .write_record([
            "dt",
            "AverageTemperature",
            "AverageTemperatureUncertainty",
            "Country",
        ])
        .context("Failed to write header row")?;

    let mut rows_written: u64 = 0;
    let mut rows_missing: u64 = 0;
    let mut rows_bad_date: u64 = 0;

    for profile in PROFILES {
        for year in FIRST_YEAR..=LAST_YEAR {
            for month in 1..=12u32 {
                rows_written += 1;

                let date = if rows_written % BAD_DATE_EVERY == 0 {
                    rows_bad_date += 1;
                    format!("{}-13-01", year)
                } else {
                    format!("{}-{:02}-01", year, month)
                };

                let temperature = if rows_written % MISSING_TEMPERATURE_EVERY == 0 {
                    rows_missing += 1;
                    String::new()
                } else {
                    format!("{:.3}", monthly_temperature(profile, year, month, &mut rng))
                };

                let uncertainty = format!("{:.3}", 0.1 + rng.next_f64() * 0.9);

                writer
                    .write_record([date.as_str(), &temperature, &uncertainty, profile.name])
                    .with_context(|| format!("Failed to write row {}", rows_written))?;
            }
        }
    }

    writer.flush().context("Failed to flush output file")?;

    println!(
        "Wrote {} rows for {} countries ({} to {}) to {}",
        rows_written,
        PROFILES.len(),
        FIRST_YEAR,
        LAST_YEAR,
        output_path
    );
    println!(
        "Imperfect rows: {} missing temperatures, {} unparseable dates",
        rows_missing, rows_bad_date
    );

    Ok(())
}
