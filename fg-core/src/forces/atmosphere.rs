//! Standard-atmosphere gas density as a function of altitude.
//!
//! Barometric formula with a linear temperature lapse, valid inside the
//! troposphere only:
//!
//! ```text
//! T(h) = T0 - L·h
//! p(h) = p0 · (1 - L·h/T0)^(g·M / (R·L))
//! ρ(h) = p(h)·M / (R·T(h))
//! ```
//!
//! `p0` is expressed in kPa, so densities come out a factor of 1000 below
//! kg/m³. The lift model and its demo are tuned in those units.

/// Molar mass of dry air (kg/mol)
pub const MOLAR_MASS_AIR: f64 = 0.0289644;

/// Molar mass of helium (kg/mol)
pub const MOLAR_MASS_HELIUM: f64 = 0.004002602;

/// Constants of the barometric model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Sea-level pressure (kPa)
    pub sea_level_pressure: f64,
    /// Sea-level temperature (K)
    pub sea_level_temperature: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Temperature lapse rate (K/m)
    pub lapse_rate: f64,
    /// Universal gas constant (J/(mol·K))
    pub gas_constant: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Atmosphere {
    pub const STANDARD: Atmosphere = Atmosphere {
        sea_level_pressure: 101.325,
        sea_level_temperature: 288.15,
        gravity: 9.80665,
        lapse_rate: 0.0065,
        gas_constant: 8.31447,
    };

    /// Altitude at which the modeled temperature reaches absolute zero.
    ///
    /// Every formula here is undefined at or above it.
    pub fn ceiling(&self) -> f64 {
        self.sea_level_temperature / self.lapse_rate
    }

    pub fn is_within_troposphere(&self, altitude: f64) -> bool {
        altitude < self.ceiling()
    }

    /// Temperature (K) at `altitude` meters.
    pub fn temperature(&self, altitude: f64) -> f64 {
        self.sea_level_temperature - self.lapse_rate * altitude
    }

    /// Pressure (kPa) at `altitude` meters for a gas of molar mass `molar_mass`.
    pub fn pressure(&self, altitude: f64, molar_mass: f64) -> f64 {
        let base = 1.0 - (self.lapse_rate * altitude) / self.sea_level_temperature;
        let exponent = (self.gravity * molar_mass) / (self.gas_constant * self.lapse_rate);
        self.sea_level_pressure * base.powf(exponent)
    }

    /// Density of a gas with `molar_mass` at `altitude` meters.
    pub fn gas_density(&self, altitude: f64, molar_mass: f64) -> f64 {
        debug_assert!(
            self.is_within_troposphere(altitude),
            "altitude {} m is above the modeled troposphere ({} m)",
            altitude,
            self.ceiling()
        );
        let pressure = self.pressure(altitude, molar_mass);
        (pressure * molar_mass) / (self.gas_constant * self.temperature(altitude))
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.gas_density(altitude, MOLAR_MASS_AIR)
    }

    pub fn helium_density(&self, altitude: f64) -> f64 {
        self.gas_density(altitude, MOLAR_MASS_HELIUM)
    }
}

/// Linear mapping between game altitude (scene units) and world altitude (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeScale {
    /// World meters per game unit.
    pub factor: f64,
}

impl Default for AltitudeScale {
    fn default() -> Self {
        Self { factor: 10.0 }
    }
}

impl AltitudeScale {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn to_world(&self, game_altitude: f64) -> f64 {
        game_altitude * self.factor
    }

    pub fn to_game(&self, world_altitude: f64) -> f64 {
        world_altitude / self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIR_AT_SEA_LEVEL: f64 = 0.0012249770558773227;
    const HELIUM_AT_SEA_LEVEL: f64 = 0.00016928006842222465;

    #[test]
    fn test_sea_level_reference_densities() {
        let atmosphere = Atmosphere::STANDARD;

        let air = atmosphere.air_density(0.0);
        let helium = atmosphere.helium_density(0.0);

        assert!((air - AIR_AT_SEA_LEVEL).abs() < 1e-15, "air density {}", air);
        assert!((helium - HELIUM_AT_SEA_LEVEL).abs() < 1e-15, "helium density {}", helium);
    }

    #[test]
    fn test_sea_level_pressure_and_temperature() {
        let atmosphere = Atmosphere::default();
        assert_eq!(atmosphere.pressure(0.0, MOLAR_MASS_AIR), 101.325);
        assert_eq!(atmosphere.temperature(0.0), 288.15);
    }

    #[test]
    fn test_air_density_decreases_with_altitude() {
        let atmosphere = Atmosphere::default();
        let mut last = atmosphere.air_density(0.0);

        let mut h = 250.0;
        while h < 11_000.0 {
            let density = atmosphere.air_density(h);
            assert!(density < last, "density did not drop at {} m", h);
            last = density;
            h += 250.0;
        }
    }

    #[test]
    fn test_air_density_at_one_kilometer() {
        let density = Atmosphere::default().air_density(1000.0);
        assert!((density - 0.0011116241616500437).abs() < 1e-12, "got {}", density);
    }

    #[test]
    fn test_troposphere_envelope() {
        let atmosphere = Atmosphere::default();
        assert!((atmosphere.ceiling() - 44_330.769_230_769_23).abs() < 1e-6);
        assert!(atmosphere.is_within_troposphere(10_000.0));
        assert!(!atmosphere.is_within_troposphere(50_000.0));
    }

    #[test]
    fn test_altitude_scale_roundtrip() {
        let scale = AltitudeScale::default();
        assert_eq!(scale.to_world(10.0), 100.0);
        assert_eq!(scale.to_game(100.0), 10.0);
    }
}
