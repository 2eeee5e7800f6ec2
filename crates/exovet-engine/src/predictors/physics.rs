//! Pure formula helpers shared by the builtin predictors.
//!
//! Formulas: transit depth `ΔF/F = (Rₚ/Rₛ)²`, Kepler's third law
//! `P² = 4π²a³/GM`, Stefan–Boltzmann `L = 4πRₛ²σT⁴`, habitable zone
//! `[0.95√L, 1.37√L]` AU, equilibrium temperature `278·(L/a²)^¼` K,
//! Doppler shift `Δλ/λ = v/c`.

use std::f64::consts::PI;

/// Gravitational constant, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.674e-11;
/// Astronomical unit, m.
pub const AU: f64 = 1.496e11;
/// Solar mass, kg.
pub const M_SUN: f64 = 1.989e30;
/// Solar radius, m.
pub const R_SUN: f64 = 6.96e8;
/// Earth radius, m.
pub const R_EARTH: f64 = 6.371e6;
/// Solar luminosity, W.
pub const L_SUN: f64 = 3.828e26;
/// Stefan–Boltzmann constant, W m⁻² K⁻⁴.
pub const SIGMA: f64 = 5.670e-8;
/// Speed of light, m/s.
pub const C: f64 = 2.998e8;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Transit depth for a planet/star radius pair (Earth radii, solar radii).
pub fn transit_depth(planet_radius_earth: f64, stellar_radius_solar: f64) -> f64 {
    let ratio = (planet_radius_earth * R_EARTH) / (stellar_radius_solar * R_SUN);
    ratio * ratio
}

/// Orbital distance in AU from stellar mass (solar masses) and period (days).
pub fn orbital_distance_au(stellar_mass_solar: f64, period_days: f64) -> f64 {
    let m = stellar_mass_solar * M_SUN;
    let p = period_days * SECONDS_PER_DAY;
    ((G * m * p * p) / (4.0 * PI * PI)).cbrt() / AU
}

/// Orbital period in days from stellar mass (solar masses) and distance (AU).
pub fn orbital_period_days(stellar_mass_solar: f64, distance_au: f64) -> f64 {
    let m = stellar_mass_solar * M_SUN;
    let a = distance_au * AU;
    ((4.0 * PI * PI * a * a * a) / (G * m)).sqrt() / SECONDS_PER_DAY
}

/// Stellar luminosity in solar units from radius (solar radii) and
/// effective temperature (K).
pub fn stellar_luminosity_solar(stellar_radius_solar: f64, temperature_k: f64) -> f64 {
    let r = stellar_radius_solar * R_SUN;
    4.0 * PI * r * r * SIGMA * temperature_k.powi(4) / L_SUN
}

/// Conservative habitable-zone bounds in AU for a given luminosity
/// (solar units).
pub fn habitable_zone_au(luminosity_solar: f64) -> (f64, f64) {
    let sqrt_l = luminosity_solar.max(0.0).sqrt();
    (0.95 * sqrt_l, 1.37 * sqrt_l)
}

/// Equilibrium temperature in K assuming Earth-like albedo.
pub fn equilibrium_temperature_k(luminosity_solar: f64, distance_au: f64) -> f64 {
    278.0 * (luminosity_solar / (distance_au * distance_au)).powf(0.25)
}

/// Fractional wavelength shift for a radial velocity in m/s.
pub fn doppler_shift_ratio(radial_velocity_ms: f64) -> f64 {
    radial_velocity_ms / C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_sun_transit_depth() {
        // (R_earth / R_sun)² ≈ 8.4e-5.
        let depth = transit_depth(1.0, 1.0);
        assert!((depth - 8.4e-5).abs() < 5e-6, "depth = {depth}");
    }

    #[test]
    fn earth_orbit_from_keplers_law() {
        let a = orbital_distance_au(1.0, 365.25);
        assert!((a - 1.0).abs() < 0.01, "a = {a}");
        let p = orbital_period_days(1.0, 1.0);
        assert!((p - 365.25).abs() < 2.0, "p = {p}");
    }

    #[test]
    fn solar_luminosity_is_one_solar_unit() {
        let l = stellar_luminosity_solar(1.0, 5772.0);
        assert!((l - 1.0).abs() < 0.05, "l = {l}");
    }

    #[test]
    fn earth_sits_in_solar_habitable_zone() {
        let (inner, outer) = habitable_zone_au(1.0);
        assert!(inner < 1.0 && 1.0 < outer);
    }

    #[test]
    fn earth_equilibrium_temperature() {
        let t = equilibrium_temperature_k(1.0, 1.0);
        assert!((t - 278.0).abs() < 1.0, "t = {t}");
    }

    #[test]
    fn doppler_ratio_scales_with_velocity() {
        let ratio = doppler_shift_ratio(29_980.0);
        assert!((ratio - 1e-4).abs() < 1e-6);
    }
}
