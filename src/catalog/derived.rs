//! Formulas for the derived constants.
//!
//! Each expression keeps the operand order and grouping of the textbook formula;
//! integer powers are spelled out as products so the rounding is fixed.
//! `ThomsonCrossSection` is `(8π/3)·rₑ²`; the legacy catalog divided by `rₑ²`
//! instead, and this value intentionally does not match it.
use super::names::*;
use crate::store::{ConstantRegistry, ConstantValue, RegistryResult};
use std::f64::consts::PI;

pub const OHM: &str = "\u{03A9}";

#[inline(always)]
fn square(x: f64) -> f64 { x * x }

#[inline(always)]
fn cube(x: f64) -> f64 { x * (x * x) }

#[inline(always)]
fn fourth(x: f64) -> f64 { (x * x) * (x * x) }

pub fn declare_derived_constants(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    declare_mass_and_action(registry)?;
    declare_radiation(registry)?;
    declare_electromagnetic(registry)?;
    declare_molar(registry)?;
    declare_atomic(registry)
}

fn declare_mass_and_action(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    registry.declare_derived(PROTON_ELECTRON_MASS_RATIO, &[PROTON_MASS, ELECTRON_MASS], |i| {
        let mp = i.value(PROTON_MASS)?;
        let me = i.value(ELECTRON_MASS)?;
        Ok(ConstantValue::new(mp / me, ""))
    })?;

    // ħ = h / 2π, same unit as h.
    registry.declare_derived(REDUCED_PLANCK_CONSTANT, &[PLANCK_CONSTANT], |i| {
        let h = i.get(PLANCK_CONSTANT)?;
        Ok(ConstantValue::new(h.value() / (2.0 * PI), h.unit()))
    })?;

    // Alias of the Newtonian constant.
    registry.declare_derived(GRAVITATIONAL_CONSTANT, &[NEWTONIAN_CONSTANT_OF_GRAVITATION], |i| {
        i.get(NEWTONIAN_CONSTANT_OF_GRAVITATION).cloned()
    })?;

    Ok(())
}

fn declare_radiation(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    // σ = π²k⁴ / (60ħ³c²)
    registry.declare_derived(
        STEFAN_BOLTZMANN_CONSTANT,
        &[BOLTZMANN_CONSTANT, REDUCED_PLANCK_CONSTANT, SPEED_OF_LIGHT],
        |i| {
            let k = i.value(BOLTZMANN_CONSTANT)?;
            let hbar = i.value(REDUCED_PLANCK_CONSTANT)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            let num = square(PI) * fourth(k);
            let den = 60.0 * cube(hbar) * square(c);
            Ok(ConstantValue::new(num / den, "W/m^2/K^4"))
        },
    )?;

    // c₁ = 2πhc²
    registry.declare_derived(FIRST_RADIATION_CONSTANT, &[PLANCK_CONSTANT, SPEED_OF_LIGHT], |i| {
        let h = i.value(PLANCK_CONSTANT)?;
        let c = i.value(SPEED_OF_LIGHT)?;
        Ok(ConstantValue::new(2.0 * PI * h * square(c), "W.m^2"))
    })?;

    // c₁L = 2hc²
    registry.declare_derived(
        FIRST_RADIATION_CONSTANT_SPECTRAL_RADIANCE,
        &[PLANCK_CONSTANT, SPEED_OF_LIGHT],
        |i| {
            let h = i.value(PLANCK_CONSTANT)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            Ok(ConstantValue::new(2.0 * h * square(c), "W.m^2/sr"))
        },
    )?;

    // c₂ = hc / k
    registry.declare_derived(
        SECOND_RADIATION_CONSTANT,
        &[PLANCK_CONSTANT, SPEED_OF_LIGHT, BOLTZMANN_CONSTANT],
        |i| {
            let h = i.value(PLANCK_CONSTANT)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            let k = i.value(BOLTZMANN_CONSTANT)?;
            Ok(ConstantValue::new(h * c * (1.0 / k), "m.K"))
        },
    )?;

    Ok(())
}

fn declare_electromagnetic(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    // μ₀ = 4παħ / (e²c)
    registry.declare_derived(
        VACUUM_MAGNETIC_PERMEABILITY,
        &[FINE_STRUCTURE_CONSTANT, REDUCED_PLANCK_CONSTANT, ELEMENTARY_CHARGE, SPEED_OF_LIGHT],
        |i| {
            let alpha = i.value(FINE_STRUCTURE_CONSTANT)?;
            let hbar = i.value(REDUCED_PLANCK_CONSTANT)?;
            let e = i.value(ELEMENTARY_CHARGE)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            let num = 4.0 * PI * alpha * hbar;
            let den = square(e) * c;
            Ok(ConstantValue::new(num / den, "N/A^2"))
        },
    )?;

    // ε₀ = 1 / (μ₀c²)
    registry.declare_derived(
        VACUUM_ELECTRIC_PERMEABILITY,
        &[VACUUM_MAGNETIC_PERMEABILITY, SPEED_OF_LIGHT],
        |i| {
            let mu0 = i.value(VACUUM_MAGNETIC_PERMEABILITY)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            Ok(ConstantValue::new((1.0 / mu0) / square(c), "F/m"))
        },
    )?;

    // G₀ = 2e² / h
    registry.declare_derived(CONDUCTANCE_QUANTUM, &[ELEMENTARY_CHARGE, PLANCK_CONSTANT], |i| {
        let e = i.value(ELEMENTARY_CHARGE)?;
        let h = i.value(PLANCK_CONSTANT)?;
        Ok(ConstantValue::new(2.0 * square(e) / h, "S"))
    })?;

    registry.declare_derived(INVERSE_CONDUCTANCE_QUANTUM, &[CONDUCTANCE_QUANTUM], |i| {
        Ok(ConstantValue::new(1.0 / i.value(CONDUCTANCE_QUANTUM)?, OHM))
    })?;

    // R_K = h / e²
    registry.declare_derived(VON_KLITZING_CONSTANT, &[PLANCK_CONSTANT, ELEMENTARY_CHARGE], |i| {
        let h = i.value(PLANCK_CONSTANT)?;
        let e = i.value(ELEMENTARY_CHARGE)?;
        Ok(ConstantValue::new(h / square(e), OHM))
    })?;

    // K_J = 2e / h
    registry.declare_derived(JOSEPHSON_CONSTANT, &[ELEMENTARY_CHARGE, PLANCK_CONSTANT], |i| {
        let e = i.value(ELEMENTARY_CHARGE)?;
        let h = i.value(PLANCK_CONSTANT)?;
        Ok(ConstantValue::new((2.0 * e) / h, "Hz/V"))
    })?;

    registry.declare_derived(MAGNETIC_FLUX_QUANTUM, &[JOSEPHSON_CONSTANT], |i| {
        Ok(ConstantValue::new(1.0 / i.value(JOSEPHSON_CONSTANT)?, "V.s"))
    })?;

    // Z₀ = 4παħ / e²
    registry.declare_derived(
        CHARACTERISTIC_IMPEDANCE_OF_VACUUM,
        &[FINE_STRUCTURE_CONSTANT, REDUCED_PLANCK_CONSTANT, ELEMENTARY_CHARGE],
        |i| {
            let alpha = i.value(FINE_STRUCTURE_CONSTANT)?;
            let hbar = i.value(REDUCED_PLANCK_CONSTANT)?;
            let e = i.value(ELEMENTARY_CHARGE)?;
            let num = 4.0 * PI * alpha * hbar;
            Ok(ConstantValue::new(num / square(e), OHM))
        },
    )?;

    Ok(())
}

fn declare_molar(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    let per_mole: [(&str, &str, &str); 3] = [
        (MOLAR_PLANCK_CONSTANT, PLANCK_CONSTANT, "J.s/mol"),
        (MOLAR_GAS_CONSTANT, BOLTZMANN_CONSTANT, "J/mol/K"),
        (FARADAY_CONSTANT, ELEMENTARY_CHARGE, "C/mol"),
    ];

    for (name, source, unit) in per_mole {
        registry.declare_derived(name, &[AVOGADRO_NUMBER, source], move |i| {
            let na = i.value(AVOGADRO_NUMBER)?;
            Ok(ConstantValue::new(na * i.value(source)?, unit))
        })?;
    }
    Ok(())
}

fn declare_atomic(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    // a₀ = ħ / (α mₑ c)
    registry.declare_derived(
        BOHR_RADIUS,
        &[REDUCED_PLANCK_CONSTANT, FINE_STRUCTURE_CONSTANT, ELECTRON_MASS, SPEED_OF_LIGHT],
        |i| {
            let hbar = i.value(REDUCED_PLANCK_CONSTANT)?;
            let alpha = i.value(FINE_STRUCTURE_CONSTANT)?;
            let me = i.value(ELECTRON_MASS)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            Ok(ConstantValue::new(hbar / (alpha * me * c), "m"))
        },
    )?;

    // rₑ = αħ / (mₑc)
    registry.declare_derived(
        CLASSICAL_ELECTRON_RADIUS,
        &[FINE_STRUCTURE_CONSTANT, REDUCED_PLANCK_CONSTANT, ELECTRON_MASS, SPEED_OF_LIGHT],
        |i| {
            let alpha = i.value(FINE_STRUCTURE_CONSTANT)?;
            let hbar = i.value(REDUCED_PLANCK_CONSTANT)?;
            let me = i.value(ELECTRON_MASS)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            Ok(ConstantValue::new((alpha * hbar) / (me * c), "m"))
        },
    )?;

    // σₑ = (8π/3) rₑ²
    registry.declare_derived(THOMSON_CROSS_SECTION, &[CLASSICAL_ELECTRON_RADIUS], |i| {
        let re = i.value(CLASSICAL_ELECTRON_RADIUS)?;
        Ok(ConstantValue::new(((8.0 * PI) / 3.0) * square(re), "m^2"))
    })?;

    // R∞ = α² mₑ c / 2h
    registry.declare_derived(
        RYDBERG_CONSTANT,
        &[FINE_STRUCTURE_CONSTANT, ELECTRON_MASS, SPEED_OF_LIGHT, PLANCK_CONSTANT],
        |i| {
            let alpha = i.value(FINE_STRUCTURE_CONSTANT)?;
            let me = i.value(ELECTRON_MASS)?;
            let c = i.value(SPEED_OF_LIGHT)?;
            let h = i.value(PLANCK_CONSTANT)?;
            let num = square(alpha) * me * c;
            let den = 2.0 * h;
            Ok(ConstantValue::new(num / den, "1/m"))
        },
    )?;

    Ok(())
}
