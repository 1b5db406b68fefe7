//! Measured and defined values (SI, CODATA).
use super::names::*;
use crate::store::{ConstantRegistry, RegistryResult};

const BASE_CONSTANTS: &[(&str, f64, &str)] = &[
    (ELECTRON_MASS, 9.1093837139e-31, "kg"),
    (PROTON_MASS, 1.67262192595e-27, "kg"),
    (NEUTRON_MASS, 1.67492750056e-27, "kg"),
    (MUON_MASS, 1.883531627e-28, "kg"),
    (TOP_QUARK_MASS, 3.0784e-25, "kg"),
    (TAU_MASS, 3.16754e-27, "kg"),
    (SPEED_OF_LIGHT, 299792458.0, "m/s"),
    (PLANCK_CONSTANT, 6.62607015e-34, "J.s"),
    (NEWTONIAN_CONSTANT_OF_GRAVITATION, 6.67430e-11, "m^3/kg/s^2"),
    (COSMOLOGICAL_CONSTANT, 1.089e-52, "1/m^2"),
    (WIEN_CONSTANT_WAVELENGTH, 2.897771955e-3, "m.K"),
    (WIEN_CONSTANT_FREQUENCY, 5.878925757e10, "Hz/K"),
    (WIEN_CONSTANT_ENTROPY, 3.002916077e-3, "m.K"),
    (ELEMENTARY_CHARGE, 1.602176634e-19, "C"),
    (BOLTZMANN_CONSTANT, 1.380649e-23, "J/K"),
    // Rounded value used throughout the catalog, not the CODATA one.
    (FINE_STRUCTURE_CONSTANT, 1.0 / 137.0, ""),
    (CARBON_MOLAR_MASS, 12.0000000126e-3, "kg/mol"),
    (ATOMIC_MASS_UNIT, 1.66053906892e-27, "kg"),
    (AVOGADRO_NUMBER, 6.02214076e23, "1/mol"),
    (MOLAR_MASS_CONSTANT, 1.00000000105e-3, "kg/mol"),
];

pub fn declare_base_constants(registry: &mut ConstantRegistry) -> RegistryResult<()> {
    for &(name, value, unit) in BASE_CONSTANTS {
        registry.declare_base(name, value, unit)?;
    }
    Ok(())
}
