//! Stable names of the reference catalog.

// Base
pub const ELECTRON_MASS: &str = "ElectronMass";
pub const PROTON_MASS: &str = "ProtonMass";
pub const NEUTRON_MASS: &str = "NeutronMass";
pub const MUON_MASS: &str = "MuonMass";
pub const TOP_QUARK_MASS: &str = "TopQuarkMass";
pub const TAU_MASS: &str = "TauMass";
pub const SPEED_OF_LIGHT: &str = "SpeedOfLight";
pub const PLANCK_CONSTANT: &str = "PlanckConstant";
pub const NEWTONIAN_CONSTANT_OF_GRAVITATION: &str = "NewtonianConstantOfGravitation";
pub const COSMOLOGICAL_CONSTANT: &str = "CosmologicalConstant";
pub const WIEN_CONSTANT_WAVELENGTH: &str = "WienConstantWavelength";
pub const WIEN_CONSTANT_FREQUENCY: &str = "WienConstantFrequency";
pub const WIEN_CONSTANT_ENTROPY: &str = "WienConstantEntropy";
pub const ELEMENTARY_CHARGE: &str = "ElementaryCharge";
pub const BOLTZMANN_CONSTANT: &str = "BoltzmannConstant";
pub const FINE_STRUCTURE_CONSTANT: &str = "FineStructureConstant";
pub const CARBON_MOLAR_MASS: &str = "CarbonMolarMass";
pub const ATOMIC_MASS_UNIT: &str = "AtomicMassUnit";
pub const AVOGADRO_NUMBER: &str = "AvogadroNumber";
pub const MOLAR_MASS_CONSTANT: &str = "MolarMassConstant";

// Derived
pub const PROTON_ELECTRON_MASS_RATIO: &str = "ProtonElectronMassRatio";
pub const REDUCED_PLANCK_CONSTANT: &str = "ReducedPlanckConstant";
pub const GRAVITATIONAL_CONSTANT: &str = "GravitationalConstant";
pub const STEFAN_BOLTZMANN_CONSTANT: &str = "StefanBoltzmannConstant";
pub const FIRST_RADIATION_CONSTANT: &str = "FirstRadiationConstant";
pub const FIRST_RADIATION_CONSTANT_SPECTRAL_RADIANCE: &str = "FirstRadiationConstantSpectralRadiance";
pub const SECOND_RADIATION_CONSTANT: &str = "SecondRadiationConstant";
pub const VACUUM_MAGNETIC_PERMEABILITY: &str = "VacuumMagneticPermeability";
pub const VACUUM_ELECTRIC_PERMEABILITY: &str = "VacuumElectricPermeability";
pub const CONDUCTANCE_QUANTUM: &str = "ConductanceQuantum";
pub const INVERSE_CONDUCTANCE_QUANTUM: &str = "InverseConductanceQuantum";
pub const VON_KLITZING_CONSTANT: &str = "VonKlitzingConstant";
pub const JOSEPHSON_CONSTANT: &str = "JosephsonConstant";
pub const MAGNETIC_FLUX_QUANTUM: &str = "MagneticFluxQuantum";
pub const CHARACTERISTIC_IMPEDANCE_OF_VACUUM: &str = "CharacteristicImpedanceOfVacuum";
pub const MOLAR_PLANCK_CONSTANT: &str = "MolarPlanckConstant";
pub const MOLAR_GAS_CONSTANT: &str = "MolarGasConstant";
pub const FARADAY_CONSTANT: &str = "FaradayConstant";
pub const BOHR_RADIUS: &str = "BohrRadius";
pub const CLASSICAL_ELECTRON_RADIUS: &str = "ClassicalElectronRadius";
pub const THOMSON_CROSS_SECTION: &str = "ThomsonCrossSection";
pub const RYDBERG_CONSTANT: &str = "RydbergConstant";
