//! Particle symbol parsing and the public lookup API.
//!
//! The grammar is a practical subset of the usual plasma-physics notation:
//! element symbols (`"Fe"`), English names (`"iron"`), isotopes (`"He-4"`,
//! `"D"`, `"T"`), charge states (`"Fe 3+"`, `"H+"`, `"Fe+++"`), and a fixed
//! table of non-nuclide particles (`"e-"`, `"p+"`, `"n"`, `"mu-"`, ...).
//!
//! Masses are a deliberately simple model: exact CODATA rest masses for the
//! special particles, standard atomic weight for bare elements, and mass
//! number times one dalton for isotopes, with ionization adding or removing
//! electron masses. Particles without a tabulated mass report
//! [`ParticleError::MissingData`].

use std::fmt;

use serde::Serialize;

use crate::element::{self, Element};
use crate::error::ParticleError;

/// One dalton (unified atomic mass unit) in kg, CODATA 2018.
pub const DALTON_KG: f64 = 1.660_539_066_60e-27;
/// Electron rest mass in kg, CODATA 2018.
pub const ELECTRON_MASS_KG: f64 = 9.109_383_701_5e-31;
/// Proton rest mass in kg, CODATA 2018.
pub const PROTON_MASS_KG: f64 = 1.672_621_923_69e-27;
/// Neutron rest mass in kg, CODATA 2018.
pub const NEUTRON_MASS_KG: f64 = 1.674_927_498_04e-27;
/// Muon rest mass in kg, CODATA 2018.
pub const MUON_MASS_KG: f64 = 1.883_531_627e-28;
/// Tau rest mass in kg.
pub const TAU_MASS_KG: f64 = 3.167_54e-27;
/// Alpha particle rest mass in kg, CODATA 2018.
pub const ALPHA_MASS_KG: f64 = 6.644_657_335_7e-27;

/// Broad classification of a parsed particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleKind {
    Element,
    Isotope,
    Ion,
    Lepton,
    Baryon,
    Neutrino,
}

#[derive(Debug, PartialEq)]
struct SpecialParticle {
    symbol: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    kind: ParticleKind,
    /// `None` means the particle is real but its mass is not tabulated.
    mass_kg: Option<f64>,
    charge_number: i32,
    /// Element link, for particles like the alpha that still have one.
    atomic_number: Option<u32>,
}

static SPECIAL_PARTICLES: [SpecialParticle; 9] = [
    SpecialParticle {
        symbol: "e-",
        name: "electron",
        aliases: &["electron", "beta-"],
        kind: ParticleKind::Lepton,
        mass_kg: Some(ELECTRON_MASS_KG),
        charge_number: -1,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "e+",
        name: "positron",
        aliases: &["positron", "beta+"],
        kind: ParticleKind::Lepton,
        mass_kg: Some(ELECTRON_MASS_KG),
        charge_number: 1,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "mu-",
        name: "muon",
        aliases: &["muon"],
        kind: ParticleKind::Lepton,
        mass_kg: Some(MUON_MASS_KG),
        charge_number: -1,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "mu+",
        name: "antimuon",
        aliases: &["antimuon"],
        kind: ParticleKind::Lepton,
        mass_kg: Some(MUON_MASS_KG),
        charge_number: 1,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "tau-",
        name: "tau",
        aliases: &["tau"],
        kind: ParticleKind::Lepton,
        mass_kg: Some(TAU_MASS_KG),
        charge_number: -1,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "p+",
        name: "proton",
        aliases: &["proton", "p"],
        kind: ParticleKind::Baryon,
        mass_kg: Some(PROTON_MASS_KG),
        charge_number: 1,
        atomic_number: Some(1),
    },
    SpecialParticle {
        symbol: "n",
        name: "neutron",
        aliases: &["neutron"],
        kind: ParticleKind::Baryon,
        mass_kg: Some(NEUTRON_MASS_KG),
        charge_number: 0,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "nu_e",
        name: "electron neutrino",
        aliases: &["electron neutrino"],
        kind: ParticleKind::Neutrino,
        mass_kg: None,
        charge_number: 0,
        atomic_number: None,
    },
    SpecialParticle {
        symbol: "alpha",
        name: "alpha",
        aliases: &["alpha"],
        kind: ParticleKind::Ion,
        mass_kg: Some(ALPHA_MASS_KG),
        charge_number: 2,
        atomic_number: Some(2),
    },
];

fn find_special(input: &str) -> Option<&'static SpecialParticle> {
    SPECIAL_PARTICLES.iter().find(|p| {
        // Single-letter aliases stay case-sensitive: "p" is the proton,
        // "P" is phosphorus.
        p.symbol == input
            || p.aliases
                .iter()
                .any(|a| *a == input || (a.len() > 1 && a.eq_ignore_ascii_case(input)))
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Body {
    Special(&'static SpecialParticle),
    Nuclide {
        element: &'static Element,
        mass_number: Option<u32>,
        charge_number: i32,
    },
}

/// A parsed particle symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    body: Body,
}

impl Particle {
    /// Parse a particle symbol.
    ///
    /// Returns [`ParticleError::InvalidParticle`] for anything the grammar
    /// does not cover; this is the normal outcome for arbitrary input.
    pub fn parse(symbol: &str) -> Result<Self, ParticleError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(ParticleError::invalid(symbol, "empty symbol"));
        }

        if let Some(special) = find_special(trimmed) {
            return Ok(Self {
                body: Body::Special(special),
            });
        }

        let (base, charge_number) = split_charge(symbol, trimmed)?;
        if base.is_empty() {
            return Err(ParticleError::invalid(symbol, "charge with no particle"));
        }

        let (element, mass_number) = parse_nuclide_base(symbol, base)?;

        if charge_number.unsigned_abs() > element.atomic_number {
            return Err(ParticleError::invalid(
                symbol,
                format!(
                    "charge {:+} is out of range for {} (Z = {})",
                    charge_number, element.symbol, element.atomic_number
                ),
            ));
        }

        Ok(Self {
            body: Body::Nuclide {
                element,
                mass_number,
                charge_number,
            },
        })
    }

    /// Canonical symbol, e.g. `"Fe-56 3+"` or `"e-"`.
    pub fn symbol(&self) -> String {
        match &self.body {
            Body::Special(special) => special.symbol.to_string(),
            Body::Nuclide {
                element,
                mass_number,
                charge_number,
            } => {
                let mut out = element.symbol.to_string();
                if let Some(a) = mass_number {
                    out.push('-');
                    out.push_str(&a.to_string());
                }
                match charge_number.signum() {
                    1 => out.push_str(&format!(" {}+", charge_number)),
                    -1 => out.push_str(&format!(" {}-", charge_number.abs())),
                    _ => {}
                }
                out
            }
        }
    }

    pub fn kind(&self) -> ParticleKind {
        match &self.body {
            Body::Special(special) => special.kind,
            Body::Nuclide {
                mass_number,
                charge_number,
                ..
            } => {
                if *charge_number != 0 {
                    ParticleKind::Ion
                } else if mass_number.is_some() {
                    ParticleKind::Isotope
                } else {
                    ParticleKind::Element
                }
            }
        }
    }

    /// Atomic number, when the particle corresponds to an element.
    pub fn atomic_number(&self) -> Option<u32> {
        match &self.body {
            Body::Special(special) => special.atomic_number,
            Body::Nuclide { element, .. } => Some(element.atomic_number),
        }
    }

    pub fn mass_number(&self) -> Option<u32> {
        match &self.body {
            Body::Nuclide { mass_number, .. } => *mass_number,
            Body::Special(_) => None,
        }
    }

    pub fn charge_number(&self) -> i32 {
        match &self.body {
            Body::Special(special) => special.charge_number,
            Body::Nuclide { charge_number, .. } => *charge_number,
        }
    }

    /// Rest mass in kg.
    ///
    /// [`ParticleError::MissingData`] when nothing is tabulated: neutrinos,
    /// and bare elements without a standard atomic weight.
    pub fn mass_kg(&self) -> Result<f64, ParticleError> {
        match &self.body {
            Body::Special(special) => special
                .mass_kg
                .ok_or_else(|| ParticleError::missing(special.symbol, "mass")),
            Body::Nuclide {
                element,
                mass_number,
                charge_number,
            } => {
                let base = match mass_number {
                    Some(a) => f64::from(*a) * DALTON_KG,
                    None => {
                        element
                            .standard_atomic_weight
                            .ok_or_else(|| ParticleError::missing(element.symbol, "mass"))?
                            * DALTON_KG
                    }
                };
                // Ionization removes (or attaches) electrons.
                Ok(base - f64::from(*charge_number) * ELECTRON_MASS_KG)
            }
        }
    }

    /// Human-facing summary, serializable for the CLI's JSON output.
    pub fn info(&self) -> ParticleInfo {
        let name = match &self.body {
            Body::Special(special) => special.name.to_string(),
            Body::Nuclide { element, .. } => element.name.to_string(),
        };
        ParticleInfo {
            symbol: self.symbol(),
            name,
            kind: self.kind(),
            atomic_number: self.atomic_number(),
            mass_number: self.mass_number(),
            charge_number: self.charge_number(),
            mass_kg: self.mass_kg().ok(),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Serializable summary of a particle, used by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleInfo {
    pub symbol: String,
    pub name: String,
    pub kind: ParticleKind,
    pub atomic_number: Option<u32>,
    pub mass_number: Option<u32>,
    pub charge_number: i32,
    pub mass_kg: Option<f64>,
}

/// Split a trailing charge designation off `trimmed`.
///
/// Accepts `"Fe 3+"` / `"Fe-56 2-"` (space-separated count plus sign) and
/// `"H+"` / `"Fe+++"` (a trailing run of one sign character). Returns the
/// base symbol and the signed charge number.
fn split_charge<'a>(original: &str, trimmed: &'a str) -> Result<(&'a str, i32), ParticleError> {
    if let Some((base, charge_part)) = trimmed.rsplit_once(' ') {
        if let Some(charge) = parse_charge_token(charge_part) {
            return Ok((base.trim_end(), charge?));
        }
    }

    let signs: usize = trimmed
        .chars()
        .rev()
        .take_while(|&c| c == '+' || c == '-')
        .count();
    if signs == 0 {
        return Ok((trimmed, 0));
    }
    let base = &trimmed[..trimmed.len() - signs];
    let tail = &trimmed[trimmed.len() - signs..];
    if tail.contains('+') && tail.contains('-') {
        return Err(ParticleError::invalid(original, "mixed charge signs"));
    }
    // "He-4" keeps its dash: a lone '-' preceded by a digit is isotope
    // notation, not a charge.
    if signs == 1
        && tail == "-"
        && base.chars().last().is_some_and(|c| c.is_ascii_digit())
    {
        return Ok((trimmed, 0));
    }
    let magnitude = i32::try_from(signs)
        .map_err(|_| ParticleError::invalid(original, "charge magnitude out of range"))?;
    let charge = if tail.starts_with('+') {
        magnitude
    } else {
        -magnitude
    };
    Ok((base, charge))
}

/// Parse a space-separated charge token like `"3+"`, `"+"`, or `"12-"`.
///
/// `None` means the token is not charge-shaped at all (so the caller should
/// not treat the space as a charge separator); an inner `Err` means it was
/// charge-shaped but malformed.
fn parse_charge_token(token: &str) -> Option<Result<i32, ParticleError>> {
    let sign = match token.chars().last()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits = &token[..token.len() - 1];
    if digits.is_empty() {
        return Some(Ok(sign));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        digits
            .parse::<i32>()
            .map(|n| n * sign)
            .map_err(|_| ParticleError::invalid(token, "charge magnitude out of range")),
    )
}

/// Resolve the charge-free base into an element and optional mass number.
fn parse_nuclide_base(
    original: &str,
    base: &str,
) -> Result<(&'static Element, Option<u32>), ParticleError> {
    // Hydrogen isotope shorthand.
    match base {
        "D" => return Ok((hydrogen(), Some(2))),
        "T" => return Ok((hydrogen(), Some(3))),
        _ => {}
    }
    if base.eq_ignore_ascii_case("deuterium") {
        return Ok((hydrogen(), Some(2)));
    }
    if base.eq_ignore_ascii_case("tritium") {
        return Ok((hydrogen(), Some(3)));
    }

    if let Some((symbol_part, mass_part)) = base.rsplit_once('-') {
        if !mass_part.is_empty() && mass_part.bytes().all(|b| b.is_ascii_digit()) {
            let element = resolve_element(original, symbol_part)?;
            let mass_number: u32 = mass_part
                .parse()
                .map_err(|_| ParticleError::invalid(original, "mass number out of range"))?;
            if mass_number < element.atomic_number || mass_number > 300 {
                return Err(ParticleError::invalid(
                    original,
                    format!(
                        "mass number {} is not plausible for {}",
                        mass_number, element.symbol
                    ),
                ));
            }
            return Ok((element, Some(mass_number)));
        }
    }

    Ok((resolve_element(original, base)?, None))
}

fn resolve_element(original: &str, token: &str) -> Result<&'static Element, ParticleError> {
    element::by_symbol(token)
        .or_else(|| element::by_name(token))
        .ok_or_else(|| ParticleError::invalid(original, format!("unknown element {:?}", token)))
}

fn hydrogen() -> &'static Element {
    // ELEMENTS[0]; going through the lookup keeps a single code path.
    element::by_atomic_number(1).unwrap_or(&element::ELEMENTS[0])
}

/// Map a particle symbol to its atomic number.
///
/// Particles without an element (`"e-"`, `"n"`) are an
/// [`ParticleError::InvalidParticle`] here, matching how random fuzz input
/// is expected to fail.
pub fn atomic_number(symbol: &str) -> Result<u32, ParticleError> {
    let particle = Particle::parse(symbol)?;
    particle
        .atomic_number()
        .ok_or_else(|| ParticleError::invalid(symbol, "particle has no element"))
}

/// Map a particle symbol to its rest mass in kg.
pub fn particle_mass(symbol: &str) -> Result<f64, ParticleError> {
    Particle::parse(symbol)?.mass_kg()
}
