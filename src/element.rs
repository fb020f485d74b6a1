//! Periodic-table data and element lookups.
//!
//! A single static table carries every element through oganesson; lookups go
//! through a process-wide registry built once by [`init`] (or lazily on first
//! use). Standard atomic weights are the abridged IUPAC values in daltons;
//! elements with no characteristic terrestrial composition carry `None`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ParticleError;

/// One row of the periodic table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Standard atomic weight in daltons, when IUPAC tabulates one.
    pub standard_atomic_weight: Option<f64>,
}

const fn elem(
    atomic_number: u32,
    symbol: &'static str,
    name: &'static str,
    weight: Option<f64>,
) -> Element {
    Element {
        atomic_number,
        symbol,
        name,
        standard_atomic_weight: weight,
    }
}

/// All 118 elements, ordered by atomic number.
pub static ELEMENTS: [Element; 118] = [
    elem(1, "H", "hydrogen", Some(1.008)),
    elem(2, "He", "helium", Some(4.002602)),
    elem(3, "Li", "lithium", Some(6.94)),
    elem(4, "Be", "beryllium", Some(9.0121831)),
    elem(5, "B", "boron", Some(10.81)),
    elem(6, "C", "carbon", Some(12.011)),
    elem(7, "N", "nitrogen", Some(14.007)),
    elem(8, "O", "oxygen", Some(15.999)),
    elem(9, "F", "fluorine", Some(18.998403163)),
    elem(10, "Ne", "neon", Some(20.1797)),
    elem(11, "Na", "sodium", Some(22.98976928)),
    elem(12, "Mg", "magnesium", Some(24.305)),
    elem(13, "Al", "aluminium", Some(26.9815385)),
    elem(14, "Si", "silicon", Some(28.085)),
    elem(15, "P", "phosphorus", Some(30.973761998)),
    elem(16, "S", "sulfur", Some(32.06)),
    elem(17, "Cl", "chlorine", Some(35.45)),
    elem(18, "Ar", "argon", Some(39.948)),
    elem(19, "K", "potassium", Some(39.0983)),
    elem(20, "Ca", "calcium", Some(40.078)),
    elem(21, "Sc", "scandium", Some(44.955908)),
    elem(22, "Ti", "titanium", Some(47.867)),
    elem(23, "V", "vanadium", Some(50.9415)),
    elem(24, "Cr", "chromium", Some(51.9961)),
    elem(25, "Mn", "manganese", Some(54.938044)),
    elem(26, "Fe", "iron", Some(55.845)),
    elem(27, "Co", "cobalt", Some(58.933194)),
    elem(28, "Ni", "nickel", Some(58.6934)),
    elem(29, "Cu", "copper", Some(63.546)),
    elem(30, "Zn", "zinc", Some(65.38)),
    elem(31, "Ga", "gallium", Some(69.723)),
    elem(32, "Ge", "germanium", Some(72.630)),
    elem(33, "As", "arsenic", Some(74.921595)),
    elem(34, "Se", "selenium", Some(78.971)),
    elem(35, "Br", "bromine", Some(79.904)),
    elem(36, "Kr", "krypton", Some(83.798)),
    elem(37, "Rb", "rubidium", Some(85.4678)),
    elem(38, "Sr", "strontium", Some(87.62)),
    elem(39, "Y", "yttrium", Some(88.90584)),
    elem(40, "Zr", "zirconium", Some(91.224)),
    elem(41, "Nb", "niobium", Some(92.90637)),
    elem(42, "Mo", "molybdenum", Some(95.95)),
    elem(43, "Tc", "technetium", None),
    elem(44, "Ru", "ruthenium", Some(101.07)),
    elem(45, "Rh", "rhodium", Some(102.90550)),
    elem(46, "Pd", "palladium", Some(106.42)),
    elem(47, "Ag", "silver", Some(107.8682)),
    elem(48, "Cd", "cadmium", Some(112.414)),
    elem(49, "In", "indium", Some(114.818)),
    elem(50, "Sn", "tin", Some(118.710)),
    elem(51, "Sb", "antimony", Some(121.760)),
    elem(52, "Te", "tellurium", Some(127.60)),
    elem(53, "I", "iodine", Some(126.90447)),
    elem(54, "Xe", "xenon", Some(131.293)),
    elem(55, "Cs", "caesium", Some(132.90545196)),
    elem(56, "Ba", "barium", Some(137.327)),
    elem(57, "La", "lanthanum", Some(138.90547)),
    elem(58, "Ce", "cerium", Some(140.116)),
    elem(59, "Pr", "praseodymium", Some(140.90766)),
    elem(60, "Nd", "neodymium", Some(144.242)),
    elem(61, "Pm", "promethium", None),
    elem(62, "Sm", "samarium", Some(150.36)),
    elem(63, "Eu", "europium", Some(151.964)),
    elem(64, "Gd", "gadolinium", Some(157.25)),
    elem(65, "Tb", "terbium", Some(158.92535)),
    elem(66, "Dy", "dysprosium", Some(162.500)),
    elem(67, "Ho", "holmium", Some(164.93033)),
    elem(68, "Er", "erbium", Some(167.259)),
    elem(69, "Tm", "thulium", Some(168.93422)),
    elem(70, "Yb", "ytterbium", Some(173.045)),
    elem(71, "Lu", "lutetium", Some(174.9668)),
    elem(72, "Hf", "hafnium", Some(178.49)),
    elem(73, "Ta", "tantalum", Some(180.94788)),
    elem(74, "W", "tungsten", Some(183.84)),
    elem(75, "Re", "rhenium", Some(186.207)),
    elem(76, "Os", "osmium", Some(190.23)),
    elem(77, "Ir", "iridium", Some(192.217)),
    elem(78, "Pt", "platinum", Some(195.084)),
    elem(79, "Au", "gold", Some(196.966569)),
    elem(80, "Hg", "mercury", Some(200.592)),
    elem(81, "Tl", "thallium", Some(204.38)),
    elem(82, "Pb", "lead", Some(207.2)),
    elem(83, "Bi", "bismuth", Some(208.98040)),
    elem(84, "Po", "polonium", None),
    elem(85, "At", "astatine", None),
    elem(86, "Rn", "radon", None),
    elem(87, "Fr", "francium", None),
    elem(88, "Ra", "radium", None),
    elem(89, "Ac", "actinium", None),
    elem(90, "Th", "thorium", Some(232.0377)),
    elem(91, "Pa", "protactinium", Some(231.03588)),
    elem(92, "U", "uranium", Some(238.02891)),
    elem(93, "Np", "neptunium", None),
    elem(94, "Pu", "plutonium", None),
    elem(95, "Am", "americium", None),
    elem(96, "Cm", "curium", None),
    elem(97, "Bk", "berkelium", None),
    elem(98, "Cf", "californium", None),
    elem(99, "Es", "einsteinium", None),
    elem(100, "Fm", "fermium", None),
    elem(101, "Md", "mendelevium", None),
    elem(102, "No", "nobelium", None),
    elem(103, "Lr", "lawrencium", None),
    elem(104, "Rf", "rutherfordium", None),
    elem(105, "Db", "dubnium", None),
    elem(106, "Sg", "seaborgium", None),
    elem(107, "Bh", "bohrium", None),
    elem(108, "Hs", "hassium", None),
    elem(109, "Mt", "meitnerium", None),
    elem(110, "Ds", "darmstadtium", None),
    elem(111, "Rg", "roentgenium", None),
    elem(112, "Cn", "copernicium", None),
    elem(113, "Nh", "nihonium", None),
    elem(114, "Fl", "flerovium", None),
    elem(115, "Mc", "moscovium", None),
    elem(116, "Lv", "livermorium", None),
    elem(117, "Ts", "tennessine", None),
    elem(118, "Og", "oganesson", None),
];

struct Registry {
    by_symbol: HashMap<&'static str, &'static Element>,
    by_name: HashMap<&'static str, &'static Element>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let mut by_symbol = HashMap::with_capacity(ELEMENTS.len());
        let mut by_name = HashMap::with_capacity(ELEMENTS.len());
        for element in &ELEMENTS {
            by_symbol.insert(element.symbol, element);
            by_name.insert(element.name, element);
        }
        Registry { by_symbol, by_name }
    })
}

/// Build the element registry.
///
/// Lookups build it lazily anyway; calling this once at process start keeps
/// initialization out of the hot path (and out of fuzzing iterations).
pub fn init() {
    let _ = registry();
}

/// Look up an element by its case-sensitive symbol (`"Fe"`).
pub fn by_symbol(symbol: &str) -> Option<&'static Element> {
    registry().by_symbol.get(symbol).copied()
}

/// Look up an element by its English name, case-insensitively (`"Iron"`).
pub fn by_name(name: &str) -> Option<&'static Element> {
    let lowered = name.to_ascii_lowercase();
    registry().by_name.get(lowered.as_str()).copied()
}

/// Look up an element by atomic number (1..=118).
pub fn by_atomic_number(atomic_number: u32) -> Option<&'static Element> {
    if atomic_number == 0 || atomic_number as usize > ELEMENTS.len() {
        return None;
    }
    Some(&ELEMENTS[atomic_number as usize - 1])
}

/// Map an atomic number to the element's lowercase English name.
///
/// The argument is `u64` because callers (the fuzz driver in particular) hand
/// in untrusted integers; anything outside 1..=118 is an invalid particle.
pub fn element_name(atomic_number: u64) -> Result<&'static str, ParticleError> {
    u32::try_from(atomic_number)
        .ok()
        .and_then(by_atomic_number)
        .map(|element| element.name)
        .ok_or_else(|| {
            ParticleError::invalid(
                atomic_number.to_string(),
                format!("atomic number {} is not in 1..=118", atomic_number),
            )
        })
}
