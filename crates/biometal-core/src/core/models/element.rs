use std::fmt;

/// Chemical element of an atom.
///
/// Covers the bio-organic core, halogens, noble gases and metalloids, plus the
/// metals up to curium that turn up as binding-site ions, cofactors, heavy-atom
/// derivatives or contrast agents. Anything else parses to
/// [`Element::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Element {
    // --- Core Bio-organic ---
    H, // Hydrogen
    C, // Carbon
    N, // Nitrogen
    O, // Oxygen
    P, // Phosphorus
    S, // Sulfur

    // --- Halogens ---
    F,  // Fluorine
    Cl, // Chlorine
    Br, // Bromine
    I,  // Iodine

    // --- Noble Gases ---
    He, // Helium
    Ne, // Neon
    Ar, // Argon
    Kr, // Krypton
    Xe, // Xenon

    // --- Alkali & Alkaline Earth Metals ---
    Li, // Lithium
    Na, // Sodium
    K,  // Potassium
    Rb, // Rubidium
    Cs, // Caesium
    Fr, // Francium
    Be, // Beryllium
    Mg, // Magnesium
    Ca, // Calcium
    Sr, // Strontium
    Ba, // Barium
    Ra, // Radium

    // --- Transition Metals ---
    Sc, // Scandium
    Ti, // Titanium
    V,  // Vanadium
    Cr, // Chromium
    Mn, // Manganese
    Fe, // Iron
    Co, // Cobalt
    Ni, // Nickel
    Cu, // Copper
    Zn, // Zinc
    Y,  // Yttrium
    Zr, // Zirconium
    Nb, // Niobium
    Mo, // Molybdenum
    Tc, // Technetium
    Ru, // Ruthenium
    Rh, // Rhodium
    Pd, // Palladium
    Ag, // Silver
    Cd, // Cadmium
    Hf, // Hafnium
    Ta, // Tantalum
    W,  // Tungsten
    Re, // Rhenium
    Os, // Osmium
    Ir, // Iridium
    Pt, // Platinum
    Au, // Gold
    Hg, // Mercury

    // --- Post-transition Metals ---
    Al, // Aluminium
    Ga, // Gallium
    In, // Indium
    Sn, // Tin
    Tl, // Thallium
    Pb, // Lead
    Bi, // Bismuth
    Po, // Polonium

    // --- Lanthanides ---
    La, // Lanthanum
    Ce, // Cerium
    Pr, // Praseodymium
    Nd, // Neodymium
    Pm, // Promethium
    Sm, // Samarium
    Eu, // Europium
    Gd, // Gadolinium
    Tb, // Terbium
    Dy, // Dysprosium
    Ho, // Holmium
    Er, // Erbium
    Tm, // Thulium
    Yb, // Ytterbium
    Lu, // Lutetium

    // --- Actinides ---
    Ac, // Actinium
    Th, // Thorium
    Pa, // Protactinium
    U,  // Uranium
    Np, // Neptunium
    Pu, // Plutonium
    Am, // Americium
    Cm, // Curium

    // --- Metalloids ---
    B,  // Boron
    Si, // Silicon
    Ge, // Germanium
    As, // Arsenic
    Se, // Selenium
    Sb, // Antimony
    Te, // Tellurium

    #[default]
    Unknown,
}

impl Element {
    /// Parses an element symbol, case-insensitively.
    ///
    /// Deuterium and tritium map to hydrogen. Unrecognised symbols map to
    /// [`Element::Unknown`] rather than failing, so that classification stays
    /// total over whatever a structure file contains.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "H" | "1H" | "D" | "2H" | "T" | "3H" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "P" => Self::P,
            "S" => Self::S,

            "F" => Self::F,
            "CL" => Self::Cl,
            "BR" => Self::Br,
            "I" => Self::I,

            "HE" => Self::He,
            "NE" => Self::Ne,
            "AR" => Self::Ar,
            "KR" => Self::Kr,
            "XE" => Self::Xe,

            "LI" => Self::Li,
            "NA" => Self::Na,
            "K" => Self::K,
            "RB" => Self::Rb,
            "CS" => Self::Cs,
            "FR" => Self::Fr,
            "BE" => Self::Be,
            "MG" => Self::Mg,
            "CA" => Self::Ca,
            "SR" => Self::Sr,
            "BA" => Self::Ba,
            "RA" => Self::Ra,

            "SC" => Self::Sc,
            "TI" => Self::Ti,
            "V" => Self::V,
            "CR" => Self::Cr,
            "MN" => Self::Mn,
            "FE" => Self::Fe,
            "CO" => Self::Co,
            "NI" => Self::Ni,
            "CU" => Self::Cu,
            "ZN" => Self::Zn,
            "Y" => Self::Y,
            "ZR" => Self::Zr,
            "NB" => Self::Nb,
            "MO" => Self::Mo,
            "TC" => Self::Tc,
            "RU" => Self::Ru,
            "RH" => Self::Rh,
            "PD" => Self::Pd,
            "AG" => Self::Ag,
            "CD" => Self::Cd,
            "HF" => Self::Hf,
            "TA" => Self::Ta,
            "W" => Self::W,
            "RE" => Self::Re,
            "OS" => Self::Os,
            "IR" => Self::Ir,
            "PT" => Self::Pt,
            "AU" => Self::Au,
            "HG" => Self::Hg,

            "AL" => Self::Al,
            "GA" => Self::Ga,
            "IN" => Self::In,
            "SN" => Self::Sn,
            "TL" => Self::Tl,
            "PB" => Self::Pb,
            "BI" => Self::Bi,
            "PO" => Self::Po,

            "LA" => Self::La,
            "CE" => Self::Ce,
            "PR" => Self::Pr,
            "ND" => Self::Nd,
            "PM" => Self::Pm,
            "SM" => Self::Sm,
            "EU" => Self::Eu,
            "GD" => Self::Gd,
            "TB" => Self::Tb,
            "DY" => Self::Dy,
            "HO" => Self::Ho,
            "ER" => Self::Er,
            "TM" => Self::Tm,
            "YB" => Self::Yb,
            "LU" => Self::Lu,

            "AC" => Self::Ac,
            "TH" => Self::Th,
            "PA" => Self::Pa,
            "U" => Self::U,
            "NP" => Self::Np,
            "PU" => Self::Pu,
            "AM" => Self::Am,
            "CM" => Self::Cm,

            "B" => Self::B,
            "SI" => Self::Si,
            "GE" => Self::Ge,
            "AS" => Self::As,
            "SE" => Self::Se,
            "SB" => Self::Sb,
            "TE" => Self::Te,

            _ => Self::Unknown,
        }
    }

    /// Returns the canonical symbol, `"X"` for [`Element::Unknown`].
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::S => "S",
            Self::F => "F",
            Self::Cl => "Cl",
            Self::Br => "Br",
            Self::I => "I",
            Self::He => "He",
            Self::Ne => "Ne",
            Self::Ar => "Ar",
            Self::Kr => "Kr",
            Self::Xe => "Xe",
            Self::Li => "Li",
            Self::Na => "Na",
            Self::K => "K",
            Self::Rb => "Rb",
            Self::Cs => "Cs",
            Self::Fr => "Fr",
            Self::Be => "Be",
            Self::Mg => "Mg",
            Self::Ca => "Ca",
            Self::Sr => "Sr",
            Self::Ba => "Ba",
            Self::Ra => "Ra",
            Self::Sc => "Sc",
            Self::Ti => "Ti",
            Self::V => "V",
            Self::Cr => "Cr",
            Self::Mn => "Mn",
            Self::Fe => "Fe",
            Self::Co => "Co",
            Self::Ni => "Ni",
            Self::Cu => "Cu",
            Self::Zn => "Zn",
            Self::Y => "Y",
            Self::Zr => "Zr",
            Self::Nb => "Nb",
            Self::Mo => "Mo",
            Self::Tc => "Tc",
            Self::Ru => "Ru",
            Self::Rh => "Rh",
            Self::Pd => "Pd",
            Self::Ag => "Ag",
            Self::Cd => "Cd",
            Self::Hf => "Hf",
            Self::Ta => "Ta",
            Self::W => "W",
            Self::Re => "Re",
            Self::Os => "Os",
            Self::Ir => "Ir",
            Self::Pt => "Pt",
            Self::Au => "Au",
            Self::Hg => "Hg",
            Self::Al => "Al",
            Self::Ga => "Ga",
            Self::In => "In",
            Self::Sn => "Sn",
            Self::Tl => "Tl",
            Self::Pb => "Pb",
            Self::Bi => "Bi",
            Self::Po => "Po",
            Self::La => "La",
            Self::Ce => "Ce",
            Self::Pr => "Pr",
            Self::Nd => "Nd",
            Self::Pm => "Pm",
            Self::Sm => "Sm",
            Self::Eu => "Eu",
            Self::Gd => "Gd",
            Self::Tb => "Tb",
            Self::Dy => "Dy",
            Self::Ho => "Ho",
            Self::Er => "Er",
            Self::Tm => "Tm",
            Self::Yb => "Yb",
            Self::Lu => "Lu",
            Self::Ac => "Ac",
            Self::Th => "Th",
            Self::Pa => "Pa",
            Self::U => "U",
            Self::Np => "Np",
            Self::Pu => "Pu",
            Self::Am => "Am",
            Self::Cm => "Cm",
            Self::B => "B",
            Self::Si => "Si",
            Self::Ge => "Ge",
            Self::As => "As",
            Self::Se => "Se",
            Self::Sb => "Sb",
            Self::Te => "Te",
            Self::Unknown => "X",
        }
    }

    /// Whether the element is a metal.
    ///
    /// Metalloids are not metals here: a selenomethionine selenium or a
    /// boronic acid boron stays in a sphere queried with `metal = false`.
    pub fn is_metal(&self) -> bool {
        !matches!(
            self,
            Self::H
                | Self::C
                | Self::N
                | Self::O
                | Self::P
                | Self::S
                | Self::F
                | Self::Cl
                | Self::Br
                | Self::I
                | Self::He
                | Self::Ne
                | Self::Ar
                | Self::Kr
                | Self::Xe
                | Self::B
                | Self::Si
                | Self::Ge
                | Self::As
                | Self::Se
                | Self::Sb
                | Self::Te
                | Self::Unknown
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_is_case_insensitive_and_trims() {
        assert_eq!(Element::from_symbol("C"), Element::C);
        assert_eq!(Element::from_symbol(" fe "), Element::Fe);
        assert_eq!(Element::from_symbol("ZN"), Element::Zn);
        assert_eq!(Element::from_symbol("Cl"), Element::Cl);
    }

    #[test]
    fn hydrogen_isotopes_map_to_hydrogen() {
        for symbol in ["H", "D", "T", "2H", "3H"] {
            assert_eq!(Element::from_symbol(symbol), Element::H);
        }
    }

    #[test]
    fn unrecognised_symbols_are_unknown() {
        assert_eq!(Element::from_symbol("Xx"), Element::Unknown);
        assert_eq!(Element::from_symbol(""), Element::Unknown);
        assert_eq!(Element::Unknown.symbol(), "X");
    }

    #[test]
    fn symbol_round_trips_through_parser() {
        for element in [Element::C, Element::Mg, Element::Hg, Element::Se] {
            assert_eq!(Element::from_symbol(element.symbol()), element);
        }
    }

    #[test]
    fn metals_are_recognised() {
        assert!(Element::Fe.is_metal());
        assert!(Element::Zn.is_metal());
        assert!(Element::Na.is_metal());
        assert!(Element::Al.is_metal());
    }

    #[test]
    fn heavy_and_rare_earth_metals_are_metals() {
        for symbol in [
            "Be", "Sc", "Ti", "Y", "Zr", "Nb", "Tc", "Hf", "Ta", "Re", "Os", "In", "Tl", "Bi",
            "La", "Ce", "Sm", "Eu", "Gd", "Tb", "Yb", "Lu", "U", "Th", "Pu",
        ] {
            let element = Element::from_symbol(symbol);
            assert_ne!(element, Element::Unknown, "{symbol} should parse");
            assert_eq!(element.symbol(), symbol);
            assert!(element.is_metal(), "{symbol} should be a metal");
        }
    }

    #[test]
    fn non_metals_and_metalloids_are_not_metals() {
        assert!(!Element::C.is_metal());
        assert!(!Element::S.is_metal());
        assert!(!Element::Se.is_metal());
        assert!(!Element::B.is_metal());
        assert!(!Element::Sb.is_metal());
        assert!(!Element::Te.is_metal());
        assert!(!Element::Xe.is_metal());
        assert!(!Element::Unknown.is_metal());
    }

    #[test]
    fn display_uses_canonical_symbol() {
        assert_eq!(Element::Cu.to_string(), "Cu");
        assert_eq!(format!("{}", Element::Unknown), "X");
    }
}
