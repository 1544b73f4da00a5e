use crate::core::models::element::Element;

/// Element named by a DREIDING-style force-field atom type such as `C_3`,
/// `O_2`, `Zn` or `Fe3+`.
///
/// The symbol must be spelled exactly (`Ca`, not `CA`). Upper-case types from
/// other force fields (AMBER `CA`, `NA`, `CT`) and unknown prefixes return
/// `None`, leaving the atom name to decide.
pub(crate) fn element_from_force_field_type(ff_type: &str) -> Option<Element> {
    let prefix = ff_type.split('_').next().unwrap_or("");
    let symbol: String = prefix.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    match Element::from_symbol(&symbol) {
        Element::Unknown => None,
        element if element.symbol() == symbol => Some(element),
        _ => None,
    }
}

/// Element guessed from an atom name.
///
/// Leading digits are skipped (`1HB` is a hydrogen). For a heteroatom, a
/// two-letter name that is an element symbol is taken whole when its residue
/// is named after it (`ZN` in `ZN`, `CU` in `CU1`), when it is a halogen, or
/// when its first letter is not itself an organic element (`FE`, `MG`). Any
/// other name goes by its first letter, so `CA` in a residue and `ND` in a
/// haem stay carbon and nitrogen.
pub(crate) fn element_from_name(name: &str, is_heteroatom: bool, residue_name: &str) -> Element {
    let letters: String = name
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let first = letters
        .get(..1)
        .map(Element::from_symbol)
        .unwrap_or(Element::Unknown);

    if is_heteroatom && letters.len() == 2 {
        let whole = Element::from_symbol(&letters);
        let named_residue = residue_name
            .trim()
            .to_ascii_uppercase()
            .starts_with(&letters.to_ascii_uppercase());
        let organic_first = matches!(
            first,
            Element::H | Element::C | Element::N | Element::O | Element::P | Element::S
        );
        let halogen = matches!(whole, Element::Cl | Element::Br);
        if whole != Element::Unknown && (named_residue || halogen || !organic_first) {
            return whole;
        }
    }

    first
}
