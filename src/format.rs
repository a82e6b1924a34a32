//! Rendering of implicants and covers as text.
//!
//! Output uses the same notation the parser accepts, so every formatted
//! SOP or POS can be parsed back and checked for equivalence:
//!
//! - a product is a juxtaposition of literals, `AB'C`
//! - a sum clause is parenthesized, `(A + B' + C)`
//! - SOP terms are joined by `" + "`, POS clauses by a single space
//!
//! Constants are `"0"` and `"1"`.

use crate::qmc::MinimizeResult;
use crate::types::{full_mask, CellValue, Implicant};

/// Renders `imp` as a product over `vars` (first variable is the most significant bit).
///
/// A fixed 1 gives the bare name, a fixed 0 the name followed by `'`.
/// An implicant with every position free renders as `"1"`.
pub fn implicant_to_product(imp: Implicant, vars: &[char]) -> String {
    let n = vars.len() as u32;
    if imp.mask == full_mask(n) {
        return "1".to_string();
    }
    let mut out = String::new();
    for (i, &name) in vars.iter().enumerate() {
        let pos = n - 1 - i as u32;
        if (imp.mask >> pos) & 1 == 1 {
            continue;
        }
        out.push(name);
        if (imp.bits >> pos) & 1 == 0 {
            out.push('\'');
        }
    }
    out
}

/// Renders a zero-side implicant as a sum clause, with inverted polarity.
///
/// A fixed 0 gives the bare name, a fixed 1 the negated name.
/// An implicant with every position free renders as `"(0)"`.
pub fn implicant_to_sum(imp: Implicant, vars: &[char]) -> String {
    let n = vars.len() as u32;
    if imp.mask == full_mask(n) {
        return "(0)".to_string();
    }
    let literals: Vec<String> = vars
        .iter()
        .enumerate()
        .filter_map(|(i, &name)| {
            let pos = n - 1 - i as u32;
            if (imp.mask >> pos) & 1 == 1 {
                None
            } else if (imp.bits >> pos) & 1 == 1 {
                Some(format!("{}'", name))
            } else {
                Some(name.to_string())
            }
        })
        .collect();
    format!("({})", literals.join(" + "))
}

/// Sum of the selected products; `"0"` for an empty selection, `"1"` for a tautology.
pub fn format_sop(res: &MinimizeResult, vars: &[char]) -> String {
    let terms: Vec<String> = res
        .selected_implicants()
        .map(|imp| implicant_to_product(imp, vars))
        .collect();
    if terms.is_empty() {
        return "0".to_string();
    }
    if terms.iter().any(|t| t == "1") {
        return "1".to_string();
    }
    terms.join(" + ")
}

/// Product of the selected sum clauses; `"1"` for an empty selection, `"0"` for a contradiction.
pub fn format_pos(res: &MinimizeResult, vars: &[char]) -> String {
    let clauses: Vec<String> = res
        .selected_implicants()
        .map(|imp| implicant_to_sum(imp, vars))
        .collect();
    if clauses.is_empty() {
        return "1".to_string();
    }
    if clauses.iter().any(|c| c == "(0)") {
        return "0".to_string();
    }
    clauses.join(" ")
}

fn join_indices(indices: &[u32]) -> String {
    indices.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(",")
}

/// Canonical sum of minterms, `Σm(1,2,3)`, or `Σm() = 0` when empty.
pub fn format_sigma(minterms: &[u32]) -> String {
    if minterms.is_empty() {
        return "Σm() = 0".to_string();
    }
    format!("Σm({})", join_indices(minterms))
}

/// Canonical product of maxterms, `ΠM(0,4)`, or `ΠM() = 1` when empty.
pub fn format_pi(maxterms: &[u32]) -> String {
    if maxterms.is_empty() {
        return "ΠM() = 1".to_string();
    }
    format!("ΠM({})", join_indices(maxterms))
}

/// Number of literals in a formatted expression (every letter counts once).
pub fn literal_count(expr: &str) -> usize {
    expr.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Picks the form with fewer literals; on a tie, the shorter string, preferring `sop`.
pub fn choose_minimal<'a>(sop: &'a str, pos: &'a str) -> &'a str {
    let (a, b) = (literal_count(sop), literal_count(pos));
    if a != b {
        return if a < b { sop } else { pos };
    }
    if sop.len() <= pos.len() {
        sop
    } else {
        pos
    }
}

/// Full expansion of the 1-cells as a sum of complete products.
pub fn canonical_sop(cells: &[CellValue], vars: &[char]) -> String {
    let terms: Vec<String> = cells
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == CellValue::One)
        .map(|(m, _)| implicant_to_product(Implicant::minterm(m as u32), vars))
        .collect();
    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: [char; 2] = ['A', 'B'];
    const ABC: [char; 3] = ['A', 'B', 'C'];

    fn result(primes: Vec<Implicant>, selected: Vec<usize>) -> MinimizeResult {
        MinimizeResult {
            prime_implicants: primes,
            essential: vec![],
            selected,
            steps: vec![],
        }
    }

    #[test]
    fn test_product() {
        assert_eq!(implicant_to_product(Implicant::minterm(3), &AB), "AB");
        assert_eq!(implicant_to_product(Implicant::minterm(1), &AB), "A'B");
        assert_eq!(implicant_to_product(Implicant::new(0b100, 0b010), &ABC), "AC'");
        assert_eq!(implicant_to_product(Implicant::new(0, 0b11), &AB), "1");
    }

    #[test]
    fn test_sum() {
        assert_eq!(implicant_to_sum(Implicant::minterm(0), &AB), "(A + B)");
        assert_eq!(implicant_to_sum(Implicant::minterm(2), &AB), "(A' + B)");
        assert_eq!(implicant_to_sum(Implicant::new(0b001, 0b100), &ABC), "(B + C')");
        assert_eq!(implicant_to_sum(Implicant::new(0, 0b111), &ABC), "(0)");
    }

    #[test]
    fn test_sop() {
        assert_eq!(format_sop(&result(vec![], vec![]), &AB), "0");
        let res = result(vec![Implicant::new(0b10, 0b01), Implicant::new(0b01, 0b10)], vec![0, 1]);
        assert_eq!(format_sop(&res, &AB), "A + B");
        let res = result(vec![Implicant::minterm(1), Implicant::new(0, 0b11)], vec![0, 1]);
        assert_eq!(format_sop(&res, &AB), "1");
    }

    #[test]
    fn test_pos() {
        assert_eq!(format_pos(&result(vec![], vec![]), &AB), "1");
        let res = result(vec![Implicant::new(0b00, 0b01), Implicant::new(0b00, 0b10)], vec![0, 1]);
        assert_eq!(format_pos(&res, &AB), "(A) (B)");
        let res = result(vec![Implicant::new(0, 0b11)], vec![0]);
        assert_eq!(format_pos(&res, &AB), "0");
    }

    #[test]
    fn test_canonical() {
        assert_eq!(format_sigma(&[]), "Σm() = 0");
        assert_eq!(format_pi(&[]), "ΠM() = 1");
        assert_eq!(format_sigma(&[1, 2, 3]), "Σm(1,2,3)");
        assert_eq!(format_pi(&[0]), "ΠM(0)");
    }

    #[test]
    fn test_literal_count() {
        assert_eq!(literal_count("A'B + AB'"), 4);
        assert_eq!(literal_count("(X + Y) (X + Z)"), 4);
        assert_eq!(literal_count("1"), 0);
    }

    #[test]
    fn test_choose_minimal() {
        assert_eq!(choose_minimal("X + YZ", "(X + Y) (X + Z)"), "X + YZ");
        assert_eq!(choose_minimal("AB + A'B'", "(A + B') (A' + B)"), "AB + A'B'");
        assert_eq!(choose_minimal("A'B + AB'", "(A + B)"), "(A + B)");
        assert_eq!(choose_minimal("0", "0"), "0");
    }

    #[test]
    fn test_canonical_sop() {
        use CellValue::*;
        assert_eq!(canonical_sop(&[Zero, One, DontCare, One], &AB), "A'B + AB");
        assert_eq!(canonical_sop(&[Zero, DontCare, Zero, Zero], &AB), "0");
    }
}
