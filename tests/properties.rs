//! Property tests for the minimizer and the K-map geometry.

use kmap_rs::engine::{equivalent, solve_expression};
use kmap_rs::format::{format_sop, literal_count};
use kmap_rs::groups::{solve_kmap, solve_kmap_pos};
use kmap_rs::kmap::{default_var_names, KMapShape};
use kmap_rs::qmc::{minimize_sop, minimize_with, MinimizeOptions};
use kmap_rs::types::{CellValue, Implicant};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        3 => Just(CellValue::Zero),
        3 => Just(CellValue::One),
        1 => Just(CellValue::DontCare),
    ]
}

/// A variable count in 2..=6 with a matching cell array.
fn kmap_cells() -> impl Strategy<Value = (u32, Vec<CellValue>)> {
    (2u32..=6).prop_flat_map(|n| (Just(n), prop::collection::vec(cell(), 1usize << n)))
}

fn split(cells: &[CellValue]) -> (Vec<u32>, Vec<u32>) {
    let mut minterms = Vec::new();
    let mut dont_cares = Vec::new();
    for (m, value) in cells.iter().enumerate() {
        match value {
            CellValue::One => minterms.push(m as u32),
            CellValue::DontCare => dont_cares.push(m as u32),
            CellValue::Zero => {}
        }
    }
    (minterms, dont_cares)
}

/// Random expression text over `A`..`D`.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec!["A", "B", "C", "D"]).prop_map(str::to_string);
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("({})'", e)),
            inner.clone().prop_map(|e| format!("~{}", e)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({})({})", a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{} + {}", a, b)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cover_agrees_with_table((n, cells) in kmap_cells()) {
        let (minterms, dont_cares) = split(&cells);
        let res = minimize_sop(&minterms, &dont_cares, n);
        prop_assert!(res.verify_cover(&minterms, &dont_cares, n).is_empty());
        for &i in &res.essential {
            prop_assert!(res.selected.contains(&i));
        }
    }

    #[test]
    fn cover_without_tie_break_agrees_with_table((n, cells) in kmap_cells()) {
        let (minterms, dont_cares) = split(&cells);
        let options = MinimizeOptions { layout_tie_break: false, ..MinimizeOptions::default() };
        let res = minimize_with(&minterms, &dont_cares, n, &options);
        prop_assert!(res.verify_cover(&minterms, &dont_cares, n).is_empty());
    }

    #[test]
    fn selected_implicants_are_prime((n, cells) in kmap_cells()) {
        let (minterms, dont_cares) = split(&cells);
        let res = minimize_sop(&minterms, &dont_cares, n);
        let allowed = |m: u32| cells[m as usize] != CellValue::Zero;
        for imp in res.selected_implicants() {
            prop_assert!(imp.indices(n).into_iter().all(allowed));
            // Freeing any fixed position would hit a 0-cell.
            for pos in 0..n {
                if (imp.mask >> pos) & 1 == 0 {
                    let widened = Implicant::new(imp.bits & !(1 << pos), imp.mask | (1 << pos));
                    prop_assert!(!widened.indices(n).into_iter().all(allowed));
                }
            }
        }
    }

    #[test]
    fn kmap_groups_match_cells((n, cells) in kmap_cells()) {
        let res = solve_kmap(&cells, n, None).unwrap();
        let shape = KMapShape::new(n).unwrap();
        for group in &res.groups {
            for cell in &group.cells {
                prop_assert_eq!(shape.rc_to_index(cell.row, cell.col), cell.index);
                prop_assert_ne!(cells[cell.index as usize], CellValue::Zero);
            }
        }
        let pos = solve_kmap_pos(&cells, n, None).unwrap();
        for group in &pos.groups {
            for cell in &group.cells {
                prop_assert_ne!(cells[cell.index as usize], CellValue::One);
            }
        }
    }

    #[test]
    fn formatted_sop_evaluates_like_table((n, cells) in kmap_cells()) {
        let (minterms, dont_cares) = split(&cells);
        let res = minimize_sop(&minterms, &dont_cares, n);
        let vars = default_var_names(n);
        let text = format_sop(&res, &vars);
        if text == "0" || text == "1" {
            return Ok(());
        }
        let solved = solve_expression(&text).unwrap();
        // The formatted cover may drop variables; compare over its own.
        for (m, value) in cells.iter().enumerate() {
            let row: u32 = solved
                .vars
                .iter()
                .map(|v| {
                    let i = vars.iter().position(|x| x == v).unwrap() as u32;
                    ((m as u32) >> (n - 1 - i)) & 1
                })
                .fold(0, |acc, b| (acc << 1) | b);
            let out = solved.intermediate.minterms.contains(&row);
            match value {
                CellValue::One => prop_assert!(out, "m{} must be 1 in {}", m, text),
                CellValue::Zero => prop_assert!(!out, "m{} must be 0 in {}", m, text),
                CellValue::DontCare => {}
            }
        }
    }

    #[test]
    fn solved_forms_are_equivalent(expr in expression()) {
        let res = solve_expression(&expr).unwrap();
        prop_assert!(equivalent(&expr, &res.sop).unwrap(), "{} -> SOP {}", expr, res.sop);
        prop_assert!(equivalent(&expr, &res.pos).unwrap(), "{} -> POS {}", expr, res.pos);
        prop_assert!(equivalent(&expr, &res.minimal).unwrap());
        prop_assert!(literal_count(&res.minimal) <= literal_count(&res.sop));
        prop_assert!(literal_count(&res.minimal) <= literal_count(&res.pos));
    }

    #[test]
    fn display_reparses(expr in expression()) {
        let node = kmap_rs::parser::parse(&expr).unwrap();
        let printed = node.to_string();
        prop_assert!(equivalent(&expr, &printed).unwrap());
    }

    #[test]
    fn coordinates_round_trip(n in 2u32..=6, seed in any::<u32>()) {
        let shape = KMapShape::new(n).unwrap();
        let m = seed % (1 << n);
        let (r, c) = shape.index_to_rc(m);
        prop_assert_eq!(shape.rc_to_index(r, c), m);
    }

    #[test]
    fn grid_neighbours_differ_in_one_bit(n in 2u32..=6, seed in any::<u32>()) {
        let shape = KMapShape::new(n).unwrap();
        let m = seed % (1 << n);
        let (r, c) = shape.index_to_rc(m);
        let right = shape.rc_to_index(r, (c + 1) % shape.cols);
        let down = shape.rc_to_index((r + 1) % shape.rows, c);
        if shape.cols > 1 {
            prop_assert_eq!((m ^ right).count_ones(), 1);
        }
        if shape.rows > 1 {
            prop_assert_eq!((m ^ down).count_ones(), 1);
        }
    }
}
