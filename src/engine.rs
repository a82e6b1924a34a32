//! From expression text to simplified forms.
//!
//! [`solve_expression`] runs the whole pipeline:
//!
//! 1. parse the text and collect its variables (sorted),
//! 2. enumerate the truth table, the first variable being the most significant bit,
//! 3. minimize the 1-rows for the SOP and the 0-rows for the POS,
//! 4. format both, pick the smaller one and build the canonical Σ/Π forms.
//!
//! ```
//! use kmap_rs::engine::solve_expression;
//!
//! let res = solve_expression("A'B + AB' + AB").unwrap();
//! assert_eq!(res.vars, vec!['A', 'B']);
//! assert_eq!(res.canonical.sum_of_minterms, "Σm(1,2,3)");
//! assert_eq!(res.canonical.product_of_maxterms, "ΠM(0)");
//! assert_eq!(res.pos, "(A + B)");
//! ```

use log::debug;

use crate::ast::{Assignment, Node};
use crate::error::{Error, Result};
use crate::format::{choose_minimal, format_pi, format_pos, format_sigma, format_sop};
use crate::parser::parse;
use crate::qmc::{minimize_sop, MinimizeResult};
use crate::types::Step;

/// Largest number of distinct variables an expression may use.
pub const MAX_VARS: usize = 16;

/// Canonical forms of the solved function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Canonical {
    pub sum_of_minterms: String,
    pub product_of_maxterms: String,
}

/// Truth table split and both minimizations.
#[derive(Debug, Clone)]
pub struct Intermediate {
    pub minterms: Vec<u32>,
    pub maxterms: Vec<u32>,
    pub sop: MinimizeResult,
    pub pos: MinimizeResult,
}

/// Everything derived from one expression.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub vars: Vec<char>,
    pub sop: String,
    pub pos: String,
    /// The form with fewer literals, the shorter string on a tie.
    pub minimal: String,
    pub steps: Vec<Step>,
    pub intermediate: Intermediate,
    pub canonical: Canonical,
}

/// Solves an expression.
///
/// Parse failures are returned as [`Error::Parse`] with the parser's error unchanged.
pub fn solve_expression(input: &str) -> Result<SolveResult> {
    let mut steps = vec![Step::new("Parse input")];
    let ast = parse(input)?;

    let vars = ast.vars();
    check_var_count(vars.len())?;
    let names = if vars.is_empty() {
        "(none)".to_string()
    } else {
        vars.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
    };
    steps.push(Step::with_detail("Detect variables", names));

    let (minterms, maxterms) = compute_minterms_maxterms(&ast, &vars);
    steps.push(Step::with_detail(
        "Truth table",
        format!("{} minterms, {} maxterms", minterms.len(), maxterms.len()),
    ));

    let num_vars = vars.len() as u32;
    let sop_res = minimize_sop(&minterms, &[], num_vars);
    let sop = format_sop(&sop_res, &vars);

    let pos_res = minimize_sop(&maxterms, &[], num_vars);
    let pos = format_pos(&pos_res, &vars);

    steps.extend(sop_res.steps.iter().map(|s| s.prefixed("SOP: ")));
    steps.extend(pos_res.steps.iter().map(|s| s.prefixed("POS: ")));

    let minimal = choose_minimal(&sop, &pos).to_string();
    debug!("solve({:?}): sop = {}, pos = {}, minimal = {}", input, sop, pos, minimal);

    let canonical = Canonical {
        sum_of_minterms: format_sigma(&minterms),
        product_of_maxterms: format_pi(&maxterms),
    };

    Ok(SolveResult {
        vars,
        sop,
        pos,
        minimal,
        steps,
        intermediate: Intermediate {
            minterms,
            maxterms,
            sop: sop_res,
            pos: pos_res,
        },
        canonical,
    })
}

fn check_var_count(count: usize) -> Result<()> {
    if count > MAX_VARS {
        return Err(Error::TooManyVariables { count, max: MAX_VARS });
    }
    Ok(())
}

/// Splits the rows of the truth table into minterms (value 1) and maxterms (value 0).
pub fn compute_minterms_maxterms(ast: &Node, vars: &[char]) -> (Vec<u32>, Vec<u32>) {
    let mut minterms = Vec::new();
    let mut maxterms = Vec::new();
    for i in 0..1u32 << vars.len() {
        if ast.eval(&Assignment::new(vars, i)) {
            minterms.push(i);
        } else {
            maxterms.push(i);
        }
    }
    (minterms, maxterms)
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthRow {
    /// Input values, first variable first.
    pub bits: Vec<bool>,
    pub output: bool,
}

/// Truth table of the function that is 1 exactly on `minterms`.
pub fn truth_table(vars: &[char], minterms: &[u32]) -> Vec<TruthRow> {
    let n = vars.len();
    (0..1u32 << n)
        .map(|i| TruthRow {
            bits: (0..n).map(|b| (i >> (n - 1 - b)) & 1 == 1).collect(),
            output: minterms.contains(&i),
        })
        .collect()
}

/// Returns true if both expressions agree on every assignment of their joint variables.
pub fn equivalent(a: &str, b: &str) -> Result<bool> {
    let ast_a = parse(a)?;
    let ast_b = parse(b)?;
    let mut vars = ast_a.vars();
    vars.extend(ast_b.vars());
    vars.sort_unstable();
    vars.dedup();
    check_var_count(vars.len())?;

    Ok((0..1u32 << vars.len()).all(|i| {
        let env = Assignment::new(&vars, i);
        ast_a.eval(&env) == ast_b.eval(&env)
    }))
}
