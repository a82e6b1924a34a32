//! Abstract syntax tree for Boolean expressions.
//!
//! Trees are built once by the [parser][crate::parser] and never mutated.
//! `And` and `Or` hold flattened child lists: an `And` never has an `And`
//! child produced by construction through [`Node::and`], and likewise for `Or`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Var(char),
    Not(Box<Node>),
    And(Vec<Node>),
    Or(Vec<Node>),
}

impl Node {
    pub fn var(name: char) -> Self {
        Node::Var(name)
    }

    pub fn not(child: Self) -> Self {
        Node::Not(Box::new(child))
    }

    /// Builds an `And` node, splicing in the children of nested `And`s.
    pub fn and(children: impl IntoIterator<Item = Node>) -> Self {
        let mut flat = Vec::new();
        for child in children {
            match child {
                Node::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Node::And(flat)
    }

    /// Builds an `Or` node, splicing in the children of nested `Or`s.
    pub fn or(children: impl IntoIterator<Item = Node>) -> Self {
        let mut flat = Vec::new();
        for child in children {
            match child {
                Node::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Node::Or(flat)
    }

    /// Distinct variable names in lexicographic order.
    pub fn vars(&self) -> Vec<char> {
        let mut set = BTreeSet::new();
        self.collect_into(&mut set);
        set.into_iter().collect()
    }

    fn collect_into(&self, set: &mut BTreeSet<char>) {
        match self {
            Node::Var(name) => {
                set.insert(*name);
            }
            Node::Not(child) => child.collect_into(set),
            Node::And(children) | Node::Or(children) => {
                for child in children {
                    child.collect_into(set);
                }
            }
        }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(child) => 1 + child.height(),
            Node::And(children) | Node::Or(children) => {
                1 + children.iter().map(Node::height).max().unwrap_or(0)
            }
        }
    }

    /// Evaluates the tree under the given environment.
    ///
    /// `And` stops at the first false child, `Or` at the first true one.
    pub fn eval(&self, env: &impl Env) -> bool {
        match self {
            Node::Var(name) => env.value(*name),
            Node::Not(child) => !child.eval(env),
            Node::And(children) => children.iter().all(|c| c.eval(env)),
            Node::Or(children) => children.iter().any(|c| c.eval(env)),
        }
    }
}

/// Free-function form of [`Node::vars`].
pub fn collect_vars(node: &Node) -> Vec<char> {
    node.vars()
}

/// Free-function form of [`Node::eval`], returning `0` or `1`.
pub fn eval(node: &Node, env: &impl Env) -> u8 {
    node.eval(env) as u8
}

/// Variable assignment consulted during evaluation.
///
/// Variables missing from the environment evaluate to false.
pub trait Env {
    fn value(&self, var: char) -> bool;
}

impl Env for HashMap<char, bool> {
    fn value(&self, var: char) -> bool {
        self.get(&var).copied().unwrap_or(false)
    }
}

impl Env for BTreeMap<char, bool> {
    fn value(&self, var: char) -> bool {
        self.get(&var).copied().unwrap_or(false)
    }
}

impl Env for HashMap<char, u8> {
    fn value(&self, var: char) -> bool {
        self.get(&var).is_some_and(|&v| v != 0)
    }
}

/// Assignment encoded as a row index of the truth table.
///
/// The first variable is the most significant bit of `index`.
#[derive(Debug, Copy, Clone)]
pub struct Assignment<'a> {
    vars: &'a [char],
    index: u32,
}

impl<'a> Assignment<'a> {
    pub fn new(vars: &'a [char], index: u32) -> Self {
        Self { vars, index }
    }
}

impl Env for Assignment<'_> {
    fn value(&self, var: char) -> bool {
        let n = self.vars.len();
        match self.vars.iter().position(|&v| v == var) {
            Some(i) => (self.index >> (n - 1 - i)) & 1 == 1,
            None => false,
        }
    }
}

impl Node {
    fn fmt_factor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Or(children) if children.len() > 1 => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

/// Prints the tree back in the accepted grammar.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Var(name) => write!(f, "{}", name),
            Node::Not(child) => match child.as_ref() {
                Node::Var(name) => write!(f, "{}'", name),
                Node::Not(_) => write!(f, "{}'", child),
                other => write!(f, "({})'", other),
            },
            Node::And(children) => {
                for child in children {
                    child.fmt_factor(f)?;
                }
                Ok(())
            }
            Node::Or(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Node {
        // A'B + C
        Node::or([
            Node::and([Node::not(Node::var('A')), Node::var('B')]),
            Node::var('C'),
        ])
    }

    #[test]
    fn test_flattening() {
        let inner = Node::and([Node::var('A'), Node::var('B')]);
        let outer = Node::and([inner, Node::var('C')]);
        assert_eq!(outer, Node::And(vec![Node::var('A'), Node::var('B'), Node::var('C')]));

        let inner = Node::or([Node::var('A'), Node::var('B')]);
        let outer = Node::or([Node::var('C'), inner]);
        assert_eq!(outer, Node::Or(vec![Node::var('C'), Node::var('A'), Node::var('B')]));
    }

    #[test]
    fn test_vars_sorted_unique() {
        let node = Node::or([Node::var('C'), Node::and([Node::var('A'), Node::var('C')]), Node::var('B')]);
        assert_eq!(node.vars(), vec!['A', 'B', 'C']);
        assert_eq!(collect_vars(&node), vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_eval_hashmap() {
        let node = abc();
        let env: HashMap<char, bool> = [('A', false), ('B', true), ('C', false)].into();
        assert!(node.eval(&env));
        let env: HashMap<char, bool> = [('A', true), ('B', true), ('C', false)].into();
        assert!(!node.eval(&env));
    }

    #[test]
    fn test_eval_missing_is_false() {
        let node = Node::not(Node::var('Z'));
        let env: HashMap<char, u8> = HashMap::new();
        assert_eq!(eval(&node, &env), 1);
    }

    #[test]
    fn test_eval_assignment_msb_first() {
        let vars = ['A', 'B', 'C'];
        let env = Assignment::new(&vars, 0b100);
        assert!(env.value('A'));
        assert!(!env.value('B'));
        assert!(!env.value('C'));
        assert!(!env.value('D'));
    }

    #[test]
    fn test_eval_empty_and_or() {
        let env: BTreeMap<char, bool> = BTreeMap::new();
        assert!(Node::And(vec![]).eval(&env));
        assert!(!Node::Or(vec![]).eval(&env));
    }

    #[test]
    fn test_height() {
        let a = Node::var('A');
        assert_eq!(a.height(), 1);
        assert_eq!(Node::not(Node::not(a.clone())).height(), 3);
        let tree = Node::or([Node::and([a.clone(), Node::not(a.clone())]), a]);
        assert_eq!(tree.height(), 4);
        assert_eq!(Node::Or(vec![]).height(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(abc().to_string(), "A'B + C");
        let node = Node::and([
            Node::or([Node::var('X'), Node::var('Y')]),
            Node::not(Node::or([Node::var('X'), Node::var('Z')])),
        ]);
        assert_eq!(node.to_string(), "(X + Y)(X + Z)'");
        let node = Node::not(Node::not(Node::var('A')));
        assert_eq!(node.to_string(), "A''");
    }
}
