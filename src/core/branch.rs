use crate::core::{Demo, Flow, Number, Output};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Arm taken by an if / elif / elif / else chain over two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Greater,
    Equal,
    Less,
    Otherwise,
}

impl Branch {
    /// Tests `>`, then `==`, then `<`. Only unordered operands (NaN) reach
    /// the final arm.
    pub fn select(left: Number, right: Number) -> Self {
        if greater(left, right) {
            Branch::Greater
        } else if equal(left, right) {
            Branch::Equal
        } else if greater(right, left) {
            Branch::Less
        } else {
            Branch::Otherwise
        }
    }
}

fn greater(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x > y,
        _ => a.as_f64() > b.as_f64(),
    }
}

fn equal(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x == y,
        _ => a.as_f64() == b.as_f64(),
    }
}

const NAMES: [&str; 21] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty",
];

/// English name for small whole numbers, digits for everything else.
pub fn number_name(n: Number) -> String {
    let whole = match n {
        Number::Int(v) => Some(v),
        Number::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
        Number::Float(_) => None,
    };
    match whole {
        Some(v) if (0..=20).contains(&v) => NAMES[v as usize].to_string(),
        _ => n.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The two lines printed by the arm `branch`.
pub fn branch_lines(branch: Branch, left: Number, right: Number) -> [String; 2] {
    let l = capitalize(&number_name(left));
    let r = number_name(right);
    match branch {
        Branch::Greater => [
            format!("{} is greater than {}!", l, r),
            "This is in the if block".to_string(),
        ],
        Branch::Equal => [
            format!("{} is equal to {}!", l, r),
            "This is in the elif block".to_string(),
        ],
        Branch::Less => [
            format!("{} is less than {}!", l, r),
            "This is in the second elif block".to_string(),
        ],
        Branch::Otherwise => [
            format!("{} is not greater than {}!", l, r),
            "This is still in the else block".to_string(),
        ],
    }
}

pub struct BranchDemo {
    left: Number,
    right: Number,
}

impl BranchDemo {
    pub fn new(left: Number, right: Number) -> Self {
        Self { left, right }
    }
}

impl Default for BranchDemo {
    fn default() -> Self {
        Self::new(Number::Int(5), Number::Int(2))
    }
}

#[async_trait]
impl Demo for BranchDemo {
    fn name(&self) -> &str {
        "branch"
    }

    async fn run(&self, output: Arc<dyn Output>) -> Result<Flow> {
        let branch = Branch::select(self.left, self.right);
        tracing::debug!("{} vs {} selected {:?}", self.left, self.right, branch);
        for line in branch_lines(branch, self.left, self.right) {
            output.emit(&line)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_each_arm() {
        assert_eq!(Branch::select(Number::Int(5), Number::Int(2)), Branch::Greater);
        assert_eq!(Branch::select(Number::Int(2), Number::Int(2)), Branch::Equal);
        assert_eq!(Branch::select(Number::Int(2), Number::Float(5.0)), Branch::Less);
        assert_eq!(
            Branch::select(Number::Float(f64::NAN), Number::Int(2)),
            Branch::Otherwise
        );
    }

    #[test]
    fn test_else_lines() {
        let lines = branch_lines(Branch::Otherwise, Number::Int(5), Number::Int(2));
        assert_eq!(lines[0], "Five is not greater than two!");
        assert_eq!(lines[1], "This is still in the else block");
    }

    #[test]
    fn test_number_names() {
        assert_eq!(number_name(Number::Int(5)), "five");
        assert_eq!(number_name(Number::Float(2.0)), "two");
        assert_eq!(number_name(Number::Int(42)), "42");
        assert_eq!(number_name(Number::Float(2.5)), "2.5");
    }
}
