//! Comparison predicates over row fields
//!
//! Two predicate shapes drive the pipeline: [`JoinPredicate`] compares one
//! designated field from each side of a join, and [`FieldPredicate`]
//! compares one field against a constant for filtering. Both are built on
//! [`SqlValue::compare`], so NULLs and mismatched types satisfy no
//! operator instead of failing.

use crate::errors::ExecutorError;
use std::cmp::Ordering;
use std::fmt;
use storage::Row;
use types::SqlValue;

/// Comparison operator for predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Apply the operator to a comparison result. Incomparable values
    /// (`None`) satisfy no operator.
    pub fn apply(&self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return false;
        };
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        };
        write!(f, "{}", symbol)
    }
}

/// Join predicate: compares field `left_field` of a left row against field
/// `right_field` of a right row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPredicate {
    left_field: usize,
    op: CompareOp,
    right_field: usize,
}

impl JoinPredicate {
    pub fn new(left_field: usize, op: CompareOp, right_field: usize) -> Self {
        JoinPredicate { left_field, op, right_field }
    }

    /// Check whether the pair (left, right) satisfies the predicate.
    ///
    /// Pure and total: a missing field or incomparable values yield false,
    /// never an error.
    pub fn matches(&self, left: &Row, right: &Row) -> bool {
        match (left.get(self.left_field), right.get(self.right_field)) {
            (Some(l), Some(r)) => self.op.apply(l.compare(r)),
            _ => false,
        }
    }

    /// Field index compared on the left side
    pub fn left_field(&self) -> usize {
        self.left_field
    }

    /// Field index compared on the right side
    pub fn right_field(&self) -> usize {
        self.right_field
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }
}

/// Filter predicate: compares field `field_index` of a row against a
/// constant operand.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    field_index: usize,
    op: CompareOp,
    operand: SqlValue,
}

impl FieldPredicate {
    pub fn new(field_index: usize, op: CompareOp, operand: SqlValue) -> Self {
        FieldPredicate { field_index, op, operand }
    }

    /// Check whether the row satisfies the predicate. A field index the
    /// row does not have is an error, not a silent reject.
    pub fn matches(&self, row: &Row) -> Result<bool, ExecutorError> {
        let value = row
            .get(self.field_index)
            .ok_or(ExecutorError::FieldIndexOutOfBounds { index: self.field_index })?;
        Ok(self.op.apply(value.compare(&self.operand)))
    }

    pub fn field_index(&self) -> usize {
        self.field_index
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn operand(&self) -> &SqlValue {
        &self.operand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_table() {
        let less = Some(Ordering::Less);
        let equal = Some(Ordering::Equal);
        let greater = Some(Ordering::Greater);

        assert!(CompareOp::Eq.apply(equal) && !CompareOp::Eq.apply(less));
        assert!(CompareOp::Ne.apply(less) && !CompareOp::Ne.apply(equal));
        assert!(CompareOp::Lt.apply(less) && !CompareOp::Lt.apply(equal));
        assert!(CompareOp::Le.apply(less) && CompareOp::Le.apply(equal) && !CompareOp::Le.apply(greater));
        assert!(CompareOp::Gt.apply(greater) && !CompareOp::Gt.apply(equal));
        assert!(CompareOp::Ge.apply(greater) && CompareOp::Ge.apply(equal) && !CompareOp::Ge.apply(less));
    }

    #[test]
    fn test_incomparable_satisfies_no_operator() {
        for op in [
            CompareOp::Eq,
            CompareOp::Ne,
            CompareOp::Lt,
            CompareOp::Le,
            CompareOp::Gt,
            CompareOp::Ge,
        ] {
            assert!(!op.apply(None));
        }
    }

    #[test]
    fn test_join_predicate_matches() {
        let predicate = JoinPredicate::new(0, CompareOp::Eq, 0);
        let left = Row::new(vec![SqlValue::Integer(1), SqlValue::Integer(2)]);
        let matching = Row::new(vec![SqlValue::Integer(1), SqlValue::Integer(9)]);
        let other = Row::new(vec![SqlValue::Integer(5), SqlValue::Integer(6)]);

        assert!(predicate.matches(&left, &matching));
        assert!(!predicate.matches(&left, &other));
    }

    #[test]
    fn test_join_predicate_null_never_matches() {
        let predicate = JoinPredicate::new(0, CompareOp::Eq, 0);
        let left = Row::new(vec![SqlValue::Null]);
        let right = Row::new(vec![SqlValue::Null]);

        assert!(!predicate.matches(&left, &right));
    }

    #[test]
    fn test_join_predicate_missing_field_never_matches() {
        let predicate = JoinPredicate::new(3, CompareOp::Eq, 0);
        let left = Row::new(vec![SqlValue::Integer(1)]);
        let right = Row::new(vec![SqlValue::Integer(1)]);

        assert!(!predicate.matches(&left, &right));
    }

    #[test]
    fn test_join_predicate_accessors() {
        let predicate = JoinPredicate::new(1, CompareOp::Ge, 2);

        assert_eq!(predicate.left_field(), 1);
        assert_eq!(predicate.right_field(), 2);
        assert_eq!(predicate.op(), CompareOp::Ge);
        assert_eq!(predicate.op().to_string(), ">=");
    }

    #[test]
    fn test_field_predicate_matches() {
        let predicate = FieldPredicate::new(1, CompareOp::Gt, SqlValue::Integer(10));

        let passing = Row::new(vec![SqlValue::Integer(1), SqlValue::Integer(20)]);
        let failing = Row::new(vec![SqlValue::Integer(2), SqlValue::Integer(5)]);

        assert_eq!(predicate.matches(&passing), Ok(true));
        assert_eq!(predicate.matches(&failing), Ok(false));
    }

    #[test]
    fn test_field_predicate_out_of_bounds_is_error() {
        let predicate = FieldPredicate::new(5, CompareOp::Eq, SqlValue::Integer(1));
        let row = Row::new(vec![SqlValue::Integer(1)]);

        assert_eq!(
            predicate.matches(&row),
            Err(ExecutorError::FieldIndexOutOfBounds { index: 5 })
        );
    }
}
