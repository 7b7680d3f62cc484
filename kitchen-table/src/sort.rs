//! Sort state machine and row ordering.

use std::fmt;

use crate::column::Field;
use crate::value::{Row, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How repeated clicks on the same header cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Unsorted -> Asc -> Desc -> Unsorted.
    #[default]
    ThreeState,
    /// Asc <-> Desc; never returns to input order once sorted.
    TwoState,
}

/// Which leaf column (by document-order index) is sorted, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted { column: usize, order: SortOrder },
}

impl SortState {
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { column, .. } => Some(*column),
        }
    }

    pub fn order(&self) -> Option<SortOrder> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { order, .. } => Some(*order),
        }
    }

    /// State after a header click on leaf `column`.
    pub fn next(self, column: usize, policy: SortPolicy) -> Self {
        match self {
            Self::Sorted { column: c, order } if c == column => match (order, policy) {
                (SortOrder::Asc, _) => Self::Sorted {
                    column,
                    order: SortOrder::Desc,
                },
                (SortOrder::Desc, SortPolicy::ThreeState) => Self::Unsorted,
                (SortOrder::Desc, SortPolicy::TwoState) => Self::Sorted {
                    column,
                    order: SortOrder::Asc,
                },
            },
            _ => Self::Sorted {
                column,
                order: SortOrder::Asc,
            },
        }
    }
}

/// Indices into `rows` in display order, sorted stably by `field`.
pub fn sorted_indices(rows: &[Row], field: &Field, order: SortOrder) -> Vec<usize> {
    let mut keyed: Vec<(usize, Value)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i, field.resolve(row)))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| match order {
        SortOrder::Asc => a.compare(b),
        SortOrder::Desc => b.compare(a),
    });

    keyed.into_iter().map(|(i, _)| i).collect()
}
