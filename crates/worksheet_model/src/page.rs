//! Worksheet pages

use crate::{Operator, Problem};
use serde::{Deserialize, Serialize};

/// One page of a worksheet: a fixed problem set and its page number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Problems in reading order
    pub problems: Vec<Problem>,
    /// 1-based page number
    pub page_number: u32,
}

impl Page {
    pub fn new(problems: Vec<Problem>, page_number: u32) -> Self {
        Self {
            problems,
            page_number,
        }
    }

    /// Operator of the page, taken from its first problem
    pub fn operator(&self) -> Option<Operator> {
        self.problems.first().map(|p| p.operator)
    }

    /// Page heading such as "Addition Practice"
    pub fn title(&self) -> Option<String> {
        self.operator().map(|op| op.title())
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}
