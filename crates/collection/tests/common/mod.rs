//! Shared proptest generators for the collection integration tests

#![allow(dead_code)]

use proptest::collection::vec;
use proptest::prelude::*;

/// Small integer lists, including the empty list
pub fn int_list() -> impl Strategy<Value = Vec<i32>> {
    vec(-1000i32..1000, 0..64)
}

/// Non-empty integer lists
pub fn non_empty_int_list() -> impl Strategy<Value = Vec<i32>> {
    vec(-1000i32..1000, 1..64)
}

/// Lists with many repeats, to exercise deduplication
pub fn repetitive_list() -> impl Strategy<Value = Vec<u8>> {
    vec(0u8..8, 0..64)
}

/// Nested lists for flattening
pub fn nested_list() -> impl Strategy<Value = Vec<Vec<i32>>> {
    vec(vec(any::<i32>(), 0..8), 0..8)
}

/// Sales orders with a deliberately small key space so ties occur
pub fn order_list() -> impl Strategy<Value = Vec<SalesOrder>> {
    vec(
        ("C[1-3]", "S[1-9]").prop_map(|(customer, number)| SalesOrder::new(&customer, &number)),
        0..32,
    )
}

/// Order line used by the multi-key sort scenarios
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesOrder {
    pub customer_code: String,
    pub sales_order_number: String,
}

impl SalesOrder {
    pub fn new(customer_code: &str, sales_order_number: &str) -> Self {
        Self {
            customer_code: customer_code.to_string(),
            sales_order_number: sales_order_number.to_string(),
        }
    }

    /// Ascending by customer code, then by order number
    pub fn sorts_before(&self, other: &Self) -> bool {
        (&self.customer_code, &self.sales_order_number)
            < (&other.customer_code, &other.sales_order_number)
    }
}
