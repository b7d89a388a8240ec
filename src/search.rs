//! Linear versus binary search over a small product catalog.

use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Write};

use colored::Colorize;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DemoError, Result};

pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.product_id, self.product_name, self.category
        )
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(105, "Phone", "Electronics"),
        Product::new(102, "Shirt", "Clothing"),
        Product::new(110, "Book", "Stationery"),
        Product::new(101, "Laptop", "Electronics"),
        Product::new(108, "Shoes", "Footwear"),
    ]
}

pub fn parse_product_id(input: &str) -> Result<ProductId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DemoError::invalid_product_id(input, "no product ID given"));
    }
    trimmed
        .parse::<ProductId>()
        .map_err(|err| DemoError::invalid_product_id(trimmed, err.to_string()))
}

/// Writes the prompt to `prompt_out` and parses one line from `input`.
pub fn read_product_id<R: BufRead, W: Write>(mut input: R, mut prompt_out: W) -> Result<ProductId> {
    write!(prompt_out, "Enter product ID to search: ").map_err(DemoError::InputRead)?;
    prompt_out.flush().map_err(DemoError::InputRead)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(DemoError::InputRead)?;
    parse_product_id(&line)
}

// =============================================================================
// Search algorithms
// =============================================================================

/// Scans in array order and returns the first match along with the number of
/// key comparisons made.
pub fn linear_search_with_stats(products: &[Product], id: ProductId) -> (Option<&Product>, usize) {
    let mut comparisons = 0;
    for product in products {
        comparisons += 1;
        if product.product_id == id {
            return (Some(product), comparisons);
        }
    }
    (None, comparisons)
}

pub fn linear_search(products: &[Product], id: ProductId) -> Option<&Product> {
    linear_search_with_stats(products, id).0
}

/// Halving search over `sorted`, which must be ascending by `product_id`.
///
/// With repeated ids the leftmost match is returned.
pub fn binary_search_with_stats(sorted: &[Product], id: ProductId) -> (Option<&Product>, usize) {
    let mut left = 0;
    let mut right = sorted.len();
    let mut comparisons = 0;
    let mut found = None;

    while left < right {
        let mid = left + (right - left) / 2;
        comparisons += 1;
        match sorted[mid].product_id.cmp(&id) {
            Ordering::Equal => {
                found = Some(&sorted[mid]);
                if mid == 0 || sorted[mid - 1].product_id != id {
                    break;
                }
                right = mid;
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    (found, comparisons)
}

pub fn binary_search(sorted: &[Product], id: ProductId) -> Option<&Product> {
    binary_search_with_stats(sorted, id).0
}

/// Stable sort by id, so equal ids keep their original relative order.
pub fn sort_by_id(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by_key(|p| p.product_id);
    sorted
}

pub fn is_sorted_by_id(products: &[Product]) -> bool {
    products
        .windows(2)
        .all(|w| w[0].product_id <= w[1].product_id)
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    sorted: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(sample_products())
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let sorted = sort_by_id(&products);
        let catalog = Self { products, sorted };
        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                ?duplicates,
                "catalog has repeated product IDs, searches return the first listed"
            );
        }
        catalog
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sorted(&self) -> &[Product] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn duplicate_ids(&self) -> Vec<ProductId> {
        self.products
            .iter()
            .map(|p| p.product_id)
            .duplicates()
            .sorted()
            .collect()
    }

    pub fn linear(&self, id: ProductId) -> Option<&Product> {
        linear_search(&self.products, id)
    }

    pub fn binary(&self, id: ProductId) -> Option<&Product> {
        binary_search(&self.sorted, id)
    }

    pub fn search(&self, id: ProductId) -> SearchReport {
        let (linear, linear_comparisons) = linear_search_with_stats(&self.products, id);
        let (binary, binary_comparisons) = binary_search_with_stats(&self.sorted, id);
        debug!(
            id,
            linear_comparisons,
            binary_comparisons,
            found = linear.is_some(),
            "searched catalog"
        );
        SearchReport {
            product_id: id,
            catalog_size: self.len(),
            linear: SearchOutcome {
                product: linear.cloned(),
                comparisons: linear_comparisons,
            },
            binary: SearchOutcome {
                product: binary.cloned(),
                comparisons: binary_comparisons,
            },
        }
    }
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub product: Option<Product>,
    pub comparisons: usize,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.product {
            Some(product) => write!(f, "{product}"),
            None => f.write_str("Product not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub product_id: ProductId,
    pub catalog_size: usize,
    pub linear: SearchOutcome,
    pub binary: SearchOutcome,
}

impl SearchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "🔍 Linear Search Result:".bold().cyan()));
        out.push_str(&format!("{}\n", self.linear));
        out.push_str(&format!(
            "Comparisons: {} of {}\n",
            self.linear.comparisons, self.catalog_size
        ));

        out.push_str(&format!("\n{}\n", "⚡ Binary Search Result:".bold().cyan()));
        out.push_str(&format!("{}\n", self.binary));
        out.push_str(&format!(
            "Comparisons: {} of {}\n",
            self.binary.comparisons, self.catalog_size
        ));

        out.push_str(&format!(
            "\n{}\n",
            "📊 Time Complexity Comparison:".bold().cyan()
        ));
        out.push_str("Linear Search: O(n) - good for small or unsorted datasets\n");
        out.push_str("Binary Search: O(log n) - efficient but needs sorted data\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_linear_search_found() {
        let products = sample_products();
        let found = linear_search(&products, 101).unwrap();
        assert_eq!(found.product_name, "Laptop");
    }

    #[test]
    fn test_linear_search_not_found() {
        let products = sample_products();
        assert!(linear_search(&products, 999).is_none());
        let (_, comparisons) = linear_search_with_stats(&products, 999);
        assert_eq!(comparisons, 5);
    }

    #[test]
    fn test_sorted_order() {
        let sorted = sort_by_id(&sample_products());
        let ids: Vec<_> = sorted.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![101, 102, 105, 108, 110]);
        assert!(is_sorted_by_id(&sorted));
        assert!(!is_sorted_by_id(&sample_products()));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sort_by_id(&sample_products());
        let twice = sort_by_id(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_binary_search_found() {
        let sorted = sort_by_id(&sample_products());
        let found = binary_search(&sorted, 108).unwrap();
        assert_eq!(found.product_name, "Shoes");
        assert_eq!(found.to_string(), "[108, Shoes, Footwear]");
    }

    #[test]
    fn test_binary_search_not_found() {
        let sorted = sort_by_id(&sample_products());
        assert!(binary_search(&sorted, 999).is_none());
        assert!(binary_search(&sorted, 100).is_none());
        assert!(binary_search(&sorted, 103).is_none());
        assert!(binary_search(&[], 101).is_none());
    }

    #[test]
    fn test_binary_search_every_key() {
        let sorted = sort_by_id(&sample_products());
        for product in &sorted {
            assert_eq!(binary_search(&sorted, product.product_id), Some(product));
        }
    }

    #[test]
    fn test_repeated_search_same_result() {
        let catalog = Catalog::default();
        assert_eq!(catalog.search(105), catalog.search(105));
        assert_eq!(catalog.search(999), catalog.search(999));
    }

    #[test]
    fn test_duplicate_ids_pick_first_listed() {
        let catalog = Catalog::new(vec![
            Product::new(7, "First", "A"),
            Product::new(3, "Other", "B"),
            Product::new(7, "Second", "C"),
            Product::new(7, "Third", "D"),
        ]);
        assert_eq!(catalog.duplicate_ids(), vec![7]);
        assert_eq!(catalog.linear(7).unwrap().product_name, "First");
        assert_eq!(catalog.binary(7).unwrap().product_name, "First");
    }

    #[test]
    fn test_catalog_search_report() {
        let report = Catalog::default().search(101);
        assert_eq!(report.linear.product.as_ref().unwrap().product_name, "Laptop");
        assert_eq!(report.linear.comparisons, 4);
        assert_eq!(report.binary.product, report.linear.product);
        assert!(report.binary.comparisons <= 3);

        let rendered = report.render();
        assert!(rendered.contains("[101, Laptop, Electronics]"));
        assert!(rendered.contains("Linear Search: O(n)"));
    }

    #[test]
    fn test_not_found_rendering() {
        let report = Catalog::default().search(999);
        assert_eq!(report.linear.to_string(), "Product not found");
        assert_eq!(report.binary.to_string(), "Product not found");
    }

    #[test]
    fn test_report_json() {
        let json = Catalog::default().search(108).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["product_id"], 108);
        assert_eq!(value["binary"]["product"]["product_name"], "Shoes");

        let json = Catalog::default().search(999).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["linear"]["product"].is_null());
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("101\n").unwrap(), 101);
        assert_eq!(parse_product_id("  42 ").unwrap(), 42);
        assert!(matches!(
            parse_product_id(""),
            Err(DemoError::InvalidProductId { .. })
        ));
        assert!(matches!(
            parse_product_id("abc"),
            Err(DemoError::InvalidProductId { input, .. }) if input == "abc"
        ));
    }

    #[test]
    fn test_negative_id_is_a_normal_miss() {
        assert_eq!(parse_product_id("-5").unwrap(), -5);
        let report = Catalog::default().search(-5);
        assert!(report.linear.product.is_none());
        assert!(report.binary.product.is_none());
        assert_eq!(report.linear.to_string(), "Product not found");
    }

    #[test]
    fn test_read_product_id_prompts_on_given_writer() {
        let mut prompt = Vec::new();
        let id = read_product_id(std::io::Cursor::new("108\n"), &mut prompt).unwrap();
        assert_eq!(id, 108);
        assert_eq!(String::from_utf8(prompt).unwrap(), "Enter product ID to search: ");
    }

    #[test]
    fn test_json_report_stays_clean_when_prompting_elsewhere() {
        let mut prompt = Vec::new();
        let mut stdout = Vec::new();
        let id = read_product_id(std::io::Cursor::new("108\n"), &mut prompt).unwrap();
        writeln!(stdout, "{}", Catalog::default().search(id).to_json().unwrap()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(value["linear"]["product"]["product_name"], "Shoes");
        assert!(!prompt.is_empty());
    }

    #[test]
    fn test_read_product_id_empty_input() {
        let err = read_product_id(std::io::Cursor::new(""), std::io::sink()).unwrap_err();
        assert!(matches!(err, DemoError::InvalidProductId { .. }));
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(-20i32..20, 0..64).prop_map(|ids| {
            ids.into_iter()
                .enumerate()
                .map(|(i, id)| Product::new(id, format!("item-{i}"), "test"))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_linear_and_binary_agree(products in arb_products(), id in -25i32..25) {
            let sorted = sort_by_id(&products);
            prop_assert_eq!(linear_search(&products, id), binary_search(&sorted, id));
        }

        #[test]
        fn prop_binary_comparisons_logarithmic(products in arb_products(), id in -25i32..25) {
            let sorted = sort_by_id(&products);
            let (_, comparisons) = binary_search_with_stats(&sorted, id);
            let bound = (usize::BITS - sorted.len().leading_zeros()) as usize;
            prop_assert!(comparisons <= bound);
        }
    }
}
