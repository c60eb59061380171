//! # Analytics Module
//!
//! Derived metrics for the Dashboard and Analytics pages.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  db.products().list_all() ──► &[Product] ──┬──► total_stock            │
//! │                                            ├──► store_value            │
//! │                                            ├──► group_*_by_category    │
//! │                                            ├──► top_n_by_value         │
//! │                                            └──► average_price, ...     │
//! │                                                                         │
//! │  db.customers().list_all() ─► &[Customer] ─┬──► top_n_by_purchases     │
//! │                                            └──► customer_revenue       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here borrows its input and never touches storage. Calling
//! one twice on the same slice gives the same answer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Customer, Product, StaffMember};
use crate::{LOW_STOCK_THRESHOLD, PREMIUM_PRICE_THRESHOLD, PRICE_HISTOGRAM_BINS, TOP_N};

// =============================================================================
// Output Types
// =============================================================================

/// Summed stock for one category (pie chart slice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryStock {
    pub category: String,
    pub stock: i64,
}

/// Summed stock value for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

/// One bar of the price range histogram. `upper` is inclusive on the last bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

// =============================================================================
// Totals
// =============================================================================

/// Sum of stock across all rows. 0 for empty input.
///
/// Saturates at `i64::MAX` for rows written around the repository.
pub fn total_stock(products: &[Product]) -> i64 {
    products
        .iter()
        .fold(0i64, |total, p| total.saturating_add(p.stock))
}

/// Sum of stock × price across all rows. 0 for empty input.
///
/// ```rust
/// use haven_core::analytics::store_value;
///
/// assert_eq!(store_value(&[]), 0.0);
/// ```
pub fn store_value(products: &[Product]) -> f64 {
    products.iter().map(Product::line_value).sum()
}

/// Sum of lifetime purchases across all customers.
pub fn customer_revenue(customers: &[Customer]) -> f64 {
    customers.iter().map(|c| c.total_purchases).sum()
}

/// Arithmetic mean of price.
///
/// ## Returns
/// * `Err(CoreError::EmptyInput)` - no products to average over
pub fn average_price(products: &[Product]) -> CoreResult<f64> {
    mean(products.iter().map(|p| p.price), products.len(), "average price")
}

/// Mean lifetime purchases per customer.
pub fn average_customer_spend(customers: &[Customer]) -> CoreResult<f64> {
    mean(
        customers.iter().map(|c| c.total_purchases),
        customers.len(),
        "average customer spend",
    )
}

fn mean(values: impl Iterator<Item = f64>, len: usize, metric: &str) -> CoreResult<f64> {
    if len == 0 {
        return Err(CoreError::EmptyInput {
            metric: metric.to_string(),
        });
    }

    Ok(values.sum::<f64>() / len as f64)
}

// =============================================================================
// Group-bys
// =============================================================================

/// Stock summed per category, categories in first-seen order.
pub fn group_stock_by_category(products: &[Product]) -> Vec<CategoryStock> {
    group_by_category(products, |p| p.stock, i64::saturating_add)
        .into_iter()
        .map(|(category, stock)| CategoryStock { category, stock })
        .collect()
}

/// Stock value (stock × price) summed per category, first-seen order.
pub fn group_value_by_category(products: &[Product]) -> Vec<CategoryValue> {
    group_by_category(products, Product::line_value, |a, b| a + b)
        .into_iter()
        .map(|(category, value)| CategoryValue { category, value })
        .collect()
}

fn group_by_category<T, F>(products: &[Product], key: F, add: fn(T, T) -> T) -> Vec<(String, T)>
where
    T: Copy,
    F: Fn(&Product) -> T,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, T)> = Vec::new();

    for product in products {
        let amount = key(product);
        match slots.get(product.category.as_str()) {
            Some(&slot) => groups[slot].1 = add(groups[slot].1, amount),
            None => {
                slots.insert(product.category.as_str(), groups.len());
                groups.push((product.category.clone(), amount));
            }
        }
    }

    groups
}

// =============================================================================
// Top-N
// =============================================================================

/// The `n` products with the greatest stock value.
///
/// Stable: products with equal value keep their list order. Returns fewer
/// than `n` rows when the input is shorter.
pub fn top_n_by_value(products: &[Product], n: usize) -> Vec<&Product> {
    top_n(products, n, Product::line_value)
}

/// The `n` customers with the greatest lifetime purchases.
pub fn top_n_by_purchases(customers: &[Customer], n: usize) -> Vec<&Customer> {
    top_n(customers, n, |c| c.total_purchases)
}

fn top_n<T, F>(rows: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = rows.iter().collect();
    // sort_by is stable, ties stay in input order
    ranked.sort_by(|a, b| key(*b).total_cmp(&key(*a)));
    ranked.truncate(n);
    ranked
}

// =============================================================================
// Threshold Counts
// =============================================================================

/// Rows with stock strictly below `threshold`.
pub fn low_stock_count(products: &[Product], threshold: i64) -> usize {
    products.iter().filter(|p| p.stock < threshold).count()
}

/// Rows priced strictly above `threshold`.
pub fn premium_count(products: &[Product], threshold: f64) -> usize {
    products.iter().filter(|p| p.price > threshold).count()
}

// =============================================================================
// Histogram
// =============================================================================

/// Splits the price range into `bins` equal-width buckets.
///
/// Empty input or zero bins gives an empty histogram. When every product has
/// the same price a single bucket holds them all.
pub fn price_histogram(products: &[Product], bins: usize) -> Vec<PriceBin> {
    if products.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = products
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return vec![PriceBin {
            lower: min,
            upper: max,
            count: products.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut histogram: Vec<PriceBin> = (0..bins)
        .map(|i| PriceBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for product in products {
        let slot = (((product.price - min) / width) as usize).min(bins - 1);
        histogram[slot].count += 1;
    }

    histogram
}

// =============================================================================
// Page Summaries
// =============================================================================

/// Metric cards shown at the top of the Dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub total_stock: i64,
    pub store_value: f64,
    pub staff_count: usize,
    pub customer_count: usize,
    pub stock_by_category: Vec<CategoryStock>,
}

impl DashboardSummary {
    pub fn from_rows(products: &[Product], staff: &[StaffMember], customers: &[Customer]) -> Self {
        DashboardSummary {
            total_stock: total_stock(products),
            store_value: store_value(products),
            staff_count: staff.len(),
            customer_count: customers.len(),
            stock_by_category: group_stock_by_category(products),
        }
    }
}

/// Everything the Analytics page renders.
///
/// Averages are `None` when there is nothing to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsReport {
    pub inventory_value: f64,
    pub average_price: Option<f64>,
    pub customer_revenue: f64,
    pub top_products: Vec<Product>,
    pub top_customers: Vec<Customer>,
    pub value_by_category: Vec<CategoryValue>,
    pub price_distribution: Vec<PriceBin>,
    pub low_stock_count: usize,
    pub premium_count: usize,
    pub average_customer_spend: Option<f64>,
}

impl AnalyticsReport {
    pub fn from_rows(products: &[Product], customers: &[Customer]) -> Self {
        AnalyticsReport {
            inventory_value: store_value(products),
            average_price: average_price(products).ok(),
            customer_revenue: customer_revenue(customers),
            top_products: top_n_by_value(products, TOP_N).into_iter().cloned().collect(),
            top_customers: top_n_by_purchases(customers, TOP_N)
                .into_iter()
                .cloned()
                .collect(),
            value_by_category: group_value_by_category(products),
            price_distribution: price_histogram(products, PRICE_HISTOGRAM_BINS),
            low_stock_count: low_stock_count(products, LOW_STOCK_THRESHOLD),
            premium_count: premium_count(products, PREMIUM_PRICE_THRESHOLD),
            average_customer_spend: average_customer_spend(customers).ok(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_products() -> Vec<Product> {
        vec![
            Product::new(1, "Gel Pen", "Pens", 150, 25.0, "PenCo"),
            Product::new(2, "Notebook A4", "Notebooks", 200, 80.0, "PaperMill"),
            Product::new(3, "Highlighter Set", "Markers", 75, 120.0, "ColorPro"),
            Product::new(4, "Stapler", "Accessories", 50, 150.0, "OfficeMax"),
            Product::new(5, "Sticky Notes", "Paper", 300, 40.0, "NoteIt"),
            Product::new(6, "Pencil Box", "Accessories", 100, 90.0, "StoragePlus"),
        ]
    }

    fn demo_customers() -> Vec<Customer> {
        vec![
            Customer::new(1, "Vikram Singh", "vikram@email.com", "9123456789", 2500.0),
            Customer::new(2, "Anjali Mehta", "anjali@email.com", "9123456790", 3200.0),
            Customer::new(3, "Rohan Desai", "rohan@email.com", "9123456791", 1800.0),
            Customer::new(4, "Kavya Iyer", "kavya@email.com", "9123456792", 4100.0),
        ]
    }

    #[test]
    fn test_totals_on_empty_input() {
        assert_eq!(total_stock(&[]), 0);
        assert_eq!(store_value(&[]), 0.0);
        assert_eq!(customer_revenue(&[]), 0.0);
        assert!(group_stock_by_category(&[]).is_empty());
        assert!(top_n_by_value(&[], 5).is_empty());
    }

    #[test]
    fn test_store_value() {
        let products = vec![
            Product::new(1, "Gel Pen", "Pens", 150, 25.0, "PenCo"),
            Product::new(2, "Notebook A4", "Notebooks", 200, 80.0, "PaperMill"),
        ];
        assert_eq!(store_value(&products), 19_750.0);
    }

    #[test]
    fn test_total_stock() {
        assert_eq!(total_stock(&demo_products()), 875);
    }

    #[test]
    fn test_stock_sums_saturate_on_huge_rows() {
        let products = vec![
            Product::new(1, "Bulk", "Paper", i64::MAX, 1.0, "Mill"),
            Product::new(2, "Bulk", "Paper", i64::MAX, 1.0, "Mill"),
        ];

        assert_eq!(total_stock(&products), i64::MAX);
        assert_eq!(
            group_stock_by_category(&products),
            vec![CategoryStock {
                category: "Paper".to_string(),
                stock: i64::MAX
            }]
        );
        assert_eq!(
            DashboardSummary::from_rows(&products, &[], &[]).total_stock,
            i64::MAX
        );
    }

    #[test]
    fn test_average_price() {
        let products = vec![
            Product::new(1, "A", "X", 1, 25.0, "S"),
            Product::new(2, "B", "X", 1, 80.0, "S"),
            Product::new(3, "C", "X", 1, 120.0, "S"),
        ];
        assert_eq!(average_price(&products).unwrap(), 75.0);
        assert!(matches!(
            average_price(&[]),
            Err(CoreError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_group_stock_by_category_keeps_first_seen_order() {
        let groups = group_stock_by_category(&demo_products());
        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Pens", "Notebooks", "Markers", "Accessories", "Paper"]
        );

        let accessories = groups.iter().find(|g| g.category == "Accessories").unwrap();
        assert_eq!(accessories.stock, 150);
    }

    #[test]
    fn test_group_value_by_category() {
        let groups = group_value_by_category(&demo_products());
        let accessories = groups.iter().find(|g| g.category == "Accessories").unwrap();
        // Stapler 50 × 150 + Pencil Box 100 × 90
        assert_eq!(accessories.value, 16_500.0);

        let total: f64 = groups.iter().map(|g| g.value).sum();
        assert_eq!(total, store_value(&demo_products()));
    }

    #[test]
    fn test_top_n_by_value() {
        let products = demo_products();
        let top = top_n_by_value(&products, 5);
        assert_eq!(top.len(), 5);

        // Notebook A4 = 16000 leads
        assert_eq!(top[0].name, "Notebook A4");

        let weakest_kept = top.iter().map(|p| p.line_value()).fold(f64::INFINITY, f64::min);
        for excluded in products.iter().filter(|p| !top.iter().any(|t| t.id == p.id)) {
            assert!(weakest_kept >= excluded.line_value());
        }

        // Input untouched
        assert_eq!(products, demo_products());
    }

    #[test]
    fn test_top_n_is_stable_on_ties() {
        let products = vec![
            Product::new(1, "First", "X", 10, 10.0, "S"),
            Product::new(2, "Second", "X", 10, 10.0, "S"),
            Product::new(3, "Third", "X", 20, 10.0, "S"),
        ];
        let top = top_n_by_value(&products, 3);
        let ids: Vec<i64> = top.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_top_n_shorter_input() {
        let products = demo_products();
        assert_eq!(top_n_by_value(&products[..2], 5).len(), 2);
        assert!(top_n_by_value(&products, 0).is_empty());
    }

    #[test]
    fn test_top_n_by_purchases() {
        let customers = demo_customers();
        let top = top_n_by_purchases(&customers, 2);
        let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Kavya Iyer", "Anjali Mehta"]);
    }

    #[test]
    fn test_threshold_counts_are_strict() {
        let products = demo_products();
        // Stock < 100: Highlighter Set (75), Stapler (50). Pencil Box sits at 100.
        assert_eq!(low_stock_count(&products, 100), 2);
        // Price > 100: Highlighter Set, Stapler
        assert_eq!(premium_count(&products, 100.0), 2);
        assert_eq!(premium_count(&products, 150.0), 0);
    }

    #[test]
    fn test_customer_aggregates() {
        let customers = demo_customers();
        assert_eq!(customer_revenue(&customers), 11_600.0);
        assert_eq!(average_customer_spend(&customers).unwrap(), 2900.0);
        assert!(average_customer_spend(&[]).is_err());
    }

    #[test]
    fn test_price_histogram() {
        let products = demo_products();
        let histogram = price_histogram(&products, 5);
        assert_eq!(histogram.len(), 5);
        assert_eq!(histogram[0].lower, 25.0);
        assert_eq!(histogram[4].upper, 150.0);
        assert_eq!(histogram.iter().map(|b| b.count).sum::<usize>(), products.len());
        // Max price lands in the last bin
        assert!(histogram[4].count >= 1);
    }

    #[test]
    fn test_price_histogram_edge_cases() {
        assert!(price_histogram(&[], 10).is_empty());
        assert!(price_histogram(&demo_products(), 0).is_empty());

        let flat = vec![
            Product::new(1, "A", "X", 1, 40.0, "S"),
            Product::new(2, "B", "X", 1, 40.0, "S"),
        ];
        let histogram = price_histogram(&flat, 10);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[0].count, 2);
    }

    #[test]
    fn test_dashboard_summary() {
        let staff = vec![StaffMember {
            id: 1,
            name: "Rajesh Kumar".to_string(),
            role: "Store Manager".to_string(),
            email: "rajesh@stationeryhaven.com".to_string(),
            phone: "9876543210".to_string(),
        }];
        let summary = DashboardSummary::from_rows(&demo_products(), &staff, &demo_customers());
        assert_eq!(summary.total_stock, 875);
        assert_eq!(summary.staff_count, 1);
        assert_eq!(summary.customer_count, 4);
        assert_eq!(summary.stock_by_category.len(), 5);
    }

    #[test]
    fn test_analytics_report() {
        let report = AnalyticsReport::from_rows(&demo_products(), &demo_customers());
        assert_eq!(report.top_products.len(), TOP_N);
        assert_eq!(report.top_customers.len(), 4);
        assert_eq!(report.low_stock_count, 2);
        assert_eq!(report.premium_count, 2);
        assert_eq!(report.customer_revenue, 11_600.0);
        assert!(report.average_price.is_some());

        let empty = AnalyticsReport::from_rows(&[], &[]);
        assert_eq!(empty.average_price, None);
        assert_eq!(empty.average_customer_spend, None);
        assert_eq!(empty.inventory_value, 0.0);
    }
}
