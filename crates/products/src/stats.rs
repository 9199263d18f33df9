use std::collections::HashMap;

use crate::product::Product;

/// Count products per exact category value.
///
/// Computed over the full snapshot; a category with no members is absent
/// from the map rather than reported as zero. Key order is not part of the
/// contract.
pub fn category_counts(products: &[Product]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for product in products {
        *counts.entry(product.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductId;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            description: format!("{name} description"),
            price: 1.0,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn counts_products_per_category() {
        let products = vec![
            product("Hammer", "A"),
            product("Screwdriver", "A"),
            product("Notebook", "B"),
        ];

        let counts = category_counts(&products);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["B"], 1);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let products = vec![product("Hammer", "Tools"), product("Wrench", "tools")];

        let counts = category_counts(&products);

        assert_eq!(counts["Tools"], 1);
        assert_eq!(counts["tools"], 1);
    }

    #[test]
    fn empty_snapshot_yields_empty_counts() {
        assert!(category_counts(&[]).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: counts always sum to the snapshot length, and every
            /// key is a category that actually occurs.
            #[test]
            fn counts_partition_the_snapshot(
                categories in proptest::collection::vec("[a-d]", 0..40),
            ) {
                let products: Vec<Product> = categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| product(&format!("item {i}"), category))
                    .collect();

                let counts = category_counts(&products);

                prop_assert_eq!(counts.values().sum::<usize>(), products.len());
                for key in counts.keys() {
                    prop_assert!(categories.iter().any(|c| c == key));
                }
            }
        }
    }
}
