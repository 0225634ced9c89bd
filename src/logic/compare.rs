use std::cmp::Ordering;

use crate::model::{ProductFlavor, ProductInstance};

/// Catalog order: display name (case-sensitive), then identifier
pub fn compare_instances(a: &ProductInstance, b: &ProductInstance) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
}

/// Flavor order: price ascending, then name, then owning instance identifier.
///
/// Prices are compared with `f64::total_cmp` so the order stays total even for
/// values the catalog should never contain (NaN, -0.0).
pub fn compare_flavors(a: &ProductFlavor, b: &ProductFlavor) -> Ordering {
    a.price
        .total_cmp(&b.price)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.instance_id.cmp(&b.instance_id))
}

pub fn sort_instances(instances: &mut [ProductInstance]) {
    instances.sort_by(compare_instances);
}

pub fn sort_flavors(flavors: &mut [ProductFlavor]) {
    flavors.sort_by(compare_flavors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::instance::fixtures::{flavor, instance};
    use proptest::prelude::*;

    #[test]
    fn test_instances_by_name_then_id() {
        let mut catalog = vec![
            instance("z-2", "Zeta", &[]),
            instance("a-1", "alpha", &[]),
            instance("b-9", "Beta", &[]),
            instance("b-1", "Beta", &[]),
        ];
        sort_instances(&mut catalog);

        let ids: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        // Uppercase sorts before lowercase
        assert_eq!(ids, vec!["b-1", "b-9", "z-2", "a-1"]);
    }

    #[test]
    fn test_flavors_by_price_name_instance() {
        let mut flavors = vec![
            flavor("gpu", "large", 100.0),
            flavor("gpu", "small", 10.0),
            flavor("cpu", "small", 10.0),
            flavor("cpu", "medium", 10.0),
        ];
        sort_flavors(&mut flavors);

        let keys: Vec<String> = flavors.iter().map(|f| f.key().to_string()).collect();
        assert_eq!(
            keys,
            vec!["cpu/medium", "cpu/small", "gpu/small", "gpu/large"]
        );
    }

    #[test]
    fn test_identical_flavors_compare_equal() {
        let a = flavor("gpu", "small", 10.0);
        assert_eq!(compare_flavors(&a, &a.clone()), Ordering::Equal);
    }

    fn arb_flavor() -> impl Strategy<Value = ProductFlavor> {
        ("[a-c]{1,2}", "[a-d]{1,2}", 0u32..50).prop_map(|(instance_id, name, cents)| {
            flavor(&instance_id, &name, cents as f64 * 0.5)
        })
    }

    fn arb_instance() -> impl Strategy<Value = ProductInstance> {
        ("[a-z0-9]{1,3}", "[A-Za-z]{1,3}").prop_map(|(id, name)| instance(&id, &name, &[]))
    }

    proptest! {
        #[test]
        fn prop_instance_sort_is_stable_and_matches_manual(mut catalog in prop::collection::vec(arb_instance(), 1..20)) {
            let mut expected: Vec<(String, String)> =
                catalog.iter().map(|i| (i.name.clone(), i.id.clone())).collect();
            expected.sort();

            sort_instances(&mut catalog);
            let first: Vec<(String, String)> =
                catalog.iter().map(|i| (i.name.clone(), i.id.clone())).collect();
            prop_assert_eq!(&first, &expected);

            sort_instances(&mut catalog);
            let second: Vec<(String, String)> =
                catalog.iter().map(|i| (i.name.clone(), i.id.clone())).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_flavor_sort_orders_price_name_instance(mut flavors in prop::collection::vec(arb_flavor(), 0..30)) {
            sort_flavors(&mut flavors);
            for pair in flavors.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.price <= b.price);
                if a.price == b.price {
                    prop_assert!(a.name <= b.name);
                    if a.name == b.name {
                        prop_assert!(a.instance_id <= b.instance_id);
                    }
                }
            }
        }

        #[test]
        fn prop_flavor_order_is_antisymmetric(a in arb_flavor(), b in arb_flavor()) {
            prop_assert_eq!(compare_flavors(&a, &b), compare_flavors(&b, &a).reverse());
        }
    }
}
