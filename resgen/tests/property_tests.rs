use proptest::prelude::*;
use resgen::formats::StringsFormat;
use resgen::traits::Parser;
use resgen::{BundleReference, ColorResource, Namespace};

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?%@]{0,30}").expect("valid value regex")
}

fn noise_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("// comment".to_string()),
        Just("/* block */".to_string()),
        Just("garbage line".to_string()),
        Just("\"dangling\" =".to_string()),
        Just(String::new()),
    ]
}

fn namespace_strategy() -> impl Strategy<Value = Namespace> {
    let leaf = prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(|names| Namespace {
        colors: names
            .into_iter()
            .map(|name| ColorResource {
                name,
                path: Vec::new(),
                bundle: BundleReference::Host,
            })
            .collect(),
        ..Namespace::new()
    });
    leaf.prop_recursive(3, 16, 3, |inner| {
        (
            prop::collection::vec("[a-z]{1,4}", 0..3),
            prop::collection::vec(("[A-C]", inner), 0..3),
        )
            .prop_map(|(names, children)| {
                let mut ns = Namespace::new();
                ns.colors = names
                    .into_iter()
                    .map(|name| ColorResource {
                        name,
                        path: Vec::new(),
                        bundle: BundleReference::Host,
                    })
                    .collect();
                for (name, child) in children {
                    ns.subnamespaces.insert(name, child);
                }
                ns
            })
    })
}

fn total_colors(ns: &Namespace) -> usize {
    ns.all_colors().len()
}

proptest! {
    #[test]
    fn prop_every_well_formed_pair_is_parsed(
        pairs in prop::collection::vec((key_strategy(), value_strategy(), noise_strategy()), 1..10)
    ) {
        let content = pairs
            .iter()
            .map(|(key, value, noise)| format!("{}\n\"{}\" = \"{}\";", noise, key, value))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = StringsFormat::from_str(&content).unwrap();
        prop_assert_eq!(parsed.pairs.len(), pairs.len());
        for (pair, (key, value, _)) in parsed.pairs.iter().zip(pairs.iter()) {
            prop_assert_eq!(&pair.key, key);
            prop_assert_eq!(&pair.value, value);
        }
    }

    #[test]
    fn prop_merge_is_associative(
        a in namespace_strategy(),
        b in namespace_strategy(),
        c in namespace_strategy(),
    ) {
        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_merge_keeps_every_leaf(a in namespace_strategy(), b in namespace_strategy()) {
        let expected = total_colors(&a) + total_colors(&b);
        let merged = a.clone().merge(b);
        prop_assert_eq!(total_colors(&merged), expected);

        let own: Vec<_> = merged.colors.iter().take(a.colors.len()).collect();
        let original: Vec<_> = a.colors.iter().collect();
        prop_assert_eq!(own, original);
    }
}
