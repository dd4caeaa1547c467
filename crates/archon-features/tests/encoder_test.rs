use archon_core::config::EncoderConfig;
use archon_core::models::{Budget, CloudTarget, DataVolume, ProjectDescription, ProjectHints, Scale};
use archon_features::FeatureEncoder;
use proptest::prelude::*;

fn hints_strategy() -> impl Strategy<Value = ProjectHints> {
    (
        proptest::option::of("[a-z]{0,10}"),
        proptest::option::of(prop_oneof![
            Just(Scale::Prototype),
            Just(Scale::Startup),
            Just(Scale::Enterprise)
        ]),
        proptest::option::of(prop_oneof![Just(Budget::Low), Just(Budget::High)]),
        proptest::option::of(prop_oneof![
            Just(CloudTarget::Aws),
            Just(CloudTarget::OnPrem)
        ]),
        proptest::option::of(Just(DataVolume::Large)),
        proptest::option::of(0u32..10_000),
        proptest::option::of(0u64..100_000_000),
        proptest::collection::vec("[a-z]{2,6}", 0..8),
    )
        .prop_map(
            |(domain, scale, budget, cloud_target, data_volume, team_size, expected_users, compliance)| {
                ProjectHints {
                    name: None,
                    domain,
                    scale,
                    budget,
                    cloud_target,
                    data_volume,
                    team_size,
                    expected_users,
                    compliance,
                }
            },
        )
}

#[test]
fn scenario_description_encodes() {
    let enc = FeatureEncoder::new(&EncoderConfig::default());
    let v = enc
        .encode(&ProjectDescription::new(
            "a small internal tool with one database and low traffic",
        ))
        .unwrap();
    assert_eq!(v.len(), 256 + 16);
    assert!(v.values().iter().all(|x| x.is_finite()));
}

#[test]
fn encoder_is_shareable_across_threads() {
    let enc = std::sync::Arc::new(FeatureEncoder::new(&EncoderConfig::default()));
    let desc = ProjectDescription::new("multi tenant billing platform");
    let expected = enc.encode(&desc).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let enc = enc.clone();
            let desc = desc.clone();
            std::thread::spawn(move || enc.encode(&desc).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn encode_is_bit_identical(text in "[a-zA-Z ]{1,200}", hints in hints_strategy()) {
        prop_assume!(!text.trim().is_empty());
        let enc = FeatureEncoder::new(&EncoderConfig::default());
        let desc = ProjectDescription::with_hints(text, hints);
        let a = enc.encode(&desc).unwrap();
        let b = FeatureEncoder::new(&EncoderConfig::default()).encode(&desc.clone()).unwrap();
        let a_bits: Vec<u32> = a.values().iter().map(|x| x.to_bits()).collect();
        let b_bits: Vec<u32> = b.values().iter().map(|x| x.to_bits()).collect();
        prop_assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn every_value_is_bounded(text in "[a-z ]{1,120}", hints in hints_strategy()) {
        prop_assume!(!text.trim().is_empty());
        let enc = FeatureEncoder::new(&EncoderConfig::default());
        let v = enc.encode(&ProjectDescription::with_hints(text, hints)).unwrap();
        prop_assert!(v.values().iter().all(|x| (0.0..=1.0 + 1e-6).contains(x)));
    }
}
