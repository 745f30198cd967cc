use input_type_probe::{Dom, supports_date_input_in};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{FileFailurePersistence, TestCaseResult};

const PROBE_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/probe_property_fuzz_test.txt";
const DEFAULT_PROBE_PROPTEST_CASES: u32 = 128;

fn probe_proptest_cases() -> u32 {
    std::env::var("INPUT_TYPE_PROBE_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_PROBE_PROPTEST_CASES)
}

fn input_type_name_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        5 => Just("date".to_string()),
        3 => Just("DATE".to_string()),
        5 => prop_oneof![
            Just("text"),
            Just("password"),
            Just("checkbox"),
            Just("radio"),
            Just("number"),
            Just("email"),
            Just("time"),
            Just("datetime-local"),
            Just("color"),
            Just("range"),
        ]
        .prop_map(str::to_string),
        2 => "[a-z][a-z-]{0,11}",
    ]
    .boxed()
}

fn engine_profile_strategy() -> BoxedStrategy<Vec<String>> {
    vec(input_type_name_strategy(), 0..=16).boxed()
}

fn assert_probe_matches_profile(profile: &[String]) -> TestCaseResult {
    let mut dom = Dom::with_input_types(profile.iter().map(String::as_str));
    let expected = profile
        .iter()
        .any(|name| name.eq_ignore_ascii_case("date"));

    let first = supports_date_input_in(&mut dom);
    prop_assert_eq!(
        first,
        expected,
        "probe disagrees with profile: profile={:?}",
        profile
    );

    let second = supports_date_input_in(&mut dom);
    prop_assert_eq!(
        second,
        first,
        "probe is not idempotent: profile={:?}",
        profile
    );

    prop_assert!(
        dom.document_children().is_empty(),
        "probe attached a node: profile={:?}",
        profile
    );

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: probe_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(PROBE_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn probe_reports_exactly_the_profiles_date_support(profile in engine_profile_strategy()) {
        assert_probe_matches_profile(&profile)?;
    }
}
