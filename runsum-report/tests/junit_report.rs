use runsum_report::{JUnitOptions, Summary, junit_report};

const FIXTURE: &str = r#"{
    "root_group": {"name": ""},
    "metrics": {
        "http_req_duration": {
            "type": "trend",
            "contains": "time",
            "values": {"avg": 120.5, "p(95)": 220},
            "thresholds": {
                "p(95)<200": {"ok": false, "values": {"p(95)": 220}},
                "avg<500": {"ok": true, "values": {"avg": 120.5}}
            }
        },
        "http_reqs": {
            "type": "counter",
            "values": {"count": 100, "rate": 10}
        }
    }
}"#;

fn fixture() -> Summary {
    Summary::from_json_str(FIXTURE).unwrap_or_else(|e| panic!("fixture: {e}"))
}

#[test]
fn one_passing_and_one_failing_threshold_totals_match() {
    let xml = junit_report(&fixture(), &JUnitOptions::default());

    assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
    assert!(xml.contains(r#"<testsuites tests="2" failures="1">"#));
    assert!(xml.contains(r#"<testsuite name="k6 thresholds" tests="2" failures="1">"#));
    assert_eq!(xml.matches("<failure").count(), 1);

    // Passing testcase is self-closing, failing one nests the failure.
    assert!(xml.contains(
        r#"<testcase name="http_req_duration - avg&lt;500" classname="Unnamed folder" />"#
    ));
    assert!(xml.contains(
        r#"<testcase name="http_req_duration - p(95)&lt;200" classname="Unnamed folder"><failure message="trend threshold failed: p(95) value: 220" /></testcase>"#
    ));
}

#[test]
fn metrics_without_thresholds_are_omitted() {
    let xml = junit_report(&fixture(), &JUnitOptions::default());
    assert!(!xml.contains("http_reqs -"));
}

#[test]
fn serialization_is_idempotent() {
    let summary = fixture();
    let opts = JUnitOptions::default();
    assert_eq!(junit_report(&summary, &opts), junit_report(&summary, &opts));
}

#[test]
fn custom_name_and_classname_flow_through() {
    let opts = JUnitOptions {
        name: Some("nightly".to_string()),
        classname: Some("load/api".to_string()),
    };

    let xml = junit_report(&fixture(), &opts);
    assert!(xml.contains(r#"<testsuite name="nightly" tests="2" failures="1">"#));
    assert!(xml.contains(r#"classname="load/api""#));
}
