//! End-to-end tests for the chain surface: presence axes, constraint
//! pipelines, element sweeps, and the eager/lazy accessor protocol.

use std::cell::Cell;
use std::rc::Rc;

use caliper::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// PRESENCE MATRIX: optional x nullable x input
// ============================================================================

#[rstest]
#[case::plain_present(false, false, Some(json!("pasta")), true)]
#[case::plain_absent(false, false, None, false)]
#[case::plain_null(false, false, Some(Value::Null), false)]
#[case::optional_absent(true, false, None, true)]
#[case::optional_null(true, false, Some(Value::Null), false)]
#[case::nullable_null(false, true, Some(Value::Null), true)]
#[case::nullable_absent(false, true, None, false)]
#[case::lax_absent(true, true, None, true)]
#[case::lax_null(true, true, Some(Value::Null), true)]
fn string_presence_matrix(
    #[case] optional: bool,
    #[case] nullable: bool,
    #[case] input: Option<Value>,
    #[case] ok: bool,
) {
    let mut draft = check_opt(input);
    if optional {
        draft = draft.optional();
    }
    if nullable {
        draft = draft.nullable();
    }
    assert_eq!(draft.string().result().is_ok(), ok);
}

#[rstest]
#[case::absent(None)]
#[case::null(Some(Value::Null))]
fn accepted_sentinels_skip_constraints(#[case] input: Option<Value>) {
    // An accepted absent/null value must succeed even against constraints
    // that would reject any present value.
    let chain = check_opt(input)
        .optional()
        .nullable()
        .string()
        .min(1000)
        .validate(|_| false);
    assert!(chain.result().is_ok());
}

#[test]
fn presence_faults_have_distinct_codes() {
    assert_eq!(absent().string().result().unwrap_err().code(), "required_missing");
    assert_eq!(
        check(Value::Null).string().result().unwrap_err().code(),
        "null_not_allowed"
    );
}

// ============================================================================
// PAIRED ACCESSOR: value on success, fault on failure, never both
// ============================================================================

#[test]
fn get_returns_the_value_unchanged() {
    assert_eq!(check("pasta").string().get(), Ok(Some(json!("pasta"))));
    assert_eq!(check(0).number().get(), Ok(Some(json!(0))));
    assert_eq!(check("").string().get(), Ok(Some(json!(""))));
    assert_eq!(check(false).boolean().get(), Ok(Some(json!(false))));
}

#[test]
fn get_reports_sentinels_distinctly() {
    assert_eq!(absent().optional().string().get(), Ok(None));
    assert_eq!(check(Value::Null).nullable().string().get(), Ok(Some(Value::Null)));
}

#[test]
fn absent_optional_composes_with_a_default() {
    let described = check_opt(None)
        .optional()
        .string()
        .get()
        .map(|v| v.unwrap_or_else(|| json!("no description")));
    assert_eq!(described, Ok(json!("no description")));

    let given = check_opt(Some(json!("fancy")))
        .optional()
        .string()
        .get()
        .map(|v| v.unwrap_or_else(|| json!("no description")));
    assert_eq!(given, Ok(json!("fancy")));
}

#[test]
fn result_and_get_agree() {
    let good = check("strawberry").string().min(8);
    assert_eq!(good.result().is_ok(), good.get().is_ok());

    let bad = check("pasta").string().min(8);
    assert_eq!(bad.result().unwrap_err(), bad.get().unwrap_err());
}

// ============================================================================
// CONSTRAINT PIPELINE
// ============================================================================

#[test]
fn chained_bounds_accumulate() {
    assert!(check("strawberry pasta").string().min(1).min(10).result().is_ok());
    assert!(check("strawberry pasta").string().min(1).min(100).result().is_err());
}

#[test]
fn type_check_runs_before_user_constraints() {
    let hits = Rc::new(Cell::new(0u32));
    let probe = Rc::clone(&hits);

    let fault = check(42)
        .string()
        .validate(move |_| {
            probe.set(probe.get() + 1);
            true
        })
        .result()
        .unwrap_err();

    assert_eq!(fault.code(), "type_mismatch");
    assert_eq!(hits.get(), 0);
}

#[test]
fn validate_verdicts_map_to_faults() {
    assert!(check("x").string().validate(|_| true).result().is_ok());

    let plain = check("x").string().validate(|_| false).result().unwrap_err();
    assert_eq!(plain, Fault::Constraint {
        name: "validate",
        detail: None
    });

    let detailed = check("x")
        .string()
        .validate(|_| Err::<(), &str>("not fancy enough"))
        .result()
        .unwrap_err();
    assert_eq!(
        detailed.to_string(),
        "constraint 'validate' failed: not fancy enough"
    );
}

#[test]
#[should_panic(expected = "probe exploded")]
fn panicking_probes_propagate() {
    let _ = check("x")
        .string()
        .validate(|_| -> bool { panic!("probe exploded") })
        .result();
}

#[test]
fn or_accepts_singleton_and_set() {
    assert!(check("strawberry").string().or(["strawberry", "pasta"]).result().is_ok());
    assert!(check("alice").string().or(["strawberry", "pasta"]).result().is_err());
    assert!(check("pasta").string().or("pasta").result().is_ok());
    assert!(check(2).number().or(json!([1, 2, 3])).result().is_ok());
}

// ============================================================================
// LAZY PROTOCOL
// ============================================================================

#[test]
fn deferred_chain_validates_many_values() {
    let score = defer().number().range(0, 100).int();

    assert!(score.result_for(88).is_ok());
    assert!(score.result_for(101).is_err());
    assert_eq!(score.get_for(42), Ok(Some(json!(42))));
}

#[test]
fn deferred_min_matches_the_eager_behavior() {
    let long_enough = defer().string().min(10);
    assert!(long_enough.result_for("strawberry pasta").is_ok());

    let fault = long_enough.result_for("alice").unwrap_err();
    assert_eq!(fault.code(), "constraint_failed");
    assert_eq!(fault.constraint_name(), Some("min"));
}

#[test]
fn supply_covers_the_whole_presence_axis() {
    let lax = defer().optional().nullable().number();
    let five = json!(5);

    assert_eq!(lax.supply(None), Ok(None));
    assert_eq!(lax.supply(Some(&Value::Null)), Ok(Some(Value::Null)));
    assert_eq!(lax.supply(Some(&five)), Ok(Some(json!(5))));

    let strict = defer().number();
    assert_eq!(strict.supply(None), Err(Fault::Missing));
    assert_eq!(strict.supply(Some(&Value::Null)), Err(Fault::Null));
}

#[test]
fn cloned_chains_evaluate_independently() {
    let base = defer().string().min(3);
    let stricter = base.clone().min(10);

    assert!(base.result_for("alice").is_ok());
    assert!(stricter.result_for("alice").is_err());
}

// ============================================================================
// ARRAYS
// ============================================================================

#[test]
fn typed_arrays_check_every_element() {
    assert!(check(json!(["a", "b"])).array_of(TypeTag::String).result().is_ok());

    let fault = check(json!(["a", 1, true]))
        .array_of(TypeTag::String)
        .result()
        .unwrap_err();
    assert_eq!(fault.code(), "each_failed");
    assert_eq!(fault.element_index(), Some(1));
}

#[test]
fn nested_chains_validate_elements_deeply() {
    let scores = defer().array().each(defer().number().range(0, 100));
    assert!(scores.result_for(vec![90, 50, 100]).is_ok());

    let fault = scores.result_for(vec![90, 50, 101]).unwrap_err();
    assert_eq!(fault.element_index(), Some(2));
    assert_eq!(fault.root_cause().constraint_name(), Some("range"));
}

#[test]
fn element_faults_nest_for_arrays_of_arrays() {
    let grid = defer().array().each(defer().array().each(TypeTag::Number));

    let fault = grid.result_for(json!([[1, 2], [3, "x"]])).unwrap_err();
    assert_eq!(fault.element_index(), Some(1));
    assert_eq!(fault.root_cause().code(), "type_mismatch");

    // The middle layer carries the inner index.
    match fault {
        Fault::Element { cause, .. } => assert_eq!(cause.element_index(), Some(1)),
        other => panic!("expected an element fault, got {other:?}"),
    }
}

#[test]
fn unique_and_bounds_compose() {
    let tags = defer().array().min(1).max(4).unique();

    assert!(tags.result_for(vec!["a", "b", "c"]).is_ok());
    assert!(tags.result_for(Vec::<String>::new()).is_err());
    assert!(tags.result_for(vec!["a", "b", "c", "b"]).is_err());
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

fn looks_like_ulid(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == 26 && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

#[test]
fn id_chains_delegate_to_the_injected_checker() {
    assert!(check("01ARZ3NDEKTSV4RRFFQ69G5FAV").id(looks_like_ulid).result().is_ok());

    let fault = check("so-fancy").id(looks_like_ulid).result().unwrap_err();
    assert_eq!(fault.code(), "type_mismatch");
    assert_eq!(fault.to_string(), "expected id, got string");
}

#[test]
fn id_elements_use_a_nested_chain_for_deep_checks() {
    let ids = defer().array().each(defer().id(looks_like_ulid));

    assert!(ids.result_for(json!(["01ARZ3NDEKTSV4RRFFQ69G5FAV"])).is_ok());
    assert_eq!(
        ids.result_for(json!(["nope"])).unwrap_err().element_index(),
        Some(0)
    );
}

// ============================================================================
// FAULT REPORTING
// ============================================================================

#[test]
fn faults_serialize_for_reporting_layers() {
    let fault = check(json!(["a", 7]))
        .array_of(TypeTag::String)
        .result()
        .unwrap_err();

    let report = serde_json::to_value(&fault).unwrap();
    assert_eq!(report["kind"], "each_failed");
    assert_eq!(report["index"], 1);
    assert_eq!(report["cause"]["kind"], "type_mismatch");
    assert_eq!(report["cause"]["expected"], "string");
    assert_eq!(report["cause"]["actual"], "number");
}
