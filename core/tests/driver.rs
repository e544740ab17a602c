use fact_core::{nothing, run, Report, DEFAULT_INPUT, FAILURE, SUCCESS};

#[test]
fn fixed_input_prints_failure() {
    let mut out = Vec::new();
    let report = run(DEFAULT_INPUT, &mut out).unwrap();

    assert_eq!(report.recursive, 0);
    assert_eq!(report.for_loop, 120);
    assert_eq!(report.while_loop, 120);

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed, format!("{FAILURE}\n"));
    assert!(!printed.contains(SUCCESS));
}

#[test]
fn recursion_never_matches_loops() {
    // recursion yields 0 while both loops yield at least 1.
    for n in 0..=20 {
        let mut out = Vec::new();
        let report = run(n, &mut out).unwrap();

        assert!(!report.agrees, "n = {n}");
        assert_eq!(out, format!("{FAILURE}\n").into_bytes());
    }
}

#[test]
fn report_serializes() {
    let report = Report::new(5, 0, 120, 120);
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "input": 5,
            "recursive": 0,
            "for_loop": 120,
            "while_loop": 120,
            "agrees": false,
        })
    );
}

#[test]
fn nothing_is_not_part_of_the_check() {
    let mut out = Vec::new();
    nothing(&mut out).unwrap();
    run(DEFAULT_INPUT, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Nothing\nNot working :(\n");
}
