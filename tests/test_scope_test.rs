use unit_tally::test_utils::{capture, plain_lines};
use unit_tally::{AssertionTracker, TrackerConfig};

/// A helper that asserts on behalf of its caller
#[track_caller]
fn assert_even(t: &mut AssertionTracker<Vec<u8>>, n: i64) {
    t.assert_true(n % 2 == 0, &format!("{n} is odd"));
}

#[test]
fn test_scope_names_lines() {
    let mut t = capture(TrackerConfig::default());
    {
        let mut scope = t.test("parses_header");
        scope.fail("bad magic");
    }
    assert_eq!(plain_lines(&t), vec!["X parses_header FAILED: bad magic".to_string()]);
}

#[test]
fn test_nested_scopes_restore_outer_name() {
    let mut t = capture(TrackerConfig::new(true, false));
    {
        let mut outer = t.test("outer");
        outer.pass();
        {
            let mut inner = outer.test("inner");
            inner.pass();
        }
        outer.pass();
    }
    assert_eq!(
        plain_lines(&t),
        vec![
            ". outer passed".to_string(),
            ". inner passed".to_string(),
            ". outer passed".to_string(),
        ]
    );
    assert_eq!(t.current_test(), None);
}

#[test]
fn test_scope_restores_manual_name() {
    let mut t = capture(TrackerConfig::default());
    t.set_test_name(Some("manual"));
    {
        let scope = t.test("scoped");
        assert_eq!(scope.current_test(), Some("scoped"));
    }
    assert_eq!(t.current_test(), Some("manual"));
    t.set_test_name(None);
    assert_eq!(t.current_test(), None);
}

#[test]
fn test_counts_survive_scopes() {
    let mut t = capture(TrackerConfig::default());
    {
        let mut a = t.test("a");
        a.pass();
        a.fail("x");
    }
    {
        let mut b = t.test("b");
        b.pass();
    }
    assert_eq!((t.passed(), t.failed()), (2, 1));
}

#[test]
fn test_unscoped_failure_names_call_site() {
    let mut t = capture(TrackerConfig::default());
    let line = line!() + 1;
    t.assert_equals_string("left", "right");
    let out = &plain_lines(&t)[0];
    assert!(
        out.contains(&format!("test_scope_test.rs:{line} FAILED:")),
        "unexpected output: {out}"
    );
}

#[test]
fn test_track_caller_helper_names_the_test_line() {
    let mut t = capture(TrackerConfig::default());
    assert_even(&mut t, 2);
    let line = line!() + 1;
    assert_even(&mut t, 3);
    let out = &plain_lines(&t)[0];
    assert!(
        out.contains(&format!("test_scope_test.rs:{line} FAILED: 3 is odd")),
        "unexpected output: {out}"
    );
    assert_eq!(t.passed(), 1);
}
