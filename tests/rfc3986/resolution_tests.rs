use super::loader::{TestCase, TestFailure, TestResult, load_resolution_tests};
use uri_edit::{Modifier, Url};

fn run_resolution_tests(tests: Vec<TestCase>) -> TestResult {
    let mut result = TestResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Resolution {
            input,
            base,
            href,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let actual = uri_edit::parse::<Url>(&input, base.as_deref()).map(|url| url.href());
        let expected = if failure == Some(true) {
            None
        } else {
            href.clone()
        };

        match (&actual, &expected) {
            (Ok(actual), Some(expected)) if actual == expected => result.passed += 1,
            (Err(_), None) => result.passed += 1,
            _ => {
                result.failed += 1;
                result.failures.push(TestFailure {
                    test_num,
                    input: input.clone(),
                    base: base.clone(),
                    expected: expected.clone().unwrap_or_else(|| "failure".to_string()),
                    actual: match &actual {
                        Ok(href) => href.clone(),
                        Err(error) => format!("error: {error}"),
                    },
                });
            }
        }
    }

    result
}

#[test]
fn test_resolution_fixture() {
    let result = run_resolution_tests(load_resolution_tests());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?} against {:?}: expected {:?}, got {:?}",
            failure.test_num, failure.input, failure.base, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_resolve_matches_resolve_str() {
    for test in load_resolution_tests() {
        let TestCase::Resolution {
            input,
            base: Some(base),
            failure: None,
            ..
        } = test
        else {
            continue;
        };
        let base = Url::parse(&base).unwrap();
        let reference = Url::parse(&input).unwrap();
        assert_eq!(
            base.resolve(&reference),
            base.resolve_str(&input).unwrap(),
            "{input}"
        );
    }
}

#[test]
fn test_resolution_is_idempotent_on_results() {
    // Resolving a resolved absolute URI against any base yields it unchanged
    let other = Url::parse("ftp://elsewhere/x/y").unwrap();
    for test in load_resolution_tests() {
        let TestCase::Resolution {
            href: Some(href), ..
        } = test
        else {
            continue;
        };
        let resolved = Url::parse(&href).unwrap();
        if !resolved.is_absolute() {
            continue;
        }
        assert_eq!(other.resolve(&resolved), resolved, "{href}");
    }
}
