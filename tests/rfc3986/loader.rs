/// RFC 3986 resolution fixture loader
///
/// Test data format: a JSON array of comment strings and cases. A case has an
/// `input` reference, a `base`, and either the expected `href` or
/// `"failure": true`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A resolution test case
    Resolution {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct TestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<TestFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct TestFailure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub expected: String,
    pub actual: String,
}

impl Default for TestResult {
    fn default() -> Self {
        Self::new()
    }
}

impl TestResult {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }
}

/// Load the resolution fixture
pub fn load_resolution_tests() -> Vec<TestCase> {
    let test_data = include_str!("./resolution.json");
    serde_json::from_str(test_data).expect("Failed to parse resolution test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture() {
        let tests = load_resolution_tests();
        let cases = tests
            .iter()
            .filter(|test| matches!(test, TestCase::Resolution { .. }))
            .count();
        // 23 normal and 19 abnormal examples from RFC 3986 §5.4
        assert!(cases > 42);
    }

    #[test]
    fn test_result_summary() {
        let mut result = TestResult::new();
        result.passed = 80;
        result.failed = 20;

        assert_eq!(result.pass_rate(), 80.0);
        assert!(result.summary().contains("80.00%"));
    }
}
