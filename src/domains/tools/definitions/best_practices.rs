//! Best practices tool definition.
//!
//! Flags common Kotlin anti-patterns by substring heuristics. This is not a
//! parser: a marker inside a comment or string literal still counts.

use super::ToolGenerator;
use crate::domains::tools::arguments::{FromArguments, ResolvedArguments};
use crate::domains::tools::registry::ParameterSpec;

/// Parameters for the best practices tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPracticesParams {
    /// The Kotlin code to analyze.
    pub code_snippet: String,
}

impl FromArguments for BestPracticesParams {
    fn from_arguments(args: &ResolvedArguments) -> Self {
        Self {
            code_snippet: args.string("codeSnippet"),
        }
    }
}

/// Anti-patterns in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiPattern {
    NotNullAssertion,
    GlobalScope,
    MutableOnly,
    Println,
}

impl AntiPattern {
    /// Every anti-pattern, in the order findings are reported.
    pub const ALL: [AntiPattern; 4] = [
        Self::NotNullAssertion,
        Self::GlobalScope,
        Self::MutableOnly,
        Self::Println,
    ];

    /// Whether `code` contains this anti-pattern.
    pub fn is_present(&self, code: &str) -> bool {
        match self {
            Self::NotNullAssertion => code.contains("!!"),
            Self::GlobalScope => code.contains("GlobalScope"),
            Self::MutableOnly => code.contains("var ") && !code.contains("val "),
            Self::Println => code.contains("println"),
        }
    }

    /// Advice line reported for this anti-pattern.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::NotNullAssertion => {
                "- Avoid using `!!` (not-null assertion). Use `?` safe calls or `?:` Elvis operator instead to prevent NullPointerExceptions."
            }
            Self::GlobalScope => {
                "- Avoid `GlobalScope`. Use structured concurrency with `viewModelScope`, `lifecycleScope`, or a custom CoroutineScope."
            }
            Self::MutableOnly => {
                "- Prefer `val` (immutable) over `var` (mutable) where possible to ensure thread safely and predictability."
            }
            Self::Println => {
                "- Use a standard Logging framework (e.g., SLF4J or Timber) instead of `println`."
            }
        }
    }
}

/// Lines emitted when no anti-pattern is found.
pub const CLEAN_CODE_LINES: [&str; 3] = [
    "Code looks clean regarding basic heuristics. Ensure you are following SOLID principles:",
    "- Single Responsibility: Each class should have one job.",
    "- Open/Closed: Open for extension, closed for modification.",
];

/// Best practices tool.
pub struct BestPracticesTool;

impl BestPracticesTool {
    /// Findings for `code`, in reporting order.
    pub fn findings(code: &str) -> Vec<AntiPattern> {
        AntiPattern::ALL
            .into_iter()
            .filter(|pattern| pattern.is_present(code))
            .collect()
    }
}

impl ToolGenerator for BestPracticesTool {
    const NAME: &'static str = "check_best_practices";
    const DESCRIPTION: &'static str = "Analyze Kotlin code snippets for common anti-patterns and suggest improvements based on SOLID and optimization principles.";

    type Params = BestPracticesParams;

    fn parameters() -> Vec<ParameterSpec> {
        vec![ParameterSpec::required(
            "codeSnippet",
            "The Kotlin code to analyze.",
        )]
    }

    fn generate(params: &BestPracticesParams) -> String {
        let findings = Self::findings(&params.code_snippet);

        let lines: Vec<&str> = if findings.is_empty() {
            CLEAN_CODE_LINES.to_vec()
        } else {
            findings.iter().map(AntiPattern::advice).collect()
        };

        format!("### Best Practices Analysis\n\n{}", lines.join("\n"))
    }
}
