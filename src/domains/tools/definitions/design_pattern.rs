//! Design pattern tool definition.
//!
//! Generates a Kotlin skeleton for a GoF pattern. Templates use the
//! `{{id}}` placeholder for the identifier derived from the context.

use super::ToolGenerator;
use crate::domains::tools::arguments::{FromArguments, ResolvedArguments};
use crate::domains::tools::registry::ParameterSpec;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the design pattern tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignPatternParams {
    /// The pattern to generate (singleton, strategy, observer, ...).
    pub pattern_name: String,

    /// The use case the pattern is applied to, e.g. "Payment Gateway".
    pub context: String,
}

impl DesignPatternParams {
    /// Identifier derived from the context with all whitespace removed.
    pub fn identifier(&self) -> String {
        self.context.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl FromArguments for DesignPatternParams {
    fn from_arguments(args: &ResolvedArguments) -> Self {
        Self {
            pattern_name: args.string("patternName"),
            context: args.string("context"),
        }
    }
}

/// Pattern selecting the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Singleton,
    Strategy,
    Observer,
    Other,
}

impl From<&str> for Pattern {
    fn from(name: &str) -> Self {
        match name {
            "singleton" => Self::Singleton,
            "strategy" => Self::Strategy,
            "observer" => Self::Observer,
            _ => Self::Other,
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

const SINGLETON_TEMPLATE: &str = r#"object {{id}}Manager {
    init {
        println("{{id}}Manager initialized")
    }

    fun doSomething() {
        // Implementation
    }
}"#;

const STRATEGY_TEMPLATE: &str = r#"interface {{id}}Strategy {
    fun execute(data: String): String
}

class Concrete{{id}}StrategyA : {{id}}Strategy {
    override fun execute(data: String) = "Strategy A: $data"
}

class Concrete{{id}}StrategyB : {{id}}Strategy {
    override fun execute(data: String) = "Strategy B: $data"
}

class {{id}}Context(private var strategy: {{id}}Strategy) {
    fun setStrategy(strategy: {{id}}Strategy) {
        this.strategy = strategy
    }

    fun executeStrategy(data: String): String {
        return strategy.execute(data)
    }
}"#;

const OBSERVER_TEMPLATE: &str = r#"interface {{id}}Observer {
    fun update(event: String)
}

class {{id}}Subject {
    private val observers = mutableListOf<{{id}}Observer>()

    fun addObserver(observer: {{id}}Observer) {
        observers.add(observer)
    }

    fun removeObserver(observer: {{id}}Observer) {
        observers.remove(observer)
    }

    fun notifyObservers(event: String) {
        observers.forEach { it.update(event) }
    }
}"#;

// ============================================================================
// Tool Definition
// ============================================================================

/// Design pattern tool.
pub struct DesignPatternTool;

impl DesignPatternTool {
    fn render(template: &str, identifier: &str) -> String {
        template.replace("{{id}}", identifier)
    }
}

impl ToolGenerator for DesignPatternTool {
    const NAME: &'static str = "generate_design_pattern";
    const DESCRIPTION: &'static str =
        "Generate a Kotlin implementation of a specific design pattern with best practices.";

    type Params = DesignPatternParams;

    fn parameters() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::required(
                "patternName",
                "The classic GoF design pattern to generate (singleton, factory_method, strategy, observer, etc.).",
            ),
            ParameterSpec::required(
                "context",
                "The context or use case for this pattern (e.g., 'PaymentProcessor', 'Logger').",
            ),
        ]
    }

    fn generate(params: &DesignPatternParams) -> String {
        let identifier = params.identifier();

        let (explanation, code) = match Pattern::from(params.pattern_name.as_str()) {
            Pattern::Singleton => (
                "In Kotlin, `object` is the idiomatic way to implement the Singleton pattern. It is thread-safe and lazy-loaded by default.",
                Self::render(SINGLETON_TEMPLATE, &identifier),
            ),
            Pattern::Strategy => (
                "The Strategy pattern defines a family of algorithms, encapsulates each one, and makes them interchangeable.",
                Self::render(STRATEGY_TEMPLATE, &identifier),
            ),
            Pattern::Observer => (
                "The Observer pattern defines a one-to-many dependency between objects so that when one object changes state, all its dependents are notified and updated automatically.",
                Self::render(OBSERVER_TEMPLATE, &identifier),
            ),
            Pattern::Other => (
                "This pattern is recognized but template is being expanded.",
                format!(
                    "// Implementation for {} Pattern in {} context coming soon.",
                    params.pattern_name, params.context
                ),
            ),
        };

        format!(
            "### {} Pattern for {}\n\n{}\n\n```kotlin\n{}\n```",
            params.pattern_name, params.context, explanation, code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pattern: &str, context: &str) -> DesignPatternParams {
        DesignPatternParams {
            pattern_name: pattern.to_string(),
            context: context.to_string(),
        }
    }

    #[test]
    fn test_identifier_strips_all_whitespace() {
        assert_eq!(params("", "Payment Gateway").identifier(), "PaymentGateway");
        assert_eq!(params("", " Order\tBook \n").identifier(), "OrderBook");
    }

    #[test]
    fn test_singleton() {
        let p = params("singleton", "Payment Gateway");
        let text = DesignPatternTool::generate(&p);
        assert!(text.contains("object PaymentGatewayManager {"));
        assert!(text.contains("println(\"PaymentGatewayManager initialized\")"));
        assert!(text.starts_with("### singleton Pattern for Payment Gateway"));

        // Same input, same bytes.
        assert_eq!(text, DesignPatternTool::generate(&p));
    }

    #[test]
    fn test_strategy_substitutes_every_position() {
        let text = DesignPatternTool::generate(&params("strategy", "Pricing"));
        assert!(text.contains("interface PricingStrategy"));
        assert!(text.contains("class ConcretePricingStrategyA : PricingStrategy"));
        assert!(text.contains("class ConcretePricingStrategyB : PricingStrategy"));
        assert!(text.contains("class PricingContext(private var strategy: PricingStrategy)"));
        assert!(!text.contains("{{id}}"));
    }

    #[test]
    fn test_observer() {
        let text = DesignPatternTool::generate(&params("observer", "Stock Price"));
        assert!(text.contains("interface StockPriceObserver"));
        assert!(text.contains("mutableListOf<StockPriceObserver>()"));
        assert!(text.contains("class StockPriceSubject"));
    }

    #[test]
    fn test_unknown_pattern_produces_placeholder() {
        let text = DesignPatternTool::generate(&params("builder", "Http Request"));
        assert!(text.contains("// Implementation for builder Pattern in Http Request context coming soon."));
        assert!(text.contains("template is being expanded"));
    }
}
