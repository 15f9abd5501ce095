//! Architecture advisor tool definition.
//!
//! Suggests a target architecture and package layout for a Kotlin project.

use super::ToolGenerator;
use crate::domains::tools::arguments::{FromArguments, ResolvedArguments};
use crate::domains::tools::registry::ParameterSpec;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the architecture advisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureParams {
    /// The type of the project (monolith, microservice, library).
    pub project_type: String,

    /// Brief description of the current folder/package structure.
    pub current_structure_description: String,

    /// The architectural goal.
    pub goal: String,
}

impl FromArguments for ArchitectureParams {
    fn from_arguments(args: &ResolvedArguments) -> Self {
        Self {
            project_type: args.string("projectType"),
            current_structure_description: args.string("currentStructureDescription"),
            goal: args.string("goal"),
        }
    }
}

/// Architectural goal selecting the advice branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchitectureGoal {
    CleanArchitecture,
    Hexagonal,
    Microservices,
    Other,
}

impl From<&str> for ArchitectureGoal {
    fn from(goal: &str) -> Self {
        match goal {
            "clean_architecture" => Self::CleanArchitecture,
            "hexagonal" => Self::Hexagonal,
            "microservices" => Self::Microservices,
            _ => Self::Other,
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

const CLEAN_ARCHITECTURE_LAYOUT: &str = "
src/
  domain/          (Enterprise Business Rules - Entities)
  usecase/         (Application Business Rules)
  adapter/         (Interface Adapters)
    controller/
    presenter/
    gateway/       (Repo implementations)
  infrastructure/  (Frameworks & Drivers)
    db/
    web/";

const HEXAGONAL_LAYOUT: &str = "
src/
  domain/
    model/
    port/
      in/  (Use Cases)
      out/ (Repository Interfaces)
  adapter/
    in/
      web/ (Controllers)
    out/
      persistence/ (Database Adapters)
  application/
    service/ (Implementation of Use Cases)";

const MICROSERVICES_LAYOUT: &str = "
k8s/ (Helm charts or Kustomize)
src/main/kotlin/com/example/serviceName/
  api/ (Controllers/gRPC)
  domain/ (Core Logic)
  data/ (Repositories/Entities)
  config/ (DI, Environment)
Dockerfile";

const HEXAGONAL_ADVICE: &str = "Hexagonal Architecture (Ports and Adapters) focuses on isolating the domain logic from the outside world.
Primary Ports (Driving): Use Cases / Input Ports.
Secondary Ports (Driven): Repository Interfaces / Output Ports.";

const MICROSERVICES_ADVICE: &str = "Microservices Architecture involves decomposing the domain into small, independent services.
Key Principles:
1. Independent Deployability.
2. Shared Nothing (Database per Service).
3. API First Design.

Kotlin fits well here with Spring Boot or Ktor/Quarkus. Focus on lightweight, fast startup containers.";

const FALLBACK_ADVICE: &str =
    "Choose a goal like clean_architecture, hexagonal, or microservices for detailed advice.";

const FALLBACK_LAYOUT: &str = "
Standard Kotlin structure recommended.";

const KOTLIN_TIPS: &str = "### Kotlin Specific Tips:
- Use `data class` for Domain Entities.
- Use `sealed class` for Domain Errors or Result types.
- Use Coroutines `suspend` functions in your Ports/UseCases for I/O operations.";

// ============================================================================
// Tool Definition
// ============================================================================

/// Architecture advisor tool.
pub struct ArchitectureTool;

impl ArchitectureTool {
    fn advice(goal: ArchitectureGoal, project_type: &str) -> (String, &'static str) {
        match goal {
            ArchitectureGoal::CleanArchitecture => (
                format!(
                    "For a {project_type} aiming for Clean Architecture in Kotlin, strict separation of concerns is key.\n\
                     Dependency Rule: Source code dependencies can only point inwards.\n\
                     Result: Independent of Frameworks, Testable, Independent of UI, Independent of Database."
                ),
                CLEAN_ARCHITECTURE_LAYOUT,
            ),
            ArchitectureGoal::Hexagonal => (HEXAGONAL_ADVICE.to_string(), HEXAGONAL_LAYOUT),
            ArchitectureGoal::Microservices => {
                (MICROSERVICES_ADVICE.to_string(), MICROSERVICES_LAYOUT)
            }
            ArchitectureGoal::Other => (FALLBACK_ADVICE.to_string(), FALLBACK_LAYOUT),
        }
    }
}

impl ToolGenerator for ArchitectureTool {
    const NAME: &'static str = "analyze_architecture";
    const DESCRIPTION: &'static str = "Analyze and suggest architectural improvements for a Kotlin project based on Clean Architecture, Hexagonal, or Monolith patterns.";

    type Params = ArchitectureParams;

    fn parameters() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::required(
                "projectType",
                "The type of the project (monolith, microservice, library).",
            ),
            ParameterSpec::required(
                "currentStructureDescription",
                "Brief description of the current folder/package structure.",
            ),
            ParameterSpec::required(
                "goal",
                "The architectural goal (clean_architecture, hexagonal, modular_monolith, microservices, refactor_legacy).",
            ),
        ]
    }

    fn generate(params: &ArchitectureParams) -> String {
        let goal = ArchitectureGoal::from(params.goal.as_str());
        let (advice, layout) = Self::advice(goal, &params.project_type);

        format!(
            "### Architectural Analysis for {}\n\n**Goal**: {}\n\n{}\n\n### Suggested Kotlin Package Structure:\n```text{}\n```\n\n{}",
            params.project_type, params.goal, advice, layout, KOTLIN_TIPS
        )
    }
}
