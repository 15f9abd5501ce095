//! Cloud solution tool definition.
//!
//! Maps free-text requirements onto Google Cloud services.

use super::ToolGenerator;
use crate::domains::tools::arguments::{FromArguments, ResolvedArguments, split_list};
use crate::domains::tools::registry::ParameterSpec;

/// Parameters for the cloud solution tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSolutionParams {
    /// What the application does.
    pub usage_scenario: String,

    /// Requirements, trimmed and lowercased.
    pub requirements: Vec<String>,
}

impl FromArguments for CloudSolutionParams {
    fn from_arguments(args: &ResolvedArguments) -> Self {
        Self {
            usage_scenario: args.string("usageScenario"),
            requirements: split_list(&args.get("requirements").to_lowercase()),
        }
    }
}

/// Capabilities detected in the requirements. Flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementFlags {
    pub serverless: bool,
    pub kubernetes: bool,
    pub sql: bool,
}

impl RequirementFlags {
    pub fn detect(requirements: &[String]) -> Self {
        requirements
            .iter()
            .fold(Self::default(), |flags, r| Self {
                serverless: flags.serverless || r.contains("serverless"),
                kubernetes: flags.kubernetes || r.contains("kubernetes") || r.contains("gke"),
                sql: flags.sql || r.contains("sql"),
            })
    }

    /// Compute platform, serverless taking priority over kubernetes.
    pub fn compute(&self) -> Compute {
        if self.serverless {
            Compute::CloudRun
        } else if self.kubernetes {
            Compute::Gke
        } else {
            Compute::Default
        }
    }

    /// Database recommendation; any SQL requirement selects Cloud SQL.
    pub fn database(&self) -> Database {
        if self.sql {
            Database::CloudSql
        } else {
            Database::Firestore
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compute {
    CloudRun,
    Gke,
    Default,
}

impl Compute {
    fn line(&self) -> &'static str {
        match self {
            Self::CloudRun => {
                "- **Compute**: Cloud Run (fully managed container platform). Perfect for Kotlin (using Spring Boot or Ktor with GraalVM/JVM)."
            }
            Self::Gke => {
                "- **Compute**: GKE (Google Kubernetes Engine). Standard for microservices orchestration."
            }
            Self::Default => {
                "- **Compute**: Cloud Run is recommended as a default for modern stateless apps."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    CloudSql,
    Firestore,
}

impl Database {
    fn line(&self) -> &'static str {
        match self {
            Self::CloudSql => {
                "- **Database**: Cloud SQL (PostgreSQL recommended for Kotlin/JPA/Exposed)."
            }
            Self::Firestore => {
                "- **Database**: Firestore (NoSQL) for rapid development and mobile backends."
            }
        }
    }
}

const CI_CD_LINE: &str =
    "- **CI/CD**: Cloud Build. Define `cloudbuild.yaml` to build and deploy your container.";
const MONITORING_LINE: &str = "- **Monitoring**: Cloud Operations Suite (formerly Stackdriver).";

/// Cloud solution tool.
pub struct CloudSolutionTool;

impl ToolGenerator for CloudSolutionTool {
    const NAME: &'static str = "suggest_cloud_solution";
    const DESCRIPTION: &'static str =
        "Suggest Google Cloud Platform (GCP) services and DevOps strategies for a Kotlin application.";

    type Params = CloudSolutionParams;

    fn parameters() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::required(
                "usageScenario",
                "What the application does (e.g. 'Event driven microservices', 'Simple CRUD API').",
            ),
            ParameterSpec::required(
                "requirements",
                "Comma-separated list of requirements (e.g. 'Serverless, SQL, Global Scale').",
            ),
        ]
    }

    fn generate(params: &CloudSolutionParams) -> String {
        let flags = RequirementFlags::detect(&params.requirements);

        let lines = [
            flags.compute().line(),
            flags.database().line(),
            CI_CD_LINE,
            MONITORING_LINE,
        ];

        format!(
            "### GCP Cloud Solution for \"{}\"\n\n{}",
            params.usage_scenario,
            lines.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(requirements: &str) -> CloudSolutionParams {
        CloudSolutionParams {
            usage_scenario: "Simple CRUD API".to_string(),
            requirements: split_list(&requirements.to_lowercase()),
        }
    }

    #[test]
    fn test_serverless_beats_kubernetes() {
        let flags = RequirementFlags::detect(&params("Kubernetes, Serverless").requirements);
        assert!(flags.serverless && flags.kubernetes);
        assert_eq!(flags.compute(), Compute::CloudRun);
    }

    #[test]
    fn test_serverless_sql() {
        let text = CloudSolutionTool::generate(&params("Serverless, SQL"));
        assert!(text.contains(Compute::CloudRun.line()));
        assert!(text.contains(Database::CloudSql.line()));
        assert!(text.starts_with("### GCP Cloud Solution for \"Simple CRUD API\""));
    }

    #[test]
    fn test_gke_and_nosql() {
        let text = CloudSolutionTool::generate(&params("GKE Autopilot, Global Scale"));
        assert!(text.contains(Compute::Gke.line()));
        assert!(text.contains(Database::Firestore.line()));
    }

    #[test]
    fn test_defaults_and_fixed_lines() {
        let text = CloudSolutionTool::generate(&params("Global Scale"));
        assert!(text.contains(Compute::Default.line()));
        assert!(text.contains(CI_CD_LINE));
        assert!(text.ends_with(MONITORING_LINE));
    }

    #[test]
    fn test_nosql_still_matches_sql() {
        // Containment, not word matching.
        let flags = RequirementFlags::detect(&params("NoSQL").requirements);
        assert_eq!(flags.database(), Database::CloudSql);
    }
}
