//! End-to-end checks of the dispatch engine through the public API.

use std::sync::Arc;

use kotlin_senior_mcp::domains::tools::{
    Dispatcher, Invocation, ParameterSpec, ResolvedArguments, ToolDefinition, ToolError,
    ToolRegistry,
};

fn dispatcher() -> Dispatcher {
    Dispatcher::with_default_tools().expect("default catalog is valid")
}

#[test]
fn unknown_tool_is_rejected() {
    let err = dispatcher().dispatch(&Invocation::new("nonexistent_tool")).unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(name) if name == "nonexistent_tool"));
}

#[test]
fn missing_structure_description_is_named() {
    let err = dispatcher()
        .call("analyze_architecture", &[("projectType", "x"), ("goal", "y")])
        .unwrap_err();
    match err {
        ToolError::MissingArgument { tool, parameter } => {
            assert_eq!(tool, "analyze_architecture");
            assert_eq!(parameter, "currentStructureDescription");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn architecture_fallback_does_not_fail() {
    let text = dispatcher()
        .call(
            "analyze_architecture",
            &[
                ("projectType", "library"),
                ("currentStructureDescription", "flat"),
                ("goal", "foo"),
            ],
        )
        .unwrap();
    assert!(text.contains("Choose a goal like clean_architecture"));
}

#[test]
fn singleton_output_is_deterministic() {
    let args = [("patternName", "singleton"), ("context", "Payment Gateway")];
    let first = dispatcher().call("generate_design_pattern", &args).unwrap();
    let second = dispatcher().call("generate_design_pattern", &args).unwrap();
    assert!(first.contains("PaymentGatewayManager"));
    assert_eq!(first, second);
}

#[test]
fn best_practices_reports_only_found_markers() {
    let text = dispatcher()
        .call("check_best_practices", &[("codeSnippet", "val a = b!!\nprintln(a)")])
        .unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("- ")).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("`!!`"));
    assert!(lines[1].contains("`println`"));
}

#[test]
fn unit_test_template_follows_dependency_order() {
    let text = dispatcher()
        .call(
            "generate_test_template",
            &[
                ("className", "SignupService"),
                ("testType", "unit"),
                ("dependencies", "UserRepository, EmailService"),
            ],
        )
        .unwrap();
    assert!(text.contains("SignupService(userRepository, emailService)"));
}

#[test]
fn integration_template_ignores_dependencies() {
    let call = |deps: &str| {
        dispatcher()
            .call(
                "generate_test_template",
                &[
                    ("className", "SignupService"),
                    ("testType", "integration"),
                    ("dependencies", deps),
                ],
            )
            .unwrap()
    };
    assert_eq!(call("UserRepository, EmailService"), call(""));
}

#[test]
fn cloud_prefers_serverless_and_sql() {
    let text = dispatcher()
        .call(
            "suggest_cloud_solution",
            &[("usageScenario", "CRUD API"), ("requirements", "Serverless, SQL")],
        )
        .unwrap();
    assert!(text.contains("Cloud Run (fully managed container platform)"));
    assert!(text.contains("Cloud SQL"));
    assert!(!text.contains("GKE"));
}

#[test]
fn custom_registry_can_be_dispatched() {
    fn shout(args: &ResolvedArguments) -> String {
        args.get("word").to_uppercase()
    }

    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolDefinition::new("shout", "Uppercase a word", vec![ParameterSpec::required("word", "Word")]),
            shout,
        )
        .unwrap();
    assert!(matches!(
        registry.register(ToolDefinition::new("shout", "again", vec![]), shout),
        Err(ToolError::DuplicateTool(_))
    ));

    let dispatcher = Dispatcher::new(Arc::new(registry));
    assert_eq!(dispatcher.call("shout", &[("word", "kotlin")]).unwrap(), "KOTLIN");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_dispatch_shares_one_registry() {
    let dispatcher = dispatcher();

    let tasks = (0..32).map(|i| {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let context = format!("Context {i}");
            dispatcher
                .call(
                    "generate_design_pattern",
                    &[("patternName", "observer"), ("context", context.as_str())],
                )
                .map(|text| (i, text))
        })
    });

    for joined in futures::future::join_all(tasks).await {
        let (i, text) = joined.unwrap().unwrap();
        assert!(text.contains(&format!("interface Context{i}Observer")));
    }
}
