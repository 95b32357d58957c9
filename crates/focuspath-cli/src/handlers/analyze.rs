use crate::cli::AnalyzeArgs;
use crate::output::{output_error, output_success};
use focuspath_ai::{analyze, create_classifier, ClassifyError};
use focuspath_core::ClassifierSettings;
use focuspath_domain::{visible_tasks, FilterCriteria, Plan};
use std::io::Read;
use std::path::Path;
use tokio_util::sync::CancellationToken;

pub async fn handle(settings: &ClassifierSettings, args: AnalyzeArgs) -> anyhow::Result<()> {
    let input = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(e) => output_error(&e.to_string()),
    };
    if input.trim().is_empty() {
        output_error(&ClassifyError::EmptyInput.to_string());
    }

    let classifier = match create_classifier(settings) {
        Ok(classifier) => classifier,
        Err(e) => output_error(&e.to_string()),
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    tracing::info!("Analyzing {} bytes with {}", input.len(), settings.model);
    let plan = match analyze(classifier.as_ref(), &input, &cancel).await {
        Ok(plan) => plan,
        Err(e) => output_error(&e.to_string()),
    };

    output_success(select_tasks(plan, &args));
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Narrow the plan's tasks to those matching the command-line filters.
fn select_tasks(mut plan: Plan, args: &AnalyzeArgs) -> Plan {
    let mut criteria = FilterCriteria::default();
    if let Some(value) = args.min_urgency {
        criteria.set_min_urgency(value);
    }
    if let Some(value) = args.min_importance {
        criteria.set_min_importance(value);
    }
    if let Some(search) = &args.search {
        criteria.search = search.clone();
    }

    let tasks = visible_tasks(&plan.tasks, &criteria)
        .into_iter()
        .filter(|task| args.quadrant.map_or(true, |q| task.quadrant == q))
        .cloned()
        .collect();
    plan.tasks = tasks;
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use focuspath_domain::{Quadrant, Task};

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            file: None,
            min_urgency: None,
            min_importance: None,
            search: None,
            quadrant: None,
        }
    }

    fn plan() -> Plan {
        Plan::new(
            vec![
                Task::new("Finish report", Quadrant::DoFirst, 9, 8),
                Task::new("Call dentist", Quadrant::Schedule, 3, 7),
                Task::new("Buy milk", Quadrant::Eliminate, 2, 1),
            ],
            "summary",
            "Finish report",
        )
    }

    fn titles(plan: &Plan) -> Vec<&str> {
        plan.tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(titles(&select_tasks(plan(), &args())).len(), 3);
    }

    #[test]
    fn test_thresholds_and_quadrant() {
        let mut filtered = args();
        filtered.min_importance = Some(5);
        assert_eq!(
            titles(&select_tasks(plan(), &filtered)),
            ["Finish report", "Call dentist"]
        );

        filtered.quadrant = Some(Quadrant::Schedule);
        assert_eq!(titles(&select_tasks(plan(), &filtered)), ["Call dentist"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut filtered = args();
        filtered.search = Some("MILK".to_string());
        assert_eq!(titles(&select_tasks(plan(), &filtered)), ["Buy milk"]);
    }
}
