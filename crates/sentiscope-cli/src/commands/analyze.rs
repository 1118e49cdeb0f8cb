use anyhow::Result;
use sentiscope_application::AnalyzeOutcome;
use sentiscope_core::analysis::AnalysisResult;

use crate::app::App;

pub async fn run(app: &App, url: &str) -> Result<i32> {
    let session = app.session_store.restore().await;
    if !session.authenticated {
        eprintln!("Not logged in. Run `sentiscope login` first.");
        return Ok(1);
    }

    match app.workflow.analyze(url).await {
        AnalyzeOutcome::Completed(result) => {
            render(&result);
            Ok(0)
        }
        AnalyzeOutcome::Failed(err) => {
            eprintln!("{err}");
            Ok(1)
        }
        // One request per invocation; the guard cannot trip here.
        AnalyzeOutcome::Ignored => Ok(1),
    }
}

fn render(result: &AnalysisResult) {
    println!("Platform:          {}", result.platform);
    println!("Comments analyzed: {}", result.total_comments);
    println!("Positive:          {:.1}%", result.positive_percent);
    println!("Negative:          {:.1}%", result.negative_percent);
    println!("Neutral:           {:.1}%", result.neutral_percent);
    println!("Purchase intent:   {:.1}%", result.purchase_intent_percent);
}
