use anyhow::Result;

use crate::app::App;

pub async fn run(app: &App) -> Result<i32> {
    // Restore first so a token persisted by an earlier process is passed to
    // the best-effort remote logout.
    app.session_store.restore().await;
    app.account.logout().await?;
    println!("Logged out.");
    Ok(0)
}
