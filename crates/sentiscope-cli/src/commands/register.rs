use anyhow::Result;
use sentiscope_core::auth::RegisterForm;

use crate::app::App;
use crate::commands::render_error;

pub async fn run(app: &App, username: &str, password: &str, confirm_password: &str) -> Result<i32> {
    let form = RegisterForm {
        username: username.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    };

    match app.account.register(&form).await {
        Ok(()) => {
            println!("Registration successful! Please login.");
            Ok(0)
        }
        Err(err) => Ok(render_error(err)),
    }
}
