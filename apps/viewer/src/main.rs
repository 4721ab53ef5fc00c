use anyhow::Result;
use tracing::info;

use resume_viewer::config::Config;
use resume_viewer::query::ViewState;
use resume_viewer::state::ViewerState;
use resume_viewer::telemetry;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config)?;

    info!("Starting resume viewer v{}", env!("CARGO_PKG_VERSION"));

    let state = ViewerState::bootstrap(config)?;
    let doc = &state.document;
    info!(
        name = %doc.personal_info.name,
        title = %doc.personal_info.title,
        experience = doc.experience.len(),
        technologies = state.technologies().len(),
        skills = state.skills().len(),
        "Resume ready"
    );

    match state.query(&ViewState::default()) {
        Some(result) => info!(
            visible_experience = result.experience.len(),
            skill_categories = result.skills.len(),
            "Session active"
        ),
        None => info!("No active session; login required"),
    }

    Ok(())
}
