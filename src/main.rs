use anyhow::bail;
use clap::Parser;
use tracing::info;

use eduprofile::application::dto::profile::ProfilePanelDTO;
use eduprofile::application::dto::route::Navigation;
use eduprofile::application::interactors::profile_page::SubmitOutcome;
use eduprofile::infra::{
    cli::{Cli, Command, EditArgs},
    config::AppConfig,
    init_app_state,
    setup::init_tracing,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_file(&cli.config)?;
    let _guards = init_tracing(&config)?;
    let state = init_app_state(&config)?;
    info!("Profile service at {}", config.remote.base_url);
    match cli.command {
        Command::Show => show(&state).await,
        Command::Edit(args) => edit(&state, args).await,
        Command::Route { path } => route(&state, &path),
    }
}

async fn show(state: &AppState) -> anyhow::Result<()> {
    let page = state.mount_profile_page().await;
    print_panel(&page.panel());
    Ok(())
}

async fn edit(state: &AppState, args: EditArgs) -> anyhow::Result<()> {
    let mut page = state.mount_profile_page().await;
    if !page.open_editor() {
        bail!("Profile is not available for editing");
    }
    for (field, value) in args.changes() {
        page.edit_field(field, Some(value))?;
    }
    match page.submit().await {
        SubmitOutcome::Committed => {
            print_panel(&page.panel());
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            for field in errors.fields() {
                for message in errors.get(field) {
                    eprintln!("{}: {}", field, message);
                }
            }
            bail!("Profile form is invalid")
        }
        SubmitOutcome::Failed => bail!("Profile update failed"),
        SubmitOutcome::Unmerged => bail!("Profile was saved but could not be refreshed"),
        SubmitOutcome::Ignored | SubmitOutcome::Dropped => bail!("Profile update was not sent"),
    }
}

fn route(state: &AppState, path: &str) -> anyhow::Result<()> {
    match state.route_guard().navigate(path) {
        Navigation::Render(route) => println!("render {}", route),
        Navigation::Redirect { from, to } => println!("redirect {} -> {}", from, to),
    }
    Ok(())
}

fn print_panel(panel: &ProfilePanelDTO) {
    println!("身份: {}", panel.role_label);
    if !panel.trusted {
        println!("(资料未加载)");
    }
    for row in &panel.rows {
        println!("{}: {}", row.label, row.value);
    }
}
