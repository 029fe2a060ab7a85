use crate::infra::load_store;
use clap::Args;
use event_lodging::config::AppConfig;
use event_lodging::error::AppError;
use event_lodging::hotels::{
    AccessErrorKind, Lodging, LodgingAccessError, LodgingId, LodgingService, UserId,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Authenticated user id to evaluate
    #[arg(long)]
    pub(crate) user: i64,
    /// JSON seed file (defaults to LODGING_SEED_PATH)
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Authenticated user id to evaluate
    #[arg(long)]
    pub(crate) user: i64,
    /// Hotel id to look up
    #[arg(long)]
    pub(crate) hotel: i64,
    /// JSON seed file (defaults to LODGING_SEED_PATH)
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs { user, seed } = args;
    let service = build_service(seed)?;

    match service.all_lodgings(UserId(user)).await {
        Ok(lodgings) => {
            println!("Hotels available to user {user}");
            print!("{}", render_lodgings(&lodgings));
        }
        Err(err) => println!("{}", render_access_error(&err)),
    }

    Ok(())
}

pub(crate) async fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let ShowArgs { user, hotel, seed } = args;
    let service = build_service(seed)?;

    match service.lodging_by_id(UserId(user), LodgingId(hotel)).await {
        Ok(lodging) => print!("{}", render_lodgings(std::slice::from_ref(&lodging))),
        Err(err) => println!("{}", render_access_error(&err)),
    }

    Ok(())
}

fn build_service(seed: Option<PathBuf>) -> Result<LodgingService, AppError> {
    let seed_path = match seed {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.seed_path,
    };
    let store = load_store(seed_path.as_deref())?;
    Ok(LodgingService::from_store(store))
}

pub(crate) fn render_lodgings(lodgings: &[Lodging]) -> String {
    lodgings
        .iter()
        .map(|lodging| {
            format!(
                "- #{} {} | {} | updated {}\n",
                lodging.id,
                lodging.name,
                lodging.image,
                lodging.updated_at.format("%Y-%m-%d %H:%M UTC")
            )
        })
        .collect()
}

pub(crate) fn render_access_error(err: &LodgingAccessError) -> String {
    match err.kind() {
        AccessErrorKind::NotFound => "Access denied: not found".to_string(),
        AccessErrorKind::PaymentRequired => "Access denied: payment required".to_string(),
        AccessErrorKind::Infrastructure => format!("Lookup failed: {err}"),
    }
}
