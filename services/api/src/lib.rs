mod cli;
mod infra;
mod lookup;
mod routes;
mod server;

use event_lodging::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
