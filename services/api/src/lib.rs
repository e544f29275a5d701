mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use office_dash::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
