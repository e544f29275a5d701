use crate::commands::{
    run_departments, run_overview, run_profile, run_tasks, DepartmentsArgs, OverviewArgs,
    ProfileArgs, TasksArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use office_dash::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Office Dashboard",
    about = "Serve and print office management reports for tasks, departments, staff and KPIs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the company overview: task counts, KPIs, recent tasks and top performers
    Overview(OverviewArgs),
    /// Print the task board with optional status and priority filters
    Tasks(TasksArgs),
    /// Print department resources, staff or bottleneck analysis
    Departments(DepartmentsArgs),
    /// Print the signed-in user's profile, achievements and settings
    Profile(ProfileArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Overview(args) => run_overview(args),
        Command::Tasks(args) => run_tasks(args),
        Command::Departments(args) => run_departments(args),
        Command::Profile(args) => run_profile(args),
    }
}
