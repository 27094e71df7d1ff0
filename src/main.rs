use todo_suite::commands::Cli;
use todo_suite::libs::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    // Must run before the first debug-mode check so `.env` settings count.
    dotenv::dotenv().ok();
    init_tracing()?;

    Cli::menu()
}
