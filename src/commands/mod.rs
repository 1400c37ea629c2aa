pub mod init;
pub mod product;

use crate::db::context::DatabaseContext;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::future::Future;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show all products")]
    List,
    #[command(about = "Create a product")]
    Add(product::AddArgs),
    #[command(about = "Edit a product")]
    Edit(product::EditArgs),
    #[command(about = "Delete a product")]
    Delete(product::DeleteArgs),
    #[command(about = "Show a single product by ID")]
    Show(product::ShowArgs),
    #[command(about = "Find products by name and price range")]
    Search(product::SearchArgs),
}

/// Without a subcommand the interactive product screen opens.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        match cli.command {
            // Runs without touching the database so a broken config can be rewritten.
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::List) => Self::with_context(product::list).await,
            Some(Commands::Add(args)) => Self::with_context(|context| product::add(context, args)).await,
            Some(Commands::Edit(args)) => Self::with_context(|context| product::edit(context, args)).await,
            Some(Commands::Delete(args)) => Self::with_context(|context| product::delete(context, args)).await,
            Some(Commands::Show(args)) => Self::with_context(|context| product::show(context, args)).await,
            Some(Commands::Search(args)) => Self::with_context(|context| product::search(context, args)).await,
            None => Self::with_context(product::interactive).await,
        }
    }

    /// Opens the configured database for one command and closes it afterwards.
    async fn with_context<F, Fut>(command: F) -> Result<()>
    where
        F: FnOnce(DatabaseContext) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let context = DatabaseContext::from_config()?;
        let result = command(context.clone()).await;
        context.close().await?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_parsed_as_its_own_command() {
        let cli = Cli::try_parse_from(["pricebook", "init", "--delete"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init(_))));
    }

    #[test]
    fn no_subcommand_opens_interactive_mode() {
        let cli = Cli::try_parse_from(["pricebook"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn delete_takes_id_and_confirmation_flag() {
        let cli = Cli::try_parse_from(["pricebook", "delete", "3", "--yes"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete(_))));
    }
}
