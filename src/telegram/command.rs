use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Show the welcome message")]
    Start,
    #[command(description = "Show this help message")]
    Help,
    #[command(description = "Create a digest of the saved messages")]
    Summarize,
    #[command(description = "Delete the saved messages")]
    Clear,
    #[command(description = "Show how many messages are saved")]
    Count,
}
