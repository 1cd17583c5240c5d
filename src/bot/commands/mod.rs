use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "EnroLLAI commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Get information about enrollment")]
    Enroll,
    #[command(description = "Get answers to frequently asked questions, optionally for one category")]
    Faq(String),
}

impl Command {
    /// Parses `text` ignoring the case of the command name (and bot mention),
    /// so `/FAQ` and `/Help@EnroLLAI_bot` are understood. Arguments keep their case.
    pub fn parse_ignoring_case(text: &str, bot_name: &str) -> Option<Self> {
        if !text.starts_with('/') {
            return None;
        }
        let (name, args) = match text.split_once(char::is_whitespace) {
            Some((name, args)) => (name, Some(args)),
            None => (text, None),
        };
        let normalized = match args {
            Some(args) => format!("{} {}", name.to_lowercase(), args),
            None => name.to_lowercase(),
        };
        Self::parse(&normalized, &bot_name.to_lowercase()).ok()
    }
}
