use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::info;

use tutor::agent::{Agent, Conversation, TutorAgent};
use tutor::config::{Config, API_KEY_ENV};
use tutor::models::{AgentResponse, Sender};
use tutor::tools::{calculator, format_value, physics_constants, CalculatorTool, PhysicsConstantsTool, ToolInfo};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(about = "AI tutor that routes questions to math and physics specialists")]
struct Args {
    #[arg(help = "Question for the tutor")]
    prompt: Option<String>,

    #[arg(short, long, help = "Run in interactive mode")]
    interactive: bool,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,

    #[arg(long, help = "Print responses as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic expression without contacting the model
    Calc {
        /// Expression such as "(2+3)*4"
        expression: String,
    },
    /// List physics constants, optionally filtered by a search term
    Constants {
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from the data directory .env file
    if let Ok(data_dir) = tutor::utils::paths::get_data_dir() {
        let env_path = data_dir.join(".env");
        if env_path.exists() {
            dotenv::from_path(env_path).ok();
        }
    }
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Some(Commands::Calc { ref expression }) => return run_calc(expression),
        Some(Commands::Constants { ref query }) => {
            run_constants(query.as_deref());
            return Ok(());
        }
        None => {}
    }

    info!("Starting tutor...");

    let config = Config::load()?;
    let tutor = TutorAgent::from_config(&config)
        .with_context(|| format!("set {} or add api_key to [gateway] in config.toml", API_KEY_ENV))?;

    match single_query(&args) {
        Some(prompt) => {
            let response = tutor.process_query(prompt).await;
            print_response(&response, args.json)?;
        }
        None => run_interactive_mode(&tutor, opening_prompt(&args), args.json).await?,
    }

    Ok(())
}

/// The prompt to answer once and exit with, unless `--interactive` was given.
fn single_query(args: &Args) -> Option<&str> {
    if args.interactive {
        None
    } else {
        args.prompt.as_deref()
    }
}

/// The prompt that opens an interactive session, if one was given.
fn opening_prompt(args: &Args) -> Option<&str> {
    args.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty())
}

fn run_calc(expression: &str) -> Result<()> {
    match calculator::evaluate(expression) {
        Ok(calc) => println!("{} = {}", calc.expression, format_value(calc.result)),
        Err(e) => println!("❌ {} = [calculation error] ({})", expression, e),
    }
    Ok(())
}

fn run_constants(query: Option<&str>) {
    let constants = match query {
        Some(q) => physics_constants::lookup(q),
        None => physics_constants::all_constants().iter().collect(),
    };

    if constants.is_empty() {
        println!("No constants match.");
    }
    for constant in constants {
        println!("{}", constant);
    }
}

fn print_response(response: &AgentResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("\n🎓 {}", response);
    }
    Ok(())
}

async fn ask(tutor: &TutorAgent, conversation: &mut Conversation, query: &str, json: bool) -> Result<()> {
    conversation.push_user(query);
    println!("\n🤔 Thinking...");

    let response = tutor.process_query(query).await;
    print_response(&response, json)?;
    conversation.push_agent(&response);
    Ok(())
}

async fn run_interactive_mode(tutor: &TutorAgent, first_prompt: Option<&str>, json: bool) -> Result<()> {
    let mut conversation = Conversation::new();

    println!("\n🎓 AI Tutoring System");
    println!("════════════════════════");
    println!("{}", conversation.messages()[0].content);
    println!("📝 Type 'help' for commands, 'exit' to quit.");

    if let Some(prompt) = first_prompt {
        println!("\n💬 You: {}", prompt);
        ask(tutor, &mut conversation, prompt, json).await?;
    }

    loop {
        print!("\n💬 You: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let query = input.trim();

        match query.to_lowercase().as_str() {
            "exit" | "quit" | "q" => {
                println!("\n👋 Goodbye!");
                break;
            }
            "help" | "h" => {
                show_help(tutor);
                continue;
            }
            "history" => {
                show_history(&conversation);
                continue;
            }
            "clear" | "cls" => {
                print!("\x1B[2J\x1B[1;1H");
                io::stdout().flush()?;
                continue;
            }
            "" => {
                println!("💭 Please enter a question. Type 'help' for assistance.");
                continue;
            }
            _ => {}
        }

        ask(tutor, &mut conversation, query, json).await?;
    }

    Ok(())
}

fn show_help(tutor: &TutorAgent) {
    println!("\n📚 Commands:");
    println!("   • exit, quit, q    - Exit the program");
    println!("   • help, h          - Show this help message");
    println!("   • history          - Show the conversation so far");
    println!("   • clear, cls       - Clear the screen");
    println!();
    println!("🔹 Specialists:");
    for agent in tutor.specialists() {
        println!("   • {:<20} {}", agent.name(), agent.specialization());
    }
    println!();
    println!("🔹 Tools:");
    for tool in [ToolInfo::from(&CalculatorTool::new()), ToolInfo::from(&PhysicsConstantsTool::new())] {
        println!("   • {:<20} {}", tool.name, tool.description);
    }
}

fn show_history(conversation: &Conversation) {
    for message in conversation.messages() {
        let who = match message.sender {
            Sender::User => "You",
            Sender::Tutor => "Tutor",
            Sender::Math => "Math",
            Sender::Physics => "Physics",
        };
        println!(
            "[{}] {}: {}",
            message.timestamp.format("%H:%M:%S"),
            who,
            message.content
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_alone_is_answered_once() {
        let args = Args::try_parse_from(["tutor", "What is 2+2?"]).unwrap();
        assert_eq!(single_query(&args), Some("What is 2+2?"));
    }

    #[test]
    fn prompt_with_interactive_opens_the_session() {
        let args = Args::try_parse_from(["tutor", "What is 2+2?", "-i"]).unwrap();
        assert_eq!(single_query(&args), None);
        assert_eq!(opening_prompt(&args), Some("What is 2+2?"));
    }

    #[test]
    fn no_prompt_starts_an_empty_session() {
        let args = Args::try_parse_from(["tutor"]).unwrap();
        assert_eq!(single_query(&args), None);
        assert_eq!(opening_prompt(&args), None);

        let args = Args::try_parse_from(["tutor", "  ", "--interactive"]).unwrap();
        assert_eq!(opening_prompt(&args), None);
    }
}
