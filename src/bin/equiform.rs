//! Command-line front end.
//!
//! Fills the same form the browser uses from arguments and prints the
//! request it would send. Cards may be comma or space separated, or
//! concatenated (`AsKsQsJs`).

use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use equiform::form::*;
use equiform::submit::*;

#[derive(Parser)]
#[command(author, version, about = "Validate poker hands and preview equity requests", long_about = None)]
struct Args {
    /// Equity service base URL
    #[arg(long, env = "EQUITY_API_URL", default_value = equiform::API_BASE)]
    api: String,
    /// fast, normal, accurate, very_accurate, extreme, adaptive
    #[arg(long, default_value = "normal")]
    precision: String,
    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand)]
enum Game {
    #[command(about = "Pot-Limit Omaha hand against a hand or a range", alias = "omaha")]
    Plo {
        /// plo4 or plo5
        #[arg(long, default_value = "plo4")]
        game: String,
        #[arg(long, required = true)]
        hand: String,
        #[arg(long)]
        board: Option<String>,
        #[arg(long, conflicts_with = "range")]
        opponent: Option<String>,
        #[arg(long)]
        range: Option<String>,
    },
    #[command(about = "Seven-card stud hand against one or several opponents")]
    Stud {
        /// razz, stud_high, stud_highlow8
        #[arg(long, default_value = "stud_high")]
        game: String,
        #[arg(long, default_value = "")]
        down: String,
        #[arg(long, default_value = "")]
        up: String,
        #[arg(long, default_value = "")]
        opp_down: String,
        #[arg(long, default_value = "")]
        opp_up: String,
        /// One opponent per flag, as DOWN/UP (e.g. `2c3c/4c`)
        #[arg(long = "block", conflicts_with_all = ["opp_down", "opp_up"])]
        blocks: Vec<String>,
    },
}

/// Split card input into raw tokens without interpreting them.
fn tokens(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .flat_map(|s| match s.len() {
            0..=3 => vec![s.to_string()],
            _ => s
                .chars()
                .collect::<Vec<char>>()
                .chunks(2)
                .map(|pair| pair.iter().collect::<String>())
                .collect(),
        })
        .collect()
}

fn fill<I>(form: &mut Form, roles: I, input: &str) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Role>,
{
    let mut roles = roles.into_iter();
    for token in tokens(input) {
        let role = roles
            .next()
            .ok_or_else(|| anyhow::anyhow!("too many cards in {:?}", input))?;
        form.set_card(role, &token)?;
    }
    Ok(())
}

fn populate(form: &mut Form, game: &Game) -> anyhow::Result<()> {
    match game {
        Game::Plo {
            game,
            hand,
            board,
            opponent,
            range,
        } => {
            let variant = Variant::try_from(game.as_str())?;
            let n = variant
                .hole_cards()
                .ok_or_else(|| anyhow::anyhow!("{} is not an omaha game", variant))?;
            form.select(Some(variant));
            if let Some(range) = range {
                form.set_mode(OpponentMode::Range);
                form.set_range(range);
            }
            fill(form, Role::hand(n), hand)?;
            fill(form, Role::board(), board.as_deref().unwrap_or_default())?;
            fill(form, Role::opponent(n), opponent.as_deref().unwrap_or_default())?;
        }
        Game::Stud {
            game,
            down,
            up,
            opp_down,
            opp_up,
            blocks,
        } => {
            let variant = Variant::try_from(game.as_str())?;
            if !variant.is_stud() {
                anyhow::bail!("{} is not a stud game", variant);
            }
            form.select(Some(variant));
            fill(form, Role::stud(Seat::Hero).filter(|r| matches!(r, Role::Down(..))), down)?;
            fill(form, Role::stud(Seat::Hero).filter(|r| matches!(r, Role::Up(..))), up)?;
            match blocks.is_empty() {
                true => {
                    fill(form, Role::stud(Seat::Villain).filter(|r| matches!(r, Role::Down(..))), opp_down)?;
                    fill(form, Role::stud(Seat::Villain).filter(|r| matches!(r, Role::Up(..))), opp_up)?;
                }
                false => {
                    form.set_mode(OpponentMode::Range);
                    for (i, block) in blocks.iter().enumerate() {
                        let id = match i {
                            0 => form.opponents().ids().first().copied().unwrap_or_default(),
                            _ => form.add_opponent()?,
                        };
                        let seat = Seat::Block(id);
                        let (down, up) = block.split_once('/').unwrap_or((block.as_str(), ""));
                        fill(form, Role::stud(seat).filter(|r| matches!(r, Role::Down(..))), down)?;
                        fill(form, Role::stud(seat).filter(|r| matches!(r, Role::Up(..))), up)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    equiform::log()?;
    let args = Args::parse();
    let service = Service::new(&args.api);
    let mut form = Form::new();
    form.set_precision(Precision::try_from(args.precision.as_str())?);
    populate(&mut form, &args.game)?;
    for role in form.malformed() {
        eprintln!("{} {}", "unreadable card in".yellow(), role);
    }
    for role in form.flagged().iter() {
        eprintln!("{} {}", "duplicate card in".yellow(), role);
    }
    match form.begin() {
        Ok(request) => {
            println!("{} {}", "POST".green(), service.url(request.path()));
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1)
        }
    }
}
