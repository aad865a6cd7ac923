//! Line-oriented front-end
//!
//! Reads one command per line, forwards it to the engine and renders the
//! session. Nothing here mutates session state directly.

use anyhow::{Context, Result};
use engine_core::draw::DrawSource;
use engine_core::typed::Game;
use games_statchallenge::{
    sprite_url, Generation, Phase, RoundEngine, Session, StatCategory, GENERATIONS,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generation(String),
    Start(String),
    Pick(String),
    Status,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; `None` for blank lines and unknown verbs
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "gen" | "generation" => Command::Generation(rest.to_string()),
            "start" => Command::Start(rest.to_string()),
            "pick" | "choose" => Command::Pick(rest.to_string()),
            "status" | "s" => Command::Status,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Run commands from `input` until it ends or the player quits
pub fn run<D, R, W>(engine: &mut RoundEngine<D>, input: R, out: &mut W) -> Result<()>
where
    D: DrawSource + 'static,
    R: BufRead,
    W: Write,
{
    let caps = engine.capabilities();
    writeln!(
        out,
        "Hidden stat challenge: {} rounds, one category per creature. Type `help` for commands.",
        caps.max_horizon
    )?;
    render(engine, out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            writeln!(out, "Unknown command: {}", line.trim())?;
            continue;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => break,
            Command::Help => write_help(out)?,
            Command::Status => render(engine, out)?,
            Command::Reset => {
                engine.reset();
                render(engine, out)?;
            }
            Command::Generation(key) => {
                if engine.session().phase() != Phase::Setup {
                    writeln!(out, "The generation can only change before starting.")?;
                    continue;
                }
                engine.select_generation(Generation::resolve(&key));
                render(engine, out)?;
            }
            Command::Start(target) => {
                if engine.session().phase() != Phase::Setup {
                    writeln!(out, "A game is already under way; `reset` first.")?;
                    continue;
                }
                let generation = engine.session().generation();
                engine.start(&target, generation);
                if engine.session().phase() == Phase::Setup {
                    writeln!(out, "Target must be a positive whole number.")?;
                    continue;
                }
                render(engine, out)?;
            }
            Command::Pick(text) => {
                let category = match text.parse::<StatCategory>() {
                    Ok(category) => category,
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                };
                if engine.session().phase() != Phase::Playing {
                    writeln!(out, "Start a game first.")?;
                    continue;
                }
                if engine.session().is_locked(category) {
                    writeln!(out, "{category} is already used.")?;
                    continue;
                }
                engine.choose_category(category);
                if let Some(pick) = engine.session().picks().last() {
                    writeln!(out, "{} {} = {}", pick.creature_name, pick.category, pick.value)?;
                }
                render(engine, out)?;
            }
        }
    }

    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  gen <all|1-9>     choose a generation (before starting)")?;
    writeln!(out, "  start <target>    start with a positive target total")?;
    writeln!(out, "  pick <category>   lock a category: HP, Attack, Defense, Sp. Atk, Sp. Def, Speed")?;
    writeln!(out, "  status            show the current state")?;
    writeln!(out, "  reset             discard the game and return to setup")?;
    writeln!(out, "  quit              leave")?;
    let keys: Vec<String> = GENERATIONS
        .iter()
        .map(|g| format!("{} ({}-{})", g.key, g.start, g.end))
        .collect();
    writeln!(out, "Generations: {}", keys.join(", "))?;
    Ok(())
}

/// Render the session for its current phase
pub fn render<D, W>(engine: &RoundEngine<D>, out: &mut W) -> Result<()>
where
    D: DrawSource,
    W: Write,
{
    let session = engine.session();
    match session.phase() {
        Phase::Setup => render_setup(engine, out),
        Phase::Playing => render_round(session, out),
        Phase::Finished => render_results(engine, out),
    }
}

fn render_setup<D: DrawSource, W: Write>(engine: &RoundEngine<D>, out: &mut W) -> Result<()> {
    let session = engine.session();
    writeln!(
        out,
        "Setup | Gen: {} | {} of {} creatures eligible",
        session.generation(),
        engine.pool().len(),
        engine.catalog().len()
    )?;
    if let Some(preview) = session.current_creature() {
        writeln!(out, "Preview: {} ({})", preview.name, sprite_url(preview.id))?;
    }
    Ok(())
}

fn render_round<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Round {} / {} | Target: {} | Total: {} | Gen: {}",
        session.round(),
        StatCategory::COUNT,
        session.target(),
        session.running_total(),
        session.generation()
    )?;
    if let Some(creature) = session.current_creature() {
        writeln!(out, "{} ({})", creature.name, sprite_url(creature.id))?;
    }
    let remaining: Vec<&str> = session
        .remaining_categories()
        .into_iter()
        .map(StatCategory::label)
        .collect();
    writeln!(out, "Remaining: {}", remaining.join(", "))?;
    if !session.locked_categories().is_empty() {
        let used: Vec<&str> = session
            .locked_categories()
            .iter()
            .map(|c| c.label())
            .collect();
        writeln!(out, "Used: {}", used.join(", "))?;
    }
    Ok(())
}

fn render_results<D: DrawSource, W: Write>(engine: &RoundEngine<D>, out: &mut W) -> Result<()> {
    let session = engine.session();
    writeln!(out, "Target: {} | Your total: {}", session.target(), session.running_total())?;
    writeln!(out, "Revealed picks:")?;
    for (i, pick) in session.picks().iter().enumerate() {
        writeln!(
            out,
            "  Round {}: {} - chosen {} = {} | best: {} = {}",
            i + 1,
            pick.creature_name,
            pick.category,
            pick.value,
            pick.best.category,
            pick.best.value
        )?;
    }
    if let Some(evaluation) = engine.evaluate() {
        if evaluation.did_win {
            writeln!(out, "You won! (total >= target)")?;
        } else {
            writeln!(out, "You lost.")?;
        }
    }
    Ok(())
}
