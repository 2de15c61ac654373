use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;

use colored::Colorize;
use gs_story::{ChoiceReport, GameSession, SessionConfig};
use tracing::info;

pub fn run(path: Option<&Path>, seed: Option<u64>, delay: u64) -> Result<(), String> {
    let content = super::load_content(path)?;
    let mut config = SessionConfig::default().with_reveal_delay(delay);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session =
        GameSession::new(content, &config).map_err(|e| format!("failed to start session: {e}"))?;
    info!(character = %session.character().name, ?seed, delay, "mission started");

    println!("  {} GREY STRATUM", "Starting".bold());
    println!("  Type a choice number, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl(&mut session, &config, stdin.lock(), &mut stdout)
}

/// Drive a session from line-based input until EOF or `quit`.
fn repl(
    session: &mut GameSession,
    config: &SessionConfig,
    mut reader: impl BufRead,
    out: &mut impl Write,
) -> Result<(), String> {
    let io_err = |e: io::Error| e.to_string();
    let mut line = String::new();

    write_scene(session, out).map_err(io_err)?;

    loop {
        write!(out, "> ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = input.split_once(' ').unwrap_or((input, ""));
        let rest = rest.trim();

        match cmd.to_lowercase().as_str() {
            "quit" | "q" => {
                writeln!(out, "Signing off.").map_err(io_err)?;
                break;
            }
            "help" => writeln!(out, "{HELP}").map_err(io_err)?,
            "status" => write_status(session, out).map_err(io_err)?,
            "look" => write_scene(session, out).map_err(io_err)?,
            "log" => writeln!(out, "{}", session.log().export_text()).map_err(io_err)?,
            "note" => {
                if rest.is_empty() {
                    writeln!(out, "{}\n", "usage: note <text>".yellow()).map_err(io_err)?;
                } else {
                    session.note(rest);
                    writeln!(out, "Noted.\n").map_err(io_err)?;
                }
            }
            "export" => {
                let msg = export(session, rest).unwrap_or_else(|e| e.yellow().to_string());
                writeln!(out, "{msg}\n").map_err(io_err)?;
            }
            other => match other.parse::<usize>() {
                Ok(index) => match session.choose(index) {
                    Ok(report) => {
                        write_report(&report, config, out).map_err(io_err)?;
                        write_scene(session, out).map_err(io_err)?;
                    }
                    Err(e) => writeln!(out, "{}\n", e.to_string().yellow()).map_err(io_err)?,
                },
                Err(_) => {
                    writeln!(out, "{}\n", format!("unknown command: {other}").yellow())
                        .map_err(io_err)?;
                }
            },
        }
    }

    Ok(())
}

const HELP: &str = "\
Commands:
  <n>                     take choice n
  look                    show the current scene again
  status                  show the character status card
  log                     show the mission log
  note <text>             add a note to the mission log
  export <md|text> [file] export the mission log
  quit                    leave the mission
";

fn write_scene(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    let scene = session.current_scene();
    if !scene.title.is_empty() {
        writeln!(out, "{}", scene.title.bold())?;
    }
    writeln!(out, "{}\n", scene.text)?;

    if session.is_finished() {
        writeln!(out, "{}\n", "[ END OF MISSION ]".dimmed())?;
        return Ok(());
    }

    for (i, choice) in session.choices().iter().enumerate() {
        match &choice.check {
            Some(check) => writeln!(
                out,
                "  {}. {} [{} {}]",
                i + 1,
                choice.label,
                check.attribute,
                check.difficulty
            )?,
            None => writeln!(out, "  {}. {}", i + 1, choice.label)?,
        }
    }
    writeln!(out)
}

fn write_report(
    report: &ChoiceReport,
    config: &SessionConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", report.label.italic())?;
    if let Some(outcome) = &report.outcome {
        writeln!(out, "  Rolling {}...", outcome.attribute)?;
        out.flush()?;
        thread::sleep(config.reveal_delay());
        let verdict = if outcome.success {
            "SUCCESS".green().bold()
        } else {
            "FAILURE".red().bold()
        };
        writeln!(
            out,
            "  {} + {} = {} vs {} — {verdict}",
            outcome.attribute_value, outcome.roll, outcome.total, outcome.target
        )?;
    }
    for effect in &report.effects {
        writeln!(out, "  {effect}")?;
    }
    writeln!(out)
}

fn write_status(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    let sheet = session.character();
    writeln!(out, "{} — {} (level {})", sheet.name.bold(), sheet.role, sheet.level)?;
    let attrs: Vec<String> = sheet
        .attributes
        .iter()
        .map(|(a, v)| format!("{a} {v}"))
        .collect();
    writeln!(out, "  {}", attrs.join("  "))?;
    for track in &sheet.tracks {
        writeln!(out, "  {track}")?;
    }
    let checks: Vec<_> = session.log().checks().collect();
    let passed = checks.iter().filter(|o| o.success).count();
    writeln!(out, "  Checks: {passed}/{} passed\n", checks.len())
}

fn export(session: &GameSession, args: &str) -> Result<String, String> {
    let (format, file) = args.split_once(' ').unwrap_or((args, ""));
    let text = match format {
        "md" | "markdown" => session.log().export_markdown(),
        "text" | "txt" => session.log().export_text(),
        _ => return Err("usage: export <md|text> [file]".to_string()),
    };

    let file = file.trim();
    if file.is_empty() {
        return Ok(text);
    }
    let path = PathBuf::from(file);
    std::fs::write(&path, text)
        .map_err(|e| format!("failed to write '{}': {e}", path.display()))?;
    Ok(format!("Log written to {}", path.display()))
}
