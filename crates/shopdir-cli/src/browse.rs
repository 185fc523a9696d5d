//! Interactive browsing session driven by line commands on stdin.
//!
//! Every command that changes the criteria re-renders the view, the way the
//! web directory recomputes on each input event.

use anyhow::Context;
use shopdir_client::{Directory, ReloadOutcome};
use shopdir_core::{FilterChoice, SortKey, ViewCriteria};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const HELP: &str = "\
Commands:
  search <text>    free-text search (empty clears)
  region <value>   restrict to a region, or \"all\"
  state <value>    restrict to a state, or \"all\"
  sort <key>       name, state, region or recent
  reset            clear every filter
  reload           fetch the shop list again
  show             print the current view
  stats            print per-region counts
  options          print selectable regions and states
  help             print this help
  quit             leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Search(String),
    Region(FilterChoice),
    State(FilterChoice),
    Sort(SortKey),
    Reset,
    Reload,
    Show,
    Stats,
    Options,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_browse_line(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "q" => BrowseCommand::Search(rest.to_owned()),
        "region" => BrowseCommand::Region(FilterChoice::from_value(rest)),
        "state" => BrowseCommand::State(FilterChoice::from_value(rest)),
        "sort" => BrowseCommand::Sort(SortKey::parse(rest)),
        "reset" => BrowseCommand::Reset,
        "reload" | "refresh" => BrowseCommand::Reload,
        "show" | "list" => BrowseCommand::Show,
        "stats" => BrowseCommand::Stats,
        "options" => BrowseCommand::Options,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };
    Ok(Some(command))
}

/// Applies a criteria-changing command. Returns `true` when the view should
/// be re-rendered.
pub(crate) fn apply_to_criteria(criteria: &mut ViewCriteria, command: &BrowseCommand) -> bool {
    match command {
        BrowseCommand::Search(text) => criteria.query.clone_from(text),
        BrowseCommand::Region(choice) => criteria.region = choice.clone(),
        BrowseCommand::State(choice) => criteria.state = choice.clone(),
        BrowseCommand::Sort(key) => criteria.sort = *key,
        BrowseCommand::Reset => *criteria = ViewCriteria::default(),
        _ => return false,
    }
    true
}

pub(crate) async fn run_browse(directory: &Directory, json: bool) -> anyhow::Result<()> {
    let mut criteria = ViewCriteria::default();

    reload(directory).await;
    show(directory, &criteria, json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let command = match parse_browse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if apply_to_criteria(&mut criteria, &command) {
            tracing::debug!(?criteria, "criteria changed");
            show(directory, &criteria, json)?;
            continue;
        }

        match command {
            BrowseCommand::Reload => {
                reload(directory).await;
                show(directory, &criteria, json)?;
            }
            BrowseCommand::Show => show(directory, &criteria, json)?,
            BrowseCommand::Stats => {
                let view = directory.view(&criteria);
                if json {
                    println!("{}", serde_json::to_string_pretty(&view.summary)?);
                } else {
                    print!("{}", render::render_summary(&view.summary));
                }
            }
            BrowseCommand::Options => {
                let options = directory.options();
                if json {
                    println!("{}", serde_json::to_string_pretty(&options)?);
                } else {
                    print!("{}", render::render_options(&options));
                }
            }
            BrowseCommand::Help => print!("{HELP}"),
            BrowseCommand::Quit => break,
            BrowseCommand::Search(_)
            | BrowseCommand::Region(_)
            | BrowseCommand::State(_)
            | BrowseCommand::Sort(_)
            | BrowseCommand::Reset => {}
        }
    }

    Ok(())
}

/// Reloads and reports failures without ending the session; the previous
/// collection stays visible.
async fn reload(directory: &Directory) {
    match directory.reload().await {
        Ok(ReloadOutcome::Loaded(report)) => {
            tracing::info!(
                source = %report.source_name,
                shops = report.shop_count,
                "shop list loaded"
            );
        }
        Ok(ReloadOutcome::AlreadyInFlight) => {
            eprintln!("A reload is already in progress.");
        }
        Err(e) => {
            tracing::error!(error = %e, "shop list reload failed");
            eprintln!("{}", render::LOAD_FAILED_MESSAGE);
        }
    }
}

fn show(directory: &Directory, criteria: &ViewCriteria, json: bool) -> anyhow::Result<()> {
    let view = directory.view(criteria);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_list(&view.shops));
        println!("{}", render::render_status(view.summary.total));
    }
    Ok(())
}
