//! End-to-end tests running parsed commands against a temporary data file.

use camino::Utf8PathBuf;
use clap::Parser;
use eyre::{bail, ensure};
use kboard::cli::{Cli, CliError, Confirm, run};
use kboard::config::Config;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::io;
use tempfile::TempDir;

/// Answers every confirmation with a fixed reply and counts the questions.
struct ScriptedConfirm {
    answer: bool,
    asked: usize,
}

impl ScriptedConfirm {
    const fn answering(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        self.asked += 1;
        Ok(self.answer)
    }
}

struct Workspace {
    _dir: TempDir,
    config: Config,
}

impl Workspace {
    fn run_with(&self, args: &[&str], confirm: &mut ScriptedConfirm) -> Result<String, CliError> {
        let argv = std::iter::once("kboard").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("arguments parse");
        run(cli.command, &self.config, confirm, &DefaultClock)
    }

    fn run(&self, args: &[&str]) -> Result<String, CliError> {
        self.run_with(args, &mut ScriptedConfirm::answering(true))
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("create temporary directory");
    let data_file = Utf8PathBuf::from_path_buf(dir.path().join(".kboard.db"))
        .expect("temporary path is UTF-8");
    Workspace {
        _dir: dir,
        config: Config::with_data_file(data_file),
    }
}

#[fixture]
fn configured(workspace: Workspace) -> Workspace {
    workspace.run(&["configure"]).expect("configure data file");
    workspace
}

#[rstest]
fn commands_require_configuration(workspace: Workspace) -> eyre::Result<()> {
    let result = workspace.run(&["board", "ls"]);
    let Err(err @ CliError::NotConfigured(_)) = result else {
        bail!("expected not configured, got {result:?}");
    };
    ensure!(err.is_command_failure());
    Ok(())
}

#[rstest]
fn configure_can_run_twice(configured: Workspace) -> eyre::Result<()> {
    let output = configured.run(&["configure"])?;
    ensure!(output.starts_with("Success:"));
    Ok(())
}

#[rstest]
fn board_and_task_lifecycle(configured: Workspace) -> eyre::Result<()> {
    let created = configured.run(&["board", "add", "Work"])?;
    ensure!(created == "Success: Created board \"Work\" (1).");

    let shown = configured.run(&["task", "add", "Draft report", "-p", "high", "-b", "1"])?;
    ensure!(shown.starts_with("[1] Work\nTo do (1)"));
    ensure!(shown.contains("#1 [!] Draft report"));

    let moved = configured.run(&["task", "mv", "1", "-s", "2"])?;
    ensure!(moved.contains("Review (1)"));

    let listed = configured.run(&["board", "ls"])?;
    ensure!(listed == "Boards\n  [1] Work (1)");
    Ok(())
}

#[rstest]
fn edit_to_backlog_renders_backlog(configured: Workspace) -> eyre::Result<()> {
    configured.run(&["board", "add", "Work"])?;
    configured.run(&["task", "add", "Draft report", "-b", "1"])?;

    let output = configured.run(&["task", "edit", "1", "-b", "-1"])?;

    ensure!(output.starts_with("Backlog\n"));
    ensure!(output.contains("#1 Draft report"));
    Ok(())
}

#[rstest]
fn out_of_range_move_reports_steps(configured: Workspace) -> eyre::Result<()> {
    configured.run(&["task", "add", "Draft report"])?;

    let result = configured.run(&["task", "mv", "1", "-s", "4"]);

    let Err(err) = result else {
        bail!("expected move to fail");
    };
    ensure!(err.user_message() == "Unable to move 4 step(s).");
    let backlog = configured.run(&["backlog"])?;
    ensure!(backlog.contains("To do (1)"));
    Ok(())
}

#[rstest]
fn failed_command_writes_nothing(configured: Workspace) -> eyre::Result<()> {
    let result = configured.run(&["task", "add", "Orphan", "-b", "5"]);
    let Err(err) = result else {
        bail!("expected missing board failure");
    };
    ensure!(err.user_message() == "Board not found.");

    let backlog = configured.run(&["backlog"])?;
    ensure!(!backlog.contains("Orphan"));
    Ok(())
}

#[rstest]
fn declined_confirmation_keeps_board(configured: Workspace) -> eyre::Result<()> {
    configured.run(&["board", "add", "Work"])?;
    let mut decline = ScriptedConfirm::answering(false);

    let output = configured.run_with(&["board", "rm", "1"], &mut decline)?;

    ensure!(output == "Aborted.");
    ensure!(decline.asked == 1);
    ensure!(configured.run(&["board", "ls"])?.contains("[1] Work"));
    Ok(())
}

#[rstest]
fn forced_removal_skips_confirmation(configured: Workspace) -> eyre::Result<()> {
    configured.run(&["board", "add", "Work"])?;
    configured.run(&["task", "add", "Draft report", "-b", "1"])?;
    let mut decline = ScriptedConfirm::answering(false);

    let output = configured.run_with(&["board", "rm", "1", "--force"], &mut decline)?;

    ensure!(decline.asked == 0);
    ensure!(output == "Success: Deleted board \"Work\" and 1 task(s).");
    ensure!(configured.run(&["board", "ls"])? == "Boards\n  (none)");
    Ok(())
}

#[rstest]
fn clean_shows_remaining_tasks(configured: Workspace) -> eyre::Result<()> {
    configured.run(&["board", "add", "Work"])?;
    configured.run(&["task", "add", "Ship release", "-b", "1"])?;
    configured.run(&["task", "add", "Draft report", "-b", "1"])?;
    configured.run(&["task", "mv", "1", "-s", "3"])?;

    let output = configured.run(&["board", "clean", "1", "-f"])?;

    ensure!(output.contains("Completed (0)"));
    ensure!(output.contains("#2 Draft report"));
    ensure!(!output.contains("Ship release"));
    Ok(())
}
