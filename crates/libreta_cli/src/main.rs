//! Interactive terminal host for the letter notebook.
//!
//! # Responsibility
//! - Resolve config, open storage and drive the core view controller.
//! - Render the derived view model after every command.

mod command;

use command::{parse_command, Command, HELP};
use libreta_core::{
    init_logging, open_store, AppConfig, KeyValueStore, KvNoteRepository, KvThemeRepository,
    Presenter, SubmitOutcome, SystemClock, Theme, ViewController, ViewModel,
};
use log::error;
use std::io::BufRead;
use std::process::ExitCode;

/// Presenter that reports theme switches on stdout.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn apply_theme(&mut self, theme: Theme) {
        println!("[theme: {theme}]");
    }
}

type Controller<'s> = ViewController<
    KvNoteRepository<&'s dyn KeyValueStore>,
    KvThemeRepository<&'s dyn KeyValueStore>,
    SystemClock,
    TerminalPresenter,
>;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("libreta: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("libreta: logging disabled: {err}");
        }
    }

    let store = match open_store(&config.storage) {
        Ok(store) => store,
        Err(err) => {
            error!("event=store_open module=cli status=error error={err}");
            eprintln!("libreta: cannot open storage: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller: Controller<'_> = ViewController::init(
        KvNoteRepository::new(store.as_ref()),
        KvThemeRepository::new(store.as_ref()),
        SystemClock,
        TerminalPresenter,
    );

    println!("libreta {} ({})", libreta_core::core_version(), store.backend_name());
    render(&controller.view_model());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(&mut controller, command),
            Err(message) => println!("! {message}"),
        }
    }

    ExitCode::SUCCESS
}

fn run(controller: &mut Controller<'_>, command: Command) {
    match command {
        Command::SelectLetter(letter) => controller.select_letter(letter),
        Command::SelectColor(color) => controller.set_selected_color(color),
        Command::Draft(text) => controller.set_draft_text(text),
        Command::Add(text) => {
            if let Some(text) = text {
                controller.set_draft_text(text);
            }
            match controller.submit_draft() {
                Ok(SubmitOutcome::Added(_)) => {}
                Ok(SubmitOutcome::Rejected) => println!("! draft is empty"),
                Err(err) => println!("! could not save note: {err}"),
            }
        }
        Command::Delete(index) => {
            if let Err(err) = controller.remove_note(index) {
                println!("! {err}");
            }
        }
        Command::ToggleTheme => {
            if let Err(err) = controller.toggle_theme() {
                println!("! could not save theme: {err}");
            }
        }
        Command::Show => {}
        Command::Help => {
            println!("{HELP}");
            return;
        }
        Command::Quit => return,
    }
    render(&controller.view_model());
}

fn render(view: &ViewModel) {
    let tabs: String = view
        .letters
        .iter()
        .map(|tab| {
            if tab.selected {
                format!("[{}]", tab.letter)
            } else if tab.note_count > 0 {
                format!("{}*", tab.letter)
            } else {
                tab.letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let swatches: String = view
        .colors
        .iter()
        .enumerate()
        .map(|(position, swatch)| {
            let marker = if swatch.selected { '>' } else { ' ' };
            format!("{marker}{} {}", position + 1, swatch.color.label())
        })
        .collect::<Vec<_>>()
        .join("  ");

    println!();
    println!("{tabs}   ({})", view.theme.label);
    println!("{}", view.heading);
    println!("colors: {swatches}");
    if view.draft.is_empty() {
        println!("draft: <{}>", view.draft_placeholder);
    } else {
        println!("draft: {}", view.draft);
    }
    if view.notes.is_empty() {
        println!("  (no notes)");
    }
    for card in &view.notes {
        println!(
            "  #{} [{}] {}  ({})",
            card.index,
            card.color.label(),
            card.text,
            card.timestamp
        );
    }
}
