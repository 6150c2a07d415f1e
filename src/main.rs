// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::fs::{self, OpenOptions};
use std::io::{Result, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

mod config;
mod error;
mod game;
mod matcher;
mod spelling;
mod stories;
mod ui;

use config::GameConfig;
use game::{Game, SearchOutcome};
use spelling::SpellingCorrector;
use stories::Catalog;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

// --------------------------------------------------
// コマンドライン引数
// --------------------------------------------------

/// WORD HUNT - find the hidden words in little stories
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Generated stories (JSON array) to add after the built-in ones
    #[arg(long, value_name = "FILE")]
    stories: Option<PathBuf>,

    /// Config file (default: the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the story list and exit
    #[arg(long)]
    list: bool,
}

// --------------------------------------------------
// アプリ全体の状態
// --------------------------------------------------

/// 画面側の状態 (ゲームの中身は `Game` が持つ)
pub struct AppState {
    game: Game,
    /// 一覧画面のカーソル位置
    cursor: usize,
    /// 直前の検索結果 (画面下に表示)
    last_outcome: Option<SearchOutcome>,
}

impl AppState {
    fn new(game: Game) -> Self {
        Self {
            game,
            cursor: 0,
            last_outcome: None,
        }
    }

    /// キー入力の処理 (終了するなら true)
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.game.selected_story().is_none() {
            return self.handle_catalog_key(key.code);
        }

        match key.code {
            KeyCode::Esc => {
                // 一覧に戻ったときは今のストーリーにカーソルを合わせる
                if let Some(index) = self.game.selected_index() {
                    self.cursor = index;
                }
                self.game.deselect();
                self.last_outcome = None;
            }
            KeyCode::Char('r') if ctrl => {
                self.game.reset();
                self.last_outcome = None;
            }
            KeyCode::Char('u') if ctrl => self.game.clear_input(),
            KeyCode::Enter => {
                let outcome = self.game.submit_input();
                if outcome != SearchOutcome::Ignored {
                    self.last_outcome = Some(outcome);
                }
            }
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Char(c) if !ctrl => self.game.push_char(c),
            _ => {}
        }
        false
    }

    /// 一覧画面のキー入力
    fn handle_catalog_key(&mut self, code: KeyCode) -> bool {
        let len = self.game.catalog().len();
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                self.game.select_story(self.cursor);
            }
            _ => {}
        }
        false
    }
}

// --------------------------------------------------
// 起動処理
// --------------------------------------------------

/// ログはファイルに出す (画面は TUI が使うため)
/// RUST_LOG で絞り込み、既定は info
fn init_logging() {
    let path = config::log_file_path();
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // 書けない環境ではログを捨てる
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

/// 設定・ストーリー・辞書を読み込んでゲームを作る
fn build_game(args: &Args) -> anyhow::Result<Game> {
    let config =
        GameConfig::resolve(args.config.as_deref()).context("failed to load configuration")?;

    // コマンドライン指定が設定ファイルより優先
    let generated = match args.stories.as_ref().or(config.generated_stories.as_ref()) {
        Some(path) => stories::load_generated(path).context("failed to load generated stories")?,
        None => Vec::new(),
    };

    let catalog = Catalog::new(generated);
    let corrector = SpellingCorrector::default().with_extra(&config.extra_corrections);
    log::info!(
        "catalog has {} stories, dictionary has {} corrections",
        catalog.len(),
        corrector.len()
    );

    Ok(Game::new(catalog, corrector)
        .with_points_per_word(config.points_per_word)
        .with_max_hints(config.max_hints))
}

fn print_catalog(catalog: &Catalog) {
    for (i, story) in catalog.stories().iter().enumerate() {
        println!(
            "{:>3}  {} {}  [{}]  {} words to find",
            i + 1,
            story.icon,
            story.title,
            story.difficulty,
            story.target_words.len()
        );
    }
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let game = build_game(&args)?;
    if args.list {
        print_catalog(game.catalog());
        return Ok(());
    }

    install_panic_hook();
    let mut terminal = setup_terminal().context("failed to set up the terminal")?;
    let result = run_app(&mut terminal, AppState::new(game));
    // エラーでも端末は必ず元に戻す
    restore_terminal(&mut terminal).context("failed to restore the terminal")?;
    result.context("terminal I/O failed")?;
    log::info!("bye");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<impl Backend>) -> Result<()> {
    terminal.show_cursor()?; // カーソルを再表示
    leave_screen()
}

/// 代替スクリーンと raw モードを終了する
fn leave_screen() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// パニック時も端末を元に戻してから既定のハンドラでメッセージを出す
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = stdout().execute(Show);
        let _ = leave_screen();
        default_hook(info);
    }));
}

fn run_app(terminal: &mut Terminal<impl Backend>, mut app_state: AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &app_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press && app_state.handle_key(key) {
                    break;
                }
            }
        }
    }

    Ok(())
}
