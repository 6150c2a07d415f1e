// ============================================
// src/ui.rs
// 画面描画 (ストーリー一覧 / ゲーム画面)
// ============================================

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::AppState;
use crate::game::SearchOutcome;
use crate::stories::{Story, StoryTheme};

/// テーマごとの色 (枠線, 強調)
fn theme_colors(theme: StoryTheme) -> (Color, Color) {
    match theme {
        StoryTheme::Forest => (Color::Green, Color::LightBlue),
        StoryTheme::Royal => (Color::Magenta, Color::LightMagenta),
        StoryTheme::Ocean => (Color::Blue, Color::Cyan),
        StoryTheme::Sunset => (Color::LightRed, Color::Yellow),
        StoryTheme::Space => (Color::Indexed(61), Color::LightCyan),
        StoryTheme::Plain => (Color::Gray, Color::White),
    }
}

pub fn ui(f: &mut Frame, app_state: &AppState) {
    let size = f.area();
    // 枠線を描画
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Word Hunt !");
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    match app_state.game.selected_story() {
        None => draw_catalog(f, app_state, inner_area),
        Some(story) => draw_game(f, app_state, story, inner_area),
    }
}

// --------------------------------------------------
// ストーリー一覧
// --------------------------------------------------

fn draw_catalog(f: &mut Frame, app_state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] 見出し
            Constraint::Length(1), // [1] 空白
            Constraint::Min(1),    // [2] 一覧
            Constraint::Length(1), // [3] 操作説明
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("Discover hidden words in magical stories!")
            .style(Style::default().fg(Color::White).bold())
            .centered(),
        chunks[0],
    );

    let items: Vec<ListItem> = app_state
        .game
        .catalog()
        .stories()
        .iter()
        .map(|story| {
            let (border, accent) = theme_colors(story.theme);
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", story.icon)),
                Span::styled(story.title.clone(), Style::default().fg(accent).bold()),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", story.difficulty),
                    Style::default().fg(border),
                ),
                Span::styled(
                    format!("  {} words to find", story.target_words.len()),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !app_state.game.catalog().is_empty() {
        list_state.select(Some(app_state.cursor));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Stories"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, chunks[2], &mut list_state);

    f.render_widget(
        Paragraph::new("↑/↓ choose   Enter play   Esc quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        chunks[3],
    );
}

// --------------------------------------------------
// ゲーム画面
// --------------------------------------------------

fn draw_game(f: &mut Frame, app_state: &AppState, story: &Story, area: Rect) {
    let (border, accent) = theme_colors(story.theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    // 左: 本文 + 入力欄
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // [0] 本文
            Constraint::Length(3), // [1] 入力欄
            Constraint::Length(2), // [2] お知らせ
            Constraint::Length(1), // [3] 操作説明
        ])
        .split(columns[0]);

    let title = format!(" {} {} ", story.icon, story.title);
    f.render_widget(
        Paragraph::new(story.content.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(Span::styled(title, Style::default().fg(accent).bold())),
            )
            .wrap(Wrap { trim: false }),
        left[0],
    );

    // 入力欄 (カーソルは Hide しているので █ で表示)
    let input_line = Line::from(vec![
        Span::styled(app_state.game.input(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(accent)),
    ]);
    f.render_widget(
        Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Type a word from the story... (spelling help included!)"),
        ),
        left[1],
    );

    if let Some(outcome) = &app_state.last_outcome {
        f.render_widget(
            Paragraph::new(feedback_line(outcome)).wrap(Wrap { trim: true }),
            left[2],
        );
    }

    f.render_widget(
        Paragraph::new("Enter search   Esc back   Ctrl+U clear   Ctrl+R reset   Ctrl+C quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        left[3],
    );

    // 右: スコア・見つけた単語・ヒント
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // [0] スコア
            Constraint::Min(3),    // [1] 見つけた単語
            Constraint::Length(6), // [2] ヒント
        ])
        .split(columns[1]);

    draw_stats(f, app_state, story, right[0]);
    draw_found_words(f, app_state, right[1]);
    draw_hints(f, app_state, right[2]);
}

fn draw_stats(f: &mut Frame, app_state: &AppState, story: &Story, area: Rect) {
    let game = &app_state.game;
    let block = Block::default().borders(Borders::ALL).title("Game Stats");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // [0] 数値
            Constraint::Length(1), // [1] 空白
            Constraint::Length(1), // [2] ゲージ
        ])
        .split(inner);

    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Score:       ", label),
            Span::styled(game.score().to_string(), Style::default().fg(Color::Magenta).bold()),
        ]),
        Line::from(vec![
            Span::styled("Words Found: ", label),
            Span::styled(
                format!("{}/{}", game.found_words().len(), story.target_words.len()),
                Style::default().fg(Color::Green).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Attempts:    ", label),
            Span::styled(game.attempts().to_string(), Style::default().fg(Color::Blue).bold()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), rows[0]);

    // 対象単語以外の一致で 100% を超えることがあるのでゲージだけ丸める
    let percent = game.progress_percentage();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio((percent as f64 / 100.0).min(1.0))
        .label(format!("{percent}% Complete"));
    f.render_widget(gauge, rows[2]);
}

fn draw_found_words(f: &mut Frame, app_state: &AppState, area: Rect) {
    let found = app_state.game.found_words();
    let content = if found.is_empty() {
        Line::from(Span::styled(
            "No words found yet. Start searching!",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = Vec::new();
        for word in found {
            spans.push(Span::styled(
                format!(" {word} "),
                Style::default().fg(Color::Black).bg(Color::LightGreen),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    f.render_widget(
        Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title("Found Words"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_hints(f: &mut Frame, app_state: &AppState, area: Rect) {
    let game = &app_state.game;
    let hints = game.hints();

    let lines: Vec<Line> = if hints.is_empty() {
        let message = if game.is_complete() {
            "Congratulations! You found all the words!"
        } else {
            "Keep searching for more words!"
        };
        vec![Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))]
    } else {
        hints
            .into_iter()
            .map(|hint| {
                Line::from(vec![
                    Span::styled("Try looking for: ", Style::default().fg(Color::Yellow)),
                    Span::styled(hint, Style::default().fg(Color::Yellow).bold()),
                ])
            })
            .collect()
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Hints"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// 直前の検索結果を 1 行にする
pub fn feedback_line(outcome: &SearchOutcome) -> Line<'static> {
    if let Some(notice) = outcome.correction_notice() {
        return Line::from(notice).style(Style::default().fg(Color::LightGreen).bold());
    }
    match outcome {
        SearchOutcome::Found { word, .. } => {
            Line::from(format!("You found \"{word}\"!")).style(Style::default().fg(Color::Green))
        }
        SearchOutcome::AlreadyFound { word } => {
            Line::from(format!("You already found \"{word}\"."))
                .style(Style::default().fg(Color::Yellow))
        }
        SearchOutcome::NotFound { word } => {
            Line::from(format!("\"{word}\" is not in the story. Try again!"))
                .style(Style::default().fg(Color::Red))
        }
        SearchOutcome::Ignored => Line::default(),
    }
}
