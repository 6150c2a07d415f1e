// ============================================
// src/game.rs
// ゲームの状態 (選択中のストーリー、見つけた単語、スコア、挑戦回数)
// ============================================

use std::collections::HashMap;

use crate::matcher::word_in_story;
use crate::spelling::SpellingCorrector;
use crate::stories::{Catalog, Story};

/// 1 単語見つけるごとのスコア (既定値)
pub const DEFAULT_POINTS_PER_WORD: u32 = 10;
/// ヒントの最大表示数 (既定値)
pub const DEFAULT_MAX_HINTS: usize = 3;

/// ストーリーごとの進行状況
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// 見つけた単語 (小文字、見つけた順)
    pub found_words: Vec<String>,
    pub score: u32,
    pub attempts: u32,
}

/// 検索 1 回分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 空入力、またはストーリー未選択なので何もしていない
    Ignored,
    /// 新しく見つけた
    Found {
        word: String,
        /// スペル補正が入った場合の元の入力
        corrected_from: Option<String>,
    },
    /// もう見つけている単語
    AlreadyFound { word: String },
    /// ストーリーに無い
    NotFound { word: String },
}

impl SearchOutcome {
    /// スペル補正したときにユーザーへ出すお知らせ
    pub fn correction_notice(&self) -> Option<String> {
        match self {
            SearchOutcome::Found {
                word,
                corrected_from: Some(typed),
            } => Some(format!(
                "Great! I found \"{word}\" in the story! (I corrected \"{typed}\" to \"{word}\")"
            )),
            _ => None,
        }
    }
}

/// ゲーム全体の状態
/// ストーリー一覧と辞書は起動時に受け取り、以降は読むだけ
#[derive(Debug)]
pub struct Game {
    catalog: Catalog,
    corrector: SpellingCorrector,
    points_per_word: u32,
    max_hints: usize,

    /// 選択中のストーリー (catalog 内の位置)
    selected: Option<usize>,
    /// 入力途中の検索文字列
    input: String,
    /// ストーリーごとの進行状況
    /// 別のストーリーに切り替えても前の進行状況は混ざらない
    progress: HashMap<usize, Progress>,
}

impl Game {
    pub fn new(catalog: Catalog, corrector: SpellingCorrector) -> Self {
        Self {
            catalog,
            corrector,
            points_per_word: DEFAULT_POINTS_PER_WORD,
            max_hints: DEFAULT_MAX_HINTS,
            selected: None,
            input: String::new(),
            progress: HashMap::new(),
        }
    }

    pub fn with_points_per_word(mut self, points: u32) -> Self {
        self.points_per_word = points;
        self
    }

    pub fn with_max_hints(mut self, max_hints: usize) -> Self {
        self.max_hints = max_hints;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --------------------------------------------------
    // 画面遷移
    // --------------------------------------------------

    /// ストーリーを選ぶ (進行状況はリセットしない)
    /// 範囲外なら false
    pub fn select_story(&mut self, index: usize) -> bool {
        match self.catalog.get(index) {
            Some(story) => {
                log::info!("selected story {} ({:?})", story.id, story.title);
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// 一覧に戻る (進行状況は残す)
    pub fn deselect(&mut self) {
        if let Some(story) = self.selected_story() {
            log::debug!("left story {}", story.id);
        }
        self.selected = None;
        self.input.clear();
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    // --------------------------------------------------
    // 入力欄
    // --------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// 入力欄の文字列で検索する
    pub fn submit_input(&mut self) -> SearchOutcome {
        let text = std::mem::take(&mut self.input);
        let outcome = self.submit_search(&text);
        if outcome == SearchOutcome::Ignored {
            // 何もしなかったときは入力を戻しておく
            self.input = text;
        }
        outcome
    }

    /// MARK:単語を検索する
    pub fn submit_search(&mut self, text: &str) -> SearchOutcome {
        let typed = text.trim();
        let Some(index) = self.selected else {
            return SearchOutcome::Ignored;
        };
        if typed.is_empty() {
            return SearchOutcome::Ignored;
        }
        let Some(story) = self.catalog.get(index) else {
            return SearchOutcome::Ignored;
        };

        let corrected = self.corrector.correct(typed);
        let word = corrected.to_lowercase();
        let matched = word_in_story(corrected, story);

        let progress = self.progress.entry(index).or_default();
        progress.attempts += 1;

        let outcome = if !matched {
            SearchOutcome::NotFound { word }
        } else if progress.found_words.contains(&word) {
            SearchOutcome::AlreadyFound { word }
        } else {
            progress.found_words.push(word.clone());
            progress.score += self.points_per_word;
            let corrected_from = (word != typed.to_lowercase()).then(|| typed.to_string());
            SearchOutcome::Found {
                word,
                corrected_from,
            }
        };

        log::info!(
            "story {}: {:?} -> {:?} (score {}, attempts {})",
            story.id,
            typed,
            outcome,
            progress.score,
            progress.attempts
        );
        self.input.clear();
        outcome
    }

    /// 選択中のストーリーの進行状況を消す (選択はそのまま)
    pub fn reset(&mut self) {
        if let Some(index) = self.selected {
            log::info!("reset progress for story index {index}");
            self.progress.remove(&index);
        }
        self.input.clear();
    }

    // --------------------------------------------------
    // 表示用の値 (毎回計算する)
    // --------------------------------------------------

    fn current_progress(&self) -> Option<&Progress> {
        self.selected.and_then(|index| self.progress.get(&index))
    }

    pub fn found_words(&self) -> &[String] {
        self.current_progress()
            .map(|p| p.found_words.as_slice())
            .unwrap_or(&[])
    }

    pub fn score(&self) -> u32 {
        self.current_progress().map_or(0, |p| p.score)
    }

    pub fn attempts(&self) -> u32 {
        self.current_progress().map_or(0, |p| p.attempts)
    }

    /// 見つけた単語数 / 対象単語数 を % で (四捨五入)
    /// ストーリー未選択、または対象単語が 0 個なら 0
    pub fn progress_percentage(&self) -> u32 {
        let Some(story) = self.selected_story() else {
            return 0;
        };
        let total = story.target_words.len();
        if total == 0 {
            return 0;
        }
        (100.0 * self.found_words().len() as f64 / total as f64).round() as u32
    }

    /// まだ見つけていない対象単語を先頭から最大 max_hints 個
    pub fn hints(&self) -> Vec<&str> {
        let Some(story) = self.selected_story() else {
            return Vec::new();
        };
        let found = self.found_words();
        story
            .target_words
            .iter()
            .filter(|target| !found.contains(&target.to_lowercase()))
            .take(self.max_hints)
            .map(String::as_str)
            .collect()
    }

    /// 対象単語をすべて見つけたか
    pub fn is_complete(&self) -> bool {
        let Some(story) = self.selected_story() else {
            return false;
        };
        let found = self.found_words();
        story
            .target_words
            .iter()
            .all(|target| found.contains(&target.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::{Difficulty, StoryId, StoryTheme};
    use pretty_assertions::assert_eq;

    fn story(id: u64, content: &str, targets: &[&str]) -> Story {
        Story {
            id: StoryId::Number(id),
            title: format!("Story {id}"),
            icon: "*".to_string(),
            difficulty: Difficulty::Easy,
            content: content.to_string(),
            target_words: targets.iter().map(|t| t.to_string()).collect(),
            theme: StoryTheme::Plain,
        }
    }

    /// 組み込みストーリーの後ろにテスト用ストーリーを足したゲーム
    /// 戻り値の usize はテスト用ストーリーの先頭位置
    fn game_with(stories: Vec<Story>) -> (Game, usize) {
        let added = stories.len();
        let catalog = Catalog::new(stories);
        let first = catalog.len() - added;
        (Game::new(catalog, SpellingCorrector::default()), first)
    }

    fn dog_cat_game() -> Game {
        let (mut game, index) = game_with(vec![story(100, "the dog ran", &["dog", "cat"])]);
        assert!(game.select_story(index));
        game
    }

    #[test]
    fn dog_kat_cat_scenario() {
        let mut game = dog_cat_game();

        assert_eq!(
            game.submit_search("dog"),
            SearchOutcome::Found {
                word: "dog".to_string(),
                corrected_from: None
            }
        );
        assert_eq!(game.score(), 10);
        assert_eq!(game.found_words(), ["dog"]);

        assert_eq!(
            game.submit_search("kat"),
            SearchOutcome::NotFound {
                word: "kat".to_string()
            }
        );
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.score(), 10);

        assert!(matches!(game.submit_search("cat"), SearchOutcome::Found { .. }));
        assert_eq!(game.score(), 20);
        assert_eq!(game.attempts(), 3);
        assert_eq!(game.progress_percentage(), 100);
        assert!(game.is_complete());
    }

    #[test]
    fn target_word_matches_in_any_case() {
        let mut game = dog_cat_game();
        assert!(matches!(game.submit_search("CaT"), SearchOutcome::Found { .. }));
        assert_eq!(game.found_words(), ["cat"]);
    }

    #[test]
    fn same_word_twice_scores_once() {
        let mut game = dog_cat_game();
        game.submit_search("dog");
        assert_eq!(
            game.submit_search("DOG"),
            SearchOutcome::AlreadyFound {
                word: "dog".to_string()
            }
        );
        assert_eq!(game.found_words().len(), 1);
        assert_eq!(game.score(), 10);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn blank_or_unselected_submission_is_ignored() {
        let (mut game, _) = game_with(vec![story(100, "the dog ran", &["dog"])]);
        assert_eq!(game.submit_search("dog"), SearchOutcome::Ignored);

        let mut game = dog_cat_game();
        assert_eq!(game.submit_search("   "), SearchOutcome::Ignored);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn misspelling_is_corrected_with_notice() {
        let (mut game, index) = game_with(vec![story(
            100,
            "What a beautiful day.",
            &["beautiful"],
        )]);
        game.select_story(index);

        let outcome = game.submit_search("bewtiful");
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                word: "beautiful".to_string(),
                corrected_from: Some("bewtiful".to_string()),
            }
        );
        assert_eq!(
            outcome.correction_notice().as_deref(),
            Some(
                "Great! I found \"beautiful\" in the story! (I corrected \"bewtiful\" to \"beautiful\")"
            )
        );
    }

    #[test]
    fn case_only_difference_has_no_notice() {
        let mut game = dog_cat_game();
        let outcome = game.submit_search("  Dog ");
        assert_eq!(outcome.correction_notice(), None);
    }

    #[test]
    fn reset_keeps_selection() {
        let mut game = dog_cat_game();
        game.submit_search("dog");
        game.push_char('c');
        game.reset();

        assert_eq!(game.score(), 0);
        assert_eq!(game.attempts(), 0);
        assert!(game.found_words().is_empty());
        assert_eq!(game.input(), "");
        assert!(game.selected_story().is_some());
    }

    #[test]
    fn progress_is_zero_without_selection() {
        let (game, _) = game_with(Vec::new());
        assert_eq!(game.progress_percentage(), 0);
        assert!(game.hints().is_empty());
        assert!(!game.is_complete());
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let (mut game, index) =
            game_with(vec![story(100, "one two three", &["one", "two", "three"])]);
        game.select_story(index);
        game.submit_search("one");
        assert_eq!(game.progress_percentage(), 33);
        game.submit_search("two");
        assert_eq!(game.progress_percentage(), 67);
    }

    #[test]
    fn empty_target_list_has_zero_progress() {
        let (mut game, index) = game_with(vec![story(100, "nothing to find", &[])]);
        game.select_story(index);
        game.submit_search("nothing");
        assert_eq!(game.progress_percentage(), 0);
    }

    #[test]
    fn hints_skip_found_words_and_keep_order() {
        let (mut game, index) = game_with(vec![story(
            100,
            "",
            &["Apple", "banana", "cherry", "date", "elder"],
        )]);
        game.select_story(index);
        assert_eq!(game.hints(), ["Apple", "banana", "cherry"]);

        game.submit_search("apple");
        game.submit_search("cherry");
        assert_eq!(game.hints(), ["banana", "date", "elder"]);

        game.submit_search("banana");
        game.submit_search("date");
        game.submit_search("elder");
        assert!(game.hints().is_empty());
        assert!(game.is_complete());
    }

    #[test]
    fn max_hints_is_configurable() {
        let (game, index) = game_with(vec![story(100, "", &["a", "b", "c"])]);
        let mut game = game.with_max_hints(1);
        game.select_story(index);
        assert_eq!(game.hints(), ["a"]);
    }

    #[test]
    fn points_per_word_is_configurable() {
        let (game, index) = game_with(vec![story(100, "the dog", &["dog"])]);
        let mut game = game.with_points_per_word(25);
        game.select_story(index);
        game.submit_search("dog");
        assert_eq!(game.score(), 25);
    }

    #[test]
    fn switching_stories_does_not_carry_progress() {
        let (mut game, first) = game_with(vec![
            story(100, "the dog ran", &["dog"]),
            story(101, "the cow sat", &["cow"]),
        ]);
        let second = first + 1;

        game.select_story(first);
        game.submit_search("dog");
        game.deselect();

        game.select_story(second);
        assert_eq!(game.score(), 0);
        assert!(game.found_words().is_empty());

        game.deselect();
        game.select_story(first);
        assert_eq!(game.score(), 10);
        assert_eq!(game.found_words(), ["dog"]);
    }

    #[test]
    fn submit_input_clears_input_and_keeps_it_when_ignored() {
        let mut game = dog_cat_game();
        for c in "dog".chars() {
            game.push_char(c);
        }
        assert!(matches!(game.submit_input(), SearchOutcome::Found { .. }));
        assert_eq!(game.input(), "");

        game.push_char(' ');
        assert_eq!(game.submit_input(), SearchOutcome::Ignored);
        assert_eq!(game.input(), " ");

        game.backspace();
        game.push_char('x');
        assert!(matches!(game.submit_input(), SearchOutcome::NotFound { .. }));
        assert_eq!(game.input(), "");
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let (mut game, _) = game_with(Vec::new());
        let len = game.catalog().len();
        assert!(!game.select_story(len));
        assert!(game.selected_story().is_none());
    }
}
