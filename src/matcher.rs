// ============================================
// src/matcher.rs
// 単語がストーリーに含まれているかの判定
// ============================================

use crate::stories::Story;

/// `word` (スペル補正済み) が本文に部分一致するか、
/// 対象単語リストに完全一致 (大文字小文字は無視) すれば true
pub fn word_in_story(word: &str, story: &Story) -> bool {
    let word = word.to_lowercase();
    story.content.to_lowercase().contains(&word)
        || story
            .target_words
            .iter()
            .any(|target| target.to_lowercase() == word)
}
