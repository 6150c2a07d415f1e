// ============================================
// src/spelling.rs
// よくあるスペルミス -> 正しい単語 の辞書
// ============================================

use std::collections::HashMap;

/// 組み込みのスペルミス辞書 (キー・値ともに小文字)
const CORRECTIONS: &[(&str, &str)] = &[
    // beautiful
    ("bewtiful", "beautiful"),
    ("beutiful", "beautiful"),
    ("beautifull", "beautiful"),
    ("butiful", "beautiful"),
    // friend
    ("frend", "friend"),
    ("freind", "friend"),
    ("friedn", "friend"),
    ("frends", "friends"),
    ("freinds", "friends"),
    // magic
    ("majic", "magic"),
    ("magik", "magic"),
    ("majical", "magical"),
    ("magicle", "magical"),
    // forest / animals
    ("forrest", "forest"),
    ("rabit", "rabbit"),
    ("rabbet", "rabbit"),
    ("animels", "animals"),
    ("anamals", "animals"),
    ("flowars", "flowers"),
    ("flours", "flowers"),
    // adventure / treasure
    ("adventcher", "adventure"),
    ("adventur", "adventure"),
    ("secrit", "secret"),
    ("seecret", "secret"),
    ("rainbo", "rainbow"),
    ("tresure", "treasure"),
    ("treasur", "treasure"),
    ("treshure", "treasure"),
    ("goldin", "golden"),
    ("gardin", "garden"),
    ("hapy", "happy"),
    ("happi", "happy"),
    // castle
    ("kindom", "kingdom"),
    ("kingdum", "kingdom"),
    ("princes", "princess"),
    ("princiss", "princess"),
    ("castel", "castle"),
    ("casle", "castle"),
    ("mountin", "mountain"),
    ("mountian", "mountain"),
    ("crowne", "crown"),
    ("mistery", "mystery"),
    ("mystry", "mystery"),
    ("wizzard", "wizard"),
    ("wizerd", "wizard"),
    ("clus", "clues"),
    ("journy", "journey"),
    ("jurney", "journey"),
    ("dragen", "dragon"),
    ("dragin", "dragon"),
    ("suprise", "surprise"),
    ("surprize", "surprise"),
    ("birthdy", "birthday"),
    ("brithday", "birthday"),
    ("partie", "party"),
    // ocean
    ("ocian", "ocean"),
    ("oshun", "ocean"),
    ("turtel", "turtle"),
    ("turtul", "turtle"),
    ("sleepie", "sleepy"),
    ("dolfin", "dolphin"),
    ("dolphen", "dolphin"),
    ("wavs", "waves"),
    ("bubbels", "bubbles"),
    ("corel", "coral"),
    ("dreem", "dream"),
    // space
    ("captin", "captain"),
    ("robbot", "robot"),
    ("rokit", "rocket"),
    ("rockit", "rocket"),
    ("mision", "mission"),
    ("planit", "planet"),
    ("cloulds", "clouds"),
    ("silvar", "silver"),
    ("staars", "stars"),
    ("dimonds", "diamonds"),
    ("comit", "comet"),
    ("alians", "aliens"),
    ("galaxie", "galaxy"),
    ("galexy", "galaxy"),
    ("discovary", "discovery"),
];

/// 辞書を HashMap にして返す
pub fn create_correction_mapping() -> HashMap<String, String> {
    CORRECTIONS
        .iter()
        .map(|(wrong, right)| (wrong.to_string(), right.to_string()))
        .collect()
}

/// スペル補正器
/// 起動時に一度だけ作って、以降は読み取り専用
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    corrections: HashMap<String, String>,
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self {
            corrections: create_correction_mapping(),
        }
    }
}

impl SpellingCorrector {
    /// 設定ファイルの追加辞書をマージする (キーも値も小文字に揃える)
    pub fn with_extra<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (wrong, right) in extra {
            self.corrections
                .insert(wrong.as_ref().to_lowercase(), right.as_ref().to_lowercase());
        }
        self
    }

    /// 小文字にして辞書を引く
    /// 見つからなければ入力をそのまま返す (大文字小文字も元のまま)
    pub fn correct<'a>(&'a self, word: &'a str) -> &'a str {
        match self.corrections.get(&word.to_lowercase()) {
            Some(canonical) => canonical,
            None => word,
        }
    }

    /// 辞書の件数
    pub fn len(&self) -> usize {
        self.corrections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_known_key_maps_to_its_word() {
        let corrector = SpellingCorrector::default();
        for (wrong, right) in CORRECTIONS {
            assert_eq!(corrector.correct(wrong), *right, "correcting {wrong}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let corrector = SpellingCorrector::default();
        assert_eq!(corrector.correct("BewTiful"), "beautiful");
    }

    #[test]
    fn unknown_words_pass_through_unchanged() {
        let corrector = SpellingCorrector::default();
        assert_eq!(corrector.correct("Dragon"), "Dragon");
        assert_eq!(corrector.correct("kat"), "kat");
        assert_eq!(corrector.correct(""), "");
    }

    #[test]
    fn extra_entries_are_lowercased_and_merged() {
        let corrector = SpellingCorrector::default().with_extra([("KAT", "Cat")]);
        assert_eq!(corrector.correct("kat"), "cat");
        assert_eq!(corrector.len(), CORRECTIONS.len() + 1);
    }

    #[test]
    fn keys_and_values_are_lowercase() {
        for (wrong, right) in CORRECTIONS {
            assert_eq!(*wrong, wrong.to_lowercase());
            assert_eq!(*right, right.to_lowercase());
        }
    }
}
