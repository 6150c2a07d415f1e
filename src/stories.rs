/*
 * src/stories.rs
 * ストーリーデータを管理するモジュール
 * (組み込みストーリー + 外部から渡される生成ストーリー)
 */

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// 難易度
/// 生成ストーリーの自由な表記 ("Beginner" など) は Other にそのまま残す
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(label),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(label) => label.as_str(),
        };
        f.write_str(label)
    }
}

/// ストーリー ID (生成ストーリーは数値でも文字列でもよい)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum StoryId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryId::Number(n) => write!(f, "{n}"),
            StoryId::Text(text) => f.write_str(text),
        }
    }
}

/// 表示テーマ (色は ui.rs 側で決める)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StoryTheme {
    Forest,
    Royal,
    Ocean,
    Sunset,
    Space,
    #[default]
    Plain,
}

impl From<String> for StoryTheme {
    /// テーマ名、または "from-green-400 to-blue-500" のようなグラデーション指定から変換する
    /// 知らない名前は Plain 扱い
    fn from(name: String) -> Self {
        let name = name.to_lowercase();
        match name.as_str() {
            "forest" => return StoryTheme::Forest,
            "royal" => return StoryTheme::Royal,
            "ocean" => return StoryTheme::Ocean,
            "sunset" => return StoryTheme::Sunset,
            "space" => return StoryTheme::Space,
            _ => {}
        }

        // グラデーション指定は先頭の色で判定
        const GRADIENT_COLORS: &[(&str, StoryTheme)] = &[
            ("green", StoryTheme::Forest),
            ("emerald", StoryTheme::Forest),
            ("purple", StoryTheme::Royal),
            ("pink", StoryTheme::Royal),
            ("blue", StoryTheme::Ocean),
            ("cyan", StoryTheme::Ocean),
            ("orange", StoryTheme::Sunset),
            ("yellow", StoryTheme::Sunset),
            ("red", StoryTheme::Sunset),
            ("indigo", StoryTheme::Space),
            ("gray", StoryTheme::Space),
        ];
        GRADIENT_COLORS
            .iter()
            .filter_map(|(color, theme)| name.find(color).map(|pos| (pos, *theme)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, theme)| theme)
            .unwrap_or_default()
    }
}

/// ストーリー 1 件分のデータ
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub icon: String,
    pub difficulty: Difficulty,
    /// 本文
    pub content: String,
    /// 見つけてほしい単語 (順番はヒント表示にそのまま使う)
    pub target_words: Vec<String>,
    #[serde(rename = "color", default)]
    pub theme: StoryTheme,
}

/// 組み込みストーリーの定義用 (const に置けるよう &'static str だけで持つ)
struct StorySeed {
    id: u64,
    title: &'static str,
    icon: &'static str,
    difficulty: &'static str,
    content: &'static str,
    target_words: &'static [&'static str],
    theme: StoryTheme,
}

impl From<&StorySeed> for Story {
    fn from(seed: &StorySeed) -> Self {
        Self {
            id: StoryId::Number(seed.id),
            title: seed.title.to_string(),
            icon: seed.icon.to_string(),
            difficulty: Difficulty::from(seed.difficulty.to_string()),
            content: seed.content.to_string(),
            target_words: seed.target_words.iter().map(|w| w.to_string()).collect(),
            theme: seed.theme,
        }
    }
}

/// 組み込みストーリー一覧 (やさしい順)
const PREDEFINED_STORIES: &[StorySeed] = &[
    StorySeed {
        id: 1,
        title: "The Magic Forest Adventure",
        icon: "🌲",
        difficulty: "Easy",
        content: "Once upon a time, in a beautiful magic forest, there lived a little rabbit named Luna. \
The forest was full of wonderful animals and colorful flowers. One sunny morning, Luna decided to go on \
an adventure to find the secret rainbow treasure hidden deep in the forest.

She met a wise old owl who told her, “Follow the path of golden leaves, and you will find what you seek.” \
Luna hopped along the path, making friends with a friendly squirrel and a singing bird. Together, they \
discovered a magical clearing where the rainbow treasure sparkled in the sunlight.

The treasure was not gold or jewels, but a beautiful garden where all the forest animals could play \
together happily forever.",
        target_words: &[
            "beautiful", "magic", "forest", "little", "rabbit", "animals", "flowers", "adventure",
            "secret", "rainbow", "treasure", "golden", "friends", "magical", "garden", "happy",
        ],
        theme: StoryTheme::Forest,
    },
    StorySeed {
        id: 2,
        title: "The Sleepy Sea Turtle",
        icon: "🐢",
        difficulty: "Easy",
        content: "Deep in the blue ocean lived a sleepy sea turtle called Pip. Every morning the \
little fish swam past his shell and sang, “Wake up, Pip!” But Pip just yawned and dreamed about \
shiny shells and warm sand.

One day a friendly dolphin splashed beside him. “Come and play!” she laughed. Pip opened one eye, then \
the other. Together they raced through the waves, chased bubbles, and visited a coral reef full of \
bright colors.

When the moon came out, Pip was tired again, but this time he was smiling. Playing with a friend was \
even better than a dream.",
        target_words: &[
            "ocean", "turtle", "sleepy", "fish", "shell", "sand", "friendly", "dolphin", "waves",
            "bubbles", "coral", "moon", "friend", "dream",
        ],
        theme: StoryTheme::Ocean,
    },
    StorySeed {
        id: 3,
        title: "Princess and the Castle Mystery",
        icon: "👑",
        difficulty: "Medium",
        content: "In a faraway kingdom, Princess Aria lived in a magnificent castle on top of a high \
mountain. The castle had many secret rooms and hidden passages. One day, the princess discovered that \
her favorite magical crown had disappeared from the royal treasure room.

She decided to solve this mystery herself. With the help of her loyal friend, a clever wizard named \
Merlin, they searched every room in the castle. They found strange clues: golden footprints, mysterious \
notes, and magical sparkles in the air.

After a long journey through the castle’s secret passages, they discovered that a playful dragon had \
borrowed the crown to decorate his cave for a surprise party. The dragon wanted to celebrate the \
princess’s birthday! Princess Aria was so happy that she invited the dragon to live in the castle and \
become the royal party planner.",
        target_words: &[
            "kingdom", "princess", "castle", "mountain", "secret", "magical", "crown", "treasure",
            "mystery", "wizard", "clues", "golden", "journey", "dragon", "surprise", "birthday",
            "party",
        ],
        theme: StoryTheme::Royal,
    },
    StorySeed {
        id: 4,
        title: "The Rocket to the Rainbow Planet",
        icon: "🚀",
        difficulty: "Hard",
        content: "Captain Milo and his robot helper Bolt built a shiny rocket in the backyard. \
Their mission was to reach the Rainbow Planet, a faraway world that glowed in seven different colors.

They counted down, “Three, two, one, blast off!” The rocket zoomed past the clouds, past the silver \
moon, and into the quiet darkness of space. Bright stars twinkled all around them like tiny diamonds. \
Bolt checked the map while Milo steered carefully around a giant comet.

When they finally landed, friendly aliens with purple antennas welcomed them with a delicious picnic. \
Milo learned that exploring is wonderful, but making new friends across the galaxy is the greatest \
discovery of all.",
        target_words: &[
            "captain", "robot", "rocket", "mission", "planet", "rainbow", "colors", "clouds",
            "silver", "moon", "space", "stars", "diamonds", "comet", "aliens", "antennas",
            "picnic", "galaxy", "discovery",
        ],
        theme: StoryTheme::Space,
    },
];

/// 組み込みストーリーを Story に変換して返す
pub fn predefined_stories() -> Vec<Story> {
    PREDEFINED_STORIES.iter().map(Story::from).collect()
}

/// MARK:生成ストーリー (JSON 配列) をファイルから読み込む
/// 中身の妥当性チェックはしない (JSON の構造エラーだけ報告する)
pub fn load_generated(path: &Path) -> Result<Vec<Story>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stories: Vec<Story> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "loaded {} generated stories from {}",
        stories.len(),
        path.display()
    );
    Ok(stories)
}

/// ストーリー一覧 (組み込み → 生成 の順に連結したもの)
/// 起動時に一度だけ作り、以降は変更しない
#[derive(Debug, Clone)]
pub struct Catalog {
    stories: Vec<Story>,
}

impl Catalog {
    pub fn new(generated: Vec<Story>) -> Self {
        let mut stories = predefined_stories();
        stories.extend(generated);
        Self { stories }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn get(&self, index: usize) -> Option<&Story> {
        self.stories.get(index)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
