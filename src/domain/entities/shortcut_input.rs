//! # ShortcutInput Entity
//!
//! ホスト（ショートカット）から渡される入力の表現

/// ショートカットパラメータ
///
/// 単一のファイルパス、またはファイルパスの配列
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParameter {
    Single(String),
    Many(Vec<String>),
}

impl ShortcutParameter {
    /// パスの数から適切なバリアントを作成
    ///
    /// 1件なら `Single`、それ以外は `Many`
    pub fn from_paths(mut paths: Vec<String>) -> Self {
        if paths.len() == 1 {
            Self::Single(paths.remove(0))
        } else {
            Self::Many(paths)
        }
    }

    /// 含まれるパスを順番通りに返す
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Single(path) => vec![path.as_str()],
            Self::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    /// パスが1件もないかどうか
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(path) => path.is_empty(),
            Self::Many(paths) => paths.is_empty(),
        }
    }
}

/// ホストからの入力
///
/// プレーンテキストはフローごとに位置で解釈される
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutInput {
    /// ショートカットパラメータ（未指定の場合は `None`）
    pub shortcut_parameter: Option<ShortcutParameter>,
    /// プレーンテキスト引数（位置で解釈）
    pub plain_texts: Vec<String>,
}

impl ShortcutInput {
    /// 新しい入力を作成
    pub fn new(shortcut_parameter: Option<ShortcutParameter>, plain_texts: Vec<String>) -> Self {
        Self {
            shortcut_parameter,
            plain_texts,
        }
    }

    /// `index` 番目のプレーンテキストを返す
    ///
    /// 空文字列は未指定として扱う
    pub fn plain_text(&self, index: usize) -> Option<&str> {
        self.plain_texts
            .get(index)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}
