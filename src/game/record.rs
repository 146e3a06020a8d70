use crate::core::{Board, Color, Move};
use crate::game::turn::Outcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const KIFU_DIR: &str = "kifu";

/// 棋譜
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 開始局面
    pub initial: Board,
    pub first: Color,
    pub black_name: String,
    pub white_name: String,
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
    pub played_at: String,
}

impl GameRecord {
    pub fn new(initial: &Board, first: Color, black_name: &str, white_name: &str) -> Self {
        GameRecord {
            initial: initial.clone(),
            first,
            black_name: black_name.to_string(),
            white_name: white_name.to_string(),
            moves: Vec::new(),
            outcome: None,
            played_at: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn save(&self, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        self.save_as(dir, "game")
    }

    /// `<dir>/<prefix>_<timestamp>.json`
    pub fn save_as(&self, dir: impl AsRef<Path>, prefix: &str) -> anyhow::Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let path = dir.join(format!(
            "{}_{}.json",
            prefix,
            chrono::Local::now().format("%Y%m%d_%H%M%S%3f")
        ));
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(path)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// 複数ディレクトリの棋譜ファイル一覧 (新しい順)
///
/// Missing directories are skipped. Files are ordered by the timestamp at
/// the end of their name, so `game_*` and `game_0001_*` records interleave.
pub fn list_records<P: AsRef<Path>>(dirs: &[P]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = dirs
        .iter()
        .filter_map(|dir| std::fs::read_dir(dir).ok())
        .flat_map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort_by(|a, b| timestamp_key(b).cmp(&timestamp_key(a)).then_with(|| b.cmp(a)));
    files
}

/// `<prefix>_<YYYYmmdd>_<HHMMSSmmm>.json` -> `YYYYmmdd_HHMMSSmmm`
fn timestamp_key(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let mut parts = stem.rsplitn(3, '_');
    match (parts.next(), parts.next()) {
        (Some(time), Some(date)) => format!("{}_{}", date, time),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_key() {
        assert_eq!(
            timestamp_key(Path::new("kifu/game_20260101_120000123.json")),
            "20260101_120000123"
        );
        assert_eq!(
            timestamp_key(Path::new("selfplay_kifu/game_0007_20260102_080000000.json")),
            "20260102_080000000"
        );
    }

    #[test]
    fn test_list_records_merges_dirs() {
        let root = std::env::temp_dir().join(format!("reversi_list_{}", std::process::id()));
        let kifu = root.join("kifu");
        let selfplay = root.join("selfplay_kifu");
        std::fs::create_dir_all(&kifu).unwrap();
        std::fs::create_dir_all(&selfplay).unwrap();

        std::fs::write(kifu.join("game_20260101_100000000.json"), "{}").unwrap();
        std::fs::write(kifu.join("game_20260103_100000000.json"), "{}").unwrap();
        std::fs::write(kifu.join("notes.txt"), "").unwrap();
        std::fs::write(selfplay.join("game_0001_20260102_100000000.json"), "{}").unwrap();

        let files = list_records(&[kifu.clone(), selfplay.clone(), root.join("missing")]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "game_20260103_100000000.json",
                "game_0001_20260102_100000000.json",
                "game_20260101_100000000.json",
            ]
        );

        std::fs::remove_dir_all(&root).unwrap();
    }
}
